//! File response validation.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::types::{ComponentMeta, DesignFile, StyleMeta};

use super::node::parse_node;
use super::value::Obj;
use super::SchemaError;

/// Validate a `GET /files/:key` response body.
///
/// Missing `components`/`styles` maps normalize to empty maps.
pub fn parse_file(value: &Value) -> Result<DesignFile, SchemaError> {
    let root = Obj::new(value, "")?;

    let name = root.req_str("name")?;
    let version = root.req_str("version")?;
    let last_modified = root.req_str("lastModified")?;

    let document_value = value
        .get("document")
        .filter(|v| !v.is_null())
        .ok_or_else(|| SchemaError::new("document", "required field is missing"))?;
    let document = parse_node(document_value, "document")?;

    let mut components = BTreeMap::new();
    for (id, obj) in root.entries("components")? {
        let component = ComponentMeta {
            key: obj.opt_str("key")?,
            name: obj.req_str("name")?,
            description: obj.opt_str("description")?.unwrap_or_default(),
            kind: obj
                .opt_str("type")?
                .unwrap_or_else(|| "COMPONENT".to_string()),
            component_set_id: obj.opt_str("componentSetId")?,
        };
        components.insert(id.to_string(), component);
    }

    let mut styles = BTreeMap::new();
    for (id, obj) in root.entries("styles")? {
        let style = StyleMeta {
            key: obj.opt_str("key")?,
            name: obj.req_str("name")?,
            style_type: obj.req_str("styleType")?,
            description: obj.opt_str("description")?.unwrap_or_default(),
        };
        styles.insert(id.to_string(), style);
    }

    Ok(DesignFile {
        name,
        version,
        last_modified,
        document,
        components,
        styles,
    })
}
