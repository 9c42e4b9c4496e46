//! Validated design file snapshot.

use std::collections::BTreeMap;

use serde::Serialize;

use super::Node;

/// A design file as fetched from the API.
///
/// Immutable once validated; it only lives for a single sync run.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignFile {
    pub name: String,
    pub version: String,
    pub last_modified: String,
    /// Root of the node tree.
    pub document: Node,
    /// Component id -> metadata. Ordered by id so output is stable.
    pub components: BTreeMap<String, ComponentMeta>,
    /// Style id -> metadata.
    pub styles: BTreeMap<String, StyleMeta>,
}

/// Published component metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentMeta {
    pub key: Option<String>,
    pub name: String,
    pub description: String,
    /// Component kind tag; `COMPONENT` unless the API says otherwise.
    #[serde(rename = "type")]
    pub kind: String,
    pub component_set_id: Option<String>,
}

/// Shared style metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleMeta {
    pub key: Option<String>,
    pub name: String,
    /// `FILL`, `TEXT`, `EFFECT` or `GRID`.
    pub style_type: String,
    pub description: String,
}

impl ComponentMeta {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            key: None,
            name: name.into(),
            description: String::new(),
            kind: "COMPONENT".to_string(),
            component_set_id: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl DesignFile {
    /// Create a file around a document root with no components or styles.
    pub fn new(name: impl Into<String>, document: Node) -> Self {
        Self {
            name: name.into(),
            version: String::new(),
            last_modified: String::new(),
            document,
            components: BTreeMap::new(),
            styles: BTreeMap::new(),
        }
    }
}
