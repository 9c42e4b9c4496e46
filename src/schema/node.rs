//! Node tree validation.

use serde_json::Value;

use crate::types::{Bounds, Node, NodeKind, Paint, Rgba, StyleRefs, Visual};

use super::value::Obj;
use super::SchemaError;

type Result<T> = std::result::Result<T, SchemaError>;

/// Deepest node nesting accepted below the root.
pub const MAX_NODE_DEPTH: usize = 256;

/// Validate a node and its whole subtree.
///
/// `path` is used as the prefix for error locations. Trees nested deeper
/// than [`MAX_NODE_DEPTH`] are rejected at the first `children` array past
/// the limit.
pub fn parse_node(value: &Value, path: &str) -> Result<Node> {
    let obj = Obj::new(value, path)?;
    node_from(&obj, 0)
}

fn node_from(obj: &Obj<'_>, depth: usize) -> Result<Node> {
    let id = obj.req_str("id")?;
    let name = obj.req_str("name")?;
    let type_name = obj.req_str("type")?;
    let visual = visual_from(obj)?;

    let items = obj.opt_array("children")?;
    if !items.is_empty() && depth >= MAX_NODE_DEPTH {
        return Err(SchemaError::new(
            obj.field_path("children"),
            format!("node tree is nested deeper than {} levels", MAX_NODE_DEPTH),
        ));
    }

    let children = obj
        .objects_in("children", items)?
        .iter()
        .map(|child| node_from(child, depth + 1))
        .collect::<Result<Vec<_>>>()?;

    Ok(Node {
        id,
        name,
        kind: NodeKind::from_type(&type_name, visual),
        children,
    })
}

fn visual_from(obj: &Obj<'_>) -> Result<Visual> {
    let fills = paints_from(obj, "fills")?;
    let strokes = paints_from(obj, "strokes")?;

    let bounds = match obj.opt_obj("absoluteBoundingBox")? {
        Some(bbox) => Some(Bounds {
            x: bbox.opt_f64("x")?.unwrap_or(0.0),
            y: bbox.opt_f64("y")?.unwrap_or(0.0),
            width: bbox.req_f64("width")?,
            height: bbox.req_f64("height")?,
        }),
        None => None,
    };

    let styles = match obj.opt_obj("styles")? {
        Some(styles) => StyleRefs {
            fill: styles.opt_str("fill")?,
            stroke: styles.opt_str("stroke")?,
            text: styles.opt_str("text")?,
            effect: styles.opt_str("effect")?,
            grid: styles.opt_str("grid")?,
        },
        None => StyleRefs::default(),
    };

    Ok(Visual {
        fills,
        strokes,
        bounds,
        corner_radius: obj.opt_f64("cornerRadius")?,
        styles,
    })
}

fn paints_from(obj: &Obj<'_>, key: &str) -> Result<Vec<Paint>> {
    let items = obj.opt_array(key)?;
    obj.objects_in(key, items)?
        .iter()
        .map(paint_from)
        .collect()
}

fn paint_from(obj: &Obj<'_>) -> Result<Paint> {
    let kind = obj.req_str("type")?;
    if kind != "SOLID" {
        return Ok(Paint::Other(kind));
    }

    let color = obj.req_obj("color")?;
    Ok(Paint::Solid(Rgba::new(
        color.req_f64("r")?,
        color.req_f64("g")?,
        color.req_f64("b")?,
        color.opt_f64("a")?.unwrap_or(1.0),
    )))
}
