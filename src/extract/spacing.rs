//! Spacing tokens from node dimensions and corner radii.

use crate::types::{DesignToken, Node, TokenValue};

/// Emit `{node}_width`, `{node}_height` and `{node}_radius` tokens.
///
/// Values are rounded to whole pixels. Zero or absent dimensions and radii
/// produce nothing.
pub fn extract_spacing(root: &Node) -> Vec<DesignToken> {
    let mut tokens = Vec::new();

    for node in root.descendants() {
        let Some(visual) = node.visual() else {
            continue;
        };

        if let Some(bounds) = visual.bounds {
            if bounds.width > 0.0 {
                tokens.push(spacing_token(node, "width", bounds.width));
            }
            if bounds.height > 0.0 {
                tokens.push(spacing_token(node, "height", bounds.height));
            }
        }

        if let Some(radius) = visual.corner_radius.filter(|r| *r > 0.0) {
            tokens.push(spacing_token(node, "radius", radius));
        }
    }

    tokens
}

fn spacing_token(node: &Node, role: &str, value: f64) -> DesignToken {
    DesignToken::new(
        format!("{}_{}", node.name, role),
        TokenValue::Spacing(value.round() as i64),
    )
    .with_tags([role, node.type_name()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Bounds, NodeKind, Visual};

    fn frame(name: &str, width: f64, height: f64, radius: Option<f64>) -> Node {
        let visual = Visual {
            bounds: Some(Bounds {
                width,
                height,
                ..Default::default()
            }),
            corner_radius: radius,
            ..Default::default()
        };
        Node::new(name, name, NodeKind::from_type("FRAME", visual))
    }

    #[test]
    fn test_zero_width_and_radius_skipped() {
        let tokens = extract_spacing(&frame("Divider", 0.0, 50.0, Some(0.0)));

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].name, "Divider_height");
        assert_eq!(tokens[0].value, TokenValue::Spacing(50));
        assert_eq!(tokens[0].tags, vec!["height", "FRAME"]);
    }

    #[test]
    fn test_values_rounded() {
        let tokens = extract_spacing(&frame("Card", 319.6, 48.4, Some(7.5)));
        let values: Vec<&TokenValue> = tokens.iter().map(|t| &t.value).collect();

        assert_eq!(
            values,
            vec![
                &TokenValue::Spacing(320),
                &TokenValue::Spacing(48),
                &TokenValue::Spacing(8),
            ]
        );
        assert_eq!(tokens[2].name, "Card_radius");
    }

    #[test]
    fn test_no_bounds_no_tokens() {
        let node = Node::new("1", "Loose", NodeKind::from_type("VECTOR", Visual::default()));
        assert!(extract_spacing(&node).is_empty());
    }

    #[test]
    fn test_document_and_canvas_skipped() {
        let tree = Node::new("0:0", "Document", NodeKind::Document)
            .with_child(Node::new("0:1", "Page", NodeKind::Canvas).with_child(frame("Box", 10.0, 10.0, None)));

        let names: Vec<String> = extract_spacing(&tree).into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["Box_width", "Box_height"]);
    }
}
