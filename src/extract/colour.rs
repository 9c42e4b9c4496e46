//! Colour tokens from solid fills and strokes.

use crate::types::{DesignToken, Node, Paint, TokenValue};

/// Emit one colour token per solid fill and stroke, in pre-order.
///
/// Tokens are named `{node}_fill_{i}` / `{node}_stroke_{i}` where `i` is the
/// paint's index in the node's full paint list, so non-solid paints still
/// consume an index.
pub fn extract_colors(root: &Node) -> Vec<DesignToken> {
    let mut tokens = Vec::new();

    for node in root.descendants() {
        let Some(visual) = node.visual() else {
            continue;
        };
        push_paints(&mut tokens, node, &visual.fills, "fill");
        push_paints(&mut tokens, node, &visual.strokes, "stroke");
    }

    tokens
}

fn push_paints(tokens: &mut Vec<DesignToken>, node: &Node, paints: &[Paint], role: &str) {
    for (index, paint) in paints.iter().enumerate() {
        if let Paint::Solid(colour) = paint {
            tokens.push(
                DesignToken::new(
                    format!("{}_{}_{}", node.name, role, index),
                    TokenValue::Color(colour.to_hex()),
                )
                .with_tags([role, node.type_name()]),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{NodeKind, Rgba, Visual};

    fn rect(name: &str, fills: Vec<Paint>, strokes: Vec<Paint>) -> Node {
        let visual = Visual {
            fills,
            strokes,
            ..Default::default()
        };
        Node::new(name, name, NodeKind::from_type("RECTANGLE", visual))
    }

    fn names(tokens: &[DesignToken]) -> Vec<&str> {
        tokens.iter().map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn test_fill_and_stroke() {
        let node = rect(
            "Button",
            vec![Paint::Solid(Rgba::rgb(1.0, 0.0, 0.0))],
            vec![Paint::Solid(Rgba::new(0.0, 0.0, 1.0, 0.5))],
        );

        let tokens = extract_colors(&node);
        assert_eq!(names(&tokens), vec!["Button_fill_0", "Button_stroke_0"]);
        assert_eq!(tokens[0].value, TokenValue::Color("#ff0000".to_string()));
        assert_eq!(tokens[0].tags, vec!["fill", "RECTANGLE"]);
        assert_eq!(tokens[1].value, TokenValue::Color("#0000ff80".to_string()));
        assert_eq!(tokens[1].tags, vec!["stroke", "RECTANGLE"]);
    }

    #[test]
    fn test_non_solid_consumes_index() {
        let node = rect(
            "Hero",
            vec![
                Paint::Other("IMAGE".to_string()),
                Paint::Solid(Rgba::WHITE),
            ],
            vec![],
        );

        assert_eq!(names(&extract_colors(&node)), vec!["Hero_fill_1"]);
    }

    #[test]
    fn test_pre_order_across_children() {
        let tree = Node::new("0:0", "Document", NodeKind::Document).with_child(
            rect("Card", vec![Paint::Solid(Rgba::WHITE)], vec![])
                .with_child(rect("Badge", vec![Paint::Solid(Rgba::BLACK)], vec![])),
        );
        let tree = tree.with_child(rect("Footer", vec![Paint::Solid(Rgba::BLACK)], vec![]));

        assert_eq!(
            names(&extract_colors(&tree)),
            vec!["Card_fill_0", "Badge_fill_0", "Footer_fill_0"]
        );
    }

    #[test]
    fn test_duplicate_names_are_kept() {
        let tree = Node::new("0:0", "Document", NodeKind::Document)
            .with_child(rect("Icon", vec![Paint::Solid(Rgba::WHITE)], vec![]))
            .with_child(rect("Icon", vec![Paint::Solid(Rgba::BLACK)], vec![]));

        let tokens = extract_colors(&tree);
        assert_eq!(names(&tokens), vec!["Icon_fill_0", "Icon_fill_0"]);
        assert_ne!(tokens[0].value, tokens[1].value);
    }

    #[test]
    fn test_no_paints_no_tokens() {
        let tree = Node::new("0:0", "Document", NodeKind::Document)
            .with_child(rect("Empty", vec![], vec![]));
        assert!(extract_colors(&tree).is_empty());
    }
}
