//! Typography tokens from text style references.

use crate::types::{DesignToken, Node, TokenValue};

/// Emit `{node}_text_style` for every node that references a text style.
///
/// The value is the raw style id. Resolving it to font family and size
/// would take another API call, which this pass does not make.
pub fn extract_typography(root: &Node) -> Vec<DesignToken> {
    root.descendants()
        .filter_map(|node| {
            let style = node.visual()?.styles.text.as_ref()?;
            Some(
                DesignToken::new(
                    format!("{}_text_style", node.name),
                    TokenValue::Typography(style.clone()),
                )
                .with_tags(["text-style", node.type_name()]),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{NodeKind, StyleRefs, Visual};

    fn text(name: &str, style: Option<&str>) -> Node {
        let visual = Visual {
            styles: StyleRefs {
                text: style.map(str::to_string),
                ..Default::default()
            },
            ..Default::default()
        };
        Node::new(name, name, NodeKind::from_type("TEXT", visual))
    }

    #[test]
    fn test_text_style_passthrough() {
        let tree = Node::new("0:0", "Document", NodeKind::Document)
            .with_child(text("Heading", Some("S:123,4:5")))
            .with_child(text("Caption", None));

        let tokens = extract_typography(&tree);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].name, "Heading_text_style");
        assert_eq!(tokens[0].value, TokenValue::Typography("S:123,4:5".to_string()));
        assert_eq!(tokens[0].tags, vec!["text-style", "TEXT"]);
    }
}
