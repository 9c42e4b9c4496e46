//! CSS custom properties and SCSS variables.

use crate::types::{DesignTokenGroup, TokenValue};

/// Render a single `:root` block of custom properties.
///
/// Each group gets a `/* name */` comment; groups are separated by a blank line.
pub fn render_css(groups: &[DesignTokenGroup]) -> String {
    let mut output = String::new();
    output.push_str(":root {\n");

    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&format!("  /* {} */\n", group.name));
        for token in group.tokens() {
            output.push_str(&format!(
                "  --{}: {};\n",
                variable_name(&group.name, &token.name),
                css_value(&token.value)
            ));
        }
    }

    output.push_str("}\n");
    output
}

/// Render SCSS `$variables`, one `// name` comment per group.
pub fn render_scss(groups: &[DesignTokenGroup]) -> String {
    let mut output = String::new();

    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&format!("// {}\n", group.name));
        for token in group.tokens() {
            output.push_str(&format!(
                "${}: {};\n",
                variable_name(&group.name, &token.name),
                css_value(&token.value)
            ));
        }
    }

    output
}

/// Variable name without prefix: `{group}-{token}`, lower-cased, with every
/// character outside `[a-z0-9-]` replaced by `-`.
pub fn variable_name(group: &str, token: &str) -> String {
    format!("{}-{}", group, token)
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
                c
            } else {
                '-'
            }
        })
        .collect()
}

fn css_value(value: &TokenValue) -> String {
    match value {
        TokenValue::Color(hex) => hex.clone(),
        TokenValue::Spacing(px) => format!("{}px", px),
        TokenValue::Typography(style) => quote(style),
        // Plain JSON is valid as an unparsed custom property value
        TokenValue::Component(component) => {
            serde_json::to_string(component).unwrap_or_else(|_| quote(&component.id))
        }
    }
}

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::tests::sample_groups;
    use crate::types::{ComponentValue, DesignToken, TokenType};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_css() {
        let expected = "\
:root {
  /* colors */
  --colors-button-fill-0: #ff0000;
  --colors-card-surface-stroke-1: #1a2b3c80;

  /* spacing */
  --spacing-button-radius: 12px;
}
";
        assert_eq!(render_css(&sample_groups()), expected);
    }

    #[test]
    fn test_render_scss() {
        insta::assert_snapshot!(render_scss(&sample_groups()), @r"
// colors
$colors-button-fill-0: #ff0000;
$colors-card-surface-stroke-1: #1a2b3c80;

// spacing
$spacing-button-radius: 12px;
");
    }

    #[test]
    fn test_variable_names_are_sanitized() {
        assert_eq!(variable_name("colors", "Primary Blue/500_fill_0"), "colors-primary-blue-500-fill-0");
        assert_eq!(variable_name("spacing", "Ünïcode_width"), "spacing--n-code-width");

        for group in sample_groups() {
            for token in group.tokens() {
                let name = variable_name(&group.name, &token.name);
                assert!(name
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
            }
        }
    }

    #[test]
    fn test_empty_groups() {
        assert_eq!(render_css(&[]), ":root {\n}\n");
        assert_eq!(render_scss(&[]), "");
    }

    #[test]
    fn test_typography_and_component_values() {
        let groups = vec![
            DesignTokenGroup::new(
                TokenType::Typography,
                vec![DesignToken::new("Heading_text_style", TokenValue::Typography("S:1,2".to_string()))],
            )
            .unwrap(),
            DesignTokenGroup::new(
                TokenType::Component,
                vec![DesignToken::new(
                    "Chip",
                    TokenValue::Component(ComponentValue {
                        id: "3:4".to_string(),
                        kind: "COMPONENT".to_string(),
                        description: String::new(),
                    }),
                )],
            )
            .unwrap(),
        ];

        let css = render_css(&groups);
        assert!(css.contains("  --typography-heading-text-style: \"S:1,2\";\n"));
        assert!(css.contains(
            "  --components-chip: {\"id\":\"3:4\",\"type\":\"COMPONENT\",\"description\":\"\"};\n"
        ));
    }
}
