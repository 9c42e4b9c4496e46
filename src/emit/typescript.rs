//! TypeScript constants module.

use crate::error::{Result, SyncError};
use crate::types::DesignTokenGroup;

/// Render a `designTokens` object literal plus a `DesignTokens` type alias.
///
/// Property keys are token names with every non-alphanumeric character
/// stripped. Two tokens that strip to the same key both appear in the
/// literal; resolving that is left to the caller.
pub fn render_typescript(groups: &[DesignTokenGroup]) -> Result<String> {
    let mut output = String::new();
    output.push_str("export const designTokens = {\n");

    for group in groups {
        output.push_str(&format!("  {}: {{\n", quote_if_needed(&group.name)));
        for token in group.tokens() {
            let value = serde_json::to_string(&token.value).map_err(|e| SyncError::Render {
                message: format!("Failed to serialize token '{}': {}", token.name, e),
            })?;
            output.push_str(&format!("    {}: {},\n", property_key(&token.name), value));
        }
        output.push_str("  },\n");
    }

    output.push_str("} as const;\n\n");
    output.push_str("export type DesignTokens = typeof designTokens;\n");
    Ok(output)
}

/// Object key for a token: non-alphanumerics stripped, quoted when the
/// result is not a valid identifier.
pub fn property_key(token_name: &str) -> String {
    let stripped: String = token_name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();
    quote_if_needed(&stripped)
}

fn quote_if_needed(key: &str) -> String {
    let is_identifier = key
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');

    if is_identifier {
        key.to_string()
    } else {
        format!("\"{}\"", key)
    }
}
