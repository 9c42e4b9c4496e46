//! JSON output.

use crate::error::{Result, SyncError};
use crate::types::DesignTokenGroup;

/// Pretty-print the group array with two-space indentation.
pub fn render_json(groups: &[DesignTokenGroup]) -> Result<String> {
    let mut output = serde_json::to_string_pretty(groups).map_err(|e| SyncError::Render {
        message: format!("Failed to serialize tokens: {}", e),
    })?;
    output.push('\n');
    Ok(output)
}
