//! Post-sync webhook notification.

use std::path::Path;

use serde::Serialize;

use crate::error::{Result, SyncError};
use crate::types::DesignTokenGroup;

/// Token count for one group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupCount {
    pub name: String,
    pub count: usize,
}

/// Summary of a completed sync, as posted to the webhook.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncSummary {
    pub file_key: String,
    pub output: String,
    pub format: String,
    pub groups: Vec<GroupCount>,
}

impl SyncSummary {
    pub fn new(file_key: &str, output: &Path, format: &str, groups: &[DesignTokenGroup]) -> Self {
        Self {
            file_key: file_key.to_string(),
            output: output.display().to_string(),
            format: format.to_string(),
            groups: groups
                .iter()
                .map(|g| GroupCount {
                    name: g.name.clone(),
                    count: g.len(),
                })
                .collect(),
        }
    }

    /// Total tokens across all groups.
    pub fn total(&self) -> usize {
        self.groups.iter().map(|g| g.count).sum()
    }
}

/// POST the summary as JSON.
///
/// Uses a plain client so the API token never leaves for the webhook host.
pub async fn notify_webhook(url: &str, summary: &SyncSummary) -> Result<()> {
    let response = reqwest::Client::new()
        .post(url)
        .json(summary)
        .send()
        .await
        .map_err(|e| SyncError::fetch(format!("Webhook request failed: {}", e)))?;

    let status = response.status();
    if !status.is_success() {
        return Err(SyncError::fetch(format!("Webhook returned HTTP {}", status)));
    }

    Ok(())
}
