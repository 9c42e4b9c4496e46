//! Authenticated client for the Figma REST API.
//!
//! Every method issues one GET (plus retries, if configured, except for
//! image exports), decodes the body and runs it through [`crate::schema`].
//! Any transport, status, decode or shape failure comes back as
//! [`SyncError::Fetch`] carrying the cause.

mod webhook;

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::SyncConfig;
use crate::error::{Result, SyncError};
use crate::schema;
use crate::types::{DesignFile, ProjectSummary};

pub use webhook::{notify_webhook, GroupCount, SyncSummary};

/// Header carrying the personal access token.
pub const TOKEN_HEADER: &str = "x-figma-token";

/// Rendered image format for [`FigmaClient::fetch_images`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ImageFormat {
    #[default]
    Png,
    Jpg,
    Svg,
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageFormat::Png => write!(f, "png"),
            ImageFormat::Jpg => write!(f, "jpg"),
            ImageFormat::Svg => write!(f, "svg"),
        }
    }
}

/// Image export parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageOptions {
    pub format: ImageFormat,
    /// Positive scale multiplier.
    pub scale: f64,
}

impl Default for ImageOptions {
    fn default() -> Self {
        Self {
            format: ImageFormat::Png,
            scale: 1.0,
        }
    }
}

/// Client bound to one API root and one access token.
pub struct FigmaClient {
    http: reqwest::Client,
    base_url: String,
    max_retries: u32,
    retry_delay: Duration,
}

/// A single failed attempt.
struct Failure {
    message: String,
    retryable: bool,
}

impl FigmaClient {
    /// Build a client from configuration.
    ///
    /// Fails with a configuration error if no access token is set.
    pub fn new(config: &SyncConfig) -> Result<Self> {
        let token = config.require_token()?;

        let mut value = HeaderValue::from_str(token).map_err(|_| SyncError::Configuration {
            message: "Access token contains characters not allowed in an HTTP header".to_string(),
            help: None,
        })?;
        value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(TOKEN_HEADER, value);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(format!("tokensync/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SyncError::Configuration {
                message: format!("Failed to build HTTP client: {}", e),
                help: None,
            })?;

        Ok(Self {
            http,
            base_url: config.api_base.trim_end_matches('/').to_string(),
            max_retries: config.max_retries,
            retry_delay: config.retry_delay(),
        })
    }

    /// Fetch and validate a design file.
    pub async fn fetch_file(&self, file_key: &str) -> Result<DesignFile> {
        require_non_empty("file key", file_key)?;
        let body = self
            .get_json(&format!("/files/{}", file_key), &[], self.max_retries)
            .await?;
        Ok(schema::parse_file(&body)?)
    }

    /// Fetch a project and its file list.
    pub async fn fetch_project(&self, project_id: &str) -> Result<ProjectSummary> {
        require_non_empty("project id", project_id)?;
        let body = self
            .get_json(&format!("/projects/{}/files", project_id), &[], self.max_retries)
            .await?;
        Ok(schema::parse_project(&body, project_id)?)
    }

    /// Fetch all projects of a team. A team without projects yields an empty list.
    pub async fn fetch_team_projects(&self, team_id: &str) -> Result<Vec<ProjectSummary>> {
        require_non_empty("team id", team_id)?;
        let body = self
            .get_json(&format!("/teams/{}/projects", team_id), &[], self.max_retries)
            .await?;
        Ok(schema::parse_team_projects(&body)?.projects)
    }

    /// Request rendered images for a set of nodes.
    ///
    /// Returns node id -> image URL; nodes the API could not render map to `None`.
    /// Exports are never retried, whatever `max_retries` says.
    pub async fn fetch_images(
        &self,
        file_key: &str,
        node_ids: &[String],
        options: ImageOptions,
    ) -> Result<BTreeMap<String, Option<String>>> {
        require_non_empty("file key", file_key)?;
        if node_ids.is_empty() {
            return Err(SyncError::Validation {
                message: "At least one node id is required".to_string(),
                help: None,
            });
        }
        if !(options.scale.is_finite() && options.scale > 0.0) {
            return Err(SyncError::Validation {
                message: format!("Image scale must be positive, got {}", options.scale),
                help: None,
            });
        }

        let query = [
            ("ids", node_ids.join(",")),
            ("format", options.format.to_string()),
            ("scale", options.scale.to_string()),
        ];
        let body = self
            .get_json(&format!("/images/{}", file_key), &query, 0)
            .await?;
        Ok(schema::parse_images(&body)?)
    }

    /// Fetch a file's comments as raw JSON objects.
    pub async fn fetch_comments(&self, file_key: &str) -> Result<Vec<Value>> {
        require_non_empty("file key", file_key)?;
        let body = self
            .get_json(&format!("/files/{}/comments", file_key), &[], self.max_retries)
            .await?;
        Ok(schema::parse_comments(&body)?)
    }

    /// GET with up to `max_retries` extra attempts on retryable failures.
    async fn get_json(
        &self,
        path: &str,
        query: &[(&str, String)],
        max_retries: u32,
    ) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        let mut attempt = 0;

        loop {
            match self.get_once(&url, query).await {
                Ok(body) => return Ok(body),
                Err(failure) if failure.retryable && attempt < max_retries => {
                    attempt += 1;
                    let delay = self
                        .retry_delay
                        .saturating_mul(2u32.saturating_pow(attempt - 1));
                    warn!(
                        "GET {} failed ({}), retrying in {:?} ({}/{})",
                        url, failure.message, delay, attempt, max_retries
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(failure) => return Err(SyncError::fetch(failure.message)),
            }
        }
    }

    async fn get_once(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> std::result::Result<Value, Failure> {
        debug!("GET {}", url);
        let response = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| Failure {
                message: format!("Request to {} failed: {}", url, e),
                retryable: true,
            })?;

        let status = response.status();
        debug!("GET {} -> {}", url, status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let body = body.trim();
            let message = if body.is_empty() {
                format!("HTTP {} from {}", status, url)
            } else {
                format!("HTTP {} from {}: {}", status, url, body)
            };
            return Err(Failure {
                message,
                retryable: status.is_server_error() || status.as_u16() == 429,
            });
        }

        let bytes = response.bytes().await.map_err(|e| Failure {
            message: format!("Failed to read response from {}: {}", url, e),
            retryable: true,
        })?;

        decode_json(&bytes).map_err(|e| Failure {
            message: format!("Invalid JSON from {}: {}", url, e),
            retryable: false,
        })
    }
}

/// Decode a response body with no nesting limit.
///
/// Every node level costs two JSON levels (object plus `children` array), so
/// serde_json's default limit of 128 would reject files about 64 layers deep.
/// Deep trees are bounded later by the schema's node depth limit.
fn decode_json(bytes: &[u8]) -> serde_json::Result<Value> {
    let mut de = serde_json::Deserializer::from_slice(bytes);
    de.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(value)
}

fn require_non_empty(what: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SyncError::Validation {
            message: format!("The {} must not be empty", what),
            help: None,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_requires_token() {
        let result = FigmaClient::new(&SyncConfig::default());
        assert!(matches!(result, Err(SyncError::Configuration { .. })));
    }

    #[test]
    fn test_new_trims_base_url() {
        let config = SyncConfig {
            access_token: Some("token".to_string()),
            api_base: "http://localhost:9999/v1/".to_string(),
            ..Default::default()
        };
        let client = FigmaClient::new(&config).unwrap();
        assert_eq!(client.base_url, "http://localhost:9999/v1");
    }

    #[test]
    fn test_decode_deeply_nested_json() {
        let depth = 500;
        let body = format!("{}{}", "[".repeat(depth), "]".repeat(depth));
        assert!(decode_json(body.as_bytes()).is_ok());
    }

    #[test]
    fn test_decode_rejects_trailing_garbage() {
        assert!(decode_json(b"{} {}").is_err());
        assert!(decode_json(b"<html>").is_err());
    }

    #[test]
    fn test_image_format_display() {
        assert_eq!(ImageFormat::Png.to_string(), "png");
        assert_eq!(ImageFormat::Jpg.to_string(), "jpg");
        assert_eq!(ImageFormat::Svg.to_string(), "svg");
        assert_eq!(ImageOptions::default().scale, 1.0);
    }

    #[tokio::test]
    async fn test_empty_file_key_rejected_before_request() {
        let config = SyncConfig {
            access_token: Some("token".to_string()),
            api_base: "http://127.0.0.1:1".to_string(),
            ..Default::default()
        };
        let client = FigmaClient::new(&config).unwrap();
        let err = client.fetch_file("  ").await.unwrap_err();
        assert!(matches!(err, SyncError::Validation { .. }));
    }
}
