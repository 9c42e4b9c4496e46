//! Sync configuration (tokensync.yaml + environment).
//!
//! Values load from an optional YAML file first, then environment variables
//! override them. Every recognized option is kept on [`SyncConfig`] even when
//! a command does not use it, so external tooling can rely on the shape.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{Result, SyncError};

/// The name of the optional configuration file.
pub const CONFIG_FILENAME: &str = "tokensync.yaml";

/// Default API root.
pub const DEFAULT_API_BASE: &str = "https://api.figma.com/v1";

/// Environment variables, in the order they are documented.
pub mod env {
    pub const ACCESS_TOKEN: &str = "FIGMA_ACCESS_TOKEN";
    pub const TEAM_ID: &str = "FIGMA_TEAM_ID";
    pub const PROJECT_ID: &str = "FIGMA_PROJECT_ID";
    pub const DESIGN_SYSTEM_FILE_KEY: &str = "FIGMA_DESIGN_SYSTEM_FILE_KEY";
    pub const WEBHOOK_URL: &str = "FIGMA_WEBHOOK_URL";
    pub const SYNC_INTERVAL: &str = "FIGMA_SYNC_INTERVAL";
    pub const MAX_RETRIES: &str = "FIGMA_MAX_RETRIES";
    pub const RETRY_DELAY: &str = "FIGMA_RETRY_DELAY";
    pub const API_BASE: &str = "FIGMA_API_BASE";
}

/// Configuration shared by all commands.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Personal access token. Required by every command that talks to the API.
    pub access_token: Option<String>,

    pub team_id: Option<String>,

    pub project_id: Option<String>,

    /// File key used when a command is run without one.
    pub design_system_file_key: Option<String>,

    /// Endpoint notified after each successful sync.
    pub webhook_url: Option<String>,

    /// Delay between runs in `sync --watch`, in milliseconds.
    pub sync_interval_ms: u64,

    /// Extra attempts after a failed request. 0 means one request, no retries.
    pub max_retries: u32,

    /// Delay before the first retry, in milliseconds. Doubles per attempt.
    pub retry_delay_ms: u64,

    pub api_base: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            access_token: None,
            team_id: None,
            project_id: None,
            design_system_file_key: None,
            webhook_url: None,
            sync_interval_ms: 300_000,
            max_retries: 0,
            retry_delay_ms: 1_000,
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

impl fmt::Debug for SyncConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncConfig")
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .field("team_id", &self.team_id)
            .field("project_id", &self.project_id)
            .field("design_system_file_key", &self.design_system_file_key)
            .field("webhook_url", &self.webhook_url)
            .field("sync_interval_ms", &self.sync_interval_ms)
            .field("max_retries", &self.max_retries)
            .field("retry_delay_ms", &self.retry_delay_ms)
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl SyncConfig {
    /// Load configuration for a command run.
    ///
    /// Reads `path` if given (it must exist), otherwise `tokensync.yaml` in the
    /// working directory if present, then applies the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let base = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Path::new(CONFIG_FILENAME);
                if default_path.exists() {
                    Self::from_file(default_path)?
                } else {
                    Self::default()
                }
            }
        };

        base.with_env(|key| std::env::var(key).ok())
    }

    /// Load configuration from a YAML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SyncError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| SyncError::Configuration {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })
    }

    /// Overlay values from an environment lookup. Empty values are ignored.
    pub fn with_env<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = get(env::ACCESS_TOKEN) {
            self.access_token = Some(v);
        }
        if let Some(v) = get(env::TEAM_ID) {
            self.team_id = Some(v);
        }
        if let Some(v) = get(env::PROJECT_ID) {
            self.project_id = Some(v);
        }
        if let Some(v) = get(env::DESIGN_SYSTEM_FILE_KEY) {
            self.design_system_file_key = Some(v);
        }
        if let Some(v) = get(env::WEBHOOK_URL) {
            self.webhook_url = Some(v);
        }
        if let Some(v) = get(env::SYNC_INTERVAL) {
            self.sync_interval_ms = parse_number(env::SYNC_INTERVAL, &v)?;
        }
        if let Some(v) = get(env::MAX_RETRIES) {
            self.max_retries = parse_number(env::MAX_RETRIES, &v)?;
        }
        if let Some(v) = get(env::RETRY_DELAY) {
            self.retry_delay_ms = parse_number(env::RETRY_DELAY, &v)?;
        }
        if let Some(v) = get(env::API_BASE) {
            self.api_base = v;
        }

        Ok(self)
    }

    /// The access token, or a configuration error if none is set.
    pub fn require_token(&self) -> Result<&str> {
        self.access_token
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(SyncError::missing_token)
    }

    pub fn sync_interval(&self) -> Duration {
        Duration::from_millis(self.sync_interval_ms)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| SyncError::Configuration {
        message: format!("{} must be a non-negative integer, got '{}'", key, value),
        help: None,
    })
}
