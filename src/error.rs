use miette::Diagnostic;
use thiserror::Error;

/// Main error type for tokensync operations
#[derive(Error, Diagnostic, Debug)]
pub enum SyncError {
    #[error("IO error: {0}")]
    #[diagnostic(code(tokensync::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(tokensync::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Fetch error: {message}")]
    #[diagnostic(code(tokensync::fetch))]
    Fetch {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Unsupported format: {format}")]
    #[diagnostic(
        code(tokensync::format),
        help("Supported formats are json, css, scss and ts")
    )]
    UnsupportedFormat { format: String },

    #[error("Render error: {message}")]
    #[diagnostic(code(tokensync::render))]
    Render { message: String },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(tokensync::config))]
    Configuration {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(tokensync::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Token name collision in group '{group}': {}", .names.join(", "))]
    #[diagnostic(
        code(tokensync::collision),
        help("Rename the duplicated layers in Figma, or run without --strict")
    )]
    Collision { group: String, names: Vec<String> },
}

impl SyncError {
    /// Build a fetch error from any displayable cause.
    pub fn fetch(cause: impl std::fmt::Display) -> Self {
        SyncError::Fetch {
            message: cause.to_string(),
            help: None,
        }
    }

    /// The error raised when no access token is configured.
    pub fn missing_token() -> Self {
        SyncError::Configuration {
            message: "FIGMA_ACCESS_TOKEN is not set".to_string(),
            help: Some(
                "Export a Figma personal access token, or set access_token in tokensync.yaml"
                    .to_string(),
            ),
        }
    }
}

pub type Result<T> = std::result::Result<T, SyncError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_format_names_format() {
        let err = SyncError::UnsupportedFormat {
            format: "yaml".to_string(),
        };
        assert_eq!(err.to_string(), "Unsupported format: yaml");
    }

    #[test]
    fn test_collision_lists_names() {
        let err = SyncError::Collision {
            group: "colors".to_string(),
            names: vec!["Card_fill_0".to_string(), "Icon_stroke_0".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Token name collision in group 'colors': Card_fill_0, Icon_stroke_0"
        );
    }

    #[test]
    fn test_fetch_keeps_cause_message() {
        let err = SyncError::fetch("HTTP 404 Not Found");
        assert_eq!(err.to_string(), "Fetch error: HTTP 404 Not Found");
    }
}
