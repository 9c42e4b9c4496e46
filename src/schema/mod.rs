//! Structural validation of raw API responses.
//!
//! Every parser here takes the decoded JSON body and either returns a
//! strictly-typed value or a [`SchemaError`] naming the offending field path.
//! Nothing downstream re-checks shape: a [`DesignFile`](crate::types::DesignFile)
//! that leaves this module always has a document root and (possibly empty)
//! component and style maps.

mod file;
mod media;
mod node;
mod project;
mod value;

use thiserror::Error;

pub use file::parse_file;
pub use media::{parse_comments, parse_images};
pub use node::{parse_node, MAX_NODE_DEPTH};
pub use project::{parse_project, parse_team_projects};

/// A response did not match the expected shape.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("invalid response at `{path}`: {message}")]
pub struct SchemaError {
    /// Dotted path to the offending field, e.g. `document.children[2].fills[0].color`.
    pub path: String,
    pub message: String,
}

impl SchemaError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl From<SchemaError> for crate::error::SyncError {
    fn from(err: SchemaError) -> Self {
        crate::error::SyncError::Fetch {
            message: err.to_string(),
            help: Some("The API returned a payload in an unexpected shape".to_string()),
        }
    }
}
