//! tokensync - Sync design tokens from Figma into code
//!
//! Fetches a Figma file over the REST API, validates its shape, extracts
//! colour, spacing, typography and component tokens, and renders them as
//! JSON, CSS custom properties, SCSS variables or a TypeScript module.

pub mod cli;
pub mod client;
pub mod config;
pub mod emit;
pub mod error;
pub mod extract;
pub mod output;
pub mod schema;
pub mod types;
pub mod validation;

pub use client::{FigmaClient, ImageFormat, ImageOptions};
pub use config::SyncConfig;
pub use emit::{render, render_named, write_output, Format};
pub use error::{Result, SyncError};
pub use extract::{extract_design_tokens, extract_groups, ExtractOptions};
pub use schema::SchemaError;
pub use types::{
    ComponentMeta, DesignFile, DesignToken, DesignTokenGroup, Node, NodeKind, Rgba, StyleMeta,
    TokenType, TokenValue,
};
pub use validation::{validate_design_file, validate_file, Diagnostic, ValidationResult};
