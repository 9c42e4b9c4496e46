//! Core data types for design files and tokens.

mod colour;
mod file;
mod node;
mod project;
mod token;

pub use colour::Rgba;
pub use file::{ComponentMeta, DesignFile, StyleMeta};
pub use node::{
    Bounds, ContainerKind, Descendants, Node, NodeKind, Paint, ShapeKind, StyleRefs, Visual,
};
pub use project::{FileRef, ProjectSummary, TeamProjectsSummary};
pub use token::{ComponentValue, DesignToken, DesignTokenGroup, TokenType, TokenValue};
