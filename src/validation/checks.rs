//! Structural checks for a fetched design file.
//!
//! Each check takes a `&DesignFile` and returns a `ValidationResult`.

use crate::types::DesignFile;

use super::diagnostic::{Diagnostic, ValidationResult};

/// The file publishes at least one component.
pub fn check_components(file: &DesignFile) -> ValidationResult {
    let mut result = ValidationResult::new();

    if file.components.is_empty() {
        result.push(
            Diagnostic::new(
                "tokensync::validate::no-components",
                format!("File '{}' has no components", file.name),
            )
            .with_help("Publish components from the design system library"),
        );
    }

    result
}

/// The file defines at least one shared style.
pub fn check_styles(file: &DesignFile) -> ValidationResult {
    let mut result = ValidationResult::new();

    if file.styles.is_empty() {
        result.push(
            Diagnostic::new(
                "tokensync::validate::no-styles",
                format!("File '{}' has no styles", file.name),
            )
            .with_help("Define color and text styles so tokens have stable names"),
        );
    }

    result
}

/// The tree is rooted at a `DOCUMENT` node.
pub fn check_document(file: &DesignFile) -> ValidationResult {
    let mut result = ValidationResult::new();

    if !file.document.is_document() {
        result.push(Diagnostic::new(
            "tokensync::validate::no-document",
            format!(
                "File '{}' has no document root (root node is {})",
                file.name,
                file.document.type_name()
            ),
        ));
    }

    result
}
