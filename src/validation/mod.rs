//! Structural validation of design files.
//!
//! Runs a set of sanity checks against a fetched file and reports every
//! issue found. Used by both `tokensync validate` and `tokensync sync --validate`.

mod checks;
mod diagnostic;

pub use diagnostic::{Diagnostic, ValidationResult};

use tracing::warn;

use crate::client::FigmaClient;
use crate::output::Printer;
use crate::types::DesignFile;

/// Fetch a file and validate it.
///
/// A fetch failure does not propagate: it becomes the single issue of an
/// invalid result.
pub async fn validate_file(client: &FigmaClient, file_key: &str) -> ValidationResult {
    match client.fetch_file(file_key).await {
        Ok(file) => validate_design_file(&file),
        Err(e) => {
            warn!("validation fetch failed: {}", e);
            let mut result = ValidationResult::new();
            result.push(Diagnostic::new(
                "tokensync::validate::fetch",
                format!("Failed to fetch file '{}': {}", file_key, e),
            ));
            result
        }
    }
}

/// Run all checks against an already-fetched file. No check short-circuits.
pub fn validate_design_file(file: &DesignFile) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_components(file));
    result.merge(checks::check_styles(file));
    result.merge(checks::check_document(file));

    result
}

/// Print issues to stderr.
pub fn print_report(result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        eprintln!("  {}[{}]: {}", printer.severity("issue"), d.code, d.message);
        if let Some(help) = &d.help {
            eprintln!("    {}: {}", printer.dim("help"), help);
        }
    }

    if result.is_valid() {
        printer.success("Validated", "no issues found");
    } else {
        printer.error(
            "Invalid",
            &crate::output::plural(result.len(), "issue", "issues"),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ComponentMeta, Node, NodeKind, StyleMeta};

    #[test]
    fn test_empty_file_has_two_issues() {
        let file = DesignFile::new("Empty", Node::new("0:0", "Document", NodeKind::Document));
        let result = validate_design_file(&file);

        assert!(!result.is_valid());
        assert_eq!(result.len(), 2);
        assert_eq!(
            result.messages(),
            vec!["File 'Empty' has no components", "File 'Empty' has no styles"]
        );
    }

    #[test]
    fn test_complete_file_is_valid() {
        let mut file = DesignFile::new("Library", Node::new("0:0", "Document", NodeKind::Document));
        file.components
            .insert("1:1".to_string(), ComponentMeta::new("Button"));
        file.styles.insert(
            "S:1".to_string(),
            StyleMeta {
                key: Some("k".to_string()),
                name: "Heading".to_string(),
                style_type: "TEXT".to_string(),
                description: String::new(),
            },
        );

        assert!(validate_design_file(&file).is_valid());
    }
}
