//! Validation issues and reports.

use std::fmt;

/// A single structural problem found in a design file.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// Machine-readable code (e.g. "tokensync::validate::no-components").
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Optional help text suggesting how to fix the issue.
    pub help: Option<String>,
}

impl Diagnostic {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            help: None,
        }
    }

    /// Add help text to this diagnostic.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Outcome of validating one file: valid exactly when there are no issues.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationResult {
    issues: Vec<Diagnostic>,
}

impl ValidationResult {
    /// Create an empty (valid) result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an issue.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.issues.push(diagnostic);
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.issues.extend(other.issues);
    }

    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Issue messages, in the order they were found.
    pub fn messages(&self) -> Vec<&str> {
        self.issues.iter().map(|d| d.message.as_str()).collect()
    }

    /// Iterate over issues.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.issues.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result_is_valid() {
        let result = ValidationResult::new();
        assert!(result.is_valid());
        assert_eq!(result.len(), 0);
    }

    #[test]
    fn test_issue_invalidates() {
        let mut result = ValidationResult::new();
        result.push(Diagnostic::new("tokensync::test", "something broke"));

        assert!(!result.is_valid());
        assert_eq!(result.messages(), vec!["something broke"]);
    }

    #[test]
    fn test_merge_keeps_order() {
        let mut a = ValidationResult::new();
        a.push(Diagnostic::new("tokensync::a", "first"));

        let mut b = ValidationResult::new();
        b.push(Diagnostic::new("tokensync::b", "second"));

        a.merge(b);
        assert_eq!(a.messages(), vec!["first", "second"]);
    }

    #[test]
    fn test_diagnostic_with_help() {
        let d = Diagnostic::new("tokensync::test", "no styles")
            .with_help("Publish styles from the library");
        assert_eq!(d.help.as_deref(), Some("Publish styles from the library"));
        assert_eq!(d.to_string(), "no styles");
    }
}
