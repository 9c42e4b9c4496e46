//! Token output formats.
//!
//! Renders a list of token groups to JSON, CSS custom properties, SCSS
//! variables or a TypeScript constants module. Rendering is pure; writing
//! the result to disk is a separate step.

mod css;
mod json;
mod typescript;

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Result, SyncError};
use crate::types::DesignTokenGroup;

pub use css::{render_css, render_scss, variable_name};
pub use json::render_json;
pub use typescript::{property_key, render_typescript};

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Json,
    Css,
    Scss,
    TypeScript,
}

impl Format {
    /// All supported formats.
    pub const ALL: [Format; 4] = [Format::Json, Format::Css, Format::Scss, Format::TypeScript];

    /// The name accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Css => "css",
            Format::Scss => "scss",
            Format::TypeScript => "ts",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = SyncError;

    fn from_str(s: &str) -> Result<Self> {
        Format::ALL
            .into_iter()
            .find(|format| format.name() == s)
            .ok_or_else(|| SyncError::UnsupportedFormat {
                format: s.to_string(),
            })
    }
}

/// Render groups in the given format.
pub fn render(groups: &[DesignTokenGroup], format: Format) -> Result<String> {
    match format {
        Format::Json => render_json(groups),
        Format::Css => Ok(render_css(groups)),
        Format::Scss => Ok(render_scss(groups)),
        Format::TypeScript => render_typescript(groups),
    }
}

/// Render groups in a format given by name.
///
/// Unknown names fail with [`SyncError::UnsupportedFormat`] before anything
/// is rendered.
pub fn render_named(groups: &[DesignTokenGroup], format: &str) -> Result<String> {
    render(groups, format.parse()?)
}

/// Write rendered output, creating the parent directory if needed.
///
/// Not atomic: a failure part-way through can leave a truncated file.
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| SyncError::Io {
                path: parent.to_path_buf(),
                message: format!("Failed to create output directory: {}", e),
            })?;
        }
    }

    fs::write(path, content).map_err(|e| SyncError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write tokens: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DesignToken, TokenType, TokenValue};

    /// Two groups, three tokens.
    pub(crate) fn sample_groups() -> Vec<DesignTokenGroup> {
        vec![
            DesignTokenGroup::new(
                TokenType::Color,
                vec![
                    DesignToken::new("Button_fill_0", TokenValue::Color("#ff0000".to_string()))
                        .with_tags(["fill", "RECTANGLE"]),
                    DesignToken::new("Card/Surface_stroke_1", TokenValue::Color("#1a2b3c80".to_string()))
                        .with_tags(["stroke", "FRAME"]),
                ],
            )
            .unwrap(),
            DesignTokenGroup::new(
                TokenType::Spacing,
                vec![DesignToken::new("Button_radius", TokenValue::Spacing(12))
                    .with_tags(["radius", "RECTANGLE"])],
            )
            .unwrap(),
        ]
    }

    #[test]
    fn test_parse_formats() {
        assert_eq!("json".parse::<Format>().unwrap(), Format::Json);
        assert_eq!("css".parse::<Format>().unwrap(), Format::Css);
        assert_eq!("scss".parse::<Format>().unwrap(), Format::Scss);
        assert_eq!("ts".parse::<Format>().unwrap(), Format::TypeScript);
        assert_eq!(Format::default(), Format::Json);
    }

    #[test]
    fn test_unsupported_format() {
        let err = render_named(&sample_groups(), "yaml").unwrap_err();
        match err {
            SyncError::UnsupportedFormat { format } => assert_eq!(format, "yaml"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_every_value_appears_once() {
        for format in Format::ALL {
            let output = render(&sample_groups(), format).unwrap();
            for value in ["#ff0000", "#1a2b3c80"] {
                assert_eq!(output.matches(value).count(), 1, "{value} in {format}");
            }
            // Spacing renders as `12` or `12px`; the digit run occurs once either way
            assert_eq!(output.matches(": 12").count(), 1, "radius in {format}");
        }
    }

    #[test]
    fn test_write_output_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokens").join("nested").join("tokens.css");

        write_output(&path, ":root {\n}\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), ":root {\n}\n");
    }
}
