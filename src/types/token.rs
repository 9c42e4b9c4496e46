//! Design tokens and token groups.

use std::fmt;

use serde::Serialize;

use crate::error::{Result, SyncError};

/// Token kind. Doubles as the display category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Color,
    Spacing,
    Typography,
    Component,
}

impl TokenType {
    /// All token types, in output group order.
    pub const ALL: [TokenType; 4] = [
        TokenType::Color,
        TokenType::Spacing,
        TokenType::Typography,
        TokenType::Component,
    ];

    /// Name of the group collecting tokens of this type.
    pub fn group_name(self) -> &'static str {
        match self {
            TokenType::Color => "colors",
            TokenType::Spacing => "spacing",
            TokenType::Typography => "typography",
            TokenType::Component => "components",
        }
    }

    /// Fixed human description for the group.
    pub fn group_description(self) -> &'static str {
        match self {
            TokenType::Color => "Color tokens extracted from fills and strokes",
            TokenType::Spacing => "Spacing tokens extracted from dimensions and corner radii",
            TokenType::Typography => "Typography tokens extracted from text style references",
            TokenType::Component => "Component tokens extracted from published components",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TokenType::Color => "color",
            TokenType::Spacing => "spacing",
            TokenType::Typography => "typography",
            TokenType::Component => "component",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Component descriptor carried by component tokens.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentValue {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
}

/// A token value. Serializes as the bare value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TokenValue {
    /// Hex colour string (`#rrggbb` or `#rrggbbaa`).
    Color(String),
    /// Whole-pixel length.
    Spacing(i64),
    /// Opaque style reference id.
    Typography(String),
    Component(ComponentValue),
}

impl TokenValue {
    pub fn token_type(&self) -> TokenType {
        match self {
            TokenValue::Color(_) => TokenType::Color,
            TokenValue::Spacing(_) => TokenType::Spacing,
            TokenValue::Typography(_) => TokenType::Typography,
            TokenValue::Component(_) => TokenType::Component,
        }
    }
}

/// A single named design token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesignToken {
    /// Derived from the source layer name; not unique.
    pub name: String,
    pub value: TokenValue,
    #[serde(rename = "type")]
    pub token_type: TokenType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: TokenType,
    /// Provenance: role (`fill`, `stroke`, ...) then source node type.
    pub tags: Vec<String>,
}

impl DesignToken {
    /// Create a token; type and category follow the value.
    pub fn new(name: impl Into<String>, value: TokenValue) -> Self {
        let token_type = value.token_type();
        Self {
            name: name.into(),
            value,
            token_type,
            description: None,
            category: token_type,
            tags: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

/// A named bundle of tokens sharing one type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesignTokenGroup {
    pub name: String,
    pub category: TokenType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    tokens: Vec<DesignToken>,
}

impl DesignTokenGroup {
    /// Wrap tokens of `category` into the standard group for that type.
    ///
    /// Fails if any token has a different type.
    pub fn new(category: TokenType, tokens: Vec<DesignToken>) -> Result<Self> {
        if let Some(stray) = tokens.iter().find(|t| t.token_type != category) {
            return Err(SyncError::Validation {
                message: format!(
                    "Token '{}' has type {} but group '{}' holds {} tokens",
                    stray.name,
                    stray.token_type,
                    category.group_name(),
                    category
                ),
                help: None,
            });
        }

        Ok(Self {
            name: category.group_name().to_string(),
            category,
            description: Some(category.group_description().to_string()),
            tokens,
        })
    }

    pub fn tokens(&self) -> &[DesignToken] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
