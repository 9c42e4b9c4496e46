//! Token extraction.
//!
//! Four independent passes run over one fetched file: colours, spacing and
//! typography walk the node tree, components read the component map. The
//! orchestrator wraps each non-empty result into a [`DesignTokenGroup`].
//!
//! # Example
//!
//! ```ignore
//! use tokensync::extract::{extract_design_tokens, ExtractOptions};
//!
//! let groups = extract_design_tokens(&client, "FILE_KEY", &ExtractOptions::default()).await?;
//! for group in &groups {
//!     println!("{}: {} tokens", group.name, group.len());
//! }
//! ```

mod colour;
mod component;
mod spacing;
mod typography;

use std::collections::HashSet;

use tracing::{debug, info};

use crate::client::FigmaClient;
use crate::error::{Result, SyncError};
use crate::types::{DesignFile, DesignToken, DesignTokenGroup, TokenType};

pub use colour::extract_colors;
pub use component::extract_components;
pub use spacing::extract_spacing;
pub use typography::extract_typography;

/// Extraction settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractOptions {
    /// Fail on duplicate token names within a group instead of keeping them.
    pub strict: bool,
}

/// Fetch a file and extract its token groups.
///
/// Fetch and validation failures propagate unchanged; no partial group list
/// is returned.
pub async fn extract_design_tokens(
    client: &FigmaClient,
    file_key: &str,
    options: &ExtractOptions,
) -> Result<Vec<DesignTokenGroup>> {
    let file = client.fetch_file(file_key).await?;
    info!(file = %file.name, version = %file.version, "fetched design file");
    extract_groups(&file, options)
}

/// Run all extractors against an already-fetched file.
///
/// Groups come back in the order colors, spacing, typography, components;
/// empty groups are left out.
pub fn extract_groups(
    file: &DesignFile,
    options: &ExtractOptions,
) -> Result<Vec<DesignTokenGroup>> {
    let mut groups = Vec::new();

    for category in TokenType::ALL {
        let tokens = run_extractor(file, category);
        debug!(group = category.group_name(), count = tokens.len(), "extracted tokens");
        if tokens.is_empty() {
            continue;
        }

        let group = DesignTokenGroup::new(category, tokens)?;
        if options.strict {
            check_collisions(&group)?;
        }
        groups.push(group);
    }

    Ok(groups)
}

fn run_extractor(file: &DesignFile, category: TokenType) -> Vec<DesignToken> {
    match category {
        TokenType::Color => extract_colors(&file.document),
        TokenType::Spacing => extract_spacing(&file.document),
        TokenType::Typography => extract_typography(&file.document),
        TokenType::Component => extract_components(&file.components),
    }
}

/// Token names that occur more than once in a group, in first-seen order.
pub fn find_collisions(group: &DesignTokenGroup) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();

    for token in group.tokens() {
        let name = token.name.as_str();
        if !seen.insert(name) && reported.insert(name) {
            duplicates.push(name.to_string());
        }
    }

    duplicates
}

fn check_collisions(group: &DesignTokenGroup) -> Result<()> {
    let names = find_collisions(group);
    if names.is_empty() {
        Ok(())
    } else {
        Err(SyncError::Collision {
            group: group.name.clone(),
            names,
        })
    }
}
