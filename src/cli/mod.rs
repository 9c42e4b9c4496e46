pub mod comments;
pub mod completions;
pub mod files;
pub mod images;
pub mod projects;
pub mod sync;
pub mod validate;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use serde::Serialize;

use crate::config::SyncConfig;
use crate::error::{Result, SyncError};

/// tokensync - Sync design tokens from Figma into code
#[derive(Parser, Debug)]
#[command(name = "tokensync")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (default: ./tokensync.yaml if present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract tokens from a file and write them in one format
    Sync(sync::SyncArgs),

    /// Check a file's structure without extracting tokens
    Validate(validate::ValidateArgs),

    /// List a team's projects as JSON
    Projects(projects::ProjectsArgs),

    /// List a project's files as JSON
    Files(files::FilesArgs),

    /// Request rendered image URLs for nodes
    Images(images::ImagesArgs),

    /// Print a file's comments as JSON
    Comments(comments::CommentsArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

impl Cli {
    /// Log filter directive for the chosen verbosity.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// The file key from the command line, or the configured design system file.
pub(crate) fn resolve_file_key(arg: Option<&str>, config: &SyncConfig) -> Result<String> {
    arg.or(config.design_system_file_key.as_deref())
        .filter(|k| !k.trim().is_empty())
        .map(str::to_string)
        .ok_or_else(|| SyncError::Configuration {
            message: "No file key given".to_string(),
            help: Some(
                "Pass --file-key, or set FIGMA_DESIGN_SYSTEM_FILE_KEY / design_system_file_key"
                    .to_string(),
            ),
        })
}

/// Resolve an id from the command line or configuration.
pub(crate) fn resolve_id(
    arg: Option<&str>,
    configured: Option<&str>,
    what: &str,
    env_var: &str,
) -> Result<String> {
    arg.or(configured)
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
        .ok_or_else(|| SyncError::Configuration {
            message: format!("No {} given", what),
            help: Some(format!("Pass it on the command line or set {}", env_var)),
        })
}

/// Pretty-print a value as JSON on stdout.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(|e| SyncError::Render {
        message: format!("Failed to serialize output: {}", e),
    })?;
    println!("{}", json);
    Ok(())
}
