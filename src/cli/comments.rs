use clap::Args;

use crate::client::FigmaClient;
use crate::config::SyncConfig;
use crate::error::Result;
use crate::output::{plural, Printer};

/// Print a file's comments as JSON
#[derive(Args, Debug)]
pub struct CommentsArgs {
    /// Figma file key (default: design_system_file_key from config)
    pub file_key: Option<String>,
}

pub async fn run(args: CommentsArgs, config: &SyncConfig, printer: &Printer) -> Result<()> {
    let file_key = super::resolve_file_key(args.file_key.as_deref(), config)?;
    let client = FigmaClient::new(config)?;

    let comments = client.fetch_comments(&file_key).await?;
    printer.info("Found", &plural(comments.len(), "comment", "comments"));
    super::print_json(&comments)
}
