use clap::Args;

use crate::client::FigmaClient;
use crate::config::{env, SyncConfig};
use crate::error::Result;
use crate::output::{plural, Printer};

/// List a project's files as JSON
#[derive(Args, Debug)]
pub struct FilesArgs {
    /// Project id (default: project_id from config)
    #[arg(long)]
    pub project: Option<String>,
}

pub async fn run(args: FilesArgs, config: &SyncConfig, printer: &Printer) -> Result<()> {
    let project_id = super::resolve_id(
        args.project.as_deref(),
        config.project_id.as_deref(),
        "project id",
        env::PROJECT_ID,
    )?;
    let client = FigmaClient::new(config)?;

    let project = client.fetch_project(&project_id).await?;
    printer.info(
        "Found",
        &format!("{} in {}", plural(project.files.len(), "file", "files"), project.name),
    );
    super::print_json(&project)
}
