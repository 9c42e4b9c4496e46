use clap::Args;

use crate::client::FigmaClient;
use crate::config::{env, SyncConfig};
use crate::error::Result;
use crate::output::{plural, Printer};

/// List a team's projects as JSON
#[derive(Args, Debug)]
pub struct ProjectsArgs {
    /// Team id (default: team_id from config)
    #[arg(long)]
    pub team: Option<String>,
}

pub async fn run(args: ProjectsArgs, config: &SyncConfig, printer: &Printer) -> Result<()> {
    let team_id = super::resolve_id(
        args.team.as_deref(),
        config.team_id.as_deref(),
        "team id",
        env::TEAM_ID,
    )?;
    let client = FigmaClient::new(config)?;

    let projects = client.fetch_team_projects(&team_id).await?;
    printer.info("Found", &plural(projects.len(), "project", "projects"));
    super::print_json(&projects)
}
