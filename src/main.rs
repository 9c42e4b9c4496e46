use std::path::Path;

use clap::Parser;
use miette::Result;
use tokensync::cli::{self, Cli, Commands};
use tokensync::config::SyncConfig;
use tokensync::output::Printer;

fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    // RUST_LOG wins over -v/-q
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level()));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(cli.verbose >= 2)
                .with_writer(std::io::stderr),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    let printer = Printer::new().quiet(cli.quiet);
    run(cli.command, cli.config.as_deref(), &printer).await?;

    Ok(())
}

async fn run(
    command: Commands,
    config_path: Option<&Path>,
    printer: &Printer,
) -> tokensync::Result<()> {
    match command {
        // Needs no configuration, so a broken config file cannot block it
        Commands::Completions(args) => cli::completions::run(args),
        Commands::Sync(args) => cli::sync::run(args, &load_config(config_path)?, printer).await,
        Commands::Validate(args) => {
            cli::validate::run(args, &load_config(config_path)?, printer).await
        }
        Commands::Projects(args) => {
            cli::projects::run(args, &load_config(config_path)?, printer).await
        }
        Commands::Files(args) => cli::files::run(args, &load_config(config_path)?, printer).await,
        Commands::Images(args) => cli::images::run(args, &load_config(config_path)?, printer).await,
        Commands::Comments(args) => {
            cli::comments::run(args, &load_config(config_path)?, printer).await
        }
    }
}

fn load_config(path: Option<&Path>) -> tokensync::Result<SyncConfig> {
    let config = SyncConfig::load(path)?;
    tracing::debug!(?config, "loaded configuration");
    Ok(config)
}
