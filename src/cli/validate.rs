use clap::Args;

use crate::client::FigmaClient;
use crate::config::SyncConfig;
use crate::error::{Result, SyncError};
use crate::output::{plural, Printer};
use crate::validation::{print_report, validate_file};

/// Check a file's structure without extracting tokens
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Figma file key (default: design_system_file_key from config)
    pub file_key: Option<String>,
}

pub async fn run(args: ValidateArgs, config: &SyncConfig, printer: &Printer) -> Result<()> {
    let file_key = super::resolve_file_key(args.file_key.as_deref(), config)?;
    let client = FigmaClient::new(config)?;

    printer.status("Validating", &format!("file {}", printer.cyan(&file_key)));
    let report = validate_file(&client, &file_key).await;
    print_report(&report, printer);

    if report.is_valid() {
        Ok(())
    } else {
        Err(SyncError::Validation {
            message: format!(
                "File '{}' has {}",
                file_key,
                plural(report.len(), "issue", "issues")
            ),
            help: None,
        })
    }
}
