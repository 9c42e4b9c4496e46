//! `tokensync sync`: fetch, optionally validate, extract, render, write.
//!
//! Every abort path returns before the output file is touched. With
//! `--watch` the whole sequence repeats on the configured interval until
//! Ctrl-C; a failed cycle is reported and the loop keeps going.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Args;
use tracing::{debug, error, info, warn};

use crate::client::{notify_webhook, FigmaClient, SyncSummary};
use crate::config::SyncConfig;
use crate::emit::{self, Format};
use crate::error::{Result, SyncError};
use crate::extract::{extract_design_tokens, ExtractOptions};
use crate::output::{display_path, group_summary, plural, Printer};
use crate::validation::{print_report, validate_file};

/// Extract tokens from a file and write them in one format
#[derive(Args, Debug, Clone)]
pub struct SyncArgs {
    /// Figma file key (default: design_system_file_key from config)
    #[arg(long, short = 'k')]
    pub file_key: Option<String>,

    /// Output file
    #[arg(long, short)]
    pub output: PathBuf,

    /// Output format: json, css, scss or ts
    #[arg(long, short, default_value = "json")]
    pub format: String,

    /// Validate the file before extracting; abort if it has issues
    #[arg(long)]
    pub validate: bool,

    /// Print token counts without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Fail when two tokens in a group share a name
    #[arg(long)]
    pub strict: bool,

    /// Re-run every sync_interval_ms until interrupted
    #[arg(long)]
    pub watch: bool,
}

/// What one sync cycle did.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncOutcome {
    /// Tokens were rendered and written.
    Written(SyncSummary),
    /// `--dry-run`: counts only.
    DryRun(SyncSummary),
    /// The file produced no tokens; nothing was written.
    Empty,
}

pub async fn run(args: SyncArgs, config: &SyncConfig, printer: &Printer) -> Result<()> {
    let job = SyncJob::new(&args, config)?;

    if args.watch {
        return watch(&job, config, printer).await;
    }

    job.run_once(printer).await.map(|_| ())
}

/// A sync with every input resolved up front.
pub struct SyncJob<'a> {
    client: FigmaClient,
    file_key: String,
    format: Format,
    args: &'a SyncArgs,
    webhook_url: Option<&'a str>,
}

impl<'a> SyncJob<'a> {
    /// Resolve format, file key and credentials.
    ///
    /// The format is checked first so an unsupported one fails before any
    /// other configuration problem is reported.
    pub fn new(args: &'a SyncArgs, config: &'a SyncConfig) -> Result<Self> {
        let format: Format = args.format.parse()?;
        let file_key = super::resolve_file_key(args.file_key.as_deref(), config)?;
        let client = FigmaClient::new(config)?;

        Ok(Self {
            client,
            file_key,
            format,
            args,
            webhook_url: config.webhook_url.as_deref(),
        })
    }

    pub async fn run_once(&self, printer: &Printer) -> Result<SyncOutcome> {
        printer.status("Fetching", &format!("file {}", printer.cyan(&self.file_key)));

        if self.args.validate {
            let report = validate_file(&self.client, &self.file_key).await;
            if !report.is_valid() {
                print_report(&report, printer);
                return Err(SyncError::Validation {
                    message: format!(
                        "File '{}' failed validation with {}",
                        self.file_key,
                        plural(report.len(), "issue", "issues")
                    ),
                    help: Some(
                        "Run `tokensync validate` for details, or sync without --validate"
                            .to_string(),
                    ),
                });
            }
            debug!(file_key = %self.file_key, "validation passed");
        }

        let options = ExtractOptions {
            strict: self.args.strict,
        };
        let groups = extract_design_tokens(&self.client, &self.file_key, &options).await?;

        if groups.is_empty() {
            warn!(file_key = %self.file_key, "no design tokens found");
            printer.warning("Skipped", "no design tokens found; nothing written");
            return Ok(SyncOutcome::Empty);
        }

        let summary = SyncSummary::new(
            &self.file_key,
            &self.args.output,
            self.format.name(),
            &groups,
        );

        if self.args.dry_run {
            printer.groups(&groups);
            printer.info("Dry run", &format!("would write {}", display_path(&self.args.output)));
            return Ok(SyncOutcome::DryRun(summary));
        }

        let content = emit::render(&groups, self.format)?;
        emit::write_output(&self.args.output, &content)?;
        info!(output = %self.args.output.display(), format = %self.format, "wrote tokens");

        printer.groups(&groups);
        printer.success(
            "Wrote",
            &format!("{} ({})", display_path(&self.args.output), group_summary(&groups)),
        );

        if let Some(url) = self.webhook_url {
            notify(url, &summary, printer).await;
        }

        Ok(SyncOutcome::Written(summary))
    }

    pub fn output(&self) -> &Path {
        &self.args.output
    }
}

async fn notify(url: &str, summary: &SyncSummary, printer: &Printer) {
    match notify_webhook(url, summary).await {
        Ok(()) => debug!(url, "webhook notified"),
        Err(e) => {
            warn!(url, "webhook notification failed: {}", e);
            printer.warning("Webhook", &e.to_string());
        }
    }
}

async fn watch(job: &SyncJob<'_>, config: &SyncConfig, printer: &Printer) -> Result<()> {
    let period = config.sync_interval();
    if period.is_zero() {
        return Err(SyncError::Configuration {
            message: "sync_interval_ms must be greater than zero in watch mode".to_string(),
            help: None,
        });
    }

    printer.info(
        "Watching",
        &format!("{} every {:?} (Ctrl-C to stop)", display_path(job.output()), period),
    );

    job.watch_until(period, printer, tokio::signal::ctrl_c()).await
}

impl SyncJob<'_> {
    /// Run a sync every `period` until `shutdown` completes.
    ///
    /// `shutdown` is polled both while idle and while a cycle is running, so
    /// it interrupts an in-flight cycle too. A failed cycle is reported and
    /// the loop continues.
    pub async fn watch_until<F>(
        &self,
        period: Duration,
        printer: &Printer,
        shutdown: F,
    ) -> Result<()>
    where
        F: Future,
    {
        tokio::pin!(shutdown);

        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    printer.info("Stopped", "watch interrupted");
                    return Ok(());
                }
                _ = interval.tick() => {}
            }

            tokio::select! {
                _ = &mut shutdown => {
                    warn!("watch interrupted during a sync cycle");
                    printer.info("Stopped", "watch interrupted during sync");
                    return Ok(());
                }
                result = self.run_once(printer) => {
                    if let Err(e) = result {
                        error!("sync cycle failed: {}", e);
                        printer.error("Failed", &e.to_string());
                    }
                }
            }
        }
    }
}
