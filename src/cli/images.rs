//! `tokensync images`: rendered image URLs for a set of nodes.

use clap::Args;

use crate::client::{FigmaClient, ImageFormat, ImageOptions};
use crate::config::SyncConfig;
use crate::error::Result;
use crate::output::{plural, Printer};

/// Request rendered image URLs for nodes
#[derive(Args, Debug)]
pub struct ImagesArgs {
    /// Figma file key (default: design_system_file_key from config)
    pub file_key: Option<String>,

    /// Node ids, comma-separated
    #[arg(long, required = true, value_delimiter = ',')]
    pub ids: Vec<String>,

    /// Image format
    #[arg(long, value_enum, default_value_t = ImageFormat::Png)]
    pub format: ImageFormat,

    /// Scale multiplier
    #[arg(long, default_value_t = 1.0)]
    pub scale: f64,
}

pub async fn run(args: ImagesArgs, config: &SyncConfig, printer: &Printer) -> Result<()> {
    let file_key = super::resolve_file_key(args.file_key.as_deref(), config)?;
    let client = FigmaClient::new(config)?;

    let options = ImageOptions {
        format: args.format,
        scale: args.scale,
    };
    let images = client.fetch_images(&file_key, &args.ids, options).await?;

    let missing = images.values().filter(|url| url.is_none()).count();
    if missing > 0 {
        printer.warning(
            "Missing",
            &format!("{} could not be rendered", plural(missing, "node", "nodes")),
        );
    }

    super::print_json(&images)
}
