//! CLI for http-header-inspector.

mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use hhi_core::config::{self, InspectOptions};
use std::time::Duration;

use commands::run_inspect;

/// Top-level CLI for http-header-inspector.
#[derive(Debug, Parser)]
#[command(name = "header-inspect", display_name = "http-header-inspector", version)]
#[command(
    about = "Fetch HTTP(S) response headers for one or more URLs and highlight security/caching headers.",
    long_about = None
)]
pub struct Cli {
    /// URL(s) to inspect (e.g. https://example.com). Scheme is optional; https is assumed if missing.
    #[arg(required = true, num_args = 1..)]
    pub urls: Vec<String>,

    /// Do not follow redirects (by default redirects are followed).
    #[arg(long)]
    pub no_follow: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Request timeout in seconds.
    #[arg(long, default_value = "10.0", value_name = "SECONDS", value_parser = config::parse_timeout_secs)]
    pub timeout: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    pub fn options(&self) -> InspectOptions {
        InspectOptions::new(!self.no_follow, self.timeout)
    }

    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let opts = cli.options();
        tracing::debug!("inspect options: {:?}", opts);
        run_inspect(cli.urls, opts, cli.format).await
    }
}
