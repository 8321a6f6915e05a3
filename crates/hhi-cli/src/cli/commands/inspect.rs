//! Inspect every URL and print the report to stdout.

use anyhow::{Context, Result};
use hhi_core::config::InspectOptions;
use hhi_core::inspect_all;
use std::io::Write;

use crate::cli::render;
use crate::cli::OutputFormat;

/// Runs the batch on a blocking thread (one request at a time) and prints it.
///
/// Per-URL failures are part of the report and do not make this return Err.
pub async fn run_inspect(urls: Vec<String>, opts: InspectOptions, format: OutputFormat) -> Result<()> {
    let results = tokio::task::spawn_blocking(move || inspect_all(&urls, &opts))
        .await
        .context("inspect task join")?;

    let failed = results.iter().filter(|r| r.is_error()).count();
    if failed > 0 {
        tracing::info!("{} of {} url(s) could not be fetched", failed, results.len());
    }

    let output = match format {
        OutputFormat::Text => render::render_text(&results),
        OutputFormat::Json => render::render_json(&results)?,
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", output).context("write report to stdout")?;
    stdout.flush().context("flush stdout")?;
    Ok(())
}
