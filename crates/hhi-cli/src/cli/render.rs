//! Text and JSON rendering of inspection results.

use anyhow::{Context, Result};
use hhi_core::{HeaderFields, InspectionResult};

/// Separates result blocks in text mode.
const DIVIDER_WIDTH: usize = 60;

/// Renders all results as text blocks separated by a `=` divider.
pub fn render_text(results: &[InspectionResult]) -> String {
    let divider = format!("\n\n{}\n\n", "=".repeat(DIVIDER_WIDTH));
    results
        .iter()
        .map(render_text_single)
        .collect::<Vec<_>>()
        .join(&divider)
}

/// Renders one result. Failed results show only the URL and the error.
pub fn render_text_single(result: &InspectionResult) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("URL: {}", result.url));
    if let Some(err) = &result.error {
        lines.push(format!("Error: {}", err));
        return lines.join("\n");
    }

    lines.push(format!("Final URL: {}", result.final_url));
    lines.push(format!("Status: {} {}", result.status_code, result.reason));

    if !result.history.is_empty() {
        lines.push(String::new());
        lines.push("Redirect chain:".to_string());
        for (idx, url) in result.history.iter().enumerate() {
            lines.push(format!("  {}. {}", idx + 1, url));
        }
    }

    push_section(&mut lines, "Security headers", &result.security_headers);
    push_section(&mut lines, "Caching headers", &result.caching_headers);

    lines.push(String::new());
    lines.push("All headers:".to_string());
    for (name, value) in result.headers.sorted_case_insensitive() {
        lines.push(format!("  {}: {}", name, value));
    }

    lines.join("\n")
}

fn push_section(lines: &mut Vec<String>, title: &str, headers: &HeaderFields) {
    lines.push(String::new());
    if headers.is_empty() {
        lines.push(format!("{}: (none detected)", title));
        return;
    }
    lines.push(format!("{}:", title));
    for (name, value) in headers.iter() {
        lines.push(format!("  {}: {}", name, value));
    }
}

/// Pretty JSON array, two-space indent, non-ASCII kept as-is.
pub fn render_json(results: &[InspectionResult]) -> Result<String> {
    serde_json::to_string_pretty(results).context("serialize results as JSON")
}
