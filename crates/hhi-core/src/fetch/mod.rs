//! Header fetching: one GET per URL (plus one per followed redirect).
//!
//! Uses the curl crate (libcurl) in blocking mode. Transport failures are
//! turned into an error-carrying [`InspectionResult`] here and never reach
//! the caller as `Err`.

mod client;
mod error;
mod parse;

pub use error::TransportError;

use crate::config::InspectOptions;
use crate::headers::HeaderFields;
use crate::result::InspectionResult;
use crate::url_model::normalize_url;

/// A completed response after any followed redirects.
#[derive(Debug, Clone)]
pub struct FetchedResponse {
    /// URL of the last hop.
    pub final_url: String,
    pub status_code: u16,
    pub reason: String,
    /// URLs visited before the last hop, in order.
    pub history: Vec<String>,
    /// Header block of the last hop.
    pub headers: HeaderFields,
}

/// Inspects a single URL. Always returns a result; failures land in `error`.
///
/// Runs in the current thread; call from `spawn_blocking` if used from async code.
pub fn fetch_headers(url: &str, opts: &InspectOptions) -> InspectionResult {
    let normalized = normalize_url(url);
    match fetch_response(&normalized, opts) {
        Ok(response) => {
            tracing::debug!(
                url = %normalized,
                status = response.status_code,
                redirects = response.history.len(),
                "fetched headers"
            );
            InspectionResult::from_response(url, response)
        }
        Err(e) => {
            tracing::info!(url = %normalized, "request failed: {}", e);
            InspectionResult::from_error(url, normalized, &e)
        }
    }
}

/// Performs the request for an already normalized URL.
///
/// When `opts.follow_redirects` is set, 3xx responses with a `Location` are
/// followed up to `opts.max_redirects` times.
pub fn fetch_response(url: &str, opts: &InspectOptions) -> Result<FetchedResponse, TransportError> {
    check_url(url)?;

    let mut easy = client::build_handle(opts)?;
    let mut history: Vec<String> = Vec::new();
    let mut current = url.to_string();

    loop {
        let hop = client::perform_hop(&mut easy, &current)?;
        tracing::debug!(url = %current, status = hop.head.status_code, "hop complete");

        match hop.location {
            Some(next) if opts.follow_redirects => {
                if history.len() >= opts.max_redirects as usize {
                    return Err(TransportError::TooManyRedirects(opts.max_redirects));
                }
                check_url(&next)?;
                tracing::debug!(from = %current, to = %next, "following redirect");
                history.push(std::mem::replace(&mut current, next));
            }
            _ => {
                return Ok(FetchedResponse {
                    final_url: current,
                    status_code: hop.head.status_code,
                    reason: hop.head.reason,
                    history,
                    headers: hop.head.headers,
                });
            }
        }
    }
}

/// Only absolute http/https URLs are handed to libcurl.
fn check_url(url: &str) -> Result<(), TransportError> {
    let parsed = url::Url::parse(url).map_err(|source| TransportError::InvalidUrl {
        url: url.to_string(),
        source,
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(TransportError::UnsupportedScheme(other.to_string())),
    }
}
