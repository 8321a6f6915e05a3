//! Per-URL inspection result.

use serde::Serialize;

use crate::fetch::{FetchedResponse, TransportError};
use crate::headers::{caching_headers, security_headers, HeaderFields};

/// Reason phrase recorded when no response was obtained.
pub const REQUEST_ERROR_REASON: &str = "Request error";

/// Outcome of inspecting one URL.
///
/// Either `error` is `None` and the response fields come from a real
/// response (`status_code > 0`), or `error` is set, `status_code` is 0 and
/// all header maps are empty. Only the two constructors below build it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InspectionResult {
    /// URL as supplied by the user.
    pub url: String,
    /// Last hop on success, the normalized URL on failure.
    pub final_url: String,
    pub status_code: u16,
    pub reason: String,
    /// Redirect chain, excluding the final URL.
    pub history: Vec<String>,
    pub headers: HeaderFields,
    pub security_headers: HeaderFields,
    pub caching_headers: HeaderFields,
    pub error: Option<String>,
}

impl InspectionResult {
    /// Builds a successful result and classifies its headers.
    pub fn from_response(url: &str, response: FetchedResponse) -> Self {
        let security_headers = security_headers(&response.headers);
        let caching_headers = caching_headers(&response.headers);
        Self {
            url: url.to_string(),
            final_url: response.final_url,
            status_code: response.status_code,
            reason: response.reason,
            history: response.history,
            headers: response.headers,
            security_headers,
            caching_headers,
            error: None,
        }
    }

    /// Builds a failed result; `normalized_url` becomes the final URL.
    pub fn from_error(url: &str, normalized_url: String, error: &TransportError) -> Self {
        Self {
            url: url.to_string(),
            final_url: normalized_url,
            status_code: 0,
            reason: REQUEST_ERROR_REASON.to_string(),
            history: Vec::new(),
            headers: HeaderFields::new(),
            security_headers: HeaderFields::new(),
            caching_headers: HeaderFields::new(),
            error: Some(error.to_string()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}
