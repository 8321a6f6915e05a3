//! URL normalization.
//!
//! Makes sure a user-supplied URL carries a scheme before it is handed to the
//! fetcher. Host syntax is not checked here; the fetcher reports bad URLs
//! through its own error path.

mod scheme;

pub use scheme::scheme_of;

/// Scheme prefix used when the input has none.
pub const DEFAULT_SCHEME_PREFIX: &str = "https://";

/// Returns `url` unchanged if it already has a scheme, otherwise `https://` + `url`.
///
/// # Examples
///
/// - `normalize_url("example.com")` → `"https://example.com"`
/// - `normalize_url("http://example.com")` → `"http://example.com"`
pub fn normalize_url(url: &str) -> String {
    match scheme_of(url) {
        Some(_) => url.to_string(),
        None => format!("{}{}", DEFAULT_SCHEME_PREFIX, url),
    }
}
