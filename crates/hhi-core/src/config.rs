//! Per-run inspection options, built from CLI flags.

use std::time::Duration;

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: f64 = 10.0;

/// Default cap on followed redirects.
pub const DEFAULT_MAX_REDIRECTS: u32 = 30;

/// Settings shared by every URL in a batch.
#[derive(Debug, Clone, PartialEq)]
pub struct InspectOptions {
    /// Follow 3xx responses with a `Location` header.
    pub follow_redirects: bool,
    /// Connect and transfer timeout, applied to each hop.
    pub timeout: Duration,
    /// Maximum number of redirects followed before giving up.
    pub max_redirects: u32,
    /// `User-Agent` sent with every request.
    pub user_agent: String,
}

impl Default for InspectOptions {
    fn default() -> Self {
        Self {
            follow_redirects: true,
            timeout: Duration::from_secs_f64(DEFAULT_TIMEOUT_SECS),
            max_redirects: DEFAULT_MAX_REDIRECTS,
            user_agent: default_user_agent(),
        }
    }
}

impl InspectOptions {
    /// Options with the given redirect flag and timeout; everything else default.
    pub fn new(follow_redirects: bool, timeout: Duration) -> Self {
        Self {
            follow_redirects,
            timeout,
            ..Self::default()
        }
    }
}

pub fn default_user_agent() -> String {
    format!("http-header-inspector/{}", env!("CARGO_PKG_VERSION"))
}

/// Parse a timeout given in (fractional) seconds.
///
/// Rejects zero, negative, NaN and infinite values.
pub fn parse_timeout_secs(s: &str) -> Result<Duration, String> {
    let secs: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("invalid timeout '{}': expected seconds, e.g. 2.5", s))?;
    if !secs.is_finite() || secs <= 0.0 {
        return Err(format!("timeout must be a positive number of seconds, got {}", s));
    }
    Duration::try_from_secs_f64(secs).map_err(|e| format!("timeout out of range: {}", e))
}
