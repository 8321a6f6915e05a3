//! One libcurl GET per hop. Redirects are driven by the caller so every
//! intermediate URL can be recorded.

use super::parse::{parse_response_head, ResponseHead};
use super::TransportError;
use crate::config::InspectOptions;
use curl::easy::{Easy, HttpVersion};

/// Outcome of a single request/response exchange.
#[derive(Debug)]
pub(crate) struct Hop {
    pub head: ResponseHead,
    /// Absolute target of a 3xx `Location`, resolved by libcurl.
    pub location: Option<String>,
}

/// Builds a handle configured from `opts`. libcurl's own redirect
/// following stays off.
pub(crate) fn build_handle(opts: &InspectOptions) -> Result<Easy, TransportError> {
    let mut easy = Easy::new();
    easy.get(true)?;
    easy.follow_location(false)?;
    easy.http_version(HttpVersion::V11)?;
    easy.connect_timeout(opts.timeout)?;
    easy.timeout(opts.timeout)?;
    easy.useragent(&opts.user_agent)?;
    Ok(easy)
}

/// Performs a GET against `url`, collecting header lines and discarding the body.
pub(crate) fn perform_hop(easy: &mut Easy, url: &str) -> Result<Hop, TransportError> {
    let request_err = |source: curl::Error| TransportError::Request {
        url: url.to_string(),
        source,
    };

    let mut lines: Vec<String> = Vec::new();
    easy.url(url).map_err(request_err)?;

    {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            lines.push(String::from_utf8_lossy(data).into_owned());
            true
        })?;
        transfer.write_function(|data| Ok(data.len()))?;
        transfer.perform().map_err(request_err)?;
    }

    let head = parse_response_head(&lines)
        .ok_or_else(|| TransportError::MalformedResponse(url.to_string()))?;

    let location = if (300..400).contains(&head.status_code) {
        easy.redirect_url()?.map(str::to_string)
    } else {
        None
    };

    Ok(Hop { head, location })
}
