//! Transport error: anything that prevents a complete HTTP response.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    /// The normalized URL does not parse.
    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Only http and https are fetched.
    #[error("unsupported URL scheme '{0}' (expected http or https)")]
    UnsupportedScheme(String),

    /// libcurl failed while performing the request (DNS, connect, TLS, timeout, ...).
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: curl::Error,
    },

    /// libcurl rejected an option before any request was made.
    #[error("client setup failed: {0}")]
    Setup(#[from] curl::Error),

    /// Redirect cap hit while following `Location` headers.
    #[error("exceeded maximum of {0} redirects")]
    TooManyRedirects(u32),

    /// The server answered without a usable HTTP status line.
    #[error("malformed response from {0}: missing HTTP status line")]
    MalformedResponse(String),
}
