pub mod config;
pub mod logging;

pub mod fetch;
pub mod headers;
pub mod inspect;
pub mod result;
pub mod url_model;

pub use config::InspectOptions;
pub use fetch::{fetch_headers, TransportError};
pub use headers::HeaderFields;
pub use inspect::inspect_all;
pub use result::InspectionResult;
pub use url_model::normalize_url;
