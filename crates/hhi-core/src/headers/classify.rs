//! Security and caching header allow-lists.

use super::HeaderFields;

/// Headers that harden clients against common web attacks.
pub const SECURITY_HEADER_KEYS: [&str; 6] = [
    "Strict-Transport-Security",
    "Content-Security-Policy",
    "X-Frame-Options",
    "X-Content-Type-Options",
    "Referrer-Policy",
    "Permissions-Policy",
];

/// Headers that govern client/proxy caching.
pub const CACHING_HEADER_KEYS: [&str; 5] =
    ["Cache-Control", "Expires", "ETag", "Last-Modified", "Pragma"];

/// Picks the entries of `headers` whose names match `keys` (ignoring case).
///
/// Output follows the order of `keys`; names keep their received casing, so
/// every selected entry is also an entry of `headers`.
pub fn select(headers: &HeaderFields, keys: &[&str]) -> HeaderFields {
    let mut out = HeaderFields::new();
    for key in keys {
        if let Some((name, value)) = headers.get_entry(key) {
            out.append(name, value);
        }
    }
    out
}

pub fn security_headers(headers: &HeaderFields) -> HeaderFields {
    select(headers, &SECURITY_HEADER_KEYS)
}

pub fn caching_headers(headers: &HeaderFields) -> HeaderFields {
    select(headers, &CACHING_HEADER_KEYS)
}
