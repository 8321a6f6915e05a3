//! Parse raw response header lines into a status line and header fields.

use crate::headers::HeaderFields;

/// Status line and headers of the last response block seen on a hop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResponseHead {
    pub status_code: u16,
    pub reason: String,
    pub headers: HeaderFields,
}

/// Parses header lines as delivered by libcurl (status line first).
///
/// libcurl hands over every block it reads, including interim `1xx`
/// responses; only the last block is kept. Chunked trailer fields arrive
/// through the same callback after the blank line that closes the block;
/// they are not part of the response header set and are skipped. Returns
/// `None` when no status line was received.
pub(crate) fn parse_response_head(lines: &[String]) -> Option<ResponseHead> {
    let mut head: Option<ResponseHead> = None;
    let mut block_closed = false;

    for line in lines {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.is_empty() {
            if head.is_some() {
                block_closed = true;
            }
            continue;
        }
        if line.starts_with("HTTP/") {
            if let Some((status_code, reason)) = parse_status_line(line) {
                head = Some(ResponseHead {
                    status_code,
                    reason,
                    headers: HeaderFields::new(),
                });
                block_closed = false;
            }
            continue;
        }
        if block_closed {
            continue;
        }
        let Some(current) = head.as_mut() else {
            continue;
        };
        if let Some((name, value)) = line.split_once(':') {
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            current.headers.append(name, value.trim());
        }
    }

    head
}

/// `"HTTP/1.1 301 Moved Permanently"` → `(301, "Moved Permanently")`.
fn parse_status_line(line: &str) -> Option<(u16, String)> {
    let mut parts = line.splitn(3, ' ');
    let _version = parts.next()?;
    let code = parts.next()?.trim().parse::<u16>().ok()?;
    let reason = parts.next().unwrap_or("").trim().to_string();
    Some((code, reason))
}
