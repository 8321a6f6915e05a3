//! Batch inspection: one fetch per URL, in order, no early exit.

use crate::config::InspectOptions;
use crate::fetch::fetch_headers;
use crate::result::InspectionResult;

/// Inspects every URL sequentially and returns one result per URL, in input order.
///
/// A failed URL does not stop the batch; its result carries the error.
pub fn inspect_all<S: AsRef<str>>(urls: &[S], opts: &InspectOptions) -> Vec<InspectionResult> {
    tracing::debug!(
        count = urls.len(),
        follow = opts.follow_redirects,
        "inspecting urls"
    );
    urls.iter()
        .map(|u| fetch_headers(u.as_ref(), opts))
        .collect()
}
