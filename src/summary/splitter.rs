//! Marker-based splitting of free-text summary completions.

use super::SummaryResult;

/// Heading that separates the overview from the detailed summary.
pub const DETAILED_MARKER: &str = "**Detailed Summary:**";

/// Label the model usually puts in front of the overview.
pub const OVERVIEW_LABEL: &str = "**Overview:**";

/// Split a completion on the first [`DETAILED_MARKER`].
///
/// Without the marker the whole completion becomes the overview and the
/// detailed summary is empty.
pub fn split_completion(completion: &str) -> SummaryResult {
    match completion.split_once(DETAILED_MARKER) {
        Some((before, after)) => SummaryResult {
            overview: before.replacen(OVERVIEW_LABEL, "", 1).trim().to_string(),
            detailed_summary: after.trim().to_string(),
        },
        None => SummaryResult {
            overview: completion.trim().to_string(),
            detailed_summary: String::new(),
        },
    }
}
