//! Well-known comment styles tried when the configured markers do not match.

use crate::types::MarkerSet;

/// Ordered fallback styles as `(start, end)`. An empty end marks a line
/// comment that runs to the end of the line.
pub const FALLBACK_STYLES: [(&str, &str); 3] = [("%%", "%%"), ("<!--", "-->"), ("//", "")];

pub fn fallback_styles() -> impl Iterator<Item = MarkerSet> {
    FALLBACK_STYLES
        .iter()
        .map(|(start, end)| MarkerSet::new(*start, *end))
}

/// Fallback styles other than `configured`, in order.
pub fn fallback_candidates(configured: &MarkerSet) -> impl Iterator<Item = MarkerSet> + '_ {
    fallback_styles().filter(move |style| style != configured)
}

/// Check if `text` (after trimming) is wrapped in `markers`. Only the start
/// marker is checked when the end marker is empty.
pub fn is_region_commented(text: &str, markers: &MarkerSet) -> bool {
    if markers.start.is_empty() {
        return false;
    }
    let trimmed = text.trim();
    if !markers.has_end() {
        return trimmed.starts_with(&markers.start);
    }
    trimmed.len() >= markers.start.len() + markers.end.len()
        && trimmed.starts_with(&markers.start)
        && trimmed.ends_with(&markers.end)
}

/// The first fallback style that wraps `line_text`.
pub fn detect_fallback(line_text: &str) -> Option<MarkerSet> {
    fallback_styles().find(|style| is_region_commented(line_text, style))
}
