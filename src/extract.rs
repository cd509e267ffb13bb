//! Title extraction from raw document text.
//!
//! Titles are resolved by a fixed priority:
//!
//! 1. First `<title>` element (case-insensitive), inner text verbatim
//! 2. First `<h1>` element (attributes permitted and ignored), inner text verbatim
//! 3. The filename with its extension removed
//!
//! "Verbatim" is literal: no trimming, no entity decoding. The inner text is
//! the exact byte span between the tags, so `&amp;` stays `&amp;` and
//! surrounding whitespace survives. Matching is non-greedy and `.` does not
//! cross newlines — a title element split across lines falls through to the
//! next priority. On malformed input (unclosed tags, nested `h1`s) the match
//! stops at the first closing tag, which can produce a truncated title.
//! Accepted behavior, not corrected.

use regex::Regex;
use std::sync::LazyLock;

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<title>(.*?)</title>").unwrap());

static H1_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<h1[^>]*>(.*?)</h1>").unwrap());

/// Extract a display title from a document's raw content.
///
/// `fallback_name` is the document's filename; its extension is stripped
/// when used as the last-resort title (`jvm-desc.html` → `jvm-desc`).
pub fn extract_title(content: &str, fallback_name: &str) -> String {
    if let Some(caps) = TITLE_RE.captures(content) {
        return caps[1].to_string();
    }
    if let Some(caps) = H1_RE.captures(content) {
        return caps[1].to_string();
    }
    strip_extension(fallback_name).to_string()
}

/// Strip the final extension from a filename (`report.html` → `report`).
///
/// Names without a dot, or with only a leading dot, pass through unchanged.
pub fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(pos) if pos > 0 => &name[..pos],
        _ => name,
    }
}
