//! Inline span transformation.
//!
//! # Invariants
//! - HTML escaping always runs before span substitution, so user text can
//!   never reintroduce live markup.
//! - Substitution order is code, then strong, then emphasis.

use once_cell::sync::Lazy;
use regex::Regex;

static CODE_SPAN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"`([^`]+)`").expect("valid code span regex"));
static STRONG_SPAN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*([^*]+)\*\*").expect("valid strong span regex"));
static EMPHASIS_SPAN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*([^*]+)\*").expect("valid emphasis span regex"));

/// Escapes the five HTML-significant characters.
///
/// The apostrophe is emitted as the decimal entity `&#39;`.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Escapes `text` and layers code/strong/emphasis spans on top.
///
/// Unterminated markers are left as literal text.
pub fn render_inline(text: &str) -> String {
    let escaped = escape_html(text);
    let with_code = CODE_SPAN_RE.replace_all(&escaped, "<code>${1}</code>");
    let with_strong = STRONG_SPAN_RE.replace_all(&with_code, "<strong>${1}</strong>");
    EMPHASIS_SPAN_RE
        .replace_all(&with_strong, "<em>${1}</em>")
        .into_owned()
}
