//! Tag list normalization entry points.

use crate::model::tags::TagSet;

/// Trims, lowercases, drops empty values and dedupes, keeping first-seen order.
///
/// Idempotent: normalizing an already-normalized list returns it unchanged.
pub fn normalize_tags<I, S>(raw_tags: I) -> TagSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw_tags.into_iter().collect()
}

/// Parses comma-separated tag input, e.g. `"Work, ideas,,work"`.
pub fn parse_tags_input(raw: &str) -> TagSet {
    normalize_tags(raw.split(','))
}
