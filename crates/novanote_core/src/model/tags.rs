//! Ordered unique tag sequence.
//!
//! # Responsibility
//! - Own tag normalization (trim + lowercase) and deduplication.
//! - Keep first-seen order so tag chips render in a stable sequence.
//!
//! # Invariants
//! - No stored tag is empty.
//! - No two stored tags are equal after normalization.
//! - Every stored tag is already trimmed and lowercase.

use serde::{Deserialize, Deserializer, Serialize};

/// Normalizes one tag value.
///
/// Returns `None` when the value is blank after trimming.
pub fn normalize_tag(tag: &str) -> Option<String> {
    let trimmed = tag.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Insertion-ordered set of normalized tags.
///
/// Serialized as a plain string array. Deserialization re-normalizes, so a
/// `TagSet` can never hold raw user input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TagSet {
    items: Vec<String>,
}

impl TagSet {
    /// Creates an empty tag set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts one raw tag after normalization.
    ///
    /// Returns `true` when the tag was added, `false` when it was blank or
    /// already present.
    pub fn insert(&mut self, raw: &str) -> bool {
        let Some(tag) = normalize_tag(raw) else {
            return false;
        };
        if self.items.contains(&tag) {
            return false;
        }
        self.items.push(tag);
        true
    }

    /// Returns whether the normalized form of `raw` is present.
    pub fn contains(&self, raw: &str) -> bool {
        normalize_tag(raw).is_some_and(|tag| self.items.contains(&tag))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    /// Joins tags with `separator` for single-line display.
    pub fn join(&self, separator: &str) -> String {
        self.items.join(separator)
    }
}

impl<S: AsRef<str>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for raw in iter {
            set.insert(raw.as_ref());
        }
        set
    }
}

impl<'a> IntoIterator for &'a TagSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'de> Deserialize<'de> for TagSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Vec::<String>::deserialize(deserializer)?;
        Ok(raw.iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::{normalize_tag, TagSet};

    #[test]
    fn normalize_tag_trims_and_lowercases() {
        assert_eq!(normalize_tag("  Work "), Some("work".to_string()));
        assert_eq!(normalize_tag("   "), None);
    }

    #[test]
    fn insert_keeps_first_seen_order_and_skips_duplicates() {
        let mut set = TagSet::new();
        assert!(set.insert("Zeta"));
        assert!(set.insert("alpha"));
        assert!(!set.insert(" ZETA "));
        assert!(!set.insert(""));
        assert_eq!(set.as_slice(), ["zeta", "alpha"]);
    }

    #[test]
    fn contains_matches_normalized_form() {
        let set: TagSet = ["Roadmap"].into_iter().collect();
        assert!(set.contains(" roadmap"));
        assert!(!set.contains("demo"));
    }

    #[test]
    fn deserialize_renormalizes_raw_values() {
        let set: TagSet = serde_json::from_str(r#"["  API", "api", "", "Ux"]"#).unwrap();
        assert_eq!(set.as_slice(), ["api", "ux"]);
    }
}
