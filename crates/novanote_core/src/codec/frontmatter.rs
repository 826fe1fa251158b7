//! Markdown export/import with a `---` fenced metadata header.
//!
//! # Responsibility
//! - Render one note as a markdown document with `title`, `updatedAt` and
//!   `tags` metadata.
//! - Build a new note from such a document.
//!
//! # Invariants
//! - Import always mints a new id; it is not a strict round-trip.
//! - Missing or unterminated frontmatter means the whole input is body.
//! - Import never fails.

use crate::codec::tags::parse_tags_input;
use crate::model::identity::{NoteIdentity, SystemIdentity};
use crate::model::note::Note;
use crate::model::tags::TagSet;
use std::collections::HashMap;

const DELIMITER: &str = "---";
const KEY_TITLE: &str = "title";
const KEY_UPDATED_AT: &str = "updatedAt";
const KEY_TAGS: &str = "tags";

/// Renders `note` as a markdown document.
///
/// ```text
/// ---
/// title: <title>
/// updatedAt: <timestamp>
/// tags: a, b
/// ---
///
/// <content>
/// ```
pub fn export_as_markdown(note: &Note) -> String {
    let header = [
        DELIMITER.to_string(),
        metadata_line(KEY_TITLE, &note.title),
        metadata_line(KEY_UPDATED_AT, &note.updated_at),
        metadata_line(KEY_TAGS, &note.tags.join(", ")),
        DELIMITER.to_string(),
    ]
    .join("\n");

    format!("{header}\n\n{}", note.content)
}

/// Builds a new note from a markdown document using the system identity.
pub fn import_from_markdown(text: &str) -> Note {
    import_from_markdown_with(text, &SystemIdentity)
}

/// Builds a new note from a markdown document.
///
/// Starts from a fresh empty note minted by `identity`, then overlays:
/// - `title` when present and non-empty, else the placeholder;
/// - `updatedAt` when present and non-empty, else `identity.now()`;
/// - `tags` parsed as comma-separated input, empty when the key is absent;
/// - content from the body with leading whitespace removed.
pub fn import_from_markdown_with(text: &str, identity: &dyn NoteIdentity) -> Note {
    let parsed = split_frontmatter(text);
    let mut note = Note::empty_with(identity);

    if let Some(title) = parsed.non_empty(KEY_TITLE) {
        note.title = title.to_string();
    }
    note.updated_at = match parsed.non_empty(KEY_UPDATED_AT) {
        Some(value) => value.to_string(),
        None => identity.now(),
    };
    note.tags = parsed
        .non_empty(KEY_TAGS)
        .map(parse_tags_input)
        .unwrap_or_else(TagSet::new);
    note.content = parsed.body;

    note
}

fn metadata_line(key: &str, value: &str) -> String {
    format!("{key}: {value}")
}

/// Metadata map and remaining body of one document.
#[derive(Debug, Default, PartialEq, Eq)]
struct Frontmatter {
    metadata: HashMap<String, String>,
    body: String,
}

impl Frontmatter {
    fn non_empty(&self, key: &str) -> Option<&str> {
        self.metadata
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }
}

fn split_frontmatter(text: &str) -> Frontmatter {
    let lines: Vec<&str> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();

    if lines.first() != Some(&DELIMITER) {
        return plain_body(text);
    }
    let Some(end) = lines.iter().skip(1).position(|line| *line == DELIMITER) else {
        return plain_body(text);
    };
    let end = end + 1;

    let mut metadata = HashMap::new();
    for line in &lines[1..end] {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        metadata.insert(key.trim().to_string(), value.trim().to_string());
    }

    Frontmatter {
        metadata,
        body: lines[end + 1..].join("\n").trim_start().to_string(),
    }
}

fn plain_body(text: &str) -> Frontmatter {
    Frontmatter {
        metadata: HashMap::new(),
        body: text.to_string(),
    }
}
