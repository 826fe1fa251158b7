//! Note codec: tag normalization, storage envelope and markdown documents.
//!
//! # Responsibility
//! - Convert note collections to/from the persisted text blob.
//! - Convert one note to/from a markdown document with frontmatter.
//!
//! # Invariants
//! - Every function here is pure and total; malformed input degrades
//!   silently instead of returning errors.
//! - The codec does not depend on the renderer.

pub mod envelope;
pub mod frontmatter;
pub mod tags;

pub use envelope::{deserialize, serialize, STORAGE_VERSION};
pub use frontmatter::{export_as_markdown, import_from_markdown, import_from_markdown_with};
pub use tags::{normalize_tags, parse_tags_input};

use crate::model::identity::{NoteIdentity, SystemIdentity};
use crate::model::note::Note;

/// Creates an empty note with a fresh id and the current timestamp.
pub fn create_empty() -> Note {
    create_empty_with(&SystemIdentity)
}

/// Creates an empty note using ids and timestamps from `identity`.
pub fn create_empty_with(identity: &dyn NoteIdentity) -> Note {
    Note::empty_with(identity)
}
