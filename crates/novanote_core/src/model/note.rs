//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical note record shared by storage, import and export.
//! - Provide copy-on-write edit semantics.
//!
//! # Invariants
//! - `id` is assigned once and never regenerated by an edit.
//! - Every edit produces a new record with a refreshed `updated_at`.
//! - `tags` is always a normalized [`TagSet`].

use crate::model::identity::NoteIdentity;
use crate::model::tags::TagSet;
use serde::{Deserialize, Serialize};

/// Opaque note identifier. Treated as an uninterpreted string.
pub type NoteId = String;

/// Title assigned to freshly created notes.
pub const PLACEHOLDER_TITLE: &str = "Untitled note";

/// Canonical note record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    /// Raw markup body.
    pub content: String,
    pub tags: TagSet,
    /// ISO-8601 timestamp. Serialized as `updatedAt` to match the storage format.
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}

impl Note {
    /// Creates an empty note with a placeholder title.
    pub fn empty(id: impl Into<NoteId>, updated_at: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: PLACEHOLDER_TITLE.to_string(),
            content: String::new(),
            tags: TagSet::new(),
            updated_at: updated_at.into(),
        }
    }

    /// Creates an empty note using ids and timestamps from `identity`.
    pub fn empty_with(identity: &dyn NoteIdentity) -> Self {
        Self::empty(identity.next_id(), identity.now())
    }

    /// Returns a new record with `edit` applied and `updated_at` replaced.
    ///
    /// Fields not named by the edit are carried over unchanged.
    pub fn with_edit(&self, edit: NoteEdit, updated_at: impl Into<String>) -> Self {
        Self {
            id: self.id.clone(),
            title: edit.title.unwrap_or_else(|| self.title.clone()),
            content: edit.content.unwrap_or_else(|| self.content.clone()),
            tags: edit.tags.unwrap_or_else(|| self.tags.clone()),
            updated_at: updated_at.into(),
        }
    }
}

/// Partial field replacement for one note edit transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteEdit {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<TagSet>,
}

impl NoteEdit {
    pub fn title(value: impl Into<String>) -> Self {
        Self {
            title: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn content(value: impl Into<String>) -> Self {
        Self {
            content: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn tags(value: TagSet) -> Self {
        Self {
            tags: Some(value),
            ..Self::default()
        }
    }
}
