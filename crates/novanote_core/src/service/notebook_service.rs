//! Notebook use-case service.
//!
//! # Responsibility
//! - Provide the collection use-cases: add, edit, delete, select, import and
//!   export of notes.
//! - Persist the full serialized collection after every mutation.
//!
//! # Invariants
//! - New and imported notes are prepended and become active.
//! - Edits replace the whole record and refresh `updated_at`; ids never change.
//! - In-memory state only changes after the store accepted the new blob.
//! - Deleting the active note activates the first remaining note.

use crate::codec::{deserialize, export_as_markdown, import_from_markdown_with, serialize};
use crate::display::export_file_name;
use crate::model::identity::{NoteIdentity, SystemIdentity};
use crate::model::note::{Note, NoteEdit, NoteId};
use crate::service::store::{NoteStore, StoreError};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for notebook use-cases.
#[derive(Debug)]
pub enum NotebookError {
    /// Target note does not exist in the collection.
    NoteNotFound(NoteId),
    /// Persistence-layer failure.
    Store(StoreError),
}

impl Display for NotebookError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for NotebookError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NoteNotFound(_) => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for NotebookError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

pub type NotebookResult<T> = Result<T, NotebookError>;

/// Markdown export of one note, ready to be written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownExport {
    /// Suggested file name derived from the title.
    pub file_name: String,
    pub markdown: String,
}

/// Note collection facade over a [`NoteStore`].
pub struct NotebookService<S: NoteStore> {
    store: S,
    identity: Box<dyn NoteIdentity>,
    notes: Vec<Note>,
    active_id: Option<NoteId>,
}

impl<S: NoteStore> NotebookService<S> {
    /// Loads the collection from `store` using the system identity.
    pub fn open(store: S) -> NotebookResult<Self> {
        Self::open_with_identity(store, Box::new(SystemIdentity))
    }

    /// Loads the collection from `store`.
    ///
    /// Unreadable or incompatible blobs load as an empty collection; only a
    /// failing store is an error. The first note becomes active.
    pub fn open_with_identity(
        store: S,
        identity: Box<dyn NoteIdentity>,
    ) -> NotebookResult<Self> {
        let raw = store.load()?;
        let notes = deserialize(raw.as_deref());
        let active_id = notes.first().map(|note| note.id.clone());
        info!(
            "event=notebook_open module=service status=ok notes={}",
            notes.len()
        );
        Ok(Self {
            store,
            identity,
            notes,
            active_id,
        })
    }

    /// Notes in display order (most recently added first).
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    /// Returns the active note, if any.
    pub fn active(&self) -> Option<&Note> {
        let active_id = self.active_id.as_deref()?;
        self.notes.iter().find(|note| note.id == active_id)
    }

    /// Makes `id` the active note.
    pub fn select(&mut self, id: &str) -> NotebookResult<()> {
        if !self.notes.iter().any(|note| note.id == id) {
            return Err(NotebookError::NoteNotFound(id.to_string()));
        }
        self.active_id = Some(id.to_string());
        Ok(())
    }

    /// Prepends a fresh empty note and activates it.
    pub fn add_note(&mut self) -> NotebookResult<&Note> {
        let note = Note::empty_with(self.identity.as_ref());
        info!(
            "event=note_add module=service status=ok note_id={}",
            note.id
        );
        self.prepend(note)
    }

    /// Imports a markdown document as a new note and activates it.
    pub fn import_markdown(&mut self, text: &str) -> NotebookResult<&Note> {
        let note = import_from_markdown_with(text, self.identity.as_ref());
        info!(
            "event=note_import module=service status=ok note_id={} tags={}",
            note.id,
            note.tags.len()
        );
        self.prepend(note)
    }

    /// Replaces the active note with `edit` applied and a fresh timestamp.
    ///
    /// Returns `Ok(None)` without touching the store when no note is active.
    pub fn update_active(&mut self, edit: NoteEdit) -> NotebookResult<Option<&Note>> {
        let Some(index) = self.active_index() else {
            debug!("event=note_update module=service status=skipped reason=no_active_note");
            return Ok(None);
        };

        let updated = self.notes[index].with_edit(edit, self.identity.now());
        let mut next = self.notes.clone();
        next[index] = updated;
        self.commit(next)?;

        let note = &self.notes[index];
        info!(
            "event=note_update module=service status=ok note_id={}",
            note.id
        );
        Ok(Some(note))
    }

    /// Removes `id` from the collection.
    ///
    /// Returns whether a note was removed. The collection is persisted either
    /// way.
    pub fn delete_note(&mut self, id: &str) -> NotebookResult<bool> {
        let next: Vec<Note> = self
            .notes
            .iter()
            .filter(|note| note.id != id)
            .cloned()
            .collect();
        let removed = next.len() != self.notes.len();
        let next_active = if self.active_id.as_deref() == Some(id) {
            next.first().map(|note| note.id.clone())
        } else {
            self.active_id.clone()
        };

        self.commit(next)?;
        self.active_id = next_active;
        info!(
            "event=note_delete module=service status=ok note_id={id} removed={removed}"
        );
        Ok(removed)
    }

    /// Exports the active note as markdown with a suggested file name.
    pub fn export_active(&self) -> Option<MarkdownExport> {
        let note = self.active()?;
        Some(MarkdownExport {
            file_name: export_file_name(&note.title),
            markdown: export_as_markdown(note),
        })
    }

    /// Consumes the service and returns the underlying store.
    pub fn into_store(self) -> S {
        self.store
    }

    fn prepend(&mut self, note: Note) -> NotebookResult<&Note> {
        let id = note.id.clone();
        let mut next = Vec::with_capacity(self.notes.len() + 1);
        next.push(note);
        next.extend(self.notes.iter().cloned());

        self.commit(next)?;
        self.active_id = Some(id);
        Ok(&self.notes[0])
    }

    fn active_index(&self) -> Option<usize> {
        let active_id = self.active_id.as_deref()?;
        self.notes.iter().position(|note| note.id == active_id)
    }

    fn commit(&mut self, next: Vec<Note>) -> NotebookResult<()> {
        self.store.save(&serialize(&next))?;
        self.notes = next;
        Ok(())
    }
}
