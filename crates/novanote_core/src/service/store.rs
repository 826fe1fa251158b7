//! Persistence seam for the serialized note collection.
//!
//! # Responsibility
//! - Define the load/save contract the notebook service persists through.
//! - Provide an in-process implementation for embedding and tests.
//!
//! # Invariants
//! - A store holds exactly one blob under one key; `save` replaces it whole.
//! - Stores never interpret the blob; decoding belongs to the codec.

use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Key the collection blob is stored under.
pub const STORAGE_KEY: &str = "nova-notes-v1";

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-layer failure.
#[derive(Debug)]
pub enum StoreError {
    /// Backend refused or could not complete the operation.
    Unavailable(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(message) => write!(f, "note store unavailable: {message}"),
        }
    }
}

impl Error for StoreError {}

/// Key-value style blob storage for the note collection.
pub trait NoteStore {
    /// Returns the stored blob, or `None` when nothing was saved yet.
    fn load(&self) -> StoreResult<Option<String>>;
    /// Replaces the stored blob.
    fn save(&mut self, raw: &str) -> StoreResult<()>;
}

/// In-memory key-value store.
#[derive(Debug, Clone, Default)]
pub struct MemoryNoteStore {
    entries: HashMap<String, String>,
}

impl MemoryNoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with `raw` under [`STORAGE_KEY`].
    pub fn with_blob(raw: impl Into<String>) -> Self {
        let mut entries = HashMap::new();
        entries.insert(STORAGE_KEY.to_string(), raw.into());
        Self { entries }
    }

    /// Returns the current blob without going through the trait.
    pub fn blob(&self) -> Option<&str> {
        self.entries.get(STORAGE_KEY).map(String::as_str)
    }
}

impl NoteStore for MemoryNoteStore {
    fn load(&self) -> StoreResult<Option<String>> {
        Ok(self.entries.get(STORAGE_KEY).cloned())
    }

    fn save(&mut self, raw: &str) -> StoreResult<()> {
        self.entries.insert(STORAGE_KEY.to_string(), raw.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{MemoryNoteStore, NoteStore};

    #[test]
    fn memory_store_starts_empty_and_replaces_on_save() {
        let mut store = MemoryNoteStore::new();
        assert_eq!(store.load().unwrap(), None);

        store.save("first").unwrap();
        store.save("second").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("second"));
        assert_eq!(store.blob(), Some("second"));
    }
}
