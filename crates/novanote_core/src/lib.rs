//! Core domain logic for Nova Notes.
//! This crate owns the markup renderer and the note codec.

pub mod codec;
pub mod display;
pub mod logging;
pub mod model;
pub mod render;
pub mod service;

pub use codec::{
    create_empty, create_empty_with, deserialize, export_as_markdown, import_from_markdown,
    import_from_markdown_with, normalize_tags, parse_tags_input, serialize, STORAGE_VERSION,
};
pub use display::{export_file_name, format_updated_at, UNKNOWN_TIMESTAMP};
pub use logging::{default_log_level, flush_logging, init_logging, logging_status, LoggingError};
pub use model::identity::{NoteIdentity, SystemIdentity};
pub use model::note::{Note, NoteEdit, NoteId, PLACEHOLDER_TITLE};
pub use model::tags::TagSet;
pub use render::render;
pub use service::notebook_service::{
    MarkdownExport, NotebookError, NotebookResult, NotebookService,
};
pub use service::store::{MemoryNoteStore, NoteStore, StoreError, StoreResult, STORAGE_KEY};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
