use novanote_core::{
    deserialize, parse_tags_input, serialize, MemoryNoteStore, Note, NoteEdit, NoteIdentity,
    NoteStore, NotebookError, NotebookService, StoreError, StoreResult, PLACEHOLDER_TITLE,
};
use std::cell::Cell;

/// Mints `note-1`, `note-2`, ... and a monotonically increasing clock.
#[derive(Default)]
struct SequenceIdentity {
    next: Cell<u32>,
    tick: Cell<u32>,
}

impl NoteIdentity for SequenceIdentity {
    fn next_id(&self) -> String {
        self.next.set(self.next.get() + 1);
        format!("note-{}", self.next.get())
    }

    fn now(&self) -> String {
        self.tick.set(self.tick.get() + 1);
        format!("2026-02-11T10:00:{:02}.000Z", self.tick.get())
    }
}

struct FailingStore;

impl NoteStore for FailingStore {
    fn load(&self) -> StoreResult<Option<String>> {
        Ok(None)
    }

    fn save(&mut self, _raw: &str) -> StoreResult<()> {
        Err(StoreError::Unavailable("quota exceeded".to_string()))
    }
}

fn open_empty() -> NotebookService<MemoryNoteStore> {
    NotebookService::open_with_identity(
        MemoryNoteStore::new(),
        Box::new(SequenceIdentity::default()),
    )
    .unwrap()
}

fn stored_notes(service: NotebookService<MemoryNoteStore>) -> Vec<Note> {
    let store = service.into_store();
    deserialize(store.blob())
}

#[test]
fn open_loads_persisted_notes_and_activates_first() {
    let first = Note::empty("a", "2026-02-11T10:00:00.000Z");
    let second = Note::empty("b", "2026-02-11T10:00:00.000Z");
    let store = MemoryNoteStore::with_blob(serialize(&[first, second]));

    let service = NotebookService::open(store).unwrap();

    assert_eq!(service.notes().len(), 2);
    assert_eq!(service.active_id(), Some("a"));
}

#[test]
fn open_with_corrupt_blob_starts_empty() {
    let service = NotebookService::open(MemoryNoteStore::with_blob("{broken")).unwrap();
    assert!(service.notes().is_empty());
    assert!(service.active().is_none());
}

#[test]
fn add_note_prepends_activates_and_persists() {
    let mut service = open_empty();
    service.add_note().unwrap();
    let added = service.add_note().unwrap().clone();

    assert_eq!(added.id, "note-2");
    assert_eq!(added.title, PLACEHOLDER_TITLE);
    assert_eq!(service.active_id(), Some("note-2"));
    let ids: Vec<&str> = service.notes().iter().map(|note| note.id.as_str()).collect();
    assert_eq!(ids, vec!["note-2", "note-1"]);

    let persisted = stored_notes(service);
    assert_eq!(persisted.len(), 2);
    assert_eq!(persisted[0].id, "note-2");
}

#[test]
fn update_active_replaces_record_and_refreshes_timestamp() {
    let mut service = open_empty();
    let created = service.add_note().unwrap().clone();

    let edit = NoteEdit {
        title: Some("Groceries".to_string()),
        content: Some("- milk".to_string()),
        tags: Some(parse_tags_input("Home, home, Errands")),
    };
    let updated = service.update_active(edit).unwrap().unwrap().clone();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "Groceries");
    assert_eq!(updated.content, "- milk");
    assert_eq!(updated.tags.as_slice(), ["home", "errands"]);
    assert_ne!(updated.updated_at, created.updated_at);

    let persisted = stored_notes(service);
    assert_eq!(persisted, vec![updated]);
}

#[test]
fn update_without_active_note_is_a_no_op() {
    let mut service = open_empty();
    let result = service.update_active(NoteEdit::title("x")).unwrap();
    assert!(result.is_none());
    assert!(service.into_store().blob().is_none());
}

#[test]
fn deleting_active_note_activates_first_remaining() {
    let mut service = open_empty();
    service.add_note().unwrap();
    service.add_note().unwrap();
    service.add_note().unwrap();
    assert_eq!(service.active_id(), Some("note-3"));

    assert!(service.delete_note("note-3").unwrap());
    assert_eq!(service.active_id(), Some("note-2"));

    service.select("note-1").unwrap();
    assert!(service.delete_note("note-2").unwrap());
    assert_eq!(service.active_id(), Some("note-1"));

    assert!(!service.delete_note("missing").unwrap());
    assert!(service.delete_note("note-1").unwrap());
    assert_eq!(service.active_id(), None);
    assert!(stored_notes(service).is_empty());
}

#[test]
fn import_and_export_go_through_markdown_documents() {
    let mut service = open_empty();
    let imported = service
        .import_markdown("---\ntitle: Weekly Review\ntags: Work\n---\n\n## Wins")
        .unwrap()
        .clone();

    assert_eq!(imported.id, "note-1");
    assert_eq!(imported.title, "Weekly Review");
    assert_eq!(service.active_id(), Some("note-1"));

    let export = service.export_active().unwrap();
    assert_eq!(export.file_name, "weekly-review.md");
    assert!(export.markdown.starts_with("---\ntitle: Weekly Review\n"));
    assert!(export.markdown.ends_with("\n\n## Wins"));
}

#[test]
fn store_failure_leaves_collection_unchanged() {
    let mut service = NotebookService::open(FailingStore).unwrap();

    let err = service.add_note().unwrap_err();

    assert!(matches!(err, NotebookError::Store(_)));
    assert!(err.to_string().contains("quota exceeded"));
    assert!(service.notes().is_empty());
    assert!(service.active_id().is_none());
}
