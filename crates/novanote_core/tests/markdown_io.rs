use novanote_core::{
    export_as_markdown, import_from_markdown, import_from_markdown_with, Note, NoteIdentity,
    PLACEHOLDER_TITLE,
};

struct FixedIdentity;

impl NoteIdentity for FixedIdentity {
    fn next_id(&self) -> String {
        "fixed-id".to_string()
    }

    fn now(&self) -> String {
        "2030-01-01T00:00:00.000Z".to_string()
    }
}

fn sample_note() -> Note {
    let mut note = Note::empty("original-id", "2026-02-11T10:00:00.000Z");
    note.title = "Launch plan".to_string();
    note.tags = ["roadmap", "demo"].into_iter().collect();
    note.content = "# Goals\n\n- ship *fast*\n".to_string();
    note
}

#[test]
fn export_then_import_keeps_title_tags_and_content() {
    let original = sample_note();

    let imported = import_from_markdown(&export_as_markdown(&original));

    assert_eq!(imported.title, original.title);
    assert_eq!(imported.tags, original.tags);
    assert_eq!(imported.content, original.content);
    assert_eq!(imported.updated_at, original.updated_at);
    assert_ne!(imported.id, original.id);
}

#[test]
fn import_without_frontmatter_uses_defaults_and_verbatim_body() {
    let text = "  just text\n---\nnot: metadata";
    let imported = import_from_markdown_with(text, &FixedIdentity);

    assert_eq!(imported.id, "fixed-id");
    assert_eq!(imported.title, PLACEHOLDER_TITLE);
    assert_eq!(imported.updated_at, "2030-01-01T00:00:00.000Z");
    assert!(imported.tags.is_empty());
    assert_eq!(imported.content, text);
}

#[test]
fn import_with_empty_values_falls_back() {
    let text = "---\ntitle: \nupdatedAt:\ntags: \n---\n\nbody";
    let imported = import_from_markdown_with(text, &FixedIdentity);

    assert_eq!(imported.title, PLACEHOLDER_TITLE);
    assert_eq!(imported.updated_at, "2030-01-01T00:00:00.000Z");
    assert!(imported.tags.is_empty());
    assert_eq!(imported.content, "body");
}

#[test]
fn import_parses_tags_and_ignores_unknown_keys() {
    let text = "---\ntitle: Notes\nauthor: someone\ntags: Rust, rust , CLI\n---\nbody line";
    let imported = import_from_markdown_with(text, &FixedIdentity);

    assert_eq!(imported.title, "Notes");
    assert_eq!(imported.tags.as_slice(), ["rust", "cli"]);
    assert_eq!(imported.content, "body line");
}

#[test]
fn import_strips_leading_blank_lines_after_header() {
    let text = "---\ntitle: T\n---\n\n\n\nfirst\n\nsecond";
    let imported = import_from_markdown_with(text, &FixedIdentity);
    assert_eq!(imported.content, "first\n\nsecond");
}
