//! Versioned storage envelope for note collections.
//!
//! # Responsibility
//! - Encode a note collection as `{"version": 1, "notes": [...]}`.
//! - Decode persisted blobs leniently: whole-collection reset on envelope
//!   problems, per-record drop on note problems.
//!
//! # Invariants
//! - Decoding never fails; every malformed input maps to a (possibly empty)
//!   collection.
//! - Surviving records have their tags re-normalized.
//! - Records are never migrated between versions; any other version is reset.

use crate::model::note::Note;
use log::{debug, error};
use serde::Serialize;
use serde_json::Value;

/// Current storage envelope version.
pub const STORAGE_VERSION: u32 = 1;

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    version: u32,
    notes: &'a [Note],
}

/// Encodes `notes` into the current storage envelope.
///
/// Notes hold only strings and string arrays, so encoding cannot fail in
/// practice. If it ever does, the failure is logged and an empty envelope is
/// returned, which [`deserialize`] reads back as an empty collection.
pub fn serialize(notes: &[Note]) -> String {
    let payload = EnvelopeRef {
        version: STORAGE_VERSION,
        notes,
    };
    match serde_json::to_string(&payload) {
        Ok(encoded) => encoded,
        Err(err) => {
            error!(
                "event=notes_encode module=codec status=error notes={} error={err}",
                notes.len()
            );
            empty_envelope()
        }
    }
}

fn empty_envelope() -> String {
    format!("{{\"version\":{STORAGE_VERSION},\"notes\":[]}}")
}

/// Decodes a persisted envelope.
///
/// Returns an empty collection when `raw` is absent or empty, is not JSON, is
/// not an object, carries a version other than [`STORAGE_VERSION`], or has no
/// `notes` array. Otherwise every record that is not a structurally valid
/// note is dropped and the rest is returned in order.
pub fn deserialize(raw: Option<&str>) -> Vec<Note> {
    let Some(raw) = raw.filter(|value| !value.is_empty()) else {
        return Vec::new();
    };

    let parsed = match serde_json::from_str::<Value>(raw) {
        Ok(value) => value,
        Err(err) => {
            debug!("event=notes_decode module=codec status=reset reason=invalid_json error={err}");
            return Vec::new();
        }
    };

    let Value::Object(mut envelope) = parsed else {
        debug!("event=notes_decode module=codec status=reset reason=not_an_object");
        return Vec::new();
    };

    if !envelope.get("version").is_some_and(is_current_version) {
        debug!("event=notes_decode module=codec status=reset reason=version_mismatch");
        return Vec::new();
    }

    let Some(Value::Array(records)) = envelope.remove("notes") else {
        debug!("event=notes_decode module=codec status=reset reason=missing_notes_array");
        return Vec::new();
    };

    let total = records.len();
    let notes: Vec<Note> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| decode_record(index, record))
        .collect();

    if notes.len() != total {
        debug!(
            "event=notes_decode module=codec status=partial kept={} dropped={}",
            notes.len(),
            total - notes.len()
        );
    }
    notes
}

fn is_current_version(value: &Value) -> bool {
    value.as_f64() == Some(f64::from(STORAGE_VERSION))
}

fn decode_record(index: usize, record: Value) -> Option<Note> {
    // Arrays would otherwise satisfy serde's positional struct form.
    if !record.is_object() {
        debug!("event=note_drop module=codec index={index} reason=not_an_object");
        return None;
    }
    // `Note::tags` re-normalizes on the way in.
    match serde_json::from_value::<Note>(record) {
        Ok(note) => Some(note),
        Err(err) => {
            debug!("event=note_drop module=codec index={index} reason=invalid_shape error={err}");
            None
        }
    }
}
