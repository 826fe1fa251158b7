//! Identifier and clock service for new notes.
//!
//! Id and timestamp generation are injected so import/create paths stay
//! deterministic under test.

use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

/// Source of fresh note ids and current timestamps.
pub trait NoteIdentity {
    /// Mints a new unique note id.
    fn next_id(&self) -> String;
    /// Returns the current time as an ISO-8601 string.
    fn now(&self) -> String;
}

/// Default identity: UUID v4 ids and UTC wall-clock timestamps.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemIdentity;

impl NoteIdentity for SystemIdentity {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }

    fn now(&self) -> String {
        // e.g. 2026-02-11T10:00:00.000Z
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}
