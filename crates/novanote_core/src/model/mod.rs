//! Note domain model.
//!
//! # Responsibility
//! - Define the note record, its tag set and edit payloads.
//! - Define the injectable id/clock service used when notes are minted.
//!
//! # Invariants
//! - A note keeps one stable id for its whole lifetime.
//! - Edits are full-record replacements, never in-place mutation.

pub mod identity;
pub mod note;
pub mod tags;
