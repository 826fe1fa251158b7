//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate codec calls into collection-level use-cases.
//! - Keep UI/CLI layers decoupled from the storage mechanism.

pub mod notebook_service;
pub mod store;
