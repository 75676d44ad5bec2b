//! Domain model for submitted projects.
//!
//! # Responsibility
//! - Define the record shape shared by the store and every list view.
//!
//! # Invariants
//! - Every project is identified by a stable `ProjectId`.
//! - Records are never edited or removed once accepted.

pub mod project;
