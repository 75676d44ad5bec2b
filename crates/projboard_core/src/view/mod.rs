//! View components wired to the project store.
//!
//! # Responsibility
//! - Hold raw form input and submit it through the submission use-case.
//! - Keep per-status project lists re-rendered from store snapshots.
//!
//! # Invariants
//! - Views subscribe once, at construction.
//! - Every notification triggers a full re-render; there is no diffing.

pub mod alert;
pub mod project_input;
pub mod project_list;
