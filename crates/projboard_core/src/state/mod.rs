//! Observable application state.
//!
//! # Responsibility
//! - Own every accepted project record.
//! - Fan out change notifications to subscribed views.
//!
//! # Invariants
//! - State is mutated only through `ProjectStore` operations.
//! - Listeners always receive owned snapshots, never live state.

pub mod project_state;
