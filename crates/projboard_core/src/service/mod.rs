//! Core use-case services.
//!
//! # Responsibility
//! - Turn raw front-end input into typed store calls.
//! - Keep views free of validation rules.

pub mod submission;
