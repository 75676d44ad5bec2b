//! Declarative single-field validation.
//!
//! # Responsibility
//! - Describe which checks apply to one field value.
//! - Evaluate those checks without side effects.
//!
//! # Invariants
//! - All bounds are exclusive: `len > min_length`, `value < max`, and so on.
//! - Checks whose type guard does not match the value are skipped, not failed.

pub mod validatable;

pub use validatable::{coerce_number, trim_blank, validate, FieldValue, Validatable};
