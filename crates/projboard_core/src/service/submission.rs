//! Form submission use-case.
//!
//! # Responsibility
//! - Turn three raw form fields into either a typed draft or a rejection.
//! - Keep the constraint sets for each field in one place.
//!
//! # Invariants
//! - Rejection is all-or-nothing; no partial drafts and no per-field detail.
//! - This module never touches the store or the form fields.

use crate::validation::{coerce_number, validate, Validatable};

/// Message shown to the user when any field is rejected.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input please try again";

const DESCRIPTION_MIN_LENGTH: usize = 5;
const PEOPLE_MIN: f64 = 1.0;
const PEOPLE_MAX: f64 = 5.0;

/// Raw, unvalidated form field values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub title: String,
    pub description: String,
    /// Numeric text as typed by the user.
    pub people: String,
}

impl FormFields {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        people: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            people: people.into(),
        }
    }

    /// Resets every field to empty text.
    pub fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
        self.people.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.description.is_empty() && self.people.is_empty()
    }
}

/// Typed values of an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub people: u32,
}

/// Result of gathering user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserInput {
    Valid(ProjectDraft),
    Rejected,
}

impl UserInput {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }
}

/// Validates all three fields and returns a typed draft when every one passes.
///
/// Constraint sets:
/// - title: `required`
/// - description: `required`, `min_length: 5`
/// - people: `required`, `min: 1`, `max: 5` on the coerced number
///
/// A people number that passes its bounds but is not a whole number is
/// rejected, since a project count is an integer.
pub fn gather_user_input(fields: &FormFields) -> UserInput {
    let people = coerce_number(fields.people.as_str());

    let title_rules = Validatable::text(fields.title.as_str()).required();
    let description_rules = Validatable::text(fields.description.as_str())
        .required()
        .min_length(DESCRIPTION_MIN_LENGTH);
    let people_rules = Validatable::number(people)
        .required()
        .min(PEOPLE_MIN)
        .max(PEOPLE_MAX);

    if !validate(&title_rules) || !validate(&description_rules) || !validate(&people_rules) {
        return UserInput::Rejected;
    }

    match whole_count(people) {
        Some(people) => UserInput::Valid(ProjectDraft {
            title: fields.title.clone(),
            description: fields.description.clone(),
            people,
        }),
        None => UserInput::Rejected,
    }
}

fn whole_count(value: f64) -> Option<u32> {
    if value.fract() != 0.0 || value < 0.0 || value > f64::from(u32::MAX) {
        return None;
    }
    Some(value as u32)
}

#[cfg(test)]
mod tests {
    use super::{gather_user_input, whole_count, FormFields, ProjectDraft, UserInput};

    #[test]
    fn valid_fields_produce_typed_draft() {
        let fields = FormFields::new("Build API", "A full description", " 3 ");
        assert_eq!(
            gather_user_input(&fields),
            UserInput::Valid(ProjectDraft {
                title: "Build API".to_string(),
                description: "A full description".to_string(),
                people: 3,
            })
        );
    }

    #[test]
    fn fractional_people_is_rejected() {
        let fields = FormFields::new("Build API", "A full description", "2.5");
        assert_eq!(gather_user_input(&fields), UserInput::Rejected);
    }

    #[test]
    fn non_numeric_people_is_rejected() {
        let fields = FormFields::new("Build API", "A full description", "three");
        assert!(!gather_user_input(&fields).is_valid());
    }

    #[test]
    fn whole_count_rejects_fractions_and_negatives() {
        assert_eq!(whole_count(4.0), Some(4));
        assert_eq!(whole_count(4.5), None);
        assert_eq!(whole_count(-1.0), None);
        assert_eq!(whole_count(f64::NAN), None);
    }

    #[test]
    fn clear_resets_every_field() {
        let mut fields = FormFields::new("a", "b", "1");
        fields.clear();
        assert!(fields.is_empty());
    }
}
