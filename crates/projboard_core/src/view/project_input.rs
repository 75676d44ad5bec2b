//! Project input form.
//!
//! # Responsibility
//! - Own the three raw form fields.
//! - Drive one submission: gather, alert or add, then clear.
//!
//! # Invariants
//! - A rejected submission leaves every field untouched.
//! - An accepted submission clears every field after the store is updated.

use crate::service::submission::{
    gather_user_input, FormFields, UserInput, INVALID_INPUT_MESSAGE,
};
use crate::state::project_state::ProjectStore;
use crate::view::alert::Alert;
use log::info;

/// Element id of the input form.
pub const INPUT_ELEMENT_ID: &str = "user-input";

/// Outcome of one `ProjectInput::submit` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Accepted,
    Rejected,
}

/// Form that collects title, description and people count.
pub struct ProjectInput<A: Alert> {
    store: ProjectStore,
    alert: A,
    fields: FormFields,
}

impl<A: Alert> ProjectInput<A> {
    pub fn new(store: ProjectStore, alert: A) -> Self {
        Self {
            store,
            alert,
            fields: FormFields::default(),
        }
    }

    pub fn element_id(&self) -> &'static str {
        INPUT_ELEMENT_ID
    }

    pub fn set_title(&mut self, value: impl Into<String>) {
        self.fields.title = value.into();
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.fields.description = value.into();
    }

    pub fn set_people(&mut self, value: impl Into<String>) {
        self.fields.people = value.into();
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn alert_sink(&self) -> &A {
        &self.alert
    }

    /// Handles one form submission.
    pub fn submit(&mut self) -> SubmissionOutcome {
        match gather_user_input(&self.fields) {
            UserInput::Valid(draft) => {
                self.store
                    .add_project(&draft.title, &draft.description, draft.people);
                self.clear_inputs();
                SubmissionOutcome::Accepted
            }
            UserInput::Rejected => {
                info!("event=submission module=view status=rejected");
                self.alert.alert(INVALID_INPUT_MESSAGE);
                SubmissionOutcome::Rejected
            }
        }
    }

    pub fn clear_inputs(&mut self) {
        self.fields.clear();
    }
}
