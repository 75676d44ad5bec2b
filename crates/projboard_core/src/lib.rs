//! Core logic for the project board.
//! Owns project state, field validation and the submission use-case; front-ends
//! only feed raw input and render store snapshots.

pub mod app;
pub mod config;
pub mod logging;
pub mod model;
pub mod service;
pub mod state;
pub mod validation;
pub mod view;

pub use app::{MountedBoard, ProjectBoard};
pub use config::{BoardConfig, ConfigError};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::project::{Project, ProjectId, ProjectStatus};
pub use service::submission::{
    gather_user_input, FormFields, ProjectDraft, UserInput, INVALID_INPUT_MESSAGE,
};
pub use state::project_state::{Listener, ProjectStore};
pub use validation::{coerce_number, validate, FieldValue, Validatable};
pub use view::alert::{Alert, LogAlert};
pub use view::project_input::{ProjectInput, SubmissionOutcome};
pub use view::project_list::ProjectList;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
