//! Project domain model.
//!
//! # Responsibility
//! - Define the canonical record appended by the project store.
//! - Define the status used to split records between list views.
//!
//! # Invariants
//! - `id` is generated once and never reused for another project.
//! - New projects always start as `ProjectStatus::Active`.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for one accepted project.
pub type ProjectId = Uuid;

/// List a project belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Accepted and still open.
    Active,
    /// Done. No operation moves a project here yet.
    Finished,
}

impl ProjectStatus {
    /// Lowercase name used for element ids (`active`, `finished`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }
}

impl Display for ProjectStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One accepted project.
///
/// Fields are public for cheap rendering; the store only ever hands out
/// copies, so edits to a received record never reach store state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    /// Number of people assigned.
    pub people: u32,
    pub status: ProjectStatus,
}

impl Project {
    /// Creates an active project with a freshly generated id.
    pub fn new(title: impl Into<String>, description: impl Into<String>, people: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            people,
            status: ProjectStatus::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == ProjectStatus::Active
    }
}
