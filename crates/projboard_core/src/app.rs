//! Composition root for the project board.
//!
//! # Responsibility
//! - Create the project store lazily, exactly once per process.
//! - Build the input form and both status lists around one store handle.
//!
//! # Invariants
//! - Every `ProjectBoard::store` call, on any board, returns a handle to the
//!   same store.
//! - The store is `!Send`, so it lives on the one thread that drives the UI.
//! - Lists are mounted in `Active`, `Finished` order.

use crate::model::project::ProjectStatus;
use crate::state::project_state::ProjectStore;
use crate::view::alert::Alert;
use crate::view::project_input::ProjectInput;
use crate::view::project_list::ProjectList;
use log::info;
use once_cell::unsync::Lazy;

thread_local! {
    static PROJECT_STORE: Lazy<ProjectStore> = Lazy::new(|| {
        info!("event=store_init module=app status=ok");
        ProjectStore::new()
    });
}

/// Entry point to the single project store.
///
/// Boards hold no state of their own; any number of them share one store.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProjectBoard {
    _private: (),
}

impl ProjectBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the store handle, creating the store on first access.
    pub fn store(&self) -> ProjectStore {
        PROJECT_STORE.with(|store| ProjectStore::clone(store))
    }

    /// Builds the input form and both lists, all subscribed to this board.
    pub fn mount<A: Alert>(&self, alert: A) -> MountedBoard<A> {
        let store = self.store();
        let input = ProjectInput::new(store.clone(), alert);
        let active = ProjectList::new(&store, ProjectStatus::Active);
        let finished = ProjectList::new(&store, ProjectStatus::Finished);
        MountedBoard {
            input,
            active,
            finished,
        }
    }
}

/// Input form plus both lists, as mounted on the page.
pub struct MountedBoard<A: Alert> {
    pub input: ProjectInput<A>,
    pub active: ProjectList,
    pub finished: ProjectList,
}

impl<A: Alert> MountedBoard<A> {
    /// Renders both lists, active first.
    pub fn render(&self) -> String {
        format!("{}\n{}", self.active.render(), self.finished.render())
    }
}
