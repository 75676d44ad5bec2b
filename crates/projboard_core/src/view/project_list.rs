//! Per-status project list view.
//!
//! # Responsibility
//! - Subscribe to the store once and keep the projects of one status.
//! - Re-render the full item list on every notification.
//!
//! # Invariants
//! - The subscription holds only a weak handle; dropping the list stops
//!   rendering without unsubscribing.
//! - Rendered items always mirror the latest snapshot, never an append.

use crate::model::project::{Project, ProjectStatus};
use crate::state::project_state::ProjectStore;
use std::cell::{Ref, RefCell};
use std::rc::Rc;

#[derive(Debug)]
struct ListState {
    assigned_projects: Vec<Project>,
    rendered_items: Vec<String>,
}

/// List of projects with one status, e.g. `ACTIVE PROJECTS`.
#[derive(Debug, Clone)]
pub struct ProjectList {
    kind: ProjectStatus,
    state: Rc<RefCell<ListState>>,
}

impl ProjectList {
    /// Creates the list and subscribes it to `store`.
    pub fn new(store: &ProjectStore, kind: ProjectStatus) -> Self {
        let state = Rc::new(RefCell::new(ListState {
            assigned_projects: Vec::new(),
            rendered_items: Vec::new(),
        }));

        let weak_state = Rc::downgrade(&state);
        store.subscribe(move |projects: Vec<Project>| {
            let Some(shared) = weak_state.upgrade() else {
                return;
            };
            let assigned: Vec<Project> = projects
                .into_iter()
                .filter(|project| project.status == kind)
                .collect();
            let rendered = render_items(&assigned);

            let mut state = shared.borrow_mut();
            state.assigned_projects = assigned;
            state.rendered_items = rendered;
        });

        Self { kind, state }
    }

    pub fn kind(&self) -> ProjectStatus {
        self.kind
    }

    /// Element id, e.g. `active-projects`.
    pub fn element_id(&self) -> String {
        format!("{}-projects", self.kind.as_str())
    }

    /// Item list id, e.g. `active-projects-list`.
    pub fn list_id(&self) -> String {
        format!("{}-projects-list", self.kind.as_str())
    }

    pub fn heading(&self) -> String {
        format!("{} PROJECTS", self.kind.as_str().to_uppercase())
    }

    pub fn assigned_projects(&self) -> Ref<'_, [Project]> {
        Ref::map(self.state.borrow(), |state| state.assigned_projects.as_slice())
    }

    /// Rendered item texts (project titles) in store order.
    pub fn rendered_items(&self) -> Vec<String> {
        self.state.borrow().rendered_items.clone()
    }

    /// Renders heading and one `- title` line per item.
    pub fn render(&self) -> String {
        let state = self.state.borrow();
        let mut output = self.heading();
        output.push('\n');
        for item in &state.rendered_items {
            output.push_str("- ");
            output.push_str(item);
            output.push('\n');
        }
        output
    }
}

fn render_items(projects: &[Project]) -> Vec<String> {
    projects.iter().map(|project| project.title.clone()).collect()
}
