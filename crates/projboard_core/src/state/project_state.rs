//! Project store with synchronous change notification.
//!
//! # Responsibility
//! - Append accepted projects in creation order.
//! - Invoke every listener, in registration order, after each append.
//!
//! # Invariants
//! - Records are append-only; nothing is edited or removed.
//! - Listeners are never deduplicated or removed.
//! - No internal borrow is held while a listener runs, so a listener may
//!   call back into the store.
//! - There is no public constructor; handles come from `ProjectBoard::store`.

use crate::model::project::Project;
use log::debug;
use std::cell::RefCell;
use std::fmt::{Debug, Formatter};
use std::rc::Rc;

/// Callback invoked with a snapshot of all projects after every change.
pub type Listener = Rc<dyn Fn(Vec<Project>)>;

#[derive(Default)]
struct StoreInner {
    projects: RefCell<Vec<Project>>,
    listeners: RefCell<Vec<Listener>>,
}

/// Cloneable handle to the single project store.
///
/// Cloning the handle never copies state; all clones observe the same
/// projects and listeners.
#[derive(Clone)]
pub struct ProjectStore {
    inner: Rc<StoreInner>,
}

impl ProjectStore {
    pub(crate) fn new() -> Self {
        Self {
            inner: Rc::new(StoreInner::default()),
        }
    }

    /// Registers one listener.
    ///
    /// Registering the same callback twice yields two invocations per change.
    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(Vec<Project>) + 'static,
    {
        self.inner.listeners.borrow_mut().push(Rc::new(listener));
    }

    /// Appends a new active project and notifies every listener.
    ///
    /// # Contract
    /// - Inputs are assumed validated by the caller; there is no rejection path.
    /// - Each listener receives its own copy of the full sequence.
    pub fn add_project(&self, title: &str, description: &str, people: u32) {
        let project = Project::new(title, description, people);
        let project_id = project.id;
        let snapshot = {
            let mut projects = self.inner.projects.borrow_mut();
            projects.push(project);
            projects.clone()
        };
        let listeners = self.inner.listeners.borrow().clone();

        debug!(
            "event=project_added module=state status=ok project_id={} projects={} listeners={}",
            project_id,
            snapshot.len(),
            listeners.len()
        );

        for listener in &listeners {
            listener(snapshot.clone());
        }
    }

    /// Returns a snapshot of all projects in creation order.
    pub fn projects(&self) -> Vec<Project> {
        self.inner.projects.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.inner.projects.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.projects.borrow().is_empty()
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    /// Returns whether both handles point at the same store.
    pub fn same_instance(&self, other: &ProjectStore) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Debug for ProjectStore {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectStore")
            .field("projects", &self.len())
            .field("listeners", &self.listener_count())
            .finish()
    }
}
