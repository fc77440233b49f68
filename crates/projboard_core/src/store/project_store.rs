//! Project store with listener fan-out.
//!
//! # Responsibility
//! - Create projects and apply status moves.
//! - Notify listeners with a full snapshot after every effective change.
//!
//! # Invariants
//! - Ids are unique for the store's lifetime.
//! - `move_project` with an unknown id or an unchanged status is a silent
//!   no-op: no error, no notification.
//! - Listeners must not call back into the store; the store is borrowed for
//!   the whole notification pass.

use crate::model::project::{Project, ProjectId, ProjectStatus};
use crate::store::listeners::Listeners;
use log::{debug, info};
use std::cell::RefCell;
use std::rc::Rc;

/// Shared single-threaded store handle handed to components.
pub type SharedStore = Rc<RefCell<ProjectStore>>;

thread_local! {
    static INSTANCE: SharedStore = ProjectStore::shared();
}

/// Canonical owner of the project sequence.
#[derive(Default)]
pub struct ProjectStore {
    projects: Vec<Project>,
    listeners: Listeners<Project>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a fresh store wrapped in a shared handle.
    pub fn shared() -> SharedStore {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Returns the UI thread's store, creating it on first call.
    ///
    /// Every later call on the same thread returns the same handle. Hosts
    /// use this as their single instantiation point and inject the handle
    /// into components; core code never reaches for it on its own.
    pub fn instance() -> SharedStore {
        INSTANCE.with(Rc::clone)
    }

    /// Registers a snapshot listener. Registration order is notification
    /// order.
    pub fn add_listener(&mut self, listener: impl FnMut(Vec<Project>) + 'static) {
        self.listeners.add(listener);
        debug!(
            "event=listener_add module=store status=ok listeners={}",
            self.listeners.len()
        );
    }

    /// Appends a new `Active` project and notifies listeners.
    ///
    /// Returns the generated id.
    pub fn add_project(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> ProjectId {
        let project = Project::new(title, description, people);
        let id = project.id.clone();
        self.projects.push(project);
        info!(
            "event=project_add module=store status=ok id={} people={} total={}",
            id,
            people,
            self.projects.len()
        );
        self.update_listeners();
        id
    }

    /// Sets the status of project `id` to `new_status`.
    ///
    /// Returns `true` when the status changed and listeners were notified.
    pub fn move_project(&mut self, id: &str, new_status: ProjectStatus) -> bool {
        let Some(project) = self.projects.iter_mut().find(|project| project.id == id) else {
            debug!(
                "event=project_move module=store status=skipped reason=unknown_id id={}",
                id
            );
            return false;
        };

        if project.status == new_status {
            debug!(
                "event=project_move module=store status=skipped reason=unchanged id={} to={}",
                id, new_status
            );
            return false;
        }

        let from = project.status;
        project.status = new_status;
        info!(
            "event=project_move module=store status=ok id={} from={} to={}",
            id, from, new_status
        );
        self.update_listeners();
        true
    }

    /// Copy of the current sequence in creation order.
    pub fn snapshot(&self) -> Vec<Project> {
        self.projects.clone()
    }

    pub fn get(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn update_listeners(&mut self) {
        self.listeners.notify(&self.projects);
    }
}
