//! Board assembly and host event dispatch.
//!
//! # Responsibility
//! - Mount the form and both status lists around one injected store.
//! - Route host UI events (submit, drag, drop) to the owning component.
//!
//! # Invariants
//! - Mount order is form, finished list, active list; the finished list is
//!   therefore notified before the active list.
//! - A board never creates its own store.

use crate::component::project_input::ProjectInput;
use crate::component::project_list::ProjectList;
use crate::component::{mount, SharedRenderer};
use crate::config::{BoardConfig, ConfigError};
use crate::dnd::capability::{DragOutcome, DragSource, DropTarget};
use crate::dnd::transfer::DragEvent;
use crate::model::project::{ProjectId, ProjectStatus};
use crate::store::project_store::SharedStore;
use crate::validation::form::{FormInput, InputError};
use log::info;

/// A mounted project board.
pub struct Board {
    store: SharedStore,
    input: ProjectInput,
    finished: ProjectList,
    active: ProjectList,
}

impl Board {
    /// Validates `config` and mounts every component.
    pub fn new(
        store: SharedStore,
        renderer: SharedRenderer,
        config: BoardConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let input = mount(
            ProjectInput::new(store.clone(), renderer.clone(), config),
            &renderer,
        );
        let finished = mount(
            ProjectList::new(ProjectStatus::Finished, store.clone(), renderer.clone()),
            &renderer,
        );
        let active = mount(
            ProjectList::new(ProjectStatus::Active, store.clone(), renderer.clone()),
            &renderer,
        );
        info!("event=board_mount module=board status=ok");

        Ok(Self {
            store,
            input,
            finished,
            active,
        })
    }

    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    pub fn list(&self, status: ProjectStatus) -> &ProjectList {
        match status {
            ProjectStatus::Active => &self.active,
            ProjectStatus::Finished => &self.finished,
        }
    }

    fn list_mut(&mut self, status: ProjectStatus) -> &mut ProjectList {
        match status {
            ProjectStatus::Active => &mut self.active,
            ProjectStatus::Finished => &mut self.finished,
        }
    }

    pub fn submit(&mut self, input: &FormInput) -> Result<ProjectId, InputError> {
        self.input.submit(input)
    }

    /// Starts dragging the card for `project_id`.
    ///
    /// Returns `false` when no list currently shows that card.
    pub fn drag_start(&mut self, project_id: &str, event: &mut DragEvent) -> bool {
        ProjectStatus::all().into_iter().any(|status| {
            self.list(status)
                .with_item_mut(project_id, |item| item.on_drag_start(event))
                .is_some()
        })
    }

    /// Ends the gesture for `project_id`.
    ///
    /// A successful drop re-renders the lists, so the card may now live in
    /// a different list (or be a fresh instance); it is looked up again.
    pub fn drag_end(&mut self, project_id: &str, event: &DragEvent) -> Option<DragOutcome> {
        ProjectStatus::all().into_iter().find_map(|status| {
            self.list(status)
                .with_item_mut(project_id, |item| item.on_drag_end(event))
        })
    }

    pub fn drag_over(&mut self, status: ProjectStatus, event: &mut DragEvent) -> bool {
        self.list_mut(status).on_drag_over(event)
    }

    pub fn drop_on(&mut self, status: ProjectStatus, event: &mut DragEvent) -> bool {
        self.list_mut(status).on_drop(event)
    }

    pub fn drag_leave(&mut self, status: ProjectStatus, event: &DragEvent) {
        self.list_mut(status).on_drag_leave(event);
    }
}
