//! Status list component.
//!
//! # Responsibility
//! - Keep the list's projects in sync with the store through a listener.
//! - Accept dropped cards and move them to this list's status.
//!
//! # Invariants
//! - The listener filters on this list's status only; ordering is the
//!   store's creation order.
//! - Hover state is cleared before a drop reaches the store.

use crate::component::project_item::ProjectItem;
use crate::component::{mount, Component, HostSlot, SharedRenderer, APP_HOST_ID};
use crate::dnd::capability::{DropTarget, TargetState};
use crate::dnd::transfer::{accepts_payload, decode_payload, DragEvent};
use crate::model::project::{Project, ProjectId, ProjectStatus};
use crate::store::project_store::SharedStore;
use log::debug;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
struct ListState {
    assigned: Vec<Project>,
    items: Vec<ProjectItem>,
    target: TargetState,
}

/// One status column of the board; acts as a drop target.
pub struct ProjectList {
    status: ProjectStatus,
    store: SharedStore,
    renderer: SharedRenderer,
    state: Rc<RefCell<ListState>>,
}

impl ProjectList {
    /// Builds an unmounted list for `status`.
    pub fn new(status: ProjectStatus, store: SharedStore, renderer: SharedRenderer) -> Self {
        Self {
            status,
            store,
            renderer,
            state: Rc::new(RefCell::new(ListState::default())),
        }
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Id of the inner card container, e.g. `active-projects-list`.
    pub fn list_id(&self) -> String {
        list_id_for(self.status)
    }

    /// Heading text, e.g. `ACTIVE PROJECTS`.
    pub fn heading(&self) -> String {
        format!("{} PROJECTS", self.status.as_str().to_uppercase())
    }

    /// Projects shown by the last render.
    pub fn assigned_projects(&self) -> Vec<Project> {
        self.state.borrow().assigned.clone()
    }

    pub fn card_ids(&self) -> Vec<ProjectId> {
        self.state
            .borrow()
            .items
            .iter()
            .map(|item| item.id().clone())
            .collect()
    }

    pub fn target_state(&self) -> TargetState {
        self.state.borrow().target
    }

    /// Runs `f` on the card for `id`, if this list currently shows it.
    pub fn with_item_mut<R>(&self, id: &str, f: impl FnOnce(&mut ProjectItem) -> R) -> Option<R> {
        let mut state = self.state.borrow_mut();
        state.items.iter_mut().find(|item| item.id() == id).map(f)
    }

    fn clear_hover(&self) {
        let was_hovered = {
            let mut state = self.state.borrow_mut();
            let was_hovered = state.target == TargetState::Hover;
            state.target = TargetState::Idle;
            was_hovered
        };
        if was_hovered {
            self.renderer
                .borrow_mut()
                .set_droppable(self.status, false);
        }
    }
}

fn list_id_for(status: ProjectStatus) -> String {
    format!("{}-projects-list", status.as_str())
}

fn render_projects(
    status: ProjectStatus,
    state: &Rc<RefCell<ListState>>,
    renderer: &SharedRenderer,
    assigned: Vec<Project>,
) {
    let list_id = list_id_for(status);
    renderer.borrow_mut().clear_list(status);
    let items = assigned
        .iter()
        .cloned()
        .map(|project| {
            mount(
                ProjectItem::new(project, status, list_id.as_str(), Rc::clone(renderer)),
                renderer,
            )
        })
        .collect::<Vec<_>>();

    let mut state = state.borrow_mut();
    state.assigned = assigned;
    state.items = items;
    debug!(
        "event=list_render module=component status=ok list={} cards={}",
        status,
        state.items.len()
    );
}

impl Component for ProjectList {
    fn element_id(&self) -> String {
        format!("{}-projects", self.status.as_str())
    }

    fn host(&self) -> HostSlot {
        HostSlot::end_of(APP_HOST_ID)
    }

    fn configure(&mut self) {
        let status = self.status;
        let state = Rc::clone(&self.state);
        let renderer = Rc::clone(&self.renderer);
        self.store.borrow_mut().add_listener(move |projects| {
            let assigned = projects
                .into_iter()
                .filter(|project| project.status == status)
                .collect::<Vec<_>>();
            render_projects(status, &state, &renderer, assigned);
        });
    }

    fn render_content(&mut self) {
        let list_id = self.list_id();
        let heading = self.heading();
        self.renderer
            .borrow_mut()
            .set_list_heading(self.status, list_id.as_str(), heading.as_str());
    }
}

impl DropTarget for ProjectList {
    fn on_drag_over(&mut self, event: &mut DragEvent) -> bool {
        if !event.data_transfer().is_some_and(accepts_payload) {
            debug!(
                "event=drag_over module=dnd status=skipped reason=unsupported_payload list={}",
                self.status
            );
            return false;
        }

        event.prevent_default();
        let entered = {
            let mut state = self.state.borrow_mut();
            let entered = state.target == TargetState::Idle;
            state.target = TargetState::Hover;
            entered
        };
        if entered {
            self.renderer
                .borrow_mut()
                .set_droppable(self.status, true);
        }
        true
    }

    fn on_drop(&mut self, event: &mut DragEvent) -> bool {
        self.clear_hover();

        let Some(project_id) = event.data_transfer().and_then(decode_payload) else {
            debug!(
                "event=drop module=dnd status=skipped reason=missing_payload list={}",
                self.status
            );
            return false;
        };

        let moved = self
            .store
            .borrow_mut()
            .move_project(project_id.as_str(), self.status);
        debug!(
            "event=drop module=dnd status=ok list={} id={} moved={}",
            self.status, project_id, moved
        );
        moved
    }

    fn on_drag_leave(&mut self, _event: &DragEvent) {
        self.clear_hover();
    }
}
