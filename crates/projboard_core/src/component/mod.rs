//! Headless UI components and the renderer boundary.
//!
//! # Responsibility
//! - Define the `Renderer` collaborator that owns all visual mechanics.
//! - Define the two-phase `Component` lifecycle and `mount()`.
//! - Host the project input, list and card components.
//!
//! # Invariants
//! - `mount()` attaches a component to its host before `configure()`, then
//!   calls `configure()` and `render_content()` exactly once each, in that
//!   order.
//! - Components never touch visual state except through `Renderer`.

pub mod project_input;
pub mod project_item;
pub mod project_list;

use crate::model::project::{ProjectId, ProjectStatus};
use std::cell::RefCell;
use std::rc::Rc;

/// Id of the root element every top-level component attaches to.
pub const APP_HOST_ID: &str = "app";

/// Shared renderer handle; components hold clones of it.
pub type SharedRenderer = Rc<RefCell<dyn Renderer>>;

/// Where a component's element goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostSlot {
    pub host_id: String,
    /// Insert as the host's first child instead of its last.
    pub at_start: bool,
}

impl HostSlot {
    pub fn start_of(host_id: impl Into<String>) -> Self {
        Self {
            host_id: host_id.into(),
            at_start: true,
        }
    }

    pub fn end_of(host_id: impl Into<String>) -> Self {
        Self {
            host_id: host_id.into(),
            at_start: false,
        }
    }
}

/// Text content of one project card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardContent {
    pub id: ProjectId,
    pub title: String,
    /// e.g. `3 persons assigned`.
    pub assigned: String,
    pub description: String,
    /// Set once the card has registered itself as a drag source.
    pub draggable: bool,
}

/// Platform UI collaborator.
///
/// Implementations own element creation, styling and event plumbing; the
/// core only tells them what to show.
pub trait Renderer {
    /// Creates element `element_id` and inserts it into `slot`.
    fn attach(&mut self, slot: &HostSlot, element_id: &str);
    /// Blocking user notification.
    fn alert(&mut self, message: &str);
    /// Clears the project form fields.
    fn reset_form(&mut self);
    fn set_list_heading(&mut self, status: ProjectStatus, list_id: &str, heading: &str);
    fn clear_list(&mut self, status: ProjectStatus);
    fn append_card(&mut self, status: ProjectStatus, card: &CardContent);
    /// Shows or hides the droppable affordance on a list container.
    fn set_droppable(&mut self, status: ProjectStatus, droppable: bool);
}

/// Two-phase lifecycle every renderable unit follows.
pub trait Component {
    fn element_id(&self) -> String;
    fn host(&self) -> HostSlot;
    /// Wires handlers and registers with observable collaborators.
    fn configure(&mut self);
    /// Paints static content.
    fn render_content(&mut self);
}

/// Attaches `component` to its host and runs its lifecycle once.
pub fn mount<C: Component>(mut component: C, renderer: &SharedRenderer) -> C {
    let element_id = component.element_id();
    renderer
        .borrow_mut()
        .attach(&component.host(), element_id.as_str());
    component.configure();
    component.render_content();
    component
}

#[cfg(test)]
pub(crate) mod testing {
    use super::{CardContent, HostSlot, Renderer};
    use crate::model::project::ProjectStatus;

    /// Renderer double that records every call as a line of text.
    #[derive(Debug, Default)]
    pub struct RecordingRenderer {
        pub calls: Vec<String>,
    }

    impl Renderer for RecordingRenderer {
        fn attach(&mut self, slot: &HostSlot, element_id: &str) {
            self.calls
                .push(format!("attach {element_id} -> {}", slot.host_id));
        }

        fn alert(&mut self, message: &str) {
            self.calls.push(format!("alert {message}"));
        }

        fn reset_form(&mut self) {
            self.calls.push("reset_form".to_string());
        }

        fn set_list_heading(&mut self, _status: ProjectStatus, list_id: &str, heading: &str) {
            self.calls.push(format!("heading {list_id} {heading}"));
        }

        fn clear_list(&mut self, status: ProjectStatus) {
            self.calls.push(format!("clear {status}"));
        }

        fn append_card(&mut self, status: ProjectStatus, card: &CardContent) {
            self.calls.push(format!("card {status} {}", card.id));
        }

        fn set_droppable(&mut self, status: ProjectStatus, droppable: bool) {
            self.calls.push(format!("droppable {status} {droppable}"));
        }
    }
}
