//! Project card component.

use crate::component::{CardContent, Component, HostSlot, SharedRenderer};
use crate::dnd::capability::{DragOutcome, DragPhase, DragSource};
use crate::dnd::transfer::{encode_payload, DragEvent};
use crate::model::project::{Project, ProjectId, ProjectStatus};
use log::{debug, warn};

/// One rendered project card; acts as a drag source.
pub struct ProjectItem {
    project: Project,
    list_status: ProjectStatus,
    list_id: String,
    renderer: SharedRenderer,
    draggable: bool,
    phase: DragPhase,
}

impl ProjectItem {
    /// Builds an unmounted card for `project` inside the list `list_id`.
    pub fn new(
        project: Project,
        list_status: ProjectStatus,
        list_id: impl Into<String>,
        renderer: SharedRenderer,
    ) -> Self {
        Self {
            project,
            list_status,
            list_id: list_id.into(),
            renderer,
            draggable: false,
            phase: DragPhase::Idle,
        }
    }

    pub fn id(&self) -> &ProjectId {
        &self.project.id
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn content(&self) -> CardContent {
        CardContent {
            id: self.project.id.clone(),
            title: self.project.title.clone(),
            assigned: format!("{} assigned", self.project.persons_label()),
            description: self.project.description.clone(),
            draggable: self.draggable,
        }
    }
}

impl Component for ProjectItem {
    fn element_id(&self) -> String {
        self.project.id.clone()
    }

    fn host(&self) -> HostSlot {
        HostSlot::end_of(self.list_id.as_str())
    }

    fn configure(&mut self) {
        self.draggable = true;
    }

    fn render_content(&mut self) {
        let card = self.content();
        self.renderer
            .borrow_mut()
            .append_card(self.list_status, &card);
    }
}

impl DragSource for ProjectItem {
    fn on_drag_start(&mut self, event: &mut DragEvent) {
        let Some(transfer) = event.data_transfer_mut() else {
            warn!(
                "event=drag_start module=dnd status=skipped reason=no_data_transfer id={}",
                self.project.id
            );
            return;
        };
        encode_payload(transfer, self.project.id.as_str());
        self.phase = DragPhase::Dragging;
        debug!(
            "event=drag_start module=dnd status=ok id={} from={}",
            self.project.id, self.list_status
        );
    }

    fn on_drag_end(&mut self, event: &DragEvent) -> DragOutcome {
        let outcome = DragOutcome::from_event(event);
        self.phase = DragPhase::Idle;
        debug!(
            "event=drag_end module=dnd status=ok id={} outcome={:?}",
            self.project.id, outcome
        );
        outcome
    }
}
