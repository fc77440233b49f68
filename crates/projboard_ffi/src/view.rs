//! Renderer implementation backing the bridge.
//!
//! The Flutter host polls this view model instead of receiving callbacks;
//! `revision` increases on every visible change so the host knows when to
//! rebuild.

use projboard_core::{CardContent, HostSlot, ProjectStatus, Renderer};

#[derive(Debug, Default)]
pub(crate) struct BoardViewModel {
    pub(crate) active_cards: Vec<CardContent>,
    pub(crate) finished_cards: Vec<CardContent>,
    pub(crate) active_droppable: bool,
    pub(crate) finished_droppable: bool,
    pub(crate) pending_alert: Option<String>,
    pub(crate) form_resets: u64,
    pub(crate) revision: u64,
}

impl BoardViewModel {
    pub(crate) fn cards(&self, status: ProjectStatus) -> &[CardContent] {
        match status {
            ProjectStatus::Active => &self.active_cards,
            ProjectStatus::Finished => &self.finished_cards,
        }
    }

    pub(crate) fn droppable(&self, status: ProjectStatus) -> bool {
        match status {
            ProjectStatus::Active => self.active_droppable,
            ProjectStatus::Finished => self.finished_droppable,
        }
    }

    fn cards_mut(&mut self, status: ProjectStatus) -> &mut Vec<CardContent> {
        match status {
            ProjectStatus::Active => &mut self.active_cards,
            ProjectStatus::Finished => &mut self.finished_cards,
        }
    }

    fn bump(&mut self) {
        self.revision += 1;
    }
}

impl Renderer for BoardViewModel {
    // The Flutter widget tree is static; mounting has nothing to record.
    fn attach(&mut self, _slot: &HostSlot, _element_id: &str) {}

    fn alert(&mut self, message: &str) {
        self.pending_alert = Some(message.to_string());
        self.bump();
    }

    fn reset_form(&mut self) {
        self.form_resets += 1;
        self.bump();
    }

    // Headings are static text owned by the Flutter widgets.
    fn set_list_heading(&mut self, _status: ProjectStatus, _list_id: &str, _heading: &str) {}

    fn clear_list(&mut self, status: ProjectStatus) {
        self.cards_mut(status).clear();
        self.bump();
    }

    fn append_card(&mut self, status: ProjectStatus, card: &CardContent) {
        self.cards_mut(status).push(card.clone());
        self.bump();
    }

    fn set_droppable(&mut self, status: ProjectStatus, droppable: bool) {
        match status {
            ProjectStatus::Active => self.active_droppable = droppable,
            ProjectStatus::Finished => self.finished_droppable = droppable,
        }
        self.bump();
    }
}
