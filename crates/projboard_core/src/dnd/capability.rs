//! Drag source and drop target capability roles.

use crate::dnd::transfer::{DragEffect, DragEvent};

/// Source-side gesture phase.
///
/// `Dragging` ends in either `DragOutcome`, after which the source is
/// `Idle` again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
}

/// How a gesture ended, from the source's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    Dropped,
    Cancelled,
}

impl DragOutcome {
    /// Derives the outcome from the drag-end event's applied drop effect.
    pub fn from_event(event: &DragEvent) -> Self {
        match event.data_transfer().map(|transfer| transfer.drop_effect()) {
            Some(DragEffect::None) | None => Self::Cancelled,
            Some(_) => Self::Dropped,
        }
    }
}

/// Target-side hover state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetState {
    #[default]
    Idle,
    /// A payload the target accepts is over it; the droppable affordance
    /// is shown.
    Hover,
}

/// Something the user can pick up.
pub trait DragSource {
    fn on_drag_start(&mut self, event: &mut DragEvent);
    fn on_drag_end(&mut self, event: &DragEvent) -> DragOutcome;
}

/// Something a dragged payload can be dropped on.
pub trait DropTarget {
    /// Returns whether the payload is accepted, in which case the event's
    /// default handling has been prevented.
    fn on_drag_over(&mut self, event: &mut DragEvent) -> bool;
    /// Returns whether the drop changed store state.
    fn on_drop(&mut self, event: &mut DragEvent) -> bool;
    fn on_drag_leave(&mut self, event: &DragEvent);
}

#[cfg(test)]
mod tests {
    use super::DragOutcome;
    use crate::dnd::transfer::{DataTransfer, DragEffect, DragEvent};

    #[test]
    fn outcome_follows_drop_effect() {
        let mut transfer = DataTransfer::new();
        assert_eq!(
            DragOutcome::from_event(&DragEvent::new(transfer.clone())),
            DragOutcome::Cancelled
        );

        transfer.set_drop_effect(DragEffect::Move);
        assert_eq!(
            DragOutcome::from_event(&DragEvent::new(transfer)),
            DragOutcome::Dropped
        );
        assert_eq!(
            DragOutcome::from_event(&DragEvent::without_data()),
            DragOutcome::Cancelled
        );
    }
}
