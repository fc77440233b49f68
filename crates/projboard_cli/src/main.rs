//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `projboard_core` linkage without a UI host.
//! - Run one scripted submit + drag session and print what a renderer
//!   would be asked to show.

use projboard_core::{
    Board, BoardConfig, CardContent, DataTransfer, DragEffect, DragEvent, FormInput, HostSlot,
    ProjectStatus, ProjectStore, Renderer, SharedRenderer,
};
use std::cell::RefCell;
use std::rc::Rc;

/// Renderer that prints every call as one line.
struct StdoutRenderer;

impl Renderer for StdoutRenderer {
    fn attach(&mut self, slot: &HostSlot, element_id: &str) {
        println!("attach {element_id} -> #{}", slot.host_id);
    }

    fn alert(&mut self, message: &str) {
        println!("alert: {message}");
    }

    fn reset_form(&mut self) {
        println!("form reset");
    }

    fn set_list_heading(&mut self, _status: ProjectStatus, list_id: &str, heading: &str) {
        println!("heading #{list_id}: {heading}");
    }

    fn clear_list(&mut self, status: ProjectStatus) {
        println!("clear {status}");
    }

    fn append_card(&mut self, status: ProjectStatus, card: &CardContent) {
        println!("  [{status}] {} ({})", card.title, card.assigned);
    }

    fn set_droppable(&mut self, status: ProjectStatus, droppable: bool) {
        println!("droppable {status}={droppable}");
    }
}

fn main() {
    println!("projboard_core ping={}", projboard_core::ping());
    println!("projboard_core version={}", projboard_core::core_version());

    let renderer: SharedRenderer = Rc::new(RefCell::new(StdoutRenderer));
    let mut board = match Board::new(ProjectStore::instance(), renderer, BoardConfig::default()) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("board setup failed: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = board.submit(&FormInput::new("short", "", "42")) {
        println!("rejected: {err}");
    }
    let project_id = match board.submit(&FormInput::new(
        "Build a website",
        "Redesign the landing page",
        "3",
    )) {
        Ok(id) => id,
        Err(err) => {
            eprintln!("submit failed: {err}");
            std::process::exit(1);
        }
    };

    let mut event = DragEvent::new(DataTransfer::new());
    board.drag_start(&project_id, &mut event);
    board.drag_over(ProjectStatus::Finished, &mut event);
    board.drop_on(ProjectStatus::Finished, &mut event);
    if let Some(mut transfer) = event.into_data_transfer() {
        transfer.set_drop_effect(DragEffect::Move);
        board.drag_end(&project_id, &DragEvent::new(transfer));
    }

    println!(
        "finished={} active={}",
        board.list(ProjectStatus::Finished).card_ids().len(),
        board.list(ProjectStatus::Active).card_ids().len()
    );
}
