//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose board use cases (submit, list, drag/drop) to Dart via FRB.
//! - Own the one board of the UI thread and its polled view model.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - All calls are sync and must come from the UI thread; board state is
//!   thread-local.
//! - Status arguments are `active|finished`; anything else is reported as an
//!   error value, never a panic.

use crate::view::BoardViewModel;
use log::warn;
use projboard_core::{
    core_version as core_version_inner, init_logging as init_logging_inner,
    parse_project_status, ping as ping_inner, Board, BoardConfig, CardContent, DataTransfer,
    DragEffect, DragEvent, DragOutcome, FormInput, ProjectStore, SharedRenderer, TEXT_PLAIN,
};
use std::cell::RefCell;
use std::rc::Rc;

const BOARD_NOT_INITIALIZED: &str = "board is not initialized; call board_init first";

thread_local! {
    static VIEW: Rc<RefCell<BoardViewModel>> = Rc::new(RefCell::new(BoardViewModel::default()));
    static BOARD: RefCell<Option<Board>> = const { RefCell::new(None) };
}

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Mounts the board on the calling (UI) thread.
///
/// # FFI contract
/// - Idempotent; later calls keep the existing board.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn board_init() -> String {
    BOARD.with(|cell| {
        let mut slot = cell.borrow_mut();
        if slot.is_some() {
            return String::new();
        }
        let renderer: SharedRenderer = VIEW.with(|view| view.clone());
        match Board::new(ProjectStore::instance(), renderer, BoardConfig::default()) {
            Ok(board) => {
                *slot = Some(board);
                String::new()
            }
            Err(err) => format!("board_init failed: {err}"),
        }
    })
}

/// Card item for one rendered project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    pub project_id: String,
    pub title: String,
    /// e.g. `3 persons assigned`.
    pub assigned: String,
    pub description: String,
    pub draggable: bool,
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardActionResponse {
    /// Whether the action changed board state.
    pub ok: bool,
    /// Affected project id, when known.
    pub project_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl BoardActionResponse {
    fn success(message: impl Into<String>, project_id: String) -> Self {
        Self {
            ok: true,
            project_id: Some(project_id),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            project_id: None,
            message: message.into(),
        }
    }
}

/// Drag payload the host puts on its platform drag channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragStartResponse {
    pub ok: bool,
    /// Always `text/plain` on success.
    pub mime: String,
    /// The dragged project id on success.
    pub payload: String,
    /// Always `move` on success.
    pub effect_allowed: String,
    pub message: String,
}

/// Submits the project form.
///
/// # FFI contract
/// - `people` is the raw text field value; validation coerces it.
/// - On rejection the alert text is also queued for `take_alert`.
#[flutter_rust_bridge::frb(sync)]
pub fn submit_project(title: String, description: String, people: String) -> BoardActionResponse {
    let input = FormInput::new(title, description, people);
    match with_board(|board| board.submit(&input)) {
        Ok(Ok(project_id)) => BoardActionResponse::success("Project added.", project_id),
        Ok(Err(err)) => BoardActionResponse::failure(format!("submit_project rejected: {err}")),
        Err(message) => BoardActionResponse::failure(message),
    }
}

/// Returns the cards currently rendered in the `status` list.
///
/// Unknown statuses yield an empty list.
#[flutter_rust_bridge::frb(sync)]
pub fn list_cards(status: String) -> Vec<ProjectCard> {
    let Ok(status) = parse_project_status(&status) else {
        warn!("event=list_cards module=ffi status=skipped reason=invalid_status");
        return Vec::new();
    };
    VIEW.with(|view| {
        view.borrow()
            .cards(status)
            .iter()
            .map(to_project_card)
            .collect()
    })
}

/// Whether the `status` list currently shows the droppable affordance.
#[flutter_rust_bridge::frb(sync)]
pub fn list_droppable(status: String) -> bool {
    parse_project_status(&status)
        .map(|status| VIEW.with(|view| view.borrow().droppable(status)))
        .unwrap_or(false)
}

/// Starts dragging `project_id` and returns the payload to carry.
#[flutter_rust_bridge::frb(sync)]
pub fn drag_start(project_id: String) -> DragStartResponse {
    let mut event = DragEvent::new(DataTransfer::new());
    let started = match with_board(|board| board.drag_start(&project_id, &mut event)) {
        Ok(started) => started,
        Err(message) => return drag_start_failure(message),
    };
    if !started {
        return drag_start_failure(format!("drag_start failed: no card for {project_id}"));
    }

    let transfer = event.into_data_transfer().unwrap_or_default();
    DragStartResponse {
        ok: true,
        mime: TEXT_PLAIN.to_string(),
        payload: transfer.get_data(TEXT_PLAIN).unwrap_or_default().to_string(),
        effect_allowed: transfer.effect_allowed().as_str().to_string(),
        message: String::new(),
    }
}

/// Reports a drag hovering over the `status` list.
///
/// `mime` is the first declared payload type; data is not readable during
/// hover. Returns whether a drop is allowed.
#[flutter_rust_bridge::frb(sync)]
pub fn drag_over(status: String, mime: String) -> bool {
    let Ok(status) = parse_project_status(&status) else {
        return false;
    };
    let mut transfer = DataTransfer::new();
    transfer.set_data(mime.as_str(), String::new());
    let mut event = DragEvent::new(transfer);
    with_board(|board| board.drag_over(status, &mut event)).unwrap_or(false)
}

/// Drops `payload` of type `mime` onto the `status` list.
///
/// `ok` is true only when a project actually changed status.
#[flutter_rust_bridge::frb(sync)]
pub fn drop_payload(status: String, mime: String, payload: String) -> BoardActionResponse {
    let target = match parse_project_status(&status) {
        Ok(target) => target,
        Err(err) => return BoardActionResponse::failure(format!("drop_payload failed: {err}")),
    };
    let mut transfer = DataTransfer::new();
    transfer.set_data(mime.as_str(), payload.clone());
    let mut event = DragEvent::new(transfer);

    match with_board(|board| board.drop_on(target, &mut event)) {
        Ok(true) => BoardActionResponse::success(format!("Project moved to {target}."), payload),
        Ok(false) => BoardActionResponse::failure("No change."),
        Err(message) => BoardActionResponse::failure(message),
    }
}

/// Reports a drag leaving the `status` list.
#[flutter_rust_bridge::frb(sync)]
pub fn drag_leave(status: String) {
    if let Ok(status) = parse_project_status(&status) {
        let event = DragEvent::new(DataTransfer::new());
        if with_board(|board| board.drag_leave(status, &event)).is_err() {
            warn!("event=drag_leave module=ffi status=skipped reason=board_not_initialized");
        }
    } else {
        warn!("event=drag_leave module=ffi status=skipped reason=invalid_status");
    }
}

/// Ends the drag of `project_id`.
///
/// Returns `dropped`, `cancelled`, or empty string when the card is unknown.
#[flutter_rust_bridge::frb(sync)]
pub fn drag_end(project_id: String, dropped: bool) -> String {
    let mut transfer = DataTransfer::new();
    if dropped {
        transfer.set_drop_effect(DragEffect::Move);
    }
    let event = DragEvent::new(transfer);
    match with_board(|board| board.drag_end(&project_id, &event)) {
        Ok(Some(DragOutcome::Dropped)) => "dropped".to_string(),
        Ok(Some(DragOutcome::Cancelled)) => "cancelled".to_string(),
        Ok(None) | Err(_) => String::new(),
    }
}

/// Returns and clears the pending blocking notification, if any.
#[flutter_rust_bridge::frb(sync)]
pub fn take_alert() -> Option<String> {
    VIEW.with(|view| view.borrow_mut().pending_alert.take())
}

/// Number of times the form was cleared after an accepted submit.
///
/// The host clears its text fields whenever this value grows.
#[flutter_rust_bridge::frb(sync)]
pub fn form_reset_count() -> u64 {
    VIEW.with(|view| view.borrow().form_resets)
}

/// Monotonic counter of visible board changes.
#[flutter_rust_bridge::frb(sync)]
pub fn board_revision() -> u64 {
    VIEW.with(|view| view.borrow().revision)
}

fn with_board<R>(f: impl FnOnce(&mut Board) -> R) -> Result<R, String> {
    BOARD.with(|cell| {
        let mut slot = cell.borrow_mut();
        match slot.as_mut() {
            Some(board) => Ok(f(board)),
            None => Err(BOARD_NOT_INITIALIZED.to_string()),
        }
    })
}

fn drag_start_failure(message: impl Into<String>) -> DragStartResponse {
    DragStartResponse {
        ok: false,
        mime: String::new(),
        payload: String::new(),
        effect_allowed: String::new(),
        message: message.into(),
    }
}

fn to_project_card(card: &CardContent) -> ProjectCard {
    ProjectCard {
        project_id: card.id.clone(),
        title: card.title.clone(),
        assigned: card.assigned.clone(),
        description: card.description.clone(),
        draggable: card.draggable,
    }
}
