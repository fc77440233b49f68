use projboard_core::{
    encode_payload, Board, BoardConfig, CardContent, ConfigError, DataTransfer, DragEffect,
    DragEvent, DragOutcome, FormInput, HostSlot, InputError, ProjectStatus, ProjectStore,
    Renderer, SharedRenderer, TargetState, TEXT_PLAIN,
};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Renderer double that keeps the visible board state.
#[derive(Default)]
struct BoardView {
    attached: Vec<String>,
    headings: HashMap<ProjectStatus, String>,
    cards: HashMap<ProjectStatus, Vec<CardContent>>,
    droppable: HashMap<ProjectStatus, bool>,
    alerts: Vec<String>,
    form_resets: usize,
}

impl BoardView {
    fn card_titles(&self, status: ProjectStatus) -> Vec<String> {
        self.cards
            .get(&status)
            .map(|cards| cards.iter().map(|card| card.title.clone()).collect())
            .unwrap_or_default()
    }
}

impl Renderer for BoardView {
    fn attach(&mut self, _slot: &HostSlot, element_id: &str) {
        self.attached.push(element_id.to_string());
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn reset_form(&mut self) {
        self.form_resets += 1;
    }

    fn set_list_heading(&mut self, status: ProjectStatus, _list_id: &str, heading: &str) {
        self.headings.insert(status, heading.to_string());
    }

    fn clear_list(&mut self, status: ProjectStatus) {
        self.cards.insert(status, Vec::new());
    }

    fn append_card(&mut self, status: ProjectStatus, card: &CardContent) {
        self.cards.entry(status).or_default().push(card.clone());
    }

    fn set_droppable(&mut self, status: ProjectStatus, droppable: bool) {
        self.droppable.insert(status, droppable);
    }
}

fn board() -> (Board, Rc<RefCell<BoardView>>) {
    let view = Rc::new(RefCell::new(BoardView::default()));
    let renderer: SharedRenderer = view.clone();
    let board = Board::new(ProjectStore::shared(), renderer, BoardConfig::default())
        .expect("default config is valid");
    (board, view)
}

fn website_form() -> FormInput {
    FormInput::new("Build a website", "Redesign the landing page", "3")
}

#[test]
fn mount_attaches_form_then_finished_then_active() {
    let (board, view) = board();
    let view = view.borrow();
    assert_eq!(
        view.attached,
        vec!["user-input", "finished-projects", "active-projects"]
    );
    assert_eq!(
        view.headings.get(&ProjectStatus::Active).map(String::as_str),
        Some("ACTIVE PROJECTS")
    );
    assert_eq!(
        view.headings.get(&ProjectStatus::Finished).map(String::as_str),
        Some("FINISHED PROJECTS")
    );
    assert_eq!(board.store().borrow().listener_count(), 2);
}

#[test]
fn invalid_config_is_rejected_before_mounting() {
    let view = Rc::new(RefCell::new(BoardView::default()));
    let renderer: SharedRenderer = view.clone();
    let config = BoardConfig {
        people_min: 10.0,
        people_max: 1.0,
        ..BoardConfig::default()
    };

    let err = Board::new(ProjectStore::shared(), renderer, config)
        .err()
        .expect("inverted range must fail");
    assert!(matches!(err, ConfigError::EmptyPeopleRange { .. }));
    assert!(view.borrow().attached.is_empty());
}

#[test]
fn submit_then_drag_to_finished_moves_card_between_lists() {
    let (mut board, view) = board();

    let id = board.submit(&website_form()).expect("valid submit");
    {
        let store = board.store().borrow();
        let project = store.get(&id).expect("stored project");
        assert_eq!(project.title, "Build a website");
        assert_eq!(project.description, "Redesign the landing page");
        assert_eq!(project.people, 3);
        assert_eq!(project.status, ProjectStatus::Active);
    }
    assert_eq!(view.borrow().form_resets, 1);
    assert_eq!(
        view.borrow().card_titles(ProjectStatus::Active),
        vec!["Build a website"]
    );
    assert_eq!(
        view.borrow().cards[&ProjectStatus::Active][0].assigned,
        "3 persons assigned"
    );

    let mut event = DragEvent::new(DataTransfer::new());
    assert!(board.drag_start(&id, &mut event));
    assert!(board.drag_over(ProjectStatus::Finished, &mut event));
    assert_eq!(view.borrow().droppable.get(&ProjectStatus::Finished), Some(&true));
    assert!(board.drop_on(ProjectStatus::Finished, &mut event));

    let mut transfer = event.into_data_transfer().expect("transfer present");
    transfer.set_drop_effect(DragEffect::Move);
    let outcome = board.drag_end(&id, &DragEvent::new(transfer));
    assert_eq!(outcome, Some(DragOutcome::Dropped));

    assert!(board.list(ProjectStatus::Active).assigned_projects().is_empty());
    assert_eq!(board.list(ProjectStatus::Finished).card_ids(), vec![id]);
    assert_eq!(
        board.list(ProjectStatus::Finished).target_state(),
        TargetState::Idle
    );
    let view = view.borrow();
    assert!(view.card_titles(ProjectStatus::Active).is_empty());
    assert_eq!(
        view.card_titles(ProjectStatus::Finished),
        vec!["Build a website"]
    );
    assert_eq!(view.droppable.get(&ProjectStatus::Finished), Some(&false));
}

#[test]
fn drag_payload_is_the_project_id() {
    let (mut board, _) = board();
    let id = board.submit(&website_form()).expect("valid submit");

    let mut event = DragEvent::new(DataTransfer::new());
    assert!(board.drag_start(&id, &mut event));
    let transfer = event.data_transfer().expect("transfer present");
    assert_eq!(transfer.get_data(TEXT_PLAIN), Some(id.as_str()));
    assert_eq!(transfer.effect_allowed(), DragEffect::Move);
}

#[test]
fn drag_start_for_unrendered_card_is_rejected() {
    let (mut board, _) = board();
    let mut event = DragEvent::new(DataTransfer::new());
    assert!(!board.drag_start("missing", &mut event));
    assert!(event
        .data_transfer()
        .is_some_and(|transfer| transfer.types().is_empty()));
}

#[test]
fn dropping_on_own_list_is_silent() {
    let (mut board, view) = board();
    let id = board.submit(&website_form()).expect("valid submit");
    let cards_before = view.borrow().cards.clone();

    let mut transfer = DataTransfer::new();
    encode_payload(&mut transfer, &id);
    let mut event = DragEvent::new(transfer);
    assert!(!board.drop_on(ProjectStatus::Active, &mut event));

    assert_eq!(view.borrow().cards, cards_before);
}

#[test]
fn foreign_payload_never_becomes_droppable() {
    let (mut board, view) = board();
    let mut transfer = DataTransfer::new();
    transfer.set_data("text/html", "<p>hello</p>");
    let mut event = DragEvent::new(transfer);

    assert!(!board.drag_over(ProjectStatus::Finished, &mut event));
    assert!(!event.default_prevented());
    assert!(view.borrow().droppable.is_empty());
}

#[test]
fn drag_leave_clears_affordance() {
    let (mut board, view) = board();
    let mut transfer = DataTransfer::new();
    encode_payload(&mut transfer, "abc123");
    let mut event = DragEvent::new(transfer);

    assert!(board.drag_over(ProjectStatus::Active, &mut event));
    board.drag_leave(ProjectStatus::Active, &event);
    assert_eq!(view.borrow().droppable.get(&ProjectStatus::Active), Some(&false));
}

#[test]
fn rejected_submit_alerts_and_keeps_board_empty() {
    let (mut board, view) = board();

    let err = board
        .submit(&FormInput::new("short", "tiny", "99"))
        .expect_err("invalid input");
    assert!(matches!(err, InputError::Invalid { .. }));
    assert!(board.store().borrow().is_empty());
    let view = view.borrow();
    assert_eq!(view.alerts, vec!["Invalid input, try again"]);
    assert_eq!(view.form_resets, 0);
}
