//! Core logic for the project board.
//! This crate is the single source of truth for board state and its
//! transitions; rendering lives behind the `Renderer` trait.

pub mod board;
pub mod component;
pub mod config;
pub mod dnd;
pub mod logging;
pub mod model;
pub mod store;
pub mod validation;

pub use board::Board;
pub use component::project_input::ProjectInput;
pub use component::project_item::ProjectItem;
pub use component::project_list::ProjectList;
pub use component::{mount, CardContent, Component, HostSlot, Renderer, SharedRenderer};
pub use config::{BoardConfig, ConfigError, DEFAULT_INVALID_INPUT_MESSAGE};
pub use dnd::capability::{DragOutcome, DragPhase, DragSource, DropTarget, TargetState};
pub use dnd::transfer::{
    accepts_payload, decode_payload, encode_payload, DataTransfer, DragEffect, DragEvent,
    TEXT_PLAIN,
};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::project::{
    parse_project_status, Project, ProjectId, ProjectStatus, ProjectStatusError,
};
pub use store::project_store::{ProjectStore, SharedStore};
pub use validation::form::{
    gather_inputs, parse_people_input, FormField, FormInput, InputError, ProjectDraft,
    RejectionPolicy,
};
pub use validation::rule::{validate, RuleValue, ValidationRule};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
