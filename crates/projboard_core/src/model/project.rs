//! Project domain model.
//!
//! # Responsibility
//! - Define the record shared by the store, the lists and the drag payload.
//! - Provide the card labels derived from project fields.
//!
//! # Invariants
//! - `id` is generated once at creation and never changes.
//! - `status` is always one of the two `ProjectStatus` values.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Opaque project identifier.
///
/// Kept as a plain string because it travels verbatim through the
/// `text/plain` drag payload.
pub type ProjectId = String;

/// Board column a project belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Work in flight; every new project starts here.
    Active,
    /// Work completed.
    Finished,
}

impl ProjectStatus {
    /// Stable lowercase name used in element ids and bridge calls.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }

    /// Both statuses in board order.
    pub fn all() -> [ProjectStatus; 2] {
        [Self::Active, Self::Finished]
    }
}

impl Display for ProjectStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a status name as produced by [`ProjectStatus::as_str`].
pub fn parse_project_status(value: &str) -> Result<ProjectStatus, ProjectStatusError> {
    match value.trim() {
        "active" => Ok(ProjectStatus::Active),
        "finished" => Ok(ProjectStatus::Finished),
        "" => Err(ProjectStatusError::Empty),
        other => Err(ProjectStatusError::Unsupported(other.to_string())),
    }
}

/// Status parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectStatusError {
    Empty,
    Unsupported(String),
}

impl Display for ProjectStatusError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "project status must not be empty"),
            Self::Unsupported(value) => write!(
                f,
                "project status is unsupported: {value} (expected active|finished)"
            ),
        }
    }
}

impl Error for ProjectStatusError {}

/// A user-submitted unit of work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Generated at creation; unique for the lifetime of the store.
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    /// Team size.
    pub people: u32,
    pub status: ProjectStatus,
}

impl Project {
    /// Creates an `Active` project with a freshly generated id.
    pub fn new(title: impl Into<String>, description: impl Into<String>, people: u32) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), title, description, people)
    }

    /// Creates an `Active` project with a caller-provided id.
    ///
    /// Used by tests and fixtures; the store always goes through [`Project::new`].
    pub fn with_id(
        id: impl Into<ProjectId>,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            people,
            status: ProjectStatus::Active,
        }
    }

    /// Team size as card text, e.g. `1 person` or `3 persons`.
    pub fn persons_label(&self) -> String {
        if self.people == 1 {
            "1 person".to_string()
        } else {
            format!("{} persons", self.people)
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == ProjectStatus::Active
    }
}
