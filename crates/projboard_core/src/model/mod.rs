//! Project board domain model.
//!
//! # Responsibility
//! - Define the canonical project record rendered by both status lists.
//! - Keep the status set closed to `Active | Finished`.
//!
//! # Invariants
//! - Every project is identified by an opaque, never-reused `ProjectId`.
//! - Status transitions are direct; no project is removed by a transition.

pub mod project;
