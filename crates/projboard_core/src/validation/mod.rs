//! Declarative input validation.
//!
//! # Responsibility
//! - Evaluate one value against a per-field rule set (`rule`).
//! - Turn raw form strings into a project draft under a rejection policy
//!   (`form`).
//!
//! # Invariants
//! - Rule evaluation is pure and never fails; absent constraints pass.
//! - Length and numeric bounds are exclusive.

pub mod form;
pub mod rule;
