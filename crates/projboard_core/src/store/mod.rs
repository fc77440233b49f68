//! Observable project state.
//!
//! # Responsibility
//! - Own the authoritative, ordered project sequence (`project_store`).
//! - Fan out snapshot copies to registered listeners (`listeners`).
//!
//! # Invariants
//! - Insertion order is creation order and survives every mutation.
//! - Listeners run synchronously, in registration order, after each
//!   effective mutation and never after a no-op.
//! - Listeners receive owned copies; nothing outside the store holds a
//!   mutable reference to the sequence.

pub mod listeners;
pub mod project_store;
