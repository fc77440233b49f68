//! Drag-and-drop status transfer protocol.
//!
//! # Responsibility
//! - Model the platform drag-data channel (`transfer`).
//! - Define the drag source / drop target capability roles (`capability`).
//!
//! # Invariants
//! - The payload is exactly one project id under `text/plain`.
//! - Only `move` is offered; copy is not supported.
//! - No state survives a gesture beyond the in-flight payload.

pub mod capability;
pub mod transfer;
