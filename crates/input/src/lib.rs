//! Terminal input.
//!
//! Maps `crossterm` key events onto [`crate::types::Control`]s and folds them
//! into the per-tick [`crate::types::InputState`] the simulation reads,
//! including terminals without key-release events.

pub mod handler;
pub mod map;

pub use tetro_types as types;

pub use handler::{ControlSet, InputHandler};
pub use map::{control_for_code, control_for_key, should_quit};
