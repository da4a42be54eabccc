//! tetro (workspace facade crate).
//!
//! Re-exports the workspace crates as `tetro::{core,input,term,types}` and
//! holds the command-line configuration shared by the binary and tests.

pub mod cli;

pub use tetro_core as core;
pub use tetro_input as input;
pub use tetro_term as term;
pub use tetro_types as types;
