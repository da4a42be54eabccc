//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the game rules, session state and the menu/game mode
//! switch. It has **no dependencies** on terminals or I/O: a caller feeds it a
//! fixed time step and an [`InputState`](types::InputState) per tick and reads
//! back a [`GameSnapshot`] to draw.
//!
//! # Module Structure
//!
//! - [`shapes`]: constant 4x4 rotation tables for every piece class
//! - [`piece`]: prototypes (class + rotation + color) and the falling piece with collision
//! - [`bag`]: shuffled-bag supply for piece classes and colors
//! - [`field`]: 10x24 grid (4 hidden rows) with line removal
//! - [`scoring`]: points per line clear
//! - [`session`]: one game, advanced tick by tick
//! - [`app`]: menu navigation and the switch between menu and game
//! - [`snapshot`]: render-ready copy of the visible state
//!
//! # Game Rules
//!
//! - **Bags**: classes and colors are drawn from two independent shuffled bags
//! - **Rotation**: table lookup of the next variant; a blocked rotation is dropped (no kicks)
//! - **Lock**: a piece locks the moment it cannot fall
//! - **Loss**: any tile left in the 4 hidden rows after line removal
//!
//! # Example
//!
//! ```
//! use tetro_core::{Session, SessionConfig};
//! use tetro_types::{Control, InputState, TICK_MS};
//!
//! let mut session = Session::new(SessionConfig { seed: 12345, speed_percent: 100 });
//!
//! let mut input = InputState::new();
//! input.press(Control::SoftDrop);
//! for _ in 0..10 {
//!     session.update(TICK_MS, &input);
//!     input.end_tick();
//! }
//!
//! assert!(session.active().is_some());
//! assert_eq!(session.score(), 0);
//! ```

pub mod app;
pub mod bag;
pub mod field;
pub mod piece;
pub mod scoring;
pub mod session;
pub mod shapes;
pub mod snapshot;

pub use tetro_types as types;

// Re-export commonly used types for convenience
pub use app::App;
pub use bag::Bag;
pub use field::Field;
pub use piece::{ActivePiece, Prototype};
pub use scoring::line_clear_score;
pub use session::{Session, SessionConfig, SessionStatus, TickOutcome};
pub use shapes::{get_shape, normalize_variant, Shape};
pub use snapshot::{ActiveSnapshot, GameSnapshot, PreviewSnapshot};
