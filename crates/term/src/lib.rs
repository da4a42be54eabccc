//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget/layout libraries and instead renders a
//! [`GameSnapshot`](core::GameSnapshot) into a simple framebuffer that is
//! put on screen as a diff against the frame already shown.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Allow precise control over aspect ratio (2 chars wide per cell)

pub mod digits;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tetro_core as core;
pub use tetro_types as types;

pub use digits::{zero_padded, MAX_DIGITS};
pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{tile_rgb, GameView, Viewport, SCORE_DIGITS};
pub use renderer::TerminalRenderer;
