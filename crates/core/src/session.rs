//! Session module - one game from first spawn to loss
//!
//! This module ties together the field, the falling piece, both bags and
//! scoring. [`Session::update`] advances the simulation by one fixed step from
//! a debounced input snapshot; it never blocks and performs all work inline.
//!
//! Per tick:
//! 1. `Cancel` pressed exits to the menu, nothing else happens.
//! 2. While lost, only `Confirm` (reset) is honored.
//! 3. The fall timer accumulates; the lateral timer counts down to zero.
//! 4. Fall fires on the normal interval, or 12x faster while soft drop is held.
//! 5. Left/right fire while held whenever the lateral timer is at zero.
//! 6. Rotate fires once per press.
//! 7. Rotation is applied only if the rotated piece still fits (no kicks).
//! 8. With no piece in play, a fall or lateral event spawns one instead of moving.
//! 9. A fall that does not fit locks the piece and spawns the next.
//! 10. Left and right combine into one horizontal step, applied only if it fits.
//! 11. Full lines are removed and scored.
//! 12. Any tile left in the hidden buffer ends the session.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::bag::Bag;
use crate::field::Field;
use crate::piece::{ActivePiece, Prototype};
use crate::scoring::line_clear_score;
use crate::types::{
    Control, InputState, ShapeClass, TileColor, DEFAULT_SPEED_PERCENT, FALL_BASE_MS,
    LATERAL_DIVISOR, SOFT_DROP_DIVISOR,
};

/// Session parameters fixed at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Seed for the generator shared by both bags
    pub seed: u64,
    /// Speed multiplier in percent (100 = 1.0x); must be non-zero
    pub speed_percent: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            speed_percent: DEFAULT_SPEED_PERCENT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Playing,
    Lost,
}

/// What the owner of the session should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    ExitToMenu,
}

/// Complete state of one game
#[derive(Debug, Clone)]
pub struct Session {
    field: Field,
    active: Option<ActivePiece>,
    fall_timer_ms: u32,
    lateral_timer_ms: u32,
    score: u32,
    lines: u32,
    speed_percent: u32,
    status: SessionStatus,
    shape_bag: Bag<ShapeClass>,
    color_bag: Bag<TileColor>,
    rng: StdRng,
}

impl Session {
    /// Create a session in its initial configuration
    ///
    /// # Panics
    ///
    /// Panics if `config.speed_percent` is zero.
    pub fn new(config: SessionConfig) -> Self {
        assert!(config.speed_percent > 0, "speed multiplier must be non-zero");

        Self {
            field: Field::new(),
            active: None,
            fall_timer_ms: 0,
            lateral_timer_ms: 0,
            score: 0,
            lines: 0,
            speed_percent: config.speed_percent,
            status: SessionStatus::Playing,
            shape_bag: Bag::shapes(),
            color_bag: Bag::colors(),
            rng: StdRng::seed_from_u64(config.seed),
        }
    }

    /// Return to the initial configuration: empty field and bags, no piece,
    /// zero score, timers cleared, playing. The generator keeps its stream.
    pub fn reset(&mut self) {
        self.field.clear();
        self.active = None;
        self.fall_timer_ms = 0;
        self.lateral_timer_ms = 0;
        self.score = 0;
        self.lines = 0;
        self.status = SessionStatus::Playing;
        self.shape_bag.clear();
        self.color_bag.clear();
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Mutable field access for scripted setups (tests, tools)
    pub fn field_mut(&mut self) -> &mut Field {
        &mut self.field
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    /// Replace the falling piece (scripted setups)
    pub fn set_active(&mut self, piece: Option<ActivePiece>) {
        self.active = piece;
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Total lines removed this session
    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_lost(&self) -> bool {
        self.status == SessionStatus::Lost
    }

    pub fn speed_percent(&self) -> u32 {
        self.speed_percent
    }

    /// Gravity interval at the current speed
    pub fn fall_interval_ms(&self) -> u32 {
        FALL_BASE_MS * 100 / self.speed_percent
    }

    /// Gravity interval while soft drop is held
    pub fn forced_fall_interval_ms(&self) -> u32 {
        self.fall_interval_ms() / SOFT_DROP_DIVISOR
    }

    /// Minimum spacing between repeated left/right steps
    pub fn lateral_interval_ms(&self) -> u32 {
        self.fall_interval_ms() / LATERAL_DIVISOR
    }

    /// The piece the next spawn will produce. Refills an exhausted bag but never consumes.
    pub fn peek_next(&mut self) -> Prototype {
        let class = self.shape_bag.next(&mut self.rng, false);
        let color = self.color_bag.next(&mut self.rng, false);
        Prototype::new(class, 0, color)
    }

    /// Draw the next class and color and put the piece at the spawn position.
    ///
    /// The spawn is not checked against the stack; an overlap surfaces at the
    /// loss check once the piece locks.
    pub fn spawn_next(&mut self) {
        let class = self.shape_bag.draw(&mut self.rng);
        let color = self.color_bag.draw(&mut self.rng);
        self.active = Some(ActivePiece::spawn(Prototype::new(class, 0, color)));
    }

    /// Advance the session by `elapsed_ms` using this tick's input.
    pub fn update(&mut self, elapsed_ms: u32, input: &InputState) -> TickOutcome {
        if input.is_pressed(Control::Cancel) {
            return TickOutcome::ExitToMenu;
        }

        if self.status == SessionStatus::Lost {
            if input.is_pressed(Control::Confirm) {
                self.reset();
            }
            return TickOutcome::Continue;
        }

        self.fall_timer_ms = self.fall_timer_ms.saturating_add(elapsed_ms);
        self.lateral_timer_ms = self.lateral_timer_ms.saturating_sub(elapsed_ms);

        let fall_threshold = if input.is_down(Control::SoftDrop) {
            self.forced_fall_interval_ms()
        } else {
            self.fall_interval_ms()
        };
        let fall = self.fall_timer_ms >= fall_threshold;
        if fall {
            self.fall_timer_ms = 0;
        }

        let lateral_ready = self.lateral_timer_ms == 0;
        let left = lateral_ready && input.is_down(Control::Left);
        let right = lateral_ready && input.is_down(Control::Right);

        if input.is_pressed(Control::Rotate) {
            self.try_rotate();
        }

        if fall || left || right {
            if self.active.is_none() {
                self.spawn_next();
            } else {
                if fall {
                    self.step_down();
                }
                if left || right {
                    self.try_shift(right as i32 - left as i32);
                }
            }
        }

        let removed = self.field.remove_full_lines();
        self.lines += removed as u32;
        self.score = self.score.saturating_add(line_clear_score(removed));

        if self.field.hidden_rows_occupied() {
            self.status = SessionStatus::Lost;
        }

        TickOutcome::Continue
    }

    /// Rotate the active piece if the next variant fits where it stands
    pub(crate) fn try_rotate(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let rotated = active.rotated();
        if rotated.can_place(&self.field) {
            self.active = Some(rotated);
            return true;
        }
        false
    }

    /// Move down one row, or lock in place and spawn the next piece
    fn step_down(&mut self) {
        let Some(active) = self.active else {
            return;
        };

        let moved = active.moved(0, 1);
        if moved.can_place(&self.field) {
            self.active = Some(moved);
        } else {
            self.lock_piece(active);
            self.spawn_next();
        }
    }

    /// Write the piece's tiles into the field
    fn lock_piece(&mut self, piece: ActivePiece) {
        self.field.stamp(piece.cells(), piece.color());
        self.active = None;
    }

    /// Shift the active piece horizontally; on success restart the lateral timer
    pub(crate) fn try_shift(&mut self, dx: i32) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let moved = active.moved(dx, 0);
        if moved.can_place(&self.field) {
            self.active = Some(moved);
            self.lateral_timer_ms = self.lateral_interval_ms();
            return true;
        }
        false
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
