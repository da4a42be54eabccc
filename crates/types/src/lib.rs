//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core simulation, terminal rendering, input mapping).
//!
//! # Field Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 24 rows (indexed 0-23, row 0 at the top)
//! - **Viewable**: the bottom 20 rows (4-23); rows 0-3 are a hidden buffer
//!   used for spawning and overflow (loss) detection
//! - **Spawn position**: (3, 0), top-left of the piece's 4x4 bounding box
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 20 | Fixed timestep interval (50 ticks per second) |
//! | `FALL_BASE_MS` | 500 | Gravity interval at 1.0x speed |
//! | `DEFAULT_SPEED_PERCENT` | 100 | Speed multiplier, in percent |
//! | `SOFT_DROP_DIVISOR` | 12 | Soft drop falls 12x faster |
//! | `LATERAL_DIVISOR` | 8 | Held left/right repeats 8x per fall interval |
//!
//! # Examples
//!
//! ```
//! use tetro_types::{ShapeClass, TileColor, FIELD_WIDTH, FIELD_HEIGHT, VIEWABLE_HEIGHT};
//!
//! assert_eq!(ShapeClass::T.variant_count(), 4);
//! assert_eq!(ShapeClass::STANDARD.len(), 7);
//! assert!(TileColor::Red.is_base());
//! assert!(!TileColor::White.is_base());
//!
//! assert_eq!(FIELD_WIDTH, 10);
//! assert_eq!(FIELD_HEIGHT, 24);
//! assert_eq!(VIEWABLE_HEIGHT, 20);
//! ```

/// Field width in cells (10 columns)
pub const FIELD_WIDTH: usize = 10;

/// Total field height in cells, hidden buffer included (24 rows)
pub const FIELD_HEIGHT: usize = 24;

/// Rows shown to the player, counted from the bottom (20 rows)
pub const VIEWABLE_HEIGHT: usize = 20;

/// Hidden buffer rows above the viewable area (4 rows)
pub const HIDDEN_ROWS: usize = FIELD_HEIGHT - VIEWABLE_HEIGHT;

/// Side of the square bounding box every shape variant lives in
pub const SHAPE_BOX: usize = 4;

/// Upper bound on tiles per shape variant (a full 4x4 box)
pub const MAX_SHAPE_TILES: usize = SHAPE_BOX * SHAPE_BOX;

/// Spawn column for new pieces (left edge of the bounding box)
pub const SPAWN_X: i32 = 3;

/// Spawn row for new pieces (top edge of the bounding box, inside the hidden buffer)
pub const SPAWN_Y: i32 = 0;

/// Fixed timestep interval in milliseconds (20ms = 50 ticks per second)
pub const TICK_MS: u32 = 20;

/// Base gravity interval at 1.0x speed (500ms per row)
pub const FALL_BASE_MS: u32 = 500;

/// Default speed multiplier in percent (100 = 1.0x)
pub const DEFAULT_SPEED_PERCENT: u32 = 100;

/// Soft drop interval is the normal fall interval divided by this
pub const SOFT_DROP_DIVISOR: u32 = 12;

/// Lateral repeat interval is the normal fall interval divided by this
pub const LATERAL_DIVISOR: u32 = 8;

/// Points per cleared line for clears of one to four lines
pub const LINE_SCORE: u32 = 10;

/// Points per cleared line for any clear of more than four lines
pub const OVERFLOW_LINE_SCORE: u32 = 13;


/// Piece classes
///
/// The seven standard tetrominoes plus `Dot`, a degenerate single-tile class
/// that the shape bag never produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeClass {
    I,
    L,
    J,
    T,
    S,
    Z,
    O,
    Dot,
}

impl ShapeClass {
    /// The classes drawn by the shape bag, in base-set order.
    pub const STANDARD: [ShapeClass; 7] = [
        ShapeClass::L,
        ShapeClass::J,
        ShapeClass::I,
        ShapeClass::T,
        ShapeClass::O,
        ShapeClass::Z,
        ShapeClass::S,
    ];

    /// Number of distinct rotation variants.
    ///
    /// # Examples
    ///
    /// ```
    /// use tetro_types::ShapeClass;
    ///
    /// assert_eq!(ShapeClass::O.variant_count(), 1);
    /// assert_eq!(ShapeClass::I.variant_count(), 2);
    /// assert_eq!(ShapeClass::L.variant_count(), 4);
    /// ```
    pub const fn variant_count(self) -> usize {
        match self {
            ShapeClass::O | ShapeClass::Dot => 1,
            ShapeClass::I | ShapeClass::S | ShapeClass::Z => 2,
            ShapeClass::T | ShapeClass::L | ShapeClass::J => 4,
        }
    }
}

/// Tile colors
///
/// Pieces take their color from an independent color bag, so color carries no
/// information about the class. `White` and `Black` are reserved and never
/// drawn in normal play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileColor {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Violet,
    White,
    Black,
}

impl TileColor {
    /// The colors drawn by the color bag.
    pub const BASE: [TileColor; 6] = [
        TileColor::Red,
        TileColor::Orange,
        TileColor::Yellow,
        TileColor::Green,
        TileColor::Blue,
        TileColor::Violet,
    ];

    pub const fn is_base(self) -> bool {
        !matches!(self, TileColor::White | TileColor::Black)
    }
}

/// A cell on the field
///
/// - `None`: Empty cell
/// - `Some(TileColor)`: Cell filled with a locked tile of that color
pub type Cell = Option<TileColor>;

/// Logical controls consumed by the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Left,
    Right,
    /// Soft drop in game, "next item" in the menu
    SoftDrop,
    /// Rotate in game, "previous item" in the menu
    Rotate,
    Confirm,
    Cancel,
}

impl Control {
    pub const ALL: [Control; 6] = [
        Control::Left,
        Control::Right,
        Control::SoftDrop,
        Control::Rotate,
        Control::Confirm,
        Control::Cancel,
    ];

    /// Dense index in `0..Control::ALL.len()`
    pub const fn index(self) -> usize {
        match self {
            Control::Left => 0,
            Control::Right => 1,
            Control::SoftDrop => 2,
            Control::Rotate => 3,
            Control::Confirm => 4,
            Control::Cancel => 5,
        }
    }
}

/// Debounced state of one key.
///
/// `pressed` is an edge: it is raised only on the up -> down transition and
/// stays raised until the next [`KeyState::end_tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyState {
    down: bool,
    pressed: bool,
    released: bool,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_down(&self) -> bool {
        self.down
    }

    pub fn is_up(&self) -> bool {
        !self.down
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Fold a key-down event. Repeats while already down do not re-raise the edge.
    pub fn press(&mut self) {
        if !self.down {
            self.down = true;
            self.pressed = true;
        }
    }

    /// Fold a key-up event.
    pub fn release(&mut self) {
        if self.down {
            self.released = true;
        }
        self.down = false;
        self.pressed = false;
    }

    /// Clear the per-tick edges.
    pub fn end_tick(&mut self) {
        self.pressed = false;
        self.released = false;
    }
}

/// Input snapshot for one tick: a [`KeyState`] per [`Control`].
///
/// # Examples
///
/// ```
/// use tetro_types::{Control, InputState};
///
/// let mut input = InputState::new();
/// input.press(Control::Rotate);
/// assert!(input.is_pressed(Control::Rotate));
///
/// input.end_tick();
/// assert!(input.is_down(Control::Rotate));
/// assert!(!input.is_pressed(Control::Rotate));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputState {
    keys: [KeyState; Control::ALL.len()],
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(&self, control: Control) -> KeyState {
        self.keys[control.index()]
    }

    pub fn is_down(&self, control: Control) -> bool {
        self.key(control).is_down()
    }

    pub fn is_up(&self, control: Control) -> bool {
        self.key(control).is_up()
    }

    pub fn is_pressed(&self, control: Control) -> bool {
        self.key(control).is_pressed()
    }

    pub fn is_released(&self, control: Control) -> bool {
        self.key(control).is_released()
    }

    pub fn press(&mut self, control: Control) {
        self.keys[control.index()].press();
    }

    pub fn release(&mut self, control: Control) {
        self.keys[control.index()].release();
    }

    /// Force every control up (e.g. when the terminal loses focus).
    pub fn release_all(&mut self) {
        for key in &mut self.keys {
            key.release();
        }
    }

    /// Clear press/release edges once the tick has consumed them.
    pub fn end_tick(&mut self) {
        for key in &mut self.keys {
            key.end_tick();
        }
    }
}

/// Top-level application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppMode {
    Menu,
    Game,
}

/// Main menu entries, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuItem {
    NewGame,
    Quit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 2] = [MenuItem::NewGame, MenuItem::Quit];

    /// Next entry down, clamped at the last one.
    pub fn next(self) -> Self {
        match self {
            MenuItem::NewGame | MenuItem::Quit => MenuItem::Quit,
        }
    }

    /// Previous entry up, clamped at the first one.
    pub fn prev(self) -> Self {
        match self {
            MenuItem::NewGame | MenuItem::Quit => MenuItem::NewGame,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::NewGame => "NEW GAME",
            MenuItem::Quit => "EXIT",
        }
    }
}

#[cfg(test)]
mod input_tests {
    use super::*;

    #[test]
    fn press_edge_raised_once_per_press() {
        let mut key = KeyState::new();
        key.press();
        assert!(key.is_down());
        assert!(key.is_pressed());

        key.end_tick();
        key.press();
        assert!(key.is_down());
        assert!(!key.is_pressed(), "held key must not re-raise the edge");
    }

    #[test]
    fn release_clears_down_and_edge() {
        let mut key = KeyState::new();
        key.press();
        key.release();
        assert!(key.is_up());
        assert!(!key.is_pressed());
        assert!(key.is_released());

        key.end_tick();
        assert!(!key.is_released());
    }

    #[test]
    fn release_all_forces_every_control_up() {
        let mut input = InputState::new();
        for control in Control::ALL {
            input.press(control);
        }
        input.release_all();
        for control in Control::ALL {
            assert!(input.is_up(control), "{:?} still down", control);
        }
    }

    #[test]
    fn menu_navigation_clamps() {
        assert_eq!(MenuItem::NewGame.prev(), MenuItem::NewGame);
        assert_eq!(MenuItem::NewGame.next(), MenuItem::Quit);
        assert_eq!(MenuItem::Quit.next(), MenuItem::Quit);
        assert_eq!(MenuItem::Quit.prev(), MenuItem::NewGame);
    }
}
