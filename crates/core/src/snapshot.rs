//! Render-facing copy of the app state.
//!
//! Field rows are the viewable ones only and piece tiles are shifted into the
//! same coordinates, so a front end never deals with the hidden buffer.

use arrayvec::ArrayVec;

use crate::piece::{ActivePiece, Prototype};
use crate::types::{
    AppMode, Cell, MenuItem, ShapeClass, TileColor, FIELD_WIDTH, HIDDEN_ROWS, MAX_SHAPE_TILES,
    VIEWABLE_HEIGHT,
};

/// Falling piece in viewable coordinates: `y` is relative to the first viewable row
/// and may be negative while the piece is still in the hidden buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSnapshot {
    pub class: ShapeClass,
    pub variant: usize,
    pub color: TileColor,
    pub tiles: ArrayVec<(i32, i32), MAX_SHAPE_TILES>,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            class: value.prototype.class(),
            variant: value.prototype.variant(),
            color: value.color(),
            tiles: value
                .cells()
                .map(|(x, y)| (x, y - HIDDEN_ROWS as i32))
                .collect(),
        }
    }
}

impl ActiveSnapshot {
    /// Tiles inside the viewable area
    pub fn visible_tiles(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.tiles.iter().filter_map(|&(x, y)| {
            let in_view =
                (0..FIELD_WIDTH as i32).contains(&x) && (0..VIEWABLE_HEIGHT as i32).contains(&y);
            in_view.then_some((x as usize, y as usize))
        })
    }
}

/// Next-piece preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewSnapshot {
    pub class: ShapeClass,
    pub color: TileColor,
    pub tiles: ArrayVec<(i8, i8), MAX_SHAPE_TILES>,
}

impl From<Prototype> for PreviewSnapshot {
    fn from(value: Prototype) -> Self {
        Self {
            class: value.class(),
            color: value.color(),
            tiles: value.tiles().iter().copied().collect(),
        }
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub mode: AppMode,
    pub menu_item: MenuItem,
    /// Viewable rows only, top to bottom
    pub field: [[Cell; FIELD_WIDTH]; VIEWABLE_HEIGHT],
    pub active: Option<ActiveSnapshot>,
    pub next: Option<PreviewSnapshot>,
    pub score: u32,
    pub lines: u32,
    pub lost: bool,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            mode: AppMode::Menu,
            menu_item: MenuItem::NewGame,
            field: [[None; FIELD_WIDTH]; VIEWABLE_HEIGHT],
            active: None,
            next: None,
            score: 0,
            lines: 0,
            lost: false,
        }
    }
}
