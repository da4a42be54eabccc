//! Piece module - prototypes (class + rotation + color) and the falling piece
//!
//! `ActivePiece::can_place` is the single legality check used for spawning,
//! moving, rotating and detecting a lock.

use crate::field::Field;
use crate::shapes::{get_shape, normalize_variant, Shape, TileOffset};
use crate::types::{ShapeClass, TileColor, SPAWN_X, SPAWN_Y};

/// A rotatable shape with a fixed color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prototype {
    class: ShapeClass,
    variant: usize,
    shape: &'static Shape,
    color: TileColor,
}

impl Prototype {
    /// Create a prototype; `variant` is normalized modulo the class's cycle.
    pub fn new(class: ShapeClass, variant: i32, color: TileColor) -> Self {
        Self {
            class,
            variant: normalize_variant(class, variant),
            shape: get_shape(class, variant),
            color,
        }
    }

    pub fn class(&self) -> ShapeClass {
        self.class
    }

    pub fn variant(&self) -> usize {
        self.variant
    }

    pub fn color(&self) -> TileColor {
        self.color
    }

    pub fn tiles(&self) -> &'static [TileOffset] {
        self.shape.tiles()
    }

    /// The next rotation variant, looked up fresh from the shape table.
    pub fn rotated(&self) -> Self {
        Self::new(self.class, self.variant as i32 + 1, self.color)
    }
}

/// The currently falling piece: bounding box position plus prototype.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePiece {
    /// Column of the bounding box's left edge
    pub x: i32,
    /// Row of the bounding box's top edge (row 0 is the top of the hidden buffer)
    pub y: i32,
    pub prototype: Prototype,
}

impl ActivePiece {
    pub fn new(x: i32, y: i32, prototype: Prototype) -> Self {
        Self { x, y, prototype }
    }

    /// Place a prototype at the fixed spawn position.
    pub fn spawn(prototype: Prototype) -> Self {
        Self::new(SPAWN_X, SPAWN_Y, prototype)
    }

    pub fn color(&self) -> TileColor {
        self.prototype.color()
    }

    /// Absolute field coordinates of every tile.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.prototype
            .tiles()
            .iter()
            .map(move |&(dx, dy)| (self.x + dx as i32, self.y + dy as i32))
    }

    pub fn moved(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    pub fn with_prototype(&self, prototype: Prototype) -> Self {
        Self { prototype, ..*self }
    }

    pub fn rotated(&self) -> Self {
        self.with_prototype(self.prototype.rotated())
    }

    /// True only if every tile is inside the field and on an empty cell.
    pub fn can_place(&self, field: &Field) -> bool {
        self.cells()
            .all(|(x, y)| matches!(field.get(x, y), Some(None)))
    }
}
