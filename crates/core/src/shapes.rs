//! Shapes module - tile geometry for every piece class and rotation variant
//!
//! Each variant is a fixed 4x4 pattern parsed at compile time into a list of
//! `(x, y)` tile offsets (x to the right, y down). Rotation never transforms
//! coordinates: it looks up the next variant in the table, so cycling through
//! all variants always returns the exact original offsets.

use crate::types::{ShapeClass, MAX_SHAPE_TILES, SHAPE_BOX};

/// Offset of a single tile relative to the piece's bounding box origin
pub type TileOffset = (i8, i8);

/// Tile offsets of one rotation variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    tiles: [TileOffset; MAX_SHAPE_TILES],
    len: u8,
}

impl Shape {
    /// Parse a 4x4 pattern given as four rows of four characters, `#` marking a tile.
    ///
    /// # Panics
    ///
    /// Panics if a row is not exactly four characters wide or if the pattern
    /// has no tiles. In a `static`/`const` initializer this is a compile error.
    ///
    /// # Examples
    ///
    /// ```
    /// use tetro_core::shapes::Shape;
    ///
    /// let shape = Shape::from_rows(["....", ".##.", ".##.", "...."]);
    /// assert_eq!(shape.tiles(), &[(1, 1), (2, 1), (1, 2), (2, 2)]);
    /// ```
    pub const fn from_rows(rows: [&str; SHAPE_BOX]) -> Self {
        let mut tiles = [(0i8, 0i8); MAX_SHAPE_TILES];
        let mut len = 0usize;

        let mut y = 0;
        while y < SHAPE_BOX {
            let row = rows[y].as_bytes();
            if row.len() != SHAPE_BOX {
                panic!("shape row must be exactly 4 cells wide");
            }
            let mut x = 0;
            while x < SHAPE_BOX {
                if row[x] == b'#' {
                    tiles[len] = (x as i8, y as i8);
                    len += 1;
                }
                x += 1;
            }
            y += 1;
        }

        if len == 0 {
            panic!("shape pattern has no tiles");
        }

        Self {
            tiles,
            len: len as u8,
        }
    }

    /// Tile offsets, in row-major pattern order.
    pub fn tiles(&self) -> &[TileOffset] {
        &self.tiles[..self.len as usize]
    }

    pub fn tile_count(&self) -> usize {
        self.len as usize
    }
}

static I_SHAPES: [Shape; 2] = [
    Shape::from_rows(["....", "####", "....", "...."]),
    Shape::from_rows(["..#.", "..#.", "..#.", "..#."]),
];

static L_SHAPES: [Shape; 4] = [
    Shape::from_rows(["..#.", "###.", "....", "...."]),
    Shape::from_rows([".#..", ".#..", ".##.", "...."]),
    Shape::from_rows(["....", "###.", "#...", "...."]),
    Shape::from_rows(["##..", ".#..", ".#..", "...."]),
];

static J_SHAPES: [Shape; 4] = [
    Shape::from_rows(["#...", "###.", "....", "...."]),
    Shape::from_rows([".##.", ".#..", ".#..", "...."]),
    Shape::from_rows(["....", "###.", "..#.", "...."]),
    Shape::from_rows([".#..", ".#..", "##..", "...."]),
];

static T_SHAPES: [Shape; 4] = [
    Shape::from_rows([".#..", "###.", "....", "...."]),
    Shape::from_rows([".#..", ".##.", ".#..", "...."]),
    Shape::from_rows(["....", "###.", ".#..", "...."]),
    Shape::from_rows([".#..", "##..", ".#..", "...."]),
];

static S_SHAPES: [Shape; 2] = [
    Shape::from_rows([".##.", "##..", "....", "...."]),
    Shape::from_rows(["#...", "##..", ".#..", "...."]),
];

static Z_SHAPES: [Shape; 2] = [
    Shape::from_rows(["##..", ".##.", "....", "...."]),
    Shape::from_rows(["..#.", ".##.", ".#..", "...."]),
];

static O_SHAPES: [Shape; 1] = [Shape::from_rows([".##.", ".##.", "....", "...."])];

static DOT_SHAPES: [Shape; 1] = [Shape::from_rows(["#...", "....", "....", "...."])];

fn variants(class: ShapeClass) -> &'static [Shape] {
    match class {
        ShapeClass::I => &I_SHAPES,
        ShapeClass::L => &L_SHAPES,
        ShapeClass::J => &J_SHAPES,
        ShapeClass::T => &T_SHAPES,
        ShapeClass::S => &S_SHAPES,
        ShapeClass::Z => &Z_SHAPES,
        ShapeClass::O => &O_SHAPES,
        ShapeClass::Dot => &DOT_SHAPES,
    }
}

/// Normalize any variant index into `0..class.variant_count()`.
///
/// Uses a true modulo, so negative indices wrap backwards.
pub fn normalize_variant(class: ShapeClass, variant: i32) -> usize {
    variant.rem_euclid(class.variant_count() as i32) as usize
}

/// Get the shape for a class and variant (normalized modulo the class's cycle).
pub fn get_shape(class: ShapeClass, variant: i32) -> &'static Shape {
    &variants(class)[normalize_variant(class, variant)]
}
