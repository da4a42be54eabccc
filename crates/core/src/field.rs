//! Field module - manages the playing grid
//!
//! The field is a 10x24 grid where each cell is empty or holds a tile color.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..23 (top to bottom).
//! Rows 0..3 are the hidden buffer; only rows 4..23 are viewable.
//!
//! Probing with [`Field::get`] is safe anywhere; every other accessor treats an
//! out-of-range coordinate as a broken caller contract and panics.

use arrayvec::ArrayVec;

use crate::types::{Cell, TileColor, FIELD_HEIGHT, FIELD_WIDTH, HIDDEN_ROWS};

/// Total number of cells on the field
const FIELD_SIZE: usize = FIELD_WIDTH * FIELD_HEIGHT;

/// The playing field - 10 columns x 24 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; FIELD_SIZE],
}

impl Field {
    /// Create a new empty field
    pub fn new() -> Self {
        Self {
            cells: [None; FIELD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= FIELD_WIDTH as i32 || y < 0 || y >= FIELD_HEIGHT as i32 {
            return None;
        }
        Some((y as usize) * FIELD_WIDTH + (x as usize))
    }

    #[inline(always)]
    fn index_assured(x: i32, y: i32) -> usize {
        match Self::index(x, y) {
            Some(idx) => idx,
            None => panic!(
                "field access out of range: ({}, {}) not in {}x{}",
                x, y, FIELD_WIDTH, FIELD_HEIGHT
            ),
        }
    }

    #[inline(always)]
    fn check_row(row: usize) {
        assert!(
            row < FIELD_HEIGHT,
            "field row out of range: {} not in 0..{}",
            row,
            FIELD_HEIGHT
        );
    }

    #[inline(always)]
    fn row_range(row: usize) -> std::ops::Range<usize> {
        Self::check_row(row);
        let start = row * FIELD_WIDTH;
        start..start + FIELD_WIDTH
    }

    pub fn width(&self) -> usize {
        FIELD_WIDTH
    }

    pub fn height(&self) -> usize {
        FIELD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Get cell at a position the caller knows is in bounds.
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is outside the field.
    pub fn get_assured(&self, x: i32, y: i32) -> Cell {
        self.cells[Self::index_assured(x, y)]
    }

    /// Set cell at position (x, y)
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is outside the field.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        let idx = Self::index_assured(x, y);
        self.cells[idx] = cell;
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn line_is_full(&self, row: usize) -> bool {
        self.cells[Self::row_range(row)].iter().all(|cell| cell.is_some())
    }

    /// Check if a row has no tiles at all
    pub fn line_is_empty(&self, row: usize) -> bool {
        self.cells[Self::row_range(row)].iter().all(|cell| cell.is_none())
    }

    /// Remove a row: every row above it falls by exactly one, the top row is cleared.
    /// Rows below `row` are untouched.
    pub fn remove_line(&mut self, row: usize) {
        Self::check_row(row);

        // Shift all rows above down by one
        // Note: copy_within handles overlapping ranges safely
        for y in (1..=row).rev() {
            let src_start = (y - 1) * FIELD_WIDTH;
            let dst_start = y * FIELD_WIDTH;
            self.cells
                .copy_within(src_start..src_start + FIELD_WIDTH, dst_start);
        }

        // Clear the top row
        self.cells[..FIELD_WIDTH].fill(None);
    }

    /// Remove every full row and return how many were removed.
    ///
    /// Scans top to bottom once. Removing row `r` only shifts rows `< r`, all of
    /// which have already been examined and found not full, so the row that lands
    /// in slot `r` never needs a second look and adjacent full rows are all caught.
    pub fn remove_full_lines(&mut self) -> usize {
        let mut removed = 0;
        for row in 0..FIELD_HEIGHT {
            if self.line_is_full(row) {
                self.remove_line(row);
                removed += 1;
            }
        }
        removed
    }

    /// Indices of the currently full rows, top to bottom
    pub fn full_lines(&self) -> ArrayVec<usize, FIELD_HEIGHT> {
        (0..FIELD_HEIGHT)
            .filter(|&row| self.line_is_full(row))
            .collect()
    }

    /// True if any tile sits in the hidden buffer above the viewable area
    pub fn hidden_rows_occupied(&self) -> bool {
        (0..HIDDEN_ROWS).any(|row| !self.line_is_empty(row))
    }

    /// Write every tile of a shape at the given position with one color
    ///
    /// # Panics
    ///
    /// Panics if any tile lands outside the field.
    pub fn stamp(&mut self, cells: impl IntoIterator<Item = (i32, i32)>, color: TileColor) {
        for (x, y) in cells {
            self.set(x, y, Some(color));
        }
    }

    /// Cells of one row, left to right
    pub fn row(&self, row: usize) -> &[Cell] {
        &self.cells[Self::row_range(row)]
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire field
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_row(field: &mut Field, row: usize) {
        for x in 0..FIELD_WIDTH as i32 {
            field.set(x, row as i32, Some(TileColor::Orange));
        }
    }

    #[test]
    fn test_field_index_calculation() {
        assert_eq!(Field::index(0, 0), Some(0));
        assert_eq!(Field::index(9, 0), Some(9));
        assert_eq!(Field::index(0, 1), Some(10));
        assert_eq!(Field::index(9, 23), Some(239));
        assert_eq!(Field::index(-1, 0), None);
        assert_eq!(Field::index(10, 0), None);
        assert_eq!(Field::index(0, 24), None);
    }

    #[test]
    fn test_field_flat_array() {
        let mut field = Field::new();
        field.set(0, 0, Some(TileColor::Red));
        field.set(5, 10, Some(TileColor::Blue));

        assert_eq!(field.cells[0], Some(TileColor::Red));
        assert_eq!(field.cells[10 * 10 + 5], Some(TileColor::Blue));
    }

    #[test]
    fn test_remove_full_lines_handles_adjacent_rows() {
        let mut field = Field::new();
        fill_row(&mut field, 22);
        fill_row(&mut field, 23);
        field.set(0, 21, Some(TileColor::Yellow));

        assert_eq!(field.remove_full_lines(), 2);
        assert_eq!(field.get(0, 23), Some(Some(TileColor::Yellow)));
        assert!(field.line_is_empty(22));
        assert!(field.full_lines().is_empty());
    }

    #[test]
    fn test_remove_full_lines_handles_separated_rows() {
        let mut field = Field::new();
        fill_row(&mut field, 20);
        field.set(3, 21, Some(TileColor::Green));
        fill_row(&mut field, 22);
        field.set(7, 23, Some(TileColor::Violet));

        assert_eq!(field.full_lines().as_slice(), &[20, 22]);
        assert_eq!(field.remove_full_lines(), 2);
        assert_eq!(field.get(3, 22), Some(Some(TileColor::Green)));
        assert_eq!(field.get(7, 23), Some(Some(TileColor::Violet)));
        assert!(field.line_is_empty(21));
    }

    #[test]
    fn test_hidden_rows_occupied() {
        let mut field = Field::new();
        field.set(0, HIDDEN_ROWS as i32, Some(TileColor::Red));
        assert!(!field.hidden_rows_occupied());

        field.set(9, HIDDEN_ROWS as i32 - 1, Some(TileColor::Red));
        assert!(field.hidden_rows_occupied());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_line_query_out_of_range_panics() {
        Field::new().line_is_full(FIELD_HEIGHT);
    }

    #[test]
    #[should_panic(expected = "field row out of range: 24")]
    fn test_remove_line_out_of_range_panics() {
        Field::new().remove_line(FIELD_HEIGHT);
    }
}
