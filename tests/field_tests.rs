//! Field tests - grid access, line removal and the hidden buffer

use tetro::core::Field;
use tetro::types::{TileColor, FIELD_HEIGHT, FIELD_WIDTH, HIDDEN_ROWS};

fn fill_row(field: &mut Field, row: usize, color: TileColor) {
    for x in 0..FIELD_WIDTH as i32 {
        field.set(x, row as i32, Some(color));
    }
}

#[test]
fn test_field_new_empty() {
    let field = Field::new();
    assert_eq!(field.width(), FIELD_WIDTH);
    assert_eq!(field.height(), FIELD_HEIGHT);

    for y in 0..FIELD_HEIGHT as i32 {
        for x in 0..FIELD_WIDTH as i32 {
            assert_eq!(field.get(x, y), Some(None), "cell ({}, {})", x, y);
        }
    }
}

#[test]
fn test_field_get_out_of_bounds() {
    let field = Field::new();

    // Negative coordinates
    assert_eq!(field.get(-1, 0), None);
    assert_eq!(field.get(0, -1), None);

    // Beyond bounds
    assert_eq!(field.get(FIELD_WIDTH as i32, 0), None);
    assert_eq!(field.get(0, FIELD_HEIGHT as i32), None);
}

#[test]
fn test_field_set_and_get() {
    let mut field = Field::new();

    field.set(5, 10, Some(TileColor::Violet));
    assert_eq!(field.get(5, 10), Some(Some(TileColor::Violet)));
    assert_eq!(field.get_assured(5, 10), Some(TileColor::Violet));
    assert!(field.is_occupied(5, 10));

    field.set(5, 10, None);
    assert_eq!(field.get(5, 10), Some(None));
    assert!(!field.is_occupied(5, 10));
}

#[test]
#[should_panic(expected = "out of range")]
fn test_field_set_out_of_bounds_panics() {
    let mut field = Field::new();
    field.set(FIELD_WIDTH as i32, 0, Some(TileColor::Red));
}

#[test]
#[should_panic(expected = "out of range")]
fn test_field_get_assured_out_of_bounds_panics() {
    let field = Field::new();
    let _ = field.get_assured(0, -1);
}

#[test]
fn test_line_full_and_empty() {
    let mut field = Field::new();
    let bottom = FIELD_HEIGHT - 1;
    assert!(field.line_is_empty(bottom));
    assert!(!field.line_is_full(bottom));

    fill_row(&mut field, bottom, TileColor::Red);
    assert!(field.line_is_full(bottom));
    assert!(!field.line_is_empty(bottom));

    field.set(4, bottom as i32, None);
    assert!(!field.line_is_full(bottom));
    assert!(!field.line_is_empty(bottom));
}

#[test]
fn test_remove_line_shifts_rows_above_only() {
    let mut field = Field::new();
    field.set(0, 0, Some(TileColor::Red));
    field.set(1, 9, Some(TileColor::Green));
    field.set(2, 10, Some(TileColor::Blue));
    field.set(3, 11, Some(TileColor::Yellow));

    field.remove_line(10);

    // Above moved down by one.
    assert_eq!(field.get(0, 1), Some(Some(TileColor::Red)));
    assert_eq!(field.get(1, 10), Some(Some(TileColor::Green)));
    // Removed row's content is gone.
    assert!(!field.is_occupied(2, 10));
    assert!(!field.is_occupied(2, 11));
    // Below untouched.
    assert_eq!(field.get(3, 11), Some(Some(TileColor::Yellow)));
    // Top cleared.
    assert!(field.line_is_empty(0));
}

#[test]
fn test_remove_top_row() {
    let mut field = Field::new();
    fill_row(&mut field, 0, TileColor::Orange);
    field.remove_line(0);
    assert!(field.line_is_empty(0));
}

#[test]
fn test_remove_full_lines_four_at_once() {
    let mut field = Field::new();
    for row in FIELD_HEIGHT - 4..FIELD_HEIGHT {
        fill_row(&mut field, row, TileColor::Blue);
    }
    field.set(7, FIELD_HEIGHT as i32 - 5, Some(TileColor::Red));

    assert_eq!(field.remove_full_lines(), 4);
    assert_eq!(field.get(7, FIELD_HEIGHT as i32 - 1), Some(Some(TileColor::Red)));
    assert_eq!(field.cells().iter().filter(|c| c.is_some()).count(), 1);
}

#[test]
fn test_remove_full_lines_none() {
    let mut field = Field::new();
    field.set(0, FIELD_HEIGHT as i32 - 1, Some(TileColor::Blue));
    let before = field.clone();
    assert_eq!(field.remove_full_lines(), 0);
    assert_eq!(field, before);
}

#[test]
fn test_hidden_rows_boundary() {
    let mut field = Field::new();
    fill_row(&mut field, HIDDEN_ROWS, TileColor::Red);
    assert!(!field.hidden_rows_occupied());

    field.set(0, 0, Some(TileColor::White));
    assert!(field.hidden_rows_occupied());

    field.clear();
    assert!(!field.hidden_rows_occupied());
}

#[test]
fn test_stamp_writes_one_color() {
    let mut field = Field::new();
    field.stamp([(0, 23), (1, 23), (1, 22)], TileColor::Green);
    assert_eq!(field.row(23)[..2], [Some(TileColor::Green), Some(TileColor::Green)]);
    assert_eq!(field.get(1, 22), Some(Some(TileColor::Green)));
}
