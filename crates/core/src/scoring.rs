//! Scoring module - points awarded for line clears
//!
//! One to four lines score a flat 10 points per line. More than four lines in
//! one resolution pass cannot happen with tetrominoes but is still scored, at
//! 13 points per line.

use crate::types::{LINE_SCORE, OVERFLOW_LINE_SCORE};

/// Points for removing `lines` rows in one resolution pass
///
/// # Examples
///
/// ```
/// use tetro_core::scoring::line_clear_score;
///
/// assert_eq!(line_clear_score(0), 0);
/// assert_eq!(line_clear_score(1), 10);
/// assert_eq!(line_clear_score(4), 40);
/// assert_eq!(line_clear_score(5), 65);
/// ```
pub fn line_clear_score(lines: usize) -> u32 {
    let lines = lines as u32;
    match lines {
        0 => 0,
        1..=4 => LINE_SCORE * lines,
        _ => OVERFLOW_LINE_SCORE.saturating_mul(lines),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_table_up_to_four_lines() {
        assert_eq!(line_clear_score(1), 10);
        assert_eq!(line_clear_score(2), 20);
        assert_eq!(line_clear_score(3), 30);
        assert_eq!(line_clear_score(4), 40);
    }

    #[test]
    fn test_overflow_clears() {
        assert_eq!(line_clear_score(5), 65);
        assert_eq!(line_clear_score(6), 78);
    }

    #[test]
    fn test_score_never_decreases_with_more_lines() {
        for lines in 0..24 {
            assert!(line_clear_score(lines + 1) > line_clear_score(lines));
        }
    }
}
