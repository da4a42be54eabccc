//! Fixed-width decimal formatting without allocation.

use arrayvec::{ArrayString, ArrayVec};

/// Widest field a counter may request; a `u32` never needs more.
pub const MAX_DIGITS: usize = 10;

pub type Digits = ArrayString<MAX_DIGITS>;

/// Decimal digits of `n`, left-padded with zeros to at least `min_len`.
///
/// # Panics
///
/// Panics if `min_len` exceeds [`MAX_DIGITS`].
///
/// # Examples
///
/// ```
/// use tetro_term::digits::zero_padded;
///
/// assert_eq!(zero_padded(7, 3).as_str(), "007");
/// assert_eq!(zero_padded(1234, 3).as_str(), "1234");
/// ```
pub fn zero_padded(n: u32, min_len: usize) -> Digits {
    assert!(
        min_len <= MAX_DIGITS,
        "digit field too wide: {} > {}",
        min_len,
        MAX_DIGITS
    );

    let mut rev = ArrayVec::<u8, MAX_DIGITS>::new();
    let mut rest = n;
    loop {
        rev.push(b'0' + (rest % 10) as u8);
        rest /= 10;
        if rest == 0 {
            break;
        }
    }
    while rev.len() < min_len {
        rev.push(b'0');
    }

    let mut out = Digits::new();
    for &d in rev.iter().rev() {
        out.push(d as char);
    }
    out
}
