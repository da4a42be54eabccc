//! Bag module - shuffled-bag random supply
//!
//! A bag holds one of each item of its base set in shuffled order and hands
//! them out from the tail. When it runs empty it is refilled with a fresh
//! permutation, so every item appears exactly once per cycle.
//!
//! The bag owns no randomness: the caller passes the generator to every draw,
//! which keeps the whole session reproducible from one seed.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::{ShapeClass, TileColor};

static STANDARD_SHAPES: [ShapeClass; 7] = ShapeClass::STANDARD;
static BASE_COLORS: [TileColor; 6] = TileColor::BASE;

/// Shuffled-bag generator over a fixed base set
#[derive(Debug, Clone)]
pub struct Bag<T: Copy + 'static> {
    base: &'static [T],
    /// Remaining items; the next draw is the last element
    items: Vec<T>,
}

impl<T: Copy + 'static> Bag<T> {
    /// Create an empty bag; the first draw fills it.
    ///
    /// # Panics
    ///
    /// Panics if `base` is empty.
    pub fn new(base: &'static [T]) -> Self {
        assert!(!base.is_empty(), "bag base set must not be empty");
        Self {
            base,
            items: Vec::with_capacity(base.len()),
        }
    }

    /// Refill with one of each base item and shuffle (Fisher-Yates)
    fn refill<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.items.clear();
        self.items.extend_from_slice(self.base);
        self.items.shuffle(rng);
    }

    /// Return the next item, refilling first if the bag is empty.
    ///
    /// With `consume == false` this is a peek: repeated calls return the same
    /// item until a consuming call takes it.
    pub fn next<R: Rng + ?Sized>(&mut self, rng: &mut R, consume: bool) -> T {
        if self.items.is_empty() {
            self.refill(rng);
        }

        let last = self.items.len() - 1;
        let item = self.items[last];
        if consume {
            self.items.truncate(last);
        }
        item
    }

    /// Take the next item
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> T {
        self.next(rng, true)
    }

    /// Peek at the next item without refilling (None when the bag is empty)
    pub fn peek(&self) -> Option<T> {
        self.items.last().copied()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drop the remaining items; the next draw refills.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl Bag<ShapeClass> {
    /// Bag over the seven standard tetromino classes
    pub fn shapes() -> Self {
        Self::new(&STANDARD_SHAPES)
    }
}

impl Bag<TileColor> {
    /// Bag over the six base colors
    pub fn colors() -> Self {
        Self::new(&BASE_COLORS)
    }
}
