//! Shuffled bag tests

use rand::rngs::StdRng;
use rand::SeedableRng;

use tetro::core::Bag;
use tetro::types::{ShapeClass, TileColor};

#[test]
fn test_each_cycle_is_a_permutation() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut bag = Bag::shapes();

    for cycle in 0..20 {
        let drawn: Vec<ShapeClass> = (0..7).map(|_| bag.draw(&mut rng)).collect();
        assert!(bag.is_empty(), "cycle {}", cycle);

        for class in ShapeClass::STANDARD {
            let count = drawn.iter().filter(|&&c| c == class).count();
            assert_eq!(count, 1, "cycle {}: {:?} drawn {} times", cycle, class, count);
        }
    }
}

#[test]
fn test_color_bag_never_yields_reserved_colors() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut bag = Bag::colors();
    for _ in 0..120 {
        let color = bag.draw(&mut rng);
        assert!(color.is_base());
        assert_ne!(color, TileColor::White);
        assert_ne!(color, TileColor::Black);
    }
}

#[test]
fn test_peek_does_not_consume() {
    let mut rng = StdRng::seed_from_u64(77);
    let mut bag = Bag::shapes();

    let peeked = bag.next(&mut rng, false);
    for _ in 0..5 {
        assert_eq!(bag.next(&mut rng, false), peeked);
    }
    assert_eq!(bag.len(), 7);
    assert_eq!(bag.next(&mut rng, true), peeked);
    assert_eq!(bag.len(), 6);
}

#[test]
fn test_same_seed_same_sequence() {
    let mut a_rng = StdRng::seed_from_u64(31337);
    let mut b_rng = StdRng::seed_from_u64(31337);
    let mut a = Bag::shapes();
    let mut b = Bag::shapes();

    for _ in 0..50 {
        assert_eq!(a.draw(&mut a_rng), b.draw(&mut b_rng));
    }
}

#[test]
fn test_clear_forces_refill() {
    let mut rng = StdRng::seed_from_u64(8);
    let mut bag = Bag::colors();
    let _ = bag.draw(&mut rng);
    bag.clear();
    assert_eq!(bag.peek(), None);
    let _ = bag.draw(&mut rng);
    assert_eq!(bag.len(), TileColor::BASE.len() - 1);
}
