use super::*;

#[test]
fn fixed_points() {
    assert_eq!(classify(0), QuarterTurn::None);
    assert_eq!(classify(1), QuarterTurn::RotateRight);
    assert_eq!(classify(-1), QuarterTurn::RotateLeft);
    assert_eq!(classify(2), QuarterTurn::UpsideDown);
    assert_eq!(classify(-2), QuarterTurn::UpsideDown);
    assert_eq!(classify(3), QuarterTurn::RotateLeft);
    assert_eq!(classify(-3), QuarterTurn::RotateRight);
    assert_eq!(classify(4), QuarterTurn::None);
    assert_eq!(classify(-4), QuarterTurn::None);
}

#[test]
fn classification_is_periodic() {
    for n in -40..=40 {
        assert_eq!(classify(n), classify(n + 4), "n = {n}");
        assert_eq!(classify(n), classify(n - 4), "n = {n}");
    }
}

#[test]
fn extreme_counts_are_classified() {
    // i32::MAX % 4 == 3, i32::MIN % 4 == 0
    assert_eq!(classify(i32::MAX), QuarterTurn::RotateLeft);
    assert_eq!(classify(i32::MIN), QuarterTurn::None);
    assert_eq!(classify(i32::MIN + 1), QuarterTurn::RotateRight);
}

#[test]
fn angles() {
    assert_eq!(QuarterTurn::RotateRight.to_degrees(), 90.0);
    assert_eq!(QuarterTurn::RotateLeft.to_degrees(), -90.0);
    assert_eq!(QuarterTurn::UpsideDown.to_angle(), 180.0);
    assert_eq!(QuarterTurn::None.to_angle(), 0.0);
}

#[test]
fn only_quarter_turns_swap_dimensions() {
    assert!(QuarterTurn::RotateLeft.swaps_dimensions());
    assert!(QuarterTurn::RotateRight.swaps_dimensions());
    assert!(!QuarterTurn::UpsideDown.swaps_dimensions());
    assert!(!QuarterTurn::None.swaps_dimensions());
}

#[test]
fn canonical_count_round_trips() {
    for turn in [
        QuarterTurn::None,
        QuarterTurn::RotateRight,
        QuarterTurn::UpsideDown,
        QuarterTurn::RotateLeft,
    ] {
        assert_eq!(QuarterTurn::from(turn.quarter_turns()), turn);
    }
    assert_eq!(QuarterTurn::RotateLeft.to_string(), "rotate_left");
}
