//! Tests for StripScroll

use super::*;
use proptest::prelude::*;

#[test]
fn test_max_offset_from_bounds() {
    let strip = StripScroll::with_bounds(100, 30);
    assert_eq!(strip.max_offset(), 70.0);
    assert_eq!(strip.content_width(), 100);
    assert_eq!(strip.viewport_width(), 30);
}

#[test]
fn test_max_offset_floors_at_zero_when_content_fits() {
    let strip = StripScroll::with_bounds(20, 80);
    assert_eq!(strip.max_offset(), 0.0);
}

#[test]
fn test_set_offset_clamps_to_range() {
    let mut strip = StripScroll::with_bounds(100, 30);

    strip.set_offset(500.0);
    assert_eq!(strip.offset(), 70.0);

    strip.set_offset(-12.5);
    assert_eq!(strip.offset(), 0.0);
}

#[test]
fn test_set_offset_ignores_nan() {
    let mut strip = StripScroll::with_bounds(100, 30);
    strip.set_offset(12.0);

    strip.set_offset(f64::NAN);
    assert_eq!(strip.offset(), 12.0);
}

#[test]
fn test_column_rounds_fractional_offset() {
    let mut strip = StripScroll::with_bounds(100, 30);

    strip.set_offset(4.4);
    assert_eq!(strip.column(), 4);

    strip.set_offset(4.6);
    assert_eq!(strip.column(), 5);
}

#[test]
fn test_update_bounds_reclamps_offset() {
    let mut strip = StripScroll::with_bounds(100, 30);
    strip.set_offset(70.0);

    // Terminal widened
    strip.update_bounds(100, 60);
    assert_eq!(strip.offset(), 40.0);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_offset_always_within_bounds(
        content in 0u16..400,
        visible in 0u16..200,
        writes in prop::collection::vec(-1000.0f64..1000.0, 1..20)
    ) {
        let mut strip = StripScroll::with_bounds(content, visible);
        for value in writes {
            strip.set_offset(value);
            prop_assert!(strip.offset() >= 0.0);
            prop_assert!(strip.offset() <= strip.max_offset());
        }
    }
}
