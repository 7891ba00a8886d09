//! Tests for edge_timer

use super::*;

const DELAY: Duration = Duration::from_millis(2000);

#[test]
fn test_new_timer_has_nothing_pending() {
    let mut timer = EdgeTimer::new();
    let now = Instant::now();

    assert!(!timer.is_pending());
    assert_eq!(timer.remaining(now), None);
    assert_eq!(timer.fire_if_due(now + DELAY), None);
}

#[test]
fn test_timer_does_not_fire_before_deadline() {
    let mut timer = EdgeTimer::new();
    let start = Instant::now();
    timer.schedule(start, DELAY, Direction::Backward);

    assert_eq!(timer.fire_if_due(start + Duration::from_millis(1999)), None);
    assert!(timer.is_pending());
}

#[test]
fn test_timer_fires_once_at_deadline() {
    let mut timer = EdgeTimer::new();
    let start = Instant::now();
    timer.schedule(start, DELAY, Direction::Backward);

    assert_eq!(timer.fire_if_due(start + DELAY), Some(Direction::Backward));
    assert!(!timer.is_pending());
    assert_eq!(timer.fire_if_due(start + DELAY * 2), None);
}

#[test]
fn test_cancel_prevents_firing() {
    let mut timer = EdgeTimer::new();
    let start = Instant::now();
    timer.schedule(start, DELAY, Direction::Forward);

    timer.cancel();
    assert_eq!(timer.fire_if_due(start + DELAY), None);
}

#[test]
fn test_remaining_counts_down_and_saturates() {
    let mut timer = EdgeTimer::new();
    let start = Instant::now();
    timer.schedule(start, DELAY, Direction::Forward);

    assert_eq!(
        timer.remaining(start + Duration::from_millis(500)),
        Some(Duration::from_millis(1500))
    );
    assert_eq!(timer.remaining(start + DELAY * 3), Some(Duration::ZERO));
}
