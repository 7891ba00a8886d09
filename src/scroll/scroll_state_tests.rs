//! Tests for ScrollState

use super::*;

#[test]
fn test_new_scroll_state() {
    let scroll = ScrollState::new();
    assert_eq!(scroll.offset, 0);
    assert_eq!(scroll.max_offset, 0);
    assert_eq!(scroll.viewport_height, 0);
}

#[test]
fn test_update_bounds_small_content() {
    let mut scroll = ScrollState::new();

    // Page fits in the terminal
    scroll.update_bounds(10, 20);
    assert_eq!(scroll.max_offset, 0);
    assert_eq!(scroll.offset, 0);
}

#[test]
fn test_update_bounds_clamps_offset() {
    let mut scroll = ScrollState::new();
    scroll.update_bounds(100, 20);
    scroll.offset = 80;

    // Terminal grew taller
    scroll.update_bounds(100, 60);
    assert_eq!(scroll.max_offset, 40);
    assert_eq!(scroll.offset, 40);
}

#[test]
fn test_scroll_down_clamped() {
    let mut scroll = ScrollState::new();
    scroll.update_bounds(100, 20);

    scroll.scroll_down(3);
    assert_eq!(scroll.offset, 3);

    scroll.scroll_down(500);
    assert_eq!(scroll.offset, 80);
}

#[test]
fn test_scroll_up_clamped() {
    let mut scroll = ScrollState::new();
    scroll.update_bounds(100, 20);
    scroll.offset = 10;

    scroll.scroll_up(4);
    assert_eq!(scroll.offset, 6);

    scroll.scroll_up(20);
    assert_eq!(scroll.offset, 0);
}

#[test]
fn test_page_down_and_up_use_half_viewport() {
    let mut scroll = ScrollState::new();
    scroll.update_bounds(100, 20);

    scroll.page_down();
    assert_eq!(scroll.offset, 10);

    scroll.page_up();
    assert_eq!(scroll.offset, 0);
}

#[test]
fn test_page_down_with_tiny_viewport_still_moves() {
    let mut scroll = ScrollState::new();
    scroll.update_bounds(10, 1);

    scroll.page_down();
    assert_eq!(scroll.offset, 1);
}

#[test]
fn test_jump_to_top_and_bottom() {
    let mut scroll = ScrollState::new();
    scroll.update_bounds(100, 20);

    scroll.jump_to_bottom();
    assert_eq!(scroll.offset, 80);

    scroll.jump_to_top();
    assert_eq!(scroll.offset, 0);
}

#[test]
fn test_is_scrolled_past_threshold() {
    let mut scroll = ScrollState::new();
    scroll.update_bounds(100, 20);

    scroll.offset = 2;
    assert!(!scroll.is_scrolled_past(2));

    scroll.offset = 3;
    assert!(scroll.is_scrolled_past(2));
}

#[test]
fn test_default() {
    assert_eq!(ScrollState::default(), ScrollState::new());
}
