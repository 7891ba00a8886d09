//! Tests for layout hit testing

use super::*;
use crate::site::Section;
use ratatui::layout::Rect;

fn sample_regions() -> LayoutRegions {
    LayoutRegions {
        header: Some(Rect::new(0, 0, 80, 3)),
        nav_links: vec![(Rect::new(40, 1, 7, 1), Section::Hero)],
        menu_toggle: None,
        menu: None,
        page: Some(Rect::new(0, 3, 80, 20)),
        news_strip: Some(Rect::new(0, 10, 80, 11)),
        status_line: Some(Rect::new(0, 23, 80, 1)),
    }
}

#[test]
fn test_empty_regions_hit_nothing() {
    let regions = LayoutRegions::new();
    assert_eq!(region_at(&regions, 5, 5), None);
}

#[test]
fn test_nav_link_wins_over_header() {
    let regions = sample_regions();

    assert_eq!(region_at(&regions, 42, 1), Some(Region::NavLink(Section::Hero)));
    assert_eq!(region_at(&regions, 10, 1), Some(Region::Header));
}

#[test]
fn test_news_strip_wins_over_page() {
    let regions = sample_regions();

    assert_eq!(region_at(&regions, 5, 12), Some(Region::NewsStrip));
    assert_eq!(region_at(&regions, 5, 5), Some(Region::Page));
}

#[test]
fn test_region_edges_are_half_open() {
    let regions = sample_regions();

    assert_eq!(region_at(&regions, 79, 20), Some(Region::NewsStrip));
    assert_eq!(region_at(&regions, 0, 21), Some(Region::Page));
    assert_eq!(region_at(&regions, 80, 12), None);
}

#[test]
fn test_status_line() {
    let regions = sample_regions();
    assert_eq!(region_at(&regions, 3, 23), Some(Region::StatusLine));
}

#[test]
fn test_clear_resets_everything() {
    let mut regions = sample_regions();
    regions.clear();

    assert!(regions.header.is_none());
    assert!(regions.nav_links.is_empty());
    assert_eq!(region_at(&regions, 5, 12), None);
}

#[test]
fn test_menu_toggle_wins_over_header() {
    let mut regions = sample_regions();
    regions.nav_links.clear();
    regions.menu_toggle = Some(Rect::new(75, 1, 3, 1));

    assert_eq!(region_at(&regions, 76, 1), Some(Region::MenuToggle));
    assert_eq!(region_at(&regions, 70, 1), Some(Region::Header));
}

#[test]
fn test_open_menu_covers_news_strip() {
    let mut regions = sample_regions();
    regions.menu = Some(Rect::new(0, 3, 80, 10));
    regions.nav_links = vec![(Rect::new(3, 4, 7, 1), Section::Hero)];

    assert_eq!(region_at(&regions, 4, 4), Some(Region::NavLink(Section::Hero)));
    assert_eq!(region_at(&regions, 5, 11), Some(Region::Menu));
    assert_eq!(region_at(&regions, 5, 14), Some(Region::NewsStrip));
}
