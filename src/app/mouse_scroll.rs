//! Mouse scroll handling
//!
//! The wheel always scrolls the page; the news strip moves on its own or by
//! dragging.

use super::app_state::App;
use crate::layout::Region;

/// Scroll direction for mouse wheel events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

const PAGE_SCROLL_LINES: u16 = 3;

/// Handle scroll event for the given region
pub fn handle_scroll(app: &mut App, region: Option<Region>, direction: ScrollDirection) {
    match region {
        Some(Region::Page)
        | Some(Region::NewsStrip)
        | Some(Region::Header)
        | Some(Region::NavLink(_))
        | Some(Region::MenuToggle)
        | None => scroll_page(app, direction),
        // Status line and open menu: do nothing
        Some(Region::StatusLine) | Some(Region::Menu) => {}
    }
}

fn scroll_page(app: &mut App, direction: ScrollDirection) {
    match direction {
        ScrollDirection::Up => app.page_scroll.scroll_up(PAGE_SCROLL_LINES),
        ScrollDirection::Down => app.page_scroll.scroll_down(PAGE_SCROLL_LINES),
    }
    app.mark_dirty();
}
