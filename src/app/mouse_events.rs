//! Mouse event dispatcher
//!
//! Routes mouse events to appropriate handlers based on position.

use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;
use std::time::Instant;

use super::app_state::App;
use super::{mouse_click, mouse_drag, mouse_hover, mouse_scroll};
use crate::layout::region_at;

/// Handle mouse events by routing to appropriate handlers
///
/// Hover runs first so the strip sees pointer-enter before a press on it, and
/// pointer-leave (which ends a drag) as soon as the pointer moves off it.
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent, now: Instant) {
    app.last_pointer = Some(Position::new(mouse.column, mouse.row));
    let region = region_at(&app.layout_regions, mouse.column, mouse.row);

    mouse_hover::handle_hover(app, region, now);

    match mouse.kind {
        MouseEventKind::ScrollDown => {
            mouse_scroll::handle_scroll(app, region, mouse_scroll::ScrollDirection::Down);
        }
        MouseEventKind::ScrollUp => {
            mouse_scroll::handle_scroll(app, region, mouse_scroll::ScrollDirection::Up);
        }
        MouseEventKind::Down(MouseButton::Left) => {
            mouse_click::handle_click(app, region, mouse, now);
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            mouse_drag::handle_drag(app, region, mouse, now);
        }
        MouseEventKind::Up(MouseButton::Left) => {
            mouse_drag::handle_release(app, region, now);
        }
        _ => {}
    }
}

/// Pointer x relative to the left edge of the news strip
pub(super) fn strip_x(app: &App, column: u16) -> Option<f64> {
    let strip = app.layout_regions.news_strip?;
    Some(f64::from(column.saturating_sub(strip.x)))
}

#[cfg(test)]
#[path = "mouse_events_tests.rs"]
mod mouse_events_tests;
