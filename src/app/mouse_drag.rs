//! Mouse drag handling
//!
//! Drags are only tracked while the pointer stays on the news strip. Leaving
//! the strip ends the drag through the hover handler.

use ratatui::crossterm::event::MouseEvent;
use std::time::Instant;

use super::app_state::App;
use super::mouse_events::strip_x;
use crate::carousel::CarouselEvent;
use crate::layout::Region;

/// Handle movement with the left button held
pub fn handle_drag(app: &mut App, region: Option<Region>, mouse: MouseEvent, now: Instant) {
    if region != Some(Region::NewsStrip) || !app.carousel.drag().active {
        return;
    }
    if let Some(x) = strip_x(app, mouse.column) {
        app.carousel.handle(CarouselEvent::PointerMove { x }, now);
        app.mark_dirty();
    }
}

/// Handle the left button being released
pub fn handle_release(app: &mut App, region: Option<Region>, now: Instant) {
    if region != Some(Region::NewsStrip) {
        return;
    }
    app.carousel.handle(CarouselEvent::PointerUp, now);
    app.mark_dirty();
}
