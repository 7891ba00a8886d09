//! Mouse click handling
//!
//! Nav links jump the page to their section and the menu toggle flips the
//! dropdown of links. Presses on the news strip start a carousel drag.

use ratatui::crossterm::event::MouseEvent;
use std::time::Instant;

use super::app_state::App;
use super::mouse_events::strip_x;
use crate::carousel::CarouselEvent;
use crate::layout::Region;

/// Handle a left-button press in the given region
pub fn handle_click(app: &mut App, region: Option<Region>, mouse: MouseEvent, now: Instant) {
    match region {
        Some(Region::NavLink(section)) => {
            app.scroll_to_section(section);
            app.close_menu();
        }
        Some(Region::MenuToggle) => app.toggle_menu(),
        Some(Region::NewsStrip) => {
            if let Some(x) = strip_x(app, mouse.column) {
                app.carousel.handle(CarouselEvent::PointerDown { x }, now);
                app.mark_dirty();
            }
        }
        Some(Region::Menu)
        | Some(Region::Header)
        | Some(Region::Page)
        | Some(Region::StatusLine)
        | None => {}
    }
}
