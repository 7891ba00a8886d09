//! Mouse hover handling
//!
//! Turns hit-test transitions onto and off the news strip into pointer
//! enter/leave events for the carousel.

use std::time::Instant;

use super::app_state::App;
use crate::carousel::CarouselEvent;
use crate::layout::Region;

/// Handle mouse hover for the given region
pub fn handle_hover(app: &mut App, region: Option<Region>, now: Instant) {
    let over_strip = region == Some(Region::NewsStrip);
    if over_strip == app.pointer_over_strip {
        return;
    }
    app.pointer_over_strip = over_strip;

    let event = if over_strip {
        CarouselEvent::PointerEnter
    } else {
        CarouselEvent::PointerLeave
    };

    #[cfg(debug_assertions)]
    log::debug!("Strip hover: {:?}", event);

    app.carousel.handle(event, now);
    app.mark_dirty();
}
