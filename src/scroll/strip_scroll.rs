use super::scroll_trait::Viewport;

/// Horizontal scroll position of the news strip, measured in terminal columns
///
/// Offsets are fractional so sub-column autoplay speeds accumulate; rendering
/// rounds to the nearest column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripScroll {
    offset: f64,
    content_width: f64,
    viewport_width: f64,
}

impl StripScroll {
    pub fn new() -> Self {
        Self {
            offset: 0.0,
            content_width: 0.0,
            viewport_width: 0.0,
        }
    }

    pub fn with_bounds(content_width: u16, viewport_width: u16) -> Self {
        let mut strip = Self::new();
        strip.update_bounds(content_width, viewport_width);
        strip
    }

    /// Refresh extents after a layout pass and re-clamp the offset
    pub fn update_bounds(&mut self, content_width: u16, viewport_width: u16) {
        self.content_width = f64::from(content_width);
        self.viewport_width = f64::from(viewport_width);
        self.offset = self.offset.clamp(0.0, self.max_offset());
    }

    /// First visible content column
    pub fn column(&self) -> u16 {
        self.offset.round().clamp(0.0, f64::from(u16::MAX)) as u16
    }

    pub fn content_width(&self) -> u16 {
        self.content_width as u16
    }

    pub fn viewport_width(&self) -> u16 {
        self.viewport_width as u16
    }
}

impl Default for StripScroll {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewport for StripScroll {
    fn offset(&self) -> f64 {
        self.offset
    }

    fn set_offset(&mut self, offset: f64) {
        if offset.is_nan() {
            return;
        }
        self.offset = offset.clamp(0.0, self.max_offset());
    }

    fn content_extent(&self) -> f64 {
        self.content_width
    }

    fn visible_extent(&self) -> f64 {
        self.viewport_width
    }
}
