//! Layout regions tracking for UI components
//!
//! Tracks where UI components are rendered for position-aware mouse interactions.

use ratatui::layout::Rect;

use crate::site::Section;

/// Identifies a UI component region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Header,
    NavLink(Section),
    MenuToggle,
    Menu,
    Page,
    NewsStrip,
    StatusLine,
}

/// Tracks rendered areas of UI components
///
/// Updated during each render pass. Regions are `None` when the component is not visible.
/// Used by mouse event handlers to determine which component is under the cursor.
#[derive(Default, Clone, Debug)]
pub struct LayoutRegions {
    pub header: Option<Rect>,
    /// Header links, or the dropdown links while the menu is open
    pub nav_links: Vec<(Rect, Section)>,
    pub menu_toggle: Option<Rect>,
    /// Open dropdown menu below the header
    pub menu: Option<Rect>,
    pub page: Option<Rect>,
    /// Visible part of the news strip (clipped by page scroll)
    pub news_strip: Option<Rect>,
    pub status_line: Option<Rect>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all regions before a new render pass
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
