//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. When adding or modifying UI components:
//! - Add new colors to the appropriate module
//! - Use `theme::module::CONSTANT` in render files
//! - Do NOT hardcode `Color::*` values directly in render files
//!
//! Theme: Foundation - deep maroon and emerald green on light gray

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
pub mod palette {
    use super::*;

    pub const MAROON: Color = Color::Rgb(128, 0, 0);
    pub const EMERALD: Color = Color::Rgb(0, 102, 51);
    pub const EMERALD_LIGHT: Color = Color::Rgb(110, 231, 183);

    pub const WHITE: Color = Color::Rgb(255, 255, 255);
    pub const BG_LIGHT: Color = Color::Rgb(243, 244, 246);
    pub const BG_DARK: Color = Color::Rgb(26, 26, 26);

    pub const TEXT_DARK: Color = Color::Rgb(17, 24, 39);
    pub const TEXT_MUTED: Color = Color::Rgb(107, 114, 128);
    pub const TEXT_SOFT: Color = Color::Rgb(156, 163, 175);
    pub const BORDER: Color = Color::Rgb(229, 231, 235);
}

/// Fixed navigation header
pub mod header {
    use super::*;

    // Over the hero: transparent look on maroon
    pub const TOP_BG: Color = palette::MAROON;
    pub const TOP_BRAND: Style = Style::new().fg(palette::WHITE).add_modifier(Modifier::BOLD);
    pub const TOP_LINK: Style = Style::new().fg(palette::BORDER);

    // After scrolling: frosted white bar with a bottom border
    pub const SCROLLED_BG: Color = palette::WHITE;
    pub const SCROLLED_BRAND: Style = Style::new()
        .fg(palette::TEXT_DARK)
        .add_modifier(Modifier::BOLD);
    pub const SCROLLED_LINK: Style = Style::new().fg(palette::TEXT_MUTED);
    pub const SCROLLED_BORDER: Color = palette::BORDER;

    pub const CTA: Style = Style::new()
        .fg(palette::WHITE)
        .bg(palette::EMERALD)
        .add_modifier(Modifier::BOLD);

    // Narrow terminals: toggle plus dropdown of nav links
    pub const MENU_BG: Color = palette::WHITE;
    pub const MENU_LINK: Style = Style::new()
        .fg(palette::TEXT_DARK)
        .add_modifier(Modifier::BOLD);
    pub const MENU_BORDER: Color = palette::BORDER;
}

/// Full-width hero banner
pub mod hero {
    use super::*;

    pub const BG: Color = palette::MAROON;
    pub const BADGE: Style = Style::new().fg(palette::EMERALD_LIGHT);
    pub const TITLE: Style = Style::new().fg(palette::WHITE).add_modifier(Modifier::BOLD);
    pub const TITLE_ACCENT: Style = Style::new()
        .fg(palette::EMERALD_LIGHT)
        .add_modifier(Modifier::BOLD);
    pub const SUBTITLE: Style = Style::new().fg(palette::BORDER);
    pub const PRIMARY_BUTTON: Style = Style::new()
        .fg(palette::MAROON)
        .bg(palette::WHITE)
        .add_modifier(Modifier::BOLD);
    pub const SECONDARY_BUTTON: Style = Style::new().fg(palette::WHITE);
}

/// Information grid
pub mod bento {
    use super::*;

    pub const BG: Color = palette::BG_LIGHT;
    pub const HEADING: Style = Style::new()
        .fg(palette::TEXT_DARK)
        .add_modifier(Modifier::BOLD);
    pub const SUBHEADING: Style = Style::new().fg(palette::TEXT_MUTED);

    pub const CARD_BG: Color = palette::WHITE;
    pub const CARD_BORDER: Color = palette::BORDER;
    pub const CARD_TITLE: Style = Style::new()
        .fg(palette::TEXT_DARK)
        .add_modifier(Modifier::BOLD);
    pub const CARD_BODY: Style = Style::new().fg(palette::TEXT_MUTED);

    pub const ACCENT_BG: Color = palette::EMERALD;
    pub const ACCENT_TITLE: Style = Style::new().fg(palette::WHITE).add_modifier(Modifier::BOLD);
    pub const ACCENT_BODY: Style = Style::new().fg(palette::EMERALD_LIGHT);

    pub const DARK_BG: Color = palette::MAROON;
    pub const DARK_TITLE: Style = Style::new().fg(palette::WHITE).add_modifier(Modifier::BOLD);
    pub const DARK_BODY: Style = Style::new().fg(palette::BORDER);
}

/// News carousel
pub mod news {
    use super::*;

    pub const BG: Color = palette::WHITE;
    pub const HEADING: Style = Style::new().fg(palette::MAROON).add_modifier(Modifier::BOLD);

    pub const CARD_BORDER: Color = palette::BORDER;
    pub const IMAGE_BAND: Color = palette::TEXT_SOFT;
    pub const BADGE: Style = Style::new()
        .fg(palette::MAROON)
        .bg(palette::WHITE)
        .add_modifier(Modifier::BOLD);
    pub const DATE: Style = Style::new().fg(palette::TEXT_SOFT);
    pub const TITLE: Style = Style::new()
        .fg(palette::TEXT_DARK)
        .add_modifier(Modifier::BOLD);
    pub const LINK: Style = Style::new().fg(palette::MAROON).add_modifier(Modifier::BOLD);

    pub const SCROLLBAR: Color = palette::TEXT_SOFT;
}

/// Footer
pub mod footer {
    use super::*;

    pub const BG: Color = palette::BG_DARK;
    pub const BRAND: Style = Style::new().fg(palette::WHITE).add_modifier(Modifier::BOLD);
    pub const HEADING: Style = Style::new().fg(palette::WHITE).add_modifier(Modifier::BOLD);
    pub const TEXT: Style = Style::new().fg(palette::TEXT_SOFT);
    pub const SOCIAL: Style = Style::new().fg(palette::WHITE);
    pub const FINE_PRINT: Style = Style::new().fg(palette::TEXT_MUTED);
}

/// Bottom status line
pub mod status {
    use super::*;

    pub const BG: Color = palette::BG_DARK;
    pub const KEYS: Style = Style::new().fg(palette::TEXT_SOFT);
    pub const PLAYING: Style = Style::new()
        .fg(palette::EMERALD_LIGHT)
        .add_modifier(Modifier::BOLD);
    pub const HELD: Style = Style::new()
        .fg(palette::WHITE)
        .add_modifier(Modifier::BOLD);
    pub const PAGE_SCROLLBAR: Color = palette::TEXT_MUTED;
}

/// Transient notifications
pub mod notification {
    use super::*;

    pub const INFO: Style = Style::new().fg(palette::WHITE).bg(palette::TEXT_MUTED);
    pub const INFO_BORDER: Color = palette::TEXT_SOFT;

    pub const WARNING: Style = Style::new()
        .fg(palette::TEXT_DARK)
        .bg(Color::Rgb(255, 217, 61));
    pub const WARNING_BORDER: Color = Color::Rgb(255, 217, 61);
}
