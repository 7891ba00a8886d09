//! Notification rendering
//!
//! Provides functions for rendering notification overlays in the UI.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::time::Instant;

use super::notification_state::NotificationState;
use crate::widgets::popup;

/// Render the notification overlay in the top-right corner of `area`
///
/// This function should be called after rendering the main UI so the
/// notification appears on top of other content.
pub fn render_notification(
    frame: &mut Frame,
    area: Rect,
    notification: &mut NotificationState,
    now: Instant,
) {
    notification.clear_if_expired(now);

    let Some(notif) = notification.current() else {
        return;
    };

    let message = &notif.message;
    let style = notif.style;

    // Width: message length + padding (2 chars each side) + borders (2)
    let content_width = Line::from(message.as_str()).width() as u16;
    let notification_width = content_width + 4;
    let notification_height = 3;

    let margin = 2;
    let notification_x = area.x + area.width.saturating_sub(notification_width + margin);
    let notification_y = area.y + margin.min(area.height);

    let notification_area = Rect {
        x: notification_x,
        y: notification_y,
        width: notification_width.min(area.width.saturating_sub(margin * 2)),
        height: notification_height.min(area.height.saturating_sub(margin * 2)),
    };

    // Don't render if area is too small
    if notification_area.width < 5 || notification_area.height < 3 {
        return;
    }

    popup::clear_area(frame, notification_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(style.border).bg(style.text.bg.unwrap_or_default()))
        .style(style.text);

    let text = Line::from(Span::styled(format!(" {} ", message), style.text));

    frame.render_widget(Paragraph::new(text).block(block), notification_area);
}

#[cfg(test)]
#[path = "notification_render_tests.rs"]
mod notification_render_tests;
