//! Notification module for newsreel
//!
//! Displays transient messages (such as config warnings) over the page.

mod notification_render;
mod notification_state;

pub use notification_render::render_notification;
pub use notification_state::{NotificationState, NotificationType};
