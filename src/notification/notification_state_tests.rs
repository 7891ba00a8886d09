//! Tests for notification_state

use super::*;
use crate::theme;

#[test]
fn test_info_notification() {
    let notif = Notification::with_type("Test message", NotificationType::Info);
    assert_eq!(notif.message, "Test message");
    assert_eq!(notif.notification_type, NotificationType::Info);
    assert_eq!(notif.duration, Duration::from_secs(3));
    assert_eq!(notif.style.text, theme::notification::INFO);
    assert!(!notif.is_expired_at(notif.created_at));
}

#[test]
fn test_warning_notification() {
    let notif = Notification::with_type("Warning!", NotificationType::Warning);
    assert_eq!(notif.notification_type, NotificationType::Warning);
    assert_eq!(notif.duration, Duration::from_secs(10));
    assert_eq!(notif.style.text, theme::notification::WARNING);
}

#[test]
fn test_notification_expiration() {
    let notif = Notification::with_type("Expiring", NotificationType::Info);

    assert!(!notif.is_expired_at(notif.created_at + Duration::from_secs(3)));
    assert!(notif.is_expired_at(notif.created_at + Duration::from_millis(3001)));
}

#[test]
fn test_show_replaces_current() {
    let mut state = NotificationState::new();
    state.show("first");
    state.show_warning("second");

    let current = state.current().map(|n| n.message.as_str());
    assert_eq!(current, Some("second"));
}

#[test]
fn test_clear_if_expired() {
    let mut state = NotificationState::new();
    assert!(!state.clear_if_expired(Instant::now()));

    state.show("hint");
    let created = state.current().map(|n| n.created_at).unwrap();

    assert!(!state.clear_if_expired(created + Duration::from_secs(1)));
    assert!(state.current().is_some());

    assert!(state.clear_if_expired(created + Duration::from_secs(4)));
    assert!(state.current().is_none());
}
