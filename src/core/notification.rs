//! Transient user-facing notifications

use serde::{Deserialize, Serialize};

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationType {
    Success,
    Error,
}

/// A toast-style message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub notification_type: NotificationType,
    pub title: String,
    pub message: String,
    pub auto_dismiss_ms: Option<u32>,
}

impl Notification {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            notification_type: NotificationType::Success,
            title: title.into(),
            message: message.into(),
            auto_dismiss_ms: Some(3000),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            notification_type: NotificationType::Error,
            title: title.into(),
            message: message.into(),
            auto_dismiss_ms: None, // Errors should be manually dismissed
        }
    }

    pub fn is_error(&self) -> bool {
        self.notification_type == NotificationType::Error
    }
}

/// Sink for user-facing notifications
pub trait Notifier {
    fn notify(&self, notification: Notification);

    fn success(&self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(Notification::success(title, message));
    }

    fn error(&self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(Notification::error(title, message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_stay_until_dismissed() {
        let n = Notification::error("Login", "Error: bad password");
        assert!(n.is_error());
        assert_eq!(n.auto_dismiss_ms, None);
    }

    #[test]
    fn test_success_auto_dismisses() {
        let n = Notification::success("Login", "Login successful");
        assert_eq!(n.notification_type, NotificationType::Success);
        assert_eq!(n.auto_dismiss_ms, Some(3000));
    }
}
