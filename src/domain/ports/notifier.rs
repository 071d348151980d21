use crate::domain::models::Notification;

/// Sink for user-facing messages.
///
/// Calls are fire-and-forget: implementations must return promptly and must
/// not fail the caller. Nothing is returned.
pub trait Notifier: Send + Sync {
    /// Display a notification.
    fn notify(&self, notification: Notification);
}
