use crate::ui::notifications::{Notification, NotificationQueue};

/// Owns the status bar notifications for the App.
pub struct NotificationManager {
    notifications: NotificationQueue,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self {
            notifications: NotificationQueue::new(),
        }
    }

    pub fn notify(&mut self, notification: Notification) {
        tracing::debug!(level = ?notification.level, message = %notification.message, "notification");
        self.notifications.push(notification);
    }

    /// Poll and update notification timers (call each tick)
    pub fn tick(&mut self) {
        self.notifications.tick();
    }

    pub fn dismiss(&mut self) {
        self.notifications.dismiss();
    }

    pub fn current(&self) -> Option<&Notification> {
        self.notifications.current()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new()
    }
}
