use crate::notifications::Notification;
use std::time::Instant;

/// Toast queue shown in the top-right corner.
pub(crate) struct NotificationHandler {
    notifications: Vec<Notification>,
}

impl NotificationHandler {
    pub(crate) fn new() -> Self {
        Self {
            notifications: Vec::new(),
        }
    }

    pub(crate) fn show_info(&mut self, title: &str, message: &str) {
        log::info!("{title}: {message}");
        self.notifications.push(Notification {
            title: title.to_string(),
            message: message.to_string(),
            created_at: Instant::now(),
        });
    }

    pub(crate) fn recent(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter().rev().take(5)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    pub(crate) fn cleanup_old_notifications(&mut self, max_age_secs: f32) {
        let now = Instant::now();
        self.notifications
            .retain(|n| now.duration_since(n.created_at).as_secs_f32() < max_age_secs);
    }
}
