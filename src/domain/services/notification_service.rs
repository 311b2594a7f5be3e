use std::sync::Arc;
use crate::domain::{models::notification::Notification, ports::NotificationRepository};
use crate::error::AppError;
use tracing::{debug, info};

pub const INBOX_LIMIT: i64 = 50;

pub struct NotificationStore {
    repo: Arc<dyn NotificationRepository>,
}

impl NotificationStore {
    pub fn new(repo: Arc<dyn NotificationRepository>) -> Self {
        Self { repo }
    }

    /// Newest first, capped at [`INBOX_LIMIT`], with the total unread count.
    pub async fn list_notifications(&self, user_id: i64) -> Result<(Vec<Notification>, i64), AppError> {
        let notifications = self.repo.list_for_user(user_id, INBOX_LIMIT).await?;
        let unread_count = self.repo.count_unread(user_id).await?;
        Ok((notifications, unread_count))
    }

    /// Succeeds even when the notification is missing or owned by someone else.
    pub async fn mark_read(&self, notification_id: i64, user_id: i64) -> Result<(), AppError> {
        let affected = self.repo.mark_read(notification_id, user_id).await?;
        if affected == 0 {
            debug!("Notification {} not marked for user {}: no matching row", notification_id, user_id);
        }
        Ok(())
    }

    pub async fn mark_all_read(&self, user_id: i64) -> Result<(), AppError> {
        let affected = self.repo.mark_all_read(user_id).await?;
        info!("Marked {} notifications read for user {}", affected, user_id);
        Ok(())
    }
}
