use std::sync::Arc;

use super::{
    notification_models::{NewNotification, Notification},
    notification_repository::NotificationRepository,
};
use crate::error::{AppError, Result};

/// Read and update access to persisted notifications.
#[derive(Clone)]
pub struct NotificationService {
    repo: Arc<dyn NotificationRepository>,
}

impl NotificationService {
    pub fn new(repo: Arc<dyn NotificationRepository>) -> Self {
        Self { repo }
    }

    /// Stores a new notification and returns its assigned id.
    pub async fn create(&self, notification: NewNotification) -> Result<i64> {
        if notification.message.trim().is_empty() {
            return Err(AppError::Validation(
                "Notification message must not be empty".to_string(),
            ));
        }

        let created = self.repo.create(notification).await?;
        tracing::debug!(
            notification_id = created.id,
            user_id = created.user_id,
            "Created notification"
        );

        Ok(created.id)
    }

    pub async fn list_notifications(&self) -> Result<Vec<Notification>> {
        self.repo.find_all().await
    }

    pub async fn get_notification(&self, id: i64) -> Result<Notification> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Notification {} not found", id)))
    }

    /// Marking an already-read notification again is a no-op.
    pub async fn mark_as_read(&self, id: i64) -> Result<()> {
        let rows_affected = self.repo.mark_as_read(id).await?;

        if rows_affected == 0 {
            return Err(AppError::NotFound(format!("Notification {} not found", id)));
        }

        Ok(())
    }
}
