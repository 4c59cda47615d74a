use async_trait::async_trait;
use sqlx::PgPool;

use super::notification_models::{NewNotification, Notification};
use crate::error::Result;

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Persists a new unread notification and returns the stored row.
    async fn create(&self, notification: NewNotification) -> Result<Notification>;

    async fn find_all(&self) -> Result<Vec<Notification>>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Notification>>;

    /// Returns the number of rows matched, which is zero for an unknown id.
    async fn mark_as_read(&self, id: i64) -> Result<u64>;
}

#[derive(Clone)]
pub struct PgNotificationRepository {
    pool: PgPool,
}

impl PgNotificationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotificationRepository for PgNotificationRepository {
    async fn create(&self, notification: NewNotification) -> Result<Notification> {
        let notification = sqlx::query_as::<_, Notification>(
            "INSERT INTO notifications (user_id, sender_id, group_id, type, message)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING *",
        )
        .bind(notification.user_id)
        .bind(notification.sender_id)
        .bind(notification.group_id)
        .bind(notification.kind.as_str())
        .bind(&notification.message)
        .fetch_one(&self.pool)
        .await?;

        Ok(notification)
    }

    async fn find_all(&self) -> Result<Vec<Notification>> {
        let notifications =
            sqlx::query_as::<_, Notification>("SELECT * FROM notifications ORDER BY id ASC")
                .fetch_all(&self.pool)
                .await?;

        Ok(notifications)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Notification>> {
        let notification =
            sqlx::query_as::<_, Notification>("SELECT * FROM notifications WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(notification)
    }

    async fn mark_as_read(&self, id: i64) -> Result<u64> {
        let result = sqlx::query("UPDATE notifications SET is_read = true WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
