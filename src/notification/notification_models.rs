use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Type tags the composer writes into `notifications.type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    Group,
    General,
}

impl NotificationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationType::Group => "group",
            NotificationType::General => "",
        }
    }
}

impl std::fmt::Display for NotificationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct Notification {
    pub id: i64,
    pub user_id: i64,
    /// `None` for system-generated notifications.
    pub sender_id: Option<i64>,
    pub group_id: Option<i64>,
    #[sqlx(rename = "type")]
    pub kind: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

/// Wire shape of a notification. Sender and group ids stay server-side.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NotificationResponse {
    pub id: i64,
    pub user_id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Notification> for NotificationResponse {
    fn from(notification: Notification) -> Self {
        Self {
            id: notification.id,
            user_id: notification.user_id,
            kind: notification.kind,
            message: notification.message,
            is_read: notification.is_read,
            created_at: notification.created_at,
        }
    }
}

/// A notification waiting to be persisted. The store assigns `id`,
/// `created_at` and the unread flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNotification {
    pub user_id: i64,
    pub sender_id: Option<i64>,
    pub group_id: Option<i64>,
    pub kind: NotificationType,
    pub message: String,
}

impl NewNotification {
    pub fn new(
        user_id: i64,
        sender_id: Option<i64>,
        kind: NotificationType,
        message: impl Into<String>,
    ) -> Self {
        Self {
            user_id,
            sender_id,
            group_id: None,
            kind,
            message: message.into(),
        }
    }

    /// Group-scoped notification: type "group", no sender, tagged with the group.
    pub fn group(user_id: i64, group_id: i64, message: impl Into<String>) -> Self {
        Self {
            user_id,
            sender_id: None,
            group_id: Some(group_id),
            kind: NotificationType::Group,
            message: message.into(),
        }
    }
}
