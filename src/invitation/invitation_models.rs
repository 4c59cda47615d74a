use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An invitation for `join_user_id` to join `group_id`, sent by `invite_user_id`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GroupInvitation {
    pub id: i64,
    pub group_id: i64,
    pub join_user_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invite_user_id: Option<i64>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
