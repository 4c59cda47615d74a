use async_trait::async_trait;
use sqlx::PgPool;

use super::group_models::GroupMember;
use crate::error::Result;

#[async_trait]
pub trait GroupMemberRepository: Send + Sync {
    /// Current members in join order. An unknown group has no members.
    async fn find_members(&self, group_id: i64) -> Result<Vec<GroupMember>>;

    /// The group admin is the user who created the group.
    async fn find_admin_id(&self, group_id: i64) -> Result<Option<i64>>;
}

#[derive(Clone)]
pub struct PgGroupMemberRepository {
    pool: PgPool,
}

impl PgGroupMemberRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GroupMemberRepository for PgGroupMemberRepository {
    async fn find_members(&self, group_id: i64) -> Result<Vec<GroupMember>> {
        let members = sqlx::query_as::<_, GroupMember>(
            "SELECT group_id, user_id, joined_at FROM group_members
             WHERE group_id = $1
             ORDER BY joined_at ASC",
        )
        .bind(group_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(members)
    }

    async fn find_admin_id(&self, group_id: i64) -> Result<Option<i64>> {
        let admin_id = sqlx::query_scalar::<_, i64>("SELECT creator_id FROM groups WHERE id = $1")
            .bind(group_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(admin_id)
    }
}
