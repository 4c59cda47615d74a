use async_trait::async_trait;
use sqlx::PgPool;

use super::invitation_models::GroupInvitation;
use crate::error::Result;

#[async_trait]
pub trait InvitationRepository: Send + Sync {
    async fn find_by_id(&self, invitation_id: i64) -> Result<Option<GroupInvitation>>;
}

#[derive(Clone)]
pub struct PgInvitationRepository {
    pool: PgPool,
}

impl PgInvitationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InvitationRepository for PgInvitationRepository {
    async fn find_by_id(&self, invitation_id: i64) -> Result<Option<GroupInvitation>> {
        let invitation = sqlx::query_as::<_, GroupInvitation>(
            "SELECT id, group_id, join_user_id, invite_user_id, status, created_at
             FROM group_invitations WHERE id = $1",
        )
        .bind(invitation_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(invitation)
    }
}
