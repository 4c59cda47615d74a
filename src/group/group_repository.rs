use async_trait::async_trait;
use sqlx::PgPool;

use super::group_models::Group;
use crate::error::Result;

#[async_trait]
pub trait GroupRepository: Send + Sync {
    async fn find_by_id(&self, group_id: i64) -> Result<Option<Group>>;

    async fn find_title(&self, group_id: i64) -> Result<Option<String>>;
}

#[derive(Clone)]
pub struct PgGroupRepository {
    pool: PgPool,
}

impl PgGroupRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GroupRepository for PgGroupRepository {
    async fn find_by_id(&self, group_id: i64) -> Result<Option<Group>> {
        let group = sqlx::query_as::<_, Group>(
            "SELECT id, creator_id, title, description, created_at FROM groups WHERE id = $1",
        )
        .bind(group_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(group)
    }

    async fn find_title(&self, group_id: i64) -> Result<Option<String>> {
        let title = sqlx::query_scalar::<_, String>("SELECT title FROM groups WHERE id = $1")
            .bind(group_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(title)
    }
}
