use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::Result;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Returns `None` when no user has this id.
    async fn find_username(&self, user_id: i64) -> Result<Option<String>>;
}

#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_username(&self, user_id: i64) -> Result<Option<String>> {
        let username = sqlx::query_scalar::<_, String>("SELECT username FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(username)
    }
}
