use anyhow::Context;
use std::sync::Arc;

use crate::{
    db::DbPool,
    group::{PgGroupMemberRepository, PgGroupRepository},
    invitation::PgInvitationRepository,
    notification::{NotificationComposer, NotificationService, PgNotificationRepository},
    user::PgUserRepository,
};

#[derive(Clone)]
pub struct AppState {
    pub notification_service: NotificationService,
    /// Entry point for the group and invitation subsystems to raise events.
    pub notification_composer: NotificationComposer,
}

impl AppState {
    pub fn new(
        notification_service: NotificationService,
        notification_composer: NotificationComposer,
    ) -> Self {
        Self {
            notification_service,
            notification_composer,
        }
    }

    /// Wires every repository to the same Postgres pool.
    pub fn from_pool(db: DbPool) -> Self {
        let notification_service =
            NotificationService::new(Arc::new(PgNotificationRepository::new(db.clone())));
        let notification_composer = NotificationComposer::new(
            notification_service.clone(),
            Arc::new(PgUserRepository::new(db.clone())),
            Arc::new(PgGroupRepository::new(db.clone())),
            Arc::new(PgGroupMemberRepository::new(db.clone())),
            Arc::new(PgInvitationRepository::new(db)),
        );

        Self::new(notification_service, notification_composer)
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            database_max_connections: std::env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "5".to_string())
                .parse::<u32>()
                .context("DATABASE_MAX_CONNECTIONS must be a number")?,
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse::<u16>()
                .context("PORT must be a port number")?,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
