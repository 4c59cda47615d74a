pub mod notification_composer;
pub mod notification_handlers;
pub mod notification_models;
pub mod notification_repository;
pub mod notification_service;
pub mod routes;

pub use notification_composer::NotificationComposer;
pub use notification_models::{
    NewNotification, Notification, NotificationResponse, NotificationType,
};
pub use notification_repository::{NotificationRepository, PgNotificationRepository};
pub use notification_service::NotificationService;
