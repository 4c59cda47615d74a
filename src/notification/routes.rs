use axum::{
    routing::{get, post},
    Router,
};

use super::notification_handlers;
use crate::state::AppState;

pub fn notification_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(notification_handlers::get_notifications))
        .route("/:id", get(notification_handlers::get_notification))
        .route(
            "/:id/read",
            post(notification_handlers::mark_notification_read)
                .patch(notification_handlers::mark_notification_read),
        )
}
