use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::notification_models::NotificationResponse;
use crate::{
    error::{AppError, Result},
    state::AppState,
};

fn parse_notification_id(raw: &str) -> Result<i64> {
    raw.parse()
        .map_err(|_| AppError::BadRequest("Invalid notification ID".to_string()))
}

/// Get all notifications
#[utoipa::path(
    get,
    path = "/api/notifications",
    responses(
        (status = 200, description = "List of notifications", body = Vec<NotificationResponse>),
        (status = 500, description = "Failed to get notifications")
    ),
    tag = "notifications"
)]
pub async fn get_notifications(
    State(state): State<AppState>,
) -> Result<Json<Vec<NotificationResponse>>> {
    let notifications = state
        .notification_service
        .list_notifications()
        .await
        .map_err(|e| e.context("Failed to get notifications"))?;

    Ok(Json(notifications.into_iter().map(Into::into).collect()))
}

/// Get a notification by id
#[utoipa::path(
    get,
    path = "/api/notifications/{id}",
    params(
        ("id" = i64, Path, description = "Notification ID")
    ),
    responses(
        (status = 200, description = "The notification", body = NotificationResponse),
        (status = 400, description = "Invalid notification ID"),
        (status = 404, description = "Notification not found"),
        (status = 500, description = "Failed to get notification")
    ),
    tag = "notifications"
)]
pub async fn get_notification(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<NotificationResponse>> {
    let id = parse_notification_id(&id)?;
    let notification = state
        .notification_service
        .get_notification(id)
        .await
        .map_err(|e| e.context("Failed to get notification"))?;

    Ok(Json(notification.into()))
}

/// Mark notification as read
#[utoipa::path(
    post,
    path = "/api/notifications/{id}/read",
    params(
        ("id" = i64, Path, description = "Notification ID")
    ),
    responses(
        (status = 200, description = "Notification marked as read", body = String),
        (status = 400, description = "Invalid notification ID"),
        (status = 404, description = "Notification not found"),
        (status = 500, description = "Failed to mark notification as read")
    ),
    tag = "notifications"
)]
pub async fn mark_notification_read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, &'static str)> {
    let id = parse_notification_id(&id)?;
    state
        .notification_service
        .mark_as_read(id)
        .await
        .map_err(|e| e.context("Failed to mark notification as read"))?;

    Ok((StatusCode::OK, "Notification marked as read successfully!"))
}
