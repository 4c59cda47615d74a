use crate::{
    notification::{notification_handlers, routes::notification_routes, NotificationResponse},
    state::AppState,
};
use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        notification_handlers::get_notifications,
        notification_handlers::get_notification,
        notification_handlers::mark_notification_read,
    ),
    components(schemas(NotificationResponse)),
    tags(
        (name = "notifications", description = "Notification endpoints")
    )
)]
pub struct ApiDoc;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new().nest("/notifications", notification_routes());

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_notification_paths() {
        let paths = ApiDoc::openapi().paths.paths;
        assert!(paths.contains_key("/api/notifications"));
        assert!(paths.contains_key("/api/notifications/{id}"));
        assert!(paths.contains_key("/api/notifications/{id}/read"));
    }
}
