use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use super::docs::{self, DOCS_PATH, OPENAPI_PATH};
use super::handlers::{self, CORNELL_NOTES_PATH, HEALTH_PATH};

/// Create the router with every endpoint, the API docs and request tracing
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route(HEALTH_PATH, get(handlers::health))
        .route(CORNELL_NOTES_PATH, post(handlers::cornell_notes))
        .route(OPENAPI_PATH, get(docs::openapi_json))
        .route(DOCS_PATH, get(docs::swagger_ui))
        .layer(TraceLayer::new_for_http())
}
