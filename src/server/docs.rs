use axum::{Json, response::Html};
use utoipa::OpenApi;

use crate::models::{Citation, CitationType, NoteRequest, NoteResponse};

use super::error::ErrorResponse;
use super::handlers::{self, Endpoints, HealthResponse, ServiceInfo};

pub const DOCS_PATH: &str = "/docs";
pub const OPENAPI_PATH: &str = "/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "OwlNotes AI API",
        description = "AI-powered note-taking companion that turns lecture transcripts into Cornell notes"
    ),
    paths(handlers::root, handlers::health, handlers::cornell_notes),
    components(
        schemas(
            NoteRequest,
            NoteResponse,
            Citation,
            CitationType,
            HealthResponse,
            ServiceInfo,
            Endpoints,
            ErrorResponse
        )
    ),
    tags(
        (name = "notes", description = "Cornell note generation"),
        (name = "service", description = "Health and metadata")
    )
)]
pub struct ApiDoc;

/// GET /openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// GET /docs
///
/// Swagger UI page, assets loaded from the jsDelivr CDN.
pub async fn swagger_ui() -> Html<String> {
    Html(format!(
        r##"<!DOCTYPE html>
<html>
<head>
<title>OwlNotes AI API - Swagger UI</title>
<link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
<div id="swagger-ui"></div>
<script src="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
<script>
SwaggerUIBundle({{ url: "{}", dom_id: "#swagger-ui" }});
</script>
</body>
</html>
"##,
        OPENAPI_PATH
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_endpoint() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/"));
        assert!(doc.paths.paths.contains_key("/health"));
        assert!(doc.paths.paths.contains_key("/notes/cornell"));
    }

    #[test]
    fn test_openapi_has_note_schemas() {
        let json = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let schemas = &json["components"]["schemas"];

        assert!(schemas["NoteRequest"].is_object());
        assert!(schemas["NoteResponse"].is_object());
        assert!(schemas["Citation"]["properties"]["type"].is_object());
    }

    #[tokio::test]
    async fn test_swagger_ui_points_at_spec() {
        let Html(page) = swagger_ui().await;
        assert!(page.contains(r#"url: "/openapi.json""#));
    }
}
