use axum::{Json, extract::rejection::JsonRejection};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{Instrument, info, info_span};
use utoipa::ToSchema;

use crate::error::ProcessingError;
use crate::heuristics::build_cornell_notes;
use crate::models::{NoteRequest, NoteResponse};

use super::docs::DOCS_PATH;
use super::error::{ApiError, ErrorResponse};

pub const HEALTH_PATH: &str = "/health";
pub const CORNELL_NOTES_PATH: &str = "/notes/cornell";

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
    pub endpoints: Endpoints,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Endpoints {
    pub health: String,
    pub cornell_notes: String,
    pub docs: String,
}

/// GET /health
#[utoipa::path(
    get,
    path = "/health",
    tag = "service",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now(),
    })
}

/// GET /
#[utoipa::path(
    get,
    path = "/",
    tag = "service",
    responses(
        (status = 200, description = "Service metadata and endpoint list", body = ServiceInfo)
    )
)]
pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "Welcome to OwlNotes AI API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: Endpoints {
            health: HEALTH_PATH.to_string(),
            cornell_notes: CORNELL_NOTES_PATH.to_string(),
            docs: DOCS_PATH.to_string(),
        },
    })
}

/// POST /notes/cornell
#[utoipa::path(
    post,
    path = "/notes/cornell",
    tag = "notes",
    request_body = NoteRequest,
    responses(
        (status = 200, description = "Cornell notes generated", body = NoteResponse),
        (status = 400, description = "Body is not valid JSON", body = ErrorResponse),
        (status = 415, description = "Missing JSON content type", body = ErrorResponse),
        (status = 422, description = "Body does not match the request schema", body = ErrorResponse),
        (status = 500, description = "Note generation failed", body = ErrorResponse)
    )
)]
pub async fn cornell_notes(
    payload: Result<Json<NoteRequest>, JsonRejection>,
) -> Result<Json<NoteResponse>, ApiError> {
    let Json(request) = payload?;
    let request_id = uuid::Uuid::new_v4();

    async move {
        info!(
            transcript_chars = request.transcript.chars().count(),
            slides = request.slides.len(),
            "Generating Cornell notes"
        );

        let response = generate_notes(request).await?;

        info!(
            cues = response.cues.len(),
            notes = response.notes.len(),
            key_concepts = response.key_concepts.len(),
            questions = response.questions.len(),
            citations = response.citations.len(),
            "Cornell notes generated"
        );

        Ok::<_, ApiError>(Json(response))
    }
    .instrument(info_span!("cornell_notes", %request_id))
    .await
}

/// Build notes on the blocking pool
///
/// A panic anywhere in generation becomes a `ProcessingError`; no partial
/// response is returned.
pub async fn generate_notes(request: NoteRequest) -> Result<NoteResponse, ProcessingError> {
    tokio::task::spawn_blocking(move || build_cornell_notes(&request))
        .await
        .map_err(|e| {
            if e.is_panic() {
                ProcessingError::from_panic(e.into_panic())
            } else {
                ProcessingError::Generation(e.to_string())
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_generate_notes() {
        let request = NoteRequest::new("Binary Trees are great. Binary Trees are useful.", vec![]);
        let response = generate_notes(request).await.unwrap();

        assert_eq!(response.key_concepts, vec!["Binary", "Trees"]);
        assert_eq!(response.cues, vec!["Binary Trees are great. Binary Trees are useful."]);
    }

    #[tokio::test]
    async fn test_root_lists_endpoints() {
        let Json(info) = root().await;

        assert_eq!(info.endpoints.health, "/health");
        assert_eq!(info.endpoints.cornell_notes, "/notes/cornell");
        assert_eq!(info.endpoints.docs, "/docs");
        assert_eq!(info.version, "1.0.0");
    }
}
