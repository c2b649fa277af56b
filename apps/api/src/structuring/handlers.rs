//! Axum route handlers for the CV structuring API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::document::extract_text;
use crate::errors::AppError;
use crate::state::AppState;
use crate::structuring::models::CvRecord;

/// Multipart field carrying the uploaded document.
const FILE_FIELD: &str = "file";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct StructureRequest {
    pub raw_text: String,
}

#[derive(Debug, Serialize)]
pub struct StructureResponse {
    pub request_id: Uuid,
    pub backend: String,
    pub structured_at: DateTime<Utc>,
    pub cv: CvRecord,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/cv/structure
///
/// Structures already-extracted résumé text.
pub async fn handle_structure(
    State(state): State<AppState>,
    Json(request): Json<StructureRequest>,
) -> Result<Json<StructureResponse>, AppError> {
    if request.raw_text.trim().is_empty() {
        return Err(AppError::Validation("raw_text cannot be empty".to_string()));
    }

    structure(&state, &request.raw_text).await.map(Json)
}

/// POST /api/v1/cv/upload
///
/// Accepts a PDF or plain-text résumé as multipart field `file`, extracts its
/// text and structures it.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<StructureResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Could not read uploaded file: {e}")))?;

        info!(
            filename = filename.as_deref().unwrap_or("-"),
            bytes = data.len(),
            "CV upload received"
        );

        let raw_text = extract_text(data, filename.as_deref(), content_type.as_deref()).await?;
        return structure(&state, &raw_text).await.map(Json);
    }

    Err(AppError::Validation(format!(
        "Multipart field '{FILE_FIELD}' is required"
    )))
}

async fn structure(state: &AppState, raw_text: &str) -> Result<StructureResponse, AppError> {
    let structured = state.structurer.structure(raw_text).await?;
    let response = StructureResponse {
        request_id: Uuid::new_v4(),
        backend: structured.backend.to_string(),
        structured_at: Utc::now(),
        cv: structured.cv,
    };

    info!(
        request_id = %response.request_id,
        backend = %response.backend,
        experiences = response.cv.experiences.len(),
        education = response.cv.education.len(),
        skills = response.cv.skills.len(),
        projects = response.cv.projects.len(),
        "CV structured"
    );

    Ok(response)
}
