//! Case study admin API endpoints.

use crate::auth::middleware::{AppState, AuthSession};
use crate::error::AppError;
use crate::models::{CreateCaseStudy, UpdateCaseStudy};
use crate::routes::DeleteParams;
use crate::storage;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

/// GET /api/admin/case-studies — Whole case studies document.
pub async fn get_document(
    _session: AuthSession,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(storage::case_studies::get_document(&state.store).await?))
}

/// POST /api/admin/case-studies — Create a case study.
pub async fn create_study(
    _session: AuthSession,
    State(state): State<AppState>,
    Json(payload): Json<CreateCaseStudy>,
) -> Result<impl IntoResponse, AppError> {
    let study = storage::case_studies::create_study(&state.store, payload).await?;
    tracing::info!(action = "case_study_created", id = %study.id, "Case study created");
    Ok((StatusCode::CREATED, Json(study)))
}

/// PUT /api/admin/case-studies — Update a case study (id in body).
pub async fn update_study(
    _session: AuthSession,
    State(state): State<AppState>,
    Json(mut payload): Json<UpdateCaseStudy>,
) -> Result<impl IntoResponse, AppError> {
    let id = payload
        .id
        .take()
        .ok_or_else(|| AppError::BadRequest("Missing case study id".to_string()))?;
    let study = storage::case_studies::update_study(&state.store, id, payload).await?;
    tracing::info!(action = "case_study_updated", id = %study.id, "Case study updated");
    Ok(Json(study))
}

/// DELETE /api/admin/case-studies?id= — Delete a case study.
pub async fn delete_study(
    _session: AuthSession,
    State(state): State<AppState>,
    Query(params): Query<DeleteParams>,
) -> Result<impl IntoResponse, AppError> {
    let id = params
        .id
        .ok_or_else(|| AppError::BadRequest("Missing case study id".to_string()))?;
    storage::case_studies::delete_study(&state.store, id.clone()).await?;
    tracing::info!(action = "case_study_deleted", id = %id, "Case study deleted");
    Ok(Json(serde_json::json!({ "success": true })))
}
