//! FAQ admin API endpoints.

use crate::auth::middleware::{AppState, AuthSession};
use crate::error::AppError;
use crate::models::{CreateFaq, UpdateFaq};
use crate::routes::DeleteParams;
use crate::storage;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

/// GET /api/admin/faqs — Whole FAQ document.
pub async fn get_document(
    _session: AuthSession,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(storage::faqs::get_document(&state.store).await?))
}

/// POST /api/admin/faqs — Create an FAQ.
pub async fn create_faq(
    _session: AuthSession,
    State(state): State<AppState>,
    Json(payload): Json<CreateFaq>,
) -> Result<impl IntoResponse, AppError> {
    let faq = storage::faqs::create_faq(&state.store, payload).await?;
    tracing::info!(action = "faq_created", id = %faq.id, "FAQ created");
    Ok((StatusCode::CREATED, Json(faq)))
}

/// PUT /api/admin/faqs — Update an FAQ (id in body).
pub async fn update_faq(
    _session: AuthSession,
    State(state): State<AppState>,
    Json(mut payload): Json<UpdateFaq>,
) -> Result<impl IntoResponse, AppError> {
    let id = payload
        .id
        .take()
        .ok_or_else(|| AppError::BadRequest("Missing FAQ id".to_string()))?;
    let faq = storage::faqs::update_faq(&state.store, id, payload).await?;
    tracing::info!(action = "faq_updated", id = %faq.id, "FAQ updated");
    Ok(Json(faq))
}

/// DELETE /api/admin/faqs?id= — Delete an FAQ.
pub async fn delete_faq(
    _session: AuthSession,
    State(state): State<AppState>,
    Query(params): Query<DeleteParams>,
) -> Result<impl IntoResponse, AppError> {
    let id = params
        .id
        .ok_or_else(|| AppError::BadRequest("Missing FAQ id".to_string()))?;
    storage::faqs::delete_faq(&state.store, id.clone()).await?;
    tracing::info!(action = "faq_deleted", id = %id, "FAQ deleted");
    Ok(Json(serde_json::json!({ "success": true })))
}
