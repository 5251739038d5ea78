//! Review admin API endpoints.

use crate::auth::middleware::{AppState, AuthSession};
use crate::error::AppError;
use crate::models::{CreateReview, UpdateReview};
use crate::routes::DeleteParams;
use crate::storage;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

/// GET /api/admin/reviews — Whole reviews document.
pub async fn get_document(
    _session: AuthSession,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(storage::reviews::get_document(&state.store).await?))
}

/// POST /api/admin/reviews — Create a review.
pub async fn create_review(
    _session: AuthSession,
    State(state): State<AppState>,
    Json(payload): Json<CreateReview>,
) -> Result<impl IntoResponse, AppError> {
    let review = storage::reviews::create_review(&state.store, payload).await?;
    tracing::info!(action = "review_created", id = %review.id, "Review created");
    Ok((StatusCode::CREATED, Json(review)))
}

/// PUT /api/admin/reviews — Update a review (id in body).
pub async fn update_review(
    _session: AuthSession,
    State(state): State<AppState>,
    Json(mut payload): Json<UpdateReview>,
) -> Result<impl IntoResponse, AppError> {
    let id = payload
        .id
        .take()
        .ok_or_else(|| AppError::BadRequest("Missing review id".to_string()))?;
    let review = storage::reviews::update_review(&state.store, id, payload).await?;
    tracing::info!(action = "review_updated", id = %review.id, "Review updated");
    Ok(Json(review))
}

/// DELETE /api/admin/reviews?id= — Delete a review.
pub async fn delete_review(
    _session: AuthSession,
    State(state): State<AppState>,
    Query(params): Query<DeleteParams>,
) -> Result<impl IntoResponse, AppError> {
    let id = params
        .id
        .ok_or_else(|| AppError::BadRequest("Missing review id".to_string()))?;
    storage::reviews::delete_review(&state.store, id.clone()).await?;
    tracing::info!(action = "review_deleted", id = %id, "Review deleted");
    Ok(Json(serde_json::json!({ "success": true })))
}
