//! Blog admin API endpoints.

use crate::auth::middleware::{AppState, AuthSession};
use crate::error::AppError;
use crate::models::{CreateBlogPost, UpdateBlogPost};
use crate::routes::DeleteParams;
use crate::storage;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

/// GET /api/admin/blog — Whole blog document.
pub async fn get_document(
    _session: AuthSession,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(storage::blog::get_document(&state.store).await?))
}

/// POST /api/admin/blog — Create a post.
pub async fn create_post(
    _session: AuthSession,
    State(state): State<AppState>,
    Json(payload): Json<CreateBlogPost>,
) -> Result<impl IntoResponse, AppError> {
    let post = storage::blog::create_post(&state.store, payload).await?;
    tracing::info!(action = "blog_post_created", id = %post.id, slug = %post.slug, "Blog post created");
    Ok((StatusCode::CREATED, Json(post)))
}

/// PUT /api/admin/blog — Update a post (id in body).
pub async fn update_post(
    _session: AuthSession,
    State(state): State<AppState>,
    Json(mut payload): Json<UpdateBlogPost>,
) -> Result<impl IntoResponse, AppError> {
    let id = payload
        .id
        .take()
        .ok_or_else(|| AppError::BadRequest("Missing post id".to_string()))?;
    let post = storage::blog::update_post(&state.store, id, payload).await?;
    tracing::info!(action = "blog_post_updated", id = %post.id, "Blog post updated");
    Ok(Json(post))
}

/// DELETE /api/admin/blog?id= — Delete a post.
pub async fn delete_post(
    _session: AuthSession,
    State(state): State<AppState>,
    Query(params): Query<DeleteParams>,
) -> Result<impl IntoResponse, AppError> {
    let id = params
        .id
        .ok_or_else(|| AppError::BadRequest("Missing post id".to_string()))?;
    storage::blog::delete_post(&state.store, id.clone()).await?;
    tracing::info!(action = "blog_post_deleted", id = %id, "Blog post deleted");
    Ok(Json(serde_json::json!({ "success": true })))
}
