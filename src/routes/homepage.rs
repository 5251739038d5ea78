//! Homepage admin API endpoints.
//!
//! The homepage is the one deep-merge singleton: PUT merges nested
//! objects recursively instead of the shallow per-field merge the
//! collection endpoints use.

use crate::auth::middleware::{AppState, AuthSession};
use crate::error::AppError;
use crate::storage;
use axum::{extract::State, response::IntoResponse, Json};
use serde_json::Value;

/// GET /api/admin/homepage — Whole homepage document.
pub async fn get_document(
    _session: AuthSession,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(storage::homepage::get_document(&state.store).await?))
}

/// PUT /api/admin/homepage — Deep-merge the patch and return the result.
pub async fn update_document(
    _session: AuthSession,
    State(state): State<AppState>,
    Json(patch): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let merged = storage::homepage::merge_document(&state.store, patch).await?;
    tracing::info!(action = "homepage_updated", "Homepage updated");
    Ok(Json(merged))
}
