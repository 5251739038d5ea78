//! Pricing admin API endpoints.

use crate::auth::middleware::{AppState, AuthSession};
use crate::error::AppError;
use crate::models::{CreatePricingPlan, UpdatePricingPlan};
use crate::routes::DeleteParams;
use crate::storage;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

/// GET /api/admin/pricing — Whole pricing document.
pub async fn get_document(
    _session: AuthSession,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(storage::pricing::get_document(&state.store).await?))
}

/// POST /api/admin/pricing — Create a pricing plan.
pub async fn create_plan(
    _session: AuthSession,
    State(state): State<AppState>,
    Json(payload): Json<CreatePricingPlan>,
) -> Result<impl IntoResponse, AppError> {
    let plan = storage::pricing::create_plan(&state.store, payload).await?;
    tracing::info!(action = "pricing_plan_created", id = %plan.id, "Pricing plan created");
    Ok((StatusCode::CREATED, Json(plan)))
}

/// PUT /api/admin/pricing — Update a pricing plan (id in body).
pub async fn update_plan(
    _session: AuthSession,
    State(state): State<AppState>,
    Json(mut payload): Json<UpdatePricingPlan>,
) -> Result<impl IntoResponse, AppError> {
    let id = payload
        .id
        .take()
        .ok_or_else(|| AppError::BadRequest("Missing plan id".to_string()))?;
    let plan = storage::pricing::update_plan(&state.store, id, payload).await?;
    tracing::info!(action = "pricing_plan_updated", id = %plan.id, "Pricing plan updated");
    Ok(Json(plan))
}

/// DELETE /api/admin/pricing?id= — Delete a pricing plan.
pub async fn delete_plan(
    _session: AuthSession,
    State(state): State<AppState>,
    Query(params): Query<DeleteParams>,
) -> Result<impl IntoResponse, AppError> {
    let id = params
        .id
        .ok_or_else(|| AppError::BadRequest("Missing plan id".to_string()))?;
    storage::pricing::delete_plan(&state.store, id.clone()).await?;
    tracing::info!(action = "pricing_plan_deleted", id = %id, "Pricing plan deleted");
    Ok(Json(serde_json::json!({ "success": true })))
}
