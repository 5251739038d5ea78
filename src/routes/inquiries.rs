//! Contact form and inquiry admin API endpoints.
//!
//! POST /api/contact is the only public mutation in the system. The admin
//! inquiry endpoints require a session like every other admin collection.

use crate::auth::middleware::{AppState, AuthSession};
use crate::error::AppError;
use crate::models::{ContactRequest, UpdateInquiry};
use crate::routes::DeleteParams;
use crate::storage;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};

/// POST /api/contact — Public contact form submission.
pub async fn contact(
    State(state): State<AppState>,
    Json(req): Json<ContactRequest>,
) -> Result<impl IntoResponse, AppError> {
    let name = req.name.filter(|s| !s.is_empty());
    let email = req.email.filter(|s| !s.is_empty());
    let message = req.message.filter(|s| !s.is_empty());
    let (Some(name), Some(email), Some(message)) = (name, email, message) else {
        return Err(AppError::BadRequest(
            "Name, email and message are required".to_string(),
        ));
    };

    let inquiry = storage::inquiries::create_inquiry(&state.store, name, email, message).await?;
    tracing::info!(action = "inquiry_received", id = %inquiry.id, "Contact inquiry received");
    Ok(Json(inquiry))
}

/// GET /api/admin/inquiries — Whole inquiries document.
pub async fn get_document(
    _session: AuthSession,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(storage::inquiries::get_document(&state.store).await?))
}

/// PUT /api/admin/inquiries — Update an inquiry's status (id in body).
pub async fn update_inquiry(
    _session: AuthSession,
    State(state): State<AppState>,
    Json(mut payload): Json<UpdateInquiry>,
) -> Result<impl IntoResponse, AppError> {
    let id = payload
        .id
        .take()
        .ok_or_else(|| AppError::BadRequest("Missing inquiry id".to_string()))?;
    let inquiry = storage::inquiries::update_inquiry(&state.store, id, payload).await?;
    tracing::info!(action = "inquiry_updated", id = %inquiry.id, status = %inquiry.status, "Inquiry updated");
    Ok(Json(inquiry))
}

/// DELETE /api/admin/inquiries?id= — Delete an inquiry.
pub async fn delete_inquiry(
    _session: AuthSession,
    State(state): State<AppState>,
    Query(params): Query<DeleteParams>,
) -> Result<impl IntoResponse, AppError> {
    let id = params
        .id
        .ok_or_else(|| AppError::BadRequest("Missing inquiry id".to_string()))?;
    storage::inquiries::delete_inquiry(&state.store, id.clone()).await?;
    tracing::info!(action = "inquiry_deleted", id = %id, "Inquiry deleted");
    Ok(Json(serde_json::json!({ "success": true })))
}
