//! Auth API endpoints.

use crate::auth::middleware::{AppState, AuthSession};
use crate::auth::{self, cookie};
use crate::error::AppError;
use crate::models::{Identity, LoginRequest};
use crate::storage;
use axum::{extract::State, http::header, response::IntoResponse, Json};

/// POST /api/auth/login — Verify credentials and set the session cookie.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let email = req.email.filter(|s| !s.is_empty());
    let password = req.password.filter(|s| !s.is_empty());
    let (Some(email), Some(password)) = (email, password) else {
        return Err(AppError::BadRequest(
            "Email and password are required".to_string(),
        ));
    };

    // One generic failure for unknown email and wrong password, so the
    // response never reveals which accounts exist.
    let Some(user) = storage::users::find_by_email(&state.store, &email).await? else {
        tracing::warn!(action = "login_failed", "Invalid credentials");
        return Err(AppError::Unauthorized("Invalid email or password".to_string()));
    };
    if !auth::verify_password(&password, &user.password).unwrap_or(false) {
        tracing::warn!(action = "login_failed", "Invalid credentials");
        return Err(AppError::Unauthorized("Invalid email or password".to_string()));
    }

    let token = auth::issue(&user, &state.config.jwt_secret, state.config.session_ttl_days)?;
    let set_cookie = cookie::session_cookie(
        &token,
        state.config.session_ttl_days,
        state.config.is_production(),
    );

    let identity = Identity {
        id: user.id,
        email: user.email,
        name: user.name,
        role: user.role,
    };

    tracing::info!(action = "login", user_id = %identity.id, "Admin logged in");

    Ok(([(header::SET_COOKIE, set_cookie)], Json(identity)))
}

/// POST /api/auth/logout — Clear the session cookie.
pub async fn logout() -> impl IntoResponse {
    tracing::info!(action = "logout", "Admin logged out");
    (
        [(header::SET_COOKIE, cookie::clear_cookie())],
        Json(serde_json::json!({ "success": true })),
    )
}

/// GET /api/auth/me — Return the authenticated identity.
pub async fn me(session: AuthSession) -> Json<Identity> {
    Json(session.identity)
}
