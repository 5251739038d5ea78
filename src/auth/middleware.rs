//! Axum extractor for authenticated admin sessions.

use crate::auth::{cookie, token};
use crate::config::Config;
use crate::error::AppError;
use crate::models::Identity;
use crate::storage::JsonStore;
use axum::{extract::FromRequestParts, http::request::Parts};
use std::sync::Arc;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: JsonStore,
    pub config: Arc<Config>,
}

/// Authenticated session extractor.
///
/// Extracts the session token from the `admin_token` cookie and verifies
/// the signature and expiry. Returns 401 Unauthorized if missing or
/// invalid; the message never says which check failed.
pub struct AuthSession {
    pub identity: Identity,
}

impl FromRequestParts<AppState> for AuthSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = cookie::token_from_headers(&parts.headers)
            .ok_or_else(|| AppError::Unauthorized("Authentication required".to_string()))?;

        let claims = token::verify_full(&token, &state.config.jwt_secret)
            .ok_or_else(|| AppError::Unauthorized("Authentication required".to_string()))?;

        Ok(AuthSession {
            identity: claims.identity(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        routing::get,
        Router,
    };
    use tower::ServiceExt;

    fn test_state(dir: &std::path::Path) -> AppState {
        let config = Config {
            environment: "development".to_string(),
            jwt_secret: "test-secret".to_string(),
            admin_email: None,
            admin_password: None,
            admin_name: "Admin".to_string(),
            data_dir: dir.to_path_buf(),
            static_dir: dir.to_path_buf(),
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            session_ttl_days: 7,
        };
        AppState {
            store: JsonStore::new(dir),
            config: Arc::new(config),
        }
    }

    async fn whoami(session: AuthSession) -> String {
        session.identity.email
    }

    fn test_app(state: AppState) -> Router {
        Router::new().route("/whoami", get(whoami)).with_state(state)
    }

    #[tokio::test]
    async fn test_missing_cookie_is_unauthorized() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(test_state(dir.path()));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/whoami")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_valid_cookie_authenticates() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path());

        let user = User {
            id: "u1".to_string(),
            email: "admin@example.com".to_string(),
            password: "hash".to_string(),
            name: "Admin".to_string(),
            role: "admin".to_string(),
        };
        let tok = token::issue(&user, &state.config.jwt_secret, 7).unwrap();

        let response = test_app(state)
            .oneshot(
                Request::builder()
                    .uri("/whoami")
                    .header(header::COOKIE, format!("admin_token={}", tok))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(body, "admin@example.com");
    }

    #[tokio::test]
    async fn test_tampered_cookie_is_unauthorized() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path());

        let user = User {
            id: "u1".to_string(),
            email: "admin@example.com".to_string(),
            password: "hash".to_string(),
            name: "Admin".to_string(),
            role: "admin".to_string(),
        };
        // Signed with a different secret: structurally fine, must still fail
        let tok = token::issue(&user, "other-secret", 7).unwrap();

        let response = test_app(state)
            .oneshot(
                Request::builder()
                    .uri("/whoami")
                    .header(header::COOKIE, format!("admin_token={}", tok))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
