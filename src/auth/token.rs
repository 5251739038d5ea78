//! Session token issuance and verification.
//!
//! Tokens are HS256 JWTs embedding the admin identity and a 7-day expiry.
//! Two verification levels exist:
//!
//! - [`verify_full`] checks the signature and expiry. This is the security
//!   boundary and runs inside every protected handler.
//! - [`verify_structural`] only checks token shape and the decoded expiry.
//!   It is a cheap rejection filter for the edge interceptor and MUST NOT
//!   be treated as authentication.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::{Identity, User};

/// Identity claims embedded in a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// user id
    pub sub: String,
    pub email: String,
    pub name: String,
    pub role: String,
    /// expiration timestamp (seconds since epoch)
    pub exp: i64,
    /// issued-at timestamp
    pub iat: i64,
}

impl Claims {
    pub fn identity(&self) -> Identity {
        Identity {
            id: self.sub.clone(),
            email: self.email.clone(),
            name: self.name.clone(),
            role: self.role.clone(),
        }
    }
}

/// Issue a signed session token for a verified user identity.
pub fn issue(user: &User, secret: &str, ttl_days: i64) -> Result<String, AppError> {
    let now = chrono::Utc::now();
    let exp = now
        .checked_add_signed(chrono::Duration::days(ttl_days))
        .ok_or_else(|| AppError::Internal("Failed to calculate token expiry".to_string()))?
        .timestamp();

    let claims = Claims {
        sub: user.id.clone(),
        email: user.email.clone(),
        name: user.name.clone(),
        role: user.role.clone(),
        exp,
        iat: now.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("Failed to sign token: {}", e)))
}

/// Cryptographically verify a token's signature and expiry.
///
/// Any failure (bad signature, expired, malformed) degrades to `None`;
/// callers treat that as unauthenticated.
pub fn verify_full(token: &str, secret: &str) -> Option<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .ok()
}

/// Structural pre-check: three non-empty segments and a decodable payload
/// whose `exp` has not passed. Does NOT check the signature.
pub fn verify_structural(token: &str) -> bool {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 || segments.iter().any(|s| s.is_empty()) {
        return false;
    }

    let Ok(payload) = URL_SAFE_NO_PAD.decode(segments[1]) else {
        return false;
    };
    let Ok(value) = serde_json::from_slice::<serde_json::Value>(&payload) else {
        return false;
    };
    let Some(exp) = value.get("exp").and_then(|v| v.as_i64()) else {
        return false;
    };

    exp > chrono::Utc::now().timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    fn test_user() -> User {
        User {
            id: "u1".to_string(),
            email: "admin@example.com".to_string(),
            password: "hash".to_string(),
            name: "Admin".to_string(),
            role: "admin".to_string(),
        }
    }

    /// Encode a token whose expiry is already in the past.
    fn expired_token(secret: &str) -> String {
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: "u1".to_string(),
            email: "admin@example.com".to_string(),
            name: "Admin".to_string(),
            role: "admin".to_string(),
            // Past the default validation leeway
            exp: now - 600,
            iat: now - 700,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_issue_then_verify_roundtrip() {
        let token = issue(&test_user(), SECRET, 7).unwrap();
        let claims = verify_full(&token, SECRET).expect("token should verify");

        assert_eq!(claims.sub, "u1");
        assert_eq!(claims.email, "admin@example.com");
        assert_eq!(claims.name, "Admin");
        assert_eq!(claims.role, "admin");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_expired_token_fails_both_checks() {
        let token = expired_token(SECRET);
        assert!(verify_full(&token, SECRET).is_none());
        assert!(!verify_structural(&token));
    }

    #[test]
    fn test_tampered_signature_fails_full_verification() {
        // Sign with a different secret: structurally valid, wrong signature
        let token = issue(&test_user(), "other-secret", 7).unwrap();
        assert!(verify_structural(&token));
        assert!(verify_full(&token, SECRET).is_none());
    }

    #[test]
    fn test_structural_accepts_valid_token() {
        let token = issue(&test_user(), SECRET, 7).unwrap();
        assert!(verify_structural(&token));
    }

    #[test]
    fn test_structural_rejects_garbage() {
        assert!(!verify_structural(""));
        assert!(!verify_structural("not-a-token"));
        assert!(!verify_structural("a.b"));
        assert!(!verify_structural("a.b.c.d"));
        assert!(!verify_structural("..sig"));
        // Valid shape but payload is not base64 JSON
        assert!(!verify_structural("header.!!!.sig"));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = issue(&test_user(), SECRET, 7).unwrap();
        assert!(verify_full(&token, "wrong").is_none());
    }
}
