//! Session cookie contract.
//!
//! The session token travels in an HTTP-only cookie named `admin_token`:
//! `SameSite=Lax`, root path, 7-day max age, `Secure` in production.

use axum::http::{header, HeaderMap};

pub const COOKIE_NAME: &str = "admin_token";

/// Build the `Set-Cookie` value carrying a freshly issued session token.
pub fn session_cookie(token: &str, ttl_days: i64, secure: bool) -> String {
    let mut cookie = format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        COOKIE_NAME,
        token,
        ttl_days * 86_400
    );
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Build the `Set-Cookie` value that clears the session cookie.
pub fn clear_cookie() -> String {
    format!("{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0", COOKIE_NAME)
}

/// Extract the session token from the request's Cookie header(s).
pub fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    for value in headers.get_all(header::COOKIE) {
        let raw = value.to_str().ok()?;
        for pair in raw.split(';') {
            if let Some((name, token)) = pair.trim().split_once('=') {
                if name == COOKIE_NAME && !token.is_empty() {
                    return Some(token.to_string());
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_session_cookie_flags() {
        let cookie = session_cookie("tok123", 7, false);
        assert!(cookie.starts_with("admin_token=tok123"));
        assert!(cookie.contains("Path=/"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(cookie.contains("Max-Age=604800"));
        assert!(!cookie.contains("Secure"));

        let cookie = session_cookie("tok123", 7, true);
        assert!(cookie.contains("Secure"));
    }

    #[test]
    fn test_clear_cookie_expires_immediately() {
        let cookie = clear_cookie();
        assert!(cookie.starts_with("admin_token=;"));
        assert!(cookie.contains("Max-Age=0"));
    }

    #[test]
    fn test_token_from_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; admin_token=abc.def.ghi; lang=en"),
        );
        assert_eq!(
            token_from_headers(&headers),
            Some("abc.def.ghi".to_string())
        );
    }

    #[test]
    fn test_missing_or_empty_token() {
        let headers = HeaderMap::new();
        assert_eq!(token_from_headers(&headers), None);

        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("admin_token="));
        assert_eq!(token_from_headers(&headers), None);

        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("other=value"));
        assert_eq!(token_from_headers(&headers), None);
    }
}
