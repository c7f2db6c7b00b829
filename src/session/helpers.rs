//! Session Helpers
//!
//! Small, pure functions for session ids and the session cookie.

use axum::http::{header, HeaderMap, HeaderValue};
use uuid::Uuid;

/// Name of the cookie carrying the session id
pub const SESSION_COOKIE: &str = "kafe_session";

/// Creates a new random session id.
pub fn new_session_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Reads the session id from the `Cookie` header, if present.
pub fn session_from_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

/// Builds the `Set-Cookie` value for a session.
pub fn session_cookie(session_id: &str) -> Option<HeaderValue> {
    HeaderValue::from_str(&format!(
        "{}={}; Path=/; HttpOnly",
        SESSION_COOKIE, session_id
    ))
    .ok()
}
