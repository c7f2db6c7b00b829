//! Error types for the HTTP surface.
//!
//! The conversation core never fails; these only describe requests that
//! reference something the server does not have, plus the reply sent when a
//! handler panics.

use crate::cart::CartError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::any::Any;
use thiserror::Error;

/// Result type alias for HTTP handlers.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors returned to HTTP clients.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No session with this id
    #[error("Session not found: {0}")]
    SessionNotFound(String),

    /// A cart operation was rejected
    #[error(transparent)]
    Cart(#[from] CartError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::SessionNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Cart(CartError::LineNotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Cart(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, %status, "request rejected");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Text of a panic payload, for reporting a turn that blew up.
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "kesalahan tidak dikenal".to_string()
    }
}

/// 500 reply for a handler that panicked. The server keeps serving.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let reason = panic_message(payload.as_ref());
    tracing::error!(%reason, "handler panicked");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": format!("Terjadi kesalahan: {}", reason) })),
    )
        .into_response()
}
