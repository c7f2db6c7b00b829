//! Ordering Session Module
//!
//! This module serves many customers at once over HTTP, including:
//! - Request and response models
//! - Session id and cookie helpers
//! - Application state holding one conversation per session
//! - REST API handlers

pub mod handlers;
pub mod helpers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use state::{AppState, SharedState};
