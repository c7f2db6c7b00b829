//! Conversation Controller Module
//!
//! This module drives the ordering dialogue, including:
//! - The state enum and its transitions
//! - Fixed response texts and menu rendering
//! - The controller that dispatches each turn to the cart

pub mod controller;
pub mod messages;
pub mod state;

// Re-export commonly used types for convenience
pub use controller::{is_quit_command, Conversation};
pub use state::ConversationState;
