//! Shopping Cart Domain Module
//!
//! This module contains all order-accumulation logic, including:
//! - Domain models (OrderLine, confirmation and placement outcomes, errors)
//! - The Cart itself (add, remove, clear, summary, confirm, place)
//! - Formatting helpers (Rupiah amounts, summaries)

pub mod helpers;
pub mod models;
pub mod order;

// Re-export commonly used types for convenience
pub use models::{CartError, Confirmation, OrderLine, Placement};
pub use order::Cart;
