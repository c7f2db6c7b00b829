//! Menu Catalog Domain Module
//!
//! This module contains the café's static menu, including:
//! - Domain models (MenuItem, Category, modifier families)
//! - The catalog with lookups by id, category and text query

pub mod catalog;
pub mod models;

// Re-export commonly used types for convenience
pub use catalog::Catalog;
pub use models::{Category, MenuItem, Rupiah};
