//! Shopping Cart Domain Models
//!
//! This module contains all data structures related to an in-progress order
//! and the outcomes of confirming or placing it.

use crate::menu::{MenuItem, Rupiah};
use serde::Serialize;
use thiserror::Error;

// =============================================================================
// Cart Domain Models
// =============================================================================

/// Represents one line of the cart
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OrderLine {
    /// The ordered menu item
    pub item: MenuItem,

    /// Always at least 1
    pub quantity: u32,

    /// Customization tags, in extraction order
    pub modifiers: Vec<String>,

    /// Free-text special request
    pub note: String,
}

impl OrderLine {
    /// Lines merge when they order the same thing the same way
    pub fn is_equivalent(&self, item_id: &str, modifiers: &[String], note: &str) -> bool {
        self.item.id == item_id && self.modifiers == modifiers && self.note == note
    }

    pub fn subtotal(&self) -> Rupiah {
        self.item.price * Rupiah::from(self.quantity)
    }
}

/// Result of a successful `Cart::confirm`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Confirmation {
    /// Rendered cart summary
    pub summary: String,

    /// Grand total of the cart
    pub total: Rupiah,

    /// Number of distinct lines
    pub line_count: usize,
}

/// Result of a successful `Cart::place`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    /// Identifier issued for this order (e.g. `ORD-1001`)
    pub order_id: String,

    /// Name the order is called out under
    pub customer_name: String,

    /// Amount charged
    pub total: Rupiah,

    /// Preparation estimate shown to the customer
    pub estimated_time: String,

    /// One-line success message
    pub message: String,
}

/// Reasons a cart operation could not be carried out
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CartError {
    /// Confirming a cart without lines
    #[error("Pesanan masih kosong")]
    Empty,

    /// Placing a cart without lines
    #[error("Tidak ada pesanan untuk diproses")]
    NothingToPlace,

    /// Removing a line index that does not exist
    #[error("Item tidak ditemukan dalam pesanan")]
    LineNotFound(usize),
}
