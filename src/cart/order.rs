//! The in-progress order of one customer
//!
//! The cart owns its lines and the running total. The total is recomputed after
//! every mutation and cannot be set from outside.

use super::helpers::{format_item_summary, render_summary};
use super::models::{CartError, Confirmation, OrderLine, Placement};
use crate::menu::{MenuItem, Rupiah};

/// Order ids are issued above this number; the first placement gets `ORD-1001`.
pub const ORDER_ID_BASE: u64 = 1000;

/// Preparation estimate quoted on every receipt
pub const ESTIMATED_TIME: &str = "15-20 menit";

/// Lines of one order plus the counter used to number placed orders
#[derive(Debug, Clone)]
pub struct Cart {
    lines: Vec<OrderLine>,
    total: Rupiah,
    customer_name: Option<String>,
    order_id: Option<String>,
    /// Last issued order number, incremented before use
    order_counter: u64,
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

impl Cart {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            total: 0,
            customer_name: None,
            order_id: None,
            order_counter: ORDER_ID_BASE,
        }
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn total(&self) -> Rupiah {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Name on the last placed order, kept until the next `add` or `clear`.
    pub fn customer_name(&self) -> Option<&str> {
        self.customer_name.as_deref()
    }

    /// Id of the last placed order, kept until the next `add` or `clear`.
    pub fn order_id(&self) -> Option<&str> {
        self.order_id.as_deref()
    }

    /// Adds `quantity` of `item`, merging into an equivalent line when one exists.
    ///
    /// A merged quantity saturates at `u32::MAX`.
    pub fn add(
        &mut self,
        item: &MenuItem,
        quantity: u32,
        modifiers: Vec<String>,
        note: &str,
    ) -> String {
        self.forget_placement();

        if let Some(existing) = self
            .lines
            .iter_mut()
            .find(|line| line.is_equivalent(&item.id, &modifiers, note))
        {
            existing.quantity = existing.quantity.saturating_add(quantity);
            let running = existing.quantity;
            self.recalculate_total();
            tracing::debug!(item = %item.id, quantity, running, "merged into existing line");
            return format!(
                "Ditambahkan {} {} ke pesanan (total: {})",
                quantity, item.name, running
            );
        }

        self.lines.push(OrderLine {
            item: item.clone(),
            quantity,
            modifiers,
            note: note.to_string(),
        });
        self.recalculate_total();
        tracing::debug!(item = %item.id, quantity, lines = self.lines.len(), "added new line");
        format!("Berhasil menambahkan {} {} ke pesanan", quantity, item.name)
    }

    /// Removes the line at zero-based `index`.
    pub fn remove(&mut self, index: usize) -> Result<String, CartError> {
        if index >= self.lines.len() {
            return Err(CartError::LineNotFound(index));
        }

        let removed = self.lines.remove(index);
        self.recalculate_total();
        tracing::debug!(item = %removed.item.id, index, "removed line");
        Ok(format!("Berhasil menghapus {} dari pesanan", removed.item.name))
    }

    /// Empties the cart. The order counter survives.
    pub fn clear(&mut self) -> String {
        self.reset();
        tracing::debug!("cart cleared");
        "Pesanan telah dibersihkan".to_string()
    }

    /// Itemized listing of the cart, or a notice that it is empty
    pub fn summary(&self) -> String {
        if self.lines.is_empty() {
            return CartError::Empty.to_string();
        }
        render_summary(&self.lines, self.total)
    }

    /// Snapshot of the cart for the customer to approve. Does not mutate.
    pub fn confirm(&self) -> Result<Confirmation, CartError> {
        if self.lines.is_empty() {
            return Err(CartError::Empty);
        }

        Ok(Confirmation {
            summary: self.summary(),
            total: self.total,
            line_count: self.lines.len(),
        })
    }

    /// Issues an order id for the current lines and empties the cart.
    ///
    /// The id and customer name stay readable until the next order begins.
    ///
    /// An empty cart is rejected without consuming an order number.
    pub fn place(&mut self, customer_name: &str) -> Result<Placement, CartError> {
        if self.lines.is_empty() {
            return Err(CartError::NothingToPlace);
        }

        self.order_counter += 1;
        let order_id = format!("ORD-{}", self.order_counter);

        let placement = Placement {
            order_id: order_id.clone(),
            customer_name: customer_name.to_string(),
            total: self.total,
            estimated_time: ESTIMATED_TIME.to_string(),
            message: format!("Pesanan berhasil! ID: {}", order_id),
        };

        tracing::info!(
            order_id = %placement.order_id,
            customer = %placement.customer_name,
            total = placement.total,
            items = %format_item_summary(&self.lines),
            "order placed"
        );

        self.lines.clear();
        self.total = 0;
        self.order_id = Some(placement.order_id.clone());
        self.customer_name = Some(placement.customer_name.clone());
        Ok(placement)
    }

    fn reset(&mut self) {
        self.lines.clear();
        self.total = 0;
        self.forget_placement();
    }

    fn forget_placement(&mut self) {
        self.customer_name = None;
        self.order_id = None;
    }

    fn recalculate_total(&mut self) {
        self.total = self.lines.iter().map(OrderLine::subtotal).sum();
    }
}
