//! Shopping Cart Formatting Helpers
//!
//! Small, pure functions used when rendering cart contents as text.

use super::models::OrderLine;
use crate::menu::Rupiah;

/// Formats an amount the way the counter prints it.
///
/// Example output: `"Rp 1,250,000"`.
pub fn format_rupiah(amount: Rupiah) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("Rp {}", grouped)
}

/// Produces a human-readable one-line summary for a list of order lines.
///
/// Example output: `"2x Cappuccino, 1x Sandwich Club"`.
pub fn format_item_summary(lines: &[OrderLine]) -> String {
    lines
        .iter()
        .map(|line| format!("{}x {}", line.quantity, line.item.name))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders the itemized receipt block for a non-empty cart.
pub fn render_summary(lines: &[OrderLine], total: Rupiah) -> String {
    let mut summary = String::from("📋 RINGKASAN PESANAN:\n");
    summary.push_str(&"=".repeat(30));
    summary.push('\n');

    for (i, line) in lines.iter().enumerate() {
        summary.push_str(&format!("{}. {} x{}\n", i + 1, line.item.name, line.quantity));
        summary.push_str(&format!("   Harga: {}\n", format_rupiah(line.item.price)));

        if !line.modifiers.is_empty() {
            summary.push_str(&format!("   Modifikasi: {}\n", line.modifiers.join(", ")));
        }

        if !line.note.is_empty() {
            summary.push_str(&format!("   Catatan: {}\n", line.note));
        }

        summary.push_str(&format!("   Subtotal: {}\n", format_rupiah(line.subtotal())));
        summary.push_str(&"-".repeat(25));
        summary.push('\n');
    }

    summary.push_str(&format!("\n💰 TOTAL: {}", format_rupiah(total)));
    summary
}
