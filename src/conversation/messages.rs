//! Response texts
//!
//! Everything the assistant says lives here so the controller only decides
//! *which* text to send.

use crate::cart::helpers::format_rupiah;
use crate::cart::Placement;
use crate::menu::{Catalog, MenuItem};

pub const WELCOME: &str = "☕ Selamat datang di Kafe Digital! ☕

Saya adalah asisten virtual Anda untuk membantu pemesanan.
Ketik 'menu' untuk melihat daftar menu atau langsung sebutkan minuman/makanan yang Anda inginkan.
Ketik 'quit' untuk keluar.

Ada yang bisa saya bantu hari ini?";

pub const FAREWELL: &str = "Terima kasih telah menggunakan layanan Kafe Digital! Sampai jumpa! 👋";

pub const CART_CLEARED: &str = "✅ Pesanan telah dibersihkan. Silakan mulai memesan lagi!";

pub const FOLLOW_UP: &str =
    "💬 Ada lagi yang ingin ditambahkan? Atau ketik 'konfirmasi' untuk melanjutkan pesanan.";

pub const CONFIRM_PROMPT: &str = "❓ Apakah pesanan sudah benar? (ya/tidak)
Jika ya, silakan berikan nama Anda untuk pesanan.";

pub const EDIT_ORDER: &str =
    "Baik, Anda bisa mengubah pesanan. Apa yang ingin ditambah atau diubah?";

pub const CONFIRM_REPROMPT: &str =
    "Mohon konfirmasi dengan 'ya' untuk melanjutkan atau 'tidak' untuk mengubah pesanan.";

pub const ITEM_NOT_FOUND: &str = "Maaf, saya tidak menemukan item yang Anda maksud. Ketik 'menu' untuk melihat semua pilihan yang tersedia.";

pub const HUMAN_THANKS: &str = "Terima kasih atas responnya!";

pub const START_AGAIN: &str = "Maaf, terjadi kesalahan sistem. Silakan mulai lagi.";

/// Full menu, one block per category
pub fn render_menu(catalog: &Catalog) -> String {
    let mut text = String::from("📜 MENU KAFE DIGITAL 📜\n");
    text.push_str(&"=".repeat(40));
    text.push_str("\n\n");

    for (category, items) in catalog.grouped() {
        text.push_str(category.heading());
        text.push('\n');
        text.push_str(&"-".repeat(25));
        text.push('\n');
        for item in items {
            text.push_str(&format!("• {} - {}\n", item.name, format_rupiah(item.price)));
            text.push_str(&format!("  {}\n\n", item.description));
        }
        text.push('\n');
    }

    text.push_str("💡 Tips: Sebutkan nama minuman/makanan yang Anda inginkan!\n");
    text.push_str("Contoh: 'Saya mau 2 cappuccino dan 1 sandwich'");
    text
}

/// Reply when nothing in the utterance matched the menu
pub fn render_not_found(suggestions: &[&MenuItem]) -> String {
    if suggestions.is_empty() {
        return ITEM_NOT_FOUND.to_string();
    }

    let list = suggestions
        .iter()
        .map(|item| format!("• {}", item.name))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "Maaf, item tidak ditemukan. Mungkin maksud Anda:\n{}\n\nAtau ketik 'menu' untuk melihat semua pilihan.",
        list
    )
}

/// Receipt shown once an order is placed
pub fn render_receipt(placement: &Placement) -> String {
    format!(
        "🎉 PESANAN BERHASIL! 🎉

📋 Detail Pesanan:
• ID Pesanan: {}
• Nama: {}
• Total: {}
• Estimasi waktu: {}

✅ Pesanan Anda sedang diproses!
Silakan menunggu di meja Anda atau ambil di counter.

Terima kasih telah memesan di Kafe Digital!
Ketik pesan apapun untuk memulai pesanan baru.",
        placement.order_id,
        placement.customer_name,
        format_rupiah(placement.total),
        placement.estimated_time
    )
}
