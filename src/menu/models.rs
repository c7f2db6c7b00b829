//! Menu Domain Models
//!
//! This module contains all data structures describing what the café sells.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whole Rupiah. The menu has no fractional prices.
pub type Rupiah = u64;

// =============================================================================
// Menu Domain Models
// =============================================================================

/// Menu section an item is listed under
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Kopi,
    Teh,
    Dingin,
    Makanan,
    Snack,
}

impl Category {
    /// Heading used when the menu is rendered as text
    pub fn heading(self) -> &'static str {
        match self {
            Category::Kopi => "☕ KOPI",
            Category::Teh => "🍵 TEH",
            Category::Dingin => "🧊 MINUMAN DINGIN",
            Category::Makanan => "🍽️ MAKANAN",
            Category::Snack => "🍪 SNACK",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Kopi => "kopi",
            Category::Teh => "teh",
            Category::Dingin => "dingin",
            Category::Makanan => "makanan",
            Category::Snack => "snack",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents a purchasable item on the menu
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MenuItem {
    /// Unique key of the item
    pub id: String,

    /// Display name
    pub name: String,

    /// Unit price
    pub price: Rupiah,

    /// Section of the menu
    pub category: Category,

    /// Short description shown under the name
    pub description: String,

    /// Unavailable items are hidden from listings and matching
    pub available: bool,
}

impl MenuItem {
    pub fn new(
        id: &str,
        name: &str,
        price: Rupiah,
        category: Category,
        description: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            price,
            category,
            description: description.to_string(),
            available: true,
        }
    }
}

/// A family of customizations and the tags it allows
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ModifierFamily {
    /// Family name (e.g. `susu`)
    pub name: &'static str,

    /// Tags that may be attached to an order line
    pub options: &'static [&'static str],
}

/// Customizations offered at the counter
pub const MODIFIER_FAMILIES: &[ModifierFamily] = &[
    ModifierFamily {
        name: "susu",
        options: &["soy", "almond", "oat", "regular"],
    },
    ModifierFamily {
        name: "gula",
        options: &["tanpa_gula", "gula_sedikit", "gula_normal", "extra_manis"],
    },
    ModifierFamily {
        name: "ukuran",
        options: &["small", "medium", "large"],
    },
    ModifierFamily {
        name: "suhu",
        options: &["panas", "dingin", "es"],
    },
    ModifierFamily {
        name: "extra",
        options: &["extra_shot", "decaf", "extra_foam", "no_foam"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_serializes_lowercase() {
        let json = serde_json::to_string(&Category::Makanan).unwrap();
        assert_eq!(json, "\"makanan\"");
        assert_eq!(Category::Dingin.to_string(), "dingin");
    }

    #[test]
    fn new_items_start_available() {
        let item = MenuItem::new("donut", "Glazed Donut", 12000, Category::Snack, "");
        assert!(item.available);
    }
}
