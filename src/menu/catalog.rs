//! Menu Catalog
//!
//! The catalog is populated once at startup and never mutated afterwards.
//! Listings only return available items and preserve definition order.

use super::models::{Category, MenuItem, ModifierFamily, MODIFIER_FAMILIES};

/// Immutable collection of everything the café sells
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<MenuItem>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(default_menu())
    }
}

impl Catalog {
    /// Builds a catalog from items in the order they should be listed
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// Exact lookup by id, regardless of availability
    pub fn by_id(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Available items of one category
    pub fn by_category(&self, category: Category) -> Vec<&MenuItem> {
        self.items
            .iter()
            .filter(|item| item.category == category && item.available)
            .collect()
    }

    /// All available items
    pub fn all(&self) -> Vec<&MenuItem> {
        self.items.iter().filter(|item| item.available).collect()
    }

    /// Items whose name or description contains `query`, ignoring case
    pub fn search(&self, query: &str) -> Vec<&MenuItem> {
        let query = query.to_lowercase();
        self.items
            .iter()
            .filter(|item| {
                item.name.to_lowercase().contains(&query)
                    || item.description.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Modifier families the counter accepts
    pub fn modifier_options(&self) -> &'static [ModifierFamily] {
        MODIFIER_FAMILIES
    }

    /// Available items grouped by category, in order of first appearance
    pub fn grouped(&self) -> Vec<(Category, Vec<&MenuItem>)> {
        let mut groups: Vec<(Category, Vec<&MenuItem>)> = Vec::new();
        for item in self.all() {
            match groups.iter_mut().find(|(category, _)| *category == item.category) {
                Some((_, items)) => items.push(item),
                None => groups.push((item.category, vec![item])),
            }
        }
        groups
    }
}

/// The café's standing menu
fn default_menu() -> Vec<MenuItem> {
    use Category::*;

    vec![
        // Kopi
        MenuItem::new("espresso", "Espresso", 15000, Kopi, "Kopi hitam pekat dengan rasa kuat"),
        MenuItem::new("americano", "Americano", 18000, Kopi, "Espresso dengan air panas"),
        MenuItem::new("cappuccino", "Cappuccino", 25000, Kopi, "Espresso dengan susu berbusa"),
        MenuItem::new("latte", "Caffe Latte", 28000, Kopi, "Espresso dengan susu steamed"),
        MenuItem::new("macchiato", "Macchiato", 26000, Kopi, "Espresso dengan sedikit susu berbusa"),
        MenuItem::new("mocha", "Mocha", 32000, Kopi, "Latte dengan sirup coklat"),
        MenuItem::new("kopi_susu", "Kopi Susu Tradisional", 20000, Kopi, "Kopi robusta dengan susu kental manis"),
        // Teh
        MenuItem::new("teh_tarik", "Teh Tarik", 15000, Teh, "Teh dengan susu yang ditarik"),
        MenuItem::new("teh_hijau", "Teh Hijau", 12000, Teh, "Teh hijau segar"),
        MenuItem::new("thai_tea", "Thai Tea", 18000, Teh, "Teh Thailand dengan susu"),
        MenuItem::new("es_teh", "Es Teh Manis", 10000, Teh, "Teh manis dingin"),
        // Minuman dingin
        MenuItem::new("es_kopi_susu", "Es Kopi Susu", 22000, Dingin, "Kopi susu dingin dengan es"),
        MenuItem::new("iced_latte", "Iced Latte", 30000, Dingin, "Latte dingin dengan es"),
        MenuItem::new("cold_brew", "Cold Brew", 25000, Dingin, "Kopi seduh dingin 12 jam"),
        MenuItem::new("frappuccino", "Frappuccino", 35000, Dingin, "Minuman kopi blended dengan es"),
        // Makanan
        MenuItem::new("croissant", "Croissant", 18000, Makanan, "Roti pastry Prancis"),
        MenuItem::new("sandwich", "Sandwich Club", 35000, Makanan, "Sandwich dengan daging dan sayuran"),
        MenuItem::new("pasta", "Pasta Carbonara", 45000, Makanan, "Pasta dengan saus krim dan bacon"),
        MenuItem::new("nasi_goreng", "Nasi Goreng Spesial", 28000, Makanan, "Nasi goreng dengan telur dan ayam"),
        MenuItem::new("cake", "Slice Cake Coklat", 22000, Makanan, "Kue coklat lembut"),
        // Snack
        MenuItem::new("cookies", "Cookies Choco Chip", 15000, Snack, "Kue kering coklat chip"),
        MenuItem::new("muffin", "Blueberry Muffin", 20000, Snack, "Muffin dengan blueberry"),
        MenuItem::new("donut", "Glazed Donut", 12000, Snack, "Donut glazur manis"),
    ]
}
