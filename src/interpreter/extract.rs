//! Item, quantity and modifier extraction

use super::rules::{contains_any, MODIFIER_FAMILIES, SUGGESTIONS_PER_CATEGORY, SUGGESTION_RULES};
use crate::menu::{Catalog, MenuItem};
use regex::Regex;
use std::sync::LazyLock;

static NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").expect("valid regex"));

/// One item the customer asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestedItem<'a> {
    pub item: &'a MenuItem,
    pub quantity: u32,
    pub modifiers: Vec<String>,
}

/// Everything recognised in a single utterance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Interpretation<'a> {
    /// Matched items, in catalog order
    pub items: Vec<RequestedItem<'a>>,

    /// Filled only when `items` is empty
    pub suggestions: Vec<&'a MenuItem>,
}

impl Interpretation<'_> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Reads an utterance against the catalog.
///
/// Matching is deliberately loose: an item is found when its full name occurs in
/// the text, or when any word of the text occurs inside its name. Short words can
/// therefore pull in unrelated items ("es" matches "Espresso").
pub fn interpret<'a>(catalog: &'a Catalog, text: &str) -> Interpretation<'a> {
    let lower = text.to_lowercase();
    let words: Vec<&str> = lower.split_whitespace().collect();
    let quantities = extract_quantities(text);

    let found: Vec<&MenuItem> = catalog
        .all()
        .into_iter()
        .filter(|item| {
            let name = item.name.to_lowercase();
            lower.contains(&name) || words.iter().any(|word| name.contains(word))
        })
        .collect();

    if found.is_empty() {
        let suggestions = suggest(catalog, &lower);
        tracing::debug!(suggestions = suggestions.len(), "no menu items recognised");
        return Interpretation {
            items: Vec::new(),
            suggestions,
        };
    }

    let modifiers = extract_modifiers(&lower);
    let items = found
        .into_iter()
        .enumerate()
        .map(|(i, item)| RequestedItem {
            item,
            // The n-th number belongs to the n-th item; the first item also
            // covers the case of a single number anywhere in the text.
            quantity: quantities.get(i).copied().unwrap_or(1),
            modifiers: modifiers.clone(),
        })
        .collect::<Vec<_>>();

    tracing::debug!(
        items = items.len(),
        modifiers = ?modifiers,
        "interpreted order request"
    );

    Interpretation {
        items,
        suggestions: Vec::new(),
    }
}

/// Every run of ASCII digits in the text, left to right.
///
/// Zero and values too large for a quantity are read as 1. Digits from other
/// scripts are not numbers here.
pub fn extract_quantities(text: &str) -> Vec<u32> {
    NUMBER
        .find_iter(text)
        .map(|m| m.as_str().parse::<u32>().ok().filter(|n| *n > 0).unwrap_or(1))
        .collect()
}

/// Modifier tags for the whole utterance: always one size, then optional milk,
/// sugar and temperature tags.
pub fn extract_modifiers(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    MODIFIER_FAMILIES
        .iter()
        .filter_map(|family| family.evaluate(&lower))
        .map(str::to_string)
        .collect()
}

fn suggest<'a>(catalog: &'a Catalog, lower: &str) -> Vec<&'a MenuItem> {
    SUGGESTION_RULES
        .iter()
        .filter(|(keywords, _)| contains_any(lower, keywords))
        .flat_map(|(_, category)| {
            catalog
                .by_category(*category)
                .into_iter()
                .take(SUGGESTIONS_PER_CATEGORY)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids<'a>(interpretation: &Interpretation<'a>) -> Vec<&'a str> {
        interpretation
            .items
            .iter()
            .map(|requested| requested.item.id.as_str())
            .collect()
    }

    #[test]
    fn quantities_follow_item_order() {
        let catalog = Catalog::default();
        let result = interpret(&catalog, "Saya mau 2 cappuccino dan 1 sandwich");

        assert_eq!(ids(&result), ["cappuccino", "sandwich"]);
        assert_eq!(result.items[0].quantity, 2);
        assert_eq!(result.items[1].quantity, 1);
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn missing_numbers_default_to_one() {
        let catalog = Catalog::default();
        let result = interpret(&catalog, "3 croissant dan muffin");

        assert_eq!(ids(&result), ["croissant", "muffin"]);
        assert_eq!(result.items[0].quantity, 3);
        assert_eq!(result.items[1].quantity, 1);
    }

    #[test]
    fn full_name_match_is_case_insensitive() {
        let catalog = Catalog::default();
        let result = interpret(&catalog, "SATU MOCHA");
        assert_eq!(ids(&result), ["mocha"]);
        assert_eq!(result.items[0].quantity, 1);
    }

    #[test]
    fn short_words_over_match() {
        let catalog = Catalog::default();
        let result = interpret(&catalog, "es");
        let matched = ids(&result);

        assert!(matched.contains(&"espresso"));
        assert!(matched.contains(&"es_teh"));
        assert!(matched.contains(&"es_kopi_susu"));
        assert!(matched.contains(&"cookies"));
    }

    #[test]
    fn modifiers_are_shared_by_every_item() {
        let catalog = Catalog::default();
        let result = interpret(&catalog, "1 mocha large oat tanpa gula panas dan 1 croissant");

        assert_eq!(ids(&result), ["mocha", "croissant"]);
        for requested in &result.items {
            assert_eq!(
                requested.modifiers,
                ["large", "oat", "tanpa_gula", "panas"]
            );
        }
    }

    #[test]
    fn size_tag_is_always_present() {
        assert_eq!(extract_modifiers("croissant"), ["medium"]);
        assert_eq!(extract_modifiers("Mocha KECIL iced"), ["small", "dingin"]);
        assert_eq!(extract_modifiers("jumbo soy very sweet"), ["large", "soy", "extra_manis"]);
    }

    #[test]
    fn quantities_are_positive() {
        assert_eq!(extract_quantities("0 latte, 12 donut"), [1, 12]);
        assert_eq!(extract_quantities("99999999999 latte"), [1]);
        assert!(extract_quantities("latte").is_empty());
        assert!(extract_quantities("٢ latte").is_empty());
        assert_eq!(extract_quantities("٣ donut, 2 latte"), [2]);
    }

    #[test]
    fn suggestions_by_keyword_family() {
        let catalog = Catalog::default();

        let coffee = interpret(&catalog, "ada coffee?");
        assert!(coffee.is_empty());
        let names: Vec<_> = coffee.suggestions.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(names, ["espresso", "americano", "cappuccino"]);

        let food = interpret(&catalog, "mau food");
        assert_eq!(food.suggestions.len(), 3);
        assert_eq!(food.suggestions[0].id, "croissant");
    }

    #[test]
    fn no_match_and_no_keywords_gives_nothing() {
        let catalog = Catalog::default();
        let result = interpret(&catalog, "xyz");
        assert!(result.is_empty());
        assert!(result.suggestions.is_empty());
    }
}
