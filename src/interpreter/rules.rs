//! Keyword rule tables
//!
//! Each modifier family is an ordered list of `(keywords, tag)` rules. Within a
//! family the first rule with a matching keyword wins; families are evaluated
//! independently of each other. Keywords match as substrings of lowercased text.

use crate::menu::Category;

/// One row of a rule table
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    pub keywords: &'static [&'static str],
    pub tag: &'static str,
}

/// An ordered rule table for one kind of customization
#[derive(Debug, Clone, Copy)]
pub struct RuleFamily {
    pub name: &'static str,
    pub rules: &'static [KeywordRule],
    /// Tag used when no rule matches
    pub fallback: Option<&'static str>,
}

impl RuleFamily {
    /// Tag selected for `text_lower`, if any
    pub fn evaluate(&self, text_lower: &str) -> Option<&'static str> {
        self.rules
            .iter()
            .find(|rule| contains_any(text_lower, rule.keywords))
            .map(|rule| rule.tag)
            .or(self.fallback)
    }
}

/// True when any keyword occurs anywhere in `text_lower`
pub fn contains_any(text_lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text_lower.contains(keyword))
}

pub const SIZE: RuleFamily = RuleFamily {
    name: "ukuran",
    rules: &[
        KeywordRule {
            keywords: &["large", "besar", "jumbo"],
            tag: "large",
        },
        KeywordRule {
            keywords: &["small", "kecil"],
            tag: "small",
        },
    ],
    fallback: Some("medium"),
};

pub const MILK: RuleFamily = RuleFamily {
    name: "susu",
    rules: &[
        KeywordRule {
            keywords: &["soy", "kedelai"],
            tag: "soy",
        },
        KeywordRule {
            keywords: &["almond"],
            tag: "almond",
        },
        KeywordRule {
            keywords: &["oat"],
            tag: "oat",
        },
    ],
    fallback: None,
};

pub const SUGAR: RuleFamily = RuleFamily {
    name: "gula",
    rules: &[
        KeywordRule {
            keywords: &["tanpa gula", "no sugar", "sugar free"],
            tag: "tanpa_gula",
        },
        KeywordRule {
            keywords: &["extra manis", "very sweet"],
            tag: "extra_manis",
        },
    ],
    fallback: None,
};

pub const TEMPERATURE: RuleFamily = RuleFamily {
    name: "suhu",
    rules: &[
        KeywordRule {
            keywords: &["es", "dingin", "cold", "iced"],
            tag: "dingin",
        },
        KeywordRule {
            keywords: &["panas", "hot"],
            tag: "panas",
        },
    ],
    fallback: None,
};

/// Families in the order their tags appear on a line
pub const MODIFIER_FAMILIES: &[RuleFamily] = &[SIZE, MILK, SUGAR, TEMPERATURE];

/// Keywords that trigger suggestions from a category when nothing matched
pub const SUGGESTION_RULES: &[(&[&str], Category)] = &[
    (&["kopi", "coffee"], Category::Kopi),
    (&["teh", "tea"], Category::Teh),
    (&["makanan", "makan", "food"], Category::Makanan),
];

/// Suggestions offered per matching category
pub const SUGGESTIONS_PER_CATEGORY: usize = 3;
