//! Keyword-modifier tables for search-intent classification
//!
//! Each intent carries a fixed modifier list compiled once into whole-word,
//! case-insensitive matchers. The original modifier string is kept next to
//! its compiled regex so match reporting never has to reverse-engineer the
//! pattern text.

use crate::core::SearchIntent;
use once_cell::sync::Lazy;
use regex::Regex;

const INFORMATIONAL_MODIFIERS: &[&str] = &[
    "how",
    "what",
    "why",
    "when",
    "where",
    "who",
    "guide",
    "tutorial",
    "tips",
    "learn",
    "explain",
    "definition",
    "meaning",
    "examples",
    "benefits",
    "difference between",
    "vs",
    "comparison",
];

const NAVIGATIONAL_MODIFIERS: &[&str] = &[
    "login",
    "sign in",
    "official site",
    "website",
    "homepage",
    "portal",
    "dashboard",
    "account",
];

const COMMERCIAL_MODIFIERS: &[&str] = &[
    "best",
    "top",
    "review",
    "reviews",
    "comparison",
    "compare",
    "vs",
    "versus",
    "alternative",
    "alternatives",
    "cheapest",
    "affordable",
    "recommended",
    "rating",
];

const TRANSACTIONAL_MODIFIERS: &[&str] = &[
    "buy",
    "purchase",
    "order",
    "shop",
    "price",
    "cost",
    "cheap",
    "deal",
    "discount",
    "coupon",
    "subscribe",
    "download",
    "get",
    "hire",
    "book",
    "reserve",
    "appointment",
    "quote",
];

/// A modifier keyword with its compiled whole-word matcher.
pub struct Modifier {
    pub text: &'static str,
    matcher: Regex,
}

impl Modifier {
    fn compile(text: &'static str) -> Self {
        // Modifier tables are static and escaped, so compilation cannot fail.
        let matcher = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(text)))
            .unwrap_or_else(|e| panic!("invalid modifier pattern for {text:?}: {e}"));
        Self { text, matcher }
    }

    pub fn matches(&self, query: &str) -> bool {
        self.matcher.is_match(query)
    }
}

static MODIFIER_TABLES: Lazy<[(SearchIntent, Vec<Modifier>); 4]> = Lazy::new(|| {
    let compile =
        |mods: &[&'static str]| mods.iter().map(|&m| Modifier::compile(m)).collect::<Vec<_>>();
    [
        (SearchIntent::Informational, compile(INFORMATIONAL_MODIFIERS)),
        (SearchIntent::Navigational, compile(NAVIGATIONAL_MODIFIERS)),
        (
            SearchIntent::CommercialInvestigation,
            compile(COMMERCIAL_MODIFIERS),
        ),
        (SearchIntent::Transactional, compile(TRANSACTIONAL_MODIFIERS)),
    ]
});

/// Modifier table for one intent, in table order.
pub fn modifiers_for(intent: SearchIntent) -> &'static [Modifier] {
    let idx = SearchIntent::ALL
        .iter()
        .position(|&i| i == intent)
        .unwrap_or(0);
    &MODIFIER_TABLES[idx].1
}

/// All (intent, table) pairs in tie-break order.
pub fn modifier_tables() -> impl Iterator<Item = (SearchIntent, &'static [Modifier])> {
    MODIFIER_TABLES
        .iter()
        .map(|(intent, mods)| (*intent, mods.as_slice()))
}
