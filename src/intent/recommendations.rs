//! Static per-intent content recommendation bundles
//!
//! Returned verbatim with every classification result; nothing here is
//! computed from the query.

use crate::core::SearchIntent;
use serde::{Deserialize, Serialize};

/// Content-format advice attached to a classified intent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRecommendation {
    pub content_type: String,
    pub format: String,
    pub elements: Vec<String>,
    pub cta: String,
}

impl ContentRecommendation {
    fn new(content_type: &str, format: &str, elements: &[&str], cta: &str) -> Self {
        Self {
            content_type: content_type.to_string(),
            format: format.to_string(),
            elements: elements.iter().map(|e| e.to_string()).collect(),
            cta: cta.to_string(),
        }
    }
}

/// Look up the static recommendation bundle for an intent.
pub fn recommendations_for(intent: SearchIntent) -> ContentRecommendation {
    match intent {
        SearchIntent::Informational => ContentRecommendation::new(
            "Blog post, guide, tutorial, how-to article",
            "Long-form content (1,500-3,000 words)",
            &[
                "Clear headings and subheadings",
                "Step-by-step instructions",
                "Examples and visuals",
                "FAQ section",
                "Related articles",
            ],
            "Subscribe to newsletter, download guide, read related content",
        ),
        SearchIntent::Navigational => ContentRecommendation::new(
            "Homepage, brand page, login page",
            "Clear navigation and branding",
            &[
                "Prominent brand name",
                "Clear navigation menu",
                "Search functionality",
                "Quick links to popular pages",
            ],
            "Sign up, login, explore products/services",
        ),
        SearchIntent::CommercialInvestigation => ContentRecommendation::new(
            "Comparison article, review, buyer's guide",
            "Structured comparison (1,500-2,500 words)",
            &[
                "Comparison tables",
                "Pros and cons lists",
                "Product specifications",
                "Expert opinions",
                "User reviews",
            ],
            "Read full review, compare products, get pricing",
        ),
        SearchIntent::Transactional => ContentRecommendation::new(
            "Product page, service page, pricing page",
            "Conversion-focused layout",
            &[
                "Clear product/service details",
                "Pricing information",
                "Trust signals (reviews, guarantees)",
                "Strong call-to-action",
                "Easy checkout process",
            ],
            "Buy now, add to cart, get quote, subscribe",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_intent_has_a_bundle() {
        for intent in SearchIntent::ALL {
            let rec = recommendations_for(intent);
            assert!(!rec.content_type.is_empty());
            assert!(!rec.elements.is_empty());
            assert!(!rec.cta.is_empty());
        }
    }

    #[test]
    fn transactional_bundle_is_conversion_focused() {
        let rec = recommendations_for(SearchIntent::Transactional);
        assert_eq!(rec.format, "Conversion-focused layout");
        assert!(rec.cta.starts_with("Buy now"));
    }
}
