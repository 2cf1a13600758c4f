//! Search-intent classification
//!
//! Maps a search query to one of four intent categories by counting
//! keyword-modifier hits, falling back to word-shape heuristics when no
//! modifier matches.

pub mod modifiers;
pub mod recommendations;

use crate::core::{IntentMap, SearchIntent};
use serde::{Deserialize, Serialize};

pub use recommendations::{recommendations_for, ContentRecommendation};

/// Classification result for a single query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentResult {
    pub query: String,
    pub primary_intent: SearchIntent,
    /// Confidence in [0, 1], rounded to 2 decimals.
    pub confidence: f64,
    pub intent_scores: IntentMap<usize>,
    /// Modifiers that matched for the primary intent, in table order.
    pub matched_modifiers: Vec<String>,
    pub recommendations: ContentRecommendation,
}

/// Intent distribution statistics over a query set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentDistribution {
    pub total_queries: usize,
    pub distribution: IntentMap<usize>,
    /// Share of each intent, rounded to 1 decimal.
    pub percentages: IntentMap<f64>,
    pub dominant_intent: SearchIntent,
}

/// Classifies search queries by intent.
#[derive(Debug, Default)]
pub struct IntentClassifier;

impl IntentClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify a single query.
    pub fn classify(&self, query: &str) -> IntentResult {
        let normalized = query.to_lowercase().trim().to_string();

        let mut intent_scores = IntentMap::<usize>::default();
        let mut matched = IntentMap::<Vec<String>>::default();

        for (intent, table) in modifiers::modifier_tables() {
            let hits: Vec<String> = table
                .iter()
                .filter(|m| m.matches(&normalized))
                .map(|m| m.text.to_string())
                .collect();
            *intent_scores.get_mut(intent) = hits.len();
            *matched.get_mut(intent) = hits;
        }

        let total: usize = intent_scores.iter().map(|(_, &c)| c).sum();

        let (primary_intent, confidence) = if total == 0 {
            fallback_heuristics(&normalized)
        } else {
            let primary = first_max(|i| *intent_scores.get(i));
            let max_count = *intent_scores.get(primary);
            (primary, max_count as f64 / total as f64)
        };

        IntentResult {
            query: query.to_string(),
            primary_intent,
            confidence: round_to(confidence, 2),
            matched_modifiers: std::mem::take(matched.get_mut(primary_intent)),
            intent_scores,
            recommendations: recommendations_for(primary_intent),
        }
    }

    /// Classify a batch of queries; output order matches input order.
    pub fn classify_batch(&self, queries: &[String]) -> Vec<IntentResult> {
        queries.iter().map(|q| self.classify(q)).collect()
    }

    /// Summarize intent distribution across a query set.
    pub fn distribution(&self, queries: &[String]) -> IntentDistribution {
        let results = self.classify_batch(queries);

        let mut distribution = IntentMap::<usize>::default();
        for result in &results {
            *distribution.get_mut(result.primary_intent) += 1;
        }

        let total = queries.len();
        let mut percentages = IntentMap::<f64>::default();
        if total > 0 {
            for intent in SearchIntent::ALL {
                let share = *distribution.get(intent) as f64 / total as f64 * 100.0;
                *percentages.get_mut(intent) = round_to(share, 1);
            }
        }

        let dominant_intent = first_max(|i| *distribution.get(i));

        IntentDistribution {
            total_queries: total,
            distribution,
            percentages,
            dominant_intent,
        }
    }
}

/// First intent in declaration order carrying the maximum count. Ties go
/// to the earlier variant, so the scan only advances on a strict increase.
fn first_max(count: impl Fn(SearchIntent) -> usize) -> SearchIntent {
    let mut best = SearchIntent::Informational;
    let mut best_count = count(best);
    for intent in SearchIntent::ALL {
        let c = count(intent);
        if c > best_count {
            best = intent;
            best_count = c;
        }
    }
    best
}

/// Heuristic chain for queries with no modifier hits, applied in order.
fn fallback_heuristics(query: &str) -> (SearchIntent, f64) {
    // Question openers suggest informational.
    const OPENERS: [&str; 5] = ["how ", "what ", "why ", "when ", "where "];
    if OPENERS.iter().any(|o| query.starts_with(o)) {
        return (SearchIntent::Informational, 0.8);
    }

    // Short queries with no question markers read like brand lookups.
    let word_count = query.split_whitespace().count();
    if word_count <= 2 && !query.contains('?') && !query.contains("how") && !query.contains("what")
    {
        return (SearchIntent::Navigational, 0.6);
    }

    // Longer queries with no modifiers are most likely informational.
    if word_count >= 3 {
        return (SearchIntent::Informational, 0.5);
    }

    (SearchIntent::Informational, 0.4)
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(query: &str) -> IntentResult {
        IntentClassifier::new().classify(query)
    }

    #[test]
    fn transactional_query_matches_modifiers() {
        let result = classify("buy espresso machine");
        assert_eq!(result.primary_intent, SearchIntent::Transactional);
        assert_eq!(result.matched_modifiers, vec!["buy".to_string()]);
        assert_eq!(*result.intent_scores.get(SearchIntent::Transactional), 1);
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn informational_wins_ties_by_declaration_order() {
        // "vs" appears in both the informational and commercial tables; the
        // tie must go to informational.
        let result = classify("vs");
        assert_eq!(
            *result.intent_scores.get(SearchIntent::Informational),
            *result.intent_scores.get(SearchIntent::CommercialInvestigation)
        );
        assert_eq!(result.primary_intent, SearchIntent::Informational);
    }

    #[test]
    fn confidence_is_share_of_total_hits() {
        // "best coffee maker comparison": commercial hits "best" and
        // "comparison", informational hits "comparison".
        let result = classify("best coffee maker comparison");
        assert_eq!(
            result.primary_intent,
            SearchIntent::CommercialInvestigation
        );
        let total: usize = result.intent_scores.iter().map(|(_, &c)| c).sum();
        let max = *result.intent_scores.get(result.primary_intent);
        assert_eq!(result.confidence, round_to(max as f64 / total as f64, 2));
        assert!(result.confidence > 0.0 && result.confidence <= 1.0);
    }

    #[test]
    fn question_openers_are_caught_by_the_modifier_table() {
        // Every opener word in the heuristic chain is also an informational
        // modifier, so opener queries never reach the fallback and score a
        // full-confidence table hit instead.
        let result = classify("when does autumn start");
        assert_eq!(result.primary_intent, SearchIntent::Informational);
        assert_eq!(result.confidence, 1.0);
        assert_eq!(result.matched_modifiers, vec!["when".to_string()]);
    }

    #[test]
    fn short_brandlike_query_falls_back_to_navigational() {
        let result = classify("starbucks");
        assert_eq!(result.primary_intent, SearchIntent::Navigational);
        assert_eq!(result.confidence, 0.6);
    }

    #[test]
    fn long_modifierless_query_falls_back_to_informational() {
        let result = classify("coffee bean roasting temperature ranges");
        assert_eq!(result.primary_intent, SearchIntent::Informational);
        assert_eq!(result.confidence, 0.5);
    }

    #[test]
    fn question_mark_blocks_navigational_fallback() {
        let result = classify("starbucks?");
        assert_eq!(result.primary_intent, SearchIntent::Informational);
        assert_eq!(result.confidence, 0.4);
    }

    #[test]
    fn batch_preserves_input_order() {
        let queries = vec![
            "buy beans".to_string(),
            "how to roast coffee".to_string(),
            "acme login".to_string(),
        ];
        let results = IntentClassifier::new().classify_batch(&queries);
        assert_eq!(results.len(), 3);
        for (result, query) in results.iter().zip(&queries) {
            assert_eq!(&result.query, query);
        }
        assert_eq!(results[0].primary_intent, SearchIntent::Transactional);
        assert_eq!(results[2].primary_intent, SearchIntent::Navigational);
    }

    #[test]
    fn distribution_counts_and_percentages() {
        let queries = vec![
            "how to make coffee".to_string(),
            "what is seo".to_string(),
            "buy espresso machine".to_string(),
            "acme login".to_string(),
        ];
        let dist = IntentClassifier::new().distribution(&queries);
        assert_eq!(dist.total_queries, 4);
        assert_eq!(*dist.distribution.get(SearchIntent::Informational), 2);
        assert_eq!(*dist.distribution.get(SearchIntent::Transactional), 1);
        assert_eq!(*dist.distribution.get(SearchIntent::Navigational), 1);
        assert_eq!(*dist.percentages.get(SearchIntent::Informational), 50.0);
        assert_eq!(dist.dominant_intent, SearchIntent::Informational);
    }

    #[test]
    fn empty_distribution_degrades_gracefully() {
        let dist = IntentClassifier::new().distribution(&[]);
        assert_eq!(dist.total_queries, 0);
        assert_eq!(*dist.percentages.get(SearchIntent::Informational), 0.0);
        assert_eq!(dist.dominant_intent, SearchIntent::Informational);
    }

    #[test]
    fn matched_modifiers_follow_table_order() {
        let result = classify("best top rating review");
        assert_eq!(
            result.primary_intent,
            SearchIntent::CommercialInvestigation
        );
        assert_eq!(
            result.matched_modifiers,
            vec![
                "best".to_string(),
                "top".to_string(),
                "review".to_string(),
                "rating".to_string(),
            ]
        );
    }
}
