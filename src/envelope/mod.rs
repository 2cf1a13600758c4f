//! Request envelope decoding and dispatch
//!
//! The process boundary speaks JSON: a request object tagged with `module`
//! and `action` selects an engine call, and the engine result is encoded
//! back to JSON. Any failure produces a single `{"error": ...}` object
//! instead of partial output.

use crate::cluster::{ClusterPlanner, ExportFormat, PillarPage};
use crate::core::{Error, Result};
use crate::intent::IntentClassifier;
use crate::quality::{ContentMetadata, QualityScorer};
use serde::Deserialize;
use serde_json::{json, Value};

fn default_template_type() -> String {
    "guide".to_string()
}

fn default_idea_count() -> usize {
    10
}

fn default_export_format() -> String {
    "json".to_string()
}

fn default_pillar() -> PillarPage {
    PillarPage::new("", "", "", 3000)
}

/// A decoded request envelope.
#[derive(Debug, Deserialize)]
#[serde(tag = "module")]
pub enum Request {
    #[serde(rename = "intent_analyzer")]
    IntentAnalyzer(IntentRequest),
    #[serde(rename = "topic_cluster")]
    TopicCluster(ClusterRequest),
    #[serde(rename = "quality_checker")]
    QualityChecker(QualityRequest),
}

#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum IntentRequest {
    AnalyzeBatch {
        #[serde(default)]
        queries: Vec<String>,
    },
    GetDistribution {
        #[serde(default)]
        queries: Vec<String>,
    },
    AnalyzeSingle {
        #[serde(default)]
        query: String,
    },
}

#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ClusterRequest {
    GenerateIdeas {
        #[serde(default)]
        pillar_topic: String,
        #[serde(default = "default_template_type")]
        template_type: String,
        #[serde(default = "default_idea_count")]
        count: usize,
    },
    AnalyzeCoverage {
        #[serde(default = "default_pillar")]
        pillar: PillarPage,
    },
    GenerateLinkingStrategy {
        #[serde(default = "default_pillar")]
        pillar: PillarPage,
    },
    Export {
        #[serde(default = "default_pillar")]
        pillar: PillarPage,
        #[serde(default = "default_export_format")]
        format: String,
    },
}

#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum QualityRequest {
    CheckQuality {
        #[serde(default)]
        content: String,
        #[serde(default)]
        metadata: ContentMetadata,
    },
}

/// Decode a request envelope from JSON text.
///
/// Unknown modules and actions surface here as envelope errors via the
/// serde tag machinery.
pub fn parse_request(input: &str) -> Result<Request> {
    serde_json::from_str(input).map_err(|e| Error::envelope(e.to_string()))
}

/// Dispatch a decoded request to the appropriate engine and encode the
/// result as JSON.
pub fn dispatch(request: Request) -> Result<Value> {
    match request {
        Request::IntentAnalyzer(request) => {
            let classifier = IntentClassifier::new();
            let value = match request {
                IntentRequest::AnalyzeBatch { queries } => {
                    log::debug!("classifying {} queries", queries.len());
                    serde_json::to_value(classifier.classify_batch(&queries))?
                }
                IntentRequest::GetDistribution { queries } => {
                    serde_json::to_value(classifier.distribution(&queries))?
                }
                IntentRequest::AnalyzeSingle { query } => {
                    serde_json::to_value(classifier.classify(&query))?
                }
            };
            Ok(value)
        }
        Request::TopicCluster(request) => {
            let mut planner = ClusterPlanner::new();
            let value = match request {
                ClusterRequest::GenerateIdeas {
                    pillar_topic,
                    template_type,
                    count,
                } => serde_json::to_value(planner.generate_cluster_ideas(
                    &pillar_topic,
                    &template_type,
                    count,
                ))?,
                ClusterRequest::AnalyzeCoverage { mut pillar } => {
                    pillar.ensure_slugs();
                    serde_json::to_value(planner.analyze_coverage(&pillar))?
                }
                ClusterRequest::GenerateLinkingStrategy { mut pillar } => {
                    pillar.ensure_slugs();
                    serde_json::to_value(planner.generate_linking_strategy(&pillar))?
                }
                ClusterRequest::Export { mut pillar, format } => {
                    pillar.ensure_slugs();
                    let format = ExportFormat::parse(&format);
                    // The exported pillar joins the session side-buffer.
                    planner.record(pillar);
                    let recorded = planner
                        .pillars()
                        .last()
                        .expect("pillar was just recorded");
                    Value::String(planner.export(recorded, format)?)
                }
            };
            Ok(value)
        }
        Request::QualityChecker(QualityRequest::CheckQuality { content, metadata }) => {
            let scorer = QualityScorer::new();
            Ok(serde_json::to_value(scorer.score(&content, &metadata))?)
        }
    }
}

/// Decode, dispatch, and encode in one step.
pub fn handle(input: &str) -> Result<Value> {
    dispatch(parse_request(input)?)
}

/// Single-key error object reported on any failure.
pub fn error_response(message: &str) -> Value {
    json!({ "error": message })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_single_round_trip() {
        let response = handle(
            r#"{"module": "intent_analyzer", "action": "analyze_single", "query": "buy espresso machine"}"#,
        )
        .unwrap();
        assert_eq!(response["primary_intent"], "transactional");
        assert_eq!(response["query"], "buy espresso machine");
        assert_eq!(response["matched_modifiers"][0], "buy");
    }

    #[test]
    fn analyze_batch_preserves_order() {
        let response = handle(
            r#"{"module": "intent_analyzer", "action": "analyze_batch",
                "queries": ["how to make coffee", "acme login"]}"#,
        )
        .unwrap();
        let results = response.as_array().unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0]["primary_intent"], "informational");
        assert_eq!(results[1]["primary_intent"], "navigational");
    }

    #[test]
    fn get_distribution_reports_counts() {
        let response = handle(
            r#"{"module": "intent_analyzer", "action": "get_distribution",
                "queries": ["what is seo", "buy beans"]}"#,
        )
        .unwrap();
        assert_eq!(response["total_queries"], 2);
        assert_eq!(response["distribution"]["informational"], 1);
        assert_eq!(response["distribution"]["transactional"], 1);
        assert_eq!(response["dominant_intent"], "informational");
    }

    #[test]
    fn generate_ideas_with_defaults() {
        let response = handle(
            r#"{"module": "topic_cluster", "action": "generate_ideas", "pillar_topic": "coffee"}"#,
        )
        .unwrap();
        let ideas = response.as_array().unwrap();
        assert_eq!(ideas.len(), 10);
        assert_eq!(ideas[0], "What is coffee");
    }

    #[test]
    fn coverage_reconstructs_pillar_and_backfills_slugs() {
        let response = handle(
            r#"{"module": "topic_cluster", "action": "analyze_coverage",
                "pillar": {"title": "SEO Guide", "target_keyword": "seo",
                           "description": "d", "word_count": 2000,
                           "clusters": [{"title": "Keyword Research", "target_keyword": "kw"}]}}"#,
        )
        .unwrap();
        assert_eq!(response["pillar_title"], "SEO Guide");
        assert_eq!(response["total_clusters"], 1);
        assert_eq!(response["total_word_count"], 3500);
        assert_eq!(response["average_cluster_length"], 1500);
    }

    #[test]
    fn export_returns_string_payload() {
        let response = handle(
            r#"{"module": "topic_cluster", "action": "export",
                "pillar": {"title": "SEO Guide", "target_keyword": "seo", "description": "d"},
                "format": "markdown"}"#,
        )
        .unwrap();
        let text = response.as_str().unwrap();
        assert!(text.starts_with("# Topic Cluster: SEO Guide"));
    }

    #[test]
    fn check_quality_scores_content() {
        let response = handle(
            r#"{"module": "quality_checker", "action": "check_quality",
                "content": "Short text here.", "metadata": {}}"#,
        )
        .unwrap();
        assert_eq!(response["seo_score"], 50.0);
        assert_eq!(response["grade"], "F");
        assert!(response["recommendations"].as_array().unwrap().len() > 0);
    }

    #[test]
    fn unknown_module_is_an_envelope_error() {
        let err = handle(r#"{"module": "mystery", "action": "x"}"#).unwrap_err();
        assert!(matches!(err, Error::Envelope(_)));
    }

    #[test]
    fn unknown_action_is_an_envelope_error() {
        let err = handle(r#"{"module": "intent_analyzer", "action": "explode"}"#).unwrap_err();
        assert!(matches!(err, Error::Envelope(_)));
    }

    #[test]
    fn malformed_json_is_an_envelope_error() {
        let err = handle("{not json").unwrap_err();
        assert!(matches!(err, Error::Envelope(_)));
    }

    #[test]
    fn error_response_is_single_key() {
        let value = error_response("boom");
        assert_eq!(value, json!({"error": "boom"}));
    }
}
