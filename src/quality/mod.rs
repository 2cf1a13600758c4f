//! Content quality scoring
//!
//! Evaluates prose across four weighted sub-scores (readability, E-E-A-T,
//! SEO, completeness) and produces an overall grade with improvement
//! recommendations. Every operation degrades to neutral or zero scores on
//! missing input rather than failing.

pub mod completeness;
pub mod eeat;
pub mod readability;
pub mod recommendations;
pub mod seo;
pub mod text;

use crate::core::Grade;
use serde::{Deserialize, Serialize};

/// Optional page metadata supplied alongside the content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_keyword: Option<String>,
}

impl ContentMetadata {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    pub fn meta_description(&self) -> &str {
        self.meta_description.as_deref().unwrap_or("")
    }

    pub fn target_keyword(&self) -> &str {
        self.target_keyword.as_deref().unwrap_or("")
    }
}

/// Quality score breakdown. All scores are clamped to [0, 100] and rounded
/// to 1 decimal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityScore {
    pub overall_score: f64,
    pub readability_score: f64,
    pub eeat_score: f64,
    pub seo_score: f64,
    pub completeness_score: f64,
    pub grade: Grade,
    pub recommendations: Vec<String>,
}

/// Scores content quality from text plus optional metadata.
#[derive(Debug, Default)]
pub struct QualityScorer;

impl QualityScorer {
    pub fn new() -> Self {
        Self
    }

    /// Score a piece of content.
    ///
    /// Overall = 0.25·readability + 0.30·eeat + 0.25·seo +
    /// 0.20·completeness. Recommendations are generated from the raw
    /// sub-scores before rounding.
    pub fn score(&self, content: &str, metadata: &ContentMetadata) -> QualityScore {
        let readability = readability::score(content);
        let eeat = eeat::score(content);
        let seo = seo::score(content, metadata);
        let completeness = completeness::score(content, metadata);

        let overall = readability * 0.25 + eeat * 0.30 + seo * 0.25 + completeness * 0.20;

        let recommendations =
            recommendations::generate(readability, eeat, seo, completeness, content, metadata);

        QualityScore {
            overall_score: round1(overall),
            readability_score: round1(readability),
            eeat_score: round1(eeat),
            seo_score: round1(seo),
            completeness_score: round1(completeness),
            grade: Grade::from_score(overall),
            recommendations,
        }
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
