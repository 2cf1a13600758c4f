//! Improvement recommendations derived from sub-scores
//!
//! A fixed rule list evaluated top-to-bottom: readability, E-E-A-T, SEO,
//! completeness. Rules fire for any sub-score below 70 and the output
//! order always follows the rule order.

use super::{seo, text, ContentMetadata};
use once_cell::sync::Lazy;
use regex::Regex;

const THRESHOLD: f64 = 70.0;

static FAQ_HINT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"faq|frequently asked").expect("valid regex"));
static CONCLUSION_HINT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"conclusion|summary").expect("valid regex"));

pub fn generate(
    readability: f64,
    eeat: f64,
    seo_score: f64,
    completeness: f64,
    content: &str,
    metadata: &ContentMetadata,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if readability < THRESHOLD {
        recommendations
            .push("Improve readability: Use shorter sentences and simpler words".to_string());
        recommendations
            .push("Add more headings and bullet points to break up text".to_string());
    }

    if eeat < THRESHOLD {
        recommendations.push("Add personal experience and real-world examples".to_string());
        recommendations
            .push("Include citations and references to authoritative sources".to_string());
        recommendations
            .push("Demonstrate expertise with data, statistics, and research".to_string());
    }

    if seo_score < THRESHOLD {
        let target_keyword = metadata.target_keyword();
        if !target_keyword.is_empty() {
            let opening = seo::first_paragraph(content).to_lowercase();
            if !opening.contains(&target_keyword.to_lowercase()) {
                recommendations.push(format!(
                    "Include target keyword '{target_keyword}' in the first paragraph"
                ));
            }

            let word_count = text::split_words(content).len();
            if word_count < 1500 {
                recommendations.push(format!(
                    "Expand content to at least 1,500 words (currently {word_count})"
                ));
            }
        }

        let internal_links = text::MARKDOWN_LINK.find_iter(content).count();
        if internal_links < 5 {
            recommendations
                .push("Add more internal links to related content (5-10 recommended)".to_string());
        }
    }

    if completeness < THRESHOLD {
        let content_lower = content.to_lowercase();
        if !FAQ_HINT.is_match(&content_lower) {
            recommendations.push("Add an FAQ section to address common questions".to_string());
        }
        if !CONCLUSION_HINT.is_match(&content_lower) {
            recommendations.push("Add a conclusion or summary section".to_string());
        }
    }

    if recommendations.is_empty() {
        recommendations.push(
            "Content quality is excellent! Focus on promotion and link building.".to_string(),
        );
    }

    recommendations
}
