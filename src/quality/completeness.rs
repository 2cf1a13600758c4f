//! Content completeness scoring

use super::text;
use super::ContentMetadata;

const EXAMPLE_INDICATORS: &[&str] = &["example", "for instance", "such as", "like"];
const CTA_INDICATORS: &[&str] = &[
    "learn more",
    "get started",
    "sign up",
    "download",
    "contact us",
    "try",
];

/// Completeness score in [0, 100].
pub fn score(content: &str, metadata: &ContentMetadata) -> f64 {
    let content_lower = content.to_lowercase();
    let mut score: f64 = 0.0;

    // Has introduction (15 points)
    if content.chars().count() > 200 {
        score += 15.0;
    }

    // Has headings/structure (20 points)
    let headings = text::HEADING_LINE.find_iter(content).count();
    if headings >= 5 {
        score += 20.0;
    } else if headings >= 3 {
        score += 15.0;
    } else if headings >= 1 {
        score += 10.0;
    }

    // Has examples (15 points)
    let example_count = EXAMPLE_INDICATORS
        .iter()
        .filter(|i| content_lower.contains(*i))
        .count();
    if example_count >= 3 {
        score += 15.0;
    } else if example_count >= 1 {
        score += 10.0;
    }

    // Has lists (10 points)
    if text::LIST_MARKER.is_match(content) {
        score += 10.0;
    }

    // Has FAQ or Q&A section (10 points)
    if text::FAQ_SECTION.is_match(&content_lower) {
        score += 10.0;
    }

    // Has conclusion/summary (10 points)
    if text::CONCLUSION_SECTION.is_match(&content_lower) {
        score += 10.0;
    }

    // Has call-to-action (10 points)
    if CTA_INDICATORS.iter().any(|c| content_lower.contains(c)) {
        score += 10.0;
    }

    // Has metadata (10 points)
    if !metadata.title().is_empty() && !metadata.meta_description().is_empty() {
        score += 10.0;
    }

    score.min(100.0)
}
