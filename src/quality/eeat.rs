//! E-E-A-T signal scoring
//!
//! Experience, Expertise, Authoritativeness, Trustworthiness, scored from
//! fixed indicator phrase lists plus citation and authoritative-domain
//! bonuses. Each list phrase counts at most once (presence, not frequency).

use super::text;

const EXPERIENCE_INDICATORS: &[&str] = &[
    "i tested",
    "i tried",
    "in my experience",
    "i found",
    "i used",
    "i noticed",
    "i discovered",
    "my results",
    "case study",
    "real-world example",
    "personal experience",
];

const EXPERTISE_INDICATORS: &[&str] = &[
    "certified",
    "expert",
    "professional",
    "years of experience",
    "specialist",
    "authority",
    "research shows",
    "studies indicate",
    "according to",
    "data shows",
    "statistics reveal",
];

const TRUST_INDICATORS: &[&str] = &[
    "source:",
    "reference:",
    "citation:",
    "https://",
    "published",
    "peer-reviewed",
    "verified",
    "guaranteed",
    "privacy policy",
    "terms of service",
    "contact us",
];

const AUTHORITATIVE_DOMAINS: &[&str] = &[".edu", ".gov", ".org"];

fn present_count(haystack: &str, indicators: &[&str]) -> usize {
    indicators.iter().filter(|i| haystack.contains(*i)).count()
}

/// E-E-A-T score in [0, 100].
pub fn score(content: &str) -> f64 {
    let content_lower = content.to_lowercase();
    let mut score = 0.0;

    // Experience indicators (30 points, 5 per hit)
    let experience = present_count(&content_lower, EXPERIENCE_INDICATORS);
    score += (experience as f64 * 5.0).min(30.0);

    // Expertise indicators (30 points, 5 per hit)
    let expertise = present_count(&content_lower, EXPERTISE_INDICATORS);
    score += (expertise as f64 * 5.0).min(30.0);

    // Trust indicators (40 points, 4 per hit)
    let trust = present_count(&content_lower, TRUST_INDICATORS);
    score += (trust as f64 * 4.0).min(40.0);

    // Citation-like patterns (up to 10 points)
    let citations = text::CITATION.find_iter(&content_lower).count();
    score += (citations as f64 * 2.0).min(10.0);

    // Authoritative top-level domains (5 points each)
    for domain in AUTHORITATIVE_DOMAINS {
        if content_lower.contains(domain) {
            score += 5.0;
        }
    }

    score.min(100.0)
}
