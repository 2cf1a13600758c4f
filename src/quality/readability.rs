//! Flesch-based readability scoring

use super::text;

/// Readability score in [0, 100].
///
/// Flesch Reading Ease scaled to a 0.6 base, with structural bonuses for
/// short paragraphs, lists, and headings, and a penalty when long
/// sentences dominate. Empty sentence or word extraction scores 0.
pub fn score(content: &str) -> f64 {
    let sentences = text::split_sentences(content);
    let words = text::split_words(content);

    if sentences.is_empty() || words.is_empty() {
        return 0.0;
    }

    let syllables: usize = words.iter().map(|w| text::count_syllables(w)).sum();

    let avg_sentence_length = words.len() as f64 / sentences.len() as f64;
    let avg_syllables_per_word = syllables as f64 / words.len() as f64;

    let flesch = 206.835 - 1.015 * avg_sentence_length - 84.6 * avg_syllables_per_word;
    let flesch = flesch.clamp(0.0, 100.0);

    let mut score = flesch * 0.6;

    let avg_paragraph_length = words.len() as f64 / text::paragraph_count(content) as f64;
    if avg_paragraph_length < 100.0 {
        score += 10.0;
    } else if avg_paragraph_length < 150.0 {
        score += 5.0;
    }

    if text::LIST_MARKER.is_match(content) {
        score += 10.0;
    }

    if text::HEADING.is_match(content) {
        score += 10.0;
    }

    let long_sentences = sentences
        .iter()
        .filter(|s| s.split_whitespace().count() > 25)
        .count();
    if long_sentences as f64 > sentences.len() as f64 * 0.3 {
        score -= 10.0;
    }

    score.clamp(0.0, 100.0)
}
