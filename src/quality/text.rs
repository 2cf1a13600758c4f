//! Text extraction primitives shared by the quality sub-scores
//!
//! Sentence, word, and syllable extraction are deliberately simple: maximal
//! alpha runs for words, punctuation runs for sentence breaks, and a
//! vowel-group approximation for syllables. The scoring formulas depend on
//! these exact semantics.

use once_cell::sync::Lazy;
use regex::Regex;

static SENTENCE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").expect("valid regex"));
static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[a-zA-Z]+\b").expect("valid regex"));

/// List marker at the start of a line: dash, numbered, or bullet. Requires
/// a preceding newline, so a list on the very first line does not count.
pub static LIST_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n-|\n\d+\.|\n•").expect("valid regex"));

/// Markdown heading opener at text start or after a newline.
pub static HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"(^|\n)#{1,6}\s").expect("valid regex"));

/// Full markdown heading line, for counting.
pub static HEADING_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(^|\n)#{1,6}\s.+").expect("valid regex"));

/// Markdown link: `[text](target)`.
pub static MARKDOWN_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[.+?\]\(.+?\)").expect("valid regex"));

/// External link protocol marker.
pub static EXTERNAL_LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://").expect("valid regex"));

/// Citation-like pattern: bracketed or bare numbers, source/reference tags.
pub static CITATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[?\d+\]?|source:|reference:").expect("valid regex"));

/// FAQ / Q&A section markers (run against lowercased text).
pub static FAQ_SECTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"faq|frequently asked|question|q&a").expect("valid regex"));

/// Conclusion / summary section markers (run against lowercased text).
pub static CONCLUSION_SECTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"conclusion|summary|in summary|to summarize|key takeaways").expect("valid regex")
});

/// Split text into trimmed, non-empty sentences on `.!?` runs.
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_BREAK
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Extract words as maximal ASCII-alpha runs with word boundaries.
pub fn split_words(text: &str) -> Vec<&str> {
    WORD.find_iter(text).map(|m| m.as_str()).collect()
}

/// Approximate syllable count: vowel-group transitions, minus one for a
/// trailing silent "e", floored at 1.
pub fn count_syllables(word: &str) -> usize {
    let word = word.to_lowercase();
    let mut count: isize = 0;
    let mut previous_was_vowel = false;

    for ch in word.chars() {
        let is_vowel = matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if is_vowel && !previous_was_vowel {
            count += 1;
        }
        previous_was_vowel = is_vowel;
    }

    if word.ends_with('e') {
        count -= 1;
    }

    count.max(1) as usize
}

/// Paragraph segments split on blank lines. Empty segments are kept, and
/// any string yields at least one segment, so callers can divide by the
/// count without a zero guard.
pub fn paragraph_count(text: &str) -> usize {
    text.split("\n\n").count()
}
