//! SEO optimization scoring

use super::text;
use super::ContentMetadata;

/// First-paragraph window: leading characters checked for early keyword
/// placement.
pub const FIRST_PARAGRAPH_CHARS: usize = 500;

/// Leading window of the content, sliced by characters so multibyte text
/// cannot split a code point.
pub fn first_paragraph(content: &str) -> String {
    content.chars().take(FIRST_PARAGRAPH_CHARS).collect()
}

/// SEO score in [0, 100].
///
/// Without a target keyword every other signal is meaningless, so the
/// score short-circuits to a neutral 50.
pub fn score(content: &str, metadata: &ContentMetadata) -> f64 {
    let target_keyword = metadata.target_keyword().to_lowercase();
    if target_keyword.is_empty() {
        return 50.0;
    }

    let title = metadata.title().to_lowercase();
    let meta_description = metadata.meta_description().to_lowercase();
    let content_lower = content.to_lowercase();
    let mut score: f64 = 0.0;

    // Keyword in title (15 points)
    if title.contains(&target_keyword) {
        score += 15.0;
    }

    // Keyword in first paragraph (10 points)
    if first_paragraph(content).to_lowercase().contains(&target_keyword) {
        score += 10.0;
    }

    // Keyword in meta description (10 points)
    if meta_description.contains(&target_keyword) {
        score += 10.0;
    }

    // Keyword density (15 points, optimal range 0.5%-2.5%)
    let keyword_count = content_lower.matches(&target_keyword).count();
    let word_count = text::split_words(content).len();
    if word_count > 0 {
        let density = keyword_count as f64 / word_count as f64 * 100.0;
        if (0.5..=2.5).contains(&density) {
            score += 15.0;
        } else if density < 0.5 {
            score += 5.0;
        }
    }

    // Headings present (10 points)
    let headings = text::HEADING_LINE.find_iter(content).count();
    if headings >= 3 {
        score += 10.0;
    } else if headings >= 1 {
        score += 5.0;
    }

    // Content length (15 points)
    if word_count >= 1500 {
        score += 15.0;
    } else if word_count >= 1000 {
        score += 10.0;
    } else if word_count >= 500 {
        score += 5.0;
    }

    // Internal links (10 points)
    let internal_links = text::MARKDOWN_LINK.find_iter(content).count();
    if internal_links >= 5 {
        score += 10.0;
    } else if internal_links >= 3 {
        score += 7.0;
    } else if internal_links >= 1 {
        score += 4.0;
    }

    // External links (10 points)
    let external_links = text::EXTERNAL_LINK.find_iter(content).count();
    if external_links >= 3 {
        score += 10.0;
    } else if external_links >= 1 {
        score += 5.0;
    }

    // Images/media (5 points)
    if content.contains("![") || content.contains("<img") {
        score += 5.0;
    }

    score.min(100.0)
}
