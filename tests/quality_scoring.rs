use contentscope::{ContentMetadata, Grade, QualityScorer};

/// Hand-computed fixture:
/// "# Title\n\nshort text" has no sentence punctuation, so the whole
/// string is one sentence. Words: Title, short, text (3). Syllables:
/// ti-tle loses its silent e (1), short (1), text (1) = 3.
/// Flesch = 206.835 - 1.015*3 - 84.6*1 = 119.19, clamped to 100.
/// Readability = 100*0.6 + 10 (avg paragraph < 100 words) + 10 (heading)
/// = 80. E-E-A-T 0, SEO 50 (no keyword), completeness 10 (one heading).
/// Overall = 80*0.25 + 0*0.30 + 50*0.25 + 10*0.20 = 34.5.
#[test]
fn heading_fixture_scores_exactly() {
    let score = QualityScorer::new().score("# Title\n\nshort text", &ContentMetadata::default());
    assert_eq!(score.readability_score, 80.0);
    assert_eq!(score.eeat_score, 0.0);
    assert_eq!(score.seo_score, 50.0);
    assert_eq!(score.completeness_score, 10.0);
    assert_eq!(score.overall_score, 34.5);
    assert_eq!(score.grade, Grade::F);
}

#[test]
fn heading_fixture_recommendation_order() {
    let score = QualityScorer::new().score("# Title\n\nshort text", &ContentMetadata::default());
    // Readability passes (80); E-E-A-T, SEO, and completeness rules fire
    // in that order.
    assert_eq!(
        score.recommendations,
        vec![
            "Add personal experience and real-world examples".to_string(),
            "Include citations and references to authoritative sources".to_string(),
            "Demonstrate expertise with data, statistics, and research".to_string(),
            "Add more internal links to related content (5-10 recommended)".to_string(),
            "Add an FAQ section to address common questions".to_string(),
            "Add a conclusion or summary section".to_string(),
        ]
    );
}

#[test]
fn seo_is_exactly_neutral_without_keyword() {
    let scorer = QualityScorer::new();
    let long = "keyword ".repeat(2000);
    let contents = [
        "",
        "# Rich\n\ncontent with [links](x) and https://example.org markers",
        long.as_str(),
    ];
    for content in contents {
        let no_meta = scorer.score(content, &ContentMetadata::default());
        assert_eq!(no_meta.seo_score, 50.0, "content len {}", content.len());

        let empty_keyword = ContentMetadata {
            target_keyword: Some(String::new()),
            ..ContentMetadata::default()
        };
        assert_eq!(scorer.score(content, &empty_keyword).seo_score, 50.0);
    }
}

#[test]
fn all_scores_clamped_for_adversarial_input() {
    let scorer = QualityScorer::new();
    // Syllable-dense single-word sentences drive raw Flesch negative.
    let dense = "Onomatopoeia. Incomprehensibility. Disestablishmentarianism.";
    let metadata = ContentMetadata {
        title: Some("Incomprehensibility".to_string()),
        meta_description: Some("Incomprehensibility".to_string()),
        target_keyword: Some("incomprehensibility".to_string()),
    };
    let score = scorer.score(dense, &metadata);
    for value in [
        score.overall_score,
        score.readability_score,
        score.eeat_score,
        score.seo_score,
        score.completeness_score,
    ] {
        assert!((0.0..=100.0).contains(&value), "out of range: {value}");
    }
}

#[test]
fn rich_sample_earns_a_passing_grade() {
    let content = "\
# How to Make Cold Brew Coffee

Cold brew coffee has become popular. In my experience testing many methods, \
I found that the key is the right ratio.

## What You Need

- Coarse coffee grounds
- Cold water
- A large jar

## Steps

1. Mix coffee and water
2. Steep for 12 hours
3. Strain and serve

According to research, cold brew has less acidity. For example, a 1:4 ratio \
works well. Source: https://example.org

## Summary

In summary, try it today. See the [full guide](https://example.org/guide).
";
    let metadata = ContentMetadata {
        title: Some("How to Make Cold Brew Coffee".to_string()),
        meta_description: Some("Learn to make cold brew coffee".to_string()),
        target_keyword: Some("cold brew".to_string()),
    };
    let score = QualityScorer::new().score(content, &metadata);
    assert!(score.overall_score > 50.0, "got {}", score.overall_score);
    assert!(score.readability_score > 50.0);
    assert!(score.eeat_score > 20.0);
    assert!(score.completeness_score > 60.0);
    let weighted = score.readability_score * 0.25
        + score.eeat_score * 0.30
        + score.seo_score * 0.25
        + score.completeness_score * 0.20;
    assert!((score.overall_score - weighted).abs() < 0.2);
}
