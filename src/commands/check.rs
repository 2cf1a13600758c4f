//! Content quality report command

use crate::cli::ReportFormat;
use crate::core::Grade;
use crate::io::write_output;
use crate::quality::{ContentMetadata, QualityScore, QualityScorer};
use anyhow::Result;
use colored::{ColoredString, Colorize};
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

pub fn check(
    file: PathBuf,
    title: Option<String>,
    meta_description: Option<String>,
    keyword: Option<String>,
    format: ReportFormat,
    output: Option<PathBuf>,
) -> Result<()> {
    let content = fs::read_to_string(&file)?;
    let metadata = ContentMetadata {
        title,
        meta_description,
        target_keyword: keyword,
    };

    log::debug!("scoring {} ({} bytes)", file.display(), content.len());
    let score = QualityScorer::new().score(&content, &metadata);

    let rendered = match format {
        ReportFormat::Json => serde_json::to_string_pretty(&score)?,
        ReportFormat::Terminal => render_report(&score),
    };

    write_output(&rendered, output.as_deref())?;
    Ok(())
}

fn colored_grade(grade: Grade) -> ColoredString {
    match grade {
        Grade::A | Grade::B => grade.as_str().green().bold(),
        Grade::C => grade.as_str().yellow().bold(),
        Grade::D | Grade::F => grade.as_str().red().bold(),
    }
}

fn render_report(score: &QualityScore) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "Content Quality Report".bold());
    let _ = writeln!(
        out,
        "Overall Score: {}/100 (Grade: {})",
        score.overall_score,
        colored_grade(score.grade)
    );
    out.push('\n');
    let _ = writeln!(out, "Score Breakdown:");
    let _ = writeln!(out, "  Readability:  {}/100", score.readability_score);
    let _ = writeln!(out, "  E-E-A-T:      {}/100", score.eeat_score);
    let _ = writeln!(out, "  SEO:          {}/100", score.seo_score);
    let _ = writeln!(out, "  Completeness: {}/100", score.completeness_score);
    out.push('\n');
    let _ = writeln!(out, "Recommendations:");
    for (i, rec) in score.recommendations.iter().enumerate() {
        let _ = writeln!(out, "  {}. {rec}", i + 1);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_lists_all_sub_scores_and_recommendations() {
        let score = QualityScorer::new().score("Short text here.", &ContentMetadata::default());
        let report = render_report(&score);
        assert!(report.contains("Overall Score: 30/100"));
        assert!(report.contains("Readability:  70/100"));
        assert!(report.contains("SEO:          50/100"));
        assert!(report.contains("1. "));
    }
}
