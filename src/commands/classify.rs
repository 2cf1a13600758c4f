//! Query classification command

use crate::cli::ReportFormat;
use crate::intent::{IntentClassifier, IntentResult};
use crate::io::write_output;
use anyhow::Result;
use colored::Colorize;
use std::fmt::Write as _;
use std::path::PathBuf;

pub fn classify(
    queries: Vec<String>,
    distribution: bool,
    format: ReportFormat,
    output: Option<PathBuf>,
) -> Result<()> {
    let classifier = IntentClassifier::new();
    let results = classifier.classify_batch(&queries);

    let rendered = match format {
        ReportFormat::Json => {
            if distribution {
                serde_json::to_string_pretty(&classifier.distribution(&queries))?
            } else {
                serde_json::to_string_pretty(&results)?
            }
        }
        ReportFormat::Terminal => {
            let mut report = render_results(&results);
            if distribution {
                report.push('\n');
                report.push_str(&render_distribution(&classifier, &queries));
            }
            report
        }
    };

    write_output(&rendered, output.as_deref())?;
    Ok(())
}

fn render_results(results: &[IntentResult]) -> String {
    let mut out = String::new();
    for result in results {
        let _ = writeln!(out, "{} {}", "Query:".bold(), result.query);
        let _ = writeln!(
            out,
            "  Intent: {} (confidence: {})",
            result.primary_intent.as_str().cyan(),
            result.confidence
        );
        if !result.matched_modifiers.is_empty() {
            let _ = writeln!(
                out,
                "  Matched modifiers: {}",
                result.matched_modifiers.join(", ")
            );
        }
        let _ = writeln!(
            out,
            "  Content type: {}",
            result.recommendations.content_type
        );
    }
    out
}

fn render_distribution(classifier: &IntentClassifier, queries: &[String]) -> String {
    let dist = classifier.distribution(queries);
    let mut out = String::new();
    let _ = writeln!(out, "{}", "Intent distribution".bold());
    let _ = writeln!(out, "  Total queries: {}", dist.total_queries);
    let _ = writeln!(
        out,
        "  Dominant intent: {}",
        dist.dominant_intent.as_str().cyan()
    );
    for (intent, pct) in dist.percentages.iter() {
        let _ = writeln!(out, "  {}: {pct}%", intent.as_str());
    }
    out
}
