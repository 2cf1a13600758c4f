//! Cluster map export: JSON, markdown table, and mermaid diagram

use super::linking::{self, LinkingStrategy};
use super::model::{ClusterContent, PillarPage};
use crate::core::Result;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Markdown,
    Mermaid,
}

impl ExportFormat {
    /// Parse a format name; unrecognized names fall back to JSON.
    pub fn parse(name: &str) -> Self {
        match name {
            "markdown" => ExportFormat::Markdown,
            "mermaid" => ExportFormat::Mermaid,
            _ => ExportFormat::Json,
        }
    }
}

#[derive(Serialize)]
struct PillarSummary<'a> {
    title: &'a str,
    target_keyword: &'a str,
    description: &'a str,
    word_count: u32,
    url_slug: &'a str,
}

#[derive(Serialize)]
struct ClusterSummary<'a> {
    title: &'a str,
    target_keyword: &'a str,
    search_volume: u32,
    difficulty: &'a str,
    word_count: u32,
    url_slug: &'a str,
}

#[derive(Serialize)]
struct ClusterMap<'a> {
    pillar: PillarSummary<'a>,
    clusters: Vec<ClusterSummary<'a>>,
    internal_linking: LinkingStrategy,
}

/// Export a pillar's cluster map in the requested format.
pub fn export(pillar: &PillarPage, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Json => export_json(pillar),
        ExportFormat::Markdown => Ok(export_markdown(pillar)),
        ExportFormat::Mermaid => Ok(export_mermaid(pillar)),
    }
}

fn export_json(pillar: &PillarPage) -> Result<String> {
    let map = ClusterMap {
        pillar: PillarSummary {
            title: &pillar.title,
            target_keyword: &pillar.target_keyword,
            description: &pillar.description,
            word_count: pillar.word_count,
            url_slug: &pillar.url_slug,
        },
        clusters: pillar
            .clusters
            .iter()
            .map(|c: &ClusterContent| ClusterSummary {
                title: &c.title,
                target_keyword: &c.target_keyword,
                search_volume: c.search_volume,
                difficulty: &c.difficulty,
                word_count: c.word_count,
                url_slug: &c.url_slug,
            })
            .collect(),
        internal_linking: linking::generate(pillar),
    };
    Ok(serde_json::to_string_pretty(&map)?)
}

fn export_markdown(pillar: &PillarPage) -> String {
    let mut md = format!("# Topic Cluster: {}\n\n", pillar.title);
    let _ = write!(md, "**Target Keyword:** {}\n\n", pillar.target_keyword);
    let _ = write!(md, "**Description:** {}\n\n", pillar.description);
    let _ = write!(md, "**Word Count:** {}\n\n", pillar.word_count);
    md.push_str("## Cluster Content\n\n");
    md.push_str("| Title | Target Keyword | Search Volume | Difficulty | Word Count |\n");
    md.push_str("|-------|----------------|---------------|------------|------------|\n");

    for cluster in &pillar.clusters {
        let _ = writeln!(
            md,
            "| {} | {} | {} | {} | {} |",
            cluster.title,
            cluster.target_keyword,
            cluster.search_volume,
            cluster.difficulty,
            cluster.word_count
        );
    }

    md
}

/// Node letter for the cluster at `index`: 'B', 'C', ... Lettering walks
/// the codepoint space past 'Z' for index >= 25; callers are expected to
/// stay within 25 clusters per diagram.
fn node_letter(index: usize) -> char {
    char::from_u32('B' as u32 + index as u32).unwrap_or('?')
}

fn export_mermaid(pillar: &PillarPage) -> String {
    let mut mermaid = String::from("```mermaid\ngraph TD\n");

    let pillar_id = 'A';
    let _ = writeln!(mermaid, "    {pillar_id}[\"{}\"]", pillar.title);

    for (i, cluster) in pillar.clusters.iter().enumerate() {
        let _ = writeln!(mermaid, "    {}[\"{}\"]", node_letter(i), cluster.title);
    }

    for i in 0..pillar.clusters.len() {
        let cluster_id = node_letter(i);
        let _ = writeln!(mermaid, "    {pillar_id} --> {cluster_id}");
        let _ = writeln!(mermaid, "    {cluster_id} --> {pillar_id}");
    }

    let _ = writeln!(
        mermaid,
        "\n    style {pillar_id} fill:#4CAF50,stroke:#2E7D32,stroke-width:3px,color:#fff"
    );
    for i in 0..pillar.clusters.len() {
        let _ = writeln!(
            mermaid,
            "    style {} fill:#2196F3,stroke:#1565C0,stroke-width:2px,color:#fff",
            node_letter(i)
        );
    }

    mermaid.push_str("```");
    mermaid
}
