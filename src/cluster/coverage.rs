//! Cluster coverage analysis

use super::model::PillarPage;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Difficulty label histogram preserving first-appearance order.
///
/// Serialized as a JSON object whose keys appear in the order the labels
/// were first seen, which a sorted map would not preserve.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DifficultyHistogram(Vec<(String, usize)>);

impl DifficultyHistogram {
    pub fn record(&mut self, difficulty: &str) {
        if let Some(entry) = self.0.iter_mut().find(|(label, _)| label == difficulty) {
            entry.1 += 1;
        } else {
            self.0.push((difficulty.to_string(), 1));
        }
    }

    pub fn get(&self, difficulty: &str) -> usize {
        self.0
            .iter()
            .find(|(label, _)| label == difficulty)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(label, count)| (label.as_str(), *count))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for DifficultyHistogram {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (label, count) in &self.0 {
            map.serialize_entry(label, count)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for DifficultyHistogram {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct HistogramVisitor;

        impl<'de> Visitor<'de> for HistogramVisitor {
            type Value = DifficultyHistogram;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a map of difficulty labels to counts")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((label, count)) = access.next_entry::<String, usize>()? {
                    entries.push((label, count));
                }
                Ok(DifficultyHistogram(entries))
            }
        }

        deserializer.deserialize_map(HistogramVisitor)
    }
}

/// Coverage report for a pillar and its clusters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageReport {
    pub pillar_title: String,
    pub total_clusters: usize,
    /// Pillar word count plus all cluster word counts.
    pub total_word_count: u64,
    /// Mean cluster word count, rounded to the nearest integer; 0 when the
    /// pillar has no clusters.
    pub average_cluster_length: u64,
    pub difficulty_distribution: DifficultyHistogram,
    /// 0-100, rounded to 1 decimal.
    pub completeness_score: f64,
    pub recommendations: Vec<String>,
}

/// Analyze coverage and completeness of a topic cluster.
pub fn analyze(pillar: &PillarPage) -> CoverageReport {
    let total_clusters = pillar.clusters.len();
    let cluster_words: u64 = pillar.clusters.iter().map(|c| u64::from(c.word_count)).sum();
    let total_word_count = u64::from(pillar.word_count) + cluster_words;

    let average_cluster_length = if total_clusters > 0 {
        (cluster_words as f64 / total_clusters as f64).round() as u64
    } else {
        0
    };

    let mut difficulty_distribution = DifficultyHistogram::default();
    for cluster in &pillar.clusters {
        difficulty_distribution.record(&cluster.difficulty);
    }

    CoverageReport {
        pillar_title: pillar.title.clone(),
        total_clusters,
        total_word_count,
        average_cluster_length,
        difficulty_distribution,
        completeness_score: completeness(pillar),
        recommendations: recommendations(pillar),
    }
}

/// Completeness score: 40 points for cluster count (10 recommended), 30
/// for pillar depth (3000 words recommended), 30 for the share of clusters
/// at or above 1500 words.
fn completeness(pillar: &PillarPage) -> f64 {
    let mut score = 0.0;

    let cluster_count = pillar.clusters.len();
    if cluster_count >= 10 {
        score += 40.0;
    } else {
        score += cluster_count as f64 / 10.0 * 40.0;
    }

    if pillar.word_count >= 3000 {
        score += 30.0;
    } else {
        score += f64::from(pillar.word_count) / 3000.0 * 30.0;
    }

    if !pillar.clusters.is_empty() {
        let adequate = pillar
            .clusters
            .iter()
            .filter(|c| c.word_count >= 1500)
            .count();
        score += adequate as f64 / pillar.clusters.len() as f64 * 30.0;
    }

    (score * 10.0).round() / 10.0
}

fn recommendations(pillar: &PillarPage) -> Vec<String> {
    let mut recommendations = Vec::new();

    if pillar.clusters.len() < 10 {
        recommendations.push(format!(
            "Add {} more cluster pieces (minimum 10 recommended)",
            10 - pillar.clusters.len()
        ));
    }

    if pillar.word_count < 3000 {
        recommendations.push(format!(
            "Increase pillar word count by {} words",
            3000 - pillar.word_count
        ));
    }

    let short_clusters = pillar
        .clusters
        .iter()
        .filter(|c| c.word_count < 1500)
        .count();
    if short_clusters > 0 {
        recommendations.push(format!(
            "Expand {short_clusters} cluster pieces to at least 1,500 words"
        ));
    }

    if recommendations.is_empty() {
        recommendations.push(
            "Cluster coverage is excellent! Focus on content quality and promotion.".to_string(),
        );
    }

    recommendations
}
