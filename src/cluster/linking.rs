//! Internal linking strategy generation

use super::model::PillarPage;
use serde::{Deserialize, Serialize};

/// One recommended internal link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkEdge {
    #[serde(rename = "from")]
    pub source: String,
    #[serde(rename = "to")]
    pub target: String,
    pub anchor_text: String,
    pub context: String,
}

/// Linking recommendations for a topic cluster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkingStrategy {
    pub pillar_to_clusters: Vec<LinkEdge>,
    pub clusters_to_pillar: Vec<LinkEdge>,
    pub cluster_to_cluster: Vec<LinkEdge>,
}

/// Generate the linking strategy for a pillar.
///
/// The pillar links to every cluster and every cluster links back.
/// Cluster-to-cluster edges run forward only, to the next two clusters by
/// list position. The sparse forward window bounds linking fanout on large
/// clusters; it is not meant to form a complete graph.
pub fn generate(pillar: &PillarPage) -> LinkingStrategy {
    let mut strategy = LinkingStrategy::default();

    for cluster in &pillar.clusters {
        strategy.pillar_to_clusters.push(LinkEdge {
            source: pillar.url_slug.clone(),
            target: cluster.url_slug.clone(),
            anchor_text: cluster.target_keyword.clone(),
            context: format!("Link from pillar page section about {}", cluster.title),
        });
    }

    for cluster in &pillar.clusters {
        strategy.clusters_to_pillar.push(LinkEdge {
            source: cluster.url_slug.clone(),
            target: pillar.url_slug.clone(),
            anchor_text: pillar.target_keyword.clone(),
            context: format!("Link to main {} guide", pillar.title),
        });
    }

    for (i, from_cluster) in pillar.clusters.iter().enumerate() {
        for to_cluster in pillar.clusters.iter().skip(i + 1).take(2) {
            // Value-equal duplicates would link a page to itself; skip them.
            if from_cluster == to_cluster {
                continue;
            }
            strategy.cluster_to_cluster.push(LinkEdge {
                source: from_cluster.url_slug.clone(),
                target: to_cluster.url_slug.clone(),
                anchor_text: to_cluster.target_keyword.clone(),
                context: "Related topic link".to_string(),
            });
        }
    }

    strategy
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::model::ClusterContent;

    fn pillar_with(titles: &[&str]) -> PillarPage {
        let mut pillar = PillarPage::new("Email Marketing", "email marketing", "desc", 3000);
        for title in titles {
            pillar.add_cluster(ClusterContent::new(*title, format!("{title} kw")));
        }
        pillar
    }

    #[test]
    fn pillar_and_back_edges_cover_every_cluster() {
        let pillar = pillar_with(&["A", "B", "C"]);
        let strategy = generate(&pillar);

        assert_eq!(strategy.pillar_to_clusters.len(), 3);
        assert_eq!(strategy.clusters_to_pillar.len(), 3);

        let first = &strategy.pillar_to_clusters[0];
        assert_eq!(first.source, "email-marketing");
        assert_eq!(first.target, "a");
        assert_eq!(first.anchor_text, "A kw");
        assert_eq!(first.context, "Link from pillar page section about A");

        let back = &strategy.clusters_to_pillar[0];
        assert_eq!(back.source, "a");
        assert_eq!(back.target, "email-marketing");
        assert_eq!(back.anchor_text, "email marketing");
        assert_eq!(back.context, "Link to main Email Marketing guide");
    }

    #[test]
    fn cluster_edges_follow_forward_two_window() {
        let pillar = pillar_with(&["c0", "c1", "c2", "c3"]);
        let strategy = generate(&pillar);
        let edges: Vec<(&str, &str)> = strategy
            .cluster_to_cluster
            .iter()
            .map(|e| (e.source.as_str(), e.target.as_str()))
            .collect();
        assert_eq!(
            edges,
            vec![
                ("c0", "c1"),
                ("c0", "c2"),
                ("c1", "c2"),
                ("c1", "c3"),
                ("c2", "c3"),
            ]
        );
    }

    #[test]
    fn empty_pillar_yields_empty_strategy() {
        let strategy = generate(&pillar_with(&[]));
        assert!(strategy.pillar_to_clusters.is_empty());
        assert!(strategy.clusters_to_pillar.is_empty());
        assert!(strategy.cluster_to_cluster.is_empty());
    }

    #[test]
    fn value_equal_neighbors_are_skipped() {
        let pillar = pillar_with(&["same", "same", "other"]);
        let strategy = generate(&pillar);
        let edges: Vec<(&str, &str)> = strategy
            .cluster_to_cluster
            .iter()
            .map(|e| (e.source.as_str(), e.target.as_str()))
            .collect();
        // same->same (positions 0->1) is dropped; the rest survive.
        assert_eq!(
            edges,
            vec![("same", "other"), ("same", "other")]
        );
    }
}
