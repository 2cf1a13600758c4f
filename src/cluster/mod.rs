//! Topic cluster planning
//!
//! Models hub-and-spoke content architectures: a pillar page with child
//! cluster pages, template-driven idea generation, coverage and linking
//! analysis, and multi-format export.

pub mod coverage;
pub mod export;
pub mod linking;
pub mod model;
pub mod templates;

use crate::core::Result;

pub use coverage::{CoverageReport, DifficultyHistogram};
pub use export::ExportFormat;
pub use linking::{LinkEdge, LinkingStrategy};
pub use model::{slugify, ClusterContent, PillarPage};

/// Plans topic cluster structures.
///
/// Holds an append-only session list of the pillars created or recorded
/// through it. The list is an export side-buffer only; every computation
/// works on the pillar passed to it.
#[derive(Debug, Default)]
pub struct ClusterPlanner {
    pillars: Vec<PillarPage>,
}

impl ClusterPlanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pillar page and append it to the session list.
    pub fn create_pillar(
        &mut self,
        title: impl Into<String>,
        target_keyword: impl Into<String>,
        description: impl Into<String>,
        word_count: u32,
    ) -> &mut PillarPage {
        self.pillars
            .push(PillarPage::new(title, target_keyword, description, word_count));
        self.pillars.last_mut().expect("pillar was just pushed")
    }

    /// Record an externally constructed pillar in the session list.
    pub fn record(&mut self, pillar: PillarPage) {
        self.pillars.push(pillar);
    }

    /// Pillars created or recorded in this session, in creation order.
    pub fn pillars(&self) -> &[PillarPage] {
        &self.pillars
    }

    /// Generate cluster title ideas from the named template list.
    pub fn generate_cluster_ideas(
        &self,
        pillar_topic: &str,
        template_type: &str,
        count: usize,
    ) -> Vec<String> {
        templates::cluster_ideas(pillar_topic, template_type, count)
    }

    /// Append cluster pieces to a pillar, preserving input order. Empty
    /// slugs are backfilled from titles before appending.
    pub fn add_clusters_to_pillar(&self, pillar: &mut PillarPage, clusters: Vec<ClusterContent>) {
        for mut cluster in clusters {
            cluster.ensure_slug();
            pillar.add_cluster(cluster);
        }
    }

    /// Analyze coverage and completeness of a pillar's cluster set.
    pub fn analyze_coverage(&self, pillar: &PillarPage) -> CoverageReport {
        coverage::analyze(pillar)
    }

    /// Generate internal linking recommendations for a pillar.
    pub fn generate_linking_strategy(&self, pillar: &PillarPage) -> LinkingStrategy {
        linking::generate(pillar)
    }

    /// Export a pillar's cluster map in the requested format.
    pub fn export(&self, pillar: &PillarPage, format: ExportFormat) -> Result<String> {
        export::export(pillar, format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_pillar_appends_to_session() {
        let mut planner = ClusterPlanner::new();
        let pillar = planner.create_pillar("Coffee Guide", "coffee", "All about coffee", 3000);
        pillar.add_cluster(ClusterContent::new("Beans", "beans"));

        assert_eq!(planner.pillars().len(), 1);
        assert_eq!(planner.pillars()[0].title, "Coffee Guide");
        assert_eq!(planner.pillars()[0].url_slug, "coffee-guide");
        // Mutations through the returned handle land in the session copy.
        assert_eq!(planner.pillars()[0].cluster_count(), 1);
    }

    #[test]
    fn add_clusters_backfills_slugs_in_order() {
        let planner = ClusterPlanner::new();
        let mut pillar = PillarPage::new("Guide", "guide", "desc", 3000);

        let mut custom = ClusterContent::new("Custom", "kw");
        custom.url_slug = "keep-this".to_string();
        let mut blank: ClusterContent =
            serde_json::from_str(r#"{"title": "From Wire", "target_keyword": "wire"}"#).unwrap();
        blank.url_slug.clear();

        planner.add_clusters_to_pillar(&mut pillar, vec![custom, blank]);
        assert_eq!(pillar.clusters[0].url_slug, "keep-this");
        assert_eq!(pillar.clusters[1].url_slug, "from-wire");
    }

    #[test]
    fn planner_sessions_are_independent() {
        let mut a = ClusterPlanner::new();
        let b = ClusterPlanner::new();
        a.create_pillar("A", "a", "", 3000);
        assert_eq!(a.pillars().len(), 1);
        assert!(b.pillars().is_empty());
    }
}
