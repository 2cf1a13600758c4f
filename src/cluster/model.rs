//! Pillar and cluster entity model

use serde::{Deserialize, Serialize};

/// Lowercase the title and replace spaces with hyphens. No other
/// normalization: punctuation, unicode, and repeated hyphens pass through
/// untouched so slugs stay byte-compatible with existing content maps.
pub fn slugify(title: &str) -> String {
    title.to_lowercase().replace(' ', "-")
}

fn default_difficulty() -> String {
    "medium".to_string()
}

fn default_cluster_word_count() -> u32 {
    1500
}

fn default_content_type() -> String {
    "blog_post".to_string()
}

fn default_pillar_word_count() -> u32 {
    3000
}

/// A narrower content piece linking back to a pillar page.
///
/// `difficulty` and `content_type` are deliberately free-form strings;
/// callers may use whatever labels their workflow needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterContent {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub target_keyword: String,
    #[serde(default)]
    pub search_volume: u32,
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
    #[serde(default = "default_cluster_word_count")]
    pub word_count: u32,
    #[serde(default = "default_content_type")]
    pub content_type: String,
    #[serde(default)]
    pub url_slug: String,
}

impl ClusterContent {
    pub fn new(title: impl Into<String>, target_keyword: impl Into<String>) -> Self {
        let title = title.into();
        let url_slug = slugify(&title);
        Self {
            title,
            target_keyword: target_keyword.into(),
            search_volume: 0,
            difficulty: default_difficulty(),
            word_count: default_cluster_word_count(),
            content_type: default_content_type(),
            url_slug,
        }
    }

    /// Backfill an empty slug from the title. The slug is set once and
    /// never recomputed; later title edits do not resync it.
    pub fn ensure_slug(&mut self) {
        if self.url_slug.is_empty() {
            self.url_slug = slugify(&self.title);
        }
    }
}

/// The central, broad content piece in a hub-and-spoke architecture.
///
/// Owns its clusters exclusively, in insertion order. Clusters carry no
/// back-reference; pillar identity is passed in wherever linking is
/// computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PillarPage {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub target_keyword: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_pillar_word_count")]
    pub word_count: u32,
    #[serde(default)]
    pub url_slug: String,
    #[serde(default)]
    pub clusters: Vec<ClusterContent>,
}

impl PillarPage {
    pub fn new(
        title: impl Into<String>,
        target_keyword: impl Into<String>,
        description: impl Into<String>,
        word_count: u32,
    ) -> Self {
        let title = title.into();
        let url_slug = slugify(&title);
        Self {
            title,
            target_keyword: target_keyword.into(),
            description: description.into(),
            word_count,
            url_slug,
            clusters: Vec::new(),
        }
    }

    /// Append a cluster piece, preserving insertion order. Value
    /// duplicates are allowed.
    pub fn add_cluster(&mut self, cluster: ClusterContent) {
        self.clusters.push(cluster);
    }

    pub fn cluster_count(&self) -> usize {
        self.clusters.len()
    }

    /// Backfill empty slugs on the pillar and all clusters, for pillars
    /// reconstructed from a wire representation.
    pub fn ensure_slugs(&mut self) {
        if self.url_slug.is_empty() {
            self.url_slug = slugify(&self.title);
        }
        for cluster in &mut self.clusters {
            cluster.ensure_slug();
        }
    }
}
