// Export modules for library usage
pub mod cli;
pub mod cluster;
pub mod commands;
pub mod core;
pub mod envelope;
pub mod intent;
pub mod io;
pub mod quality;

// Re-export commonly used types
pub use crate::core::{Error, Grade, IntentMap, Result, SearchIntent};

pub use crate::intent::{
    ContentRecommendation, IntentClassifier, IntentDistribution, IntentResult,
};

pub use crate::quality::{ContentMetadata, QualityScore, QualityScorer};

pub use crate::cluster::{
    ClusterContent, ClusterPlanner, CoverageReport, ExportFormat, LinkEdge, LinkingStrategy,
    PillarPage,
};

pub use crate::envelope::{dispatch, handle, parse_request, Request};
