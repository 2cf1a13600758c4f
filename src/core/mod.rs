//! Core types shared across the analysis engines

pub mod errors;
pub mod types;

pub use errors::{Error, Result};
pub use types::{Grade, IntentMap, SearchIntent};
