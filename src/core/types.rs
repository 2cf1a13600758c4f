//! Common type definitions used across the codebase

use serde::{Deserialize, Serialize};

/// Search intent categories, in tie-break priority order.
///
/// When two intents score equally, the one declared first wins, so the
/// variant order here is load-bearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchIntent {
    Informational,
    Navigational,
    CommercialInvestigation,
    Transactional,
}

impl SearchIntent {
    /// All intents in declaration (tie-break) order.
    pub const ALL: [SearchIntent; 4] = [
        SearchIntent::Informational,
        SearchIntent::Navigational,
        SearchIntent::CommercialInvestigation,
        SearchIntent::Transactional,
    ];

    /// Wire/display name matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchIntent::Informational => "informational",
            SearchIntent::Navigational => "navigational",
            SearchIntent::CommercialInvestigation => "commercial_investigation",
            SearchIntent::Transactional => "transactional",
        }
    }
}

impl std::fmt::Display for SearchIntent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One value per search intent, serialized as a map keyed by intent name.
///
/// Keeps intent-keyed data exhaustive and in declaration order without
/// reaching for an ordered map type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntentMap<T> {
    pub informational: T,
    pub navigational: T,
    pub commercial_investigation: T,
    pub transactional: T,
}

impl<T> IntentMap<T> {
    pub fn get(&self, intent: SearchIntent) -> &T {
        match intent {
            SearchIntent::Informational => &self.informational,
            SearchIntent::Navigational => &self.navigational,
            SearchIntent::CommercialInvestigation => &self.commercial_investigation,
            SearchIntent::Transactional => &self.transactional,
        }
    }

    pub fn get_mut(&mut self, intent: SearchIntent) -> &mut T {
        match intent {
            SearchIntent::Informational => &mut self.informational,
            SearchIntent::Navigational => &mut self.navigational,
            SearchIntent::CommercialInvestigation => &mut self.commercial_investigation,
            SearchIntent::Transactional => &mut self.transactional,
        }
    }

    /// Iterate entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (SearchIntent, &T)> {
        SearchIntent::ALL.iter().map(move |&i| (i, self.get(i)))
    }
}

/// Letter grade for an overall quality score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Grade thresholds: >=90 A, >=80 B, >=70 C, >=60 D, else F.
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            Grade::A
        } else if score >= 80.0 {
            Grade::B
        } else if score >= 70.0 {
            Grade::C
        } else if score >= 60.0 {
            Grade::D
        } else {
            Grade::F
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
