use serde::{Deserialize, Serialize};

use crate::entry::Entry;

/// Per-signal contributions behind a search score, each in [0, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub keyword: f64,
    pub tag: f64,
    pub title: f64,
    pub cosine: f64,
}

/// One ranked search result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    pub entry: Entry,
    /// Blended score in [0, 1].
    pub score: f64,
    pub breakdown: ScoreBreakdown,
}
