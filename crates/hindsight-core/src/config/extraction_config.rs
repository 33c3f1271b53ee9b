use serde::{Deserialize, Serialize};

use super::defaults;

/// Feature extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Terms shorter than this many characters are dropped.
    pub min_term_length: usize,
    /// Shortest substring taken from a run of CJK characters.
    pub cjk_ngram_min: usize,
    /// Longest substring taken from a run of CJK characters.
    pub cjk_ngram_max: usize,
    /// Also match the extended tag aliases (CJK spellings, vendor variants).
    pub extended_tags: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            min_term_length: defaults::DEFAULT_MIN_TERM_LENGTH,
            cjk_ngram_min: defaults::DEFAULT_CJK_NGRAM_MIN,
            cjk_ngram_max: defaults::DEFAULT_CJK_NGRAM_MAX,
            extended_tags: defaults::DEFAULT_EXTENDED_TAGS,
        }
    }
}
