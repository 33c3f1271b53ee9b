//! FeatureExtractor: raw text → weighted term bag + domain tags.

pub mod stop_words;
pub mod tag_dictionary;
pub mod tokenizer;

use std::collections::{BTreeMap, BTreeSet};

use hindsight_core::config::ExtractionConfig;
use hindsight_core::entry::ValidatedRecord;
use hindsight_core::Entry;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use tag_dictionary::TagDictionary;

/// Extracted features of one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Features {
    /// Term → occurrence count.
    pub terms: BTreeMap<String, u32>,
    pub tags: BTreeSet<String>,
}

impl Features {
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty() && self.tags.is_empty()
    }

    /// Distinct terms.
    pub fn term_set(&self) -> BTreeSet<String> {
        self.terms.keys().cloned().collect()
    }

    /// Multiset union: per-term maximum count, tag set union.
    pub fn union(&mut self, other: &Features) {
        for (term, &count) in &other.terms {
            let slot = self.terms.entry(term.clone()).or_insert(0);
            *slot = (*slot).max(count);
        }
        self.tags.extend(other.tags.iter().cloned());
    }
}

/// Deterministic feature extractor. Consults nothing but its config and the
/// static dictionaries.
#[derive(Debug, Clone)]
pub struct FeatureExtractor {
    config: ExtractionConfig,
    tags: TagDictionary,
}

impl FeatureExtractor {
    pub fn new(config: ExtractionConfig) -> Self {
        let tags = TagDictionary::new(config.extended_tags);
        Self { config, tags }
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Extract terms and tags from free text. Empty text → empty features.
    pub fn extract(&self, text: &str) -> Features {
        let mut terms: BTreeMap<String, u32> = BTreeMap::new();
        for term in tokenizer::tokenize(text, &self.config) {
            *terms.entry(term).or_insert(0) += 1;
        }
        Features {
            terms,
            tags: self.tags.match_tags(text),
        }
    }

    /// Extract from loosely-typed input. Strings (and arrays of strings) are
    /// extracted; anything else yields empty features.
    pub fn extract_value(&self, value: &Value) -> Features {
        match value {
            Value::String(s) => self.extract(s),
            Value::Array(items) => {
                let joined = items
                    .iter()
                    .filter_map(Value::as_str)
                    .collect::<Vec<_>>()
                    .join("\n");
                self.extract(&joined)
            }
            _ => Features::default(),
        }
    }

    /// Features of a record's combined text fields.
    pub fn extract_record(&self, record: &ValidatedRecord) -> Features {
        self.extract(&record.combined_text())
    }

    /// Recompute an entry's tags and keywords from its current text fields.
    pub fn annotate(&self, entry: &mut Entry) {
        let features = self.extract(&entry.combined_text());
        entry.tags = features.tags;
        entry.keywords = features.terms;
    }
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::new(ExtractionConfig::default())
    }
}
