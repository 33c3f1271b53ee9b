//! Top-level Hindsight configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    ClusteringConfig, DedupConfig, ExtractionConfig, FailureConfig, IdfRefreshPolicy,
    ObservabilityConfig, RetrievalConfig, SimilarityConfig, VectorizerConfig,
};
use crate::constants::MAX_CLUSTER_ITERATIONS;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`HINDSIGHT_*`)
/// 2. TOML file passed to [`HindsightConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HindsightConfig {
    pub extraction: ExtractionConfig,
    pub vectorizer: VectorizerConfig,
    pub similarity: SimilarityConfig,
    pub retrieval: RetrievalConfig,
    pub dedup: DedupConfig,
    pub failure: FailureConfig,
    pub clustering: ClusteringConfig,
    pub observability: ObservabilityConfig,
}

impl HindsightConfig {
    /// Load configuration from an optional TOML file, then apply env overrides
    /// and validate. A missing file means compiled defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
            toml::from_str(&raw).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?
        } else {
            Self::default()
        };

        Self::apply_env_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string. Unset fields keep defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let unit_fields = [
            ("similarity.partial_match_weight", self.similarity.partial_match_weight),
            ("retrieval.default_min_score", self.retrieval.default_min_score),
            ("retrieval.weights.keyword", self.retrieval.weights.keyword),
            ("retrieval.weights.tag", self.retrieval.weights.tag),
            ("retrieval.weights.title", self.retrieval.weights.title),
            ("retrieval.weights.cosine", self.retrieval.weights.cosine),
            ("dedup.merge_threshold", self.dedup.merge_threshold),
            ("dedup.substring_weight", self.dedup.substring_weight),
            ("dedup.jaccard_weight", self.dedup.jaccard_weight),
            ("failure.threshold", self.failure.threshold),
            ("failure.context_threshold", self.failure.context_threshold),
        ];
        for (field, value) in unit_fields {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid(field, "must be between 0.0 and 1.0"));
            }
        }

        if self.retrieval.weights.total() <= 0.0 {
            return Err(invalid("retrieval.weights", "at least one weight must be positive"));
        }
        if self.dedup.substring_weight + self.dedup.jaccard_weight <= 0.0 {
            return Err(invalid("dedup", "at least one blend weight must be positive"));
        }
        if self.retrieval.default_top_k == 0 {
            return Err(invalid("retrieval.default_top_k", "must be greater than 0"));
        }
        if self.extraction.min_term_length == 0 {
            return Err(invalid("extraction.min_term_length", "must be greater than 0"));
        }
        if self.extraction.cjk_ngram_min == 0
            || self.extraction.cjk_ngram_min > self.extraction.cjk_ngram_max
        {
            return Err(invalid(
                "extraction.cjk_ngram_min",
                "must be at least 1 and not above cjk_ngram_max",
            ));
        }
        if let IdfRefreshPolicy::BatchOnly { batch_size: 0 } = self.vectorizer.idf_refresh {
            return Err(invalid("vectorizer.idf_refresh.batch_size", "must be greater than 0"));
        }
        if self.clustering.max_iterations == 0
            || self.clustering.max_iterations > MAX_CLUSTER_ITERATIONS
        {
            return Err(invalid(
                "clustering.max_iterations",
                &format!("must be between 1 and {MAX_CLUSTER_ITERATIONS}"),
            ));
        }
        Ok(())
    }

    /// Apply `HINDSIGHT_*` environment variables. Unparseable values are ignored.
    fn apply_env_overrides(config: &mut HindsightConfig) {
        if let Some(v) = env_parse::<usize>("HINDSIGHT_MIN_TERM_LENGTH") {
            config.extraction.min_term_length = v;
        }
        if let Some(v) = env_parse::<bool>("HINDSIGHT_USE_IDF") {
            config.vectorizer.use_idf = v;
        }
        if let Some(v) = env_parse::<usize>("HINDSIGHT_TOP_K") {
            config.retrieval.default_top_k = v;
        }
        if let Some(v) = env_parse::<f64>("HINDSIGHT_MIN_SCORE") {
            config.retrieval.default_min_score = v;
        }
        if let Some(v) = env_parse::<f64>("HINDSIGHT_MERGE_THRESHOLD") {
            config.dedup.merge_threshold = v;
        }
        if let Some(v) = env_parse::<f64>("HINDSIGHT_FAILURE_THRESHOLD") {
            config.failure.threshold = v;
        }
        if let Some(v) = env_parse::<usize>("HINDSIGHT_CLUSTER_MAX_ITERATIONS") {
            config.clustering.max_iterations = v;
        }
        if let Some(v) = env_parse::<u64>("HINDSIGHT_CLUSTER_SEED") {
            config.clustering.seed = v;
        }
        if let Ok(v) = std::env::var("HINDSIGHT_LOG_LEVEL") {
            config.observability.log_level = v;
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}
