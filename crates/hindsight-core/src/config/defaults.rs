//! Compiled defaults for every configuration section.

// Extraction
pub const DEFAULT_MIN_TERM_LENGTH: usize = 2;
pub const DEFAULT_CJK_NGRAM_MIN: usize = 2;
pub const DEFAULT_CJK_NGRAM_MAX: usize = 4;
pub const DEFAULT_EXTENDED_TAGS: bool = true;

// Vectorizer
pub const DEFAULT_USE_IDF: bool = true;
pub const DEFAULT_IDF_BATCH_SIZE: usize = 16;

// Similarity
pub const DEFAULT_PARTIAL_MATCH_WEIGHT: f64 = 0.7;

// Retrieval
pub const DEFAULT_TOP_K: usize = 10;
pub const DEFAULT_MIN_SCORE: f64 = 0.3;
pub const DEFAULT_KEYWORD_WEIGHT: f64 = 0.4;
pub const DEFAULT_TAG_WEIGHT: f64 = 0.4;
pub const DEFAULT_TITLE_WEIGHT: f64 = 0.2;
pub const DEFAULT_COSINE_WEIGHT: f64 = 0.0;
pub const DEFAULT_QUERY_EXPANSION: bool = false;

// Dedup
pub const DEFAULT_MERGE_THRESHOLD: f64 = 0.75;
pub const DEFAULT_DEDUP_SUBSTRING_WEIGHT: f64 = 0.6;
pub const DEFAULT_DEDUP_JACCARD_WEIGHT: f64 = 0.4;
pub const DEFAULT_EXACT_HASH_FAST_PATH: bool = true;

// Failure check
pub const DEFAULT_FAILURE_THRESHOLD: f64 = 0.7;
pub const DEFAULT_FAILURE_CONTEXT_THRESHOLD: f64 = 0.5;
pub const DEFAULT_REQUIRE_CONTEXT_MATCH: bool = true;

// Clustering
pub const DEFAULT_CLUSTER_MAX_ITERATIONS: usize = 100;
pub const DEFAULT_CLUSTER_SEED: u64 = 42;
pub const DEFAULT_CLUSTER_LABEL_TERMS: usize = 3;

// Observability
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
pub const DEFAULT_QUERY_LOG_CAPACITY: usize = 1_000;
