//! Configuration system for Hindsight.
//! TOML-based, 3-layer resolution: env > file > compiled defaults.

pub mod clustering_config;
pub mod dedup_config;
pub mod defaults;
pub mod extraction_config;
pub mod failure_config;
pub mod hindsight_config;
pub mod observability_config;
pub mod retrieval_config;
pub mod similarity_config;
pub mod vectorizer_config;

pub use clustering_config::ClusteringConfig;
pub use dedup_config::DedupConfig;
pub use extraction_config::ExtractionConfig;
pub use failure_config::FailureConfig;
pub use hindsight_config::HindsightConfig;
pub use observability_config::ObservabilityConfig;
pub use retrieval_config::{RetrievalConfig, SearchWeights};
pub use similarity_config::SimilarityConfig;
pub use vectorizer_config::{IdfRefreshPolicy, VectorizerConfig};
