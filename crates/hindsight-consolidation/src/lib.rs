//! # hindsight-consolidation
//!
//! Keeps the corpus from growing with near-duplicates and finds structure in it:
//! insert-time dedup → merge, prior-failure detection against the failure
//! bucket, and seeded cosine k-means with per-cluster label terms.

pub mod clustering;
pub mod dedup;
pub mod failure;
pub mod merge;

pub use clustering::{ClusterEngine, ClusterInput};
pub use dedup::{DedupMerger, InsertProposal};
pub use failure::FailureDetector;
pub use merge::{merge_into, MergeReport};
