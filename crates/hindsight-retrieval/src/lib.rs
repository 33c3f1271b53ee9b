//! # hindsight-retrieval
//!
//! The in-memory corpus index and query ranking.
//!
//! - [`RetrievalIndex`]: entries in insertion order, an id → position map and
//!   a per-entry vector cache that is refreshed lazily when the shared vector
//!   space moves on.
//! - [`QueryScorer`]: keyword / tag / title overlap plus optional cosine,
//!   blended with configurable weights.

pub mod index;
pub mod ranking;

pub use index::RetrievalIndex;
pub use ranking::scorer::{PreparedQuery, QueryScorer};
