pub mod cluster;
pub mod engine_stats;
pub mod failure_check;
pub mod record_outcome;
pub mod search_hit;
pub mod snapshot;

pub use cluster::Cluster;
pub use engine_stats::EngineStats;
pub use failure_check::FailureCheck;
pub use record_outcome::RecordOutcome;
pub use search_hit::{ScoreBreakdown, SearchHit};
pub use snapshot::{IdfSnapshot, Snapshot};
