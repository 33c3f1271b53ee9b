//! # hindsight-engine
//!
//! The [`ExperienceEngine`] facade over extraction, retrieval, consolidation
//! and observability, plus [`SharedEngine`] for single-writer / many-reader
//! access across threads.
//!
//! ```no_run
//! use hindsight_core::{Category, HindsightConfig, RecordRequest};
//! use hindsight_engine::ExperienceEngine;
//!
//! let mut engine = ExperienceEngine::new(HindsightConfig::default())?;
//! engine.record_entry(RecordRequest::new(
//!     Category::Bugfix,
//!     "PM2 startup failure",
//!     "PM2 cannot start, module type error",
//!     "rename to .cjs, use CommonJS",
//!     "",
//! ))?;
//! let hits = engine.find_solution("pm2 module error", None, None)?;
//! # Ok::<(), hindsight_core::HindsightError>(())
//! ```

pub mod engine;
pub mod idf_policy;
pub mod shared;
pub mod snapshot;

pub use engine::ExperienceEngine;
pub use idf_policy::IdfScheduler;
pub use shared::SharedEngine;
