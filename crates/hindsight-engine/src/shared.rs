//! SharedEngine: single writer, many readers over one ExperienceEngine.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use hindsight_core::errors::{HindsightError, HindsightResult};
use hindsight_core::models::{Cluster, EngineStats, FailureCheck, RecordOutcome, SearchHit, Snapshot};
use hindsight_core::{Entry, RecordRequest};
use hindsight_observability::MetricsCollector;

use crate::ExperienceEngine;

/// Cloneable handle. Operations that change the corpus (search included,
/// since it bumps usage counts) take the write lock; lookups, exports,
/// prior-failure checks and pairwise similarity take the read lock.
#[derive(Clone)]
pub struct SharedEngine {
    inner: Arc<RwLock<ExperienceEngine>>,
}

impl SharedEngine {
    pub fn new(engine: ExperienceEngine) -> Self {
        Self {
            inner: Arc::new(RwLock::new(engine)),
        }
    }

    fn read(&self) -> HindsightResult<RwLockReadGuard<'_, ExperienceEngine>> {
        self.inner
            .read()
            .map_err(|e| HindsightError::Concurrency(format!("engine lock poisoned: {e}")))
    }

    fn write(&self) -> HindsightResult<RwLockWriteGuard<'_, ExperienceEngine>> {
        self.inner
            .write()
            .map_err(|e| HindsightError::Concurrency(format!("engine lock poisoned: {e}")))
    }

    pub fn record_entry(&self, request: RecordRequest) -> HindsightResult<RecordOutcome> {
        self.write()?.record_entry(request)
    }

    pub fn find_solution(
        &self,
        problem: &str,
        min_score: Option<f64>,
        top_k: Option<usize>,
    ) -> HindsightResult<Vec<SearchHit>> {
        self.write()?.find_solution(problem, min_score, top_k)
    }

    pub fn check_prior_failure(
        &self,
        solution: &str,
        context: &str,
        threshold: Option<f64>,
    ) -> HindsightResult<FailureCheck> {
        self.read()?.check_prior_failure(solution, context, threshold)
    }

    pub fn cluster(&self, k: usize) -> HindsightResult<Vec<Cluster>> {
        self.write()?.cluster(k)
    }

    pub fn recompute_idf(&self) -> HindsightResult<()> {
        self.write()?.recompute_idf();
        Ok(())
    }

    pub fn export_snapshot(&self) -> HindsightResult<Snapshot> {
        Ok(self.read()?.export_snapshot())
    }

    pub fn import_snapshot(&self, snapshot: Snapshot) -> HindsightResult<()> {
        self.write()?.import_snapshot(snapshot)
    }

    /// Cloned so the read lock is not held by the caller.
    pub fn get_entry(&self, id: &str) -> HindsightResult<Option<Entry>> {
        Ok(self.read()?.get_entry(id).cloned())
    }

    pub fn similarity(&self, a: &str, b: &str) -> HindsightResult<f64> {
        Ok(self.read()?.similarity(a, b))
    }

    pub fn stats(&self) -> HindsightResult<EngineStats> {
        Ok(self.read()?.stats())
    }

    pub fn metrics(&self) -> HindsightResult<MetricsCollector> {
        Ok(self.read()?.metrics())
    }

    /// Run `f` with shared access to the engine.
    pub fn with_read<T>(&self, f: impl FnOnce(&ExperienceEngine) -> T) -> HindsightResult<T> {
        Ok(f(&*self.read()?))
    }
}

impl From<ExperienceEngine> for SharedEngine {
    fn from(engine: ExperienceEngine) -> Self {
        Self::new(engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hindsight_core::{Category, HindsightConfig};

    #[test]
    fn poisoned_lock_maps_to_concurrency_error() {
        let shared = SharedEngine::new(ExperienceEngine::new(HindsightConfig::default()).unwrap());
        let clone = shared.clone();
        let _ = std::thread::spawn(move || {
            let _guard = clone.inner.write().unwrap();
            panic!("poison the lock");
        })
        .join();

        let err = shared.stats().unwrap_err();
        assert!(matches!(err, HindsightError::Concurrency(_)));
        assert!(shared
            .record_entry(RecordRequest::new(Category::Tool, "t", "p", "s", ""))
            .is_err());
    }
}
