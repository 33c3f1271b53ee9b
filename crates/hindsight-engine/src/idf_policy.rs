//! When to rebuild the IDF table.

use hindsight_core::config::IdfRefreshPolicy;

/// Counts corpus changes since the last IDF rebuild and applies the policy.
#[derive(Debug, Clone)]
pub struct IdfScheduler {
    policy: IdfRefreshPolicy,
    pending: usize,
}

impl IdfScheduler {
    pub fn new(policy: IdfRefreshPolicy) -> Self {
        Self { policy, pending: 0 }
    }

    pub fn policy(&self) -> IdfRefreshPolicy {
        self.policy
    }

    /// Inserts and merges not yet reflected in the IDF table.
    pub fn pending(&self) -> usize {
        self.pending
    }

    /// Note one insert or merge. Returns true when the policy wants a rebuild now.
    pub fn note_change(&mut self) -> bool {
        self.pending += 1;
        match self.policy {
            IdfRefreshPolicy::EachInsert => true,
            IdfRefreshPolicy::BatchOnly { batch_size } => self.pending >= batch_size,
            IdfRefreshPolicy::Manual => false,
        }
    }

    pub fn reset(&mut self) {
        self.pending = 0;
    }
}
