use dashmap::DashSet;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::Notify;

/// Fulfillment state shared across views.
///
/// The tracker task writes, any view reads; `notify` wakes views that want
/// to re-render after a recompute. Derived sets other than this one (grouped
/// tickets, availability counts) stay per-view.
#[derive(Clone, Debug)]
pub struct Shared {
    pub fulfilled: Arc<DashSet<i64>>,
    pub notify: Arc<Notify>,
}

impl Shared {
    pub fn new() -> Self {
        Self {
            fulfilled: Arc::new(DashSet::new()),
            notify: Arc::new(Notify::new()),
        }
    }

    /// Flag a request fulfilled. Returns false if it already was.
    pub fn mark_fulfilled(&self, request_id: i64) -> bool {
        self.fulfilled.insert(request_id)
    }

    pub fn is_fulfilled(&self, request_id: i64) -> bool {
        self.fulfilled.contains(&request_id)
    }

    /// Swap in a freshly recomputed fulfilled set.
    pub fn replace_fulfilled(&self, fulfilled: HashSet<i64>) {
        self.fulfilled.clear();
        for id in fulfilled {
            self.fulfilled.insert(id);
        }
    }

    pub fn fulfilled_ids(&self) -> HashSet<i64> {
        self.fulfilled.iter().map(|id| *id).collect()
    }
}

impl Default for Shared {
    fn default() -> Self {
        Self::new()
    }
}
