//! `LoadQueue`: agents ordered by how busy they are.
//!
//! # Why this exists
//!
//! Finding the least-loaded agent by scanning (or sorting) the whole pool for
//! every build costs O(agents) per build.  `LoadQueue` keeps one entry per
//! agent in a `BTreeSet` ordered by `(busy, agent)`, so the least-loaded,
//! lowest-id agent is always the first element: O(log agents) to take it out
//! and O(log agents) to put it back with its new load.
//!
//! Ordering by `(busy, agent)` is exactly what a stable sort by busy time over
//! the pool's id-ordered agents would produce, so the tie-break is identical.

use std::collections::BTreeSet;

use bq_agent::AgentPool;
use bq_core::{AgentId, Duration};

/// One agent's position in the load ordering.
///
/// Field order is the sort order: `busy` first, then `agent`.  `slot` is the
/// agent's index in the pool and never decides an ordering on its own because
/// slots follow id order.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct LoadEntry {
    pub busy:  Duration,
    pub agent: AgentId,
    pub slot:  usize,
}

/// A min-ordered set of agent loads.
#[derive(Clone, Debug, Default)]
pub struct LoadQueue {
    inner: BTreeSet<LoadEntry>,
}

impl LoadQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// One entry per agent, keyed by its current busy time.
    pub fn from_pool(pool: &AgentPool) -> Self {
        let inner = pool
            .iter()
            .enumerate()
            .map(|(slot, agent)| LoadEntry { busy: agent.busy_time(), agent: agent.id(), slot })
            .collect();
        Self { inner }
    }

    pub fn push(&mut self, entry: LoadEntry) {
        self.inner.insert(entry);
    }

    /// Remove and return the least-loaded agent (lowest id among equals).
    pub fn pop_least_loaded(&mut self) -> Option<LoadEntry> {
        self.inner.pop_first()
    }

    /// The entry [`pop_least_loaded`](Self::pop_least_loaded) would return.
    pub fn peek(&self) -> Option<&LoadEntry> {
        self.inner.first()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
