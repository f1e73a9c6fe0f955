//! Fluent builder for an [`AgentPool`] of numbered, idle agents.
//!
//! # Usage
//!
//! ```rust
//! use bq_agent::AgentPoolBuilder;
//! use bq_core::AgentId;
//!
//! let pool = AgentPoolBuilder::new(3).build();
//! assert_eq!(pool.ids().collect::<Vec<_>>(), [AgentId(1), AgentId(2), AgentId(3)]);
//!
//! // The first agent exists whatever the configured size.
//! assert_eq!(AgentPoolBuilder::new(0).build().len(), 1);
//! ```

use bq_core::AgentId;

use crate::{Agent, AgentPool};

/// Builds a pool whose agents are numbered `1..=count`.
pub struct AgentPoolBuilder {
    count: u32,
}

impl AgentPoolBuilder {
    /// A builder for `count` agents.  A count of 0 is treated as 1: the first
    /// agent is always part of the pool.
    pub fn new(count: u32) -> Self {
        Self { count }
    }

    /// Number of agents [`build`](Self::build) will produce.
    pub fn agent_count(&self) -> u32 {
        self.count.max(1)
    }

    /// Construct the pool.  Every agent starts idle.
    pub fn build(self) -> AgentPool {
        let agents = (1..=self.agent_count()).map(|n| Agent::new(AgentId(n))).collect();
        // Ids are 1..=N: sorted, unique and non-zero by construction.
        AgentPool::from_sorted(agents)
    }
}
