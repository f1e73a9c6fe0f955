//! Pool-level summaries for reporting.
//!
//! [`PoolSummary`] condenses a finished pool into per-agent totals and the
//! makespan.  [`VerifyMinutes`] is the whole-minute view of a verify's
//! critical build that charts and tables consume.

use bq_agent::AgentPool;
use bq_core::{AgentId, Duration, VerifyId};

use crate::{ProcessedBuild, agent_total_time};

/// One agent's share of the work.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentLoad {
    pub agent:  AgentId,
    /// Total busy time.
    pub busy:   Duration,
    pub builds: usize,
    /// Time this agent sits idle while the busiest agent is still working.
    pub idle:   Duration,
}

/// Per-agent totals and the overall makespan of a finished pool.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolSummary {
    /// One entry per agent, in ascending id order.
    pub agents:     Vec<AgentLoad>,
    /// Busy time of the busiest agent: when the last build finishes.
    pub makespan:   Duration,
    /// Sum of every agent's busy time.
    pub total_busy: Duration,
}

impl PoolSummary {
    pub fn from_pool(pool: &AgentPool) -> Self {
        let totals: Vec<(AgentId, Duration, usize)> = pool
            .iter()
            .map(|a| (a.id(), agent_total_time(a), a.build_count()))
            .collect();

        let makespan = totals.iter().map(|&(_, busy, _)| busy).max().unwrap_or_default();
        let total_busy = totals.iter().map(|&(_, busy, _)| busy).sum();

        let agents = totals
            .into_iter()
            .map(|(agent, busy, builds)| AgentLoad {
                agent,
                busy,
                builds,
                idle: makespan.saturating_sub(busy),
            })
            .collect();

        Self { agents, makespan, total_busy }
    }

    /// Fraction of `agents × makespan` spent building, in `[0.0, 1.0]`.
    ///
    /// An all-idle pool reports `0.0`.
    pub fn utilization(&self) -> f64 {
        let capacity = self.makespan.as_secs() as f64 * self.agents.len() as f64;
        if capacity == 0.0 {
            0.0
        } else {
            self.total_busy.as_secs() as f64 / capacity
        }
    }

    /// The agent with the largest busy time; the lowest id among equals.
    pub fn busiest(&self) -> Option<&AgentLoad> {
        self.agents.iter().rev().max_by_key(|a| a.busy)
    }

    pub fn load_of(&self, agent: AgentId) -> Option<&AgentLoad> {
        self.agents.iter().find(|a| a.agent == agent)
    }
}

/// A verify's critical build in whole minutes (truncating).
///
/// `total_minutes` truncates the exact total, so it can exceed
/// `queue_minutes + build_minutes` by one.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VerifyMinutes {
    pub verify:        VerifyId,
    pub queue_minutes: u64,
    pub build_minutes: u64,
    pub total_minutes: u64,
}

impl From<&ProcessedBuild> for VerifyMinutes {
    fn from(p: &ProcessedBuild) -> Self {
        Self {
            verify:        p.verify,
            queue_minutes: p.queue_time.as_minutes(),
            build_minutes: p.build_time.as_minutes(),
            total_minutes: p.total().as_minutes(),
        }
    }
}
