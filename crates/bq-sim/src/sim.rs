//! The simulation runner and its report.

use bq_agent::AgentPool;
use bq_core::{AgentId, Build, Duration, VerifyId};
use bq_schedule::{NoopObserver, ScheduleObserver, process_queue_with};
use bq_stats::{PoolSummary, ProcessedBuild, VerifyMinutes, agent_build_stats, build_times_by_verify};

use crate::{SimBuilder, SimConfig};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// A fully resolved run: the build queue and the starting pool.
///
/// Running is pure: [`run`](Sim::run) borrows `self` and can be called any
/// number of times with the same result.  Create via [`SimBuilder`].
#[derive(Clone, Debug)]
pub struct Sim {
    pub config: SimConfig,
    pub queue:  Vec<Build>,
    pub pool:   AgentPool,
}

impl Sim {
    /// Schedule the whole queue and collect statistics.
    pub fn run<O: ScheduleObserver>(&self, observer: &mut O) -> SimReport {
        tracing::debug!(
            agents   = self.pool.len(),
            builds   = self.queue.len(),
            profile  = %self.config.profile,
            "simulation started"
        );

        let pool = process_queue_with(&self.queue, &self.pool, observer);
        let verifies = build_times_by_verify(&pool);
        let summary = PoolSummary::from_pool(&pool);

        tracing::debug!(
            verifies      = verifies.len(),
            makespan_secs = summary.makespan.as_secs(),
            busy_secs     = summary.total_busy.as_secs(),
            "simulation finished"
        );

        SimReport { config: self.config, pool, verifies, summary }
    }
}

/// Run `config` with its profile workload and a fresh pool.
pub fn simulate(config: &SimConfig) -> SimReport {
    SimBuilder::new(*config).build().run(&mut NoopObserver)
}

// ── SimReport ─────────────────────────────────────────────────────────────────

/// Everything a run produced.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimReport {
    pub config:   SimConfig,
    /// The pool after every build was assigned.
    pub pool:     AgentPool,
    /// The critical build of each verify, ascending by total time.
    pub verifies: Vec<ProcessedBuild>,
    pub summary:  PoolSummary,
}

impl SimReport {
    /// `verifies` in whole minutes, same order.
    pub fn verify_minutes(&self) -> Vec<VerifyMinutes> {
        self.verifies.iter().map(VerifyMinutes::from).collect()
    }

    /// When `verify` finished, if it was in the queue.
    pub fn verify_time(&self, verify: VerifyId) -> Option<Duration> {
        self.verifies.iter().find(|p| p.verify == verify).map(ProcessedBuild::total)
    }

    /// The verify that finished last.
    pub fn slowest_verify(&self) -> Option<&ProcessedBuild> {
        self.verifies.last()
    }

    /// Per-build timeline of one agent; `None` if it is not in the pool.
    pub fn agent_timeline(&self, agent: AgentId) -> Option<Vec<ProcessedBuild>> {
        self.pool.get(agent).map(agent_build_stats)
    }
}
