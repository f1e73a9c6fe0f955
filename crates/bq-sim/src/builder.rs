//! Fluent builder for constructing a [`Sim`].

use bq_agent::AgentPool;
use bq_core::Build;
use bq_workload::WorkloadSource;

use crate::{Sim, SimConfig};

/// Fluent builder for [`Sim`].
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                                          |
/// |-----------------|--------------------------------------------------|
/// | `.queue(v)`     | `config.workload().builds()`                     |
/// | `.workload(w)`  | same as above                                    |
/// | `.pool(p)`      | `config.pool()`: `agent_count` idle agents       |
///
/// # Example
///
/// ```rust
/// use bq_agent::AgentPool;
/// use bq_core::{Build, Duration, VerifyId};
/// use bq_schedule::NoopObserver;
/// use bq_sim::{SimBuilder, SimConfig};
///
/// let queue = vec![Build::new(VerifyId(1), Duration(5)), Build::new(VerifyId(1), Duration(3))];
/// let sim = SimBuilder::new(SimConfig::default())
///     .queue(queue)
///     .pool(AgentPool::single())
///     .build();
/// let report = sim.run(&mut NoopObserver);
/// assert_eq!(report.summary.makespan, Duration(8));
/// ```
pub struct SimBuilder {
    config: SimConfig,
    queue:  Option<Vec<Build>>,
    pool:   Option<AgentPool>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self { config, queue: None, pool: None }
    }

    /// Use an explicit queue instead of the configured profile workload.
    ///
    /// `verify_count` and `profile` are then ignored.
    pub fn queue(mut self, queue: Vec<Build>) -> Self {
        self.queue = Some(queue);
        self
    }

    /// Take the queue from any [`WorkloadSource`].
    pub fn workload<W: WorkloadSource>(self, source: W) -> Self {
        self.queue(source.builds())
    }

    /// Start from `pool` (possibly pre-loaded) instead of `agent_count` idle agents.
    pub fn pool(mut self, pool: AgentPool) -> Self {
        self.pool = Some(pool);
        self
    }

    /// Resolve defaults and return a ready-to-run [`Sim`].
    pub fn build(self) -> Sim {
        let queue = self.queue.unwrap_or_else(|| self.config.workload().builds());
        let pool = self.pool.unwrap_or_else(|| self.config.pool());
        Sim { config: self.config, queue, pool }
    }
}
