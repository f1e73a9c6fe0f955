//! Scheduler observer trait for progress reporting and verification hooks.

use bq_agent::AgentPool;
use bq_core::{AgentId, Build};

/// Callbacks invoked by [`process_queue_with`][crate::process_queue_with] at
/// key points of a scheduling run.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: assignment counter
///
/// ```rust
/// use bq_agent::AgentPool;
/// use bq_core::{AgentId, Build};
/// use bq_schedule::ScheduleObserver;
///
/// #[derive(Default)]
/// struct Counter { per_agent: std::collections::BTreeMap<AgentId, usize> }
///
/// impl ScheduleObserver for Counter {
///     fn on_assign(&mut self, _step: usize, _build: &Build, agent: AgentId, _pool: &AgentPool) {
///         *self.per_agent.entry(agent).or_default() += 1;
///     }
/// }
/// ```
pub trait ScheduleObserver {
    /// Called once before the first build is taken from the queue.
    fn on_run_start(&mut self, _queue_len: usize, _agent_count: usize) {}

    /// Called for every build just before it is appended to `agent`.
    ///
    /// `pool` is the state *before* this assignment, so `pool.get(agent)`
    /// still reports the pre-assignment busy time.
    fn on_assign(&mut self, _step: usize, _build: &Build, _agent: AgentId, _pool: &AgentPool) {}

    /// Called once with the final pool after the queue is exhausted.
    fn on_run_end(&mut self, _pool: &AgentPool) {}
}

/// A [`ScheduleObserver`] that does nothing.
pub struct NoopObserver;

impl ScheduleObserver for NoopObserver {}

/// Forwards every assignment to `tracing` at `TRACE` level.
///
/// Installs nothing itself; events only appear if the application has a
/// subscriber.
pub struct TracingObserver;

impl ScheduleObserver for TracingObserver {
    fn on_run_start(&mut self, queue_len: usize, agent_count: usize) {
        tracing::trace!(queue_len, agent_count, "scheduling run started");
    }

    fn on_assign(&mut self, step: usize, build: &Build, agent: AgentId, pool: &AgentPool) {
        let queued_behind = pool.get(agent).map(|a| a.busy_time().as_secs()).unwrap_or_default();
        tracing::trace!(
            step,
            verify = build.verify().get(),
            duration_secs = build.duration().as_secs(),
            agent = agent.get(),
            queued_behind_secs = queued_behind,
            "build assigned"
        );
    }

    fn on_run_end(&mut self, pool: &AgentPool) {
        tracing::trace!(builds = pool.build_count(), "scheduling run finished");
    }
}
