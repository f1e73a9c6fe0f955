//! The greedy scheduling loop.

use bq_agent::{Agent, AgentPool};
use bq_core::Build;

use crate::{LoadEntry, LoadQueue, NoopObserver, ScheduleObserver};

/// Assign every build in `queue` to the least-loaded agent, in queue order.
///
/// Returns a new pool; `pool` itself is left untouched.  An empty queue
/// returns a pool equal to the input.
pub fn process_queue(queue: &[Build], pool: &AgentPool) -> AgentPool {
    process_queue_with(queue, pool, &mut NoopObserver)
}

/// Like [`process_queue`], calling `observer` hooks along the way.
pub fn process_queue_with<O: ScheduleObserver>(
    queue:    &[Build],
    pool:     &AgentPool,
    observer: &mut O,
) -> AgentPool {
    let mut pool = pool.clone();
    observer.on_run_start(queue.len(), pool.len());

    let mut loads = LoadQueue::from_pool(&pool);

    for (step, &build) in queue.iter().enumerate() {
        // One entry per agent is always in the set between iterations, and
        // the pool is never empty.
        let Some(least) = loads.pop_least_loaded() else {
            break;
        };

        observer.on_assign(step, &build, least.agent, &pool);
        pool.assign(least.slot, build);

        loads.push(LoadEntry { busy: least.busy + build.duration(), ..least });
    }

    tracing::debug!(
        builds = queue.len(),
        agents = pool.len(),
        makespan_secs = makespan_secs(&pool),
        "build queue processed"
    );

    observer.on_run_end(&pool);
    pool
}

/// The agent the next build would go to: minimum busy time, first in id
/// order among equals.
///
/// This is the direct "stable sort by busy time, take the first" formulation.
/// [`process_queue`] gets the same answer from a [`LoadQueue`] without
/// rescanning the pool every step.
pub fn least_loaded(pool: &AgentPool) -> &Agent {
    // `min_by_key` returns the first of several equal minima.
    pool.iter().min_by_key(|a| a.busy_time()).unwrap_or_else(|| pool.first())
}

fn makespan_secs(pool: &AgentPool) -> u64 {
    pool.iter().map(|a| a.busy_time().as_secs()).max().unwrap_or_default()
}
