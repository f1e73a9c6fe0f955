//! Per-agent build timelines.
//!
//! An agent runs its builds back to back from time zero, so each build's
//! start is the sum of every earlier build on the same agent.

use bq_agent::Agent;
use bq_core::{AgentId, Build, Duration, VerifyId};

/// One build placed on its agent's timeline.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProcessedBuild {
    pub verify:     VerifyId,
    /// Agent the build ran on.
    pub agent:      AgentId,
    /// Time spent waiting behind earlier builds on the same agent.
    pub queue_time: Duration,
    /// The build's own duration.
    pub build_time: Duration,
}

impl ProcessedBuild {
    /// Finish time relative to the agent's start.
    #[inline]
    pub fn total(&self) -> Duration {
        self.queue_time + self.build_time
    }
}

/// Sum of every build's duration on `agent`, in assignment order.
///
/// Equal to [`Agent::busy_time`]; computed from the build list rather than the
/// cached total.
pub fn agent_total_time(agent: &Agent) -> Duration {
    agent.builds().iter().map(Build::duration).sum()
}

/// One [`ProcessedBuild`] per build on `agent`, in assignment order.
pub fn agent_build_stats(agent: &Agent) -> Vec<ProcessedBuild> {
    let mut elapsed = Duration::ZERO;
    agent
        .builds()
        .iter()
        .map(|build| {
            let processed = ProcessedBuild {
                verify:     build.verify(),
                agent:      agent.id(),
                queue_time: elapsed,
                build_time: build.duration(),
            };
            elapsed += build.duration();
            processed
        })
        .collect()
}
