//! A single build agent.
//!
//! An agent executes its builds sequentially, in the order they were
//! assigned.  The build list only ever grows: the scheduler appends, nothing
//! reorders or removes.  The running busy-time total is cached next to the
//! list so the scheduler's least-loaded lookup never re-sums it.

use bq_core::{AgentId, Build, Duration};

/// One worker and the builds assigned to it so far.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "repr::AgentRecord", into = "repr::AgentRecord"))]
pub struct Agent {
    id:     AgentId,
    builds: Vec<Build>,
    /// Always equals the sum of `builds[..].duration()`.
    busy:   Duration,
}

impl Agent {
    /// An idle agent with no builds.
    pub fn new(id: AgentId) -> Self {
        Self { id, builds: Vec::new(), busy: Duration::ZERO }
    }

    /// An agent that already holds `builds`, in that order.
    pub fn with_builds(id: AgentId, builds: Vec<Build>) -> Self {
        let busy = builds.iter().map(Build::duration).sum();
        Self { id, builds, busy }
    }

    #[inline]
    pub fn id(&self) -> AgentId {
        self.id
    }

    /// Assigned builds in assignment order.
    #[inline]
    pub fn builds(&self) -> &[Build] {
        &self.builds
    }

    /// Sum of the durations of every assigned build.
    #[inline]
    pub fn busy_time(&self) -> Duration {
        self.busy
    }

    pub fn build_count(&self) -> usize {
        self.builds.len()
    }

    pub fn is_idle(&self) -> bool {
        self.builds.is_empty()
    }

    /// Append `build` to the end of this agent's list.
    pub(crate) fn push(&mut self, build: Build) {
        self.busy += build.duration();
        self.builds.push(build);
    }
}

// ── Serde representation ──────────────────────────────────────────────────────

#[cfg(feature = "serde")]
mod repr {
    use bq_core::{AgentId, BqError, Build};

    use super::Agent;

    /// Wire shape of an [`Agent`]; the cached total is recomputed on the way in.
    #[derive(serde::Serialize, serde::Deserialize)]
    pub(super) struct AgentRecord {
        id:     AgentId,
        builds: Vec<Build>,
    }

    impl TryFrom<AgentRecord> for Agent {
        type Error = BqError;

        fn try_from(record: AgentRecord) -> Result<Self, BqError> {
            if !record.id.is_valid() {
                return Err(BqError::InvalidAgentId(record.id));
            }
            Ok(Agent::with_builds(record.id, record.builds))
        }
    }

    impl From<Agent> for AgentRecord {
        fn from(agent: Agent) -> Self {
            AgentRecord { id: agent.id, builds: agent.builds }
        }
    }
}
