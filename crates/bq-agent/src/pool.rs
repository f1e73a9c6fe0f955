//! `AgentPool`: the non-empty, id-ordered set of agents.
//!
//! # Invariants
//!
//! - At least one agent is always present.  The constructor takes the head
//!   agent separately from the rest, so an empty pool cannot be expressed.
//! - Agent ids are unique and non-zero.
//! - Agents are stored in ascending id order.  Every iteration over the pool
//!   (and therefore every tie-break in the scheduler) sees the lowest id first.
//!
//! Storage is a plain `Vec` addressed by *slot* (position in id order).  The
//! scheduler works on an owned clone and updates one slot per build, which is
//! the index-addressed equivalent of "replace the agent with this id".

use bq_core::{AgentId, BqError, BqResult, Build, Duration};

use crate::Agent;

/// A non-empty collection of agents with pairwise-unique ids.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Agent>", into = "Vec<Agent>"))]
pub struct AgentPool {
    agents: Vec<Agent>,
}

#[allow(clippy::len_without_is_empty)]
impl AgentPool {
    /// Build a pool from a head agent plus any number of further agents.
    ///
    /// Agents may be given in any order; the pool re-sorts them by id.
    /// Fails on a duplicate or zero id.
    pub fn new(first: Agent, rest: Vec<Agent>) -> BqResult<Self> {
        let mut agents = Vec::with_capacity(rest.len() + 1);
        agents.push(first);
        agents.extend(rest);
        agents.sort_by_key(Agent::id);

        if let Some(bad) = agents.iter().find(|a| !a.id().is_valid()) {
            return Err(BqError::InvalidAgentId(bad.id()));
        }
        if let Some(dup) = agents.windows(2).find(|w| w[0].id() == w[1].id()) {
            return Err(BqError::DuplicateAgent(dup[0].id()));
        }
        Ok(Self { agents })
    }

    /// Package-private constructor used by [`AgentPoolBuilder`][crate::AgentPoolBuilder].
    ///
    /// Caller guarantees `agents` is non-empty, id-sorted and duplicate-free.
    pub(crate) fn from_sorted(agents: Vec<Agent>) -> Self {
        debug_assert!(!agents.is_empty());
        debug_assert!(agents.windows(2).all(|w| w[0].id() < w[1].id()));
        Self { agents }
    }

    /// A pool holding only the idle first agent.
    pub fn single() -> Self {
        Self { agents: vec![Agent::new(AgentId::FIRST)] }
    }

    /// The lowest-id agent.  Always present.
    #[inline]
    pub fn first(&self) -> &Agent {
        &self.agents[0]
    }

    /// All agents in ascending id order.
    #[inline]
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Agent> {
        self.agents.iter()
    }

    /// Number of agents.  Never zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Iterator over all `AgentId`s in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.agents.iter().map(Agent::id)
    }

    /// Slot (position in id order) of agent `id`, if present.
    pub fn slot_of(&self, id: AgentId) -> Option<usize> {
        self.agents.binary_search_by_key(&id, Agent::id).ok()
    }

    pub fn get(&self, id: AgentId) -> Option<&Agent> {
        self.slot_of(id).map(|slot| &self.agents[slot])
    }

    /// The agent stored at `slot`.
    ///
    /// # Panics
    /// Panics if `slot >= self.len()`.
    #[inline]
    pub fn at(&self, slot: usize) -> &Agent {
        &self.agents[slot]
    }

    /// Append `build` to the agent at `slot`; every other agent is untouched.
    ///
    /// # Panics
    /// Panics if `slot >= self.len()`.
    pub fn assign(&mut self, slot: usize, build: Build) {
        self.agents[slot].push(build);
    }

    /// Sum of every agent's busy time.
    pub fn total_busy_time(&self) -> Duration {
        self.agents.iter().map(Agent::busy_time).sum()
    }

    /// Total number of builds held across all agents.
    pub fn build_count(&self) -> usize {
        self.agents.iter().map(Agent::build_count).sum()
    }
}

impl<'a> IntoIterator for &'a AgentPool {
    type Item = &'a Agent;
    type IntoIter = std::slice::Iter<'a, Agent>;

    fn into_iter(self) -> Self::IntoIter {
        self.agents.iter()
    }
}

impl TryFrom<Vec<Agent>> for AgentPool {
    type Error = BqError;

    /// Fails on an empty list as well as on the checks made by [`AgentPool::new`].
    fn try_from(mut agents: Vec<Agent>) -> BqResult<Self> {
        if agents.is_empty() {
            return Err(BqError::EmptyPool);
        }
        let first = agents.remove(0);
        AgentPool::new(first, agents)
    }
}

impl From<AgentPool> for Vec<Agent> {
    fn from(pool: AgentPool) -> Vec<Agent> {
        pool.agents
    }
}
