//! Simulation configuration and boundary parsing.
//!
//! Counts are unsigned, so a negative agent or verify count cannot be
//! represented once a `SimConfig` exists.  Values arriving as text (form
//! fields, query strings) go through [`SimConfig::from_fields`] /
//! [`parse_count`], which turn anything non-numeric or negative into a
//! recoverable [`SimError::InvalidInput`].

use bq_agent::{AgentPool, AgentPoolBuilder};
use bq_workload::{BuildProfile, ProfileWorkload};

use crate::{SimError, SimResult};

/// Everything one simulation run depends on.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Size of the agent pool.  0 behaves like 1: the first agent always exists.
    pub agent_count:  u32,

    /// Number of verifies in the queue.  0 gives an empty queue.
    pub verify_count: u32,

    /// Catalogue every verify is built from.
    pub profile:      BuildProfile,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { agent_count: 2, verify_count: 10, profile: BuildProfile::Standard }
    }
}

impl SimConfig {
    pub fn new(agent_count: u32, verify_count: u32, profile: BuildProfile) -> Self {
        Self { agent_count, verify_count, profile }
    }

    /// Parse a configuration from raw text fields.
    pub fn from_fields(agent_count: &str, verify_count: &str, profile: &str) -> SimResult<Self> {
        Ok(Self {
            agent_count:  parse_count("agent count", agent_count)?,
            verify_count: parse_count("verify count", verify_count)?,
            profile:      profile.parse()?,
        })
    }

    /// The queue producer for this configuration.
    pub fn workload(&self) -> ProfileWorkload {
        ProfileWorkload::new(self.verify_count, self.profile)
    }

    /// A fresh, idle pool of `agent_count` agents.
    pub fn pool(&self) -> AgentPool {
        AgentPoolBuilder::new(self.agent_count).build()
    }
}

/// Parse a non-negative count, naming `field` in the error.
pub fn parse_count(field: &'static str, raw: &str) -> SimResult<u32> {
    raw.trim().parse::<u32>().map_err(|_| SimError::InvalidInput {
        field,
        value: raw.to_owned(),
    })
}
