//! Framework error type.
//!
//! The engine itself is total: scheduling and aggregation never fail.  The
//! variants here cover construction-time checks on agent pools.

use thiserror::Error;

use crate::AgentId;

/// The top-level error type for `bq-core` and a common base for sub-crates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BqError {
    #[error("agent {0} appears more than once in the pool")]
    DuplicateAgent(AgentId),

    #[error("an agent pool needs at least one agent")]
    EmptyPool,

    #[error("agent {0} is not a valid id (ids start at 1)")]
    InvalidAgentId(AgentId),
}

/// Shorthand result type for all `bq-*` crates.
pub type BqResult<T> = Result<T, BqError>;
