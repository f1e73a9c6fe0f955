//! `bq-stats`: read-only statistics over a finished [`AgentPool`][bq_agent::AgentPool].
//!
//! # What is derived
//!
//! ```text
//! agent_total_time(agent)      Σ durations of the agent's builds
//! agent_build_stats(agent)     per build: queue_time = Σ durations before it
//!                                         build_time = its own duration
//! build_times_by_verify(pool)  per verify: the ProcessedBuild with the latest
//!                              finish (queue_time + build_time) on any agent
//! PoolSummary::from_pool(pool) per-agent totals, makespan, idle time
//! ```
//!
//! Every function is pure: nothing here mutates the pool.
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                   |
//! |-----------|----------------------------------------------------------|
//! | `fx-hash` | FxHash instead of SipHash for the per-verify group-by.   |
//! | `serde`   | `Serialize`/`Deserialize` on all output types.           |

pub mod summary;
pub mod timeline;
pub mod verify;

#[cfg(test)]
mod tests;

pub use summary::{AgentLoad, PoolSummary, VerifyMinutes};
pub use timeline::{ProcessedBuild, agent_build_stats, agent_total_time};
pub use verify::build_times_by_verify;
