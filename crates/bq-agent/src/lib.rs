//! `bq-agent`: build agents and the agent pool for the `rust_bq` simulator.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`agent`]       | `Agent`: an append-only list of assigned builds           |
//! | [`pool`]        | `AgentPool`: non-empty, id-ordered collection of agents   |
//! | [`builder`]     | `AgentPoolBuilder` (agents numbered `1..=N`)              |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                       |
//! |------------|--------------------------------------------------------------|
//! | `serde`    | Derives `Serialize`/`Deserialize`; deserialization re-checks |
//! |            | every pool invariant.                                        |

pub mod agent;
pub mod builder;
pub mod pool;

#[cfg(test)]
mod tests;

pub use agent::Agent;
pub use builder::AgentPoolBuilder;
pub use pool::AgentPool;
