//! `bq-core`: foundational types for the `rust_bq` build-agent simulator.
//!
//! This crate is a dependency of every other `bq-*` crate.  It has no `bq-*`
//! dependencies and minimal external ones (only `thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `VerifyId`                                 |
//! | [`duration`]    | `Duration` (whole seconds)                            |
//! | [`build`]       | `Build`: one queued unit of work                      |
//! | [`error`]       | `BqError`, `BqResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod build;
pub mod duration;
pub mod error;
pub mod ids;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use build::Build;
pub use duration::Duration;
pub use error::{BqError, BqResult};
pub use ids::{AgentId, VerifyId};
