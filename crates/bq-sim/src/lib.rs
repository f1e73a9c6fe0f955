//! `bq-sim`: one-call simulation runs for the rust_bq framework.
//!
//! # Pipeline
//!
//! ```text
//! SimConfig ─► ProfileWorkload ─► build queue ─┐
//!          └─► AgentPoolBuilder ─► idle pool ──┴─► process_queue ─► final pool
//!                                                          │
//!              SimReport ◄── PoolSummary + build_times_by_verify
//! ```
//!
//! Every run starts from scratch: nothing carries over between runs, so a
//! configuration change means calling [`simulate`] again.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs [`sweep`] on Rayon's thread pool.                 |
//! | `fx-hash`  | FxHash for the per-verify group-by in `bq-stats`.      |
//! | `serde`    | `Serialize`/`Deserialize` on config and report types.  |
//!
//! # Quick-start
//!
//! ```rust
//! use bq_sim::{SimConfig, simulate};
//! use bq_workload::BuildProfile;
//!
//! let report = simulate(&SimConfig::new(3, 6, BuildProfile::Light));
//! assert_eq!(report.verifies.len(), 6);
//! assert_eq!(report.summary.total_busy.as_minutes(), 6 * 12);
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod sim;
pub mod sweep;


pub use builder::SimBuilder;
pub use config::{SimConfig, parse_count};
pub use error::{SimError, SimResult};
pub use sim::{Sim, SimReport, simulate};
pub use sweep::sweep;
