//! `bq-workload`: build-type profiles and build-queue generation.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`profile`]   | `BuildProfile` (closed catalogue enum), `SubBuild`        |
//! | [`source`]    | `WorkloadSource` trait, `ProfileWorkload`, `CustomWorkload` |
//! | [`error`]     | `WorkloadError`, `WorkloadResult<T>`                      |
//!
//! # Queue order
//!
//! A profile workload is emitted verify-major: every sub-build of verify 1 in
//! catalogue order, then every sub-build of verify 2, and so on.
//!
//! ```text
//! verify_count = 2, profile = Light
//!   v1 compile · v1 unit-tests · v1 lint · v2 compile · v2 unit-tests · v2 lint
//! ```
//!
//! The scheduler consumes the queue in exactly that order.

pub mod error;
pub mod profile;
pub mod source;


pub use error::{WorkloadError, WorkloadResult};
pub use profile::{BuildProfile, SubBuild};
pub use source::{CustomWorkload, ProfileWorkload, WorkloadSource};
