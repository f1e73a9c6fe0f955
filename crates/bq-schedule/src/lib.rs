//! `bq-schedule`: greedy list scheduling of a build queue onto an agent pool.
//!
//! # Algorithm
//!
//! ```text
//! for build in queue (front to back):
//!   ① Select: the agent with the smallest busy time; ties go to the
//!              lowest AgentId.
//!   ② Append: push the build onto that agent's list.
//!   ③ Update: the agent's busy time grows by the build's duration.
//! ```
//!
//! This is online greedy balancing in queue-arrival order: no sorting by size,
//! no backtracking, no rebalancing once a build is placed.  Each selection
//! depends on the previous assignment, so one run is inherently sequential.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`load_queue`]  | `LoadQueue`: ordered set of `(busy, id, slot)` entries    |
//! | [`scheduler`]   | `process_queue`, `process_queue_with`, `least_loaded`     |
//! | [`observer`]    | `ScheduleObserver`, `NoopObserver`, `TracingObserver`     |
//!
//! # Quick-start
//!
//! ```rust
//! use bq_agent::AgentPoolBuilder;
//! use bq_core::{AgentId, Build, Duration, VerifyId};
//! use bq_schedule::process_queue;
//!
//! let queue: Vec<Build> = [5, 3, 7]
//!     .into_iter()
//!     .map(|s| Build::new(VerifyId(1), Duration(s)))
//!     .collect();
//! let pool = process_queue(&queue, &AgentPoolBuilder::new(2).build());
//!
//! assert_eq!(pool.get(AgentId(1)).unwrap().busy_time(), Duration(5));
//! assert_eq!(pool.get(AgentId(2)).unwrap().busy_time(), Duration(10));
//! ```

pub mod load_queue;
pub mod observer;
pub mod scheduler;


pub use load_queue::{LoadEntry, LoadQueue};
pub use observer::{NoopObserver, ScheduleObserver, TracingObserver};
pub use scheduler::{least_loaded, process_queue, process_queue_with};
