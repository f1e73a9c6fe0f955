//! Per-verify critical builds.
//!
//! A verify is finished only when its last build is.  Its builds may be spread
//! over several agents, so the critical build is the one with the latest
//! finish time across the whole pool.
//!
//! # Tie-break
//!
//! Two builds of the same verify can finish at exactly the same time on
//! different agents.  The traversal runs agents in ascending id order and each
//! agent's builds in assignment order, and a candidate only replaces the
//! current best when it finishes *strictly* later.  The winner of a tie is
//! therefore the build on the lowest agent id, and on one agent the earliest
//! build.

#[cfg(not(feature = "fx-hash"))]
use std::collections::HashMap;

#[cfg(feature = "fx-hash")]
use rustc_hash::FxHashMap as HashMap;

use bq_agent::AgentPool;
use bq_core::VerifyId;

use crate::{ProcessedBuild, agent_build_stats};

/// The latest-finishing build of every verify present in `pool`.
///
/// One entry per distinct verify, sorted by ascending [`ProcessedBuild::total`];
/// verifies finishing at the same time are ordered by ascending id.  An empty
/// pool (no builds assigned) yields an empty `Vec`.
pub fn build_times_by_verify(pool: &AgentPool) -> Vec<ProcessedBuild> {
    let mut critical: HashMap<VerifyId, ProcessedBuild> = HashMap::default();

    for agent in pool {
        for processed in agent_build_stats(agent) {
            critical
                .entry(processed.verify)
                .and_modify(|best| {
                    if processed.total() > best.total() {
                        *best = processed;
                    }
                })
                .or_insert(processed);
        }
    }

    let mut out: Vec<ProcessedBuild> = critical.into_values().collect();
    out.sort_unstable_by_key(|p| (p.total(), p.verify));
    out
}
