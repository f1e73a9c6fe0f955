//! Unit and property tests for bq-stats.

use bq_agent::{Agent, AgentPool, AgentPoolBuilder};
use bq_core::{AgentId, Build, Duration, VerifyId};
use bq_schedule::process_queue;

use crate::{
    AgentLoad, PoolSummary, ProcessedBuild, VerifyMinutes, agent_build_stats, agent_total_time,
    build_times_by_verify,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn builds(verify: u32, durations: &[u64]) -> Vec<Build> {
    durations.iter().map(|&s| Build::new(VerifyId(verify), Duration(s))).collect()
}

/// `(queue, build, total)` in seconds.
fn triples(stats: &[ProcessedBuild]) -> Vec<(u64, u64, u64)> {
    stats
        .iter()
        .map(|p| (p.queue_time.as_secs(), p.build_time.as_secs(), p.total().as_secs()))
        .collect()
}

// ── Contracts A and B ─────────────────────────────────────────────────────────

#[cfg(test)]
mod timeline {
    use super::*;

    #[test]
    fn single_agent_cumulative_queue_time() {
        let pool = process_queue(&builds(1, &[5, 3, 7]), &AgentPool::single());
        let stats = agent_build_stats(pool.first());
        assert_eq!(triples(&stats), [(0, 5, 5), (5, 3, 8), (8, 7, 15)]);
        assert!(stats.iter().all(|p| p.agent == AgentId(1) && p.verify == VerifyId(1)));
    }

    #[test]
    fn total_time_matches_cached_busy_time() {
        let agent = Agent::with_builds(AgentId(2), builds(4, &[11, 22, 33]));
        assert_eq!(agent_total_time(&agent), Duration(66));
        assert_eq!(agent_total_time(&agent), agent.busy_time());
    }

    #[test]
    fn idle_agent_has_no_timeline() {
        let agent = Agent::new(AgentId(1));
        assert_eq!(agent_total_time(&agent), Duration::ZERO);
        assert!(agent_build_stats(&agent).is_empty());
    }

    #[test]
    fn stats_are_idempotent() {
        let agent = Agent::with_builds(AgentId(1), builds(1, &[9, 1, 4]));
        assert_eq!(agent_build_stats(&agent), agent_build_stats(&agent));
    }
}

// ── Contract C ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod by_verify {
    use super::*;

    #[test]
    fn single_agent_picks_last_build() {
        let pool = process_queue(&builds(1, &[5, 3, 7]), &AgentPool::single());
        let critical = build_times_by_verify(&pool);
        assert_eq!(critical.len(), 1);
        assert_eq!(critical[0].verify, VerifyId(1));
        assert_eq!(triples(&critical), [(8, 7, 15)]);
    }

    #[test]
    fn empty_queue_yields_nothing() {
        let pool = process_queue(&[], &AgentPoolBuilder::new(4).build());
        assert!(pool.iter().all(|a| agent_total_time(a) == Duration::ZERO));
        assert!(build_times_by_verify(&pool).is_empty());
    }

    #[test]
    fn maximum_is_taken_across_agents() {
        // 3 → a1, 9 → a2, 5 → a1.  Verify 1 finishes on agent 2 (t=9), not on
        // agent 1 (t=3); verify 2 finishes on agent 1 at t=8.
        let mut queue = builds(1, &[3, 9]);
        queue.extend(builds(2, &[5]));
        let pool = process_queue(&queue, &AgentPoolBuilder::new(2).build());

        let critical = build_times_by_verify(&pool);
        assert_eq!(critical.len(), 2);

        assert_eq!(critical[0].verify, VerifyId(2));
        assert_eq!(critical[0].agent, AgentId(1));
        assert_eq!(critical[0].total(), Duration(8));

        assert_eq!(critical[1].verify, VerifyId(1));
        assert_eq!(critical[1].agent, AgentId(2));
        assert_eq!(critical[1].total(), Duration(9));
    }

    #[test]
    fn equal_finish_on_two_agents_goes_to_lowest_id() {
        // Both builds start at 0 and take 5 s: a genuine tie.
        let pool = process_queue(&builds(1, &[5, 5]), &AgentPoolBuilder::new(2).build());
        let critical = build_times_by_verify(&pool);
        assert_eq!(critical.len(), 1);
        assert_eq!(critical[0].total(), Duration(5));
        assert_eq!(critical[0].agent, AgentId(1));
    }

    #[test]
    fn tie_break_ignores_pool_construction_order() {
        let pool = AgentPool::new(
            Agent::with_builds(AgentId(5), builds(3, &[2, 6])),
            vec![Agent::with_builds(AgentId(4), builds(3, &[8]))],
        )
        .unwrap();
        let critical = build_times_by_verify(&pool);
        assert_eq!(critical[0].agent, AgentId(4));
        assert_eq!(critical[0].total(), Duration(8));
    }

    #[test]
    fn output_sorted_by_total_then_verify() {
        let pool = AgentPool::new(
            Agent::with_builds(AgentId(1), [builds(3, &[10]), builds(1, &[10])].concat()),
            vec![Agent::with_builds(AgentId(2), [builds(2, &[20]), builds(4, &[1])].concat())],
        )
        .unwrap();
        // Finish times: v3 = 10, v1 = 20, v2 = 20, v4 = 21.
        let order: Vec<u32> = build_times_by_verify(&pool).iter().map(|p| p.verify.get()).collect();
        assert_eq!(order, [3, 1, 2, 4]);
    }
}

// ── PoolSummary / VerifyMinutes ───────────────────────────────────────────────

#[cfg(test)]
mod summary {
    use super::*;

    #[test]
    fn totals_and_makespan() {
        let mut queue = builds(1, &[5, 3, 7]);
        queue.extend(builds(2, &[5, 3, 7]));
        let pool = process_queue(&queue, &AgentPoolBuilder::new(2).build());

        let summary = PoolSummary::from_pool(&pool);
        assert_eq!(summary.makespan, Duration(17));
        assert_eq!(summary.total_busy, Duration(30));
        assert_eq!(
            summary.agents,
            [
                AgentLoad { agent: AgentId(1), busy: Duration(13), builds: 3, idle: Duration(4) },
                AgentLoad { agent: AgentId(2), busy: Duration(17), builds: 3, idle: Duration(0) },
            ]
        );
        assert_eq!(summary.busiest().map(|a| a.agent), Some(AgentId(2)));
        assert!((summary.utilization() - 30.0 / 34.0).abs() < 1e-12);
    }

    #[test]
    fn idle_pool_summary() {
        let summary = PoolSummary::from_pool(&AgentPoolBuilder::new(3).build());
        assert_eq!(summary.makespan, Duration::ZERO);
        assert_eq!(summary.utilization(), 0.0);
        // All tie at zero: the lowest id is the busiest.
        assert_eq!(summary.busiest().map(|a| a.agent), Some(AgentId(1)));
        assert!(summary.load_of(AgentId(3)).is_some());
        assert!(summary.load_of(AgentId(4)).is_none());
    }

    #[test]
    fn minutes_truncate_each_field() {
        let p = ProcessedBuild {
            verify:     VerifyId(1),
            agent:      AgentId(1),
            queue_time: Duration(90),
            build_time: Duration(90),
        };
        let m = VerifyMinutes::from(&p);
        assert_eq!((m.queue_minutes, m.build_minutes, m.total_minutes), (1, 1, 3));
    }
}

// ── Properties ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use std::collections::BTreeSet;

    use super::*;
    use proptest::prelude::*;

    fn queue_strategy() -> impl Strategy<Value = Vec<Build>> {
        proptest::collection::vec((1u32..8, 0u64..400), 0..50).prop_map(|v| {
            v.into_iter()
                .map(|(verify, secs)| Build::new(VerifyId(verify), Duration(secs)))
                .collect()
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn timeline_is_idempotent_and_ends_at_total(agents in 1u32..6, queue in queue_strategy()) {
            let pool = process_queue(&queue, &AgentPoolBuilder::new(agents).build());
            for agent in &pool {
                let stats = agent_build_stats(agent);
                prop_assert_eq!(&stats, &agent_build_stats(agent));
                prop_assert_eq!(stats.len(), agent.build_count());
                let end = stats.last().map(ProcessedBuild::total).unwrap_or_default();
                prop_assert_eq!(end, agent_total_time(agent));
            }
        }

        #[test]
        fn one_critical_build_per_verify(agents in 1u32..6, queue in queue_strategy()) {
            let pool = process_queue(&queue, &AgentPoolBuilder::new(agents).build());
            let critical = build_times_by_verify(&pool);

            let verifies: BTreeSet<VerifyId> = queue.iter().map(Build::verify).collect();
            let reported: BTreeSet<VerifyId> = critical.iter().map(|p| p.verify).collect();
            prop_assert_eq!(critical.len(), verifies.len());
            prop_assert_eq!(reported, verifies);

            let all: Vec<ProcessedBuild> = pool.iter().flat_map(agent_build_stats).collect();
            for p in &critical {
                let latest = all
                    .iter()
                    .filter(|q| q.verify == p.verify)
                    .map(ProcessedBuild::total)
                    .max()
                    .unwrap_or_default();
                prop_assert_eq!(p.total(), latest);
            }

            prop_assert!(critical.windows(2).all(|w| w[0].total() <= w[1].total()));
        }

        #[test]
        fn summary_conserves_work(agents in 1u32..6, queue in queue_strategy()) {
            let pool = process_queue(&queue, &AgentPoolBuilder::new(agents).build());
            let summary = PoolSummary::from_pool(&pool);
            let submitted: Duration = queue.iter().map(Build::duration).sum();
            prop_assert_eq!(summary.total_busy, submitted);
            prop_assert!(summary.agents.iter().all(|a| a.busy + a.idle == summary.makespan));
        }
    }
}
