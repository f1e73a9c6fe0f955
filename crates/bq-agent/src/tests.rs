//! Unit tests for bq-agent.

use bq_core::{AgentId, BqError, Build, Duration, VerifyId};

use crate::{Agent, AgentPool, AgentPoolBuilder};

fn build(verify: u32, secs: u64) -> Build {
    Build::new(VerifyId(verify), Duration(secs))
}

// ── Agent ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod agent {
    use super::*;

    #[test]
    fn new_agent_is_idle() {
        let a = Agent::new(AgentId(4));
        assert_eq!(a.id(), AgentId(4));
        assert!(a.is_idle());
        assert_eq!(a.busy_time(), Duration::ZERO);
    }

    #[test]
    fn push_appends_and_accumulates() {
        let mut a = Agent::new(AgentId(1));
        a.push(build(1, 5));
        a.push(build(1, 3));
        a.push(build(2, 7));

        let durations: Vec<u64> = a.builds().iter().map(|b| b.duration().as_secs()).collect();
        assert_eq!(durations, [5, 3, 7]);
        assert_eq!(a.busy_time(), Duration(15));
        assert_eq!(a.build_count(), 3);
    }

    #[test]
    fn with_builds_matches_pushing() {
        let mut pushed = Agent::new(AgentId(2));
        pushed.push(build(1, 10));
        pushed.push(build(3, 20));

        let direct = Agent::with_builds(AgentId(2), vec![build(1, 10), build(3, 20)]);
        assert_eq!(pushed, direct);
    }
}

// ── AgentPool ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod pool {
    use super::*;

    #[test]
    fn new_sorts_by_id() {
        let pool = AgentPool::new(
            Agent::new(AgentId(3)),
            vec![Agent::new(AgentId(1)), Agent::new(AgentId(2))],
        )
        .unwrap();
        assert_eq!(pool.ids().collect::<Vec<_>>(), [AgentId(1), AgentId(2), AgentId(3)]);
        assert_eq!(pool.first().id(), AgentId(1));
    }

    #[test]
    fn duplicate_ids_rejected() {
        let result = AgentPool::new(
            Agent::new(AgentId(1)),
            vec![Agent::new(AgentId(2)), Agent::new(AgentId(1))],
        );
        assert_eq!(result, Err(BqError::DuplicateAgent(AgentId(1))));
    }

    #[test]
    fn zero_id_rejected() {
        let result = AgentPool::new(Agent::new(AgentId(0)), vec![]);
        assert_eq!(result, Err(BqError::InvalidAgentId(AgentId(0))));
    }

    #[test]
    fn empty_vec_rejected() {
        let result = AgentPool::try_from(Vec::<Agent>::new());
        assert_eq!(result, Err(BqError::EmptyPool));
    }

    #[test]
    fn single_has_first_agent_only() {
        let pool = AgentPool::single();
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.first().id(), AgentId::FIRST);
    }

    #[test]
    fn lookup_by_id() {
        let pool = AgentPool::new(Agent::new(AgentId(10)), vec![Agent::new(AgentId(20))]).unwrap();
        assert_eq!(pool.slot_of(AgentId(20)), Some(1));
        assert_eq!(pool.get(AgentId(10)).map(Agent::id), Some(AgentId(10)));
        assert!(pool.get(AgentId(15)).is_none());
    }

    #[test]
    fn assign_touches_only_one_slot() {
        let mut pool = AgentPoolBuilder::new(3).build();
        pool.assign(1, build(1, 30));

        assert_eq!(pool.at(0).busy_time(), Duration::ZERO);
        assert_eq!(pool.at(1).busy_time(), Duration(30));
        assert_eq!(pool.at(2).busy_time(), Duration::ZERO);
        assert_eq!(pool.total_busy_time(), Duration(30));
        assert_eq!(pool.build_count(), 1);
    }

    #[test]
    fn into_vec_round_trip() {
        let pool = AgentPoolBuilder::new(2).build();
        let agents: Vec<Agent> = pool.clone().into();
        assert_eq!(AgentPool::try_from(agents).unwrap(), pool);
    }
}

// ── AgentPoolBuilder ──────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use super::*;

    #[test]
    fn numbers_agents_from_one() {
        let pool = AgentPoolBuilder::new(4).build();
        let ids: Vec<u32> = pool.ids().map(AgentId::get).collect();
        assert_eq!(ids, [1, 2, 3, 4]);
        assert!(pool.iter().all(Agent::is_idle));
    }

    #[test]
    fn zero_count_keeps_first_agent() {
        let builder = AgentPoolBuilder::new(0);
        assert_eq!(builder.agent_count(), 1);
        let pool = builder.build();
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.first().id(), AgentId(1));
    }
}

// ── serde ─────────────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "serde"))]
mod serde_repr {
    use super::*;

    #[test]
    fn pool_round_trips_through_json() {
        let mut pool = AgentPoolBuilder::new(2).build();
        pool.assign(0, build(1, 5));
        pool.assign(1, build(2, 9));

        let json = serde_json::to_string(&pool).unwrap();
        let back: AgentPool = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pool);
        assert_eq!(back.at(1).busy_time(), Duration(9));
    }

    #[test]
    fn empty_pool_json_rejected() {
        assert!(serde_json::from_str::<AgentPool>("[]").is_err());
    }

    #[test]
    fn duplicate_agent_json_rejected() {
        let json = r#"[{"id":1,"builds":[]},{"id":1,"builds":[]}]"#;
        assert!(serde_json::from_str::<AgentPool>(json).is_err());
    }
}
