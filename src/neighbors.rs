use crate::agent::Agent;
use flock_common::BehaviorParameters;

/// Returns true if `other` belongs to `agent`'s neighbor set.
///
/// A neighbor is any other agent strictly inside `neighborhood_range` whose
/// offset lies within `neighborhood_fov` of the agent's velocity. A stationary
/// agent has no facing, so it sees in every direction; an agent sitting exactly
/// on top of another sees it as well.
#[inline]
pub fn is_neighbor(agent: &Agent, other: &Agent, params: &BehaviorParameters) -> bool {
    if agent.id() == other.id() {
        return false;
    }

    let offset = other.position() - agent.position();
    let range = params.neighborhood_range;
    if offset.length_squared() >= range * range {
        return false;
    }

    match agent.velocity().angle_between(offset) {
        Some(angle) => angle <= params.neighborhood_fov,
        None => true,
    }
}

/// Brute-force scan over the whole population.
/// Calls `f` with the index of every neighbor of `agents[idx]`; stops early when `f` returns `false`.
#[inline]
pub fn for_each_neighbor<'a, F>(idx: usize, agents: &'a [Agent], params: &BehaviorParameters, mut f: F)
where
    F: FnMut(usize, &'a Agent) -> bool,
{
    let agent = &agents[idx];
    for (other_idx, other) in agents.iter().enumerate() {
        if is_neighbor(agent, other, params) && !f(other_idx, other) {
            return;
        }
    }
}

/// Collects the neighbor set of `agents[idx]`.
pub fn neighbors_of<'a>(idx: usize, agents: &'a [Agent], params: &BehaviorParameters) -> Vec<&'a Agent> {
    let mut found = Vec::new();
    for_each_neighbor(idx, agents, params, |_, other| {
        found.push(other);
        true
    });
    found
}

/// Number of neighbors of every agent, in agent order.
pub fn neighbor_counts(agents: &[Agent], params: &BehaviorParameters) -> Vec<u32> {
    (0..agents.len())
        .map(|idx| {
            let mut count = 0u32;
            for_each_neighbor(idx, agents, params, |_, _| {
                count += 1;
                true
            });
            count
        })
        .collect()
}
