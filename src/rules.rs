//! The three classical flocking rules, evaluated against a neighbor set.

use crate::agent::Agent;
use flock_common::{BehaviorParameters, Vec2};

/// Steering away from crowded neighbors.
///
/// Every neighbor closer than `separation_range` adds a push of magnitude
/// `separation_factor / distance` directly away from it. Coincident neighbors
/// have no direction to push along and contribute nothing.
pub fn separation(agent: &Agent, neighbors: &[&Agent], params: &BehaviorParameters) -> Vec2 {
    let mut steering = Vec2::zero();
    for other in neighbors {
        let offset = other.position() - agent.position();
        let distance = offset.length();
        if distance >= params.separation_range || offset.is_near_zero() {
            continue;
        }
        steering += -(offset / distance) * (params.separation_factor / distance);
    }
    steering
}

/// Steering towards the mean neighbor velocity.
pub fn alignment(agent: &Agent, neighbors: &[&Agent], params: &BehaviorParameters) -> Vec2 {
    match mean(neighbors.iter().map(|n| n.velocity())) {
        Some(avg_velocity) => (avg_velocity - agent.velocity()) * params.alignment_factor,
        None => Vec2::zero(),
    }
}

/// Steering towards the mean neighbor position.
pub fn cohesion(agent: &Agent, neighbors: &[&Agent], params: &BehaviorParameters) -> Vec2 {
    match mean(neighbors.iter().map(|n| n.position())) {
        Some(center) => (center - agent.position()) * params.cohesion_factor,
        None => Vec2::zero(),
    }
}

/// Velocity after one step of steering, clamped to `speed_limit`.
/// An agent without neighbors keeps its velocity.
pub fn steer(agent: &Agent, neighbors: &[&Agent], params: &BehaviorParameters) -> Vec2 {
    if neighbors.is_empty() {
        return agent.velocity();
    }

    let velocity = agent.velocity()
        + separation(agent, neighbors, params)
        + alignment(agent, neighbors, params)
        + cohesion(agent, neighbors, params);
    velocity.clamp_length(params.speed_limit)
}

fn mean<I: Iterator<Item = Vec2>>(values: I) -> Option<Vec2> {
    let mut sum = Vec2::zero();
    let mut count = 0usize;
    for v in values {
        sum += v;
        count += 1;
    }
    (count > 0).then(|| sum / count as f32)
}
