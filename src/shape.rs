//! Outline geometry a host uses to draw an agent.
//!
//! The mesh is two triangles in clockwise winding, nose pointing up (-y) in
//! local space. Placing it rotates by the agent heading, then translates to
//! the agent position.

use crate::agent::Agent;
use flock_common::Vec2;

pub const OUTLINE_VERTEX_COUNT: usize = 6;

/// Local-space agent polygon.
pub const AGENT_OUTLINE: [Vec2; OUTLINE_VERTEX_COUNT] = [
    Vec2 { x: 0.0, y: -1.0 }, // front
    Vec2 { x: -0.5, y: 1.0 }, // left tail point
    Vec2 { x: 0.0, y: 0.5 },  // back
    Vec2 { x: 0.0, y: 0.5 },  // back
    Vec2 { x: 0.5, y: 1.0 },  // right tail point
    Vec2 { x: 0.0, y: -1.0 }, // front
];

/// Transforms a local-space point by heading rotation followed by translation.
pub fn place(local: Vec2, heading: f32, position: Vec2) -> Vec2 {
    local.rotate(heading) + position
}

/// World-space outline of `agent`, ready for a triangle-list draw.
pub fn outline(agent: &Agent) -> [Vec2; OUTLINE_VERTEX_COUNT] {
    let heading = agent.heading();
    let position = agent.position();
    AGENT_OUTLINE.map(|v| place(v, heading, position))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::AgentId;

    #[test]
    fn test_nose_points_along_velocity() {
        let agent = Agent::new(AgentId(0), Vec2::new(10.0, 20.0), Vec2::new(3.0, 0.0));
        let verts = outline(&agent);
        let nose = verts[0];
        assert!((nose.x - 11.0).abs() < 1e-5);
        assert!((nose.y - 20.0).abs() < 1e-5);
        assert_eq!(verts[0], verts[5]);
    }

    #[test]
    fn test_upward_agent_is_only_translated() {
        let agent = Agent::new(AgentId(0), Vec2::new(-4.0, 2.0), Vec2::new(0.0, -1.0));
        for (placed, local) in outline(&agent).iter().zip(AGENT_OUTLINE.iter()) {
            assert!((placed.x - (local.x - 4.0)).abs() < 1e-6);
            assert!((placed.y - (local.y + 2.0)).abs() < 1e-6);
        }
    }
}
