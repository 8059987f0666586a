use flock_common::{heading_of, AgentSnapshot, Vec2};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable agent identity. Assigned once at creation and never reused.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AgentId(pub u32);

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single flocking agent.
///
/// Fields are private: agents are owned by the simulation and only its step
/// function moves them. Hosts read state through the accessors.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    id: AgentId,
    position: Vec2,
    velocity: Vec2,
}

impl Agent {
    pub(crate) fn new(id: AgentId, position: Vec2, velocity: Vec2) -> Self {
        Self { id, position, velocity }
    }

    pub fn id(&self) -> AgentId {
        self.id
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Heading in radians, 0 = up (-y), clockwise positive.
    /// Always derived from the current velocity.
    pub fn heading(&self) -> f32 {
        heading_of(self.velocity)
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    pub(crate) fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    pub(crate) fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn to_snapshot(&self) -> AgentSnapshot {
        AgentSnapshot {
            id: self.id.0,
            x: self.position.x,
            y: self.position.y,
            heading: self.heading(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_heading_follows_velocity() {
        let mut agent = Agent::new(AgentId(3), Vec2::zero(), Vec2::new(0.0, -2.0));
        assert_eq!(agent.heading(), 0.0);

        agent.set_velocity(Vec2::new(0.0, 5.0));
        assert!((agent.heading().abs() - PI).abs() < 1e-6);
    }

    #[test]
    fn test_snapshot_copies_render_state() {
        let agent = Agent::new(AgentId(9), Vec2::new(1.5, -2.0), Vec2::new(3.0, 0.0));
        let snap = agent.to_snapshot();
        assert_eq!(snap.id, 9);
        assert_eq!((snap.x, snap.y), (1.5, -2.0));
        assert!((snap.heading - PI / 2.0).abs() < 1e-6);
        assert_eq!(agent.speed(), 3.0);
    }

    #[test]
    fn test_id_display() {
        assert_eq!(AgentId(12).to_string(), "#12");
    }
}
