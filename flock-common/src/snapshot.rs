use serde::{Deserialize, Serialize};

/// Render-facing state of one agent at snapshot time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgentSnapshot {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    /// Heading in radians, 0 = up, clockwise positive.
    pub heading: f32,
}

/// A snapshot of the flock state and metrics at a specific time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Number of steps taken when the snapshot was recorded.
    pub step: u32,
    /// Accumulated simulation time in seconds.
    pub time: f32,
    pub agent_count: u32,
    /// Mean agent speed in world units per second.
    pub mean_speed: f32,
    /// Length of the mean unit velocity: 1 for a perfectly aligned flock, near 0 for a disordered one.
    pub polarization: f32,
    /// `neighbor_counts_distribution[N]` is the number of agents with exactly N neighbors.
    /// The last bin also collects every agent with more neighbors than it covers.
    pub neighbor_counts_distribution: Vec<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agents: Option<Vec<AgentSnapshot>>,
}
