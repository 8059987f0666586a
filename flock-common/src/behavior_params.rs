use serde::{Deserialize, Serialize};

/// Steering parameters shared by every agent, derived from the configuration.
/// Read-only during a step; a tuning layer may change them between steps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BehaviorParameters {
    /// Agents closer than this are candidates for the neighbor set.
    pub neighborhood_range: f32,
    /// Half-angle of the field of view in radians, measured from the velocity.
    pub neighborhood_fov: f32,
    pub separation_factor: f32,
    /// Neighbors closer than this push the agent away.
    pub separation_range: f32,
    pub alignment_factor: f32,
    pub cohesion_factor: f32,
    /// Maximum speed after steering is applied.
    pub speed_limit: f32,
}

impl Default for BehaviorParameters {
    fn default() -> Self {
        Self {
            neighborhood_range: 10.0,
            neighborhood_fov: 135.0f32.to_radians(),
            separation_factor: 2.0,
            separation_range: 3.0,
            alignment_factor: 0.05,
            cohesion_factor: 0.01,
            speed_limit: 15.0,
        }
    }
}
