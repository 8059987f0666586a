//! Real-time flocking core.
//!
//! A host creates a [`FlockSimulation`], calls [`FlockSimulation::step`] once
//! per frame and reads each agent's position and heading to draw it.

pub mod agent;
pub mod flock_state;
pub mod neighbors;
pub mod rules;
pub mod shape;
pub mod simulation;

pub use agent::{Agent, AgentId};
pub use flock_common::{BehaviorParameters, FlockConfig, Snapshot, Vec2, WorldBounds};
pub use simulation::FlockSimulation;
