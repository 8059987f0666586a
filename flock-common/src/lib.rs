pub mod behavior_params;
pub mod bounds;
pub mod config;
pub mod snapshot;
pub mod vecmath;

// Re-export key types for easier use by dependent crates
pub use behavior_params::BehaviorParameters;
pub use bounds::WorldBounds;
pub use config::{BehaviorConfig, FlockConfig, InitialConditions, OutputConfig, TimingConfig, WorldConfig};
pub use snapshot::{AgentSnapshot, Snapshot};
pub use vecmath::{clamp, heading_of, Vec2};
