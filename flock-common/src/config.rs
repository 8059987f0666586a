use crate::behavior_params::BehaviorParameters;
use crate::bounds::WorldBounds;
use crate::vecmath::Vec2;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

// Extent of the toroidal world, in world units
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct WorldConfig {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

// Configuration for timing
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct TimingConfig {
    /// Fixed frame time handed to every step, in seconds.
    pub dt_s: f32,
    pub total_time_s: f32,
    pub record_interval_s: f32,
}

// Initial population, loaded from config.toml
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct InitialConditions {
    pub num_agents: u32,
    pub max_initial_speed: f32,
    pub seed: u64,
}

// Steering tunables as written in config.toml (field of view in degrees)
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct BehaviorConfig {
    pub neighborhood_range: f32,
    pub neighborhood_fov_deg: f32,
    pub separation_factor: f32,
    pub separation_range: f32,
    pub alignment_factor: f32,
    pub cohesion_factor: f32,
    pub speed_limit: f32,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct OutputConfig {
    #[serde(default = "default_record_snapshots")]
    pub record_snapshots: bool,
    /// Include per-agent position and heading in every snapshot.
    #[serde(default)]
    pub agents_in_snapshot: bool,
}

fn default_record_snapshots() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            record_snapshots: default_record_snapshots(),
            agents_in_snapshot: false,
        }
    }
}

/// Main flock configuration structure, loaded from config.toml.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct FlockConfig {
    pub world: WorldConfig,
    pub timing: TimingConfig,
    pub initial_conditions: InitialConditions,
    pub behavior: BehaviorConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for FlockConfig {
    fn default() -> Self {
        let params = BehaviorParameters::default();
        FlockConfig {
            world: WorldConfig { min_x: -50.0, min_y: -50.0, max_x: 50.0, max_y: 50.0 },
            timing: TimingConfig {
                dt_s: 1.0 / 60.0,
                total_time_s: 60.0,
                record_interval_s: 1.0,
            },
            initial_conditions: InitialConditions {
                num_agents: 150,
                max_initial_speed: 10.0,
                seed: 42,
            },
            behavior: BehaviorConfig {
                neighborhood_range: params.neighborhood_range,
                neighborhood_fov_deg: params.neighborhood_fov.to_degrees(),
                separation_factor: params.separation_factor,
                separation_range: params.separation_range,
                alignment_factor: params.alignment_factor,
                cohesion_factor: params.cohesion_factor,
                speed_limit: params.speed_limit,
            },
            output: OutputConfig::default(),
        }
    }
}

impl FlockConfig {
    /// Loads the flock configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();

        let config_str = std::fs::read_to_string(path_ref)
            .with_context(|| format!("Failed to read config file '{}'", path_ref.display()))?;
        Self::from_toml_str(&config_str)
            .with_context(|| format!("Invalid configuration in '{}'", path_ref.display()))
    }

    /// Parses and validates a configuration held in memory.
    pub fn from_toml_str(config_str: &str) -> Result<Self> {
        let config: FlockConfig =
            toml::from_str(config_str).context("Failed to parse TOML configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects configurations the simulation cannot run with.
    pub fn validate(&self) -> Result<()> {
        let w = &self.world;
        if !(w.max_x > w.min_x && w.max_y > w.min_y) {
            anyhow::bail!(
                "World bounds must be non-empty (got x: {}..{}, y: {}..{}).",
                w.min_x, w.max_x, w.min_y, w.max_y
            );
        }
        if !(self.timing.dt_s > 0.0) {
            anyhow::bail!("dt_s must be positive.");
        }
        if self.timing.total_time_s < 0.0 || self.timing.record_interval_s < 0.0 {
            anyhow::bail!("total_time_s and record_interval_s must not be negative.");
        }
        if !(self.initial_conditions.max_initial_speed >= 0.0) {
            anyhow::bail!("max_initial_speed must not be negative.");
        }

        let b = &self.behavior;
        for (name, value) in [
            ("neighborhood_range", b.neighborhood_range),
            ("separation_range", b.separation_range),
            ("speed_limit", b.speed_limit),
        ] {
            if !(value >= 0.0) {
                anyhow::bail!("{} must not be negative (got {}).", name, value);
            }
        }
        if !(0.0..=180.0).contains(&b.neighborhood_fov_deg) {
            anyhow::bail!(
                "neighborhood_fov_deg must lie in [0, 180] (got {}).",
                b.neighborhood_fov_deg
            );
        }
        Ok(())
    }

    /// Converts the configuration into the parameters used at runtime.
    pub fn get_behavior_params(&self) -> BehaviorParameters {
        let b = &self.behavior;
        BehaviorParameters {
            neighborhood_range: b.neighborhood_range,
            neighborhood_fov: b.neighborhood_fov_deg.to_radians(),
            separation_factor: b.separation_factor,
            separation_range: b.separation_range,
            alignment_factor: b.alignment_factor,
            cohesion_factor: b.cohesion_factor,
            speed_limit: b.speed_limit,
        }
    }

    pub fn world_bounds(&self) -> WorldBounds {
        WorldBounds::new(
            Vec2::new(self.world.min_x, self.world.min_y),
            Vec2::new(self.world.max_x, self.world.max_y),
        )
    }

    /// Number of fixed steps needed to cover `total_time_s`.
    pub fn total_steps(&self) -> u32 {
        (self.timing.total_time_s / self.timing.dt_s).ceil() as u32
    }

    /// Steps between recorded snapshots, never less than one.
    pub fn record_interval_steps(&self) -> u32 {
        ((self.timing.record_interval_s / self.timing.dt_s).round() as u32).max(1)
    }
}
