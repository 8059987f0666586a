use crate::agent::{Agent, AgentId};
use crate::flock_state::FlockState;
use crate::neighbors::{for_each_neighbor, neighbor_counts};
use crate::rules;
use anyhow::{Context, Result};
use flock_common::{BehaviorParameters, FlockConfig, Snapshot, Vec2, WorldBounds};
use log::{debug, info, trace};
use rand::distr::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::UnitCircle;

const MAX_EXPECTED_NEIGHBORS: usize = 32; // Histogram size for neighbor counts

/// Manages the flock and advances it one frame at a time.
#[derive(Debug, Clone)]
pub struct FlockSimulation {
    /// Agents (double-buffered), behavior parameters and world bounds.
    state: FlockState,
    /// Number of steps taken so far.
    current_time_step: u32,
    /// Sum of every `dt` passed to `step`, in seconds.
    elapsed_time: f32,
    /// Stores collected snapshots, in recording order.
    recorded_snapshots: Vec<Snapshot>,
}

impl FlockSimulation {
    /// Creates `count` agents with ids `0..count`, placed uniformly inside `bounds`
    /// and moving in a uniformly random direction at a speed in `[0, max_initial_speed]`.
    pub fn initialize<R: Rng + ?Sized>(
        count: usize,
        bounds: WorldBounds,
        max_initial_speed: f32,
        params: BehaviorParameters,
        rng: &mut R,
    ) -> Result<Self> {
        if !(bounds.width() > 0.0 && bounds.height() > 0.0) {
            anyhow::bail!("World bounds must be non-empty (got {:?}).", bounds);
        }
        if !(max_initial_speed >= 0.0 && max_initial_speed.is_finite()) {
            anyhow::bail!("max_initial_speed must be a finite, non-negative number (got {}).", max_initial_speed);
        }
        let count_u32 = u32::try_from(count)
            .with_context(|| format!("Agent count {} does not fit the id space", count))?;

        let dist_x = Uniform::new(bounds.min.x, bounds.max.x).context("Invalid x range for placement")?;
        let dist_y = Uniform::new(bounds.min.y, bounds.max.y).context("Invalid y range for placement")?;
        let dist_speed = Uniform::new_inclusive(0.0f32, max_initial_speed)
            .context("Invalid initial speed range")?;

        let agents: Vec<Agent> = (0..count_u32)
            .map(|id| {
                let position = Vec2::new(dist_x.sample(rng), dist_y.sample(rng));
                let [dx, dy]: [f32; 2] = UnitCircle.sample(rng);
                let velocity = Vec2::new(dx, dy) * dist_speed.sample(rng);
                Agent::new(AgentId(id), position, velocity)
            })
            .collect();

        debug!("Placed {} agents inside {:?}.", agents.len(), bounds);
        Ok(Self::from_state(FlockState::new(agents, params, bounds)))
    }

    /// Creates a seeded flock from the configuration.
    pub fn from_config(config: &FlockConfig) -> Result<Self> {
        config.validate()?;
        let ic = &config.initial_conditions;
        let mut rng = StdRng::seed_from_u64(ic.seed);
        info!("Seeding initial placement with {}.", ic.seed);

        Self::initialize(
            ic.num_agents as usize,
            config.world_bounds(),
            ic.max_initial_speed,
            config.get_behavior_params(),
            &mut rng,
        )
    }

    /// Creates a flock from explicit `(position, velocity)` pairs.
    /// Ids follow iteration order, starting at 0.
    pub fn with_agents<I>(agents: I, bounds: WorldBounds, params: BehaviorParameters) -> Self
    where
        I: IntoIterator<Item = (Vec2, Vec2)>,
    {
        let agents = agents
            .into_iter()
            .zip(0u32..)
            .map(|((position, velocity), id)| Agent::new(AgentId(id), position, velocity))
            .collect();
        Self::from_state(FlockState::new(agents, params, bounds))
    }

    fn from_state(state: FlockState) -> Self {
        Self {
            state,
            current_time_step: 0,
            elapsed_time: 0.0,
            recorded_snapshots: Vec::new(),
        }
    }

    /// Advances the flock by `dt` seconds.
    ///
    /// Every agent is steered against the previous generation only, then moved
    /// and wrapped once per axis. The new generation becomes visible after all
    /// agents have been updated.
    pub fn step(&mut self, dt: f32) {
        let params = self.state.params;
        let bounds = self.state.bounds;

        let (current, next) = self.state.buffers_mut();
        let mut neighbors: Vec<&Agent> = Vec::new();
        for (idx, out) in next.iter_mut().enumerate() {
            neighbors.clear();
            for_each_neighbor(idx, current, &params, |_, other| {
                neighbors.push(other);
                true
            });

            let agent = &current[idx];
            let velocity = rules::steer(agent, &neighbors, &params);
            out.set_velocity(velocity);
            out.set_position(bounds.wrap(agent.position() + velocity * dt));
        }

        // --- Swap Buffers: Output becomes Input for next step ---
        self.state.swap_buffers();

        self.current_time_step += 1;
        self.elapsed_time += dt;
        trace!("Step {} done (dt = {:.4} s).", self.current_time_step, dt);
    }

    pub fn agents(&self) -> &[Agent] {
        self.state.agents()
    }

    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        // Ids are assigned densely in creation order.
        self.state.agents().get(id.0 as usize).filter(|a| a.id() == id)
    }

    pub fn len(&self) -> usize {
        self.state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    pub fn params(&self) -> &BehaviorParameters {
        &self.state.params
    }

    /// Tuning access for a host; changes apply from the next step.
    pub fn params_mut(&mut self) -> &mut BehaviorParameters {
        &mut self.state.params
    }

    pub fn bounds(&self) -> WorldBounds {
        self.state.bounds
    }

    pub fn current_time_step(&self) -> u32 {
        self.current_time_step
    }

    pub fn elapsed_time(&self) -> f32 {
        self.elapsed_time
    }

    /// Neighbor-set size of every agent in the current generation.
    pub fn neighbor_counts(&self) -> Vec<u32> {
        neighbor_counts(self.state.agents(), &self.state.params)
    }

    /// Collects flock metrics for the current generation and stores them as a Snapshot.
    pub fn record_snapshot(&mut self, include_agents: bool) -> &Snapshot {
        let agents = self.state.agents();

        let mut speed_sum = 0.0f32;
        let mut heading_sum = Vec2::zero();
        for agent in agents {
            speed_sum += agent.speed();
            heading_sum += agent.velocity().normalize_or_zero();
        }
        let (mean_speed, polarization) = if agents.is_empty() {
            (0.0, 0.0)
        } else {
            let n = agents.len() as f32;
            (speed_sum / n, (heading_sum / n).length())
        };

        let counts = self.neighbor_counts();
        let mut neighbor_counts_distribution = vec![0u32; MAX_EXPECTED_NEIGHBORS];
        let mut overflow = 0;
        for &count in &counts {
            let bin = (count as usize).min(MAX_EXPECTED_NEIGHBORS - 1);
            if bin != count as usize {
                overflow += 1;
            }
            neighbor_counts_distribution[bin] += 1;
        }
        if overflow > 0 {
            debug!(
                "{} agents exceed {} neighbors; counted in the last bin.",
                overflow,
                MAX_EXPECTED_NEIGHBORS - 1
            );
        }

        let snapshot = Snapshot {
            step: self.current_time_step,
            time: self.elapsed_time,
            agent_count: agents.len() as u32,
            mean_speed,
            polarization,
            neighbor_counts_distribution,
            agents: include_agents.then(|| agents.iter().map(Agent::to_snapshot).collect()),
        };
        debug!(
            "Snapshot at step {}: mean speed {:.3}, polarization {:.3}.",
            snapshot.step, snapshot.mean_speed, snapshot.polarization
        );

        self.recorded_snapshots.push(snapshot);
        &self.recorded_snapshots[self.recorded_snapshots.len() - 1]
    }

    /// Provides access to the recorded snapshots.
    pub fn recorded_snapshots(&self) -> &[Snapshot] {
        &self.recorded_snapshots
    }
}
