use crate::agent::Agent;
use flock_common::{BehaviorParameters, WorldBounds};

/// Holds the flock state on the host.
#[derive(Debug, Clone)]
pub struct FlockState {
    pub params: BehaviorParameters,
    pub bounds: WorldBounds,

    // --- Ping-Pong Buffers ---
    // Current generation: read-only input to a step
    agents_in: Vec<Agent>,
    // Next generation: written by a step, becomes current after the swap
    agents_out: Vec<Agent>,
}

impl FlockState {
    pub fn new(agents: Vec<Agent>, params: BehaviorParameters, bounds: WorldBounds) -> Self {
        let agents_out = agents.clone();
        Self {
            params,
            bounds,
            agents_in: agents,
            agents_out,
        }
    }

    pub fn len(&self) -> usize {
        self.agents_in.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents_in.is_empty()
    }

    /// The current generation.
    pub fn agents(&self) -> &[Agent] {
        &self.agents_in
    }

    /// Splits the state into the frozen current generation and the output buffer.
    /// The output starts as a copy of the input so untouched agents carry over.
    pub fn buffers_mut(&mut self) -> (&[Agent], &mut [Agent]) {
        self.agents_out.copy_from_slice(&self.agents_in);
        (&self.agents_in, &mut self.agents_out)
    }

    /// Swaps the input and output buffers: output becomes the current generation.
    pub fn swap_buffers(&mut self) {
        std::mem::swap(&mut self.agents_in, &mut self.agents_out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::AgentId;
    use flock_common::Vec2;

    fn two_agents() -> Vec<Agent> {
        vec![
            Agent::new(AgentId(0), Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0)),
            Agent::new(AgentId(1), Vec2::new(5.0, 5.0), Vec2::new(0.0, 1.0)),
        ]
    }

    #[test]
    fn test_writes_stay_hidden_until_swap() {
        let mut state = FlockState::new(two_agents(), BehaviorParameters::default(), WorldBounds::default());
        {
            let (current, next) = state.buffers_mut();
            next[0].set_position(Vec2::new(9.0, 9.0));
            assert_eq!(current[0].position(), Vec2::new(0.0, 0.0));
        }
        assert_eq!(state.agents()[0].position(), Vec2::new(0.0, 0.0));

        state.swap_buffers();
        assert_eq!(state.agents()[0].position(), Vec2::new(9.0, 9.0));
        assert_eq!(state.agents()[1].position(), Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_output_buffer_is_refreshed_each_step() {
        let mut state = FlockState::new(two_agents(), BehaviorParameters::default(), WorldBounds::default());
        {
            let (_, next) = state.buffers_mut();
            next[1].set_velocity(Vec2::new(-3.0, 0.0));
        }
        state.swap_buffers();

        // The stale buffer from two generations ago must not leak back in.
        let (current, next) = state.buffers_mut();
        assert_eq!(next[1].velocity(), current[1].velocity());
        assert_eq!(next[1].velocity(), Vec2::new(-3.0, 0.0));
    }
}
