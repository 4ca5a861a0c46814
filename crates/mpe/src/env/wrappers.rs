//! Environment wrappers for common functionality.

use super::{EnvInfo, MultiAgentStepResult, ParallelEnv};
use crate::spaces::DynSpace;
use crate::Result;
use ndarray::ArrayD;
use std::collections::HashMap;

/// Wrapper that tracks per-agent episode returns and episode length.
///
/// Adds `episode_returns` and `episode_length` to info on episode completion.
pub struct EpisodeStats<E: ParallelEnv> {
    env: E,
    episode_returns: Vec<f32>,
    episode_length: u32,
}

impl<E: ParallelEnv> EpisodeStats<E> {
    /// Wrap an environment with episode statistics tracking
    pub fn new(env: E) -> Self {
        let n = env.num_agents();
        Self {
            env,
            episode_returns: vec![0.0; n],
            episode_length: 0,
        }
    }

    /// Get a reference to the inner environment
    pub fn inner(&self) -> &E {
        &self.env
    }

    /// Get a mutable reference to the inner environment
    pub fn inner_mut(&mut self) -> &mut E {
        &mut self.env
    }

    /// Returns accumulated so far in the current episode
    pub fn running_returns(&self) -> &[f32] {
        &self.episode_returns
    }

    fn clear(&mut self) {
        self.episode_returns.iter_mut().for_each(|r| *r = 0.0);
        self.episode_length = 0;
    }
}

impl<E: ParallelEnv> ParallelEnv for EpisodeStats<E> {
    fn possible_agents(&self) -> Vec<String> {
        self.env.possible_agents()
    }

    fn num_agents(&self) -> usize {
        self.env.num_agents()
    }

    fn observation_space(&self, agent: u32) -> Result<DynSpace> {
        self.env.observation_space(agent)
    }

    fn action_space(&self, agent: u32) -> Result<DynSpace> {
        self.env.action_space(agent)
    }

    fn reset(&mut self, seed: Option<u64>) -> Result<(HashMap<u32, ArrayD<f32>>, EnvInfo)> {
        self.clear();
        self.env.reset(seed)
    }

    fn step(&mut self, actions: &HashMap<u32, ArrayD<f32>>) -> Result<MultiAgentStepResult> {
        let mut result = self.env.step(actions)?;

        for (&id, &reward) in &result.rewards {
            if let Some(slot) = self.episode_returns.get_mut(id as usize) {
                *slot += reward;
            }
        }
        self.episode_length += 1;

        if result.done() {
            tracing::debug!(length = self.episode_length, "Episode finished");
            result.info = result
                .info
                .with_episode_stats(self.episode_returns.clone(), self.episode_length);

            // Env will be reset externally
            self.clear();
        }

        Ok(result)
    }

    fn render(&self) -> Option<String> {
        self.env.render()
    }

    fn close(&mut self) {
        self.env.close()
    }

    fn is_done(&self) -> bool {
        self.env.is_done()
    }
}
