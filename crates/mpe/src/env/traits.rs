//! Core environment trait definitions.

use crate::spaces::DynSpace;
use crate::world::World;
use crate::Result;
use ndarray::ArrayD;
use std::collections::HashMap;

/// Information returned from environment steps
#[derive(Clone, Debug, Default)]
pub struct EnvInfo {
    /// Episode length (if done)
    pub episode_length: Option<u32>,
    /// Per-agent episode returns in agent order (if done)
    pub episode_returns: Option<Vec<f32>>,
    /// Custom metrics (kept minimal for performance)
    pub extra: smallvec::SmallVec<[(&'static str, f32); 4]>,
}

impl EnvInfo {
    /// Create empty info
    pub fn new() -> Self {
        Self::default()
    }

    /// Add episode stats
    pub fn with_episode_stats(mut self, returns: Vec<f32>, len: u32) -> Self {
        self.episode_returns = Some(returns);
        self.episode_length = Some(len);
        self
    }

    /// Add a custom metric
    pub fn with_extra(mut self, key: &'static str, value: f32) -> Self {
        self.extra.push((key, value));
        self
    }

    /// Get a scalar value by key
    pub fn get(&self, key: &str) -> Option<f32> {
        match key {
            "episode_length" => self.episode_length.map(|l| l as f32),
            _ => self.extra.iter().find(|(k, _)| k == &key).map(|(_, v)| *v),
        }
    }
}

/// Result from a parallel multi-agent step, keyed by agent index
#[derive(Clone, Debug, Default)]
pub struct MultiAgentStepResult {
    /// Observations for each agent
    pub observations: HashMap<u32, ArrayD<f32>>,
    /// Rewards for each agent
    pub rewards: HashMap<u32, f32>,
    /// Terminated flags for each agent
    pub terminated: HashMap<u32, bool>,
    /// Truncated flags for each agent
    pub truncated: HashMap<u32, bool>,
    /// Additional info
    pub info: EnvInfo,
}

impl MultiAgentStepResult {
    /// True once every agent is terminated or truncated
    pub fn done(&self) -> bool {
        self.observations.keys().all(|id| {
            self.terminated.get(id).copied().unwrap_or(false)
                || self.truncated.get(id).copied().unwrap_or(false)
        })
    }
}

/// Environment where every agent acts on every tick (PettingZoo "parallel"
/// API). Agents are identified by their index in the world.
pub trait ParallelEnv: Send {
    /// Names of all agents, index-aligned with the IDs used elsewhere
    fn possible_agents(&self) -> Vec<String>;

    /// Get total number of agents
    fn num_agents(&self) -> usize {
        self.possible_agents().len()
    }

    /// Observation space of one agent. Sizes may differ between agents.
    fn observation_space(&self, agent: u32) -> Result<DynSpace>;

    /// Action space of one agent
    fn action_space(&self, agent: u32) -> Result<DynSpace>;

    /// Reset the environment
    ///
    /// # Arguments
    /// * `seed` - Optional random seed for reproducibility
    fn reset(&mut self, seed: Option<u64>) -> Result<(HashMap<u32, ArrayD<f32>>, EnvInfo)>;

    /// Advance one tick with an action per agent
    fn step(&mut self, actions: &HashMap<u32, ArrayD<f32>>) -> Result<MultiAgentStepResult>;

    /// Optional: Render the environment
    fn render(&self) -> Option<String> {
        None
    }

    /// Optional: Close the environment and free resources
    fn close(&mut self) {}

    /// Check if environment is done and needs reset
    fn is_done(&self) -> bool {
        false
    }
}

/// The engine that moves particles. Scenarios never integrate motion
/// themselves; an environment owns a `Physics` and calls it once per tick.
pub trait Physics: Send {
    /// Actions this engine understands for one agent
    fn action_space(&self, world: &World, agent: usize) -> DynSpace;

    /// Apply actions and integrate one tick, mutating entity state in place
    fn advance(&mut self, world: &mut World, actions: &HashMap<u32, ArrayD<f32>>) -> Result<()>;
}
