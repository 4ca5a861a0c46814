//! Episode driver for the tag scenario.

use crate::config::TagConfig;
use crate::simple_tag::SimpleTag;
use mpe::env::{EnvInfo, MultiAgentStepResult, ParallelEnv, Physics};
use mpe::scenario::Scenario;
use mpe::spaces::{Box as BoxSpace, DynSpace};
use mpe::world::{Role, World};
use mpe::{MpeError, Result};
use ndarray::ArrayD;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;

/// Parallel tag environment.
///
/// Motion is delegated to the `Physics` engine it owns; this type resets
/// the world, scores each tick and truncates after `max_cycles` ticks.
/// Agents are never terminated early.
pub struct TagEnv<P: Physics> {
    scenario: SimpleTag,
    world: World,
    physics: P,
    rng: StdRng,
    cycle: u32,
    /// Per-agent returns for the current episode
    returns: Vec<f32>,
    needs_reset: bool,
}

impl<P: Physics> TagEnv<P> {
    /// Build the world for `config`. Call `reset` before stepping.
    pub fn new(config: TagConfig, physics: P) -> Result<Self> {
        let scenario = SimpleTag::new(config)?;
        let world = scenario.make_world()?;
        let returns = vec![0.0; world.agents.len()];
        Ok(Self {
            scenario,
            world,
            physics,
            rng: StdRng::from_entropy(),
            cycle: 0,
            returns,
            needs_reset: true,
        })
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn scenario(&self) -> &SimpleTag {
        &self.scenario
    }

    pub fn physics(&self) -> &P {
        &self.physics
    }

    /// Ticks taken in the current episode
    pub fn cycle(&self) -> u32 {
        self.cycle
    }

    /// Returns accumulated so far in the current episode, in agent order
    pub fn episode_returns(&self) -> &[f32] {
        &self.returns
    }

    /// Summed episode return of every agent holding `role`
    pub fn team_return(&self, role: Role) -> f32 {
        self.world
            .agents
            .iter()
            .zip(&self.returns)
            .filter(|(agent, _)| agent.role == role)
            .map(|(_, r)| r)
            .sum()
    }

    fn observe_all(&self) -> Result<HashMap<u32, ArrayD<f32>>> {
        (0..self.world.agents.len())
            .map(|i| Ok((i as u32, self.scenario.observation(i, &self.world)?)))
            .collect()
    }

    fn agent_index(&self, agent: u32) -> Result<usize> {
        let index = agent as usize;
        if index < self.world.agents.len() {
            Ok(index)
        } else {
            Err(MpeError::UnknownAgent(index))
        }
    }
}

impl<P: Physics> ParallelEnv for TagEnv<P> {
    fn possible_agents(&self) -> Vec<String> {
        self.world.agents.iter().map(|a| a.name.clone()).collect()
    }

    fn num_agents(&self) -> usize {
        self.world.agents.len()
    }

    fn observation_space(&self, agent: u32) -> Result<DynSpace> {
        let index = self.agent_index(agent)?;
        let dim = self.scenario.observation_dim(index, &self.world)?;
        Ok(DynSpace::Box(BoxSpace::unbounded(&[dim])))
    }

    fn action_space(&self, agent: u32) -> Result<DynSpace> {
        let index = self.agent_index(agent)?;
        Ok(self.physics.action_space(&self.world, index))
    }

    fn reset(&mut self, seed: Option<u64>) -> Result<(HashMap<u32, ArrayD<f32>>, EnvInfo)> {
        if let Some(s) = seed {
            self.rng = StdRng::seed_from_u64(s);
        }
        tracing::debug!(seed = ?seed, "Resetting tag episode");

        self.scenario.reset_world(&mut self.world, &mut self.rng);
        self.cycle = 0;
        self.returns.iter_mut().for_each(|r| *r = 0.0);
        self.needs_reset = false;

        Ok((self.observe_all()?, EnvInfo::new()))
    }

    fn step(&mut self, actions: &HashMap<u32, ArrayD<f32>>) -> Result<MultiAgentStepResult> {
        if self.needs_reset {
            return Err(MpeError::EnvError(
                "episode is over or not started, call reset first".to_string(),
            ));
        }
        for &id in actions.keys() {
            self.agent_index(id)?;
        }

        self.physics.advance(&mut self.world, actions)?;
        self.cycle += 1;

        let rewards = self.scenario.rewards(&self.world)?;
        for (ret, reward) in self.returns.iter_mut().zip(&rewards) {
            *ret += reward;
        }
        let observations = self.observe_all()?;
        let captures = self.scenario.capture_count(&self.world);
        let truncated = self.cycle >= self.scenario.config().max_cycles;

        let mut info = EnvInfo::new().with_extra("captures", captures as f32);
        if truncated {
            self.needs_reset = true;
            info = info.with_episode_stats(self.returns.clone(), self.cycle);
            tracing::info!(
                cycles = self.cycle,
                adversary_return = self.team_return(Role::Adversary),
                cooperator_return = self.team_return(Role::Cooperator),
                "Tag episode truncated"
            );
        }

        let ids = 0..self.world.agents.len() as u32;
        Ok(MultiAgentStepResult {
            observations,
            rewards: ids.clone().zip(rewards).collect(),
            terminated: ids.clone().map(|id| (id, false)).collect(),
            truncated: ids.map(|id| (id, truncated)).collect(),
            info,
        })
    }

    fn is_done(&self) -> bool {
        self.needs_reset
    }
}
