//! The world snapshot shared between the physics engine and scenarios.
//!
//! A `World` owns an ordered list of agents and landmarks. Scenarios build
//! it once, reset it at the start of every episode, and otherwise only read
//! it; the physics engine is the other writer.

mod entity;

pub use entity::{Agent, Entity, EntityState, Landmark, Role};

use crate::{MpeError, Result};

/// Spatial dimensionality of the arena
pub const DIM_P: usize = 2;

/// Container for every entity in the arena plus scalar settings.
#[derive(Clone, Debug)]
pub struct World {
    pub agents: Vec<Agent>,
    pub landmarks: Vec<Landmark>,
    /// Spatial dimensionality
    pub dim_p: usize,
    /// Communication channel dimensionality
    pub dim_c: usize,
    /// Whether adversary velocities appear in other agents' observations
    pub obs_adversary_speeds: bool,
}

impl World {
    pub fn new(dim_c: usize) -> Self {
        Self {
            agents: Vec::new(),
            landmarks: Vec::new(),
            dim_p: DIM_P,
            dim_c,
            obs_adversary_speeds: true,
        }
    }

    /// Look up an agent by index
    pub fn agent(&self, index: usize) -> Result<&Agent> {
        self.agents.get(index).ok_or(MpeError::UnknownAgent(index))
    }

    pub fn agents_with_role(&self, role: Role) -> impl Iterator<Item = &Agent> {
        self.agents.iter().filter(move |a| a.role == role)
    }

    pub fn adversaries(&self) -> impl Iterator<Item = &Agent> {
        self.agents_with_role(Role::Adversary)
    }

    /// Agents that are neither adversaries nor neutrals
    pub fn cooperators(&self) -> impl Iterator<Item = &Agent> {
        self.agents_with_role(Role::Cooperator)
    }

    pub fn count(&self, role: Role) -> usize {
        self.agents_with_role(role).count()
    }

    /// Check every entity's kinematic state against the world dimensions.
    pub fn check_state(&self) -> Result<()> {
        for agent in &self.agents {
            agent.state.check(&agent.name, self.dim_p, Some(self.dim_c))?;
        }
        for landmark in &self.landmarks {
            landmark.state.check(&landmark.name, self.dim_p, None)?;
        }
        Ok(())
    }
}
