//! Simple tag configuration.

use mpe::world::Role;
use mpe::{MpeError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Construction-time settings for the tag scenario and its environment.
///
/// Missing fields fall back to the defaults when deserializing, so a config
/// file only needs the values it changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagConfig {
    /// Number of pursuers
    pub num_adversaries: usize,
    /// Number of evaders
    pub num_good: usize,
    /// Number of neutral agents
    pub num_neutral: usize,
    /// Number of static obstacles
    pub num_obstacles: usize,
    /// Ticks per episode before truncation
    pub max_cycles: u32,

    // Ability multipliers, applied to base acceleration and max speed
    pub abilities_good: f32,
    pub abilities_adversaries: f32,
    pub abilities_neutrals: f32,

    /// Expose adversary velocities in other agents' observations
    pub obs_adversary_speeds: bool,
    /// Add distance-based shaping on top of the capture rewards
    pub shape_rewards: bool,
}

impl Default for TagConfig {
    fn default() -> Self {
        Self {
            num_adversaries: 3,
            num_good: 1,
            num_neutral: 2,
            num_obstacles: 2,
            max_cycles: 25,
            abilities_good: 1.0,
            abilities_adversaries: 1.0,
            abilities_neutrals: 1.0,
            obs_adversary_speeds: true,
            shape_rewards: false,
        }
    }
}

impl TagConfig {
    /// Load a (possibly partial) JSON config
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn total_agents(&self) -> usize {
        self.num_adversaries + self.num_good + self.num_neutral
    }

    /// Ability multiplier for a role
    pub fn ability(&self, role: Role) -> f32 {
        match role {
            Role::Adversary => self.abilities_adversaries,
            Role::Cooperator => self.abilities_good,
            Role::Neutral => self.abilities_neutrals,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.total_agents() == 0 {
            return Err(MpeError::InvalidConfig(
                "at least one agent is required".to_string(),
            ));
        }
        if self.max_cycles == 0 {
            return Err(MpeError::InvalidConfig(
                "max_cycles must be positive".to_string(),
            ));
        }
        for role in [Role::Adversary, Role::Cooperator, Role::Neutral] {
            let ability = self.ability(role);
            if !ability.is_finite() || ability <= 0.0 {
                return Err(MpeError::InvalidConfig(format!(
                    "{role} ability multiplier must be positive and finite, got {ability}"
                )));
            }
        }
        Ok(())
    }
}
