//! Agents, landmarks and the kinematic state they share.

use crate::{MpeError, Result};
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Faction an agent belongs to. Exactly one per agent, fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Pursuer, rewarded for catching cooperators
    Adversary,
    /// Evader, penalized when caught or out of bounds
    Cooperator,
    /// Third faction with zero reward, hidden from the other two
    Neutral,
}

impl Role {
    /// Prefix used for agent names (`adversary_0`, `good_0`, `neutral_0`)
    pub fn base_name(self) -> &'static str {
        match self {
            Role::Adversary => "adversary",
            Role::Cooperator => "good",
            Role::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::Adversary => "adversary",
            Role::Cooperator => "cooperator",
            Role::Neutral => "neutral",
        };
        f.pad(s)
    }
}

impl FromStr for Role {
    type Err = MpeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "adversary" => Ok(Role::Adversary),
            "cooperator" | "good" => Ok(Role::Cooperator),
            "neutral" => Ok(Role::Neutral),
            other => Err(MpeError::InvalidConfig(format!("unknown agent role '{other}'"))),
        }
    }
}

/// Physical state written by the physics engine and the episode reset.
#[derive(Clone, Debug, PartialEq)]
pub struct EntityState {
    pub position: Array1<f32>,
    pub velocity: Array1<f32>,
    /// Communication utterance. Empty for landmarks.
    pub comm: Array1<f32>,
}

impl EntityState {
    pub fn zeros(dim_p: usize, dim_c: usize) -> Self {
        Self {
            position: Array1::zeros(dim_p),
            velocity: Array1::zeros(dim_p),
            comm: Array1::zeros(dim_c),
        }
    }

    /// Fail with `MalformedState` if a vector has the wrong length or holds
    /// non-finite values. `dim_c` of `None` skips the comm check.
    pub fn check(&self, entity: &str, dim_p: usize, dim_c: Option<usize>) -> Result<()> {
        let malformed = |reason: String| MpeError::MalformedState {
            entity: entity.to_string(),
            reason,
        };

        if self.position.len() != dim_p {
            return Err(malformed(format!(
                "position has {} components, expected {dim_p}",
                self.position.len()
            )));
        }
        if self.velocity.len() != dim_p {
            return Err(malformed(format!(
                "velocity has {} components, expected {dim_p}",
                self.velocity.len()
            )));
        }
        if let Some(dim_c) = dim_c {
            if self.comm.len() != dim_c {
                return Err(malformed(format!(
                    "comm has {} components, expected {dim_c}",
                    self.comm.len()
                )));
            }
        }
        if !self.position.iter().chain(self.velocity.iter()).all(|v| v.is_finite()) {
            return Err(malformed("non-finite position or velocity".to_string()));
        }
        Ok(())
    }
}

/// Anything with a body in the arena.
pub trait Entity {
    fn name(&self) -> &str;

    /// Collision radius
    fn size(&self) -> f32;

    fn collide(&self) -> bool;

    fn state(&self) -> &EntityState;

    fn position(&self) -> &Array1<f32> {
        &self.state().position
    }
}

/// A controllable particle.
#[derive(Clone, Debug)]
pub struct Agent {
    pub name: String,
    pub role: Role,
    pub size: f32,
    /// Acceleration capacity handed to the physics engine
    pub accel: f32,
    pub max_speed: f32,
    pub collide: bool,
    /// Silent agents never emit communication
    pub silent: bool,
    pub movable: bool,
    pub color: [f32; 3],
    pub state: EntityState,
}

impl Agent {
    pub fn new(name: impl Into<String>, role: Role, dim_p: usize, dim_c: usize) -> Self {
        Self {
            name: name.into(),
            role,
            size: 0.05,
            accel: 0.0,
            max_speed: 0.0,
            collide: true,
            silent: false,
            movable: true,
            color: [0.0; 3],
            state: EntityState::zeros(dim_p, dim_c),
        }
    }
}

impl Entity for Agent {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> f32 {
        self.size
    }

    fn collide(&self) -> bool {
        self.collide
    }

    fn state(&self) -> &EntityState {
        &self.state
    }
}

/// A non-controllable obstacle.
#[derive(Clone, Debug)]
pub struct Landmark {
    pub name: String,
    pub size: f32,
    pub collide: bool,
    pub movable: bool,
    /// Boundary landmarks stay fixed across resets and are not observed
    pub boundary: bool,
    pub color: [f32; 3],
    pub state: EntityState,
}

impl Landmark {
    pub fn new(name: impl Into<String>, dim_p: usize) -> Self {
        Self {
            name: name.into(),
            size: 0.05,
            collide: true,
            movable: false,
            boundary: false,
            color: [0.0; 3],
            state: EntityState::zeros(dim_p, 0),
        }
    }
}

impl Entity for Landmark {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> f32 {
        self.size
    }

    fn collide(&self) -> bool {
        self.collide
    }

    fn state(&self) -> &EntityState {
        &self.state
    }
}
