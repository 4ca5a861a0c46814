//! # MPE
//!
//! Core building blocks for 2-D multi-agent particle environments.
//!
//! ## Overview
//!
//! This crate provides:
//! - The entity model (`Agent`, `Landmark`, `Role`, `World`) that a physics
//!   engine advances and scenarios read
//! - The `Scenario` trait plus the shared collision predicate
//! - Observation and action spaces
//! - The `ParallelEnv` trait for all-agents-at-once stepping, the `Physics`
//!   seam for external integrators, and the `EpisodeStats` wrapper
//!
//! Concrete scenarios live in `mpe-envs`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use mpe::prelude::*;
//! use mpe_envs::{SimpleTag, TagConfig};
//! use rand::SeedableRng;
//!
//! let scenario = SimpleTag::new(TagConfig::default())?;
//! let mut world = scenario.make_world()?;
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! scenario.reset_world(&mut world, &mut rng);
//!
//! let rewards = scenario.rewards(&world)?;
//! let obs = scenario.observation(0, &world)?;
//! ```

pub mod env;
pub mod scenario;
pub mod spaces;
pub mod world;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::env::{EnvInfo, EpisodeStats, MultiAgentStepResult, ParallelEnv, Physics};
    pub use crate::scenario::{is_collision, Scenario};
    pub use crate::spaces::*;
    pub use crate::world::{Agent, Entity, EntityState, Landmark, Role, World};
    pub use crate::{MpeError, Result};
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error types for the library
#[derive(Debug, thiserror::Error)]
pub enum MpeError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Malformed state for {entity}: {reason}")]
    MalformedState { entity: String, reason: String },

    #[error("Unknown agent index {0}")]
    UnknownAgent(usize),

    #[error("Physics error: {0}")]
    Physics(String),

    #[error("Environment error: {0}")]
    EnvError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, MpeError>;
