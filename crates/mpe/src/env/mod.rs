//! Environment traits and wrappers.
//!
//! Provides the `ParallelEnv` trait multi-agent environments implement, the
//! `Physics` seam they delegate motion to, and the `EpisodeStats` wrapper.

mod traits;
mod wrappers;

pub use traits::{EnvInfo, MultiAgentStepResult, ParallelEnv, Physics};
pub use wrappers::EpisodeStats;
