//! Scenario trait and the geometric helpers scenarios share.

use crate::world::{Entity, World};
use crate::Result;
use ndarray::ArrayD;
use rand::Rng;

/// A scenario decides who lives in the world and how they are scored.
///
/// Implementations are stateless: every method reads (or, for
/// `reset_world`, rewrites) the `World` it is handed and nothing else, so
/// per-agent calls within a tick can run in any order.
pub trait Scenario: Send + Sync {
    /// Build the population. Deterministic.
    fn make_world(&self) -> Result<World>;

    /// Re-initialize colors and kinematic state for a new episode
    fn reset_world<R: Rng + ?Sized>(&self, world: &mut World, rng: &mut R);

    /// Reward for one agent at the current tick
    fn reward(&self, agent: usize, world: &World) -> Result<f32>;

    /// Rewards for every agent, in world order.
    ///
    /// Scenarios with shared team terms should override this to compute
    /// those terms once per tick.
    fn rewards(&self, world: &World) -> Result<Vec<f32>> {
        (0..world.agents.len()).map(|i| self.reward(i, world)).collect()
    }

    /// Egocentric observation vector for one agent
    fn observation(&self, agent: usize, world: &World) -> Result<ArrayD<f32>>;

    /// Length of `observation(agent, world)` without building it
    fn observation_dim(&self, agent: usize, world: &World) -> Result<usize>;
}

/// Euclidean distance between two entities' centers
pub fn distance<A, B>(a: &A, b: &B) -> f32
where
    A: Entity + ?Sized,
    B: Entity + ?Sized,
{
    a.position()
        .iter()
        .zip(b.position().iter())
        .map(|(p, q)| (p - q) * (p - q))
        .sum::<f32>()
        .sqrt()
}

/// True when the two bodies overlap: center distance strictly below the sum
/// of their radii. Purely geometric; collision response is the engine's job.
pub fn is_collision<A, B>(a: &A, b: &B) -> bool
where
    A: Entity + ?Sized,
    B: Entity + ?Sized,
{
    distance(a, b) < a.size() + b.size()
}
