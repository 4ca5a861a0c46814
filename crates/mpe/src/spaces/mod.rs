//! Observation and action space types.
//!
//! Gymnasium-style descriptions of what an environment emits and accepts.
//! Multi-agent environments hand out one space per agent, since observation
//! sizes can differ between roles.

mod r#box;
mod discrete;

pub use discrete::{Discrete, MOVE_ACTIONS};
pub use r#box::Box;

use ndarray::{ArrayD, IxDyn};
use rand::Rng;

/// Trait for observation and action spaces
pub trait Space: Clone + Send + Sync {
    /// The type of samples from this space
    type Sample;

    /// Sample a random element from this space
    fn sample<R: Rng>(&self, rng: &mut R) -> Self::Sample;

    /// Check if a value is contained in this space
    fn contains(&self, value: &Self::Sample) -> bool;

    /// Get the shape of samples from this space
    fn shape(&self) -> &[usize];

    /// Get the total number of elements in a sample
    fn num_elements(&self) -> usize {
        self.shape().iter().product()
    }
}

/// Enum for dynamic space types
#[derive(Clone, Debug)]
pub enum DynSpace {
    Discrete(Discrete),
    Box(Box),
}

impl DynSpace {
    /// Get the shape of this space
    pub fn shape(&self) -> Vec<usize> {
        match self {
            DynSpace::Discrete(s) => s.shape().to_vec(),
            DynSpace::Box(s) => s.shape().to_vec(),
        }
    }

    /// Number of scalars in one flattened sample
    pub fn flat_dim(&self) -> usize {
        match self {
            DynSpace::Discrete(s) => s.num_elements(),
            DynSpace::Box(s) => s.num_elements(),
        }
    }

    /// Sample from this space as a flat `f32` array
    pub fn sample<R: Rng>(&self, rng: &mut R) -> ArrayD<f32> {
        match self {
            DynSpace::Discrete(s) => ArrayD::from_elem(IxDyn(&[1]), s.sample(rng) as f32),
            DynSpace::Box(s) => s.sample(rng),
        }
    }

    /// Check if this space contains the value
    pub fn contains(&self, value: &ArrayD<f32>) -> bool {
        match self {
            DynSpace::Discrete(s) => match value.iter().next() {
                Some(&v) if value.len() == 1 && v >= 0.0 => s.contains(&(v.round() as usize)),
                _ => false,
            },
            DynSpace::Box(s) => s.contains(value),
        }
    }
}
