//! Discrete action space and the particle movement set

use super::Space;
use rand::Rng;

/// Size of the particle movement set
pub const MOVE_ACTIONS: usize = 5;

/// Actions `0..n`.
///
/// Particle engines use the five-action movement set from
/// [`Discrete::movement`]: stay, then -x, +x, -y, +y.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Discrete {
    pub n: usize,
    shape: Vec<usize>,
}

impl Discrete {
    pub fn new(n: usize) -> Self {
        assert!(n > 0, "an action space needs at least one action");
        Self { n, shape: vec![1] }
    }

    /// The five-action movement set
    pub fn movement() -> Self {
        Self::new(MOVE_ACTIONS)
    }

    /// Unit step in the plane for a movement action. `None` outside the set.
    pub fn move_direction(action: usize) -> Option<[f32; 2]> {
        match action {
            0 => Some([0.0, 0.0]),
            1 => Some([-1.0, 0.0]),
            2 => Some([1.0, 0.0]),
            3 => Some([0.0, -1.0]),
            4 => Some([0.0, 1.0]),
            _ => None,
        }
    }
}

impl Space for Discrete {
    type Sample = usize;

    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        rng.gen_range(0..self.n)
    }

    fn contains(&self, action: &usize) -> bool {
        *action < self.n
    }

    fn shape(&self) -> &[usize] {
        &self.shape
    }

    fn num_elements(&self) -> usize {
        1
    }
}
