//! Box (continuous) observation/action space

use super::Space;
use ndarray::{ArrayD, IxDyn};
use rand::Rng;
use rand_distr::{Distribution, Exp1, StandardNormal, Uniform};

/// Box space for continuous values with per-element bounds.
///
/// Bounds may be infinite. Particle observations are unbounded because
/// agents can drift arbitrarily far outside the arena.
#[derive(Clone, Debug)]
pub struct Box {
    /// Lower bound for each element
    pub low: ArrayD<f32>,
    /// Upper bound for each element
    pub high: ArrayD<f32>,
    shape: Vec<usize>,
}

impl Box {
    /// Create a new box space with given bounds
    pub fn new(low: ArrayD<f32>, high: ArrayD<f32>) -> Self {
        assert_eq!(low.shape(), high.shape(), "Low and high must have same shape");
        let shape = low.shape().to_vec();
        Self { low, high, shape }
    }

    /// Create a box space with uniform bounds
    pub fn uniform(shape: &[usize], low: f32, high: f32) -> Self {
        Self::new(
            ArrayD::from_elem(IxDyn(shape), low),
            ArrayD::from_elem(IxDyn(shape), high),
        )
    }

    /// Create a box space from -inf to +inf
    pub fn unbounded(shape: &[usize]) -> Self {
        Self::uniform(shape, f32::NEG_INFINITY, f32::INFINITY)
    }

    /// Create a symmetric box [-1, 1] for all elements
    pub fn symmetric(shape: &[usize]) -> Self {
        Self::uniform(shape, -1.0, 1.0)
    }

    /// True when every element has finite bounds on both sides
    pub fn is_bounded(&self) -> bool {
        self.low.iter().chain(self.high.iter()).all(|b| b.is_finite())
    }
}

// Gymnasium convention: uniform when bounded, normal when unbounded on both
// sides, shifted exponential when bounded on one side only.
fn sample_element<R: Rng>(low: f32, high: f32, rng: &mut R) -> f32 {
    match (low.is_finite(), high.is_finite()) {
        (true, true) if low < high => Uniform::new(low, high).sample(rng),
        (true, true) => low,
        (true, false) => {
            let e: f32 = Exp1.sample(rng);
            low + e
        }
        (false, true) => {
            let e: f32 = Exp1.sample(rng);
            high - e
        }
        (false, false) => StandardNormal.sample(rng),
    }
}

impl Space for Box {
    type Sample = ArrayD<f32>;

    fn sample<R: Rng>(&self, rng: &mut R) -> Self::Sample {
        let values: Vec<f32> = self
            .low
            .iter()
            .zip(self.high.iter())
            .map(|(&l, &h)| sample_element(l, h, rng))
            .collect();
        ArrayD::from_shape_vec(IxDyn(&self.shape), values)
            .unwrap_or_else(|_| ArrayD::zeros(IxDyn(&self.shape)))
    }

    fn contains(&self, value: &Self::Sample) -> bool {
        if value.shape() != self.low.shape() {
            return false;
        }
        value
            .iter()
            .zip(self.low.iter())
            .zip(self.high.iter())
            .all(|((&v, &l), &h)| v >= l && v <= h)
    }

    fn shape(&self) -> &[usize] {
        &self.shape
    }
}
