use crate::sample::euclidean;
use crate::Float;
use rand::Rng;

/// A single labeled 2D sample.
///
/// For classification datasets `label` is exactly `-1` or `+1`; for
/// regression datasets it lies in `[-1, 1]`. Points carry no identity
/// beyond value equality and duplicates are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde_crate::Serialize, serde_crate::Deserialize),
    serde(crate = "serde_crate")
)]
pub struct LabeledPoint<F: Float> {
    pub x: F,
    pub y: F,
    pub label: F,
}

impl<F: Float> LabeledPoint<F> {
    pub fn new(x: F, y: F, label: F) -> Self {
        LabeledPoint { x, y, label }
    }

    /// Euclidean distance to another point (labels ignored).
    pub fn distance_to(&self, other: &Self) -> F {
        euclidean(self.x, self.y, other.x, other.y)
    }
}

/// The kind of target a dataset carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde_crate::Serialize, serde_crate::Deserialize),
    serde(crate = "serde_crate")
)]
pub enum Task {
    Classification,
    Regression,
}

/// Anything that can produce a labeled point collection on demand.
///
/// The random source is always passed in by the caller, so generators stay
/// stateless and seeded runs are reproducible. Implementors that replay a
/// fixed collection may ignore `num_samples` and `noise`.
pub trait Generator<F: Float> {
    fn generate<R: Rng + ?Sized>(
        &self,
        num_samples: usize,
        noise: F,
        rng: &mut R,
    ) -> Vec<LabeledPoint<F>>;
}
