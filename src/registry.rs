use playdata_helpers::{seed_rng, Float, Generator, LabeledPoint, Task};
use rand::Rng;
use std::fmt::{Display, Formatter};

/// Identifies one of the built-in synthetic datasets.
///
/// Hosting UIs key their dataset pickers off these variants (via
/// [`DatasetKind::from_name`]) instead of looking functions up by name at
/// runtime. The enum implements [`Generator`], so a kind can be used
/// anywhere a concrete generator can.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetKind {
    TwoGaussians,
    Spiral,
    Circle,
    Xor,
    Plane,
    MultiGaussian,
}

impl DatasetKind {
    /// Every built-in dataset, classification first.
    pub const ALL: [DatasetKind; 6] = [
        DatasetKind::TwoGaussians,
        DatasetKind::Spiral,
        DatasetKind::Circle,
        DatasetKind::Xor,
        DatasetKind::Plane,
        DatasetKind::MultiGaussian,
    ];

    /// Whether this dataset carries binary or continuous labels.
    pub fn task(self) -> Task {
        match self {
            DatasetKind::TwoGaussians
            | DatasetKind::Spiral
            | DatasetKind::Circle
            | DatasetKind::Xor => Task::Classification,
            DatasetKind::Plane | DatasetKind::MultiGaussian => Task::Regression,
        }
    }

    /// Stable identifier used by pickers and configuration.
    pub fn name(self) -> &'static str {
        match self {
            DatasetKind::TwoGaussians => "two-gaussians",
            DatasetKind::Spiral => "spiral",
            DatasetKind::Circle => "circle",
            DatasetKind::Xor => "xor",
            DatasetKind::Plane => "plane",
            DatasetKind::MultiGaussian => "multi-gaussian",
        }
    }

    /// Looks a dataset up by its stable name.
    pub fn from_name(name: &str) -> Option<DatasetKind> {
        DatasetKind::ALL.into_iter().find(|k| k.name() == name)
    }

    /// Generates with a fresh RNG seeded from `seed`.
    ///
    /// Two calls with identical arguments return identical collections.
    pub fn generate_seeded<F: Float>(
        self,
        num_samples: usize,
        noise: F,
        seed: u64,
    ) -> Vec<LabeledPoint<F>> {
        let mut rng = seed_rng(seed);
        self.generate(num_samples, noise, &mut rng)
    }
}

impl Display for DatasetKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl<F: Float> Generator<F> for DatasetKind {
    fn generate<R: Rng + ?Sized>(
        &self,
        num_samples: usize,
        noise: F,
        rng: &mut R,
    ) -> Vec<LabeledPoint<F>> {
        match self {
            DatasetKind::TwoGaussians => classify::two_gaussians(num_samples, noise, rng),
            DatasetKind::Spiral => classify::spiral(num_samples, noise, rng),
            DatasetKind::Circle => classify::circle(num_samples, noise, rng),
            DatasetKind::Xor => classify::xor(num_samples, noise, rng),
            DatasetKind::Plane => regress::plane(num_samples, noise, rng),
            DatasetKind::MultiGaussian => regress::multi_gaussian(num_samples, noise, rng),
        }
    }
}
