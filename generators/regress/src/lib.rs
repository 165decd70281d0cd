//! Synthetic 2D regression datasets.
//!
//! Labels are continuous and scaled into `[-1, 1]`. As with the
//! classification generators, the RNG is injected and the returned length
//! always equals `num_samples`.

use playdata_helpers::{euclidean, scale_linear_clamped, uniform, Float, LabeledPoint};
use rand::Rng;

/// A tilted plane: the label is `x + y` scaled from `[-10, 10]` into
/// `[-1, 1]` and clamped.
///
/// Coordinates are uniform in `[-6, 6]²`; noise adds a uniform term of
/// amplitude `6 * noise` to each coordinate *before* labeling, so the
/// stored point keeps its clean position but the target gets rougher.
pub fn plane<F, R>(num_samples: usize, noise: F, rng: &mut R) -> Vec<LabeledPoint<F>>
where
    F: Float,
    R: Rng + ?Sized,
{
    let radius = F::from(6.0).unwrap();
    let ten = F::from(10.0).unwrap();
    let mut points = Vec::with_capacity(num_samples);
    for _ in 0..num_samples {
        let x = uniform(-radius, radius, rng);
        let y = uniform(-radius, radius, rng);
        let noise_x = uniform(-radius, radius, rng) * noise;
        let noise_y = uniform(-radius, radius, rng) * noise;
        let label = scale_linear_clamped(
            x + noise_x + y + noise_y,
            (-ten, ten),
            (-F::one(), F::one()),
        );
        points.push(LabeledPoint::new(x, y, label));
    }
    points
}

/// The fixed bump centers used by [`multi_gaussian`]: `(x, y, sign)`.
pub fn bump_centers<F: Float>() -> [(F, F, F); 6] {
    let f = |v: f64| F::from(v).unwrap();
    [
        (f(-4.0), f(2.5), f(1.0)),
        (f(0.0), f(2.5), f(-1.0)),
        (f(4.0), f(2.5), f(1.0)),
        (f(-4.0), f(-2.5), f(-1.0)),
        (f(0.0), f(-2.5), f(1.0)),
        (f(4.0), f(-2.5), f(-1.0)),
    ]
}

/// Evaluates the bump surface at `(x, y)` and picks the dominant value.
///
/// Each bump contributes `sign * s` where `s` scales the distance to the
/// bump center from `[0, 2]` down to `[1, 0]` (clamped, so far-away bumps
/// contribute zero). Starting from zero, a bump replaces the running label
/// only when its absolute value is strictly larger, so on ties the earlier
/// bump wins.
pub fn bump_label<F: Float>(x: F, y: F, bumps: &[(F, F, F)]) -> F {
    let two = F::from(2.0).unwrap();
    let mut label = F::zero();
    for &(cx, cy, sign) in bumps {
        let d = euclidean(x, y, cx, cy);
        let value = sign * scale_linear_clamped(d, (F::zero(), two), (F::one(), F::zero()));
        if value.abs() > label.abs() {
            label = value;
        }
    }
    label
}

/// A surface of six alternating Gaussian-style bumps.
///
/// Coordinates are uniform in `[-6, 6]²`; the label is the dominant bump
/// value at the jittered position (see [`bump_label`]), which keeps it in
/// `[-1, 1]` by construction.
pub fn multi_gaussian<F, R>(num_samples: usize, noise: F, rng: &mut R) -> Vec<LabeledPoint<F>>
where
    F: Float,
    R: Rng + ?Sized,
{
    let radius = F::from(6.0).unwrap();
    let bumps = bump_centers::<F>();
    let mut points = Vec::with_capacity(num_samples);
    for _ in 0..num_samples {
        let x = uniform(-radius, radius, rng);
        let y = uniform(-radius, radius, rng);
        let noise_x = uniform(-radius, radius, rng) * noise;
        let noise_y = uniform(-radius, radius, rng) * noise;
        let label = bump_label(x + noise_x, y + noise_y, &bumps);
        points.push(LabeledPoint::new(x, y, label));
    }
    points
}
