//! Hardcoded stand-in datasets.
//!
//! These presets fill the UI slots reserved for imported CSV data until a
//! real file is supplied. Each one draws a fixed number of points
//! ([`DUMMY_COUNT`]) from a fixed recipe; sample count and noise knobs do
//! not apply.

use playdata_helpers::{normal, scale_linear_clamped, uniform, Float, LabeledPoint};
use rand::Rng;
use regress::bump_label;

/// Number of points every preset returns.
pub const DUMMY_COUNT: usize = 100;

/// Two tight Gaussian clusters at `(2, 2)` and `(-2, -2)`, labels `+/-1`.
pub fn two_clusters<F, R>(rng: &mut R) -> Vec<LabeledPoint<F>>
where
    F: Float,
    R: Rng + ?Sized,
{
    let two = F::from(2.0).unwrap();
    let variance = F::from(0.5).unwrap();
    let mut points = Vec::with_capacity(DUMMY_COUNT);
    for i in 0..DUMMY_COUNT {
        let (cx, cy, label) = if i < DUMMY_COUNT / 2 {
            (two, two, F::one())
        } else {
            (-two, -two, -F::one())
        };
        let x = normal(cx, variance, rng);
        let y = normal(cy, variance, rng);
        points.push(LabeledPoint::new(x, y, label));
    }
    points
}

/// An inner disc (label `+1`) surrounded by a ring (label `-1`).
pub fn concentric_rings<F, R>(rng: &mut R) -> Vec<LabeledPoint<F>>
where
    F: Float,
    R: Rng + ?Sized,
{
    let tau = F::from(2.0 * std::f64::consts::PI).unwrap();
    let mut points = Vec::with_capacity(DUMMY_COUNT);
    for i in 0..DUMMY_COUNT {
        let (r_lo, r_hi, label) = if i < DUMMY_COUNT / 2 {
            (F::zero(), F::from(2.5).unwrap(), F::one())
        } else {
            (F::from(3.5).unwrap(), F::from(5.0).unwrap(), -F::one())
        };
        let r = uniform(r_lo, r_hi, rng);
        let angle = uniform(F::zero(), tau, rng);
        points.push(LabeledPoint::new(r * angle.sin(), r * angle.cos(), label));
    }
    points
}

/// A clean tilted plane: label is `x + y` scaled into `[-1, 1]`.
pub fn plane_grid<F, R>(rng: &mut R) -> Vec<LabeledPoint<F>>
where
    F: Float,
    R: Rng + ?Sized,
{
    let radius = F::from(6.0).unwrap();
    let ten = F::from(10.0).unwrap();
    let mut points = Vec::with_capacity(DUMMY_COUNT);
    for _ in 0..DUMMY_COUNT {
        let x = uniform(-radius, radius, rng);
        let y = uniform(-radius, radius, rng);
        let label = scale_linear_clamped(x + y, (-ten, ten), (-F::one(), F::one()));
        points.push(LabeledPoint::new(x, y, label));
    }
    points
}

/// A regression surface with one positive and one negative hill.
pub fn two_hills<F, R>(rng: &mut R) -> Vec<LabeledPoint<F>>
where
    F: Float,
    R: Rng + ?Sized,
{
    let three = F::from(3.0).unwrap();
    let hills = [
        (-three, F::zero(), F::one()),
        (three, F::zero(), -F::one()),
    ];
    let radius = F::from(6.0).unwrap();
    let mut points = Vec::with_capacity(DUMMY_COUNT);
    for _ in 0..DUMMY_COUNT {
        let x = uniform(-radius, radius, rng);
        let y = uniform(-radius, radius, rng);
        let label = bump_label(x, y, &hills);
        points.push(LabeledPoint::new(x, y, label));
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use playdata_helpers::{euclidean, seed_rng};

    #[test]
    fn test_presets_have_fixed_count() {
        let mut rng = seed_rng(40);
        assert_eq!(two_clusters::<f64, _>(&mut rng).len(), DUMMY_COUNT);
        assert_eq!(concentric_rings::<f64, _>(&mut rng).len(), DUMMY_COUNT);
        assert_eq!(plane_grid::<f64, _>(&mut rng).len(), DUMMY_COUNT);
        assert_eq!(two_hills::<f64, _>(&mut rng).len(), DUMMY_COUNT);
    }

    #[test]
    fn test_classification_presets_have_binary_labels() {
        let mut rng = seed_rng(41);
        for p in two_clusters::<f64, _>(&mut rng)
            .iter()
            .chain(concentric_rings::<f64, _>(&mut rng).iter())
        {
            assert!(p.label == 1.0 || p.label == -1.0);
        }
    }

    #[test]
    fn test_regression_presets_stay_in_unit_interval() {
        let mut rng = seed_rng(42);
        for p in plane_grid::<f64, _>(&mut rng)
            .iter()
            .chain(two_hills::<f64, _>(&mut rng).iter())
        {
            assert!((-1.0..=1.0).contains(&p.label), "label {}", p.label);
        }
    }

    #[test]
    fn test_concentric_rings_radii_match_labels() {
        let mut rng = seed_rng(43);
        for p in concentric_rings::<f64, _>(&mut rng) {
            let r = euclidean(p.x, p.y, 0.0, 0.0);
            if p.label > 0.0 {
                assert!(r < 2.5);
            } else {
                assert!((3.5..5.0).contains(&r));
            }
        }
    }
}
