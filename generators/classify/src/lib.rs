//! Synthetic 2D classification datasets.
//!
//! Every generator returns exactly `num_samples` points with labels that are
//! exactly `-1` or `+1`. The random source is supplied by the caller, so a
//! seeded RNG reproduces the same collection.

use playdata_helpers::{euclidean, normal, scale_linear, uniform, Float, LabeledPoint};
use rand::Rng;

/// Two Gaussian blobs, one per class.
///
/// The positive cluster sits at `(2, 2)`, the negative one at `(-2, -2)`.
/// Noise widens both blobs: it is mapped linearly from `[0, 0.5]` to a
/// variance in `[0.5, 4]`.
///
/// # Arguments
///
/// * `num_samples`: total number of points, split evenly across the clusters.
/// * `noise`: non-negative spread control.
/// * `rng`: random number generator.
pub fn two_gaussians<F, R>(num_samples: usize, noise: F, rng: &mut R) -> Vec<LabeledPoint<F>>
where
    F: Float,
    R: Rng + ?Sized,
{
    let half = F::from(0.5).unwrap();
    let variance = scale_linear(noise, (F::zero(), half), (half, F::from(4.0).unwrap()));
    let two = F::from(2.0).unwrap();

    let n_pos = num_samples / 2;
    let mut points = Vec::with_capacity(num_samples);
    gen_gauss_cluster(&mut points, n_pos, two, two, F::one(), variance, rng);
    gen_gauss_cluster(&mut points, num_samples - n_pos, -two, -two, -F::one(), variance, rng);
    points
}

fn gen_gauss_cluster<F, R>(
    points: &mut Vec<LabeledPoint<F>>,
    count: usize,
    cx: F,
    cy: F,
    label: F,
    variance: F,
    rng: &mut R,
) where
    F: Float,
    R: Rng + ?Sized,
{
    for _ in 0..count {
        let x = normal(cx, variance, rng);
        let y = normal(cy, variance, rng);
        points.push(LabeledPoint::new(x, y, label));
    }
}

/// Two interleaved spiral arms, offset by half a turn.
///
/// Each arm winds 1.75 revolutions outward to radius 5; noise adds uniform
/// jitter of amplitude `noise` to each coordinate.
pub fn spiral<F, R>(num_samples: usize, noise: F, rng: &mut R) -> Vec<LabeledPoint<F>>
where
    F: Float,
    R: Rng + ?Sized,
{
    let pi = F::from(std::f64::consts::PI).unwrap();
    let n_pos = num_samples / 2;
    let mut points = Vec::with_capacity(num_samples);
    gen_spiral_arm(&mut points, n_pos, F::zero(), F::one(), noise, rng);
    gen_spiral_arm(&mut points, num_samples - n_pos, pi, -F::one(), noise, rng);
    points
}

fn gen_spiral_arm<F, R>(
    points: &mut Vec<LabeledPoint<F>>,
    count: usize,
    delta: F,
    label: F,
    noise: F,
    rng: &mut R,
) where
    F: Float,
    R: Rng + ?Sized,
{
    let tau = F::from(2.0 * std::f64::consts::PI).unwrap();
    let winds = F::from(1.75).unwrap();
    let reach = F::from(5.0).unwrap();
    for i in 0..count {
        let frac = F::from(i).unwrap() / F::from(count).unwrap();
        let r = frac * reach;
        let t = winds * frac * tau + delta;
        let x = r * t.sin() + uniform(-F::one(), F::one(), rng) * noise;
        let y = r * t.cos() + uniform(-F::one(), F::one(), rng) * noise;
        points.push(LabeledPoint::new(x, y, label));
    }
}

/// A disc inside a surrounding ring.
///
/// Half the points are drawn inside radius 2.5 and half between radii 3.5
/// and 5. The stored coordinates are clean; the label comes from the
/// jittered position, so high noise flips points near the boundary.
pub fn circle<F, R>(num_samples: usize, noise: F, rng: &mut R) -> Vec<LabeledPoint<F>>
where
    F: Float,
    R: Rng + ?Sized,
{
    let radius = F::from(5.0).unwrap();
    let inner_max = radius * F::from(0.5).unwrap();
    let outer_min = radius * F::from(0.7).unwrap();

    let n_inside = num_samples / 2;
    let mut points = Vec::with_capacity(num_samples);
    gen_ring(&mut points, n_inside, F::zero(), inner_max, radius, noise, rng);
    gen_ring(
        &mut points,
        num_samples - n_inside,
        outer_min,
        radius,
        radius,
        noise,
        rng,
    );
    points
}

fn gen_ring<F, R>(
    points: &mut Vec<LabeledPoint<F>>,
    count: usize,
    r_lo: F,
    r_hi: F,
    radius: F,
    noise: F,
    rng: &mut R,
) where
    F: Float,
    R: Rng + ?Sized,
{
    let tau = F::from(2.0 * std::f64::consts::PI).unwrap();
    let threshold = radius * F::from(0.5).unwrap();
    for _ in 0..count {
        let r = uniform(r_lo, r_hi, rng);
        let angle = uniform(F::zero(), tau, rng);
        let x = r * angle.sin();
        let y = r * angle.cos();
        let noise_x = uniform(-radius, radius, rng) * noise;
        let noise_y = uniform(-radius, radius, rng) * noise;
        let label = if euclidean(x + noise_x, y + noise_y, F::zero(), F::zero()) < threshold {
            F::one()
        } else {
            -F::one()
        };
        points.push(LabeledPoint::new(x, y, label));
    }
}

/// The XOR quadrant pattern.
///
/// Points are uniform in `[-5, 5]²`, pushed 0.3 away from both axes so the
/// quadrants stay visually separated. The label is `+1` where the jittered
/// coordinates have matching signs and `-1` otherwise.
pub fn xor<F, R>(num_samples: usize, noise: F, rng: &mut R) -> Vec<LabeledPoint<F>>
where
    F: Float,
    R: Rng + ?Sized,
{
    let reach = F::from(5.0).unwrap();
    let padding = F::from(0.3).unwrap();
    let mut points = Vec::with_capacity(num_samples);
    for _ in 0..num_samples {
        let mut x = uniform(-reach, reach, rng);
        x = if x > F::zero() { x + padding } else { x - padding };
        let mut y = uniform(-reach, reach, rng);
        y = if y > F::zero() { y + padding } else { y - padding };
        let noise_x = uniform(-reach, reach, rng) * noise;
        let noise_y = uniform(-reach, reach, rng) * noise;
        let label = if (x + noise_x) * (y + noise_y) >= F::zero() {
            F::one()
        } else {
            -F::one()
        };
        points.push(LabeledPoint::new(x, y, label));
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use playdata_helpers::seed_rng;

    fn assert_binary_labels(points: &[LabeledPoint<f64>]) {
        for p in points {
            assert!(
                p.label == 1.0 || p.label == -1.0,
                "label {} is not +/-1",
                p.label
            );
        }
    }

    #[test]
    fn test_lengths_match_request() {
        let mut rng = seed_rng(1);
        for n in [0, 1, 2, 7, 100, 101] {
            assert_eq!(two_gaussians(n, 0.1, &mut rng).len(), n);
            assert_eq!(spiral(n, 0.1, &mut rng).len(), n);
            assert_eq!(circle(n, 0.1, &mut rng).len(), n);
            assert_eq!(xor(n, 0.1, &mut rng).len(), n);
        }
    }

    #[test]
    fn test_labels_are_binary() {
        let mut rng = seed_rng(2);
        assert_binary_labels(&two_gaussians(200, 0.5, &mut rng));
        assert_binary_labels(&spiral(200, 0.5, &mut rng));
        assert_binary_labels(&circle(200, 0.5, &mut rng));
        assert_binary_labels(&xor(200, 0.5, &mut rng));
    }

    #[test]
    fn test_two_gaussians_cluster_centers() {
        // With zero noise the variance is 0.5, so each cluster mean should
        // land close to its configured center.
        let mut rng = seed_rng(3);
        let points = two_gaussians::<f64, _>(1000, 0.0, &mut rng);
        let (mut px, mut py, mut nx, mut ny) = (0.0, 0.0, 0.0, 0.0);
        for p in &points {
            if p.label > 0.0 {
                px += p.x;
                py += p.y;
            } else {
                nx += p.x;
                ny += p.y;
            }
        }
        let half = points.len() as f64 / 2.0;
        assert!((px / half - 2.0).abs() < 0.3);
        assert!((py / half - 2.0).abs() < 0.3);
        assert!((nx / half + 2.0).abs() < 0.3);
        assert!((ny / half + 2.0).abs() < 0.3);
    }

    #[test]
    fn test_circle_clean_labels_match_radius() {
        let mut rng = seed_rng(4);
        for p in circle::<f64, _>(400, 0.0, &mut rng) {
            let r = euclidean(p.x, p.y, 0.0, 0.0);
            if p.label > 0.0 {
                assert!(r < 2.5, "inside point at radius {r}");
            } else {
                assert!(r >= 3.5, "outside point at radius {r}");
            }
        }
    }

    #[test]
    fn test_xor_clean_labels_match_quadrant() {
        let mut rng = seed_rng(5);
        for p in xor::<f64, _>(400, 0.0, &mut rng) {
            let expected = if p.x * p.y >= 0.0 { 1.0 } else { -1.0 };
            assert_eq!(p.label, expected, "bad quadrant label at {p:?}");
        }
    }

    #[test]
    fn test_spiral_arms_split_evenly() {
        let mut rng = seed_rng(6);
        let points = spiral::<f64, _>(201, 0.0, &mut rng);
        let positives = points.iter().filter(|p| p.label > 0.0).count();
        assert_eq!(positives, 100);
        assert_eq!(points.len() - positives, 101);
        // Arms are emitted in order, positive arm first.
        assert!(points[..100].iter().all(|p| p.label == 1.0));
    }

    #[test]
    fn test_same_seed_same_points() {
        let a = spiral::<f64, _>(64, 0.25, &mut seed_rng(99));
        let b = spiral::<f64, _>(64, 0.25, &mut seed_rng(99));
        assert_eq!(a, b);
    }
}
