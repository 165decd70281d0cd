use crate::Float;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Returns a sample uniformly drawn from `[lo, hi)`.
///
/// The caller must ensure `lo <= hi`; the degenerate range `lo == hi`
/// returns `lo`.
pub fn uniform<F, R>(lo: F, hi: F, rng: &mut R) -> F
where
    F: Float,
    R: Rng + ?Sized,
{
    if lo < hi {
        rng.random_range(lo..hi)
    } else {
        lo
    }
}

/// Samples from a normal distribution via the Marsaglia polar method.
///
/// Draws two uniforms `v1, v2` in `(-1, 1)` until their squared sum `s`
/// lands in `(0, 1]`, then transforms one of them. The `s > 0` check matters:
/// both uniforms can come out as exactly zero, and `ln(0)` is not a number
/// anyone wants.
///
/// # Arguments
///
/// * `mean`: center of the distribution.
/// * `variance`: spread of the distribution (not the standard deviation).
/// * `rng`: random number generator.
pub fn normal<F, R>(mean: F, variance: F, rng: &mut R) -> F
where
    F: Float,
    R: Rng + ?Sized,
{
    let one = F::one();
    let two = F::from(2.0).unwrap();
    loop {
        let v1 = uniform(-one, one, rng);
        let v2 = uniform(-one, one, rng);
        let s = v1 * v1 + v2 * v2;
        if s > F::zero() && s <= one {
            let result = (-two * s.ln() / s).sqrt() * v1;
            return mean + variance.sqrt() * result;
        }
    }
}

/// Euclidean distance between `(ax, ay)` and `(bx, by)`.
pub fn euclidean<F: Float>(ax: F, ay: F, bx: F, by: F) -> F {
    let dx = ax - bx;
    let dy = ay - by;
    (dx * dx + dy * dy).sqrt()
}

/// Linearly maps `v` from `domain` to `range`.
///
/// The mapping extrapolates outside the domain; use
/// [`scale_linear_clamped`] to pin the result inside the range.
pub fn scale_linear<F: Float>(v: F, domain: (F, F), range: (F, F)) -> F {
    let (d0, d1) = domain;
    let (r0, r1) = range;
    r0 + (v - d0) * (r1 - r0) / (d1 - d0)
}

/// Like [`scale_linear`], but clamps the result to the range.
pub fn scale_linear_clamped<F: Float>(v: F, domain: (F, F), range: (F, F)) -> F {
    let (r0, r1) = range;
    let (lo, hi) = if r0 < r1 { (r0, r1) } else { (r1, r0) };
    scale_linear(v, domain, range).max(lo).min(hi)
}

/// Builds a seeded RNG for reproducible generation runs.
pub fn seed_rng(seed: u64) -> Xoshiro256PlusPlus {
    Xoshiro256PlusPlus::seed_from_u64(seed)
}
