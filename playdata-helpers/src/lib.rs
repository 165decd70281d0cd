use num_traits::{FromPrimitive, NumCast};
use rand::distr::uniform::SampleUniform;

use std::fmt::{Debug, Display};
use std::str::FromStr;

// Include submodules
mod point;
mod sample;
mod shuffle;

// Re-export types from submodules
pub use point::{Generator, LabeledPoint, Task};
pub use sample::{euclidean, normal, scale_linear, scale_linear_clamped, seed_rng, uniform};
pub use shuffle::shuffle;

/// The float abstraction shared by every generator and the importer.
///
/// Implemented for `f32` and `f64`. The bounds cover everything the crate
/// family needs: geometry math (`num_traits::Float`), uniform sampling
/// (`SampleUniform`), and text coercion for the CSV importer (`FromStr`).
pub trait Float:
    num_traits::Float
    + FromPrimitive
    + Default
    + Debug
    + Display
    + SampleUniform
    + FromStr
    + std::marker::Unpin
    + 'static
{
    fn cast<T: NumCast>(x: T) -> Option<Self> {
        NumCast::from(x)
    }
}

impl Float for f32 {}

impl Float for f64 {}
