//! Synthetic 2D labeled datasets for classification and regression demos.
//!
//! The workspace root re-exports the whole public surface: the generator
//! functions from `classify` and `regress`, the CSV importer from
//! `csv-import`, the shared types and sampling utilities from
//! `playdata-helpers`, and the [`DatasetKind`] registry defined here.
//!
//! A typical caller picks a dataset, generates points with an RNG it owns,
//! and shuffles before splitting into train/test:
//!
//! ```
//! use playdata::{seed_rng, shuffle, DatasetKind, Generator};
//!
//! let mut rng = seed_rng(7);
//! let mut points: Vec<playdata::LabeledPoint<f64>> =
//!     DatasetKind::Spiral.generate(200, 0.05, &mut rng);
//! shuffle(&mut points, &mut rng);
//! assert_eq!(points.len(), 200);
//! ```

mod registry;

pub use classify::{circle, spiral, two_gaussians, xor};
pub use csv_import::{dummy, parse_points, parse_points_lossy, FixedCollection, ImportError};
pub use playdata_helpers::{
    euclidean, normal, scale_linear, scale_linear_clamped, seed_rng, shuffle, uniform, Float,
    Generator, LabeledPoint, Task,
};
pub use regress::{bump_centers, bump_label, multi_gaussian, plane};
pub use registry::DatasetKind;
