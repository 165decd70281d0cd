//! CSV ingestion for labeled point collections.
//!
//! User-supplied tables are messy, so the importer is deliberately
//! forgiving at the row level: any row whose `x`, `y` or value field is
//! missing or non-numeric is skipped. Structural problems (a header
//! without the required columns, or an unreadable document) are reported
//! as [`ImportError`] so callers can tell a bad file from an empty one.

use log::warn;
use playdata_helpers::{Float, Generator, LabeledPoint, Task};
use rand::Rng;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod dummy;

/// Errors that can occur while importing a CSV document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    /// The header row lacks a required logical column.
    MissingColumn(&'static str),
    /// The document could not be read as CSV at all.
    Malformed(String),
}

impl Display for ImportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportError::MissingColumn(name) => {
                write!(f, "CSV header is missing required column '{}'", name)
            }
            ImportError::Malformed(msg) => write!(f, "Malformed CSV document: {}", msg),
        }
    }
}

impl Error for ImportError {}

/// Parses CSV text into a labeled point collection.
///
/// The document needs a header row with columns `x`, `y` and `values`
/// (`value` is accepted as a fallback, in that order of precedence);
/// extra columns are ignored. Rows that fail numeric coercion are
/// silently dropped, so a well-formed document with no usable rows
/// yields `Ok` with an empty collection.
///
/// # Arguments
///
/// * `text`: the CSV document, header row included.
/// * `task`: for `Task::Regression` the value column is kept as-is; for
///   `Task::Classification` values `<= 0` become `-1` and the rest `+1`.
pub fn parse_points<F: Float>(text: &str, task: Task) -> Result<Vec<LabeledPoint<F>>, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());
    let headers = reader
        .headers()
        .map_err(|e| ImportError::Malformed(e.to_string()))?
        .clone();
    let position = |name: &str| headers.iter().position(|h| h == name);

    let x_idx = position("x").ok_or(ImportError::MissingColumn("x"))?;
    let y_idx = position("y").ok_or(ImportError::MissingColumn("y"))?;
    let value_idx = position("values")
        .or_else(|| position("value"))
        .ok_or(ImportError::MissingColumn("values"))?;

    let mut points = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| ImportError::Malformed(e.to_string()))?;
        let (Some(x), Some(y), Some(value)) = (
            numeric_field::<F>(&record, x_idx),
            numeric_field::<F>(&record, y_idx),
            numeric_field::<F>(&record, value_idx),
        ) else {
            continue;
        };
        let label = match task {
            Task::Regression => value,
            Task::Classification => {
                if value <= F::zero() {
                    -F::one()
                } else {
                    F::one()
                }
            }
        };
        points.push(LabeledPoint::new(x, y, label));
    }
    Ok(points)
}

/// Best-effort variant of [`parse_points`].
///
/// Structural failures are logged and flattened into an empty collection,
/// for callers that must stay responsive no matter what they were fed.
pub fn parse_points_lossy<F: Float>(text: &str, task: Task) -> Vec<LabeledPoint<F>> {
    match parse_points(text, task) {
        Ok(points) => points,
        Err(e) => {
            warn!("discarding CSV input: {}", e);
            Vec::new()
        }
    }
}

fn numeric_field<F: Float>(record: &csv::StringRecord, idx: usize) -> Option<F> {
    record.get(idx)?.trim().parse::<F>().ok()
}

/// Replays a previously produced collection through the generator contract.
///
/// `num_samples`, `noise` and the RNG are ignored; every call returns a
/// fresh copy, so callers can never mutate the backing collection (or each
/// other's copies) through the returned points.
#[derive(Debug, Clone)]
pub struct FixedCollection<F: Float> {
    points: Vec<LabeledPoint<F>>,
}

impl<F: Float> FixedCollection<F> {
    pub fn new(points: Vec<LabeledPoint<F>>) -> Self {
        FixedCollection { points }
    }

    /// Number of points in the backing collection.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl<F: Float> Generator<F> for FixedCollection<F> {
    fn generate<R: Rng + ?Sized>(
        &self,
        _num_samples: usize,
        _noise: F,
        _rng: &mut R,
    ) -> Vec<LabeledPoint<F>> {
        self.points.clone()
    }
}
