//! Sampled (lookup table) response curves.
//!
//! # Design Overview
//!
//! `SampledCurve` approximates an arbitrary response by storing its value at
//! `N` evenly spaced points across a domain `[min, max]` and interpolating
//! linearly between neighbouring entries.
//!
//! ## Table Layout
//!
//! - `step = (max - min) / N` is computed once at construction
//! - Entry `i` holds the response at `min + i * step`, so the last entry sits
//!   one step *below* `max`
//! - The table is never resized or modified after construction
//!
//! ## Evaluation
//!
//! For an input `v` the curve computes the table position
//! `p = (v - min) / step` and its integer part `base = floor(p)`:
//!
//! 1. `base <= 0` returns the first entry. This covers everything below the
//!    domain *and* the whole first segment `[min, min + step)`, which is held
//!    flat rather than interpolated.
//! 2. `base >= N` returns the last entry.
//! 3. Otherwise the result blends entries `base` and `base + 1` by the
//!    fractional position `t = p - base`. In the final segment there is no
//!    entry `base + 1`, and the last entry is held instead.
//!
//! ## Construction Methods
//!
//! ```
//! use response_curve::{Curve, SampledCurve};
//!
//! // From a pre-filled table
//! let curve = SampledCurve::from_samples(0.0, 1.0, vec![0.0, 10.0, 20.0])?;
//! assert!((curve.evaluate(0.5) - 15.0).abs() < 1e-9);
//!
//! // By sampling a function once per entry
//! let curve = SampledCurve::from_fn(0.0, 10.0, 5, |x| x * x)?;
//! assert_eq!(curve.samples(), &[0.0, 4.0, 16.0, 36.0, 64.0]);
//! # Ok::<(), response_curve::CurveError>(())
//! ```

use crate::{Curve, CurveError};

/// Source of the entries for a sampled curve.
///
/// This is the explicit form of the "count or table" argument taken by
/// [`array`]. Both variants convert from their natural Rust types.
///
/// # Examples
///
/// ```
/// use response_curve::Samples;
///
/// assert_eq!(Samples::from(16usize), Samples::Count(16));
/// assert_eq!(Samples::from([1.0, 2.0]), Samples::Table(vec![1.0, 2.0]));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Samples {
    /// Generate this many entries with a sampler function
    Count(usize),
    /// Use these entries as the table
    Table(Vec<f64>),
}

impl Samples {
    /// Number of entries the resulting table will hold.
    pub fn len(&self) -> usize {
        match self {
            Samples::Count(count) => *count,
            Samples::Table(table) => table.len(),
        }
    }

    /// Returns true if the resulting table would be empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<usize> for Samples {
    fn from(count: usize) -> Self {
        Samples::Count(count)
    }
}

impl From<Vec<f64>> for Samples {
    fn from(table: Vec<f64>) -> Self {
        Samples::Table(table)
    }
}

impl From<&[f64]> for Samples {
    fn from(table: &[f64]) -> Self {
        Samples::Table(table.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Samples {
    fn from(table: [f64; N]) -> Self {
        Samples::Table(table.to_vec())
    }
}

/// A response curve backed by an evenly spaced lookup table.
///
/// See the [module documentation](self) for the table layout and the exact
/// clamping rules.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledCurve {
    /// Lower bound of the domain
    min: f64,
    /// Upper bound of the domain
    max: f64,
    /// Domain width covered by one entry
    step: f64,
    /// Table entries, never empty
    samples: Vec<f64>,
}

impl SampledCurve {
    /// Creates a sampled curve from a pre-filled table.
    ///
    /// `min < max` is assumed and not checked.
    ///
    /// # Arguments
    ///
    /// * `min` - Lower bound of the domain
    /// * `max` - Upper bound of the domain
    /// * `samples` - Table entries, in ascending domain order
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::EmptyTable`] if `samples` is empty.
    pub fn from_samples(min: f64, max: f64, samples: Vec<f64>) -> Result<Self, CurveError> {
        if samples.is_empty() {
            return Err(CurveError::EmptyTable);
        }

        let step = (max - min) / samples.len() as f64;
        log::debug!(
            "sampled curve over [{min}, {max}] with {} samples (step {step})",
            samples.len()
        );

        Ok(Self {
            min,
            max,
            step,
            samples,
        })
    }

    /// Creates a sampled curve by sampling a function.
    ///
    /// `sampler` is called exactly `count` times, with
    /// `min, min + step, min + 2 * step, ...` in that order. It may have side
    /// effects.
    ///
    /// # Arguments
    ///
    /// * `min` - Lower bound of the domain
    /// * `max` - Upper bound of the domain
    /// * `count` - Number of table entries
    /// * `sampler` - Function mapping a domain position to the response there
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::EmptyTable`] if `count` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use response_curve::{Curve, SampledCurve};
    ///
    /// let mut calls = Vec::new();
    /// let curve = SampledCurve::from_fn(0.0, 10.0, 5, |x| {
    ///     calls.push(x);
    ///     x + 1.0
    /// })?;
    /// assert_eq!(calls, vec![0.0, 2.0, 4.0, 6.0, 8.0]);
    /// assert_eq!(curve.evaluate(2.0), 3.0);
    /// # Ok::<(), response_curve::CurveError>(())
    /// ```
    pub fn from_fn<F>(min: f64, max: f64, count: usize, mut sampler: F) -> Result<Self, CurveError>
    where
        F: FnMut(f64) -> f64,
    {
        if count == 0 {
            return Err(CurveError::EmptyTable);
        }

        let step = (max - min) / count as f64;
        let samples: Vec<f64> = (0..count).map(|i| sampler(min + i as f64 * step)).collect();

        Self::from_samples(min, max, samples)
    }

    /// Builds a curve from a table that was checked to be non-empty at
    /// compile time by the `sampled!` macro.
    #[doc(hidden)]
    pub fn from_literal_table(min: f64, max: f64, samples: Vec<f64>) -> Self {
        debug_assert!(!samples.is_empty());
        let step = (max - min) / samples.len() as f64;
        Self {
            min,
            max,
            step,
            samples,
        }
    }

    /// Gets the lower bound of the domain.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Gets the upper bound of the domain.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Gets the domain width covered by one table entry.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Gets the table entries.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Gets the number of table entries.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false: a built curve holds at least one entry.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Consumes the curve and returns its table.
    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }
}

impl Curve for SampledCurve {
    fn evaluate(&self, v: f64) -> f64 {
        let position = (v - self.min) / self.step;
        let base = position.floor();

        if base.is_nan() || base <= 0.0 {
            return self.samples[0];
        }
        if base >= self.samples.len() as f64 {
            return self.samples[self.samples.len() - 1];
        }

        let index = base as usize;
        let lower = self.samples[index];
        match self.samples.get(index + 1) {
            Some(&upper) => {
                let t = position - base;
                (1.0 - t) * lower + t * upper
            }
            // Final segment: hold the last entry
            None => lower,
        }
    }
}

/// Creates a sampled response curve.
///
/// With [`Samples::Table`] the entries are used directly and `sampler` is
/// ignored. With [`Samples::Count`] the table is generated with `sampler`,
/// see [`SampledCurve::from_fn`].
///
/// # Errors
///
/// - [`CurveError::EmptyTable`] if the table would have no entries
/// - [`CurveError::MissingSampler`] if a non-zero count is given without a
///   sampler
///
/// # Examples
///
/// ```
/// use response_curve::{Curve, CurveError, array};
///
/// let curve = array(0.0, 1.0, vec![0.0, 10.0, 20.0], None)?;
/// assert_eq!(curve.evaluate(-1.0), 0.0);
/// assert_eq!(curve.evaluate(2.0), 20.0);
///
/// let curve = array(0.0, 1.0, 4usize, Some(&mut |x: f64| 2.0 * x))?;
/// assert_eq!(curve.samples(), &[0.0, 0.5, 1.0, 1.5]);
///
/// assert_eq!(
///     array(0.0, 1.0, 4usize, None),
///     Err(CurveError::MissingSampler { count: 4 })
/// );
/// # Ok::<(), CurveError>(())
/// ```
pub fn array(
    min: f64,
    max: f64,
    samples: impl Into<Samples>,
    sampler: Option<&mut dyn FnMut(f64) -> f64>,
) -> Result<SampledCurve, CurveError> {
    match samples.into() {
        Samples::Table(table) => SampledCurve::from_samples(min, max, table),
        Samples::Count(0) => Err(CurveError::EmptyTable),
        Samples::Count(count) => {
            let sampler = sampler.ok_or(CurveError::MissingSampler { count })?;
            SampledCurve::from_fn(min, max, count, sampler)
        }
    }
}
