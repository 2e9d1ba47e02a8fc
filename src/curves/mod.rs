//! Response curve builders.
//!
//! This module provides the two curve families of the crate:
//! - `LinearCurve`, built from an origin and a slope or from two points
//! - `SampledCurve`, a clamped piecewise-linear lookup table

mod linear;
mod sampled;

pub use linear::{LinearCurve, linear};
pub use sampled::{SampledCurve, Samples, array};
