//! Core curve types and traits.
//!
//! This module provides the abstractions shared by every curve in the crate:
//! - `Curve` trait for anything that maps an input value to an output value
//! - `CurveExt` for convenience conversions
//! - `CurveError` for construction failures

mod curve;
mod error;

pub use curve::{Curve, CurveExt};
pub use error::CurveError;
