//! Response Curve - Control response curves for Rust
//!
//! This library maps a control input (a knob position, a MIDI value, an
//! envelope stage) to an output value through one of two curve families:
//!
//! - [`LinearCurve`], built with [`linear`] or the [`linear!`] macro
//! - [`SampledCurve`], a clamped piecewise-linear lookup table built with
//!   [`array`] or its named constructors
//!
//! Every curve implements [`Curve`]; so does every `Fn(f64) -> f64` closure.
//!
//! # Examples
//!
//! ```
//! use response_curve::{Curve, array, linear};
//!
//! let gain = linear(0.0, 0.5, 1.0, None);
//! assert_eq!(gain.evaluate(0.25), 0.75);
//!
//! let taper = array(0.0, 1.0, 64usize, Some(&mut |x: f64| x * x))?;
//! assert!(taper.evaluate(0.5) < 0.5);
//! # Ok::<(), response_curve::CurveError>(())
//! ```
//!
//! # Features
//!
//! - `macros`: the `sampled!` macro, which builds a [`SampledCurve`] from
//!   literal entries and rejects empty tables at compile time

pub mod core;
pub mod curves;

// Re-export commonly used types at the crate root
pub use self::core::{Curve, CurveError, CurveExt};
pub use curves::{LinearCurve, SampledCurve, Samples, array, linear};

#[cfg(feature = "macros")]
pub use response_curve_macros::sampled;
