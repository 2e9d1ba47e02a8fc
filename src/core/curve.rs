//! Core curve evaluation trait.
//!
//! This module provides the fundamental `Curve` trait that represents any
//! immutable mapping from a control input to an output value.

/// Common interface for all response curves.
///
/// A curve is a pure function of its input: evaluating it never changes it,
/// so a single curve can be shared freely and evaluated from several threads.
///
/// The trait provides two fundamental operations:
/// - Single value evaluation via `evaluate()`
/// - Batch evaluation via `process()`
///
/// Every `Fn(f64) -> f64` closure is a curve too, which lets hand-written
/// mappings sit next to the built-in ones.
///
/// # Examples
///
/// ```
/// use response_curve::Curve;
///
/// let double = |v: f64| v * 2.0;
/// assert_eq!(double.evaluate(4.0), 8.0);
///
/// let mut buffer = vec![1.0, 2.0, 3.0];
/// double.process(&mut buffer);
/// assert_eq!(buffer, vec![2.0, 4.0, 6.0]);
/// ```
pub trait Curve {
    /// Evaluates the curve at `v`.
    fn evaluate(&self, v: f64) -> f64;

    /// Evaluates the curve for every value in `buffer`, in place.
    ///
    /// Default implementation calls `evaluate()` for each element.
    /// Implementors may override this for more efficient batch processing.
    ///
    /// # Arguments
    ///
    /// * `buffer` - Input values, overwritten with the curve's outputs
    fn process(&self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.evaluate(*value);
        }
    }
}

impl<F> Curve for F
where
    F: Fn(f64) -> f64,
{
    fn evaluate(&self, v: f64) -> f64 {
        self(v)
    }
}

/// Extension methods available on every [`Curve`].
pub trait CurveExt: Curve + Sized {
    /// Converts the curve into a plain closure that owns it.
    ///
    /// Useful for hosts that take an `impl Fn(f64) -> f64` callback.
    ///
    /// # Examples
    ///
    /// ```
    /// use response_curve::{CurveExt, LinearCurve};
    ///
    /// let f = LinearCurve::from_slope(0.0, 1.0, 3.0).into_fn();
    /// let outputs: Vec<f64> = [0.0, 1.0].into_iter().map(f).collect();
    /// assert_eq!(outputs, vec![1.0, 2.0]);
    /// ```
    fn into_fn(self) -> impl Fn(f64) -> f64 {
        move |v| self.evaluate(v)
    }
}

impl<C: Curve> CurveExt for C {}

#[cfg(test)]
mod tests {
    use super::*;

    struct Square;

    impl Curve for Square {
        fn evaluate(&self, v: f64) -> f64 {
            v * v
        }
    }

    #[test]
    fn test_closure_is_curve() {
        let offset = |v: f64| v + 0.5;
        assert_eq!(offset.evaluate(1.0), 1.5);
    }

    #[test]
    fn test_default_process() {
        let mut buffer = [1.0, -2.0, 3.0];
        Square.process(&mut buffer);
        assert_eq!(buffer, [1.0, 4.0, 9.0]);
    }

    #[test]
    fn test_process_empty_buffer() {
        let mut buffer: [f64; 0] = [];
        Square.process(&mut buffer);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_into_fn() {
        let f = Square.into_fn();
        assert_eq!(f(3.0), 9.0);
    }
}
