//! Linear response curves.
//!
//! A linear curve is anchored at an origin point `(x, y)` and carries a
//! slope `m`. It evaluates as
//!
//! ```text
//! f(v) = y + (v - x * m)
//! ```
//!
//! Only the origin term is scaled by the slope; the input passes through with
//! a coefficient of one. This is not the point-slope form.
//!
//! The two-point constructor derives the slope as `(x2 - x) / (y2 - y)`
//! (run over rise).

use crate::Curve;

/// A linear response curve.
///
/// # Examples
///
/// ```
/// use response_curve::{Curve, LinearCurve};
///
/// let curve = LinearCurve::from_slope(1.0, 2.0, 0.5);
/// // 2.0 + (4.0 - 1.0 * 0.5)
/// assert_eq!(curve.evaluate(4.0), 5.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearCurve {
    x: f64,
    y: f64,
    slope: f64,
}

impl LinearCurve {
    /// Creates a linear curve from an origin point and a slope.
    ///
    /// # Arguments
    ///
    /// * `x` - Origin input value
    /// * `y` - Origin output value
    /// * `slope` - Slope, used as given
    pub fn from_slope(x: f64, y: f64, slope: f64) -> Self {
        log::trace!("linear curve at ({x}, {y}) with slope {slope}");
        Self { x, y, slope }
    }

    /// Creates a linear curve from two points.
    ///
    /// The slope is `(x2 - x) / (y2 - y)`. When `y2 == y` the slope is
    /// infinite or NaN and every evaluation returns a non-finite value; this
    /// is not treated as an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use response_curve::LinearCurve;
    ///
    /// let curve = LinearCurve::from_points(0.0, 0.0, 4.0, 2.0);
    /// assert_eq!(curve.slope(), 2.0);
    /// ```
    pub fn from_points(x: f64, y: f64, x2: f64, y2: f64) -> Self {
        let slope = (x2 - x) / (y2 - y);
        if !slope.is_finite() {
            log::warn!("linear curve through ({x}, {y}) and ({x2}, {y2}) has non-finite slope");
        }
        Self::from_slope(x, y, slope)
    }

    /// Gets the origin point `(x, y)`.
    pub fn origin(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Gets the slope.
    pub fn slope(&self) -> f64 {
        self.slope
    }
}

impl Curve for LinearCurve {
    #[inline]
    fn evaluate(&self, v: f64) -> f64 {
        self.y + (v - self.x * self.slope)
    }
}

/// Creates a linear response curve.
///
/// When `y2` is `None`, `x2_or_slope` is the slope of the line. Otherwise the
/// curve runs through `(x, y)` and `(x2_or_slope, y2)`, see
/// [`LinearCurve::from_points`].
///
/// # Examples
///
/// ```
/// use response_curve::{Curve, linear};
///
/// let by_slope = linear(0.0, 1.0, 2.0, None);
/// let by_points = linear(0.0, 1.0, 2.0, Some(2.0));
/// assert_eq!(by_slope, by_points);
/// assert_eq!(by_slope.evaluate(3.0), 4.0);
/// ```
pub fn linear(x: f64, y: f64, x2_or_slope: f64, y2: Option<f64>) -> LinearCurve {
    match y2 {
        Some(y2) => LinearCurve::from_points(x, y, x2_or_slope, y2),
        None => LinearCurve::from_slope(x, y, x2_or_slope),
    }
}

/// Creates a [`LinearCurve`] from three or four arguments.
///
/// `linear!(x, y, slope)` is [`LinearCurve::from_slope`] and
/// `linear!(x, y, x2, y2)` is [`LinearCurve::from_points`]. Arguments are
/// converted with `as f64`, so integer literals work.
///
/// # Examples
///
/// ```
/// use response_curve::{Curve, linear};
///
/// let curve = linear!(0, 1, 2);
/// assert_eq!(curve.slope(), 2.0);
/// assert_eq!(curve.evaluate(3.0), 4.0);
///
/// let curve = linear!(0.0, 0.0, 4.0, 2.0);
/// assert_eq!(curve.slope(), 2.0);
/// ```
#[macro_export]
macro_rules! linear {
    ($x:expr, $y:expr, $slope:expr $(,)?) => {
        $crate::LinearCurve::from_slope($x as f64, $y as f64, $slope as f64)
    };
    ($x:expr, $y:expr, $x2:expr, $y2:expr $(,)?) => {
        $crate::LinearCurve::from_points($x as f64, $y as f64, $x2 as f64, $y2 as f64)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_slope_form() {
        let curve = LinearCurve::from_slope(2.0, 3.0, 4.0);
        assert_eq!(curve.slope(), 4.0);
        assert_eq!(curve.origin(), (2.0, 3.0));
        // 3 + (10 - 2 * 4)
        assert_eq!(curve.evaluate(10.0), 5.0);
    }

    #[test]
    fn test_input_has_unit_coefficient() {
        // Whatever the slope, stepping the input by 1 steps the output by 1.
        for slope in [-3.0, 0.0, 0.25, 7.0] {
            let curve = LinearCurve::from_slope(1.5, -2.0, slope);
            assert!(approx_eq(curve.evaluate(6.0) - curve.evaluate(5.0), 1.0));
        }
    }

    #[test]
    fn test_not_point_slope() {
        // Point-slope would give 1 + 2 * (5 - 1) = 9.
        let curve = LinearCurve::from_slope(1.0, 1.0, 2.0);
        assert_eq!(curve.evaluate(5.0), 4.0);
    }

    #[test]
    fn test_two_point_slope_is_run_over_rise() {
        let curve = LinearCurve::from_points(1.0, 2.0, 7.0, 5.0);
        // (7 - 1) / (5 - 2)
        assert_eq!(curve.slope(), 2.0);
        assert_eq!(curve.evaluate(0.0), 2.0 + (0.0 - 1.0 * 2.0));
    }

    #[test]
    fn test_flat_points_give_non_finite_output() {
        let curve = LinearCurve::from_points(1.0, 1.0, 4.0, 1.0);
        assert!(curve.slope().is_infinite());
        assert!(curve.evaluate(2.0).is_infinite());

        let curve = LinearCurve::from_points(1.0, 1.0, 1.0, 1.0);
        assert!(curve.slope().is_nan());
        assert!(curve.evaluate(2.0).is_nan());
    }

    #[test]
    fn test_linear_dispatch() {
        assert_eq!(linear(1.0, 2.0, 3.0, None), LinearCurve::from_slope(1.0, 2.0, 3.0));
        assert_eq!(
            linear(1.0, 2.0, 3.0, Some(4.0)),
            LinearCurve::from_points(1.0, 2.0, 3.0, 4.0)
        );
    }

    #[test]
    fn test_macro_arity() {
        assert_eq!(linear!(1, 2, 3), LinearCurve::from_slope(1.0, 2.0, 3.0));
        assert_eq!(linear!(1, 2, 3, 4), LinearCurve::from_points(1.0, 2.0, 3.0, 4.0));
    }
}
