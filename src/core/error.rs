//! Error type for curve construction.

use thiserror::Error;

/// Errors that can occur while building a curve.
///
/// Evaluation never fails: degenerate numeric inputs (a zero-height segment
/// in [`LinearCurve::from_points`](crate::LinearCurve::from_points), infinite
/// bounds) flow through as IEEE infinities and NaNs instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CurveError {
    /// A sample count was given without a generator to fill the table.
    #[error("cannot generate {count} samples without a sampler function")]
    MissingSampler { count: usize },

    /// The sample table has no entries, so its step would divide by zero.
    #[error("sample table is empty")]
    EmptyTable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            CurveError::MissingSampler { count: 8 }.to_string(),
            "cannot generate 8 samples without a sampler function"
        );
        assert_eq!(CurveError::EmptyTable.to_string(), "sample table is empty");
    }

    #[test]
    fn test_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<CurveError>();
    }
}
