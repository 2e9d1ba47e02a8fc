#![cfg(feature = "macros")]

use response_curve::{Curve, SampledCurve, sampled};

#[test]
fn test_sampled_macro_matches_constructor() {
    let curve = sampled!(0.0, 1.0, [0.0, 10.0, 20.0]);
    let expected = SampledCurve::from_samples(0.0, 1.0, vec![0.0, 10.0, 20.0]).unwrap();
    assert_eq!(curve, expected);
}

#[test]
fn test_sampled_macro_evaluates() {
    let curve = sampled!(0.0, 1.0, [0.0, 10.0, 20.0]);
    assert!((curve.evaluate(0.5) - 15.0).abs() < 1e-9);
    assert_eq!(curve.evaluate(-1.0), 0.0);
    assert_eq!(curve.evaluate(1.0), 20.0);
}

#[test]
fn test_sampled_macro_integer_and_negative_literals() {
    let curve = sampled!(-1, 1, [-4, 0, 4.5, 8]);
    assert_eq!(curve.min(), -1.0);
    assert_eq!(curve.max(), 1.0);
    assert_eq!(curve.step(), 0.5);
    assert_eq!(curve.samples(), &[-4.0, 0.0, 4.5, 8.0]);
}

#[test]
fn test_sampled_macro_single_entry() {
    let curve = sampled!(0, 1, [3]);
    assert_eq!(curve.len(), 1);
    assert_eq!(curve.evaluate(0.5), 3.0);
}
