//! Property-based tests for sampling, evaluation and the integration driver.

use proptest::prelude::*;

use crate::bounds::Bounds;
use crate::error::ErrorKind;
use crate::integration::{area_under_curve, AreaSweep};
use crate::polynomial::Polynomial;
use crate::quadrature::{trapezoid, QuadratureRule};

// Integer exponents 0..=5 with small coefficients.
fn integer_poly() -> impl Strategy<Value = Polynomial> {
    proptest::collection::vec((0u32..=5, -10.0f64..10.0), 0..=4).prop_map(|terms| {
        Polynomial::new(terms.into_iter().map(|(e, c)| (f64::from(e), c)))
            .expect("non-negative exponents")
    })
}

// At least one half-integer exponent.
fn fractional_poly() -> impl Strategy<Value = Polynomial> {
    (0u32..=4, -10.0f64..10.0, integer_poly()).prop_map(|(e, c, base)| {
        let mut terms: Vec<(f64, f64)> = base
            .terms()
            .iter()
            .map(|term| (term.exponent, term.coefficient))
            .collect();
        terms.push((f64::from(e) + 0.5, c));
        Polynomial::new(terms).expect("non-negative exponents")
    })
}

fn valid_bounds() -> impl Strategy<Value = (f64, f64, f64)> {
    (-100.0f64..100.0, 0.01f64..50.0, 0.01f64..10.0)
        .prop_map(|(lower, width, step)| (lower, lower + width, step))
}

proptest! {
    #[test]
    fn sample_range_spans_the_interval((lower, upper, step) in valid_bounds()) {
        let bounds = Bounds::new(lower, upper, step).expect("valid bounds");
        let samples = bounds.sample_range();
        prop_assert!(!samples.is_empty());
        prop_assert_eq!(samples[0], lower);
        for pair in samples.windows(2) {
            prop_assert!(pair[1] > pair[0]);
        }
        let last = *samples.last().unwrap();
        prop_assert!((last - upper).abs() <= 1.1 * step);
    }

    #[test]
    fn non_positive_step_is_rejected(lower in -10.0f64..10.0, step in -10.0f64..=0.0) {
        let err = Bounds::new(lower, lower + 1.0, step).expect_err("invalid step");
        prop_assert_eq!(err.kind(), ErrorKind::InvalidParameter);
    }

    #[test]
    fn unordered_bounds_are_rejected(upper in -10.0f64..10.0, gap in 0.0f64..10.0) {
        let err = Bounds::new(upper + gap, upper, 0.1).expect_err("invalid bounds");
        prop_assert_eq!(err.kind(), ErrorKind::InvalidParameter);
    }

    #[test]
    fn negative_exponent_is_rejected(exponent in -100.0f64..-1e-9, coefficient in -10.0f64..10.0) {
        let err = Polynomial::new([(2.0, 1.0), (exponent, coefficient)])
            .expect_err("negative exponent");
        prop_assert_eq!(err.kind(), ErrorKind::InvalidParameter);
    }

    #[test]
    fn integer_polynomials_evaluate_everywhere(poly in integer_poly(), x in -100.0f64..100.0) {
        prop_assert!(poly.evaluate(x).is_ok());
    }

    #[test]
    fn fractional_polynomials_reject_negative_inputs(
        poly in fractional_poly(),
        x in -100.0f64..-1e-9,
        y in 0.0f64..100.0,
    ) {
        let err = poly.evaluate(x).expect_err("negative input");
        prop_assert_eq!(err.kind(), ErrorKind::InvalidInput);
        prop_assert!(poly.evaluate(y).is_ok());
    }

    #[test]
    fn evaluate_and_format_are_idempotent(poly in integer_poly(), x in -10.0f64..10.0) {
        prop_assert_eq!(poly.evaluate(x).ok(), poly.evaluate(x).ok());
        prop_assert_eq!(poly.to_string(), poly.to_string());
    }

    #[test]
    fn driver_equals_pairwise_trapezoid_sum(
        poly in integer_poly(),
        (lower, upper, step) in valid_bounds(),
    ) {
        let bounds = Bounds::new(lower, upper, step).expect("valid bounds");
        let mut expected = 0.0;
        for pair in bounds.sample_range().windows(2) {
            expected += trapezoid(&poly, pair[0], pair[1]).expect("trapezoid");
        }
        let area = area_under_curve(&poly, &bounds, trapezoid).expect("area");
        prop_assert_eq!(area, expected);
    }

    #[test]
    fn sweep_batches_do_not_change_the_total(
        poly in integer_poly(),
        (lower, upper, step) in valid_bounds(),
        batch in 1usize..64,
    ) {
        let bounds = Bounds::new(lower, upper, step).expect("valid bounds");
        let expected = area_under_curve(&poly, &bounds, QuadratureRule::Midpoint.kernel())
            .expect("area");
        let mut sweep = AreaSweep::new(poly, bounds, QuadratureRule::Midpoint);
        while !sweep.is_done() {
            sweep.run_steps(batch).expect("batch");
        }
        prop_assert_eq!(sweep.result().expect("finished").area, expected);
    }
}
