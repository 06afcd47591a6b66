//! Property-based tests for the function family.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::error::FunctionError;
    use crate::function::{AnalyticFunction, Monomial};

    fn coeff() -> impl Strategy<Value = f64> {
        -50.0..50.0f64
    }

    fn valid_exponent() -> impl Strategy<Value = i32> {
        0..8i32
    }

    fn monomial() -> impl Strategy<Value = Monomial> {
        (coeff(), valid_exponent()).prop_map(|(a, n)| Monomial::new(a, n).unwrap())
    }

    fn sample_x() -> impl Strategy<Value = f64> {
        -3.0..3.0f64
    }

    proptest! {
        #[test]
        fn negative_exponents_are_rejected(a in coeff(), n in -8..0i32) {
            prop_assert_eq!(Monomial::new(a, n).unwrap_err(), FunctionError::NegativeExponent(n));
        }

        #[test]
        fn power_rule_holds(m in monomial()) {
            let d = m.derive();
            if m.exponent() == 0 {
                prop_assert_eq!(d.coefficient(), 0.0);
                prop_assert_eq!(d.exponent(), 0);
            } else {
                prop_assert_eq!(d.coefficient(), m.coefficient() * f64::from(m.exponent()));
                prop_assert_eq!(d.exponent(), m.exponent() - 1);
            }
        }

        #[test]
        fn sum_evaluates_termwise(
            terms in proptest::collection::vec(monomial(), 0..6),
            x in sample_x()
        ) {
            let by_hand: f64 = terms.iter().map(|t| t.evaluate(x)).sum();
            let f = AnalyticFunction::polynomial_sum(terms);
            prop_assert_eq!(f.evaluate(x), by_hand);
        }

        #[test]
        fn sum_derivative_is_termwise(terms in proptest::collection::vec(monomial(), 0..6)) {
            let expected: Vec<Monomial> = terms.iter().map(Monomial::derive).collect();
            let f = AnalyticFunction::polynomial_sum(terms);
            prop_assert_eq!(
                f.derive().unwrap(),
                AnalyticFunction::polynomial_sum(expected)
            );
        }

        #[test]
        fn cubic_derivative_matches_finite_difference(
            a in coeff(), b in coeff(), c in coeff(), d in coeff(), x in sample_x()
        ) {
            // Central difference as an independent check of the symbolic rule
            let f = AnalyticFunction::cubic(a, b, c, d);
            let df = f.derive().unwrap();
            let h = 1e-6;
            let numeric = (f.evaluate(x + h) - f.evaluate(x - h)) / (2.0 * h);
            prop_assert!((df.evaluate(x) - numeric).abs() <= 1e-3 * (1.0 + numeric.abs()));
        }

        #[test]
        fn differentiation_is_pure(terms in proptest::collection::vec(monomial(), 0..6)) {
            let f = AnalyticFunction::polynomial_sum(terms);
            let first = f.derive().unwrap();
            let second = f.derive().unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
