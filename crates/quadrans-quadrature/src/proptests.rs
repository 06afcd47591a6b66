//! Property-based tests for the refinement engine.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use quadrans_analytic::AnalyticFunction;

    use crate::rule::QuadratureRule;

    fn coeff() -> impl Strategy<Value = f64> {
        -10.0..10.0f64
    }

    // Strategy for non-degenerate intervals of moderate width
    fn interval() -> impl Strategy<Value = (f64, f64)> {
        (-5.0..5.0f64, 0.5..4.0f64).prop_map(|(lower, width)| (lower, lower + width))
    }

    proptest! {
        #[test]
        fn constant_integrands_are_exact(c in coeff(), (a, b) in interval()) {
            let exact = c * (b - a);
            for rule in QuadratureRule::ALL {
                let result = rule
                    .integrate(&AnalyticFunction::constant(c), a, b, 1e-7)
                    .unwrap();
                prop_assert!(result.converged);
                prop_assert!((result.value - exact).abs() <= 1e-9 * (1.0 + exact.abs()));
            }
        }

        #[test]
        fn linear_integrands_are_exact(slope in coeff(), offset in coeff(), (a, b) in interval()) {
            let exact = slope / 2.0 * (b * b - a * a) + offset * (b - a);
            for rule in QuadratureRule::ALL {
                let result = rule
                    .integrate(&AnalyticFunction::linear(slope, offset), a, b, 1e-7)
                    .unwrap();
                prop_assert!(result.converged);
                prop_assert!((result.value - exact).abs() <= 1e-7 * (1.0 + exact.abs()));
            }
        }

        #[test]
        fn simpson_is_exact_on_cubics(
            a3 in coeff(),
            a2 in coeff(),
            a1 in coeff(),
            a0 in coeff(),
            (a, b) in interval(),
        ) {
            let primitive = |x: f64| {
                a3 / 4.0 * x.powi(4) + a2 / 3.0 * x.powi(3) + a1 / 2.0 * x.powi(2) + a0 * x
            };
            let exact = primitive(b) - primitive(a);
            let result = QuadratureRule::Simpson
                .integrate(&AnalyticFunction::cubic(a3, a2, a1, a0), a, b, 1e-7)
                .unwrap();
            prop_assert!(result.converged);
            prop_assert!((result.value - exact).abs() <= 1e-7 * (1.0 + exact.abs()));
        }
    }
}
