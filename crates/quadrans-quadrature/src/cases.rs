//! The standard comparison cases with known closed-form results.
//!
//! Carried next to the engine so the showcase driver, the criterion suite,
//! and the convergence tests all agree on integrands, bounds, expected
//! values, and repetition counts.

use quadrans_analytic::{AnalyticFunction, FunctionError, Monomial};

/// One benchmark configuration: an integrand with its interval, the known
/// exact value, the relative tolerance, and how many repetitions the timing
/// driver runs back to back.
#[derive(Clone, Debug)]
pub struct BenchmarkCase {
    /// Short stable identifier for reports.
    pub name: &'static str,
    /// The integrand.
    pub function: AnalyticFunction,
    /// Lower interval bound.
    pub lower: f64,
    /// Upper interval bound, strictly greater than `lower`.
    pub upper: f64,
    /// Known value of the definite integral.
    pub expected: f64,
    /// Relative tolerance handed to the rules.
    pub epsilon: f64,
    /// Timing repetitions for this case.
    pub repetitions: usize,
}

impl BenchmarkCase {
    /// Creates a case.
    ///
    /// # Panics
    ///
    /// Panics when the interval is empty or reversed, when the tolerance is
    /// not positive, or when no repetition would run; the engine itself
    /// assumes all three hold.
    #[must_use]
    pub fn new(
        name: &'static str,
        function: AnalyticFunction,
        lower: f64,
        upper: f64,
        expected: f64,
        epsilon: f64,
        repetitions: usize,
    ) -> Self {
        assert!(lower < upper, "integration interval must satisfy lower < upper");
        assert!(epsilon > 0.0, "relative tolerance must be positive");
        assert!(repetitions > 0, "at least one timing repetition is required");
        Self {
            name,
            function,
            lower,
            upper,
            expected,
            epsilon,
            repetitions,
        }
    }

    /// Deviation of `value` from the known result, relative to `value`.
    #[must_use]
    pub fn relative_error(&self, value: f64) -> f64 {
        (value - self.expected).abs() / value.abs()
    }
}

/// The five standard cases of the comparison driver.
///
/// Fallible because the polynomial case constructs validated monomials.
pub fn standard_cases() -> Result<Vec<BenchmarkCase>, FunctionError> {
    let epsilon = 1e-7;
    Ok(vec![
        BenchmarkCase::new(
            "linear",
            AnalyticFunction::linear(1.0, 1.0),
            0.0,
            3.0,
            7.5,
            epsilon,
            100_000,
        ),
        BenchmarkCase::new(
            "quadratic",
            AnalyticFunction::quadratic(1.0, 0.0, 0.0),
            0.0,
            3.0,
            9.0,
            epsilon,
            1_000,
        ),
        BenchmarkCase::new(
            "cubic",
            AnalyticFunction::cubic(1.0, 0.0, 0.0, 0.0),
            0.0,
            3.0,
            20.25,
            epsilon,
            100,
        ),
        BenchmarkCase::new(
            "polynomial",
            AnalyticFunction::polynomial_sum(vec![
                Monomial::new(0.1, 15)?,
                Monomial::new(-10.0, 6)?,
                Monomial::new(50.0, 1)?,
            ]),
            0.0,
            1.65,
            39.3608103118,
            epsilon,
            10,
        ),
        BenchmarkCase::new(
            "special",
            AnalyticFunction::special(),
            0.1,
            3.0,
            2.8847360777,
            epsilon,
            10,
        ),
    ])
}
