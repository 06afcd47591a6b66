//! The four quadrature rules.
//!
//! Every rule runs the same doubling-refinement protocol, differing only in
//! its per-panel contribution and in whether it consumes the exact derivative
//! of the integrand. The derivative, when needed, is taken once before the
//! loop and reused for every panel of every pass.

use std::fmt;

use quadrans_analytic::{AnalyticFunction, FunctionError};

use crate::refine::{refine_to_convergence, Refined};
use crate::result::QuadratureResult;

/// Refinement ceiling used by [`QuadratureRule::integrate`]: 50 doublings,
/// i.e. 2⁵⁰ panels, far past what any realistic tolerance reaches.
pub const DEFAULT_MAX_REFINEMENTS: usize = 50;

/// One of the four composite quadrature algorithms.
///
/// `Display` prints the variant identifier verbatim; reporting code relies
/// on that name being stable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QuadratureRule {
    /// Chord trapezoids: h/2 · (f(l) + f(r)).
    TrapezoidChord,
    /// Chord trapezoids with the tangent correction h²/4 · (f′(l) − f′(r)).
    TrapezoidTangent,
    /// Chord trapezoids with the averaged correction h²/12 · (f′(l) − f′(r)).
    TrapezoidAveraged,
    /// Simpson's rule: h/6 · (f(l) + 4·f(m) + f(r)).
    Simpson,
}

impl QuadratureRule {
    /// All four rules, in comparison order.
    pub const ALL: [Self; 4] = [
        Self::TrapezoidChord,
        Self::TrapezoidTangent,
        Self::TrapezoidAveraged,
        Self::Simpson,
    ];

    /// Whether the rule consumes f′.
    #[must_use]
    pub fn uses_derivative(self) -> bool {
        matches!(self, Self::TrapezoidTangent | Self::TrapezoidAveraged)
    }

    /// Integrand plus derivative evaluations per panel.
    fn evaluations_per_panel(self) -> usize {
        match self {
            Self::TrapezoidChord => 2,
            Self::TrapezoidTangent | Self::TrapezoidAveraged => 4,
            Self::Simpson => 3,
        }
    }

    /// Approximates the definite integral of `f` over [a, b] to the relative
    /// tolerance `epsilon`, with the default refinement ceiling.
    ///
    /// Expects a < b and epsilon > 0; neither is re-validated here. Fails
    /// only when a derivative-consuming rule is handed a function whose
    /// derivative is not carried.
    ///
    /// ```ignore
    /// use quadrans_analytic::AnalyticFunction;
    /// use quadrans_quadrature::QuadratureRule;
    ///
    /// // ∫₀³ (x + 1) dx = 7.5
    /// let f = AnalyticFunction::linear(1.0, 1.0);
    /// let result = QuadratureRule::TrapezoidChord.integrate(&f, 0.0, 3.0, 1e-7)?;
    /// assert!((result.value - 7.5).abs() < 1e-6);
    /// ```
    pub fn integrate(
        self,
        f: &AnalyticFunction,
        a: f64,
        b: f64,
        epsilon: f64,
    ) -> Result<QuadratureResult, FunctionError> {
        self.integrate_with_params(f, a, b, epsilon, DEFAULT_MAX_REFINEMENTS)
    }

    /// Like [`integrate`](Self::integrate), with an explicit refinement
    /// ceiling.
    ///
    /// # Arguments
    ///
    /// * `f` - The integrand
    /// * `a` - Lower bound
    /// * `b` - Upper bound
    /// * `epsilon` - Relative agreement required between successive estimates
    /// * `max_refinements` - Maximum number of panel-count doublings
    ///
    /// Hitting the ceiling is not an error; the returned result carries the
    /// last estimate and reports `converged: false`.
    pub fn integrate_with_params(
        self,
        f: &AnalyticFunction,
        a: f64,
        b: f64,
        epsilon: f64,
        max_refinements: usize,
    ) -> Result<QuadratureResult, FunctionError> {
        let refined = match self {
            Self::TrapezoidChord => refine_to_convergence(
                &|l, r, h| h / 2.0 * (f.evaluate(l) + f.evaluate(r)),
                a,
                b,
                epsilon,
                max_refinements,
            ),
            Self::TrapezoidTangent => {
                let df = f.derive()?;
                refine_to_convergence(
                    &|l, r, h| {
                        h / 2.0 * (f.evaluate(l) + f.evaluate(r))
                            + h * h / 4.0 * (df.evaluate(l) - df.evaluate(r))
                    },
                    a,
                    b,
                    epsilon,
                    max_refinements,
                )
            }
            Self::TrapezoidAveraged => {
                let df = f.derive()?;
                refine_to_convergence(
                    &|l, r, h| {
                        h / 2.0 * (f.evaluate(l) + f.evaluate(r))
                            + h * h / 12.0 * (df.evaluate(l) - df.evaluate(r))
                    },
                    a,
                    b,
                    epsilon,
                    max_refinements,
                )
            }
            Self::Simpson => refine_to_convergence(
                &|l, r, h| {
                    h / 6.0 * (f.evaluate(l) + 4.0 * f.evaluate((l + r) / 2.0) + f.evaluate(r))
                },
                a,
                b,
                epsilon,
                max_refinements,
            ),
        };
        Ok(self.finish(refined))
    }

    fn finish(self, refined: Refined) -> QuadratureResult {
        QuadratureResult {
            value: refined.value,
            refinements: refined.refinements,
            panels: refined.panels,
            evaluations: refined.panels_summed * self.evaluations_per_panel(),
            converged: refined.converged,
        }
    }
}

impl fmt::Display for QuadratureRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TrapezoidChord => write!(f, "TrapezoidChord"),
            Self::TrapezoidTangent => write!(f, "TrapezoidTangent"),
            Self::TrapezoidAveraged => write!(f, "TrapezoidAveraged"),
            Self::Simpson => write!(f, "Simpson"),
        }
    }
}
