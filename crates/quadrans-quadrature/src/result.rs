//! Result type for quadrature runs.

use std::fmt;

/// Outcome of one quadrature run.
#[derive(Clone, Copy, Debug)]
pub struct QuadratureResult {
    /// The converged composite estimate (the last estimate when the
    /// refinement ceiling was hit first).
    pub value: f64,
    /// Number of panel-count doublings performed.
    pub refinements: usize,
    /// Panel count of the final estimate.
    pub panels: usize,
    /// Total integrand and derivative evaluations across all passes.
    pub evaluations: usize,
    /// Whether the relative stopping criterion was met.
    pub converged: bool,
}

impl fmt::Display for QuadratureResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.converged {
            write!(f, "{:.10} ({} panels)", self.value, self.panels)
        } else {
            write!(f, "{:.10} ({} panels, not converged)", self.value, self.panels)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_flags_non_convergence() {
        let result = QuadratureResult {
            value: 7.5,
            refinements: 1,
            panels: 2,
            evaluations: 6,
            converged: true,
        };
        assert_eq!(result.to_string(), "7.5000000000 (2 panels)");

        let stalled = QuadratureResult {
            converged: false,
            ..result
        };
        assert_eq!(stalled.to_string(), "7.5000000000 (2 panels, not converged)");
    }
}
