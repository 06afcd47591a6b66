//! Composite quadrature rules with doubling refinement.
//!
//! Four classical rules approximate a definite integral over the closed
//! analytic function family, all driven by the same protocol: double the
//! panel count, recompute the full composite sum, stop when two successive
//! estimates agree to the caller's relative tolerance.
//!
//! # Available Rules
//!
//! - **TrapezoidChord**: plain chord trapezoids
//! - **TrapezoidTangent**: chord plus the h²/4 derivative correction
//! - **TrapezoidAveraged**: chord plus the h²/12 derivative correction
//! - **Simpson**: parabolic panels
//!
//! # Example
//!
//! ```ignore
//! use quadrans_analytic::AnalyticFunction;
//! use quadrans_quadrature::QuadratureRule;
//!
//! // ∫₀³ x² dx = 9
//! let f = AnalyticFunction::quadratic(1.0, 0.0, 0.0);
//! let result = QuadratureRule::Simpson.integrate(&f, 0.0, 3.0, 1e-7)?;
//! assert!((result.value - 9.0).abs() < 1e-5);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cases;
mod refine;
pub mod result;
pub mod rule;

#[cfg(test)]
mod proptests;

pub use cases::{standard_cases, BenchmarkCase};
pub use result::QuadratureResult;
pub use rule::{QuadratureRule, DEFAULT_MAX_REFINEMENTS};
