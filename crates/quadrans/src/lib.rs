//! # Quadrans
//!
//! A comparison harness for composite quadrature rules.
//!
//! Quadrans pairs a small family of analytic test functions with four
//! classical panel rules and measures how each rule refines toward a
//! requested relative tolerance.
//!
//! ## Features
//!
//! - **Analytic Integrands**: Polynomials with exact symbolic derivatives
//! - **Four Panel Rules**: Chord, tangent, averaged trapezoids and Simpson
//! - **Shared Refinement**: Geometric panel doubling with one stop criterion
//! - **Benchmark Catalog**: Standard cases with known closed-form values
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use quadrans::prelude::*;
//!
//! let f = AnalyticFunction::quadratic(1.0, 0.0, 0.0);
//! let result = QuadratureRule::Simpson.integrate(&f, 0.0, 3.0, 1e-7)?;
//! assert!((result.value - 9.0).abs() < 1e-6);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use quadrans_analytic as analytic;
pub use quadrans_quadrature as quadrature;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use quadrans_analytic::{AnalyticFunction, FunctionError, Monomial};
    pub use quadrans_quadrature::{
        standard_cases, BenchmarkCase, QuadratureResult, QuadratureRule, DEFAULT_MAX_REFINEMENTS,
    };
}
