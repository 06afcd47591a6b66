//! Closed family of analytic functions with exact symbolic derivatives.
//!
//! The family is fixed: constants, the named low-degree polynomials, single
//! monomials, ordered monomial sums, and one non-polynomial benchmark
//! integrand with a hand-derived derivative. It is deliberately not a general
//! expression tree; the closed set keeps dispatch exhaustive and every
//! derivative inside the family (up to the documented terminal case).
//!
//! # Example
//!
//! ```ignore
//! use quadrans_analytic::AnalyticFunction;
//!
//! let f = AnalyticFunction::cubic(1.0, 0.0, 0.0, 0.0);
//! assert_eq!(f.evaluate(1.5), 3.375);
//! assert_eq!(f.derive().unwrap().evaluate(1.5), 6.75);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod function;

#[cfg(test)]
mod proptests;

pub use error::FunctionError;
pub use function::{AnalyticFunction, Monomial};
