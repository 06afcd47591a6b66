//! Error type for the function family.

use thiserror::Error;

/// Errors raised by function construction and differentiation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FunctionError {
    /// A monomial a·xⁿ was requested with a negative exponent.
    #[error("monomial exponent must be non-negative, got {0}")]
    NegativeExponent(i32),

    /// The derivative of the terminal hand-derived variant was requested;
    /// no closed form beyond second order is carried.
    #[error("no closed-form derivative is available for this function")]
    UnsupportedDerivative,
}
