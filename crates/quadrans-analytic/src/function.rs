//! The function family: evaluation, differentiation, rendering.
//!
//! Every value is immutable once constructed. `derive` is a pure function
//! returning a fresh, independently owned value; no variant holds a reference
//! back to its derivative or its source, so ownership stays plain and no
//! cycles can form. Differentiation only moves down the family:
//! Cubic → Quadratic → Linear → Constant, Monomial of degree n → degree n − 1
//! (floored at zero), and the special integrand → its hand-derived derivative,
//! which is terminal.

use std::fmt;

use crate::error::FunctionError;

/// A single term a·xⁿ with a non-negative integer exponent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Monomial {
    coefficient: f64,
    exponent: i32,
}

impl Monomial {
    /// Creates a·xⁿ. Fails when n is negative.
    pub fn new(coefficient: f64, exponent: i32) -> Result<Self, FunctionError> {
        if exponent < 0 {
            return Err(FunctionError::NegativeExponent(exponent));
        }
        Ok(Self {
            coefficient,
            exponent,
        })
    }

    /// The coefficient a.
    #[must_use]
    pub fn coefficient(&self) -> f64 {
        self.coefficient
    }

    /// The exponent n.
    #[must_use]
    pub fn exponent(&self) -> i32 {
        self.exponent
    }

    /// Evaluates a·xⁿ at x.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coefficient * x.powi(self.exponent)
    }

    /// The power-rule derivative a·n·x^(n−1), with degree 0 mapping to the
    /// zero monomial. Infallible: the exponent never drops below zero.
    #[must_use]
    pub fn derive(&self) -> Self {
        if self.exponent == 0 {
            Self {
                coefficient: 0.0,
                exponent: 0,
            }
        } else {
            Self {
                coefficient: self.coefficient * f64::from(self.exponent),
                exponent: self.exponent - 1,
            }
        }
    }
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+5.2}·x^{}", self.coefficient, self.exponent)
    }
}

/// A closed-form real function from a fixed, closed family.
///
/// The set is deliberately not extensible: matching on it is exhaustive, and
/// the derivative of every member stays inside the family. `PolynomialSum`
/// owns an ordered sequence of [`Monomial`] values and nothing else.
#[derive(Clone, Debug, PartialEq)]
pub enum AnalyticFunction {
    /// f(x) = c
    Constant {
        /// The constant value.
        c: f64,
    },
    /// f(x) = a·x + c
    Linear {
        /// Slope.
        a: f64,
        /// Intercept.
        c: f64,
    },
    /// f(x) = a·x² + b·x + c
    Quadratic {
        /// Degree-2 coefficient.
        a: f64,
        /// Degree-1 coefficient.
        b: f64,
        /// Constant term.
        c: f64,
    },
    /// f(x) = a·x³ + b·x² + c·x + d
    Cubic {
        /// Degree-3 coefficient.
        a: f64,
        /// Degree-2 coefficient.
        b: f64,
        /// Degree-1 coefficient.
        c: f64,
        /// Constant term.
        d: f64,
    },
    /// f(x) = a·xⁿ
    Monomial(Monomial),
    /// f(x) = Σ aᵢ·x^nᵢ; the empty sum is the zero function.
    PolynomialSum(Vec<Monomial>),
    /// f(x) = e^(−x)·sin(8·x^(2/3)) + 1
    Special,
    /// The hand-derived derivative of [`Special`](Self::Special). Terminal:
    /// its own derivative is not carried, and its 1/x^(1/3) term has an
    /// unguarded singularity at x = 0.
    SpecialDerivative,
}

impl AnalyticFunction {
    /// f(x) = c
    #[must_use]
    pub fn constant(c: f64) -> Self {
        Self::Constant { c }
    }

    /// f(x) = a·x + c
    #[must_use]
    pub fn linear(a: f64, c: f64) -> Self {
        Self::Linear { a, c }
    }

    /// f(x) = a·x² + b·x + c
    #[must_use]
    pub fn quadratic(a: f64, b: f64, c: f64) -> Self {
        Self::Quadratic { a, b, c }
    }

    /// f(x) = a·x³ + b·x² + c·x + d
    #[must_use]
    pub fn cubic(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self::Cubic { a, b, c, d }
    }

    /// f(x) = a·xⁿ. Fails when n is negative.
    pub fn monomial(a: f64, n: i32) -> Result<Self, FunctionError> {
        Ok(Self::Monomial(Monomial::new(a, n)?))
    }

    /// The ordered sum of monomial terms; an empty sum is the zero function.
    #[must_use]
    pub fn polynomial_sum(terms: Vec<Monomial>) -> Self {
        Self::PolynomialSum(terms)
    }

    /// f(x) = e^(−x)·sin(8·x^(2/3)) + 1, the non-polynomial benchmark
    /// integrand.
    #[must_use]
    pub fn special() -> Self {
        Self::Special
    }

    /// Evaluates f at x.
    ///
    /// Total for every variant under IEEE semantics. `SpecialDerivative`
    /// produces a non-finite value at x = 0, and the fractional powers of the
    /// special forms follow `powf` (NaN for negative x).
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        match self {
            Self::Constant { c } => *c,
            Self::Linear { a, c } => a * x + c,
            Self::Quadratic { a, b, c } => a * x * x + b * x + c,
            Self::Cubic { a, b, c, d } => a * x.powi(3) + b * x.powi(2) + c * x + d,
            Self::Monomial(m) => m.evaluate(x),
            Self::PolynomialSum(terms) => terms.iter().map(|t| t.evaluate(x)).sum(),
            Self::Special => (-x).exp() * (8.0 * x.powf(2.0 / 3.0)).sin() + 1.0,
            Self::SpecialDerivative => {
                let s = 8.0 * x.powf(2.0 / 3.0);
                (-x).exp() * (16.0 * s.cos() / (3.0 * x.powf(1.0 / 3.0)) - s.sin())
            }
        }
    }

    /// Returns the exact derivative as a new, independently owned value.
    ///
    /// Fails only for [`SpecialDerivative`](Self::SpecialDerivative), which
    /// carries no closed form of its own derivative. Degree-0 results inside
    /// a `PolynomialSum` are kept, not pruned, and term order is preserved.
    pub fn derive(&self) -> Result<Self, FunctionError> {
        match self {
            Self::Constant { .. } => Ok(Self::Constant { c: 0.0 }),
            Self::Linear { a, .. } => Ok(Self::Constant { c: *a }),
            Self::Quadratic { a, b, .. } => Ok(Self::Linear { a: 2.0 * a, c: *b }),
            Self::Cubic { a, b, c, .. } => Ok(Self::Quadratic {
                a: 3.0 * a,
                b: 2.0 * b,
                c: *c,
            }),
            Self::Monomial(m) => Ok(Self::Monomial(m.derive())),
            Self::PolynomialSum(terms) => Ok(Self::PolynomialSum(
                terms.iter().map(Monomial::derive).collect(),
            )),
            Self::Special => Ok(Self::SpecialDerivative),
            Self::SpecialDerivative => Err(FunctionError::UnsupportedDerivative),
        }
    }
}

impl fmt::Display for AnalyticFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant { c } => write!(f, "{:+5.2}", c),
            Self::Linear { a, c } => write!(f, "{:+5.2}·x {:+5.2}", a, c),
            Self::Quadratic { a, b, c } => {
                write!(f, "{:+5.2}·x² {:+5.2}·x {:+5.2}", a, b, c)
            }
            Self::Cubic { a, b, c, d } => {
                write!(f, "{:+5.2}·x³ {:+5.2}·x² {:+5.2}·x {:+5.2}", a, b, c, d)
            }
            Self::Monomial(m) => write!(f, "{}", m),
            Self::PolynomialSum(terms) => {
                for term in terms {
                    write!(f, "{} ", term)?;
                }
                Ok(())
            }
            Self::Special => write!(f, "e^(-x) · sin(8 · x^(2/3)) + 1"),
            Self::SpecialDerivative => write!(
                f,
                "1/3 · e^(-x) · [16·cos(8·x^(2/3))/x^(1/3) - 3·sin(8·x^(2/3))]"
            ),
        }
    }
}
