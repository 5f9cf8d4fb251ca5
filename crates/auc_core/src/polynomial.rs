//! Sparse single-variable polynomials with non-negative, possibly fractional, exponents.

use crate::error::{AreaError, Result};
use crate::traits::Integrand;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One `coefficient * x^exponent` term.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Term {
    pub exponent: f64,
    pub coefficient: f64,
}

/// A polynomial stored as unique exponent/coefficient pairs.
///
/// `f(x) = 9x^5 + 3` is built from `[(5.0, 9.0), (0.0, 3.0)]`. Terms are kept
/// sorted by descending exponent so formatting is deterministic; evaluation
/// does not depend on the order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Term>", into = "Vec<Term>")]
pub struct Polynomial {
    terms: Vec<Term>,
    fractional_exponents: bool,
}

impl Polynomial {
    /// Builds a polynomial from `(exponent, coefficient)` pairs.
    ///
    /// A repeated exponent keeps the last coefficient given for it. Fails if
    /// any exponent is negative or not finite.
    pub fn new<I>(terms: I) -> Result<Self>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let mut collected: Vec<Term> = Vec::new();
        for (exponent, coefficient) in terms {
            if !exponent.is_finite() || exponent < 0.0 {
                return Err(AreaError::InvalidExponent { exponent });
            }
            match collected.iter_mut().find(|term| term.exponent == exponent) {
                Some(existing) => existing.coefficient = coefficient,
                None => collected.push(Term {
                    exponent,
                    coefficient,
                }),
            }
        }
        collected.sort_by(|a, b| b.exponent.total_cmp(&a.exponent));

        let fractional_exponents = collected.iter().any(|term| term.exponent.fract() != 0.0);

        Ok(Self {
            terms: collected,
            fractional_exponents,
        })
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn has_fractional_exponents(&self) -> bool {
        self.fractional_exponents
    }

    /// Coefficient stored for `exponent`, or zero when the term is absent.
    pub fn coefficient(&self, exponent: f64) -> f64 {
        self.terms
            .iter()
            .find(|term| term.exponent == exponent)
            .map_or(0.0, |term| term.coefficient)
    }

    /// Largest exponent with a non-zero coefficient.
    pub fn degree(&self) -> Option<f64> {
        self.terms
            .iter()
            .find(|term| term.coefficient != 0.0)
            .map(|term| term.exponent)
    }

    pub fn is_zero(&self) -> bool {
        self.degree().is_none()
    }

    /// Evaluates the polynomial at `x`.
    ///
    /// Fractional powers of negative numbers are not real-valued, so a
    /// polynomial with any fractional exponent rejects `x < 0` before
    /// computing anything.
    pub fn evaluate(&self, x: f64) -> Result<f64> {
        if self.fractional_exponents && x < 0.0 {
            return Err(AreaError::NegativeFractionalInput { x });
        }
        Ok(self
            .terms
            .iter()
            .map(|term| term.coefficient * x.powf(term.exponent))
            .sum())
    }
}

impl Integrand for Polynomial {
    fn evaluate(&self, x: f64) -> Result<f64> {
        Polynomial::evaluate(self, x)
    }
}

impl TryFrom<Vec<Term>> for Polynomial {
    type Error = AreaError;

    fn try_from(terms: Vec<Term>) -> Result<Self> {
        Polynomial::new(
            terms
                .into_iter()
                .map(|term| (term.exponent, term.coefficient)),
        )
    }
}

impl From<Polynomial> for Vec<Term> {
    fn from(polynomial: Polynomial) -> Self {
        polynomial.terms
    }
}

fn format_term(term: &Term) -> Option<String> {
    if term.coefficient == 0.0 {
        return None;
    }
    if term.exponent == 0.0 {
        return Some(term.coefficient.to_string());
    }
    let coefficient = if term.coefficient == 1.0 {
        String::new()
    } else {
        term.coefficient.to_string()
    };
    if term.exponent == 1.0 {
        Some(format!("{coefficient}x"))
    } else {
        Some(format!("{coefficient}x^{}", term.exponent))
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let terms: Vec<String> = self.terms.iter().filter_map(format_term).collect();
        if terms.is_empty() {
            return write!(f, "f(x)= 0");
        }
        write!(f, "f(x)= {}", terms.join(" + "))
    }
}
