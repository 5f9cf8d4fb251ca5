//! Single-subinterval quadrature kernels.
//!
//! Each kernel estimates the signed area of an integrand over one
//! `[lower, upper]` subinterval. Kernels hold no state; composing them over a
//! whole range is the job of `integration::area_under_curve`.

use crate::error::{AreaError, Result};
use crate::traits::Integrand;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Midpoint rule: one evaluation at the centre. Exact for linear integrands.
pub fn midpoint<F: Integrand + ?Sized>(f: &F, lower: f64, upper: f64) -> Result<f64> {
    let value = f.evaluate((upper + lower) / 2.0)?;
    Ok((upper - lower) * value)
}

/// Trapezoid rule: average of both endpoints. Exact for linear integrands.
pub fn trapezoid<F: Integrand + ?Sized>(f: &F, lower: f64, upper: f64) -> Result<f64> {
    let lower_value = f.evaluate(lower)?;
    let upper_value = f.evaluate(upper)?;
    Ok((upper - lower) * ((lower_value + upper_value) / 2.0))
}

/// Simpson's rule: parabola through both endpoints and the midpoint.
/// Exact for integrands up to degree 3.
pub fn simpson<F: Integrand + ?Sized>(f: &F, lower: f64, upper: f64) -> Result<f64> {
    let lower_value = f.evaluate(lower)?;
    let upper_value = f.evaluate(upper)?;
    let midpoint_value = f.evaluate((lower + upper) / 2.0)?;
    Ok(((upper - lower) / 6.0) * (lower_value + 4.0 * midpoint_value + upper_value))
}

/// Selects one of the kernels by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuadratureRule {
    Midpoint,
    Trapezoid,
    Simpson,
}

impl QuadratureRule {
    pub const ALL: [QuadratureRule; 3] = [
        QuadratureRule::Midpoint,
        QuadratureRule::Trapezoid,
        QuadratureRule::Simpson,
    ];

    pub fn apply<F: Integrand + ?Sized>(self, f: &F, lower: f64, upper: f64) -> Result<f64> {
        match self {
            QuadratureRule::Midpoint => midpoint(f, lower, upper),
            QuadratureRule::Trapezoid => trapezoid(f, lower, upper),
            QuadratureRule::Simpson => simpson(f, lower, upper),
        }
    }

    /// The kernel function behind this rule.
    pub fn kernel<F: Integrand>(self) -> fn(&F, f64, f64) -> Result<f64> {
        match self {
            QuadratureRule::Midpoint => midpoint::<F>,
            QuadratureRule::Trapezoid => trapezoid::<F>,
            QuadratureRule::Simpson => simpson::<F>,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            QuadratureRule::Midpoint => "midpoint",
            QuadratureRule::Trapezoid => "trapezoid",
            QuadratureRule::Simpson => "simpson",
        }
    }

    /// Integrand evaluations the kernel performs per subinterval.
    pub fn evaluations(self) -> usize {
        match self {
            QuadratureRule::Midpoint => 1,
            QuadratureRule::Trapezoid => 2,
            QuadratureRule::Simpson => 3,
        }
    }
}

impl Default for QuadratureRule {
    fn default() -> Self {
        QuadratureRule::Simpson
    }
}

impl FromStr for QuadratureRule {
    type Err = AreaError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase();
        QuadratureRule::ALL
            .into_iter()
            .find(|rule| rule.name() == normalized)
            .ok_or_else(|| AreaError::UnknownRule(s.to_string()))
    }
}

impl fmt::Display for QuadratureRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
