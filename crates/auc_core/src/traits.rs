use crate::error::Result;

/// A single-variable function that a quadrature kernel can sample.
pub trait Integrand {
    /// Evaluates the function at `x`.
    /// Implementations fail instead of returning NaN when `x` lies outside their domain.
    fn evaluate(&self, x: f64) -> Result<f64>;
}
