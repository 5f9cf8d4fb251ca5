//! The `auc_core` crate approximates the area under single-variable polynomials.
//!
//! Key components:
//! - **Polynomial**: sparse exponent/coefficient terms, possibly fractional, sampled through the `Integrand` trait.
//! - **Bounds**: an interval plus its eagerly generated sample points.
//! - **Quadrature**: midpoint, trapezoid and Simpson kernels over one subinterval, selectable through `QuadratureRule`.
//! - **Integration**: the driver summing a kernel over consecutive samples, plus the resumable `AreaSweep`.

pub mod bounds;
pub mod error;
pub mod integration;
pub mod polynomial;
pub mod quadrature;
pub mod traits;

#[cfg(test)]
mod proptests;
