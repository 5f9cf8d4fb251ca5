//! WASM bindings for the area-under-curve core library.
//!
//! Polynomials and bounds are built once on the Rust side and passed by
//! reference to the kernel functions; long ranges can be integrated in batches
//! through `WasmAreaRunner`.

mod quadrature;
mod runner;
mod system;

pub use quadrature::{area_under_curve, integrate, midpoint, simpson, trapezoid};
pub use runner::WasmAreaRunner;
pub use system::{WasmBounds, WasmPolynomial};
