//! WASM wrappers around the core polynomial and bounds types.

use anyhow::{anyhow, bail, Context};
use auc_core::bounds::Bounds;
use auc_core::polynomial::Polynomial;
use js_sys::Float64Array;
use serde_wasm_bindgen::from_value;
use wasm_bindgen::prelude::*;

pub(crate) fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&format!("{err:#}"))
}

/// `serde_wasm_bindgen::Error` holds a `JsValue`, so it cannot carry anyhow context directly.
pub(crate) fn serde_error(context: &'static str, err: serde_wasm_bindgen::Error) -> JsValue {
    js_error(anyhow!(err.to_string()).context(context))
}

pub(crate) fn build_polynomial(
    exponents: Vec<f64>,
    coefficients: Vec<f64>,
) -> anyhow::Result<Polynomial> {
    if exponents.len() != coefficients.len() {
        bail!(
            "Exponent and coefficient arrays must have the same length (got {} and {}).",
            exponents.len(),
            coefficients.len()
        );
    }
    Polynomial::new(exponents.into_iter().zip(coefficients))
        .context("Failed to build polynomial")
}

pub(crate) fn build_bounds(lower: f64, upper: f64, step_size: f64) -> anyhow::Result<Bounds> {
    Bounds::new(lower, upper, step_size).context("Failed to build bounds")
}

#[wasm_bindgen]
pub struct WasmPolynomial {
    pub(crate) polynomial: Polynomial,
}

#[wasm_bindgen]
impl WasmPolynomial {
    /// `exponents[i]` pairs with `coefficients[i]`.
    #[wasm_bindgen(constructor)]
    pub fn new(exponents: Vec<f64>, coefficients: Vec<f64>) -> Result<WasmPolynomial, JsValue> {
        console_error_panic_hook::set_once();

        let polynomial = build_polynomial(exponents, coefficients).map_err(js_error)?;
        Ok(WasmPolynomial { polynomial })
    }

    /// Builds from a serialized term list: `[{ exponent, coefficient }, ...]`.
    pub fn from_terms(terms: JsValue) -> Result<WasmPolynomial, JsValue> {
        console_error_panic_hook::set_once();

        let polynomial: Polynomial =
            from_value(terms).map_err(|e| serde_error("Invalid polynomial terms", e))?;
        Ok(WasmPolynomial { polynomial })
    }

    pub fn evaluate(&self, x: f64) -> Result<f64, JsValue> {
        self.polynomial.evaluate(x).map_err(js_error)
    }

    #[wasm_bindgen(getter)]
    pub fn has_fractional_exponents(&self) -> bool {
        self.polynomial.has_fractional_exponents()
    }

    #[wasm_bindgen(js_name = toString)]
    pub fn to_display_string(&self) -> String {
        self.polynomial.to_string()
    }
}

#[wasm_bindgen]
pub struct WasmBounds {
    pub(crate) bounds: Bounds,
}

#[wasm_bindgen]
impl WasmBounds {
    #[wasm_bindgen(constructor)]
    pub fn new(lower_bound: f64, upper_bound: f64, step_size: f64) -> Result<WasmBounds, JsValue> {
        console_error_panic_hook::set_once();

        let bounds = build_bounds(lower_bound, upper_bound, step_size).map_err(js_error)?;
        Ok(WasmBounds { bounds })
    }

    #[wasm_bindgen(getter)]
    pub fn lower_bound(&self) -> f64 {
        self.bounds.lower_bound()
    }

    #[wasm_bindgen(getter)]
    pub fn upper_bound(&self) -> f64 {
        self.bounds.upper_bound()
    }

    #[wasm_bindgen(getter)]
    pub fn step_size(&self) -> f64 {
        self.bounds.step_size()
    }

    pub fn sample_range(&self) -> Float64Array {
        Float64Array::from(self.bounds.sample_range())
    }

    pub fn sample_count(&self) -> usize {
        self.bounds.sample_range().len()
    }

    #[wasm_bindgen(js_name = toString)]
    pub fn to_display_string(&self) -> String {
        self.bounds.to_string()
    }
}
