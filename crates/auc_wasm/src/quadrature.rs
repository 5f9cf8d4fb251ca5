//! Kernel and driver entry points.

use crate::system::{js_error, serde_error, WasmBounds, WasmPolynomial};
use anyhow::Context;
use auc_core::integration::{
    area_under_curve as core_area_under_curve, integrate as core_integrate, AreaResult,
    IntegrationSettings,
};
use auc_core::polynomial::Polynomial;
use auc_core::quadrature::{self, QuadratureRule};
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn midpoint(polynomial: &WasmPolynomial, lower: f64, upper: f64) -> Result<f64, JsValue> {
    quadrature::midpoint(&polynomial.polynomial, lower, upper).map_err(js_error)
}

#[wasm_bindgen]
pub fn trapezoid(polynomial: &WasmPolynomial, lower: f64, upper: f64) -> Result<f64, JsValue> {
    quadrature::trapezoid(&polynomial.polynomial, lower, upper).map_err(js_error)
}

#[wasm_bindgen]
pub fn simpson(polynomial: &WasmPolynomial, lower: f64, upper: f64) -> Result<f64, JsValue> {
    quadrature::simpson(&polynomial.polynomial, lower, upper).map_err(js_error)
}

/// `rule` is one of `"midpoint"`, `"trapezoid"` or `"simpson"`.
#[wasm_bindgen]
pub fn area_under_curve(
    polynomial: &WasmPolynomial,
    bounds: &WasmBounds,
    rule: &str,
) -> Result<f64, JsValue> {
    let rule: QuadratureRule = rule.parse().map_err(js_error)?;
    core_area_under_curve(&polynomial.polynomial, &bounds.bounds, rule.kernel()).map_err(js_error)
}

fn run_integration(
    polynomial: &Polynomial,
    settings: &IntegrationSettings,
) -> anyhow::Result<AreaResult> {
    core_integrate(polynomial, settings).context("Integration failed")
}

/// Integrates with an `IntegrationSettings` object; `undefined` uses the defaults.
#[wasm_bindgen]
pub fn integrate(polynomial: &WasmPolynomial, settings: JsValue) -> Result<JsValue, JsValue> {
    let settings: IntegrationSettings = if settings.is_undefined() || settings.is_null() {
        IntegrationSettings::default()
    } else {
        from_value(settings).map_err(|e| serde_error("Invalid integration settings", e))?
    };

    let result = run_integration(&polynomial.polynomial, &settings).map_err(js_error)?;

    to_value(&result).map_err(|e| serde_error("Serialization error", e))
}
