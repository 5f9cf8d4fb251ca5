//! Batched integration runner for long sample ranges.

use crate::system::{build_bounds, build_polynomial, js_error, serde_error};
use anyhow::Context;
use auc_core::integration::{AreaSweep, SweepProgress};
use auc_core::polynomial::Polynomial;
use auc_core::quadrature::QuadratureRule;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

fn build_sweep(
    exponents: Vec<f64>,
    coefficients: Vec<f64>,
    lower_bound: f64,
    upper_bound: f64,
    step_size: f64,
    rule: &str,
) -> anyhow::Result<AreaSweep<Polynomial>> {
    let polynomial = build_polynomial(exponents, coefficients)?;
    let bounds = build_bounds(lower_bound, upper_bound, step_size)?;
    let rule = rule
        .parse::<QuadratureRule>()
        .context("Failed to select quadrature rule")?;
    Ok(AreaSweep::new(polynomial, bounds, rule))
}

#[wasm_bindgen]
pub struct WasmAreaRunner {
    sweep: AreaSweep<Polynomial>,
}

#[wasm_bindgen]
impl WasmAreaRunner {
    #[wasm_bindgen(constructor)]
    pub fn new(
        exponents: Vec<f64>,
        coefficients: Vec<f64>,
        lower_bound: f64,
        upper_bound: f64,
        step_size: f64,
        rule: &str,
    ) -> Result<WasmAreaRunner, JsValue> {
        console_error_panic_hook::set_once();

        let sweep = build_sweep(
            exponents,
            coefficients,
            lower_bound,
            upper_bound,
            step_size,
            rule,
        )
        .map_err(js_error)?;
        Ok(WasmAreaRunner { sweep })
    }

    pub fn is_done(&self) -> bool {
        self.sweep.is_done()
    }

    pub fn total_subintervals(&self) -> usize {
        self.sweep.total()
    }

    pub fn run_steps(&mut self, batch_size: u32) -> Result<JsValue, JsValue> {
        let progress = self.advance(batch_size as usize).map_err(js_error)?;

        to_value(&progress).map_err(|e| serde_error("Serialization error", e))
    }

    pub fn get_progress(&self) -> Result<JsValue, JsValue> {
        to_value(&self.sweep.progress()).map_err(|e| serde_error("Serialization error", e))
    }

    pub fn get_result(&self) -> Result<JsValue, JsValue> {
        let result = self
            .sweep
            .result()
            .ok_or_else(|| js_error("Area runner has not finished yet."))?;

        to_value(&result).map_err(|e| serde_error("Serialization error", e))
    }
}

impl WasmAreaRunner {
    fn advance(&mut self, batch_size: usize) -> anyhow::Result<SweepProgress> {
        self.sweep
            .run_steps(batch_size)
            .context("Integration failed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_sweep_rejects_unknown_rule() {
        let err = match build_sweep(vec![1.0], vec![1.0], 0.0, 1.0, 0.1, "boole") {
            Ok(_) => panic!("expected rule error"),
            Err(err) => err,
        };
        let message = format!("{err:#}");
        assert!(message.contains("Failed to select quadrature rule"));
        assert!(message.contains("'boole'"));
    }

    #[test]
    fn runner_starts_with_all_subintervals_pending() {
        let runner = WasmAreaRunner::new(vec![2.0], vec![1.0], 0.0, 2.0, 0.5, "simpson")
            .expect("runner");
        assert_eq!(runner.total_subintervals(), 4);
        assert!(!runner.is_done());
    }

    #[test]
    fn advance_prefixes_evaluation_failures() {
        let mut runner = WasmAreaRunner::new(vec![0.5], vec![1.0], -1.0, 1.0, 0.5, "trapezoid")
            .expect("runner");
        let err = runner.advance(1).expect_err("negative sample");
        let message = format!("{err:#}");
        assert!(message.starts_with("Integration failed: "));
        assert!(message.contains("negative inputs"));
        assert!(runner.advance(1).is_err());
    }

    #[test]
    fn runner_over_single_sample_is_done() {
        let runner = WasmAreaRunner::new(vec![2.0], vec![1.0], 0.0, 1.0, 4.0, "midpoint")
            .expect("runner");
        assert_eq!(runner.total_subintervals(), 0);
        assert!(runner.is_done());
    }
}
