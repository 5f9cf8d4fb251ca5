use crate::error::{AreaError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fraction of a step the final sample may overshoot the upper bound by.
/// Absorbs the drift of repeated floating-point addition.
const UPPER_TOLERANCE: f64 = 0.1;

/// An integration interval together with its materialized sample points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BoundsParams", into = "BoundsParams")]
pub struct Bounds {
    lower_bound: f64,
    upper_bound: f64,
    step_size: f64,
    sample_range: Vec<f64>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct BoundsParams {
    lower_bound: f64,
    upper_bound: f64,
    step_size: f64,
}

impl Bounds {
    /// Validates the interval and computes its sample points.
    pub fn new(lower_bound: f64, upper_bound: f64, step_size: f64) -> Result<Self> {
        if !step_size.is_finite() || step_size <= 0.0 {
            return Err(AreaError::InvalidStepSize { step_size });
        }
        if !lower_bound.is_finite() || !upper_bound.is_finite() || upper_bound <= lower_bound {
            return Err(AreaError::InvalidBounds {
                lower: lower_bound,
                upper: upper_bound,
            });
        }

        let sample_range = float_range(lower_bound, upper_bound, step_size);
        log::debug!(
            "Bounds [{} - {}] step {} produced {} samples",
            lower_bound,
            upper_bound,
            step_size,
            sample_range.len()
        );

        Ok(Self {
            lower_bound,
            upper_bound,
            step_size,
            sample_range,
        })
    }

    pub fn lower_bound(&self) -> f64 {
        self.lower_bound
    }

    pub fn upper_bound(&self) -> f64 {
        self.upper_bound
    }

    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    /// Sample points from the lower bound to (approximately) the upper bound.
    pub fn sample_range(&self) -> &[f64] {
        &self.sample_range
    }

    /// Consecutive `(lower, upper)` sample pairs.
    pub fn subintervals(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.sample_range.windows(2).map(|pair| (pair[0], pair[1]))
    }

    pub fn subinterval_count(&self) -> usize {
        self.sample_range.len().saturating_sub(1)
    }
}

fn float_range(lower_bound: f64, upper_bound: f64, step_size: f64) -> Vec<f64> {
    let limit = upper_bound + step_size * UPPER_TOLERANCE;
    let mut samples = vec![lower_bound];
    let mut current = lower_bound;
    while current + step_size < limit {
        let next = current + step_size;
        // The step vanished in rounding; stop rather than spin.
        if next <= current {
            log::warn!(
                "Step size {} no longer advances past {}; truncating sample range",
                step_size,
                current
            );
            break;
        }
        current = next;
        samples.push(current);
    }
    samples
}

impl TryFrom<BoundsParams> for Bounds {
    type Error = AreaError;

    fn try_from(params: BoundsParams) -> Result<Self> {
        Bounds::new(params.lower_bound, params.upper_bound, params.step_size)
    }
}

impl From<Bounds> for BoundsParams {
    fn from(bounds: Bounds) -> Self {
        Self {
            lower_bound: bounds.lower_bound,
            upper_bound: bounds.upper_bound,
            step_size: bounds.step_size,
        }
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bounds: [{} - {}], step size: {}",
            self.lower_bound, self.upper_bound, self.step_size
        )
    }
}
