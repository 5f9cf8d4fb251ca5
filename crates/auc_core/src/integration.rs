use crate::bounds::Bounds;
use crate::error::{AreaError, Result};
use crate::quadrature::QuadratureRule;
use crate::traits::Integrand;
use serde::{Deserialize, Serialize};

/// Sums `kernel` over every consecutive pair of the bounds' sample range.
///
/// The last sample is never used as a left endpoint, so a single-sample range
/// integrates to zero. The first kernel failure aborts the walk and is
/// returned as-is; no partial total escapes.
pub fn area_under_curve<F, K>(integrand: &F, bounds: &Bounds, kernel: K) -> Result<f64>
where
    F: Integrand + ?Sized,
    K: Fn(&F, f64, f64) -> Result<f64>,
{
    let mut total = 0.0;
    for (lower, upper) in bounds.subintervals() {
        let area = kernel(integrand, lower, upper)?;
        log::trace!("[{}, {}] -> {}", lower, upper, area);
        total += area;
    }
    log::debug!(
        "Integrated {} subintervals over {}: area {}",
        bounds.subinterval_count(),
        bounds,
        total
    );
    Ok(total)
}

/// Parameters for a complete integration run.
///
/// Missing fields fall back to the defaults when deserializing, so
/// `{"upper_bound": 2.0}` is a valid configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegrationSettings {
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub step_size: f64,
    pub rule: QuadratureRule,
}

impl Default for IntegrationSettings {
    fn default() -> Self {
        Self {
            lower_bound: 0.0,
            upper_bound: 1.0,
            step_size: 0.1,
            rule: QuadratureRule::Simpson,
        }
    }
}

impl IntegrationSettings {
    pub fn bounds(&self) -> Result<Bounds> {
        Bounds::new(self.lower_bound, self.upper_bound, self.step_size)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaResult {
    pub area: f64,
    pub rule: QuadratureRule,
    pub subintervals: usize,
    pub evaluations: usize,
}

/// Validates `settings` and integrates `integrand` in one call.
pub fn integrate<F>(integrand: &F, settings: &IntegrationSettings) -> Result<AreaResult>
where
    F: Integrand + ?Sized,
{
    let bounds = settings.bounds()?;
    let rule = settings.rule;
    let area = area_under_curve(integrand, &bounds, |f: &F, lower, upper| {
        rule.apply(f, lower, upper)
    })?;
    let subintervals = bounds.subinterval_count();
    Ok(AreaResult {
        area,
        rule,
        subintervals,
        evaluations: subintervals * rule.evaluations(),
    })
}

/// Progress snapshot of an `AreaSweep`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepProgress {
    pub done: bool,
    pub completed: usize,
    pub total: usize,
    pub area: f64,
}

/// Resumable version of `area_under_curve` that consumes subintervals in batches.
///
/// Summation order matches the one-shot driver, so a finished sweep reports the
/// same total bit for bit. Once a kernel fails the sweep stays failed.
pub struct AreaSweep<F> {
    integrand: F,
    bounds: Bounds,
    rule: QuadratureRule,
    completed: usize,
    area: f64,
    failure: Option<AreaError>,
}

impl<F: Integrand> AreaSweep<F> {
    pub fn new(integrand: F, bounds: Bounds, rule: QuadratureRule) -> Self {
        Self {
            integrand,
            bounds,
            rule,
            completed: 0,
            area: 0.0,
            failure: None,
        }
    }

    pub fn from_settings(integrand: F, settings: &IntegrationSettings) -> Result<Self> {
        Ok(Self::new(integrand, settings.bounds()?, settings.rule))
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn rule(&self) -> QuadratureRule {
        self.rule
    }

    pub fn total(&self) -> usize {
        self.bounds.subinterval_count()
    }

    pub fn is_done(&self) -> bool {
        self.failure.is_none() && self.completed >= self.total()
    }

    pub fn progress(&self) -> SweepProgress {
        SweepProgress {
            done: self.is_done(),
            completed: self.completed,
            total: self.total(),
            area: self.area,
        }
    }

    /// Integrates up to `batch_size` further subintervals.
    pub fn run_steps(&mut self, batch_size: usize) -> Result<SweepProgress> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }

        let end = self.completed.saturating_add(batch_size).min(self.total());
        while self.completed < end {
            let samples = self.bounds.sample_range();
            let lower = samples[self.completed];
            let upper = samples[self.completed + 1];
            match self.rule.apply(&self.integrand, lower, upper) {
                Ok(area) => {
                    self.area += area;
                    self.completed += 1;
                }
                Err(err) => {
                    log::debug!(
                        "Sweep failed on subinterval {} [{}, {}]: {}",
                        self.completed,
                        lower,
                        upper,
                        err
                    );
                    self.failure = Some(err.clone());
                    return Err(err);
                }
            }
        }

        if self.is_done() {
            log::debug!(
                "Sweep finished {} subintervals with {}: area {}",
                self.completed,
                self.rule,
                self.area
            );
        }
        Ok(self.progress())
    }

    /// Final result, available only once every subinterval succeeded.
    pub fn result(&self) -> Option<AreaResult> {
        if !self.is_done() {
            return None;
        }
        Some(AreaResult {
            area: self.area,
            rule: self.rule,
            subintervals: self.completed,
            evaluations: self.completed * self.rule.evaluations(),
        })
    }
}
