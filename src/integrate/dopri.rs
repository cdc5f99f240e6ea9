//! Dormand-Prince 5(4): Adaptive Runge-Kutta Integration
//!
//! Seven-stage embedded pair with the first-same-as-last property: the
//! derivative at the end of an accepted step is the first stage of the
//! next one, so each step costs six evaluations.
//!
//! ## Error Control
//!
//! The local error estimate is the difference between the 5th and 4th
//! order solutions, scaled component-wise by
//!
//!   sc_i = atol + rtol · max(|y_i|, |ŷ_i|)
//!
//! and measured in the RMS norm. A step is accepted when the norm is at
//! most 1. The next step size is
//!
//!   h_new = h · clamp(0.9 · err^(-1/5), 0.2, 5)
//!
//! with growth disabled right after a rejection.
//!
//! ## Output Grid
//!
//! The solver lands exactly on every requested output time by clipping
//! the final step of each interval. Accuracy is governed by the
//! tolerances, not by the grid density.
//!
//! ## Failure
//!
//! A run stops with an error once the step budget is spent, the step
//! size underflows, or an accepted state exceeds [`DIVERGENCE_LIMIT`] in
//! magnitude.
//!
//! ## References
//!
//! - Dormand, J. R. & Prince, P. J. (1980). A family of embedded
//!   Runge-Kutta formulae. J. Comput. Appl. Math. 6(1), 19-26.
//! - Hairer, E., Nørsett, S. P. & Wanner, G. (1993). Solving Ordinary
//!   Differential Equations I: Nonstiff Problems. Springer. (II.4)

use log::{debug, trace};
use thiserror::Error;

use crate::systems::VectorField;

// Nodes
const C2: f64 = 1.0 / 5.0;
const C3: f64 = 3.0 / 10.0;
const C4: f64 = 4.0 / 5.0;
const C5: f64 = 8.0 / 9.0;

// Coupling coefficients
const A21: f64 = 1.0 / 5.0;
const A31: f64 = 3.0 / 40.0;
const A32: f64 = 9.0 / 40.0;
const A41: f64 = 44.0 / 45.0;
const A42: f64 = -56.0 / 15.0;
const A43: f64 = 32.0 / 9.0;
const A51: f64 = 19372.0 / 6561.0;
const A52: f64 = -25360.0 / 2187.0;
const A53: f64 = 64448.0 / 6561.0;
const A54: f64 = -212.0 / 729.0;
const A61: f64 = 9017.0 / 3168.0;
const A62: f64 = -355.0 / 33.0;
const A63: f64 = 46732.0 / 5247.0;
const A64: f64 = 49.0 / 176.0;
const A65: f64 = -5103.0 / 18656.0;

// 5th order weights (also the 7th stage row)
const B1: f64 = 35.0 / 384.0;
const B3: f64 = 500.0 / 1113.0;
const B4: f64 = 125.0 / 192.0;
const B5: f64 = -2187.0 / 6784.0;
const B6: f64 = 11.0 / 84.0;

// Difference between 5th and 4th order weights
const E1: f64 = 71.0 / 57600.0;
const E3: f64 = -71.0 / 16695.0;
const E4: f64 = 71.0 / 1920.0;
const E5: f64 = -17253.0 / 339200.0;
const E6: f64 = 22.0 / 525.0;
const E7: f64 = -1.0 / 40.0;

const SAFETY: f64 = 0.9;
const MIN_FACTOR: f64 = 0.2;
const MAX_FACTOR: f64 = 5.0;

/// Accepted states beyond this magnitude are treated as divergent
pub const DIVERGENCE_LIMIT: f64 = 1e100;

/// Failure modes of the adaptive solver
#[derive(Debug, Error, Clone, PartialEq)]
pub enum IntegrationError {
    #[error("step budget of {steps} exhausted at t = {t}")]
    StepBudgetExhausted { t: f64, steps: usize },

    #[error("step size {h} underflowed at t = {t}")]
    StepSizeUnderflow { t: f64, h: f64 },

    #[error("state diverged (non-finite or unbounded) at t = {t}")]
    NonFinite { t: f64 },

    #[error("invalid solver configuration: {0}")]
    InvalidConfig(String),
}

/// Tolerances and limits of the adaptive solver
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Relative tolerance
    pub rtol: f64,
    /// Absolute tolerance
    pub atol: f64,
    /// Maximum number of attempted steps over the whole span
    pub max_steps: usize,
    /// First trial step; estimated from the problem when `None`
    pub initial_step: Option<f64>,
    /// Upper bound on any step
    pub max_step: Option<f64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            rtol: 1.49012e-8,
            atol: 1.49012e-8,
            max_steps: 1_000_000,
            initial_step: None,
            max_step: None,
        }
    }
}

impl SolverConfig {
    pub fn with_tolerances(self, rtol: f64, atol: f64) -> Self {
        Self { rtol, atol, ..self }
    }

    pub fn with_max_steps(self, max_steps: usize) -> Self {
        Self { max_steps, ..self }
    }

    pub fn with_initial_step(self, h: f64) -> Self {
        Self { initial_step: Some(h), ..self }
    }

    pub fn with_max_step(self, h: f64) -> Self {
        Self { max_step: Some(h), ..self }
    }

    fn validate(&self) -> Result<(), IntegrationError> {
        let positive = |v: f64| v.is_finite() && v > 0.0;

        if !(self.rtol.is_finite() && self.rtol >= 0.0 && self.atol.is_finite() && self.atol >= 0.0)
            || self.rtol + self.atol <= 0.0
        {
            return Err(IntegrationError::InvalidConfig(format!(
                "tolerances must be non-negative and not both zero (rtol = {}, atol = {})",
                self.rtol, self.atol
            )));
        }
        if self.max_steps == 0 {
            return Err(IntegrationError::InvalidConfig("max_steps must be positive".into()));
        }
        if let Some(h) = self.initial_step.filter(|&h| !positive(h)) {
            return Err(IntegrationError::InvalidConfig(format!("initial_step = {}", h)));
        }
        if let Some(h) = self.max_step.filter(|&h| !positive(h)) {
            return Err(IntegrationError::InvalidConfig(format!("max_step = {}", h)));
        }
        Ok(())
    }
}

/// Work counters of one solve
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolverStats {
    pub accepted_steps: usize,
    pub rejected_steps: usize,
    pub evaluations: usize,
}

impl SolverStats {
    pub fn attempted_steps(&self) -> usize {
        self.accepted_steps + self.rejected_steps
    }
}

/// Dormand-Prince 5(4) solver
#[derive(Debug, Clone)]
pub struct Dopri5 {
    config: SolverConfig,
    stats: SolverStats,
}

impl Dopri5 {
    pub fn new(config: SolverConfig) -> Self {
        Self {
            config,
            stats: SolverStats::default(),
        }
    }

    /// Counters of the most recent [`solve`](Self::solve)
    pub fn stats(&self) -> SolverStats {
        self.stats
    }

    /// Integrate `field` from `y0` at `t_out[0]` and report the state at
    /// every entry of `t_out`
    ///
    /// `t_out` must be strictly increasing. The first output is `y0`
    /// itself, bit for bit.
    pub fn solve<F, const N: usize>(
        &mut self,
        field: &F,
        y0: [f64; N],
        t_out: &[f64],
    ) -> Result<Vec<[f64; N]>, IntegrationError>
    where
        F: VectorField<N>,
    {
        self.config.validate()?;
        self.stats = SolverStats::default();

        let Some((&t0, rest)) = t_out.split_first() else {
            return Ok(Vec::new());
        };
        if t_out.windows(2).any(|w| !(w[0] < w[1])) {
            return Err(IntegrationError::InvalidConfig(
                "output times must be strictly increasing".into(),
            ));
        }

        let mut out = Vec::with_capacity(t_out.len());
        let mut t = t0;
        let mut y = y0;
        if !all_finite(&y) {
            return Err(IntegrationError::NonFinite { t });
        }
        out.push(y);

        if rest.is_empty() {
            return Ok(out);
        }

        let mut f = self.eval(field, t, &y);
        if !all_finite(&f) {
            return Err(IntegrationError::NonFinite { t });
        }

        let span = t_out[t_out.len() - 1] - t0;
        let max_step = self.config.max_step.unwrap_or(span).min(span);
        let mut h = match self.config.initial_step {
            Some(h) => h,
            None => self.initial_step(field, t, &y, &f),
        }
        .min(max_step);

        let mut just_rejected = false;

        for &target in rest {
            while t < target {
                if self.stats.attempted_steps() >= self.config.max_steps {
                    debug!("dopri5: {} steps without reaching t = {}", self.config.max_steps, target);
                    return Err(IntegrationError::StepBudgetExhausted {
                        t,
                        steps: self.config.max_steps,
                    });
                }

                let h_min = 16.0 * f64::EPSILON * t.abs().max(1.0);
                if h < h_min {
                    return Err(IntegrationError::StepSizeUnderflow { t, h });
                }

                let remaining = target - t;
                let clipped = h >= remaining;
                let h_try = if clipped { remaining } else { h };

                let (y_new, f_new, err) = self.attempt(field, t, &y, &f, h_try);

                if err <= 1.0 && all_finite(&y_new) && all_finite(&f_new) {
                    self.stats.accepted_steps += 1;
                    t = if clipped { target } else { t + h_try };
                    y = y_new;
                    f = f_new;
                    if y.iter().any(|v| v.abs() > DIVERGENCE_LIMIT) {
                        debug!("dopri5: state diverged at t = {} after {} steps", t, self.stats.accepted_steps);
                        return Err(IntegrationError::NonFinite { t });
                    }

                    let mut factor = step_factor(err);
                    if just_rejected {
                        factor = factor.min(1.0);
                    }
                    just_rejected = false;

                    // A clipped step says little about the natural step size
                    let proposal = (h_try * factor).min(max_step);
                    h = if clipped { h.max(proposal).min(max_step) } else { proposal };
                } else {
                    self.stats.rejected_steps += 1;
                    just_rejected = true;
                    let factor = if err.is_finite() {
                        step_factor(err).min(1.0)
                    } else {
                        MIN_FACTOR
                    };
                    trace!("dopri5: rejected h = {:e} at t = {} (err = {:e})", h_try, t, err);
                    h = h_try * factor;
                }
            }
            out.push(y);
        }

        debug!(
            "dopri5: {} accepted, {} rejected, {} evaluations",
            self.stats.accepted_steps, self.stats.rejected_steps, self.stats.evaluations
        );

        Ok(out)
    }

    fn eval<F: VectorField<N>, const N: usize>(&mut self, field: &F, t: f64, y: &[f64; N]) -> [f64; N] {
        self.stats.evaluations += 1;
        field.derivative(t, y)
    }

    /// One trial step; returns the 5th order solution, its derivative
    /// and the scaled error norm
    fn attempt<F: VectorField<N>, const N: usize>(
        &mut self,
        field: &F,
        t: f64,
        y: &[f64; N],
        k1: &[f64; N],
        h: f64,
    ) -> ([f64; N], [f64; N], f64) {
        let stage = |coeffs: &[(f64, &[f64; N])]| -> [f64; N] {
            let mut out = *y;
            for (i, v) in out.iter_mut().enumerate() {
                let incr: f64 = coeffs.iter().map(|(a, k)| a * k[i]).sum();
                *v += h * incr;
            }
            out
        };

        let k2 = self.eval(field, t + C2 * h, &stage(&[(A21, k1)]));
        let k3 = self.eval(field, t + C3 * h, &stage(&[(A31, k1), (A32, &k2)]));
        let k4 = self.eval(field, t + C4 * h, &stage(&[(A41, k1), (A42, &k2), (A43, &k3)]));
        let k5 = self.eval(
            field,
            t + C5 * h,
            &stage(&[(A51, k1), (A52, &k2), (A53, &k3), (A54, &k4)]),
        );
        let k6 = self.eval(
            field,
            t + h,
            &stage(&[(A61, k1), (A62, &k2), (A63, &k3), (A64, &k4), (A65, &k5)]),
        );
        let y_new = stage(&[(B1, k1), (B3, &k3), (B4, &k4), (B5, &k5), (B6, &k6)]);
        let k7 = self.eval(field, t + h, &y_new);

        let mut sum_sq = 0.0;
        for i in 0..N {
            let e = h * (E1 * k1[i] + E3 * k3[i] + E4 * k4[i] + E5 * k5[i] + E6 * k6[i] + E7 * k7[i]);
            let sc = self.config.atol + self.config.rtol * y[i].abs().max(y_new[i].abs());
            sum_sq += (e / sc).powi(2);
        }
        let err = (sum_sq / N as f64).sqrt();

        (y_new, k7, err)
    }

    /// Starting step estimate (Hairer, Nørsett & Wanner, II.4)
    fn initial_step<F: VectorField<N>, const N: usize>(
        &mut self,
        field: &F,
        t0: f64,
        y0: &[f64; N],
        f0: &[f64; N],
    ) -> f64 {
        let scale: Vec<f64> = y0
            .iter()
            .map(|v| self.config.atol + self.config.rtol * v.abs())
            .collect();
        let norm = |v: &[f64; N]| -> f64 {
            let s: f64 = v.iter().zip(&scale).map(|(x, sc)| (x / sc).powi(2)).sum();
            (s / N as f64).sqrt()
        };

        let d0 = norm(y0);
        let d1 = norm(f0);
        let h0 = if d0 < 1e-5 || d1 < 1e-5 { 1e-6 } else { 0.01 * d0 / d1 };

        let mut y1 = *y0;
        for i in 0..N {
            y1[i] += h0 * f0[i];
        }
        let f1 = self.eval(field, t0 + h0, &y1);
        let mut diff = [0.0; N];
        for i in 0..N {
            diff[i] = f1[i] - f0[i];
        }
        let d2 = norm(&diff) / h0;

        let d = d1.max(d2);
        let h1 = if !d.is_finite() || d <= 1e-15 {
            (h0 * 1e-3).max(1e-6)
        } else {
            (0.01 / d).powf(1.0 / 5.0)
        };

        (100.0 * h0).min(h1)
    }
}

fn step_factor(err: f64) -> f64 {
    if err == 0.0 {
        MAX_FACTOR
    } else {
        (SAFETY * err.powf(-1.0 / 5.0)).clamp(MIN_FACTOR, MAX_FACTOR)
    }
}

fn all_finite<const N: usize>(v: &[f64; N]) -> bool {
    v.iter().all(|x| x.is_finite())
}
