//! Density Estimation: Kernel Density over the (x, y) Projection
//!
//! Colors a trajectory by how crowded its neighbourhood is. The estimate
//! is a bivariate Gaussian kernel density:
//!
//!   p(u) = 1/(n · 2π · √det K) · Σᵢ exp(-½ (u - uᵢ)ᵀ K⁻¹ (u - uᵢ))
//!
//! with kernel covariance K = f² · Σ, where Σ is the (unbiased) sample
//! covariance of the fit points and f = n^(-1/6) is Scott's factor for
//! two dimensions.
//!
//! ## Subsampling
//!
//! Fitting is O(n) but evaluation is O(n · m), so long trajectories are
//! fit on a uniform random subset drawn without replacement. The fitted
//! model is still evaluated at **every** trajectory point, giving a smooth
//! coloring over the whole curve.

use log::debug;
use ndarray::{Array1, ArrayView2, Axis};
use rand::Rng;
use std::f64::consts::PI;

use crate::error::{AttractorError, Result};
use crate::integrate::Trajectory;

/// Default number of points used to fit the density model
pub const DEFAULT_DENSITY_SAMPLE_SIZE: usize = 1000;

/// Fit points count as collinear once 1 - r² drops to this value
const COLLINEAR_TOLERANCE: f64 = 1e-10;

/// One density value per trajectory sample
#[derive(Debug, Clone, PartialEq)]
pub struct DensityField {
    values: Array1<f64>,
}

impl DensityField {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &Array1<f64> {
        &self.values
    }

    pub fn into_values(self) -> Array1<f64> {
        self.values
    }

    /// Values rescaled linearly onto [0, 1] for color mapping
    ///
    /// A constant field maps to all zeros.
    pub fn normalized(&self) -> Array1<f64> {
        let min = self.values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let range = max - min;

        if range > 0.0 && range.is_finite() {
            self.values.mapv(|v| (v - min) / range)
        } else {
            Array1::zeros(self.values.len())
        }
    }
}

/// Bivariate Gaussian kernel density estimate
#[derive(Debug, Clone)]
pub struct GaussianKde {
    /// Fit points, shape (m, 2)
    points: Vec<[f64; 2]>,
    /// Scott's bandwidth factor
    factor: f64,
    /// Inverse kernel covariance (symmetric, stored as [a, b, c] for [[a, b], [b, c]])
    inv_kernel: [f64; 3],
    /// Normalization 1 / (m · 2π · √det K)
    norm: f64,
}

impl GaussianKde {
    /// Fit on an (m, 2) point set
    ///
    /// # Errors
    /// `DegenerateTrajectory` if there are fewer than two points, any
    /// coordinate is non-finite, or the points are (near-)collinear.
    pub fn fit(points: ArrayView2<'_, f64>) -> Result<Self> {
        let m = points.nrows();
        if m < 2 {
            return Err(AttractorError::DegenerateTrajectory(format!(
                "need at least 2 points to fit a density, got {}",
                m
            )));
        }
        if points.iter().any(|v| !v.is_finite()) {
            return Err(AttractorError::DegenerateTrajectory(
                "non-finite coordinates".to_string(),
            ));
        }

        let mean = points.mean_axis(Axis(0)).ok_or_else(|| {
            AttractorError::DegenerateTrajectory("empty point set".to_string())
        })?;
        let (mx, my) = (mean[0], mean[1]);

        let (mut sxx, mut syy, mut sxy) = (0.0, 0.0, 0.0);
        for row in points.rows() {
            let dx = row[0] - mx;
            let dy = row[1] - my;
            sxx += dx * dx;
            syy += dy * dy;
            sxy += dx * dy;
        }
        let denom = (m - 1) as f64;
        let (vxx, vyy, vxy) = (sxx / denom, syy / denom, sxy / denom);

        let det = vxx * vyy - vxy * vxy;
        if !(det > COLLINEAR_TOLERANCE * vxx * vyy) || !det.is_finite() {
            return Err(AttractorError::DegenerateTrajectory(format!(
                "projected points are collinear (covariance determinant {:e})",
                det
            )));
        }

        let factor = (m as f64).powf(-1.0 / 6.0);
        let f2 = factor * factor;
        let kernel_det = det * f2 * f2;
        let inv_kernel = [vyy / (det * f2), -vxy / (det * f2), vxx / (det * f2)];
        let norm = 1.0 / (m as f64 * 2.0 * PI * kernel_det.sqrt());

        debug!(
            "kde: fit on {} points, factor {:.4}, covariance [[{:.4}, {:.4}], [{:.4}, {:.4}]]",
            m, factor, vxx, vxy, vxy, vyy
        );

        Ok(Self {
            points: points.rows().into_iter().map(|r| [r[0], r[1]]).collect(),
            factor,
            inv_kernel,
            norm,
        })
    }

    pub fn bandwidth_factor(&self) -> f64 {
        self.factor
    }

    pub fn n_points(&self) -> usize {
        self.points.len()
    }

    /// Density at (x, y)
    pub fn evaluate(&self, x: f64, y: f64) -> f64 {
        let [a, b, c] = self.inv_kernel;
        let sum: f64 = self
            .points
            .iter()
            .map(|p| {
                let dx = x - p[0];
                let dy = y - p[1];
                let q = a * dx * dx + 2.0 * b * dx * dy + c * dy * dy;
                (-0.5 * q).exp()
            })
            .sum();
        sum * self.norm
    }
}

/// Density of every trajectory sample using the thread-local RNG
///
/// Run-to-run variation comes from the random subsample; use
/// [`estimate_density_with_rng`] with a seeded generator to reproduce.
pub fn estimate_density(trajectory: &Trajectory, max_sample_size: usize) -> Result<DensityField> {
    estimate_density_with_rng(trajectory, max_sample_size, &mut rand::rng())
}

/// Density of every trajectory sample, subsampling with `rng`
///
/// # Errors
/// `DegenerateTrajectory` if the fit is singular.
pub fn estimate_density_with_rng<R: Rng + ?Sized>(
    trajectory: &Trajectory,
    max_sample_size: usize,
    rng: &mut R,
) -> Result<DensityField> {
    let xy = trajectory.projection_xy();
    let n = xy.nrows();

    let kde = if n > max_sample_size {
        let mut indices = rand::seq::index::sample(rng, n, max_sample_size).into_vec();
        indices.sort_unstable();
        GaussianKde::fit(xy.select(Axis(0), &indices).view())?
    } else {
        GaussianKde::fit(xy)?
    };

    let values = Array1::from_iter(xy.rows().into_iter().map(|r| kde.evaluate(r[0], r[1])));

    Ok(DensityField { values })
}
