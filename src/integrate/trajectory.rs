//! Trajectory: Sampled Solution of an Attractor IVP
//!
//! A trajectory stores the state at each point of a uniform time grid as
//! an `n × 3` matrix, one row per sample. It is immutable once built and
//! cheap to share by reference with the density and animation transforms.

use ndarray::{s, Array1, Array2, ArrayView1, ArrayView2, Axis};

/// Time-ordered sequence of 3D states
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    /// Sample times
    times: Array1<f64>,
    /// States, shape (n, 3)
    states: Array2<f64>,
}

impl Trajectory {
    /// Build a trajectory from sample times and matching states
    ///
    /// # Panics
    /// If `times` and `points` differ in length.
    pub fn new(times: Array1<f64>, points: &[[f64; 3]]) -> Self {
        assert_eq!(
            times.len(),
            points.len(),
            "trajectory needs one time per state"
        );

        let mut states = Array2::zeros((points.len(), 3));
        for (mut row, point) in states.axis_iter_mut(Axis(0)).zip(points) {
            row[0] = point[0];
            row[1] = point[1];
            row[2] = point[2];
        }

        Self { times, states }
    }

    /// Trajectory indexed by sample number (t = 0, 1, 2, ...)
    pub fn from_points(points: &[[f64; 3]]) -> Self {
        let times = Array1::from_iter((0..points.len()).map(|i| i as f64));
        Self::new(times, points)
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.states.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn times(&self) -> &Array1<f64> {
        &self.times
    }

    /// States as an (n, 3) matrix
    pub fn states(&self) -> &Array2<f64> {
        &self.states
    }

    /// State at sample `i`
    pub fn point(&self, i: usize) -> Option<[f64; 3]> {
        (i < self.len()).then(|| {
            let row = self.states.row(i);
            [row[0], row[1], row[2]]
        })
    }

    pub fn first(&self) -> Option<[f64; 3]> {
        self.point(0)
    }

    pub fn last(&self) -> Option<[f64; 3]> {
        self.len().checked_sub(1).and_then(|i| self.point(i))
    }

    /// One coordinate over time (0 = x, 1 = y, 2 = z)
    ///
    /// # Panics
    /// If `axis > 2`.
    pub fn column(&self, axis: usize) -> ArrayView1<'_, f64> {
        self.states.column(axis)
    }

    /// Projection onto the (x, y) plane, shape (n, 2)
    pub fn projection_xy(&self) -> ArrayView2<'_, f64> {
        self.states.slice(s![.., 0..2])
    }

    /// First `k` samples
    pub fn prefix(&self, k: usize) -> ArrayView2<'_, f64> {
        let k = k.min(self.len());
        self.states.slice(s![..k, ..])
    }

    /// Per-axis (min, max) over all samples
    pub fn bounds(&self) -> Option<[(f64, f64); 3]> {
        if self.is_empty() {
            return None;
        }
        let mut bounds = [(f64::INFINITY, f64::NEG_INFINITY); 3];
        for row in self.states.rows() {
            for (b, &v) in bounds.iter_mut().zip(row.iter()) {
                b.0 = b.0.min(v);
                b.1 = b.1.max(v);
            }
        }
        Some(bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Trajectory {
        Trajectory::from_points(&[[0.0, 1.0, 2.0], [3.0, 4.0, 5.0], [-1.0, 7.0, 0.5]])
    }

    #[test]
    fn test_trajectory_accessors() {
        let traj = sample();
        assert_eq!(traj.len(), 3);
        assert_eq!(traj.first(), Some([0.0, 1.0, 2.0]));
        assert_eq!(traj.last(), Some([-1.0, 7.0, 0.5]));
        assert_eq!(traj.point(3), None);
        assert_eq!(traj.column(1).to_vec(), vec![1.0, 4.0, 7.0]);
        assert_eq!(traj.times().to_vec(), vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_projection_and_prefix() {
        let traj = sample();
        let xy = traj.projection_xy();
        assert_eq!(xy.dim(), (3, 2));
        assert_eq!(xy[[2, 1]], 7.0);

        assert_eq!(traj.prefix(2).nrows(), 2);
        assert_eq!(traj.prefix(10).nrows(), 3);
    }

    #[test]
    fn test_bounds() {
        let bounds = sample().bounds().unwrap();
        assert_eq!(bounds[0], (-1.0, 3.0));
        assert_eq!(bounds[2], (0.5, 5.0));
        assert!(Trajectory::from_points(&[]).bounds().is_none());
    }

    #[test]
    #[should_panic]
    fn test_length_mismatch_panics() {
        Trajectory::new(Array1::zeros(2), &[[0.0; 3]]);
    }
}
