//! Vector Field Trait: The Seam Between Equations and Solvers
//!
//! Any autonomous or time-dependent ODE right-hand side can be handed to
//! the adaptive solver through [`VectorField`]. The attractor catalog
//! implements it by binding an [`AttractorKind`](super::AttractorKind)
//! to an ordered parameter slice.
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │              VectorField<N> Trait             │
//! ├───────────────────────────────────────────────┤
//! │  + derivative(t, state) -> dstate/dt          │
//! └───────────────────────────────────────────────┘
//!         ▲                          ▲
//!   BoundAttractor              test fixtures
//! ```

use super::AttractorKind;

/// Right-hand side of an N-dimensional ODE system
pub trait VectorField<const N: usize> {
    /// Evaluate dy/dt at time `t` and state `y`
    fn derivative(&self, t: f64, y: &[f64; N]) -> [f64; N];
}

/// An attractor equation with its positional parameters bound
#[derive(Debug, Clone, Copy)]
pub struct BoundAttractor<'a> {
    kind: AttractorKind,
    params: &'a [f64],
}

impl<'a> BoundAttractor<'a> {
    /// Bind parameters in schema order
    ///
    /// The caller guarantees `params.len() == kind.arity()`.
    pub fn new(kind: AttractorKind, params: &'a [f64]) -> Self {
        debug_assert_eq!(params.len(), kind.arity());
        Self { kind, params }
    }

    pub fn kind(&self) -> AttractorKind {
        self.kind
    }
}

impl VectorField<3> for BoundAttractor<'_> {
    fn derivative(&self, t: f64, y: &[f64; 3]) -> [f64; 3] {
        self.kind.derivative(y, t, self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bound_matches_kind() {
        let params = [10.0, 28.0, 8.0 / 3.0];
        let bound = BoundAttractor::new(AttractorKind::Lorenz, &params);
        let y = [1.0, 2.0, 3.0];
        assert_eq!(
            bound.derivative(0.0, &y),
            AttractorKind::Lorenz.derivative(&y, 0.0, &params)
        );
    }
}
