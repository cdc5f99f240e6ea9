//! Attractor Systems Module: Equations of the Built-in Catalog
//!
//! Implements the classic three-dimensional chaotic flows:
//!
//! - **Lorenz**: Convection roll model, the canonical butterfly
//! - **Rössler**: Single-lobe spiral with a folding band
//! - **Dadras**: Five-parameter multi-scroll system
//! - **Thomas**: Cyclically symmetric, labyrinth-like chaos
//! - **Aizawa**: Sphere-with-tube attractor
//!
//! Each equation is a pure function of `(state, t, params)`. The set of
//! equations is closed, so dispatch is a `match` on [`AttractorKind`]
//! rather than a stored callable.

mod traits;
pub mod lorenz;
pub mod rossler;
pub mod dadras;
pub mod thomas;
pub mod aizawa;

pub use traits::{BoundAttractor, VectorField};

/// Equation variant of a catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttractorKind {
    Lorenz,
    Rossler,
    Dadras,
    Thomas,
    Aizawa,
}

impl AttractorKind {
    /// Number of positional parameters the equation expects
    pub fn arity(&self) -> usize {
        match self {
            AttractorKind::Lorenz => lorenz::ARITY,
            AttractorKind::Rossler => rossler::ARITY,
            AttractorKind::Dadras => dadras::ARITY,
            AttractorKind::Thomas => thomas::ARITY,
            AttractorKind::Aizawa => aizawa::ARITY,
        }
    }

    /// Evaluate the derivative given state, time and ordered parameters
    ///
    /// `params` must hold exactly [`arity`](Self::arity) values in schema order.
    pub fn derivative(&self, state: &[f64; 3], t: f64, params: &[f64]) -> [f64; 3] {
        match self {
            AttractorKind::Lorenz => lorenz::derivative(state, t, params),
            AttractorKind::Rossler => rossler::derivative(state, t, params),
            AttractorKind::Dadras => dadras::derivative(state, t, params),
            AttractorKind::Thomas => thomas::derivative(state, t, params),
            AttractorKind::Aizawa => aizawa::derivative(state, t, params),
        }
    }
}
