//! Thomas System: Cyclically Symmetric Attractor
//!
//!   dx/dt = sin(y) - bx
//!   dy/dt = sin(z) - by
//!   dz/dt = sin(x) - bz
//!
//! The single dissipation parameter b sweeps the flow from a stable
//! fixed point (b > 1) through limit cycles to chaos near b ≈ 0.208186.
//! At b = 0 the motion becomes a deterministic random walk in a
//! lattice of cells.
//!
//! ## References
//!
//! - Thomas, R. (1999). Deterministic chaos seen in terms of feedback
//!   circuits. International Journal of Bifurcation and Chaos, 9(10).

use crate::catalog::{AttractorDefinition, ParameterSpec, TimeDomain};

use super::AttractorKind;

pub(crate) const ARITY: usize = 1;

pub const DEFINITION: AttractorDefinition = AttractorDefinition {
    name: "Thomas",
    title: "Thomas cyclically symmetric attractor",
    kind: AttractorKind::Thomas,
    params: &[ParameterSpec { name: "b", default: 0.208186, min: 0.0, max: 1.0, step: 0.001 }],
    initial_state: [1.1, 1.1, -0.01],
    time_domain: TimeDomain { t_min: 0.0, t_max: 500.0, sample_count: 10_000 },
};

/// Thomas vector field, parameters `[b]`
pub fn derivative(state: &[f64; 3], _t: f64, params: &[f64]) -> [f64; 3] {
    let [x, y, z] = *state;
    let b = params[0];

    [y.sin() - b * x, z.sin() - b * y, x.sin() - b * z]
}
