//! Lorenz System: Atmospheric Convection
//!
//! The Lorenz equations are a three-mode truncation of Rayleigh-Bénard
//! convection:
//!
//!   dx/dt = σ(y - x)
//!   dy/dt = x(ρ - z) - y
//!   dz/dt = xy - βz
//!
//! where:
//! - σ: Prandtl number
//! - ρ: Rayleigh number (control parameter)
//! - β: geometric aspect factor
//!
//! ## Fixed Points
//!
//! The origin is always a fixed point. For ρ > 1 two more appear at
//!
//!   C± = (±√(β(ρ-1)), ±√(β(ρ-1)), ρ - 1)
//!
//! and for the classic values (σ = 10, ρ = 28, β ≈ 8/3) all three are
//! unstable: trajectories wind around C± on the butterfly attractor.
//!
//! ## References
//!
//! - Lorenz, E. N. (1963). Deterministic nonperiodic flow.
//!   Journal of the Atmospheric Sciences, 20(2), 130-141.

use crate::catalog::{AttractorDefinition, ParameterSpec, TimeDomain};

use super::AttractorKind;

pub(crate) const ARITY: usize = 3;

/// Catalog entry with the classic butterfly parameters
pub const DEFINITION: AttractorDefinition = AttractorDefinition {
    name: "Lorenz",
    title: "Lorenz attractor",
    kind: AttractorKind::Lorenz,
    params: &[
        ParameterSpec { name: "sigma", default: 10.0, min: 0.0, max: 50.0, step: 0.1 },
        ParameterSpec { name: "rho", default: 28.0, min: 0.0, max: 50.0, step: 0.1 },
        ParameterSpec { name: "beta", default: 2.67, min: 0.0, max: 50.0, step: 0.1 },
    ],
    initial_state: [0.0, 1.5, 15.0],
    time_domain: TimeDomain { t_min: 0.0, t_max: 50.0, sample_count: 10_000 },
};

/// Lorenz vector field, parameters `[sigma, rho, beta]`
pub fn derivative(state: &[f64; 3], _t: f64, params: &[f64]) -> [f64; 3] {
    let [x, y, z] = *state;
    let (sigma, rho, beta) = (params[0], params[1], params[2]);

    [sigma * (y - x), x * (rho - z) - y, x * y - beta * z]
}
