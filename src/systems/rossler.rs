//! Rössler System: Spiral Chaos
//!
//! A deliberately minimal chaotic flow with a single nonlinear term:
//!
//!   dx/dt = -y - z
//!   dy/dt = x + ay
//!   dz/dt = b + z(x - c)
//!
//! The (x, y) plane carries an unstable spiral; whenever x exceeds c the
//! z-equation fires a spike that folds the band back onto itself.
//!
//! ## Period Doubling
//!
//! With a = b = 0.2 the system goes through a period-doubling cascade as
//! c grows, reaching chaos near c ≈ 4.2. The standard value c = 5.7 is
//! well inside the chaotic window.
//!
//! ## References
//!
//! - Rössler, O. E. (1976). An equation for continuous chaos.
//!   Physics Letters A, 57(5), 397-398.

use crate::catalog::{AttractorDefinition, ParameterSpec, TimeDomain};

use super::AttractorKind;

pub(crate) const ARITY: usize = 3;

pub const DEFINITION: AttractorDefinition = AttractorDefinition {
    name: "Rossler",
    title: "Rössler attractor",
    kind: AttractorKind::Rossler,
    params: &[
        ParameterSpec { name: "a", default: 0.2, min: 0.0, max: 1.0, step: 0.01 },
        ParameterSpec { name: "b", default: 0.2, min: 0.0, max: 1.0, step: 0.01 },
        ParameterSpec { name: "c", default: 5.7, min: 0.0, max: 20.0, step: 0.01 },
    ],
    initial_state: [1.0, 1.0, 1.0],
    time_domain: TimeDomain { t_min: 0.0, t_max: 100.0, sample_count: 10_000 },
};

/// Rössler vector field, parameters `[a, b, c]`
pub fn derivative(state: &[f64; 3], _t: f64, params: &[f64]) -> [f64; 3] {
    let [x, y, z] = *state;
    let (a, b, c) = (params[0], params[1], params[2]);

    [-y - z, x + a * y, b + z * (x - c)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rossler_known_value() {
        let d = derivative(&[1.0, 1.0, 1.0], 0.0, &[0.2, 0.2, 5.7]);
        assert!((d[0] + 2.0).abs() < 1e-12);
        assert!((d[1] - 1.2).abs() < 1e-12);
        assert!((d[2] - (0.2 - 4.7)).abs() < 1e-12);
    }

    #[test]
    fn test_rossler_definition_valid() {
        assert!(DEFINITION.validate().is_ok());
        assert_eq!(DEFINITION.param("c").map(|p| p.max), Some(20.0));
    }
}
