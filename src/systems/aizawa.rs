//! Aizawa System
//!
//!   dx/dt = (z - b)x - dy
//!   dy/dt = dx + (z - b)y
//!   dz/dt = c + az - z³/3 - (x² + y²)(1 + ez) + fzx³
//!
//! Trajectories wrap a sphere-like shell and escape along a tube on the
//! z axis. The f·z·x³ term breaks rotational symmetry about z.

use crate::catalog::{AttractorDefinition, ParameterSpec, TimeDomain};

use super::AttractorKind;

pub(crate) const ARITY: usize = 6;

pub const DEFINITION: AttractorDefinition = AttractorDefinition {
    name: "Aizawa",
    title: "Aizawa attractor",
    kind: AttractorKind::Aizawa,
    params: &[
        ParameterSpec { name: "a", default: 0.95, min: 0.0, max: 2.0, step: 0.01 },
        ParameterSpec { name: "b", default: 0.7, min: 0.0, max: 2.0, step: 0.01 },
        ParameterSpec { name: "c", default: 0.6, min: 0.0, max: 2.0, step: 0.01 },
        ParameterSpec { name: "d", default: 3.5, min: 0.0, max: 5.0, step: 0.01 },
        ParameterSpec { name: "e", default: 0.25, min: 0.0, max: 1.0, step: 0.01 },
        ParameterSpec { name: "f", default: 0.1, min: 0.0, max: 1.0, step: 0.01 },
    ],
    initial_state: [0.1, 0.0, 0.0],
    time_domain: TimeDomain { t_min: 0.0, t_max: 100.0, sample_count: 10_000 },
};

/// Aizawa vector field, parameters `[a, b, c, d, e, f]`
pub fn derivative(state: &[f64; 3], _t: f64, params: &[f64]) -> [f64; 3] {
    let [x, y, z] = *state;
    let (a, b, c, d, e, f) = (params[0], params[1], params[2], params[3], params[4], params[5]);

    [
        (z - b) * x - d * y,
        d * x + (z - b) * y,
        c + a * z - z.powi(3) / 3.0 - (x * x + y * y) * (1.0 + e * z) + f * z * x.powi(3),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aizawa_on_axis() {
        // On the z axis only the z-equation is active
        let params = [0.95, 0.7, 0.6, 3.5, 0.25, 0.1];
        let d = derivative(&[0.0, 0.0, 1.5], 0.0, &params);
        assert_eq!(d[0], 0.0);
        assert_eq!(d[1], 0.0);
        let expected = 0.6 + 0.95 * 1.5 - 1.5f64.powi(3) / 3.0;
        assert!((d[2] - expected).abs() < 1e-12);
    }

    #[test]
    fn test_aizawa_definition_valid() {
        assert!(DEFINITION.validate().is_ok());
    }
}
