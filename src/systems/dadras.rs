//! Dadras System: Multi-Scroll Chaos
//!
//!   dx/dt = y - ax + byz
//!   dy/dt = cy - xz + z
//!   dz/dt = dxy - ez
//!
//! Depending on the five parameters the flow shows two-, three- or
//! four-wing attractors; the defaults below give the familiar
//! two-scroll shape.
//!
//! ## References
//!
//! - Dadras, S. & Momeni, H. R. (2009). A novel three-dimensional
//!   autonomous chaotic system generating two, three and four-scroll
//!   attractors. Physics Letters A, 373(40), 3637-3642.

use crate::catalog::{AttractorDefinition, ParameterSpec, TimeDomain};

use super::AttractorKind;

pub(crate) const ARITY: usize = 5;

pub const DEFINITION: AttractorDefinition = AttractorDefinition {
    name: "Dadras",
    title: "Dadras attractor",
    kind: AttractorKind::Dadras,
    params: &[
        ParameterSpec { name: "a", default: 3.0, min: -10.0, max: 10.0, step: 0.1 },
        ParameterSpec { name: "b", default: 2.7, min: -10.0, max: 10.0, step: 0.1 },
        ParameterSpec { name: "c", default: 1.7, min: -10.0, max: 10.0, step: 0.1 },
        ParameterSpec { name: "d", default: 2.0, min: -10.0, max: 10.0, step: 0.1 },
        ParameterSpec { name: "e", default: 9.0, min: -10.0, max: 10.0, step: 0.1 },
    ],
    initial_state: [1.1, 2.1, -2.0],
    time_domain: TimeDomain { t_min: 0.0, t_max: 75.0, sample_count: 10_000 },
};

/// Dadras vector field, parameters `[a, b, c, d, e]`
pub fn derivative(state: &[f64; 3], _t: f64, params: &[f64]) -> [f64; 3] {
    let [x, y, z] = *state;
    let (a, b, c, d, e) = (params[0], params[1], params[2], params[3], params[4]);

    [
        y - a * x + b * y * z,
        c * y - x * z + z,
        d * x * y - e * z,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dadras_origin_fixed() {
        let d = derivative(&[0.0, 0.0, 0.0], 0.0, &[3.0, 2.7, 1.7, 2.0, 9.0]);
        assert_eq!(d, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_dadras_known_value() {
        let d = derivative(&[1.0, 1.0, 1.0], 0.0, &[1.0, 1.0, 1.0, 1.0, 1.0]);
        assert_eq!(d, [1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_dadras_definition_valid() {
        assert!(DEFINITION.validate().is_ok());
        assert_eq!(DEFINITION.params.len(), 5);
    }
}
