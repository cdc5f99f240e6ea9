//! Attractor Definitions: Parameter Schemas and Time Domains
//!
//! An [`AttractorDefinition`] bundles everything needed to reproduce one
//! classic chaotic system:
//!
//! - the equation (an [`AttractorKind`] variant)
//! - an ordered parameter schema, whose order is the positional binding
//!   into the equation
//! - the initial state and the sampled time window
//!
//! Definitions are plain data. The built-ins are compile-time constants
//! and live in a read-only table for the lifetime of the process.

use ndarray::Array1;

use crate::error::{AttractorError, Result};
use crate::systems::AttractorKind;

/// One tunable scalar of an attractor equation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterSpec {
    /// Name of the positional argument
    pub name: &'static str,
    /// Value used when no override is supplied
    pub default: f64,
    /// Inclusive lower bound
    pub min: f64,
    /// Inclusive upper bound
    pub max: f64,
    /// Suggested slider granularity (not enforced)
    pub step: f64,
}

impl ParameterSpec {
    /// Whether `value` lies within the inclusive bounds
    ///
    /// NaN is never in range.
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    fn is_consistent(&self) -> bool {
        self.min <= self.default && self.default <= self.max && self.step > 0.0
    }
}

/// Sampled time window of a simulation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeDomain {
    pub t_min: f64,
    pub t_max: f64,
    /// Number of grid points, endpoints included
    pub sample_count: usize,
}

impl TimeDomain {
    /// Spacing between consecutive grid points
    ///
    /// `None` when the domain has fewer than two samples.
    pub fn spacing(&self) -> Option<f64> {
        (self.sample_count >= 2).then(|| (self.t_max - self.t_min) / (self.sample_count - 1) as f64)
    }

    /// Uniform grid over `[t_min, t_max]`, both endpoints exact
    pub fn grid(&self) -> Array1<f64> {
        let n = self.sample_count;
        let span = self.t_max - self.t_min;
        Array1::from_iter((0..n).map(|i| {
            if i + 1 == n {
                self.t_max
            } else {
                self.t_min + span * (i as f64 / (n - 1) as f64)
            }
        }))
    }
}

/// A named chaotic system with its parameter schema
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttractorDefinition {
    /// Catalog key
    pub name: &'static str,
    /// Human-readable label
    pub title: &'static str,
    /// Equation variant
    pub kind: AttractorKind,
    /// Ordered parameter schema
    pub params: &'static [ParameterSpec],
    pub initial_state: [f64; 3],
    pub time_domain: TimeDomain,
}

impl AttractorDefinition {
    /// Look up a parameter spec by name
    pub fn param(&self, name: &str) -> Option<&'static ParameterSpec> {
        self.params.iter().find(|p| p.name == name)
    }

    /// Names of the parameters in positional order
    pub fn param_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.params.iter().map(|p| p.name)
    }

    /// Check the structural invariants of the definition
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: String| AttractorError::InvalidDefinition {
            name: self.name.to_string(),
            reason,
        };

        if self.params.len() != self.kind.arity() {
            return Err(invalid(format!(
                "{:?} takes {} parameters, schema declares {}",
                self.kind,
                self.kind.arity(),
                self.params.len()
            )));
        }

        for (i, spec) in self.params.iter().enumerate() {
            if !spec.is_consistent() {
                return Err(invalid(format!(
                    "parameter {} has default {} outside [{}, {}] or non-positive step",
                    spec.name, spec.default, spec.min, spec.max
                )));
            }
            if self.params[..i].iter().any(|p| p.name == spec.name) {
                return Err(invalid(format!("duplicate parameter {}", spec.name)));
            }
        }

        let domain = &self.time_domain;
        if domain.sample_count < 2 {
            return Err(invalid(format!(
                "sample_count must be at least 2, got {}",
                domain.sample_count
            )));
        }
        if !(domain.t_min < domain.t_max) {
            return Err(invalid(format!(
                "empty time window [{}, {}]",
                domain.t_min, domain.t_max
            )));
        }
        if self.initial_state.iter().any(|v| !v.is_finite()) {
            return Err(invalid("non-finite initial state".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static SPECS: [ParameterSpec; 3] = [
        ParameterSpec { name: "a", default: 0.2, min: 0.0, max: 1.0, step: 0.01 },
        ParameterSpec { name: "b", default: 0.2, min: 0.0, max: 1.0, step: 0.01 },
        ParameterSpec { name: "c", default: 5.7, min: 0.0, max: 20.0, step: 0.01 },
    ];

    fn definition() -> AttractorDefinition {
        AttractorDefinition {
            name: "test",
            title: "Test system",
            kind: AttractorKind::Rossler,
            params: &SPECS,
            initial_state: [1.0, 1.0, 1.0],
            time_domain: TimeDomain { t_min: 0.0, t_max: 10.0, sample_count: 11 },
        }
    }

    #[test]
    fn test_spec_bounds_inclusive() {
        let spec = SPECS[2];
        assert!(spec.contains(0.0));
        assert!(spec.contains(20.0));
        assert!(!spec.contains(20.000001));
        assert!(!spec.contains(f64::NAN));
    }

    #[test]
    fn test_time_grid() {
        let domain = definition().time_domain;
        let grid = domain.grid();
        assert_eq!(grid.len(), 11);
        assert_eq!(grid[0], 0.0);
        assert_eq!(grid[10], 10.0);
        assert!((domain.spacing().unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_spacing_undefined_below_two_samples() {
        for sample_count in [0, 1] {
            let domain = TimeDomain { t_min: 0.0, t_max: 1.0, sample_count };
            assert_eq!(domain.spacing(), None);
        }
    }

    #[test]
    fn test_validate_accepts_well_formed() {
        assert!(definition().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_arity_mismatch() {
        let mut def = definition();
        def.params = &SPECS[..2];
        assert!(matches!(def.validate(), Err(AttractorError::InvalidDefinition { .. })));
    }

    #[test]
    fn test_validate_rejects_bad_domain() {
        let mut def = definition();
        def.time_domain.sample_count = 1;
        assert!(def.validate().is_err());

        let mut def = definition();
        def.time_domain.t_max = def.time_domain.t_min;
        assert!(def.validate().is_err());
    }

    #[test]
    fn test_param_lookup() {
        let def = definition();
        assert_eq!(def.param("c").map(|p| p.default), Some(5.7));
        assert!(def.param("sigma").is_none());
        assert_eq!(def.param_names().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }
}
