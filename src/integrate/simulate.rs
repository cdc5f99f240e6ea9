//! Simulation: From Definition and Parameters to Trajectory
//!
//! Binds the resolved parameters to the definition's equation, builds the
//! uniform output grid and hands both to the adaptive solver. The mapping
//! `(definition, parameters, config) → Trajectory` is a pure function, so
//! callers may memoize results freely.

use std::borrow::Borrow;

use log::{debug, warn};

use crate::catalog::AttractorDefinition;
use crate::error::{AttractorError, Result};
use crate::parameters::{resolve, ResolvedParameters};
use crate::systems::BoundAttractor;

use super::dopri::{Dopri5, SolverConfig, SolverStats};
use super::trajectory::Trajectory;

/// Integrate a definition with resolved parameters using default tolerances
pub fn integrate(definition: &AttractorDefinition, resolved: &ResolvedParameters) -> Result<Trajectory> {
    integrate_with(definition, resolved, &SolverConfig::default())
}

/// Integrate with explicit solver configuration
pub fn integrate_with(
    definition: &AttractorDefinition,
    resolved: &ResolvedParameters,
    config: &SolverConfig,
) -> Result<Trajectory> {
    integrate_with_stats(definition, resolved, config).map(|(trajectory, _)| trajectory)
}

/// Integrate and report the solver's work counters
///
/// # Errors
/// * `InvalidDefinition` if the definition breaks its own invariants
/// * `MismatchedParameters` if `resolved` belongs to another attractor
/// * `Integration` if the solver fails; no partial trajectory is returned
pub fn integrate_with_stats(
    definition: &AttractorDefinition,
    resolved: &ResolvedParameters,
    config: &SolverConfig,
) -> Result<(Trajectory, SolverStats)> {
    definition.validate()?;

    if resolved.attractor() != definition.name || resolved.len() != definition.params.len() {
        return Err(AttractorError::MismatchedParameters {
            expected: definition.name.to_string(),
            found: resolved.attractor().to_string(),
        });
    }

    let times = definition.time_domain.grid();
    let field = BoundAttractor::new(definition.kind, resolved.values());
    let mut solver = Dopri5::new(*config);

    let points = solver
        .solve(&field, definition.initial_state, &times.to_vec())
        .map_err(|e| {
            warn!("{}: integration failed: {}", definition.name, e);
            AttractorError::from(e)
        })?;

    let stats = solver.stats();
    debug!(
        "{}: {} samples over [{}, {}] in {} steps ({} rejected)",
        definition.name,
        points.len(),
        definition.time_domain.t_min,
        definition.time_domain.t_max,
        stats.accepted_steps,
        stats.rejected_steps
    );

    Ok((Trajectory::new(times, &points), stats))
}

/// Resolve overrides against the schema and integrate
///
/// # Errors
/// `UnknownParameter` and `ParameterRange` from resolution, then
/// everything [`integrate_with_stats`] can return.
pub fn simulate<I, S, V>(definition: &AttractorDefinition, overrides: I) -> Result<Trajectory>
where
    I: IntoIterator<Item = (S, V)>,
    S: AsRef<str>,
    V: Borrow<f64>,
{
    simulate_with(definition, overrides, &SolverConfig::default())
}

/// [`simulate`] with explicit solver configuration
pub fn simulate_with<I, S, V>(
    definition: &AttractorDefinition,
    overrides: I,
    config: &SolverConfig,
) -> Result<Trajectory>
where
    I: IntoIterator<Item = (S, V)>,
    S: AsRef<str>,
    V: Borrow<f64>,
{
    let resolved = resolve(definition, overrides)?;
    integrate_with(definition, &resolved, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ParameterSpec, TimeDomain};
    use crate::integrate::IntegrationError;
    use crate::systems::{lorenz, rossler, AttractorKind};

    const NONE: [(&str, f64); 0] = [];

    fn short(definition: AttractorDefinition, t_max: f64, n: usize) -> AttractorDefinition {
        AttractorDefinition {
            time_domain: TimeDomain { t_min: 0.0, t_max, sample_count: n },
            ..definition
        }
    }

    #[test]
    fn test_grid_and_initial_state() {
        let def = short(lorenz::DEFINITION, 2.0, 201);
        let traj = simulate(&def, NONE).unwrap();

        assert_eq!(traj.len(), 201);
        assert_eq!(traj.first(), Some([0.0, 1.5, 15.0]));
        assert_eq!(traj.times()[0], 0.0);
        assert_eq!(traj.times()[200], 2.0);
    }

    #[test]
    fn test_overrides_change_trajectory() {
        let def = short(rossler::DEFINITION, 20.0, 500);
        let base = simulate(&def, NONE).unwrap();
        let tuned = simulate(&def, [("c", 4.0)]).unwrap();
        assert_ne!(base.last(), tuned.last());
    }

    #[test]
    fn test_mismatched_parameters() {
        let resolved = resolve(&rossler::DEFINITION, NONE).unwrap();
        let err = integrate(&lorenz::DEFINITION, &resolved).unwrap_err();
        assert!(matches!(err, AttractorError::MismatchedParameters { .. }));
    }

    #[test]
    fn test_invalid_definition_rejected() {
        let def = AttractorDefinition {
            time_domain: TimeDomain { t_min: 0.0, t_max: 1.0, sample_count: 1 },
            ..lorenz::DEFINITION
        };
        let resolved = resolve(&def, NONE).unwrap();
        assert!(matches!(
            integrate(&def, &resolved),
            Err(AttractorError::InvalidDefinition { .. })
        ));
    }

    #[test]
    fn test_divergence_reported() {
        // With negative damping every coordinate grows like e^t and overflows
        static SPECS: [ParameterSpec; 1] =
            [ParameterSpec { name: "b", default: -1.0, min: -2.0, max: 1.0, step: 0.01 }];
        let def = AttractorDefinition {
            name: "runaway",
            title: "Undamped Thomas",
            kind: AttractorKind::Thomas,
            params: &SPECS,
            initial_state: [1.1, 1.1, -0.01],
            time_domain: TimeDomain { t_min: 0.0, t_max: 1000.0, sample_count: 100 },
        };

        match simulate(&def, NONE) {
            Err(AttractorError::Integration(IntegrationError::NonFinite { t })) => {
                assert!(t < 1000.0, "diverged at t = {}", t)
            }
            other => panic!("expected integration failure, got {:?}", other.map(|t| t.len())),
        }
    }

    #[test]
    fn test_stats_reported() {
        let def = short(lorenz::DEFINITION, 1.0, 101);
        let resolved = resolve(&def, NONE).unwrap();
        let (traj, stats) = integrate_with_stats(&def, &resolved, &SolverConfig::default()).unwrap();
        assert_eq!(traj.len(), 101);
        assert!(stats.accepted_steps >= 100);
    }
}
