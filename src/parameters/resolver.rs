//! Parameter Resolver: Merging Overrides with Schema Defaults
//!
//! For each [`ParameterSpec`] of a definition the resolver takes the
//! caller's override if one is present, otherwise the default. Overrides
//! are validated against the inclusive bounds and against the schema's
//! names. The result keeps schema order, which is the positional binding
//! into the equation.

use std::borrow::Borrow;
use std::collections::BTreeMap;

use crate::catalog::{AttractorDefinition, ParameterSpec};
use crate::error::{AttractorError, Result};

/// Validated parameter values for one attractor, in schema order
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedParameters {
    /// Catalog key of the definition these values were resolved for
    attractor: &'static str,
    names: Vec<&'static str>,
    values: Vec<f64>,
}

impl ResolvedParameters {
    /// Catalog key the values belong to
    pub fn attractor(&self) -> &'static str {
        self.attractor
    }

    /// Values in positional order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Value of a named parameter
    pub fn get(&self, name: &str) -> Option<f64> {
        self.names
            .iter()
            .position(|&n| n == name)
            .map(|i| self.values[i])
    }

    /// `(name, value)` pairs in schema order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.names.iter().copied().zip(self.values.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Name to value mapping
    pub fn to_map(&self) -> BTreeMap<String, f64> {
        self.iter().map(|(n, v)| (n.to_string(), v)).collect()
    }
}

/// Schema defaults of a definition as a name to value mapping
pub fn default_parameters(definition: &AttractorDefinition) -> BTreeMap<String, f64> {
    definition
        .params
        .iter()
        .map(|p| (p.name.to_string(), p.default))
        .collect()
}

/// Merge overrides with defaults and validate them
///
/// Overrides may come from any `(name, value)` source: an owned or
/// borrowed `HashMap<String, f64>`, or an array of `(&str, f64)` pairs.
/// When a name is given more than once the last value wins.
///
/// # Errors
/// * `UnknownParameter` if an override names a parameter outside the schema
/// * `ParameterRange` if an override lies strictly outside `[min, max]`
pub fn resolve<I, S, V>(definition: &AttractorDefinition, overrides: I) -> Result<ResolvedParameters>
where
    I: IntoIterator<Item = (S, V)>,
    S: AsRef<str>,
    V: Borrow<f64>,
{
    let mut values: Vec<f64> = definition.params.iter().map(|p| p.default).collect();

    for (name, value) in overrides {
        let name = name.as_ref();
        let value = *value.borrow();
        let index = definition
            .params
            .iter()
            .position(|p| p.name == name)
            .ok_or_else(|| AttractorError::UnknownParameter {
                attractor: definition.name.to_string(),
                parameter: name.to_string(),
            })?;

        check_range(&definition.params[index], value)?;
        values[index] = value;
    }

    Ok(ResolvedParameters {
        attractor: definition.name,
        names: definition.param_names().collect(),
        values,
    })
}

fn check_range(spec: &ParameterSpec, value: f64) -> Result<()> {
    if spec.contains(value) {
        Ok(())
    } else {
        Err(AttractorError::ParameterRange {
            parameter: spec.name.to_string(),
            value,
            min: spec.min,
            max: spec.max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::{dadras, lorenz, rossler};
    use std::collections::HashMap;

    const NONE: [(&str, f64); 0] = [];

    #[test]
    fn test_resolve_defaults() {
        let resolved = resolve(&lorenz::DEFINITION, NONE).unwrap();
        assert_eq!(resolved.attractor(), "Lorenz");
        assert_eq!(resolved.values(), &[10.0, 28.0, 2.67]);
        assert_eq!(resolved.get("rho"), Some(28.0));
    }

    #[test]
    fn test_resolve_keeps_schema_order() {
        // Overrides arrive in reverse order
        let resolved = resolve(&dadras::DEFINITION, [("e", 8.0), ("a", 2.5)]).unwrap();
        assert_eq!(resolved.values(), &[2.5, 2.7, 1.7, 2.0, 8.0]);
        let names: Vec<_> = resolved.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_resolve_idempotent_on_defaults() {
        let defaults = default_parameters(&rossler::DEFINITION);
        let explicit = resolve(&rossler::DEFINITION, &defaults).unwrap();
        let implicit = resolve(&rossler::DEFINITION, NONE).unwrap();
        assert_eq!(explicit, implicit);
    }

    #[test]
    fn test_resolve_bounds_accepted() {
        let resolved = resolve(&rossler::DEFINITION, [("c", 0.0), ("a", 1.0)]).unwrap();
        assert_eq!(resolved.get("c"), Some(0.0));
        assert_eq!(resolved.get("a"), Some(1.0));

        assert!(resolve(&rossler::DEFINITION, [("c", 20.0)]).is_ok());
    }

    #[test]
    fn test_resolve_out_of_range() {
        let overrides: HashMap<String, f64> = [("c".to_string(), 100.0)].into_iter().collect();
        match resolve(&rossler::DEFINITION, &overrides) {
            Err(AttractorError::ParameterRange { parameter, value, min, max }) => {
                assert_eq!(parameter, "c");
                assert_eq!(value, 100.0);
                assert_eq!((min, max), (0.0, 20.0));
            }
            other => panic!("expected ParameterRange, got {:?}", other),
        }

        assert!(resolve(&rossler::DEFINITION, [("c", -1e-9)]).is_err());
        assert!(resolve(&rossler::DEFINITION, [("c", f64::NAN)]).is_err());
    }

    #[test]
    fn test_resolve_unknown_name() {
        let err = resolve(&lorenz::DEFINITION, [("gamma", 1.0)]).unwrap_err();
        assert!(matches!(
            err,
            AttractorError::UnknownParameter { ref parameter, .. } if parameter == "gamma"
        ));
    }

    #[test]
    fn test_default_parameters_map() {
        let map = default_parameters(&lorenz::DEFINITION);
        assert_eq!(map.len(), 3);
        assert_eq!(map["sigma"], 10.0);
        assert_eq!(map["beta"], 2.67);
    }

    #[test]
    fn test_to_map_round_trip() {
        let resolved = resolve(&lorenz::DEFINITION, [("sigma", 12.0)]).unwrap();
        let again = resolve(&lorenz::DEFINITION, &resolved.to_map()).unwrap();
        assert_eq!(resolved, again);
    }
}
