//! Attractor Catalog: Static Registry of Named Systems
//!
//! The catalog is a read-only table built at compile time. Lookups hand
//! out `&'static` references, so any number of threads can share the
//! definitions without coordination.
//!
//! ## Built-in Entries
//!
//! | Key       | Parameters          | Window       |
//! |-----------|---------------------|--------------|
//! | `Lorenz`  | sigma, rho, beta    | t ∈ [0, 50]  |
//! | `Rossler` | a, b, c             | t ∈ [0, 100] |
//! | `Dadras`  | a, b, c, d, e       | t ∈ [0, 75]  |
//! | `Thomas`  | b                   | t ∈ [0, 500] |
//! | `Aizawa`  | a, b, c, d, e, f    | t ∈ [0, 100] |

mod definition;

pub use definition::{AttractorDefinition, ParameterSpec, TimeDomain};

use crate::error::{AttractorError, Result};
use crate::systems::{aizawa, dadras, lorenz, rossler, thomas};

static CATALOG: [AttractorDefinition; 5] = [
    lorenz::DEFINITION,
    rossler::DEFINITION,
    dadras::DEFINITION,
    thomas::DEFINITION,
    aizawa::DEFINITION,
];

/// Catalog keys in registration order
pub fn list_names() -> Vec<&'static str> {
    CATALOG.iter().map(|def| def.name).collect()
}

/// All built-in definitions in registration order
pub fn definitions() -> impl Iterator<Item = &'static AttractorDefinition> {
    CATALOG.iter()
}

/// Look up a definition by its exact catalog key
pub fn get_definition(name: &str) -> Result<&'static AttractorDefinition> {
    CATALOG
        .iter()
        .find(|def| def.name == name)
        .ok_or_else(|| AttractorError::UnknownAttractor {
            name: name.to_string(),
        })
}
