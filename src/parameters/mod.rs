//! Parameters Module: Validation and Defaulting of Overrides
//!
//! Callers express a simulation request as a sparse set of overrides on
//! top of a definition's schema. Resolution produces a dense, ordered
//! [`ResolvedParameters`] ready for positional binding.

mod resolver;

pub use resolver::{default_parameters, resolve, ResolvedParameters};
