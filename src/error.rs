//! Error types for the attractor engine.

use thiserror::Error;

use crate::integrate::IntegrationError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum AttractorError {
    #[error("unknown attractor: {name}")]
    UnknownAttractor { name: String },

    #[error("attractor {attractor} has no parameter named {parameter}")]
    UnknownParameter { attractor: String, parameter: String },

    #[error("parameter {parameter} = {value} is outside [{min}, {max}]")]
    ParameterRange {
        parameter: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("parameters were resolved for {found}, not {expected}")]
    MismatchedParameters { expected: String, found: String },

    #[error("invalid attractor definition {name}: {reason}")]
    InvalidDefinition { name: String, reason: String },

    #[error("integration failed: {0}")]
    Integration(#[from] IntegrationError),

    #[error("degenerate trajectory: {0}")]
    DegenerateTrajectory(String),
}

pub type Result<T> = std::result::Result<T, AttractorError>;
