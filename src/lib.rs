//! # Strange Attractors
//!
//! Simulation engine for classic low-dimensional chaotic flows, producing
//! time-ordered trajectory data for visualization.
//!
//! ## Pipeline
//!
//! ```text
//! name ──► catalog ──► definition ──┐
//!                                   ├──► resolve ──► integrate ──► Trajectory
//! overrides ────────────────────────┘                                  │
//!                                          ┌───────────────────────────┤
//!                                          ▼                           ▼
//!                                   estimate_density              make_frames
//! ```
//!
//! 1. **Catalog**: Static registry of named systems (Lorenz, Rössler,
//!    Dadras, Thomas, Aizawa), each with a parameter schema, initial state
//!    and time window
//!
//! 2. **Parameters**: Overrides are merged with schema defaults and
//!    checked against inclusive bounds
//!
//! 3. **Integration**: Dormand-Prince 5(4) adaptive solver sampled on a
//!    uniform grid
//!
//! 4. **Analysis**: Kernel density for color mapping, prefix frames for
//!    animation
//!
//! Every stage is a pure function of its inputs. The catalog is read-only
//! and all results are owned by the caller, so independent simulations can
//! run on separate threads without coordination.
//!
//! ## Example
//!
//! ```no_run
//! use strange_attractors::{get_definition, make_frames, simulate, estimate_density};
//!
//! let lorenz = get_definition("Lorenz")?;
//! let trajectory = simulate(lorenz, [("rho", 24.5)])?;
//! let density = estimate_density(&trajectory, 1000)?;
//! let frames = make_frames(&trajectory, 300);
//!
//! assert_eq!(density.len(), trajectory.len());
//! assert!(frames.len() <= 300);
//! # Ok::<(), strange_attractors::AttractorError>(())
//! ```

pub mod analysis;
pub mod catalog;
pub mod error;
pub mod integrate;
pub mod parameters;
pub mod systems;

// Re-exports from catalog
pub use catalog::{
    definitions,
    get_definition,
    list_names,
    AttractorDefinition,
    ParameterSpec,
    TimeDomain,
};

// Re-exports from parameters
pub use parameters::{default_parameters, resolve, ResolvedParameters};

// Re-exports from integrate
pub use integrate::{
    integrate,
    integrate_with,
    integrate_with_stats,
    simulate,
    simulate_with,
    Dopri5,
    IntegrationError,
    SolverConfig,
    SolverStats,
    Trajectory,
};

// Re-exports from analysis
pub use analysis::{
    estimate_density,
    estimate_density_with_rng,
    make_frames,
    AnimationFrameSet,
    DensityField,
    GaussianKde,
    DEFAULT_DENSITY_SAMPLE_SIZE,
    DEFAULT_MAX_FRAMES,
};

// Re-exports from systems
pub use systems::{AttractorKind, BoundAttractor, VectorField};

pub use error::{AttractorError, Result};
