//! Integration Module: Adaptive ODE Solving of Catalog Entries
//!
//! - `dopri.rs`: Dormand-Prince 5(4) embedded Runge-Kutta solver with
//!   local error control and a bounded step budget
//! - `trajectory.rs`: The sampled solution, stored as an (n, 3) matrix
//! - `simulate.rs`: Glue from definition and parameters to trajectory
//!
//! ## Contract
//!
//! For a definition with time domain `[t_min, t_max]` and `n` samples the
//! trajectory has exactly `n` rows, row 0 is the initial state, and the
//! result depends only on the inputs: repeated calls are bit-identical.
//! Solver failures (step budget, step underflow, non-finite values)
//! surface as errors and never as a truncated trajectory.

mod dopri;
mod simulate;
mod trajectory;

pub use dopri::{Dopri5, IntegrationError, SolverConfig, SolverStats, DIVERGENCE_LIMIT};
pub use simulate::{integrate, integrate_with, integrate_with_stats, simulate, simulate_with};
pub use trajectory::Trajectory;
