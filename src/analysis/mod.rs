//! Analysis Module: Presentation Transforms of a Trajectory
//!
//! Two derived views for downstream visualization:
//!
//! - **Density**: Gaussian kernel density over the (x, y) projection,
//!   one value per sample, for color mapping
//! - **Frames**: A bounded sequence of growing prefixes for animation
//!
//! Both borrow the trajectory read-only and never modify it.

mod density;
mod frames;

pub use density::{
    estimate_density,
    estimate_density_with_rng,
    DensityField,
    GaussianKde,
    DEFAULT_DENSITY_SAMPLE_SIZE,
};
pub use frames::{make_frames, AnimationFrameSet, DEFAULT_MAX_FRAMES};
