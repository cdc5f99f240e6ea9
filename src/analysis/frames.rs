//! Animation Frames: Bounded Sequence of Growing Prefixes
//!
//! An animation draws the trajectory progressively. Frame k shows the
//! first `k · step` samples, so every frame strictly extends the one
//! before it. The step is chosen so that no more than `max_frames`
//! frames are produced, and the final frame always shows the whole
//! trajectory.

use ndarray::ArrayView2;

use crate::integrate::Trajectory;

/// Default upper bound on the number of frames
pub const DEFAULT_MAX_FRAMES: usize = 300;

/// Prefix lengths over a borrowed trajectory
#[derive(Debug, Clone)]
pub struct AnimationFrameSet<'a> {
    trajectory: &'a Trajectory,
    /// Samples between consecutive frames
    step: usize,
    /// Strictly increasing prefix lengths; the last equals the trajectory length
    lengths: Vec<usize>,
}

impl<'a> AnimationFrameSet<'a> {
    /// Number of frames
    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }

    pub fn step(&self) -> usize {
        self.step
    }

    /// Sample count of each frame
    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    /// States of frame `i`, shape (len, 3)
    pub fn frame(&self, i: usize) -> Option<ArrayView2<'a, f64>> {
        let trajectory = self.trajectory;
        self.lengths.get(i).map(|&k| trajectory.prefix(k))
    }

    /// Frames in playback order
    pub fn iter(&self) -> impl Iterator<Item = ArrayView2<'a, f64>> + '_ {
        let trajectory = self.trajectory;
        self.lengths.iter().map(move |&k| trajectory.prefix(k))
    }
}

/// Downsample a trajectory into at most `max_frames` growing prefixes
///
/// `max_frames == 0` is treated as 1. An empty trajectory has no frames.
pub fn make_frames(trajectory: &Trajectory, max_frames: usize) -> AnimationFrameSet<'_> {
    let n = trajectory.len();
    let max_frames = max_frames.max(1);
    let step = n.div_ceil(max_frames).max(1);

    let mut lengths: Vec<usize> = (1..=n / step).map(|k| k * step).collect();
    if n % step != 0 {
        lengths.push(n);
    }

    AnimationFrameSet {
        trajectory,
        step,
        lengths,
    }
}
