//! Travel-time average velocity.
//!
//! ## Purpose
//!
//! This module computes the harmonic (slowness-averaged) shear velocity of a
//! layered column down to an arbitrary depth, e.g. the widespread Vs30.
//!
//! ## Design notes
//!
//! * Averaging is done in slowness through the depth-weighted kernel, then
//!   inverted back to velocity.
//!
//! ## Invariants
//!
//! * A homogeneous half-space returns its own velocity at any depth.
//!
//! ## Non-goals
//!
//! * This module does not validate inputs (handled by `validator`).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::average::depth_weighted_average;

/// Averaging depth of the Vs30 site proxy, in meters.
pub const VS30_DEPTH: f64 = 30.0;

/// Per-layer slowness `1/v`.
pub fn slowness<T: Float>(velocity: &[T]) -> Vec<T> {
    velocity.iter().map(|&v| v.recip()).collect()
}

/// Travel-time average velocity down to `depth`.
pub fn traveltime_average_velocity<T: Float>(thickness: &[T], velocity: &[T], depth: T) -> T {
    let mean_slowness = depth_weighted_average(thickness, &slowness(velocity), depth);
    mean_slowness.recip()
}
