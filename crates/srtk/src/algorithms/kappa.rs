//! Site attenuation parameter kappa(0).
//!
//! ## Purpose
//!
//! This module derives the high-frequency attenuation parameter of a site
//! from per-layer shear velocity and quality factor.
//!
//! ## Design notes
//!
//! * The per-layer term is `depth / (v · Q)` and the same `depth` bounds the
//!   average. The double use reproduces the reference definition; do not
//!   fold it into a plain travel-time sum.
//!
//! ## Non-goals
//!
//! * This module does not validate inputs (handled by `validator`).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::average::depth_weighted_average;

/// Per-layer kappa contribution `depth / (v · Q)`, in seconds.
pub fn layer_kappa<T: Float>(velocity: &[T], quality: &[T], depth: T) -> Vec<T> {
    velocity
        .iter()
        .zip(quality)
        .map(|(&v, &q)| depth / (v * q))
        .collect()
}

/// Site kappa(0) averaged down to `depth`.
pub fn site_kappa<T: Float>(thickness: &[T], velocity: &[T], quality: &[T], depth: T) -> T {
    depth_weighted_average(thickness, &layer_kappa(velocity, quality, depth), depth)
}
