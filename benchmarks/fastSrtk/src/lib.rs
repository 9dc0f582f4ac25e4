//! Reproducible synthetic soil profiles for benchmarking.
//!
//! Profiles follow a velocity gradient with log-normal scatter, so every
//! generated column is strictly positive and the last layer is a
//! half-space.

#![allow(non_snake_case)]

use rand::prelude::*;
use rand_distr::{LogNormal, Uniform};

/// Profile columns: thickness, vs, density, qs.
pub type Columns = (Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>);

/// Generate a layered profile over a half-space.
///
/// Layer thicknesses are uniform in `[1, 10)` m; shear velocity grows with
/// the square root of depth and is scattered by a log-normal factor.
pub fn generate_profile(layers: usize, seed: u64) -> Columns {
    let mut rng = StdRng::seed_from_u64(seed);
    let thickness_dist = Uniform::new(1.0, 10.0).unwrap();
    let scatter = LogNormal::new(0.0, 0.15).unwrap();

    let mut thickness = Vec::with_capacity(layers + 1);
    let mut vs = Vec::with_capacity(layers + 1);
    let mut depth: f64 = 0.0;

    for _ in 0..layers {
        let h = thickness_dist.sample(&mut rng);
        let mid = depth + 0.5 * h;
        thickness.push(h);
        vs.push((150.0 + 60.0 * mid.sqrt()) * scatter.sample(&mut rng));
        depth += h;
    }

    // Half-space stiffer than anything above it
    let max_vs = vs.iter().cloned().fold(0.0, f64::max);
    thickness.push(0.0);
    vs.push(max_vs.max(800.0) * 1.5);

    let density = vs.iter().map(|&v| 1600.0 + 0.3 * v.min(3000.0)).collect();
    let qs = vs.iter().map(|&v| (v / 10.0).max(5.0)).collect();

    (thickness, vs, density, qs)
}

/// Linear frequency axis from `f_min` to `f_max` Hz.
pub fn frequency_axis(n: usize, f_min: f64, f_max: f64) -> Vec<f64> {
    if n < 2 {
        return vec![f_min];
    }
    let step = (f_max - f_min) / (n - 1) as f64;
    (0..n).map(|i| f_min + step * i as f64).collect()
}

/// Logarithmic frequency axis from `f_min` to `f_max` Hz.
pub fn log_frequency_axis(n: usize, f_min: f64, f_max: f64) -> Vec<f64> {
    if n < 2 {
        return vec![f_min];
    }
    let ratio = (f_max / f_min).ln() / (n - 1) as f64;
    (0..n).map(|i| f_min * (ratio * i as f64).exp()).collect()
}
