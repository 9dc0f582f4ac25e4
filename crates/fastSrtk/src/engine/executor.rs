//! Parallel execution engine for the frequency-domain solvers.
//!
//! ## Purpose
//!
//! This module provides the parallel frequency passes injected into the
//! `srtk` executors. Every frequency of a transfer function or a
//! quarter-wavelength search is independent, so the axis is distributed
//! across CPU cores.
//!
//! ## Design notes
//!
//! * **Implementation**: Drop-in replacements for the sequential passes.
//! * **Parallelism**: Uses `rayon` for data-parallel execution across CPU cores.
//! * **Determinism**: Results are collected in axis order and are identical
//!   to the sequential passes.
//!
//! ## Key concepts
//!
//! * **Shared state**: The prepared layer system (or quarter-wavelength
//!   model) is built once and borrowed by every worker.
//! * **Integration**: Plugs into the `srtk` executors via the
//!   `FrequencyPassFn` and `QwlPassFn` hooks.
//!
//! ## Invariants
//!
//! * One output entry per frequency, in axis order.
//!
//! ## Non-goals
//!
//! * This module does not validate inputs (handled by `srtk::validator`).
//! * This module does not assemble result tables (handled by `srtk::executor`).

// Feature-gated imports
#[cfg(feature = "cpu")]
use rayon::prelude::*;

// External dependencies
#[cfg(feature = "cpu")]
use num_traits::Float;

// Export dependencies from srtk crate
#[cfg(feature = "cpu")]
use srtk::internals::algorithms::quarter_wavelength::{QwlModel, QwlPoint, SearchConfig};
#[cfg(feature = "cpu")]
use srtk::internals::algorithms::transfer::{DepthPoint, FrequencyResponse, LayerSystem};
#[cfg(feature = "cpu")]
use srtk::internals::math::linalg::FloatLinalg;

// ============================================================================
// Parallel Frequency Passes
// ============================================================================

/// Solve the layer system at every frequency in parallel.
#[cfg(feature = "cpu")]
pub fn frequency_pass_parallel<T: FloatLinalg>(
    system: &LayerSystem<T>,
    frequencies: &[T],
    points: &[DepthPoint<T>],
) -> Vec<FrequencyResponse<T>> {
    frequencies
        .par_iter()
        .map(|&f| system.solve_frequency(f, points))
        .collect()
}

/// Run the quarter-wavelength search at every frequency in parallel.
#[cfg(feature = "cpu")]
pub fn qwl_pass_parallel<T>(
    model: &QwlModel<T>,
    frequencies: &[T],
    config: &SearchConfig<T>,
) -> Vec<QwlPoint<T>>
where
    T: Float + Send + Sync,
{
    frequencies
        .par_iter()
        .map(|&f| model.solve(f, config))
        .collect()
}
