//! Quarter-wavelength averaging.
//!
//! ## Purpose
//!
//! This module solves the quarter-wavelength problem (Boore, 2003): for each
//! frequency, find the depth whose travel-time average velocity makes that
//! depth exactly a quarter of the wavelength, then report the average
//! velocity and density down to it.
//!
//! ## Design notes
//!
//! * **Bracket**: The search runs on `(0, z_max]` with
//!   `z_max = max_l v_l / (4f)`. The signed misfit is negative near zero and
//!   non-negative at `z_max`, so a root always lies in the bracket.
//! * **Per-frequency isolation**: Every frequency is solved independently;
//!   a failed search only marks its own entry.
//!
//! ## Key concepts
//!
//! * **Misfit**: `z − 1 / (4f · s_avg(z))`, with `s_avg` the depth-weighted
//!   slowness.
//! * **Status**: `Converged`, `Unbounded` (no valid bracket, e.g. `f = 0`)
//!   or `NotConverged` (residual above tolerance).
//!
//! ## Invariants
//!
//! * A converged depth satisfies `|z − v_avg(z) / (4f)| <= tolerance`, where
//!   the tolerance never drops below the rounding floor `(L + 16)·ε·z_max`.
//! * Undefined entries are NaN in depth, velocity and density.
//!
//! ## Non-goals
//!
//! * This module does not validate inputs (handled by `validator`).
//! * This module does not schedule frequencies in parallel (see `fastSrtk`).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::velocity::slowness;
use crate::math::average::depth_weighted_average;
use crate::math::search::{SearchMethod, bisect, golden_section};

// ============================================================================
// Search Configuration
// ============================================================================

/// Default iteration budget of the bounded search.
pub const DEFAULT_MAX_ITERATIONS: usize = 200;

/// Configuration of the per-frequency bounded search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig<T> {
    /// Search strategy.
    pub method: SearchMethod,

    /// Largest accepted residual, in meters (raised to the rounding floor).
    pub tolerance: T,

    /// Maximum number of objective evaluations per frequency.
    pub max_iterations: usize,
}

impl<T: Float> Default for SearchConfig<T> {
    fn default() -> Self {
        Self {
            method: SearchMethod::default(),
            tolerance: default_tolerance(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// Extra rounded operations in the misfit beyond one per layer.
const RESOLUTION_MARGIN: usize = 16;

/// Default residual tolerance: about 1.5e-9 m in f64, 3.5e-5 m in f32.
pub fn default_tolerance<T: Float>() -> T {
    T::epsilon().sqrt() * T::from(0.1).unwrap_or_else(T::one)
}

// ============================================================================
// Per-Frequency Output
// ============================================================================

/// Outcome of the quarter-wavelength search at one frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// The residual is within tolerance.
    Converged,

    /// No valid bracket exists (zero, negative or non-finite frequency).
    Unbounded,

    /// The search ended with a residual above tolerance.
    NotConverged,
}

/// Quarter-wavelength solution at one frequency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QwlPoint<T> {
    /// Quarter-wavelength depth in meters.
    pub depth: T,

    /// Travel-time average velocity down to `depth`.
    pub velocity: T,

    /// Depth-weighted average density down to `depth`.
    pub density: T,

    /// Absolute misfit at `depth` (NaN when unbounded).
    pub residual: T,

    /// Search outcome.
    pub status: SearchStatus,
}

impl<T: Float> QwlPoint<T> {
    fn undefined(status: SearchStatus, residual: T) -> Self {
        Self {
            depth: T::nan(),
            velocity: T::nan(),
            density: T::nan(),
            residual,
            status,
        }
    }

    /// Whether this entry holds a usable value.
    pub fn is_defined(&self) -> bool {
        self.status == SearchStatus::Converged
    }
}

// ============================================================================
// Quarter-Wavelength Model
// ============================================================================

/// Profile data prepared for repeated quarter-wavelength searches.
#[derive(Debug, Clone, PartialEq)]
pub struct QwlModel<T> {
    thickness: Vec<T>,
    slowness: Vec<T>,
    density: Vec<T>,
}

impl<T: Float> QwlModel<T> {
    /// Prepare a model from validated per-layer columns.
    pub fn new(thickness: &[T], velocity: &[T], density: &[T]) -> Self {
        Self {
            thickness: thickness.to_vec(),
            slowness: slowness(velocity),
            density: density.to_vec(),
        }
    }

    /// Upper bound of the search: the largest single-layer quarter wavelength.
    pub fn upper_bound(&self, frequency: T) -> T {
        let four_f = T::from(4.0).unwrap_or_else(T::nan) * frequency;
        self.slowness
            .iter()
            .map(|&s| (four_f * s).recip())
            .fold(T::neg_infinity(), T::max)
    }

    /// Smallest residual resolvable near `upper` in the working precision.
    ///
    /// Grows with the layer count, since every layer adds a rounded term to
    /// the slowness average.
    pub fn resolution(&self, upper: T) -> T {
        let terms = T::from(self.thickness.len() + RESOLUTION_MARGIN).unwrap_or_else(T::one);
        T::epsilon() * upper * terms
    }

    /// Signed misfit `z − 1 / (4f · s_avg(z))` at depth `z > 0`.
    pub fn misfit(&self, depth: T, frequency: T) -> T {
        let four_f = T::from(4.0).unwrap_or_else(T::nan) * frequency;
        let mean_slowness = depth_weighted_average(&self.thickness, &self.slowness, depth);
        depth - (four_f * mean_slowness).recip()
    }

    /// Solve the quarter-wavelength problem at one frequency.
    pub fn solve(&self, frequency: T, config: &SearchConfig<T>) -> QwlPoint<T> {
        if !frequency.is_finite() || frequency <= T::zero() {
            return QwlPoint::undefined(SearchStatus::Unbounded, T::nan());
        }

        let upper = self.upper_bound(frequency);
        if !upper.is_finite() || upper <= T::zero() {
            return QwlPoint::undefined(SearchStatus::Unbounded, T::nan());
        }

        // Accept residuals at the rounding floor of the working precision
        let tolerance = config.tolerance.max(self.resolution(upper));
        let objective = |z: T| self.misfit(z, frequency);
        let outcome = match config.method {
            SearchMethod::Bisection => bisect(
                objective,
                T::zero(),
                upper,
                tolerance,
                config.max_iterations,
            ),
            SearchMethod::GoldenSection => golden_section(
                objective,
                T::zero(),
                upper,
                T::epsilon() * upper,
                tolerance,
                config.max_iterations,
            ),
        };

        if outcome.residual.is_nan() || outcome.residual > tolerance {
            return QwlPoint::undefined(SearchStatus::NotConverged, outcome.residual);
        }

        let depth = outcome.x;
        QwlPoint {
            depth,
            velocity: depth_weighted_average(&self.thickness, &self.slowness, depth).recip(),
            density: depth_weighted_average(&self.thickness, &self.density, depth),
            residual: outcome.residual,
            status: SearchStatus::Converged,
        }
    }
}

// ============================================================================
// Sequential Pass
// ============================================================================

/// Solve every frequency in order on the current thread.
pub fn qwl_pass_sequential<T: Float>(
    model: &QwlModel<T>,
    frequencies: &[T],
    config: &SearchConfig<T>,
) -> Vec<QwlPoint<T>> {
    frequencies.iter().map(|&f| model.solve(f, config)).collect()
}
