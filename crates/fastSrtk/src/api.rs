//! High-level API for site-response analysis with parallel execution support.
//!
//! ## Purpose
//!
//! This module provides the user-facing builders of `fastSrtk`. They wrap
//! the `srtk` builders, default to parallel execution and accept ndarray
//! columns in addition to slices and vectors.
//!
//! ## Design notes
//!
//! * **Fluent Integration**: Re-uses the base `srtk` builder pattern; every
//!   setter delegates to the wrapped builder.
//! * **Parallel-First**: Defaults to parallel execution across frequencies.
//! * **Centralized validation**: `build()` validates through the base builder.
//!
//! ## Key concepts
//!
//! * **Parallel Support**: Uses `rayon` when the `cpu` feature is enabled.
//! * **Feature-Gated**: Without `cpu`, the solvers fall back to the
//!   sequential passes of `srtk`.
//!
//! ### Configuration Flow
//!
//! 1. Create a builder via `TransferFunction::new()` or `QuarterWavelength::new()`.
//! 2. Chain configuration methods (`.frequencies()`, `.depths()`, etc.).
//! 3. Call `.build()?` and then `.compute(&profile)?` or `.compute_columns(...)?`.

// Feature-gated imports
#[cfg(feature = "cpu")]
use crate::engine::executor::{frequency_pass_parallel, qwl_pass_parallel};

// External dependencies
use num_traits::Float;

// Export dependencies from srtk crate
use srtk::internals::api::{QuarterWavelengthBuilder, TransferFunctionBuilder};
use srtk::internals::math::linalg::FloatLinalg;

// Internal dependencies
use crate::input::SrtkInput;

// Publicly re-exported types
pub use crate::engine::output::{QuarterWavelengthArrays, TransferFunctionArrays};
pub use srtk::internals::api::{
    DepthSelection, Distribution, FrequencyStatus, Layer, LayerKey, QuarterWavelengthResult,
    Quantity, SearchMethod, SearchStatus, SoilProfile, SrtkError, TransferFunctionResult,
    depth_weighted_average, impedance_amplification, interface_depths, site_kappa,
    traveltime_average_velocity, vs30,
};

// ============================================================================
// Parallel Transfer Function Builder
// ============================================================================

/// Builder for the SH-wave transfer function solver with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelTransferFunctionBuilder<T> {
    /// Base builder from the srtk crate
    pub base: TransferFunctionBuilder<T>,
}

impl<T: FloatLinalg> Default for ParallelTransferFunctionBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatLinalg> ParallelTransferFunctionBuilder<T> {
    /// Create a new builder with default parameters.
    ///
    /// # Defaults
    ///
    /// * All base parameters from srtk `TransferFunctionBuilder`
    /// * parallel: true (fastSrtk extension)
    pub fn new() -> Self {
        let base = TransferFunctionBuilder::new().parallel(true);
        Self { base }
    }

    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.base = self.base.parallel(parallel);
        self
    }

    /// Set the frequency axis (Hz, strictly increasing).
    pub fn frequencies(mut self, frequencies: &[T]) -> Self {
        self.base = self.base.frequencies(frequencies);
        self
    }

    /// Evaluate at a single frequency.
    pub fn frequency(mut self, frequency: T) -> Self {
        self.base = self.base.frequency(frequency);
        self
    }

    /// Evaluate at a single depth; a negative depth selects every interface.
    pub fn depth(mut self, depth: T) -> Self {
        self.base = self.base.depth(depth);
        self
    }

    /// Evaluate at explicit depths (m, non-negative).
    pub fn depths(mut self, depths: &[T]) -> Self {
        self.base = self.base.depths(depths);
        self
    }

    /// Evaluate at the top of every layer, free surface included.
    pub fn interfaces(mut self) -> Self {
        self.base = self.base.interfaces();
        self
    }

    /// Set the incidence angle from the vertical, in degrees `[0, 90)`.
    pub fn incidence_angle(mut self, degrees: T) -> Self {
        self.base = self.base.incidence_angle(degrees);
        self
    }

    /// Enable or disable anelastic attenuation.
    pub fn attenuation(mut self, enabled: bool) -> Self {
        self.base = self.base.attenuation(enabled);
        self
    }

    /// Build the solver.
    pub fn build(self) -> Result<ParallelTransferFunction<T>, SrtkError> {
        let mut builder = self.base;

        #[cfg(feature = "cpu")]
        {
            if builder.parallel.unwrap_or(true) {
                builder = builder.custom_frequency_pass(frequency_pass_parallel);
            } else {
                builder.custom_frequency_pass = None;
            }
        }
        #[cfg(not(feature = "cpu"))]
        {
            // Fallback to sequential if cpu feature is disabled
            builder.custom_frequency_pass = None;
        }

        // Validation is centralized in the srtk builder
        let solver = builder.build()?;
        Ok(ParallelTransferFunction { solver })
    }
}

/// SH-wave transfer function solver with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelTransferFunction<T> {
    solver: srtk::internals::api::TransferFunctionSolver<T>,
}

impl<T: FloatLinalg> ParallelTransferFunction<T> {
    /// Whether the parallel frequency pass is active.
    pub fn is_parallel(&self) -> bool {
        let config = self.solver.config();
        config.parallel && config.custom_frequency_pass.is_some()
    }

    /// Compute the transfer function of a profile.
    pub fn compute(&self, profile: &SoilProfile<T>) -> Result<TransferFunctionResult<T>, SrtkError> {
        self.solver.compute(profile)
    }

    /// Compute the transfer function of profile columns.
    pub fn compute_columns<I>(
        &self,
        thickness: &I,
        vs: &I,
        density: &I,
        qs: Option<&I>,
    ) -> Result<TransferFunctionResult<T>, SrtkError>
    where
        I: SrtkInput<T> + ?Sized,
    {
        let qs = match qs {
            Some(column) => Some(column.as_column("qs")?),
            None => None,
        };
        self.solver.compute_columns(
            thickness.as_column("hl")?,
            vs.as_column("vs")?,
            density.as_column("dn")?,
            qs,
        )
    }
}

// ============================================================================
// Parallel Quarter-Wavelength Builder
// ============================================================================

/// Builder for the quarter-wavelength solver with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelQuarterWavelengthBuilder<T> {
    /// Base builder from the srtk crate
    pub base: QuarterWavelengthBuilder<T>,
}

impl<T: Float + Send + Sync> Default for ParallelQuarterWavelengthBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float + Send + Sync> ParallelQuarterWavelengthBuilder<T> {
    /// Create a new builder with default parameters.
    ///
    /// # Defaults
    ///
    /// * All base parameters from srtk `QuarterWavelengthBuilder`
    /// * parallel: true (fastSrtk extension)
    pub fn new() -> Self {
        let base = QuarterWavelengthBuilder::new().parallel(true);
        Self { base }
    }

    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.base = self.base.parallel(parallel);
        self
    }

    /// Set the frequency axis (Hz, strictly increasing).
    pub fn frequencies(mut self, frequencies: &[T]) -> Self {
        self.base = self.base.frequencies(frequencies);
        self
    }

    /// Solve at a single frequency.
    pub fn frequency(mut self, frequency: T) -> Self {
        self.base = self.base.frequency(frequency);
        self
    }

    /// Set the bounded search strategy.
    pub fn search_method(mut self, method: SearchMethod) -> Self {
        self.base = self.base.search_method(method);
        self
    }

    /// Set the largest accepted residual.
    pub fn tolerance(mut self, tolerance: T) -> Self {
        self.base = self.base.tolerance(tolerance);
        self
    }

    /// Set the iteration budget per frequency.
    pub fn max_iterations(mut self, iterations: usize) -> Self {
        self.base = self.base.max_iterations(iterations);
        self
    }

    /// Build the solver.
    pub fn build(self) -> Result<ParallelQuarterWavelength<T>, SrtkError> {
        let mut builder = self.base;

        #[cfg(feature = "cpu")]
        {
            if builder.parallel.unwrap_or(true) {
                builder = builder.custom_qwl_pass(qwl_pass_parallel);
            } else {
                builder.custom_qwl_pass = None;
            }
        }
        #[cfg(not(feature = "cpu"))]
        {
            // Fallback to sequential if cpu feature is disabled
            builder.custom_qwl_pass = None;
        }

        let solver = builder.build()?;
        Ok(ParallelQuarterWavelength { solver })
    }
}

/// Quarter-wavelength solver with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelQuarterWavelength<T> {
    solver: srtk::internals::api::QuarterWavelengthSolver<T>,
}

impl<T: Float + Send + Sync> ParallelQuarterWavelength<T> {
    /// Whether the parallel frequency pass is active.
    pub fn is_parallel(&self) -> bool {
        let config = self.solver.config();
        config.parallel && config.custom_qwl_pass.is_some()
    }

    /// Solve the quarter-wavelength problem for a profile.
    pub fn compute(
        &self,
        profile: &SoilProfile<T>,
    ) -> Result<QuarterWavelengthResult<T>, SrtkError> {
        self.solver.compute(profile)
    }

    /// Solve the quarter-wavelength problem for profile columns.
    pub fn compute_columns<I>(
        &self,
        thickness: &I,
        vs: &I,
        density: &I,
    ) -> Result<QuarterWavelengthResult<T>, SrtkError>
    where
        I: SrtkInput<T> + ?Sized,
    {
        self.solver.compute_columns(
            thickness.as_column("hl")?,
            vs.as_column("vs")?,
            density.as_column("dn")?,
        )
    }
}
