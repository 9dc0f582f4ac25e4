//! Execution engine for the frequency-domain solvers.
//!
//! ## Purpose
//!
//! This module runs the transfer-function and quarter-wavelength solvers
//! over a frequency axis. It prepares the frequency-independent state once,
//! dispatches the per-frequency pass and assembles the result tables.
//!
//! ## Design notes
//!
//! * **Injectable passes**: Each executor accepts an optional pass function
//!   that replaces the sequential loop. Extension crates use it to schedule
//!   frequencies in parallel.
//! * **Failure isolation**: A singular frequency or a failed search marks its
//!   own entry with NaN and is counted; the other frequencies proceed.
//! * **Logging**: Failures are reported through `log::warn!`, summaries
//!   through `log::debug!`.
//!
//! ## Key concepts
//!
//! * **Depth selection**: Either explicit depths or every layer interface.
//! * **Frequency pass**: A function from the prepared system, the frequency
//!   axis and the resolved depths to one response per frequency.
//!
//! ## Invariants
//!
//! * A pass must return exactly one entry per frequency, in axis order.
//! * Inputs reaching the executor have already been validated.
//!
//! ## Non-goals
//!
//! * This module does not validate inputs (handled by `validator`).
//! * This module does not spawn threads itself.

// External dependencies
use num_complex::Complex;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::quarter_wavelength::{
    QwlModel, QwlPoint, SearchConfig, SearchStatus, qwl_pass_sequential,
};
use crate::algorithms::transfer::{
    DepthPoint, FrequencyResponse, LayerSystem, frequency_pass_sequential,
};
use crate::engine::output::{FrequencyStatus, QuarterWavelengthResult, TransferFunctionResult};
use crate::math::linalg::FloatLinalg;

// ============================================================================
// Type Definitions
// ============================================================================

/// Signature for custom transfer-function frequency pass
#[doc(hidden)]
pub type FrequencyPassFn<T> = fn(
    &LayerSystem<T>,  // prepared layer system
    &[T],             // frequencies
    &[DepthPoint<T>], // resolved depths
) -> Vec<FrequencyResponse<T>>;

/// Signature for custom quarter-wavelength frequency pass
#[doc(hidden)]
pub type QwlPassFn<T> = fn(
    &QwlModel<T>,     // prepared model
    &[T],             // frequencies
    &SearchConfig<T>, // search configuration
) -> Vec<QwlPoint<T>>;

/// Where the transfer function is evaluated.
#[derive(Debug, Clone, PartialEq)]
pub enum DepthSelection<T> {
    /// The top of every layer, free surface included.
    Interfaces,

    /// Explicit depths in meters.
    At(Vec<T>),
}

// ============================================================================
// Transfer Function
// ============================================================================

/// Configuration for transfer-function execution.
#[derive(Debug, Clone)]
pub struct TransferFunctionConfig<T> {
    /// Frequency axis in Hz.
    pub frequencies: Vec<T>,

    /// Evaluation depths.
    pub depths: DepthSelection<T>,

    /// Incidence angle from the vertical, in degrees.
    pub incidence_angle: T,

    /// Whether quality factors are applied.
    pub attenuation: bool,

    /// Custom frequency pass (for parallel execution).
    #[doc(hidden)]
    pub custom_frequency_pass: Option<FrequencyPassFn<T>>,

    /// Whether the custom pass may be used.
    #[doc(hidden)]
    pub parallel: bool,
}

impl<T: Float> Default for TransferFunctionConfig<T> {
    fn default() -> Self {
        Self {
            frequencies: Vec::new(),
            depths: DepthSelection::Interfaces,
            incidence_angle: T::zero(),
            attenuation: true,
            custom_frequency_pass: None,
            parallel: false,
        }
    }
}

/// Runs the Knopoff layer-matrix solver over a frequency axis.
#[derive(Debug, Clone)]
pub struct TransferFunctionExecutor<T> {
    config: TransferFunctionConfig<T>,
}

impl<T: FloatLinalg> TransferFunctionExecutor<T> {
    /// Create an executor from a configuration.
    pub fn from_config(config: TransferFunctionConfig<T>) -> Self {
        Self { config }
    }

    /// Configuration of this executor.
    pub fn config(&self) -> &TransferFunctionConfig<T> {
        &self.config
    }

    /// Compute the transfer function of validated profile columns.
    ///
    /// `quality` is ignored when attenuation is disabled.
    pub fn run(
        &self,
        thickness: &[T],
        vs: &[T],
        density: &[T],
        quality: Option<&[T]>,
    ) -> TransferFunctionResult<T> {
        let config = &self.config;
        let quality = if config.attenuation { quality } else { None };

        let system = LayerSystem::new(thickness, vs, density, quality, config.incidence_angle);
        let depths = match &config.depths {
            DepthSelection::Interfaces => system.interfaces().to_vec(),
            DepthSelection::At(depths) => depths.clone(),
        };
        let points = system.locate(&depths);

        log::debug!(
            "transfer function: {} layers, {} frequencies, {} depths, attenuation={}",
            system.layers(),
            config.frequencies.len(),
            depths.len(),
            quality.is_some()
        );

        let responses = match config.custom_frequency_pass {
            Some(pass) if config.parallel => pass(&system, &config.frequencies, &points),
            _ => frequency_pass_sequential(&system, &config.frequencies, &points),
        };

        assemble_transfer_function(&config.frequencies, depths, responses)
    }
}

/// Scatter per-frequency responses into the depth × frequency table.
fn assemble_transfer_function<T: Float>(
    frequencies: &[T],
    depths: Vec<T>,
    responses: Vec<FrequencyResponse<T>>,
) -> TransferFunctionResult<T> {
    let width = frequencies.len();
    let nan = Complex::new(T::nan(), T::nan());
    let mut values = vec![nan; depths.len() * width];
    let mut status = vec![FrequencyStatus::Singular; width];

    for (i, response) in responses.into_iter().enumerate().take(width) {
        match response {
            FrequencyResponse::Solved(column) => {
                for (d, value) in column.into_iter().enumerate() {
                    values[d * width + i] = value;
                }
                status[i] = FrequencyStatus::Solved;
            }
            FrequencyResponse::Singular => {
                log::warn!(
                    "layer matrix is singular at {} Hz; column marked undefined",
                    frequencies[i].to_f64().unwrap_or(f64::NAN)
                );
            }
        }
    }

    let result = TransferFunctionResult {
        frequencies: frequencies.to_vec(),
        depths,
        values,
        status,
    };

    let undefined = result.undefined_count();
    if undefined > 0 {
        log::warn!(
            "transfer function undefined at {} of {} frequencies",
            undefined,
            width
        );
    }

    result
}

// ============================================================================
// Quarter Wavelength
// ============================================================================

/// Configuration for quarter-wavelength execution.
#[derive(Debug, Clone)]
pub struct QuarterWavelengthConfig<T> {
    /// Frequency axis in Hz.
    pub frequencies: Vec<T>,

    /// Bounded search settings.
    pub search: SearchConfig<T>,

    /// Custom frequency pass (for parallel execution).
    #[doc(hidden)]
    pub custom_qwl_pass: Option<QwlPassFn<T>>,

    /// Whether the custom pass may be used.
    #[doc(hidden)]
    pub parallel: bool,
}

impl<T: Float> Default for QuarterWavelengthConfig<T> {
    fn default() -> Self {
        Self {
            frequencies: Vec::new(),
            search: SearchConfig::default(),
            custom_qwl_pass: None,
            parallel: false,
        }
    }
}

/// Runs the quarter-wavelength search over a frequency axis.
#[derive(Debug, Clone)]
pub struct QuarterWavelengthExecutor<T> {
    config: QuarterWavelengthConfig<T>,
}

impl<T: Float> QuarterWavelengthExecutor<T> {
    /// Create an executor from a configuration.
    pub fn from_config(config: QuarterWavelengthConfig<T>) -> Self {
        Self { config }
    }

    /// Configuration of this executor.
    pub fn config(&self) -> &QuarterWavelengthConfig<T> {
        &self.config
    }

    /// Solve the quarter-wavelength problem for validated profile columns.
    pub fn run(&self, thickness: &[T], vs: &[T], density: &[T]) -> QuarterWavelengthResult<T> {
        let config = &self.config;
        let model = QwlModel::new(thickness, vs, density);

        log::debug!(
            "quarter wavelength: {} layers, {} frequencies, method={:?}",
            thickness.len(),
            config.frequencies.len(),
            config.search.method
        );

        let points = match config.custom_qwl_pass {
            Some(pass) if config.parallel => pass(&model, &config.frequencies, &config.search),
            _ => qwl_pass_sequential(&model, &config.frequencies, &config.search),
        };

        assemble_quarter_wavelength(&config.frequencies, points)
    }
}

/// Split per-frequency points into result columns.
fn assemble_quarter_wavelength<T: Float>(
    frequencies: &[T],
    points: Vec<QwlPoint<T>>,
) -> QuarterWavelengthResult<T> {
    let n = frequencies.len();
    let mut result = QuarterWavelengthResult {
        frequencies: frequencies.to_vec(),
        depth: vec![T::nan(); n],
        velocity: vec![T::nan(); n],
        density: vec![T::nan(); n],
        residual: vec![T::nan(); n],
        status: vec![SearchStatus::NotConverged; n],
    };

    for (i, point) in points.into_iter().enumerate().take(n) {
        result.depth[i] = point.depth;
        result.velocity[i] = point.velocity;
        result.density[i] = point.density;
        result.residual[i] = point.residual;
        result.status[i] = point.status;

        match point.status {
            SearchStatus::Converged => {}
            SearchStatus::Unbounded => log::warn!(
                "no quarter-wavelength bracket at {} Hz",
                frequencies[i].to_f64().unwrap_or(f64::NAN)
            ),
            SearchStatus::NotConverged => log::warn!(
                "quarter-wavelength search did not converge at {} Hz (residual {})",
                frequencies[i].to_f64().unwrap_or(f64::NAN),
                point.residual.to_f64().unwrap_or(f64::NAN)
            ),
        }
    }

    log::debug!(
        "quarter wavelength undefined at {} of {} frequencies",
        result.undefined_count(),
        n
    );

    result
}
