//! High-level API for site-response analysis.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: fluent builders for
//! the two frequency-domain solvers and checked free functions for the
//! scalar site proxies (average velocity, Vs30, kappa, impedance
//! amplification).
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builders with sensible defaults for all parameters.
//! * **Validated**: Configuration is validated at `build()`, profile data at
//!   `compute()`. Nothing is computed on malformed input.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! * **Configuration Flow**: `TransferFunction::new()` → setters →
//!   `.build()?` → `.compute(&profile)?`.
//! * **Column entry points**: Every solver also accepts raw columns, so
//!   callers holding arrays need not build a `SoilProfile`.
//! * **Undefined entries**: Per-frequency failures are reported in the
//!   result, never as errors.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::impedance::impedance_amplification_array;
use crate::algorithms::kappa;
use crate::algorithms::quarter_wavelength::{DEFAULT_MAX_ITERATIONS, SearchConfig, default_tolerance};
use crate::algorithms::velocity::{self, VS30_DEPTH};
use crate::engine::executor::{
    FrequencyPassFn, QuarterWavelengthConfig, QuarterWavelengthExecutor, QwlPassFn,
    TransferFunctionConfig, TransferFunctionExecutor,
};
use crate::engine::validator::Validator;
use crate::math::average;
use crate::math::linalg::FloatLinalg;

// Publicly re-exported types
pub use crate::algorithms::quarter_wavelength::SearchStatus;
pub use crate::engine::executor::DepthSelection;
pub use crate::engine::output::{FrequencyStatus, QuarterWavelengthResult, TransferFunctionResult};
pub use crate::evaluation::quantity::{Distribution, Quantity};
pub use crate::math::search::SearchMethod;
pub use crate::primitives::errors::SrtkError;
pub use crate::primitives::profile::{Layer, LayerKey, SoilProfile};

// ============================================================================
// Transfer Function Builder
// ============================================================================

/// Fluent builder for the SH-wave transfer function solver.
#[derive(Debug, Clone)]
pub struct TransferFunctionBuilder<T> {
    /// Frequency axis in Hz.
    pub frequencies: Option<Vec<T>>,

    /// Evaluation depths.
    pub depths: Option<DepthSelection<T>>,

    /// Incidence angle from the vertical, in degrees.
    pub incidence_angle: Option<T>,

    /// Whether shear quality factors are applied.
    pub attenuation: Option<bool>,

    /// Custom frequency pass function.
    #[doc(hidden)]
    pub custom_frequency_pass: Option<FrequencyPassFn<T>>,

    /// Parallel execution hint.
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: FloatLinalg> Default for TransferFunctionBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatLinalg> TransferFunctionBuilder<T> {
    /// Create a new builder with default settings.
    ///
    /// Defaults: vertical incidence, every layer interface, attenuation on
    /// (when the profile carries quality factors).
    pub fn new() -> Self {
        Self {
            frequencies: None,
            depths: None,
            incidence_angle: None,
            attenuation: None,
            custom_frequency_pass: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    /// Set the frequency axis (Hz, strictly increasing).
    pub fn frequencies(mut self, frequencies: &[T]) -> Self {
        if self.frequencies.is_some() {
            self.duplicate_param = Some("frequencies");
        }
        self.frequencies = Some(frequencies.to_vec());
        self
    }

    /// Evaluate at a single frequency.
    pub fn frequency(self, frequency: T) -> Self {
        self.frequencies(&[frequency])
    }

    /// Evaluate at a single depth.
    ///
    /// A negative depth selects every layer interface.
    pub fn depth(self, depth: T) -> Self {
        if depth < T::zero() {
            self.interfaces()
        } else {
            self.select_depths(DepthSelection::At(vec![depth]))
        }
    }

    /// Evaluate at explicit depths (m, non-negative).
    pub fn depths(self, depths: &[T]) -> Self {
        self.select_depths(DepthSelection::At(depths.to_vec()))
    }

    /// Evaluate at the top of every layer, free surface included.
    pub fn interfaces(self) -> Self {
        self.select_depths(DepthSelection::Interfaces)
    }

    fn select_depths(mut self, selection: DepthSelection<T>) -> Self {
        if self.depths.is_some() {
            self.duplicate_param = Some("depths");
        }
        self.depths = Some(selection);
        self
    }

    /// Set the incidence angle from the vertical, in degrees `[0, 90)`.
    pub fn incidence_angle(mut self, degrees: T) -> Self {
        if self.incidence_angle.is_some() {
            self.duplicate_param = Some("incidence_angle");
        }
        self.incidence_angle = Some(degrees);
        self
    }

    /// Enable or disable anelastic attenuation.
    pub fn attenuation(mut self, enabled: bool) -> Self {
        if self.attenuation.is_some() {
            self.duplicate_param = Some("attenuation");
        }
        self.attenuation = Some(enabled);
        self
    }

    // ==========================
    // Development Options
    // ==========================

    /// Set a custom frequency pass function for execution (only for dev)
    #[doc(hidden)]
    pub fn custom_frequency_pass(mut self, pass: FrequencyPassFn<T>) -> Self {
        self.custom_frequency_pass = Some(pass);
        self
    }

    /// Set parallel execution hint (only for dev)
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    /// Validate the configuration and build the solver.
    pub fn build(self) -> Result<TransferFunctionSolver<T>, SrtkError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let frequencies = self.frequencies.ok_or(SrtkError::MissingParameter {
            name: "frequencies",
            layer: None,
        })?;
        Validator::validate_frequencies(&frequencies)?;

        let depths = self.depths.unwrap_or(DepthSelection::Interfaces);
        if let DepthSelection::At(ref z) = depths {
            Validator::validate_depths(z)?;
        }

        let incidence_angle = self.incidence_angle.unwrap_or_else(T::zero);
        Validator::validate_incidence_angle(incidence_angle)?;

        Ok(TransferFunctionSolver {
            config: TransferFunctionConfig {
                frequencies,
                depths,
                incidence_angle,
                attenuation: self.attenuation.unwrap_or(true),
                custom_frequency_pass: self.custom_frequency_pass,
                parallel: self.parallel.unwrap_or(false),
            },
        })
    }
}

/// Configured SH-wave transfer function solver.
#[derive(Debug, Clone)]
pub struct TransferFunctionSolver<T> {
    config: TransferFunctionConfig<T>,
}

impl<T: FloatLinalg> TransferFunctionSolver<T> {
    /// Configuration of this solver.
    pub fn config(&self) -> &TransferFunctionConfig<T> {
        &self.config
    }

    /// Compute the transfer function of a profile.
    ///
    /// Shear velocities, densities and (with attenuation) shear quality
    /// factors are used; compressional properties are ignored.
    pub fn compute(&self, profile: &SoilProfile<T>) -> Result<TransferFunctionResult<T>, SrtkError> {
        Ok(TransferFunctionExecutor::from_config(self.config.clone()).run(
            profile.thickness(),
            profile.vs(),
            profile.density(),
            profile.qs(),
        ))
    }

    /// Compute the transfer function of raw profile columns.
    pub fn compute_columns(
        &self,
        thickness: &[T],
        vs: &[T],
        density: &[T],
        qs: Option<&[T]>,
    ) -> Result<TransferFunctionResult<T>, SrtkError> {
        Validator::validate_layers(thickness, &[("vs", vs), ("dn", density)])?;
        if let Some(qs) = qs {
            Validator::validate_layers(thickness, &[("qs", qs)])?;
        }

        Ok(TransferFunctionExecutor::from_config(self.config.clone()).run(
            thickness, vs, density, qs,
        ))
    }
}

// ============================================================================
// Quarter-Wavelength Builder
// ============================================================================

/// Fluent builder for the quarter-wavelength solver.
#[derive(Debug, Clone)]
pub struct QuarterWavelengthBuilder<T> {
    /// Frequency axis in Hz.
    pub frequencies: Option<Vec<T>>,

    /// Bounded search strategy.
    pub search_method: Option<SearchMethod>,

    /// Largest accepted residual, in meters.
    pub tolerance: Option<T>,

    /// Iteration budget per frequency.
    pub max_iterations: Option<usize>,

    /// Custom frequency pass function.
    #[doc(hidden)]
    pub custom_qwl_pass: Option<QwlPassFn<T>>,

    /// Parallel execution hint.
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for QuarterWavelengthBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> QuarterWavelengthBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            frequencies: None,
            search_method: None,
            tolerance: None,
            max_iterations: None,
            custom_qwl_pass: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    /// Set the frequency axis (Hz, strictly increasing).
    pub fn frequencies(mut self, frequencies: &[T]) -> Self {
        if self.frequencies.is_some() {
            self.duplicate_param = Some("frequencies");
        }
        self.frequencies = Some(frequencies.to_vec());
        self
    }

    /// Solve at a single frequency.
    pub fn frequency(self, frequency: T) -> Self {
        self.frequencies(&[frequency])
    }

    /// Set the bounded search strategy.
    pub fn search_method(mut self, method: SearchMethod) -> Self {
        if self.search_method.is_some() {
            self.duplicate_param = Some("search_method");
        }
        self.search_method = Some(method);
        self
    }

    /// Set the largest accepted residual `|z − v_avg(z) / (4f)|`.
    pub fn tolerance(mut self, tolerance: T) -> Self {
        if self.tolerance.is_some() {
            self.duplicate_param = Some("tolerance");
        }
        self.tolerance = Some(tolerance);
        self
    }

    /// Set the iteration budget per frequency.
    pub fn max_iterations(mut self, iterations: usize) -> Self {
        if self.max_iterations.is_some() {
            self.duplicate_param = Some("max_iterations");
        }
        self.max_iterations = Some(iterations);
        self
    }

    // ==========================
    // Development Options
    // ==========================

    /// Set a custom quarter-wavelength pass function (only for dev)
    #[doc(hidden)]
    pub fn custom_qwl_pass(mut self, pass: QwlPassFn<T>) -> Self {
        self.custom_qwl_pass = Some(pass);
        self
    }

    /// Set parallel execution hint (only for dev)
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    /// Validate the configuration and build the solver.
    pub fn build(self) -> Result<QuarterWavelengthSolver<T>, SrtkError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let frequencies = self.frequencies.ok_or(SrtkError::MissingParameter {
            name: "frequencies",
            layer: None,
        })?;
        Validator::validate_frequencies(&frequencies)?;

        let tolerance = self.tolerance.unwrap_or_else(default_tolerance);
        Validator::validate_tolerance(tolerance)?;

        let max_iterations = self.max_iterations.unwrap_or(DEFAULT_MAX_ITERATIONS);
        Validator::validate_iterations(max_iterations)?;

        Ok(QuarterWavelengthSolver {
            config: QuarterWavelengthConfig {
                frequencies,
                search: SearchConfig {
                    method: self.search_method.unwrap_or_default(),
                    tolerance,
                    max_iterations,
                },
                custom_qwl_pass: self.custom_qwl_pass,
                parallel: self.parallel.unwrap_or(false),
            },
        })
    }
}

/// Configured quarter-wavelength solver.
#[derive(Debug, Clone)]
pub struct QuarterWavelengthSolver<T> {
    config: QuarterWavelengthConfig<T>,
}

impl<T: Float> QuarterWavelengthSolver<T> {
    /// Configuration of this solver.
    pub fn config(&self) -> &QuarterWavelengthConfig<T> {
        &self.config
    }

    /// Solve the quarter-wavelength problem for a profile.
    pub fn compute(
        &self,
        profile: &SoilProfile<T>,
    ) -> Result<QuarterWavelengthResult<T>, SrtkError> {
        Ok(QuarterWavelengthExecutor::from_config(self.config.clone()).run(
            profile.thickness(),
            profile.vs(),
            profile.density(),
        ))
    }

    /// Solve the quarter-wavelength problem for raw profile columns.
    pub fn compute_columns(
        &self,
        thickness: &[T],
        vs: &[T],
        density: &[T],
    ) -> Result<QuarterWavelengthResult<T>, SrtkError> {
        Validator::validate_layers(thickness, &[("vs", vs), ("dn", density)])?;
        Ok(QuarterWavelengthExecutor::from_config(self.config.clone()).run(thickness, vs, density))
    }
}

// ============================================================================
// Scalar Site Proxies
// ============================================================================

/// Depth-weighted average of a per-layer property down to `depth`.
pub fn depth_weighted_average<T: Float>(
    thickness: &[T],
    property: &[T],
    depth: T,
) -> Result<T, SrtkError> {
    Validator::validate_layers(thickness, &[("property", property)])?;
    Validator::validate_averaging_depth(depth)?;
    Ok(average::depth_weighted_average(thickness, property, depth))
}

/// Travel-time (harmonic) average velocity down to `depth`.
pub fn traveltime_average_velocity<T: Float>(
    thickness: &[T],
    vs: &[T],
    depth: T,
) -> Result<T, SrtkError> {
    Validator::validate_layers(thickness, &[("vs", vs)])?;
    Validator::validate_averaging_depth(depth)?;
    Ok(velocity::traveltime_average_velocity(thickness, vs, depth))
}

/// Travel-time average shear velocity over the top 30 m.
pub fn vs30<T: Float>(thickness: &[T], vs: &[T]) -> Result<T, SrtkError> {
    traveltime_average_velocity(thickness, vs, T::from(VS30_DEPTH).unwrap_or_else(T::nan))
}

/// Site kappa: travel-time weighted damping down to `depth`.
///
/// Without an explicit depth, the average is taken down to the top of the
/// half-space.
pub fn site_kappa<T: Float>(
    thickness: &[T],
    vs: &[T],
    qs: &[T],
    depth: Option<T>,
) -> Result<T, SrtkError> {
    Validator::validate_layers(thickness, &[("vs", vs), ("qs", qs)])?;

    let depth = match depth {
        Some(z) => {
            Validator::validate_averaging_depth(z)?;
            z
        }
        None => {
            let z = thickness[..thickness.len() - 1]
                .iter()
                .fold(T::zero(), |acc, &h| acc + h);
            if z <= T::zero() {
                return Err(SrtkError::PreconditionNotMet(
                    "kappa of a bare half-space needs an explicit depth".to_string(),
                ));
            }
            z
        }
    };

    Ok(kappa::site_kappa(thickness, vs, qs, depth))
}

/// Impedance amplification of one or more top layers against a reference.
///
/// The reference velocity and density default to the last element of the
/// corresponding top array. `incidence_deg` is measured from the vertical.
pub fn impedance_amplification<T: Float>(
    top_vs: &[T],
    top_dn: &[T],
    ref_vs: Option<T>,
    ref_dn: Option<T>,
    incidence_deg: T,
) -> Result<Vec<T>, SrtkError> {
    Validator::validate_positive("vs", top_vs)?;
    Validator::validate_positive("dn", top_dn)?;
    if top_dn.len() != top_vs.len() {
        return Err(SrtkError::MismatchedLengths {
            name: "dn",
            expected: top_vs.len(),
            got: top_dn.len(),
        });
    }
    Validator::validate_reference("vs", ref_vs)?;
    Validator::validate_reference("dn", ref_dn)?;
    Validator::validate_incidence_angle(incidence_deg)?;

    let last = top_vs.len() - 1;
    Ok(impedance_amplification_array(
        top_vs,
        top_dn,
        ref_vs.unwrap_or(top_vs[last]),
        ref_dn.unwrap_or(top_dn[last]),
        incidence_deg,
    ))
}

/// Depth of every layer top, free surface included.
pub fn interface_depths<T: Float>(thickness: &[T]) -> Vec<T> {
    average::interface_depths(thickness)
}

// ============================================================================
// Profile Conveniences
// ============================================================================

impl<T: Float> SoilProfile<T> {
    /// Column of the given key, if the profile carries it.
    pub fn column(&self, key: LayerKey) -> Option<&[T]> {
        match key {
            LayerKey::Thickness => Some(self.thickness()),
            LayerKey::Vp => Some(self.vp()),
            LayerKey::Vs => Some(self.vs()),
            LayerKey::Density => Some(self.density()),
            LayerKey::Qp => self.qp(),
            LayerKey::Qs => self.qs(),
        }
    }

    /// Depth-weighted average of a layer property down to `depth`.
    pub fn depth_average(&self, key: LayerKey, depth: T) -> Result<T, SrtkError> {
        let column = self.column(key).ok_or_else(|| {
            SrtkError::PreconditionNotMet(format!(
                "profile has no '{}' values to average",
                key.as_str()
            ))
        })?;
        Validator::validate_averaging_depth(depth)?;
        Ok(average::depth_weighted_average(self.thickness(), column, depth))
    }

    /// Travel-time average shear velocity down to `depth`.
    pub fn average_velocity(&self, depth: T) -> Result<T, SrtkError> {
        Validator::validate_averaging_depth(depth)?;
        Ok(velocity::traveltime_average_velocity(
            self.thickness(),
            self.vs(),
            depth,
        ))
    }

    /// Travel-time average shear velocity over the top 30 m.
    pub fn vs30(&self) -> Result<T, SrtkError> {
        self.average_velocity(T::from(VS30_DEPTH).unwrap_or_else(T::nan))
    }

    /// Site kappa from shear velocities and quality factors.
    ///
    /// Without an explicit depth, the average is taken down to the top of
    /// the half-space.
    pub fn kappa0(&self, depth: Option<T>) -> Result<T, SrtkError> {
        let qs = self.qs().ok_or_else(|| {
            SrtkError::PreconditionNotMet("kappa requires shear quality factors (qs)".to_string())
        })?;
        site_kappa(self.thickness(), self.vs(), qs, depth)
    }

    /// Impedance amplification of the top layer against the half-space.
    pub fn impedance_amplification(&self, incidence_deg: T) -> Result<T, SrtkError> {
        let half_space = self.half_space();
        let amplification = impedance_amplification(
            &self.vs()[..1],
            &self.density()[..1],
            Some(half_space.vs),
            Some(half_space.density),
            incidence_deg,
        )?;
        Ok(amplification[0])
    }

    /// Depth of every layer top, free surface included.
    pub fn interface_depths(&self) -> Vec<T> {
        average::interface_depths(self.thickness())
    }
}
