//! ndarray views of site-response results.
//!
//! ## Purpose
//!
//! This module converts the dense tables produced by the `srtk` solvers
//! into `ndarray` arrays, so results can flow into array-based pipelines
//! without manual reshaping.
//!
//! ## Design notes
//!
//! * **Extension traits**: Conversions are added to the `srtk` result types
//!   rather than wrapping them.
//! * **Layout**: Transfer-function arrays have shape `(depths, frequencies)`,
//!   matching the row-major storage of the result.
//!
//! ## Non-goals
//!
//! * This module does not recompute anything; NaN markers are carried over.

// External dependencies
use ndarray::{Array1, Array2};
use num_complex::Complex;
use num_traits::Float;

// Export dependencies from srtk crate
use srtk::internals::engine::output::{QuarterWavelengthResult, TransferFunctionResult};
use srtk::internals::primitives::errors::SrtkError;

/// Array views of a transfer-function result.
pub trait TransferFunctionArrays<T> {
    /// Complex displacements with shape `(depths, frequencies)`.
    fn values_array(&self) -> Result<Array2<Complex<T>>, SrtkError>;

    /// Amplitudes with shape `(depths, frequencies)`.
    fn amplitude_array(&self) -> Result<Array2<T>, SrtkError>;

    /// Frequency axis.
    fn frequency_array(&self) -> Array1<T>;
}

impl<T: Float> TransferFunctionArrays<T> for TransferFunctionResult<T> {
    fn values_array(&self) -> Result<Array2<Complex<T>>, SrtkError> {
        Array2::from_shape_vec((self.n_depths(), self.n_frequencies()), self.values.clone())
            .map_err(|e| SrtkError::InvalidInput(e.to_string()))
    }

    fn amplitude_array(&self) -> Result<Array2<T>, SrtkError> {
        Array2::from_shape_vec(
            (self.n_depths(), self.n_frequencies()),
            self.amplitude_matrix(),
        )
        .map_err(|e| SrtkError::InvalidInput(e.to_string()))
    }

    fn frequency_array(&self) -> Array1<T> {
        Array1::from_vec(self.frequencies.clone())
    }
}

/// Array views of a quarter-wavelength result.
pub trait QuarterWavelengthArrays<T> {
    /// Quarter-wavelength depths.
    fn depth_array(&self) -> Array1<T>;

    /// Average velocities.
    fn velocity_array(&self) -> Array1<T>;

    /// Average densities.
    fn density_array(&self) -> Array1<T>;
}

impl<T: Float> QuarterWavelengthArrays<T> for QuarterWavelengthResult<T> {
    fn depth_array(&self) -> Array1<T> {
        Array1::from_vec(self.depth.clone())
    }

    fn velocity_array(&self) -> Array1<T> {
        Array1::from_vec(self.velocity.clone())
    }

    fn density_array(&self) -> Array1<T> {
        Array1::from_vec(self.density.clone())
    }
}
