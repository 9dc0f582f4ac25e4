//! # fastSrtk: Parallel Seismic Site Response
//!
//! Multi-threaded execution and ndarray interoperability for the
//! [`srtk`](https://docs.rs/srtk) site-response solvers.
//!
//! Every frequency of a transfer function or a quarter-wavelength search is
//! solved independently, so long frequency axes are distributed across CPU
//! cores with `rayon`. Results are identical to the sequential solvers.
//!
//! ## Quick Start
//!
//! ### Transfer Function
//!
//! ```rust
//! use fastSrtk::prelude::*;
//! use ndarray::Array1;
//!
//! let thickness = Array1::from_vec(vec![10.0, 20.0, 0.0]);
//! let vs = Array1::from_vec(vec![180.0, 400.0, 1500.0]);
//! let dn = Array1::from_vec(vec![1700.0, 1900.0, 2500.0]);
//!
//! let frequencies: Vec<f64> = (1..=200).map(|i| 0.1 * i as f64).collect();
//!
//! // Parallel by default
//! let model = TransferFunction::new()
//!     .frequencies(&frequencies)
//!     .depths(&[0.0, 30.0])
//!     .build()?;
//!
//! let result = model.compute_columns(&thickness, &vs, &dn, None)?;
//! let amplitude = result.amplitude_array()?;
//! assert_eq!(amplitude.dim(), (2, 200));
//! # Result::<(), SrtkError>::Ok(())
//! ```
//!
//! ### Quarter-Wavelength Parameters
//!
//! ```rust
//! use fastSrtk::prelude::*;
//!
//! let profile = SoilProfile::from_records(&[
//!     [10.0, 350.0, 180.0, 1700.0],
//!     [20.0, 800.0, 400.0, 1900.0],
//!     [0.0, 3000.0, 1500.0, 2500.0],
//! ])?;
//!
//! let model = QuarterWavelength::new()
//!     .frequencies(&[0.5, 1.0, 2.0, 5.0, 10.0])
//!     .parallel(false)
//!     .build()?;
//!
//! let qwl = model.compute(&profile)?;
//! assert!(qwl.is_complete());
//! # Result::<(), SrtkError>::Ok(())
//! ```
//!
//! ## Feature Flags
//!
//! * `cpu` (default): parallel frequency passes with `rayon`. Without it the
//!   builders fall back to the sequential passes of `srtk`.
//! * `dev`: exposes the `internals` module for white-box tests.

#![allow(non_snake_case)]

// Layer 5: Engine - parallel execution and result views.
mod engine;

// High-level fluent API for parallel site-response analysis.
mod api;

// Input data handling.
mod input;

// Standard fastSrtk prelude.
pub mod prelude {
    pub use crate::api::{
        DepthSelection, Distribution, FrequencyStatus, Layer, LayerKey,
        ParallelQuarterWavelength, ParallelQuarterWavelengthBuilder as QuarterWavelength,
        ParallelTransferFunction, ParallelTransferFunctionBuilder as TransferFunction,
        QuarterWavelengthArrays, QuarterWavelengthResult, Quantity, SearchMethod,
        SearchMethod::{Bisection, GoldenSection},
        SearchStatus, SoilProfile, SrtkError, TransferFunctionArrays, TransferFunctionResult,
        depth_weighted_average, impedance_amplification, interface_depths, site_kappa,
        traveltime_average_velocity, vs30,
    };
    pub use crate::input::SrtkInput;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
    pub mod input {
        pub use crate::input::*;
    }
}
