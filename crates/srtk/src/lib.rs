//! # srtk: One-Dimensional Seismic Site Response for Rust
//!
//! Site-response characterization of a layered soil column over a
//! half-space: SH-wave transfer functions, quarter-wavelength parameters,
//! impedance amplification and depth-averaged site proxies (Vs30, kappa).
//!
//! ## What is site response?
//!
//! Seismic waves travelling up from bedrock are modified by the softer
//! layers near the surface: amplified by impedance contrasts, filtered by
//! resonances and damped by anelastic attenuation. This crate computes the
//! classical one-dimensional descriptors of that modification from a
//! profile of layer thicknesses, velocities, densities and quality factors.
//!
//! ## Quick Start
//!
//! ### Transfer Function
//!
//! ```rust
//! use srtk::prelude::*;
//!
//! // One 20 m soft layer over rock, positional records [hl, vp, vs, dn]
//! let profile = SoilProfile::from_records(&[
//!     [20.0, 400.0, 200.0, 1800.0],
//!     [0.0, 2000.0, 1000.0, 2400.0],
//! ])?;
//!
//! let model = TransferFunction::new()
//!     .frequencies(&[0.5, 1.0, 2.5, 5.0])
//!     .interfaces()
//!     .build()?;
//!
//! let result = model.compute(&profile)?;
//!
//! // Amplitude at the free surface, one value per frequency
//! let surface = result.amplitudes(0).unwrap_or_default();
//! assert_eq!(surface.len(), 4);
//! assert_eq!(result.undefined_count(), 0);
//! # Result::<(), SrtkError>::Ok(())
//! ```
//!
//! ### Quarter-Wavelength Parameters
//!
//! ```rust
//! use srtk::prelude::*;
//!
//! let thickness = [5.0, 10.0, 10.0, 20.0, 0.0];
//! let vs = [200.0, 300.0, 350.0, 650.0, 1200.0];
//! let dn = [1800.0, 1900.0, 1900.0, 2100.0, 2400.0];
//!
//! let model = QuarterWavelength::new()
//!     .frequencies(&[1.0, 2.0, 5.0, 10.0])
//!     .build()?;
//!
//! let qwl = model.compute_columns(&thickness, &vs, &dn)?;
//! for (z, v) in qwl.depth.iter().zip(&qwl.velocity) {
//!     assert!(*z > 0.0 && *v > 0.0);
//! }
//!
//! // Amplification of each quarter-wavelength average against 1200 m/s rock
//! let amp = qwl.impedance_amplification(Some(1200.0), Some(2400.0), 0.0)?;
//! assert!(amp.iter().all(|&a| a > 1.0));
//! # Result::<(), SrtkError>::Ok(())
//! ```
//!
//! ### Site Proxies
//!
//! ```rust
//! use srtk::prelude::*;
//!
//! let thickness = [5.0, 10.0, 10.0, 20.0, 0.0];
//! let vs = [200.0, 300.0, 350.0, 650.0, 1200.0];
//!
//! let v30: f64 = vs30(&thickness, &vs)?;
//! assert!((v30 - 317.13).abs() < 0.01);
//! # Result::<(), SrtkError>::Ok(())
//! ```
//!
//! ## Error Handling
//!
//! Malformed profiles and invalid configuration are reported immediately
//! as [`SrtkError`](prelude::SrtkError). Failures confined to a single
//! frequency (a singular layer matrix, a quarter-wavelength search without
//! a bracket) are not errors: the affected entries are NaN, their status is
//! recorded, and every result exposes `undefined_count()`.
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade. Failed frequencies are
//! reported at `warn` level, run summaries at `debug` level. No logger is
//! installed by the library.
//!
//! ## Feature Flags
//!
//! * `serde`: `Serialize`/`Deserialize` for [`Layer`](prelude::Layer) and
//!   [`SoilProfile`](prelude::SoilProfile), using the keyed record format
//!   (`hl`, `vp`, `vs`, `dn`, `qp`, `qs`).
//! * `dev`: exposes the `internals` module for white-box tests and
//!   extension crates such as `fastSrtk`.
//!
//! ## References
//!
//! * Boore, D. M. (2003). Simulation of ground motion using the stochastic
//!   method. *Pure and Applied Geophysics*, 160, 635–676.
//! * Knopoff, L. (1964). A matrix method for elastic wave problems.
//!   *Bulletin of the Seismological Society of America*, 54(1), 431–438.
//! * Joyner, W. B., Warrick, R. E., & Fumal, T. E. (1981). The effect of
//!   Quaternary alluvium on strong ground motion in the Coyote Lake,
//!   California, earthquake of 1979. *BSSA*, 71(4), 1333–1349.

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Algorithms - core site-response algorithms.
mod algorithms;

// Layer 4: Evaluation - per-quantity aggregation metadata.
mod evaluation;

// Layer 5: Engine - orchestration and execution control.
mod engine;

// High-level fluent API for site-response analysis.
mod api;

// Standard srtk prelude.
pub mod prelude {
    pub use crate::api::{
        DepthSelection, Distribution, FrequencyStatus, Layer, LayerKey,
        QuarterWavelengthBuilder as QuarterWavelength, QuarterWavelengthResult,
        QuarterWavelengthSolver, Quantity, SearchMethod,
        SearchMethod::{Bisection, GoldenSection},
        SearchStatus, SoilProfile, SrtkError, TransferFunctionBuilder as TransferFunction,
        TransferFunctionResult, TransferFunctionSolver, depth_weighted_average,
        impedance_amplification, interface_depths, site_kappa, traveltime_average_velocity, vs30,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
