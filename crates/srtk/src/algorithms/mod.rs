//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the site-response algorithms:
//! - Travel-time average velocity (Vs30 and arbitrary depths)
//! - Site attenuation kappa(0)
//! - Single-contrast impedance amplification
//! - Quarter-wavelength averaging
//! - Knopoff layer-matrix SH transfer function
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Travel-time average velocity.
pub mod velocity;

/// Site kappa(0).
pub mod kappa;

/// Impedance amplification.
pub mod impedance;

/// Quarter-wavelength averaging.
pub mod quarter_wavelength;

/// SH transfer function (Knopoff layer matrix).
pub mod transfer;
