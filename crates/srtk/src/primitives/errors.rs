//! Error types for site-response operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while building a
//! soil profile, configuring a solver, or evaluating a depth-averaged proxy.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending layer index and value.
//! * **Fail-fast**: Malformed profiles are rejected before any computation.
//! * **Local failures are not errors**: A singular layer matrix or a failed
//!   quarter-wavelength search only invalidates one frequency. Those are
//!   reported as per-frequency statuses on the result types instead.
//!
//! ## Key concepts
//!
//! 1. **Malformed profile**: Empty profiles, mismatched column lengths,
//!    non-positive thickness on a finite layer, non-positive material values.
//! 2. **Configuration**: Invalid frequency axes, depths, angles, tolerances.
//! 3. **Precondition not met**: A quantity requested before its inputs exist
//!    (e.g. kappa on a profile without quality factors).
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.

// External dependencies
use std::error::Error;
use std::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for site-response operations.
#[derive(Debug, Clone, PartialEq)]
pub enum SrtkError {
    /// The profile has no layers; at least the half-space is required.
    EmptyProfile,

    /// Two per-layer columns that must align have different lengths.
    MismatchedLengths {
        /// Name of the offending column (e.g. "vs").
        name: &'static str,
        /// Expected number of layers.
        expected: usize,
        /// Number of values received.
        got: usize,
    },

    /// A finite (non-terminal) layer has a non-positive or non-finite thickness.
    InvalidThickness {
        /// Zero-based layer index.
        layer: usize,
        /// Thickness in meters.
        value: f64,
    },

    /// A velocity, density or quality factor is non-positive or non-finite.
    InvalidProperty {
        /// Property key (e.g. "vs", "dn", "qs").
        name: &'static str,
        /// Zero-based layer index.
        layer: usize,
        /// Offending value.
        value: f64,
    },

    /// A positional layer record is too short.
    IncompleteLayer {
        /// Number of values provided.
        got: usize,
        /// Minimum number of values required.
        min: usize,
    },

    /// A keyed layer record contains an unknown key.
    UnknownParameter(String),

    /// A keyed layer record lacks a required key.
    MissingParameter {
        /// Missing key.
        name: &'static str,
        /// Zero-based layer index, when known.
        layer: Option<usize>,
    },

    /// Quality factors must be given on every layer or on none.
    InconsistentQuality {
        /// Quality key ("qp" or "qs").
        name: &'static str,
        /// First layer whose presence differs from layer 0.
        layer: usize,
    },

    /// Input contains NaN or infinite values.
    InvalidNumericValue(String),

    /// Input data cannot be viewed as a contiguous sequence.
    InvalidInput(String),

    /// Frequency axis is empty, negative, non-finite or not strictly increasing.
    InvalidFrequencies(String),

    /// A requested evaluation or averaging depth is invalid.
    InvalidDepth(f64),

    /// Incidence angle must lie in [0, 90) degrees.
    InvalidIncidenceAngle(f64),

    /// Search tolerance must be positive and finite.
    InvalidTolerance(f64),

    /// Search iteration budget must be at least 1.
    InvalidIterations(usize),

    /// Parameter was set multiple times in a builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// A quantity was requested before its prerequisites exist.
    PreconditionNotMet(String),
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SrtkError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyProfile => write!(f, "Soil profile has no layers"),
            Self::MismatchedLengths {
                name,
                expected,
                got,
            } => {
                write!(
                    f,
                    "Length mismatch: '{name}' has {got} values, expected {expected}"
                )
            }
            Self::InvalidThickness { layer, value } => {
                write!(
                    f,
                    "Invalid thickness: layer {layer} has {value} m (must be > 0 above the half-space)"
                )
            }
            Self::InvalidProperty { name, layer, value } => {
                write!(
                    f,
                    "Invalid '{name}' in layer {layer}: {value} (must be > 0 and finite)"
                )
            }
            Self::IncompleteLayer { got, min } => {
                write!(f, "Incomplete layer record: got {got} values, need at least {min}")
            }
            Self::UnknownParameter(key) => write!(f, "Unknown layer parameter: '{key}'"),
            Self::MissingParameter { name, layer } => match layer {
                Some(layer) => write!(f, "Missing parameter '{name}' in layer {layer}"),
                None => write!(f, "Missing parameter '{name}'"),
            },
            Self::InconsistentQuality { name, layer } => {
                write!(
                    f,
                    "Inconsistent '{name}': layer {layer} differs from layer 0 (give it on all layers or none)"
                )
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            Self::InvalidFrequencies(msg) => write!(f, "Invalid frequencies: {msg}"),
            Self::InvalidDepth(depth) => write!(f, "Invalid depth: {depth}"),
            Self::InvalidIncidenceAngle(angle) => {
                write!(f, "Invalid incidence angle: {angle} (must be in [0, 90) degrees)")
            }
            Self::InvalidTolerance(tol) => {
                write!(f, "Invalid tolerance: {tol} (must be > 0 and finite)")
            }
            Self::InvalidIterations(iter) => {
                write!(f, "Invalid iterations: {iter} (must be at least 1)")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
            Self::PreconditionNotMet(msg) => write!(f, "Precondition not met: {msg}"),
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

impl Error for SrtkError {}
