//! Input validation for site-response configuration and data.
//!
//! ## Purpose
//!
//! This module provides the validation functions run before any
//! computation: profile columns, frequency axes, depths, angles and search
//! parameters.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective physical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or repair inputs.
//! * This module does not perform any site-response computation.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SrtkError;
use crate::primitives::profile::validate_columns;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for site-response inputs.
///
/// All methods return `Result<(), SrtkError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Profile Validation
    // ========================================================================

    /// Validate per-layer columns against a thickness column.
    pub fn validate_layers<T: Float>(
        thickness: &[T],
        properties: &[(&'static str, &[T])],
    ) -> Result<(), SrtkError> {
        validate_columns(thickness, properties)
    }

    /// Validate a standalone column of strictly positive values.
    pub fn validate_positive<T: Float>(name: &'static str, values: &[T]) -> Result<(), SrtkError> {
        if values.is_empty() {
            return Err(SrtkError::EmptyProfile);
        }
        for (layer, &v) in values.iter().enumerate() {
            if !v.is_finite() || v <= T::zero() {
                return Err(SrtkError::InvalidProperty {
                    name,
                    layer,
                    value: v.to_f64().unwrap_or(f64::NAN),
                });
            }
        }
        Ok(())
    }

    /// Validate an optional reference value: absent is fine, zero is not.
    pub fn validate_reference<T: Float>(
        name: &'static str,
        value: Option<T>,
    ) -> Result<(), SrtkError> {
        match value {
            Some(v) if !v.is_finite() || v <= T::zero() => Err(SrtkError::InvalidNumericValue(
                format!("reference {}={}", name, v.to_f64().unwrap_or(f64::NAN)),
            )),
            _ => Ok(()),
        }
    }

    // ========================================================================
    // Axis Validation
    // ========================================================================

    /// Validate a frequency axis: non-empty, finite, non-negative, strictly increasing.
    pub fn validate_frequencies<T: Float>(frequencies: &[T]) -> Result<(), SrtkError> {
        if frequencies.is_empty() {
            return Err(SrtkError::InvalidFrequencies(
                "at least one frequency is required".to_string(),
            ));
        }

        for (i, &f) in frequencies.iter().enumerate() {
            if !f.is_finite() || f < T::zero() {
                return Err(SrtkError::InvalidFrequencies(format!(
                    "f[{}]={} (must be finite and >= 0)",
                    i,
                    f.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        if let Some(i) = frequencies.windows(2).position(|w| w[1] <= w[0]) {
            return Err(SrtkError::InvalidFrequencies(format!(
                "not strictly increasing at index {}",
                i + 1
            )));
        }

        Ok(())
    }

    /// Validate evaluation depths: non-empty, finite, non-negative.
    pub fn validate_depths<T: Float>(depths: &[T]) -> Result<(), SrtkError> {
        if depths.is_empty() {
            return Err(SrtkError::InvalidDepth(f64::NAN));
        }
        for &z in depths {
            if !z.is_finite() || z < T::zero() {
                return Err(SrtkError::InvalidDepth(z.to_f64().unwrap_or(f64::NAN)));
            }
        }
        Ok(())
    }

    /// Validate an averaging depth: finite and strictly positive.
    pub fn validate_averaging_depth<T: Float>(depth: T) -> Result<(), SrtkError> {
        if !depth.is_finite() || depth <= T::zero() {
            return Err(SrtkError::InvalidDepth(depth.to_f64().unwrap_or(f64::NAN)));
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the incidence angle, in degrees from the vertical.
    pub fn validate_incidence_angle<T: Float>(angle: T) -> Result<(), SrtkError> {
        let right = T::from(90.0).unwrap_or_else(T::nan);
        if !angle.is_finite() || angle < T::zero() || angle >= right {
            return Err(SrtkError::InvalidIncidenceAngle(
                angle.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the search residual tolerance.
    pub fn validate_tolerance<T: Float>(tol: T) -> Result<(), SrtkError> {
        if !tol.is_finite() || tol <= T::zero() {
            return Err(SrtkError::InvalidTolerance(
                tol.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the search iteration budget.
    pub fn validate_iterations(iterations: usize) -> Result<(), SrtkError> {
        if iterations == 0 {
            return Err(SrtkError::InvalidIterations(iterations));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), SrtkError> {
        if let Some(param) = duplicate_param {
            return Err(SrtkError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
