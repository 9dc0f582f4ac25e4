//! Dense complex linear algebra backend.
//!
//! ## Purpose
//!
//! This module provides the small dense complex solve used once per
//! frequency by the layer-matrix solver, standardizing on the nalgebra
//! LU decomposition.
//!
//! ## Design notes
//!
//! * LU with partial pivoting; a zero pivot or a non-finite solution is
//!   reported as `None` (singular system) rather than an error.
//! * Generic over `FloatLinalg` types (f32 and f64) which delegate to nalgebra.
//! * Matrices are passed row-major, the order in which they are assembled.

// External dependencies
use num_complex::Complex;
use num_traits::Float;

// ============================================================================
// FloatLinalg Trait
// ============================================================================

/// Helper trait to bridge generic Float types to the nalgebra backend.
pub trait FloatLinalg: Float + Send + Sync + 'static {
    /// Solve the `n × n` complex system `A x = b` (`A` row-major).
    ///
    /// Returns `None` when `A` is singular.
    fn solve_complex(
        a: &[Complex<Self>],
        b: &[Complex<Self>],
        n: usize,
    ) -> Option<Vec<Complex<Self>>>;
}

impl FloatLinalg for f64 {
    #[inline]
    fn solve_complex(
        a: &[Complex<Self>],
        b: &[Complex<Self>],
        n: usize,
    ) -> Option<Vec<Complex<Self>>> {
        nalgebra_backend::solve_complex_f64(a, b, n)
    }
}

impl FloatLinalg for f32 {
    #[inline]
    fn solve_complex(
        a: &[Complex<Self>],
        b: &[Complex<Self>],
        n: usize,
    ) -> Option<Vec<Complex<Self>>> {
        nalgebra_backend::solve_complex_f32(a, b, n)
    }
}

// ============================================================================
// Nalgebra Backend Implementation
// ============================================================================

/// Nalgebra-based linear algebra operations.
pub mod nalgebra_backend {
    use super::*;
    use nalgebra::{DMatrix, DVector};

    /// Solve a complex system using f64 precision.
    pub fn solve_complex_f64(
        a: &[Complex<f64>],
        b: &[Complex<f64>],
        n: usize,
    ) -> Option<Vec<Complex<f64>>> {
        let matrix = DMatrix::from_row_slice(n, n, a);
        let rhs = DVector::from_column_slice(b);

        matrix
            .lu()
            .solve(&rhs)
            .filter(|x| x.iter().all(|v| v.is_finite()))
            .map(|x| x.as_slice().to_vec())
    }

    /// Solve a complex system using f32 precision.
    pub fn solve_complex_f32(
        a: &[Complex<f32>],
        b: &[Complex<f32>],
        n: usize,
    ) -> Option<Vec<Complex<f32>>> {
        let matrix = DMatrix::from_row_slice(n, n, a);
        let rhs = DVector::from_column_slice(b);

        matrix
            .lu()
            .solve(&rhs)
            .filter(|x| x.iter().all(|v| v.is_finite()))
            .map(|x| x.as_slice().to_vec())
    }
}
