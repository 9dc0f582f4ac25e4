//! Input abstractions for site-response solvers.
//!
//! ## Purpose
//!
//! This module provides a unified abstraction for profile columns, allowing
//! the `compute_columns` methods to accept multiple data formats (slices,
//! vectors, ndarray) through a single interface.
//!
//! ## Design notes
//!
//! * **Zero-copy**: Every accepted container is borrowed, never copied.
//! * **Fail-fast validation**: Strided views are rejected before any
//!   computation, naming the offending column.
//!
//! ## Invariants
//!
//! * Returned slices represent all elements in the input container.
//! * Inputs must be contiguous in memory; non-contiguous inputs return an error.
//!
//! ## Non-goals
//!
//! * This module does not validate the physical content of the columns.

// External dependencies
use ndarray::{ArrayBase, Data, Ix1};
use num_traits::Float;

// Export dependencies from srtk crate
use srtk::internals::primitives::errors::SrtkError;

/// A profile column accepted by the solvers.
pub trait SrtkInput<T: Float> {
    /// Borrow the column as a contiguous slice.
    ///
    /// `name` is the profile key (`hl`, `vs`, `dn`, `qs`) reported when the
    /// column cannot be borrowed.
    fn as_column(&self, name: &'static str) -> Result<&[T], SrtkError>;
}

impl<T: Float> SrtkInput<T> for [T] {
    fn as_column(&self, _name: &'static str) -> Result<&[T], SrtkError> {
        Ok(self)
    }
}

impl<T: Float, const N: usize> SrtkInput<T> for [T; N] {
    fn as_column(&self, _name: &'static str) -> Result<&[T], SrtkError> {
        Ok(self.as_slice())
    }
}

impl<T: Float> SrtkInput<T> for Vec<T> {
    fn as_column(&self, _name: &'static str) -> Result<&[T], SrtkError> {
        Ok(self.as_slice())
    }
}

impl<T: Float, S> SrtkInput<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
{
    fn as_column(&self, name: &'static str) -> Result<&[T], SrtkError> {
        self.as_slice().ok_or_else(|| {
            SrtkError::InvalidInput(format!(
                "column '{}' is a strided view (stride {}); pass a contiguous array",
                name,
                self.strides().first().copied().unwrap_or(0)
            ))
        })
    }
}
