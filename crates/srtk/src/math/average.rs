//! Depth-weighted averaging over a layered column.
//!
//! ## Purpose
//!
//! This module implements the averaging kernel shared by the travel-time
//! velocity, site kappa and quarter-wavelength computations, together with
//! the interface-depth helpers used by the transfer-function solver.
//!
//! ## Design notes
//!
//! * **Half-space aware**: The terminal layer has no usable thickness; any
//!   depth left once the finite layers are exhausted is charged to it.
//! * **Continuous**: At an interface the layer above contributes its full
//!   thickness and the layer below contributes nothing, so approaching the
//!   interface from either side gives the same value.
//! * **Unchecked**: Inputs are assumed validated (equal lengths, at least one
//!   layer, positive depth). The API layer performs the checks.
//!
//! ## Key concepts
//!
//! * **Weight**: Each layer contributes `(penetrated thickness / depth)`.
//! * **Interface depths**: `[0, h0, h0 + h1, ...]`, one entry per layer.
//!
//! ## Invariants
//!
//! * Weights sum to one for any positive depth.
//! * `interface_depths(h).len() == h.len()`.
//!
//! ## Non-goals
//!
//! * This module does not choose which property to average.

// External dependencies
use num_traits::Float;

// ============================================================================
// Averaging Kernel
// ============================================================================

/// Depth-weighted mean of a per-layer property down to `depth`.
///
/// Walks the finite layers top-down. A layer lying entirely above `depth`
/// contributes its thickness; the layer straddling `depth` contributes the
/// penetrated part and ends the walk. If the finite layers run out first,
/// the half-space takes the remaining depth.
pub fn depth_weighted_average<T: Float>(thickness: &[T], property: &[T], depth: T) -> T {
    let n = thickness.len();
    let mut mean = T::zero();
    let mut consumed = T::zero();

    for (&h, &p) in thickness[..n - 1].iter().zip(&property[..n - 1]) {
        if consumed + h < depth {
            mean = mean + h / depth * p;
            consumed = consumed + h;
        } else {
            return mean + (depth - consumed) / depth * p;
        }
    }

    mean + (depth - consumed) / depth * property[n - 1]
}

// ============================================================================
// Interface Geometry
// ============================================================================

/// Depth of every layer top, free surface included.
///
/// The result has one entry per layer: the cumulative sum of all but the
/// last thickness, prefixed with zero.
pub fn interface_depths<T: Float>(thickness: &[T]) -> Vec<T> {
    let mut depths = Vec::with_capacity(thickness.len());
    let mut acc = T::zero();
    for (i, &h) in thickness.iter().enumerate() {
        depths.push(acc);
        if i + 1 < thickness.len() {
            acc = acc + h;
        }
    }
    depths
}

/// Locate the layer containing `depth`.
///
/// Returns the layer index and the depth relative to that layer's top.
/// A depth exactly on an interface belongs to the layer above it; depths
/// below the last interface belong to the half-space.
pub fn locate_layer<T: Float>(bounds: &[T], depth: T) -> (usize, T) {
    let n = bounds.len();

    // At or above the bottom of the first layer.
    if n == 1 || depth <= bounds[1] {
        return (0, depth);
    }

    let last = n - 1;
    if depth > bounds[last] {
        return (last, depth - bounds[last]);
    }

    // First interface at or below depth; the layer is the one above it.
    let idx = bounds.partition_point(|&b| b < depth) - 1;
    (idx, depth - bounds[idx])
}
