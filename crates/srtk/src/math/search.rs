//! Bounded one-dimensional searches.
//!
//! ## Purpose
//!
//! This module provides the scalar searches used by the quarter-wavelength
//! solver: a bracketed bisection on a signed misfit, and a golden-section
//! minimization of an absolute misfit.
//!
//! ## Design notes
//!
//! * **Derivative-free**: Both methods only evaluate the objective.
//! * **Open lower bound**: Bisection never evaluates the lower bracket end,
//!   so objectives that are undefined there (e.g. an average at depth zero)
//!   are safe as long as their sign is known.
//! * **Best-so-far**: Both methods return the evaluated point with the
//!   smallest absolute misfit, together with that misfit.
//!
//! ## Key concepts
//!
//! * **Residual**: `|f(x)|` at the returned point.
//! * **Golden ratio**: `φ = (√5 − 1)/2` places the interior probes.
//!
//! ## Invariants
//!
//! * The returned point lies inside the initial bracket.
//! * At most `max_iter` objective evaluations are spent in the main loop.
//!
//! ## Non-goals
//!
//! * This module does not establish the bracket; callers supply it.

// External dependencies
use num_traits::Float;

// ============================================================================
// Search Method
// ============================================================================

/// Strategy for the bounded quarter-wavelength search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMethod {
    /// Bisection on the signed misfit (guaranteed sign change on the bracket).
    #[default]
    Bisection,

    /// Golden-section minimization of the absolute misfit.
    GoldenSection,
}

/// Result of a bounded search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOutcome<T> {
    /// Best point found.
    pub x: T,

    /// Absolute misfit at `x`.
    pub residual: T,

    /// Objective evaluations spent in the main loop.
    pub iterations: usize,
}

impl<T: Float> SearchOutcome<T> {
    fn consider(&mut self, x: T, residual: T) {
        if residual < self.residual || self.residual.is_nan() {
            self.x = x;
            self.residual = residual;
        }
    }
}

// ============================================================================
// Bisection
// ============================================================================

/// Bisection on `(lo, hi]` for a signed objective negative near `lo`.
///
/// `f(lo)` is never evaluated. The loop stops when the residual drops to
/// `tol`, when the bracket can no longer be split, or after `max_iter`
/// evaluations.
pub fn bisect<T, F>(f: F, mut lo: T, mut hi: T, tol: T, max_iter: usize) -> SearchOutcome<T>
where
    T: Float,
    F: Fn(T) -> T,
{
    let f_hi = f(hi);
    let mut best = SearchOutcome {
        x: hi,
        residual: f_hi.abs(),
        iterations: 0,
    };
    if best.residual <= tol {
        return best;
    }

    let two = T::one() + T::one();
    for iter in 1..=max_iter {
        let mid = lo + (hi - lo) / two;
        if mid <= lo || mid >= hi {
            break;
        }

        let f_mid = f(mid);
        best.iterations = iter;
        best.consider(mid, f_mid.abs());
        if best.residual <= tol {
            break;
        }

        if f_mid < T::zero() {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    best
}

// ============================================================================
// Golden Section
// ============================================================================

/// Golden-section search for the minimizer of `|f|` on `[lo, hi]`.
///
/// Assumes `|f|` is unimodal on the bracket. Stops when the bracket is
/// narrower than `x_tol`, when the residual drops to `tol`, or after
/// `max_iter` evaluations.
pub fn golden_section<T, F>(
    f: F,
    mut lo: T,
    mut hi: T,
    x_tol: T,
    tol: T,
    max_iter: usize,
) -> SearchOutcome<T>
where
    T: Float,
    F: Fn(T) -> T,
{
    let five = T::from(5.0).unwrap_or_else(T::nan);
    let two = T::one() + T::one();
    let phi = (five.sqrt() - T::one()) / two;
    let inv_phi = T::one() - phi;

    let mut x1 = lo + inv_phi * (hi - lo);
    let mut x2 = lo + phi * (hi - lo);
    let mut f1 = f(x1).abs();
    let mut f2 = f(x2).abs();

    let mut best = SearchOutcome {
        x: x1,
        residual: f1,
        iterations: 2,
    };
    best.consider(x2, f2);

    while best.iterations < max_iter && (hi - lo).abs() > x_tol && best.residual > tol {
        if f1 > f2 {
            // Minimum is in [x1, hi]
            lo = x1;
            x1 = x2;
            f1 = f2;
            x2 = lo + phi * (hi - lo);
            f2 = f(x2).abs();
            best.consider(x2, f2);
        } else {
            // Minimum is in [lo, x2]
            hi = x2;
            x2 = x1;
            f2 = f1;
            x1 = lo + inv_phi * (hi - lo);
            f1 = f(x1).abs();
            best.consider(x1, f1);
        }
        best.iterations += 1;
    }

    best
}
