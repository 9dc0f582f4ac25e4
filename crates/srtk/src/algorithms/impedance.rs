//! Single-contrast impedance amplification.
//!
//! ## Purpose
//!
//! This module evaluates the square-root impedance amplification of a single
//! seismic contrast (Joyner et al., 1981; Boore, 2013), with an optional
//! correction for oblique incidence.
//!
//! ## Design notes
//!
//! * **Elementwise**: Site (top) properties may be arrays, e.g. the
//!   quarter-wavelength velocity and density at every frequency.
//! * **Resolved reference**: The reference velocity and density are plain
//!   values here. Defaulting is decided by the caller.
//!
//! ## Key concepts
//!
//! * **Vertical incidence**: `sqrt((ρ_ref · v_ref) / (ρ_top · v_top))`.
//! * **Oblique incidence**: Multiplied by `sqrt(cos θ_inc / cos θ_eff)`, with
//!   `θ_eff = asin((v_top / v_ref) · sin θ_inc)` from Snell's law.
//!
//! ## Invariants
//!
//! * No contrast gives unit amplification at any angle.
//! * Post-critical configurations (`|sin θ_eff| > 1`) yield NaN.
//!
//! ## Non-goals
//!
//! * This module does not validate inputs (handled by `validator`).

// External dependencies
use num_traits::Float;

/// Amplification of a single top layer against a reference.
pub fn impedance_amplification<T: Float>(
    top_vs: T,
    top_dn: T,
    ref_vs: T,
    ref_dn: T,
    incidence_deg: T,
) -> T {
    let amplification = ((ref_dn * ref_vs) / (top_dn * top_vs)).sqrt();

    if incidence_deg > T::zero() {
        let incidence = incidence_deg.to_radians();
        let effective = ((top_vs / ref_vs) * incidence.sin()).asin();
        return amplification * (incidence.cos() / effective.cos()).sqrt();
    }

    amplification
}

/// Elementwise amplification of several top layers against one reference.
pub fn impedance_amplification_array<T: Float>(
    top_vs: &[T],
    top_dn: &[T],
    ref_vs: T,
    ref_dn: T,
    incidence_deg: T,
) -> Vec<T> {
    top_vs
        .iter()
        .zip(top_dn)
        .map(|(&vs, &dn)| impedance_amplification(vs, dn, ref_vs, ref_dn, incidence_deg))
        .collect()
}
