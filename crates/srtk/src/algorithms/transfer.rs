//! SH-wave transfer function by the Knopoff layer-matrix method.
//!
//! ## Purpose
//!
//! This module computes the complex SH displacement at arbitrary depths of a
//! layered column excited by a unit-amplitude wave incident from the
//! half-space, for an arbitrary angle of incidence, with or without
//! anelastic attenuation.
//!
//! ## Design notes
//!
//! * **Implicit scheme**: The up- and down-going amplitudes of every layer
//!   are the unknowns of one `2L × 2L` complex system per frequency.
//! * **Frequency-independent damping**: Quality factors enter through the
//!   complex velocity `v · 2iQ / (2iQ − 1)`.
//! * **Prepared once**: Refraction angles, slowness and shear moduli do not
//!   depend on frequency and are computed when the system is built.
//! * **Failure isolation**: A singular matrix yields
//!   [`FrequencyResponse::Singular`] for that frequency only.
//!
//! ## Key concepts
//!
//! * **Snell's law**: `sin θ / v` is constant across interfaces, and the
//!   half-space angle equals the incidence angle.
//! * **Slowness term**: `ns = cos θ / v`; phase factors are `exp(±i ω ns h)`.
//! * **Shear impedance term**: `μ · ns` with `μ = ρ v²`.
//!
//! ## Invariants
//!
//! * Row 0 enforces the free surface, rows `2l+1, 2l+2` enforce displacement
//!   and traction continuity at interface `l`, the last row fixes the
//!   incident amplitude to one.
//! * Complex refraction angles are expected when velocities are complex.
//!
//! ## Non-goals
//!
//! * This module does not model P-SV coupling or non-linear soil behavior.
//! * This module does not validate inputs (handled by `validator`).

// External dependencies
use num_complex::Complex;
use num_traits::Float;

// Internal dependencies
use crate::math::average::{interface_depths, locate_layer};
use crate::math::linalg::FloatLinalg;

// ============================================================================
// Per-Frequency Output
// ============================================================================

/// Displacements at all requested depths for one frequency.
#[derive(Debug, Clone, PartialEq)]
pub enum FrequencyResponse<T> {
    /// The layer system was solved; one displacement per depth.
    Solved(Vec<Complex<T>>),

    /// The layer matrix is singular at this frequency.
    Singular,
}

/// A requested depth resolved to its layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthPoint<T> {
    /// Absolute depth in meters.
    pub depth: T,

    /// Index of the containing layer.
    pub layer: usize,

    /// Depth below the top of the containing layer.
    pub offset: T,
}

// ============================================================================
// Material Helpers
// ============================================================================

/// Complex velocity embedding frequency-independent damping.
pub fn complex_velocity<T: Float>(velocity: T, quality: T) -> Complex<T> {
    let two_iq = Complex::new(T::zero(), (T::one() + T::one()) * quality);
    two_iq / (two_iq - T::one()) * velocity
}

/// Sine of the propagation angle in every layer.
///
/// Back-substitutes the bidiagonal Snell system
/// `sin θ_l / v_l − sin θ_{l+1} / v_{l+1} = 0` from the half-space, whose
/// sine is fixed by the incidence angle.
pub fn refraction_sines<T: Float>(velocity: &[Complex<T>], incidence_rad: T) -> Vec<Complex<T>> {
    let n = velocity.len();
    let mut sines = vec![Complex::new(T::zero(), T::zero()); n];
    sines[n - 1] = Complex::new(incidence_rad.sin(), T::zero());
    for l in (0..n - 1).rev() {
        sines[l] = sines[l + 1] / velocity[l + 1] * velocity[l];
    }
    sines
}

// ============================================================================
// Layer System
// ============================================================================

/// Frequency-independent part of the Knopoff layer system.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerSystem<T> {
    thickness: Vec<T>,
    bounds: Vec<T>,
    slowness: Vec<Complex<T>>,
    modulus: Vec<Complex<T>>,
}

impl<T: FloatLinalg> LayerSystem<T> {
    /// Prepare the system from validated per-layer columns.
    ///
    /// `quality` enables attenuation; `incidence_deg` is measured from the
    /// vertical, in degrees.
    pub fn new(
        thickness: &[T],
        velocity: &[T],
        density: &[T],
        quality: Option<&[T]>,
        incidence_deg: T,
    ) -> Self {
        let velocity: Vec<Complex<T>> = match quality {
            Some(q) => velocity
                .iter()
                .zip(q)
                .map(|(&v, &q)| complex_velocity(v, q))
                .collect(),
            None => velocity.iter().map(|&v| Complex::new(v, T::zero())).collect(),
        };

        let sines = refraction_sines(&velocity, incidence_deg.to_radians());

        let slowness = sines
            .iter()
            .zip(&velocity)
            .map(|(s, &v)| s.asin().cos() / v)
            .collect();

        let modulus = velocity
            .iter()
            .zip(density)
            .map(|(&v, &rho)| v * v * rho)
            .collect();

        Self {
            thickness: thickness.to_vec(),
            bounds: interface_depths(thickness),
            slowness,
            modulus,
        }
    }

    /// Number of layers, half-space included.
    pub fn layers(&self) -> usize {
        self.thickness.len()
    }

    /// Depth of every layer top, free surface included.
    pub fn interfaces(&self) -> &[T] {
        &self.bounds
    }

    /// Slowness term `cos θ / v` of every layer.
    pub fn slowness(&self) -> &[Complex<T>] {
        &self.slowness
    }

    /// Complex shear modulus `ρ v²` of every layer.
    pub fn modulus(&self) -> &[Complex<T>] {
        &self.modulus
    }

    /// Resolve depths to their containing layers.
    pub fn locate(&self, depths: &[T]) -> Vec<DepthPoint<T>> {
        depths
            .iter()
            .map(|&depth| {
                let (layer, offset) = locate_layer(&self.bounds, depth);
                DepthPoint {
                    depth,
                    layer,
                    offset,
                }
            })
            .collect()
    }

    /// Assemble the `2L × 2L` layer matrix (row-major) at angular frequency `omega`.
    pub fn assemble(&self, omega: T) -> Vec<Complex<T>> {
        let n = 2 * self.layers();
        let zero = Complex::new(T::zero(), T::zero());
        let one = Complex::new(T::one(), T::zero());
        let mut mat = vec![zero; n * n];
        let at = |row: usize, col: usize| row * n + col;

        // Free surface: no traction
        mat[at(0, 0)] = one;
        mat[at(0, 1)] = -one;

        for l in 0..self.layers() - 1 {
            let row = 2 * l + 1;
            let col = 2 * l;

            let phase = Complex::new(T::zero(), omega) * self.slowness[l] * self.thickness[l];
            let down = phase.exp();
            let up = (-phase).exp();

            let upper = self.modulus[l] * self.slowness[l];
            let lower = self.modulus[l + 1] * self.slowness[l + 1];

            // Displacement continuity
            mat[at(row, col)] = down;
            mat[at(row, col + 1)] = up;
            mat[at(row, col + 2)] = -one;
            mat[at(row, col + 3)] = -one;

            // Traction continuity
            mat[at(row + 1, col)] = upper * down;
            mat[at(row + 1, col + 1)] = -(upper * up);
            mat[at(row + 1, col + 2)] = -lower;
            mat[at(row + 1, col + 3)] = lower;
        }

        // Unit incident wave in the half-space
        mat[at(n - 1, n - 1)] = one;

        mat
    }

    /// Solve for the `2L` wave amplitudes at `frequency` (Hz).
    ///
    /// Returns `None` when the layer matrix is singular.
    pub fn amplitudes(&self, frequency: T) -> Option<Vec<Complex<T>>> {
        let n = 2 * self.layers();
        let omega = angular_frequency(frequency);

        let mut rhs = vec![Complex::new(T::zero(), T::zero()); n];
        rhs[n - 1] = Complex::new(T::one(), T::zero());

        T::solve_complex(&self.assemble(omega), &rhs, n)
    }

    /// Displacement at a resolved depth, given the layer amplitudes.
    pub fn displacement(
        &self,
        amplitudes: &[Complex<T>],
        omega: T,
        point: &DepthPoint<T>,
    ) -> Complex<T> {
        let l = point.layer;
        let phase = Complex::new(T::zero(), omega) * self.slowness[l] * point.offset;
        amplitudes[2 * l] * phase.exp() + amplitudes[2 * l + 1] * (-phase).exp()
    }

    /// Displacements at all resolved depths for one frequency.
    pub fn solve_frequency(&self, frequency: T, points: &[DepthPoint<T>]) -> FrequencyResponse<T> {
        let omega = angular_frequency(frequency);
        match self.amplitudes(frequency) {
            Some(amplitudes) => FrequencyResponse::Solved(
                points
                    .iter()
                    .map(|p| self.displacement(&amplitudes, omega, p))
                    .collect(),
            ),
            None => FrequencyResponse::Singular,
        }
    }
}

/// Angular frequency `2π f`.
pub fn angular_frequency<T: Float>(frequency: T) -> T {
    T::from(2.0 * std::f64::consts::PI).unwrap_or_else(T::nan) * frequency
}

// ============================================================================
// Sequential Pass
// ============================================================================

/// Solve every frequency in order on the current thread.
pub fn frequency_pass_sequential<T: FloatLinalg>(
    system: &LayerSystem<T>,
    frequencies: &[T],
    points: &[DepthPoint<T>],
) -> Vec<FrequencyResponse<T>> {
    frequencies
        .iter()
        .map(|&f| system.solve_frequency(f, points))
        .collect()
}
