//! Output types and result structures for site-response operations.
//!
//! ## Purpose
//!
//! This module defines the result tables of the two frequency-domain
//! solvers: the depth × frequency transfer function and the
//! per-frequency quarter-wavelength triples.
//!
//! ## Design notes
//!
//! * **Dense storage**: The transfer function is stored row-major, one row
//!   per depth and one column per frequency.
//! * **Failure markers**: Undefined entries are NaN and carry an explicit
//!   per-frequency status, so partial failures are never hidden.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * `values.len() == depths.len() * frequencies.len()`.
//! * A singular frequency has NaN in every depth of its column.
//! * Every per-frequency vector has the length of the frequency axis.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations beyond simple derived views.
//! * This module does not aggregate results across profiles.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_complex::Complex;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::impedance::impedance_amplification_array;
use crate::algorithms::quarter_wavelength::SearchStatus;
use crate::engine::validator::Validator;
use crate::primitives::errors::SrtkError;

/// Rows shown at each end of a long table.
const DISPLAY_EDGE_ROWS: usize = 10;

/// Depth columns shown in the transfer-function table.
const DISPLAY_MAX_DEPTHS: usize = 4;

// ============================================================================
// Transfer Function
// ============================================================================

/// Outcome of the layer-matrix solve at one frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrequencyStatus {
    /// All depths hold a displacement.
    Solved,

    /// The layer matrix is singular; the whole column is NaN.
    Singular,
}

/// Complex SH displacement at every (depth, frequency) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferFunctionResult<T> {
    /// Frequency axis in Hz.
    pub frequencies: Vec<T>,

    /// Evaluation depths in meters.
    pub depths: Vec<T>,

    /// Displacements, row-major (`depths.len()` rows of `frequencies.len()`).
    pub values: Vec<Complex<T>>,

    /// Solve status of every frequency.
    pub status: Vec<FrequencyStatus>,
}

impl<T: Float> TransferFunctionResult<T> {
    /// Number of frequencies.
    pub fn n_frequencies(&self) -> usize {
        self.frequencies.len()
    }

    /// Number of depths.
    pub fn n_depths(&self) -> usize {
        self.depths.len()
    }

    /// Displacement at depth index `d` and frequency index `f`.
    pub fn get(&self, d: usize, f: usize) -> Option<Complex<T>> {
        if d >= self.n_depths() || f >= self.n_frequencies() {
            return None;
        }
        Some(self.values[d * self.n_frequencies() + f])
    }

    /// All frequencies at depth index `d`.
    pub fn row(&self, d: usize) -> Option<&[Complex<T>]> {
        let width = self.n_frequencies();
        self.values.get(d * width..(d + 1) * width)
    }

    /// Amplitude (modulus) at depth index `d` and frequency index `f`.
    pub fn amplitude(&self, d: usize, f: usize) -> Option<T> {
        self.get(d, f).map(|c| c.norm())
    }

    /// Amplitude spectrum at depth index `d`.
    pub fn amplitudes(&self, d: usize) -> Option<Vec<T>> {
        self.row(d).map(|row| row.iter().map(|c| c.norm()).collect())
    }

    /// Amplitude spectrum at the free surface, if depth zero was requested.
    pub fn surface_amplitudes(&self) -> Option<Vec<T>> {
        let d = self.depths.iter().position(|&z| z == T::zero())?;
        self.amplitudes(d)
    }

    /// Amplitude matrix, row-major like `values`.
    pub fn amplitude_matrix(&self) -> Vec<T> {
        self.values.iter().map(|c| c.norm()).collect()
    }

    /// Frequencies whose layer matrix was singular.
    pub fn singular_frequencies(&self) -> Vec<T> {
        self.frequencies
            .iter()
            .zip(&self.status)
            .filter(|(_, s)| **s == FrequencyStatus::Singular)
            .map(|(&f, _)| f)
            .collect()
    }

    /// Number of undefined frequency columns.
    pub fn undefined_count(&self) -> usize {
        self.status
            .iter()
            .filter(|&&s| s == FrequencyStatus::Singular)
            .count()
    }

    /// Whether every frequency was solved.
    pub fn is_complete(&self) -> bool {
        self.undefined_count() == 0
    }
}

impl<T: Float + Display> Display for TransferFunctionResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Frequencies: {}", self.n_frequencies())?;
        writeln!(f, "  Depths:      {}", self.n_depths())?;
        writeln!(f, "  Undefined:   {}", self.undefined_count())?;
        writeln!(f)?;

        writeln!(f, "Amplitude:")?;
        let shown = self.n_depths().min(DISPLAY_MAX_DEPTHS);
        write!(f, "{:>12}", "Freq_Hz")?;
        for z in &self.depths[..shown] {
            write!(f, " {:>12}", format!("z={:.2}", z))?;
        }
        if shown < self.n_depths() {
            write!(f, " {:>4}", "...")?;
        }
        writeln!(f)?;
        writeln!(f, "{:-<1$}", "", 12 + 13 * shown)?;

        let n = self.n_frequencies();
        for i in 0..n {
            if n > 2 * DISPLAY_EDGE_ROWS && i == DISPLAY_EDGE_ROWS {
                writeln!(f, "{:>12}", "...")?;
            }
            if n > 2 * DISPLAY_EDGE_ROWS && i >= DISPLAY_EDGE_ROWS && i < n - DISPLAY_EDGE_ROWS {
                continue;
            }

            write!(f, "{:>12.4}", self.frequencies[i])?;
            for d in 0..shown {
                match self.amplitude(d, i) {
                    Some(a) => write!(f, " {:>12.6}", a)?,
                    None => write!(f, " {:>12}", "-")?,
                }
            }
            if self.status[i] == FrequencyStatus::Singular {
                write!(f, "  (singular)")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

// ============================================================================
// Quarter Wavelength
// ============================================================================

/// Quarter-wavelength depth, velocity and density at every frequency.
#[derive(Debug, Clone, PartialEq)]
pub struct QuarterWavelengthResult<T> {
    /// Frequency axis in Hz.
    pub frequencies: Vec<T>,

    /// Quarter-wavelength depth (m).
    pub depth: Vec<T>,

    /// Travel-time average velocity down to `depth`.
    pub velocity: Vec<T>,

    /// Depth-weighted average density down to `depth`.
    pub density: Vec<T>,

    /// Absolute misfit of each search.
    pub residual: Vec<T>,

    /// Search status of every frequency.
    pub status: Vec<SearchStatus>,
}

impl<T: Float> QuarterWavelengthResult<T> {
    /// Number of frequencies.
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    /// Whether the result is empty.
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Number of frequencies without a converged solution.
    pub fn undefined_count(&self) -> usize {
        self.status
            .iter()
            .filter(|&&s| s != SearchStatus::Converged)
            .count()
    }

    /// Whether every frequency converged.
    pub fn is_complete(&self) -> bool {
        self.undefined_count() == 0
    }

    /// Impedance amplification of the quarter-wavelength parameters.
    ///
    /// The reference velocity and density default to the last frequency's
    /// values (the shallowest averaging, for an increasing axis).
    pub fn impedance_amplification(
        &self,
        ref_vs: Option<T>,
        ref_dn: Option<T>,
        incidence_deg: T,
    ) -> core::result::Result<Vec<T>, SrtkError> {
        if self.is_empty() {
            return Err(SrtkError::PreconditionNotMet(
                "quarter-wavelength result has no frequencies".to_string(),
            ));
        }
        Validator::validate_reference("vs", ref_vs)?;
        Validator::validate_reference("dn", ref_dn)?;
        Validator::validate_incidence_angle(incidence_deg)?;

        let last = self.len() - 1;
        let ref_vs = ref_vs.unwrap_or(self.velocity[last]);
        let ref_dn = ref_dn.unwrap_or(self.density[last]);

        Ok(impedance_amplification_array(
            &self.velocity,
            &self.density,
            ref_vs,
            ref_dn,
            incidence_deg,
        ))
    }
}

impl<T: Float + Display> Display for QuarterWavelengthResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Frequencies: {}", self.len())?;
        writeln!(f, "  Undefined:   {}", self.undefined_count())?;
        writeln!(f)?;

        writeln!(f, "Quarter-Wavelength Parameters:")?;
        writeln!(
            f,
            "{:>12} {:>12} {:>12} {:>12} {:>12}",
            "Freq_Hz", "Depth_m", "Vs_avg", "Dn_avg", "Status"
        )?;
        writeln!(f, "{:-<64}", "")?;

        let n = self.len();
        for i in 0..n {
            if n > 2 * DISPLAY_EDGE_ROWS && i == DISPLAY_EDGE_ROWS {
                writeln!(f, "{:>12}", "...")?;
            }
            if n > 2 * DISPLAY_EDGE_ROWS && i >= DISPLAY_EDGE_ROWS && i < n - DISPLAY_EDGE_ROWS {
                continue;
            }

            let status = match self.status[i] {
                SearchStatus::Converged => "ok",
                SearchStatus::Unbounded => "unbounded",
                SearchStatus::NotConverged => "no-conv",
            };
            writeln!(
                f,
                "{:>12.4} {:>12.3} {:>12.3} {:>12.3} {:>12}",
                self.frequencies[i], self.depth[i], self.velocity[i], self.density[i], status
            )?;
        }

        Ok(())
    }
}
