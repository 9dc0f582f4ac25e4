//! Statistical family of each site-response quantity.
//!
//! ## Purpose
//!
//! Results from several alternative profiles of one site are summarized by
//! an external aggregator. This module tells it, per quantity, whether the
//! summary is taken in log space or in linear space.
//!
//! ## Key concepts
//!
//! * **Log-normal**: Velocities and amplifications (strictly positive,
//!   multiplicative scatter).
//! * **Normal**: Kappa.
//!
//! ## Non-goals
//!
//! * This module does not compute means or spreads.

/// Distribution family used to summarize a quantity across profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distribution {
    /// Summaries are taken on `ln(x)`.
    LogNormal,

    /// Summaries are taken on `x`.
    Normal,
}

/// Quantities produced by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    /// Travel-time average velocity (e.g. Vs30).
    AverageVelocity,

    /// Quarter-wavelength depth, velocity and density.
    QuarterWavelength,

    /// Site kappa(0).
    Kappa,

    /// Impedance amplification.
    ImpedanceAmplification,

    /// SH transfer function amplitude.
    TransferFunction,
}

impl Quantity {
    /// All quantities.
    pub const ALL: [Quantity; 5] = [
        Quantity::AverageVelocity,
        Quantity::QuarterWavelength,
        Quantity::Kappa,
        Quantity::ImpedanceAmplification,
        Quantity::TransferFunction,
    ];

    /// Distribution family of this quantity.
    pub fn distribution(self) -> Distribution {
        match self {
            Self::Kappa => Distribution::Normal,
            Self::AverageVelocity
            | Self::QuarterWavelength
            | Self::ImpedanceAmplification
            | Self::TransferFunction => Distribution::LogNormal,
        }
    }

    /// Short key of this quantity.
    pub fn key(self) -> &'static str {
        match self {
            Self::AverageVelocity => "vz",
            Self::QuarterWavelength => "qwl",
            Self::Kappa => "k0",
            Self::ImpedanceAmplification => "imp",
            Self::TransferFunction => "shtf",
        }
    }
}
