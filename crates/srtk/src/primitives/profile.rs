//! Layered soil profile model.
//!
//! ## Purpose
//!
//! This module defines the immutable soil column consumed by every solver:
//! an ordered sequence of layers, top-down, whose last element is the
//! semi-infinite half-space.
//!
//! ## Design notes
//!
//! * **Struct of arrays**: Layers are stored column-wise so solvers can
//!   borrow contiguous slices of thickness, velocity and density.
//! * **Two construction paths**: Positional records `[hl, vp, vs, dn, qp, qs]`
//!   and keyed records (`"hl"`, `"vs"`, ...) are both resolved here, once.
//!   Numeric code never sees the record shape.
//! * **Validated once**: A `SoilProfile` cannot exist in a malformed state.
//!
//! ## Key concepts
//!
//! * **Half-space**: The final layer. Its thickness is never used in finite
//!   sums; it is stored as given (conventionally 0).
//! * **Quality factors**: Optional; present on all layers or on none.
//!
//! ## Invariants
//!
//! * At least one layer.
//! * Every non-final layer has a strictly positive, finite thickness.
//! * All velocities and densities are strictly positive and finite.
//! * Quality factors, when present, are strictly positive and finite.
//!
//! ## Non-goals
//!
//! * This module does not support in-place insertion or deletion of layers.
//! * This module does not parse files.

// External dependencies
use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Internal dependencies
use crate::primitives::errors::SrtkError;

// ============================================================================
// Layer Keys
// ============================================================================

/// Parameter keys of a layer record, in positional order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerKey {
    /// Thickness in meters (`hl`).
    Thickness,
    /// Compressional velocity in m/s (`vp`).
    Vp,
    /// Shear velocity in m/s (`vs`).
    Vs,
    /// Density in kg/m3 (`dn`).
    Density,
    /// Compressional quality factor (`qp`).
    Qp,
    /// Shear quality factor (`qs`).
    Qs,
}

impl LayerKey {
    /// Positional order of a layer record.
    pub const ORDER: [LayerKey; 6] = [
        LayerKey::Thickness,
        LayerKey::Vp,
        LayerKey::Vs,
        LayerKey::Density,
        LayerKey::Qp,
        LayerKey::Qs,
    ];

    /// Number of leading positional values that are mandatory.
    pub const REQUIRED: usize = 4;

    /// Short key used in keyed records.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Thickness => "hl",
            Self::Vp => "vp",
            Self::Vs => "vs",
            Self::Density => "dn",
            Self::Qp => "qp",
            Self::Qs => "qs",
        }
    }

    /// Parse a short key.
    pub fn parse(key: &str) -> Option<Self> {
        Self::ORDER.iter().copied().find(|k| k.as_str() == key)
    }
}

// ============================================================================
// Layer Record
// ============================================================================

/// A single layer record, as supplied by a caller.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound(deserialize = "T: Deserialize<'de>")))]
pub struct Layer<T> {
    /// Thickness in meters (ignored for the half-space).
    #[cfg_attr(feature = "serde", serde(rename = "hl"))]
    pub thickness: T,

    /// Compressional-wave velocity in m/s.
    pub vp: T,

    /// Shear-wave velocity in m/s.
    pub vs: T,

    /// Density in kg/m3.
    #[cfg_attr(feature = "serde", serde(rename = "dn"))]
    pub density: T,

    /// Compressional quality factor.
    #[cfg_attr(feature = "serde", serde(default))]
    pub qp: Option<T>,

    /// Shear quality factor.
    #[cfg_attr(feature = "serde", serde(default))]
    pub qs: Option<T>,
}

impl<T: Float> Layer<T> {
    /// Create an elastic layer.
    pub fn new(thickness: T, vp: T, vs: T, density: T) -> Self {
        Self {
            thickness,
            vp,
            vs,
            density,
            qp: None,
            qs: None,
        }
    }

    /// Attach compressional and shear quality factors.
    pub fn with_quality(mut self, qp: T, qs: T) -> Self {
        self.qp = Some(qp);
        self.qs = Some(qs);
        self
    }

    /// Build a layer from a positional record `[hl, vp, vs, dn, qp, qs]`.
    ///
    /// The first four values are mandatory; missing trailing quality
    /// factors mean an elastic layer.
    pub fn from_record(values: &[T]) -> Result<Self, SrtkError> {
        if values.len() < LayerKey::REQUIRED {
            return Err(SrtkError::IncompleteLayer {
                got: values.len(),
                min: LayerKey::REQUIRED,
            });
        }
        if values.len() > LayerKey::ORDER.len() {
            return Err(SrtkError::InvalidNumericValue(format!(
                "layer record has {} values, at most {} are allowed",
                values.len(),
                LayerKey::ORDER.len()
            )));
        }

        Ok(Self {
            thickness: values[0],
            vp: values[1],
            vs: values[2],
            density: values[3],
            qp: values.get(4).copied(),
            qs: values.get(5).copied(),
        })
    }

    /// Build a layer from keyed values (`"hl"`, `"vp"`, `"vs"`, `"dn"`, `"qp"`, `"qs"`).
    pub fn from_pairs<I, K>(pairs: I) -> Result<Self, SrtkError>
    where
        I: IntoIterator<Item = (K, T)>,
        K: AsRef<str>,
    {
        let mut slots: [Option<T>; 6] = [None; 6];
        for (key, value) in pairs {
            let key = key.as_ref();
            let parsed =
                LayerKey::parse(key).ok_or_else(|| SrtkError::UnknownParameter(key.to_string()))?;
            slots[parsed as usize] = Some(value);
        }

        let required = |idx: usize| {
            slots[idx].ok_or(SrtkError::MissingParameter {
                name: LayerKey::ORDER[idx].as_str(),
                layer: None,
            })
        };

        Ok(Self {
            thickness: required(0)?,
            vp: required(1)?,
            vs: required(2)?,
            density: required(3)?,
            qp: slots[4],
            qs: slots[5],
        })
    }
}

// ============================================================================
// Soil Profile
// ============================================================================

/// Immutable, validated one-dimensional soil column.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Layer<T>>", into = "Vec<Layer<T>>"))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "T: Float + Serialize",
        deserialize = "T: Float + Deserialize<'de>"
    ))
)]
pub struct SoilProfile<T> {
    thickness: Vec<T>,
    vp: Vec<T>,
    vs: Vec<T>,
    density: Vec<T>,
    qp: Option<Vec<T>>,
    qs: Option<Vec<T>>,
}

impl<T: Float> SoilProfile<T> {
    /// Build a profile from layer records, top-down.
    pub fn from_layers(layers: &[Layer<T>]) -> Result<Self, SrtkError> {
        if layers.is_empty() {
            return Err(SrtkError::EmptyProfile);
        }

        let qp = collect_quality(layers, "qp", |l| l.qp)?;
        let qs = collect_quality(layers, "qs", |l| l.qs)?;

        let profile = Self {
            thickness: layers.iter().map(|l| l.thickness).collect(),
            vp: layers.iter().map(|l| l.vp).collect(),
            vs: layers.iter().map(|l| l.vs).collect(),
            density: layers.iter().map(|l| l.density).collect(),
            qp,
            qs,
        };
        profile.check()?;
        Ok(profile)
    }

    /// Build a profile from positional records `[hl, vp, vs, dn, qp, qs]`.
    pub fn from_records<R: AsRef<[T]>>(records: &[R]) -> Result<Self, SrtkError> {
        let layers = records
            .iter()
            .map(|r| Layer::from_record(r.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_layers(&layers)
    }

    /// Build a profile from per-layer columns.
    pub fn from_columns(
        thickness: &[T],
        vp: &[T],
        vs: &[T],
        density: &[T],
        qp: Option<&[T]>,
        qs: Option<&[T]>,
    ) -> Result<Self, SrtkError> {
        let profile = Self {
            thickness: thickness.to_vec(),
            vp: vp.to_vec(),
            vs: vs.to_vec(),
            density: density.to_vec(),
            qp: qp.map(<[T]>::to_vec),
            qs: qs.map(<[T]>::to_vec),
        };
        profile.check()?;
        Ok(profile)
    }

    fn check(&self) -> Result<(), SrtkError> {
        validate_columns(
            &self.thickness,
            &[("vp", &self.vp), ("vs", &self.vs), ("dn", &self.density)],
        )?;
        if let Some(qp) = &self.qp {
            validate_columns(&self.thickness, &[("qp", qp)])?;
        }
        if let Some(qs) = &self.qs {
            validate_columns(&self.thickness, &[("qs", qs)])?;
        }
        Ok(())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of layers, half-space included.
    pub fn len(&self) -> usize {
        self.thickness.len()
    }

    /// Always false; a profile holds at least the half-space.
    pub fn is_empty(&self) -> bool {
        self.thickness.is_empty()
    }

    /// Layer thicknesses in meters.
    pub fn thickness(&self) -> &[T] {
        &self.thickness
    }

    /// Compressional velocities in m/s.
    pub fn vp(&self) -> &[T] {
        &self.vp
    }

    /// Shear velocities in m/s.
    pub fn vs(&self) -> &[T] {
        &self.vs
    }

    /// Densities in kg/m3.
    pub fn density(&self) -> &[T] {
        &self.density
    }

    /// Compressional quality factors, if the profile carries them.
    pub fn qp(&self) -> Option<&[T]> {
        self.qp.as_deref()
    }

    /// Shear quality factors, if the profile carries them.
    pub fn qs(&self) -> Option<&[T]> {
        self.qs.as_deref()
    }

    /// The `i`-th layer as a record.
    pub fn layer(&self, i: usize) -> Option<Layer<T>> {
        if i >= self.len() {
            return None;
        }
        Some(Layer {
            thickness: self.thickness[i],
            vp: self.vp[i],
            vs: self.vs[i],
            density: self.density[i],
            qp: self.qp.as_ref().map(|q| q[i]),
            qs: self.qs.as_ref().map(|q| q[i]),
        })
    }

    /// The terminal half-space.
    pub fn half_space(&self) -> Layer<T> {
        // A validated profile is never empty.
        let last = self.len() - 1;
        Layer {
            thickness: self.thickness[last],
            vp: self.vp[last],
            vs: self.vs[last],
            density: self.density[last],
            qp: self.qp.as_ref().map(|q| q[last]),
            qs: self.qs.as_ref().map(|q| q[last]),
        }
    }

    /// Depth to the top of the half-space (sum of finite thicknesses).
    pub fn total_thickness(&self) -> T {
        self.thickness[..self.len() - 1]
            .iter()
            .fold(T::zero(), |acc, &h| acc + h)
    }

    /// Records of all layers, top-down.
    pub fn layers(&self) -> Vec<Layer<T>> {
        (0..self.len()).filter_map(|i| self.layer(i)).collect()
    }
}

impl<T: Float> TryFrom<Vec<Layer<T>>> for SoilProfile<T> {
    type Error = SrtkError;

    fn try_from(layers: Vec<Layer<T>>) -> Result<Self, Self::Error> {
        Self::from_layers(&layers)
    }
}

impl<T: Float> From<SoilProfile<T>> for Vec<Layer<T>> {
    fn from(profile: SoilProfile<T>) -> Self {
        profile.layers()
    }
}

// ============================================================================
// Validation Helpers
// ============================================================================

/// Validate per-layer columns against a thickness column.
///
/// Checks, in order: non-empty, matching lengths, finite positive thickness
/// on every non-final layer, finite non-negative half-space thickness, and
/// finite positive values in every property column.
pub fn validate_columns<T: Float>(
    thickness: &[T],
    properties: &[(&'static str, &[T])],
) -> Result<(), SrtkError> {
    let n = thickness.len();
    if n == 0 {
        return Err(SrtkError::EmptyProfile);
    }

    for &(name, column) in properties {
        if column.len() != n {
            return Err(SrtkError::MismatchedLengths {
                name,
                expected: n,
                got: column.len(),
            });
        }
    }

    for (layer, &h) in thickness[..n - 1].iter().enumerate() {
        if !h.is_finite() || h <= T::zero() {
            return Err(SrtkError::InvalidThickness {
                layer,
                value: h.to_f64().unwrap_or(f64::NAN),
            });
        }
    }
    let last = thickness[n - 1];
    if !last.is_finite() || last < T::zero() {
        return Err(SrtkError::InvalidThickness {
            layer: n - 1,
            value: last.to_f64().unwrap_or(f64::NAN),
        });
    }

    for &(name, column) in properties {
        for (layer, &v) in column.iter().enumerate() {
            if !v.is_finite() || v <= T::zero() {
                return Err(SrtkError::InvalidProperty {
                    name,
                    layer,
                    value: v.to_f64().unwrap_or(f64::NAN),
                });
            }
        }
    }

    Ok(())
}

fn collect_quality<T, F>(
    layers: &[Layer<T>],
    name: &'static str,
    get: F,
) -> Result<Option<Vec<T>>, SrtkError>
where
    T: Float,
    F: Fn(&Layer<T>) -> Option<T>,
{
    let present = get(&layers[0]).is_some();
    if let Some(layer) = layers.iter().position(|l| get(l).is_some() != present) {
        return Err(SrtkError::InconsistentQuality { name, layer });
    }
    Ok(present.then(|| layers.iter().filter_map(&get).collect()))
}
