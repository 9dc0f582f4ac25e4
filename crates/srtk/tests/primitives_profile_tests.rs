#![cfg(feature = "dev")]
//! Tests for the soil profile model.
//!
//! These tests verify profile construction and validation:
//! - Positional, keyed, layer and column construction paths
//! - Rejection of malformed profiles
//! - Accessors and derived geometry
//!
//! ## Test Organization
//!
//! 1. **Construction** - The four construction paths agree
//! 2. **Validation** - Malformed inputs are rejected with the right error
//! 3. **Accessors** - Layers, half-space and column views

use approx::assert_relative_eq;

use srtk::internals::primitives::profile::validate_columns;
use srtk::prelude::*;

fn reference_layers() -> Vec<Layer<f64>> {
    vec![
        Layer::new(10.0, 300.0, 150.0, 1800.0).with_quality(20.0, 10.0),
        Layer::new(50.0, 1000.0, 500.0, 2000.0).with_quality(40.0, 20.0),
        Layer::new(0.0, 2000.0, 1000.0, 2400.0).with_quality(200.0, 100.0),
    ]
}

// ============================================================================
// Construction Tests
// ============================================================================

/// Test that all construction paths build the same profile.
///
/// Verifies layers, positional records, keyed records and columns agree.
#[test]
fn test_construction_paths_agree() {
    let from_layers = SoilProfile::from_layers(&reference_layers()).unwrap();

    let from_records = SoilProfile::from_records(&[
        [10.0, 300.0, 150.0, 1800.0, 20.0, 10.0],
        [50.0, 1000.0, 500.0, 2000.0, 40.0, 20.0],
        [0.0, 2000.0, 1000.0, 2400.0, 200.0, 100.0],
    ])
    .unwrap();

    let keyed: Vec<Layer<f64>> = [
        [("hl", 10.0), ("vp", 300.0), ("vs", 150.0), ("dn", 1800.0), ("qp", 20.0), ("qs", 10.0)],
        [("qs", 20.0), ("qp", 40.0), ("dn", 2000.0), ("vs", 500.0), ("vp", 1000.0), ("hl", 50.0)],
        [("hl", 0.0), ("vs", 1000.0), ("vp", 2000.0), ("dn", 2400.0), ("qs", 100.0), ("qp", 200.0)],
    ]
    .into_iter()
    .map(Layer::from_pairs)
    .collect::<Result<_, _>>()
    .unwrap();
    let from_pairs = SoilProfile::from_layers(&keyed).unwrap();

    let from_columns = SoilProfile::from_columns(
        &[10.0, 50.0, 0.0],
        &[300.0, 1000.0, 2000.0],
        &[150.0, 500.0, 1000.0],
        &[1800.0, 2000.0, 2400.0],
        Some(&[20.0, 40.0, 200.0]),
        Some(&[10.0, 20.0, 100.0]),
    )
    .unwrap();

    assert_eq!(from_layers, from_records);
    assert_eq!(from_layers, from_pairs);
    assert_eq!(from_layers, from_columns);
}

/// Test positional records without quality factors.
///
/// Verifies four-value records build an elastic profile.
#[test]
fn test_elastic_records() {
    let profile = SoilProfile::from_records(&[[20.0, 400.0, 200.0, 1800.0], [0.0, 2000.0, 1000.0, 2400.0]])
        .unwrap();
    assert_eq!(profile.len(), 2);
    assert!(profile.qs().is_none());
    assert!(profile.qp().is_none());
}

/// Test keyed records with an unknown key.
///
/// Verifies the key is reported.
#[test]
fn test_from_pairs_unknown_key() {
    let err = Layer::from_pairs([("hl", 1.0), ("vp", 2.0), ("vs", 1.0), ("rho", 2.0)]).unwrap_err();
    assert_eq!(err, SrtkError::UnknownParameter("rho".to_string()));
}

/// Test keyed records with a missing mandatory key.
///
/// Verifies the missing key is reported.
#[test]
fn test_from_pairs_missing_key() {
    let err = Layer::from_pairs([("hl", 1.0), ("vp", 2.0), ("vs", 1.0)]).unwrap_err();
    assert_eq!(
        err,
        SrtkError::MissingParameter {
            name: "dn",
            layer: None
        }
    );
}

/// Test positional records of the wrong length.
///
/// Verifies short and long records are rejected.
#[test]
fn test_from_record_length() {
    assert_eq!(
        Layer::from_record(&[1.0, 2.0, 3.0]).unwrap_err(),
        SrtkError::IncompleteLayer { got: 3, min: 4 }
    );
    assert!(matches!(
        Layer::from_record(&[1.0; 7]),
        Err(SrtkError::InvalidNumericValue(_))
    ));
}

// ============================================================================
// Validation Tests
// ============================================================================

/// Test that an empty profile is rejected.
#[test]
fn test_empty_profile() {
    let layers: Vec<Layer<f64>> = Vec::new();
    assert_eq!(
        SoilProfile::from_layers(&layers).unwrap_err(),
        SrtkError::EmptyProfile
    );
}

/// Test that mismatched column lengths are rejected.
///
/// Verifies the offending column is named.
#[test]
fn test_mismatched_lengths() {
    let err = SoilProfile::from_columns(
        &[10.0, 0.0],
        &[300.0, 2000.0],
        &[150.0],
        &[1800.0, 2400.0],
        None,
        None,
    )
    .unwrap_err();
    assert_eq!(
        err,
        SrtkError::MismatchedLengths {
            name: "vs",
            expected: 2,
            got: 1
        }
    );
}

/// Test that non-positive thickness on a finite layer is rejected.
///
/// Verifies the layer index is reported and the half-space is exempt.
#[test]
fn test_invalid_thickness() {
    let err = validate_columns(&[10.0, 0.0, 0.0], &[("vs", &[1.0, 2.0, 3.0][..])]).unwrap_err();
    assert_eq!(err, SrtkError::InvalidThickness { layer: 1, value: 0.0 });

    let err = validate_columns(&[-5.0, 0.0], &[("vs", &[1.0, 2.0][..])]).unwrap_err();
    assert_eq!(err, SrtkError::InvalidThickness { layer: 0, value: -5.0 });

    assert!(validate_columns(&[10.0, 0.0], &[("vs", &[1.0, 2.0][..])]).is_ok());
}

/// Test that non-positive or non-finite properties are rejected.
#[test]
fn test_invalid_property() {
    let err = validate_columns(&[10.0, 0.0], &[("dn", &[1800.0, 0.0][..])]).unwrap_err();
    assert_eq!(
        err,
        SrtkError::InvalidProperty {
            name: "dn",
            layer: 1,
            value: 0.0
        }
    );

    let err = validate_columns(&[10.0, 0.0], &[("vs", &[f64::NAN, 1.0][..])]).unwrap_err();
    assert!(matches!(err, SrtkError::InvalidProperty { name: "vs", layer: 0, .. }));
}

/// Test that quality factors must be all-or-none.
///
/// Verifies the first inconsistent layer is reported.
#[test]
fn test_inconsistent_quality() {
    let layers = vec![
        Layer::new(10.0, 300.0, 150.0, 1800.0).with_quality(20.0, 10.0),
        Layer::new(0.0, 2000.0, 1000.0, 2400.0),
    ];
    assert_eq!(
        SoilProfile::from_layers(&layers).unwrap_err(),
        SrtkError::InconsistentQuality {
            name: "qp",
            layer: 1
        }
    );
}

/// Test error messages.
///
/// Verifies `Display` names the offending parameter.
#[test]
fn test_error_display() {
    let err = SrtkError::MismatchedLengths {
        name: "vs",
        expected: 3,
        got: 2,
    };
    assert!(err.to_string().contains("vs"));

    let err = SrtkError::UnknownParameter("rho".to_string());
    assert!(err.to_string().contains("rho"));
}

// ============================================================================
// Accessor Tests
// ============================================================================

/// Test layer access, half-space and total thickness.
#[test]
fn test_accessors() {
    let profile = SoilProfile::from_layers(&reference_layers()).unwrap();

    assert_eq!(profile.len(), 3);
    assert!(!profile.is_empty());
    assert_eq!(profile.layer(1), Some(reference_layers()[1]));
    assert_eq!(profile.layer(3), None);
    assert_eq!(profile.half_space().vs, 1000.0);
    assert_relative_eq!(profile.total_thickness(), 60.0, epsilon = 1e-12);
    assert_eq!(profile.layers(), reference_layers());
    assert_eq!(profile.interface_depths(), vec![0.0, 10.0, 60.0]);
}

/// Test column views by key.
///
/// Verifies optional columns are reported as absent.
#[test]
fn test_column_by_key() {
    let profile = SoilProfile::from_layers(&reference_layers()).unwrap();
    assert_eq!(profile.column(LayerKey::Vs), Some(&[150.0, 500.0, 1000.0][..]));
    assert_eq!(profile.column(LayerKey::Qs), Some(&[10.0, 20.0, 100.0][..]));

    let elastic = SoilProfile::from_records(&[[0.0, 2000.0, 1000.0, 2400.0]]).unwrap();
    assert_eq!(elastic.column(LayerKey::Qs), None);
}

/// Test layer key parsing.
#[test]
fn test_layer_key_parse() {
    for key in LayerKey::ORDER {
        assert_eq!(LayerKey::parse(key.as_str()), Some(key));
    }
    assert_eq!(LayerKey::parse("rho"), None);
}
