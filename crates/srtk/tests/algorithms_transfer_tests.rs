#![cfg(feature = "dev")]
//! Tests for the Knopoff layer-matrix transfer function.
//!
//! These tests verify the SH-wave solver against closed-form results:
//! - Free-surface doubling in a homogeneous half-space
//! - Snell refraction across layers
//! - Quarter-wavelength resonance of a single layer over a half-space
//! - Attenuation and failure isolation
//!
//! ## Test Organization
//!
//! 1. **Material Helpers** - Complex velocity and refraction
//! 2. **Half-Space** - Free-surface behavior
//! 3. **Layer over Half-Space** - Resonance and low-frequency limit
//! 4. **Executor** - Depth selection and singular isolation

use approx::{assert_abs_diff_eq, assert_relative_eq};
use num_complex::Complex;

use srtk::internals::algorithms::impedance::impedance_amplification;
use srtk::internals::algorithms::transfer::{
    DepthPoint, FrequencyResponse, LayerSystem, complex_velocity, frequency_pass_sequential,
    refraction_sines,
};
use srtk::prelude::*;

const PI: f64 = std::f64::consts::PI;

/// 20 m of 200 m/s soil over 1000 m/s rock.
fn soft_layer() -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    (vec![20.0, 0.0], vec![200.0, 1000.0], vec![1800.0, 2400.0])
}

// ============================================================================
// Material Helper Tests
// ============================================================================

/// Test the complex velocity of a weakly damped layer.
///
/// Verifies it tends to the real velocity for large quality factors.
#[test]
fn test_complex_velocity_limit() {
    let v = complex_velocity(250.0, 1e9);
    assert_relative_eq!(v.re, 250.0, epsilon = 1e-6);
    assert_abs_diff_eq!(v.im, 0.0, epsilon = 1e-6);

    // Damping adds a positive imaginary part
    let damped = complex_velocity(250.0, 10.0);
    assert!(damped.im > 0.0);
}

/// Test Snell refraction from the half-space upward.
///
/// Verifies `sin θ / v` is constant across layers.
#[test]
fn test_refraction_sines() {
    let velocity = [
        Complex::new(200.0, 0.0),
        Complex::new(500.0, 0.0),
        Complex::new(1000.0, 0.0),
    ];
    let sines = refraction_sines(&velocity, 30f64.to_radians());

    assert_relative_eq!(sines[2].re, 0.5, epsilon = 1e-12);
    assert_relative_eq!(sines[1].re, 0.25, epsilon = 1e-12);
    assert_relative_eq!(sines[0].re, 0.1, epsilon = 1e-12);
    for s in &sines {
        assert_abs_diff_eq!(s.im, 0.0, epsilon = 1e-15);
    }
}

/// Test the assembled matrix dimensions and boundary rows.
///
/// Verifies the free-surface and incident-wave rows.
#[test]
fn test_assemble_boundary_rows() {
    let (h, vs, dn) = soft_layer();
    let system = LayerSystem::new(&h, &vs, &dn, None, 0.0);
    let mat = system.assemble(2.0 * PI);

    let n = 4;
    assert_eq!(mat.len(), n * n);
    assert_eq!(mat[0], Complex::new(1.0, 0.0));
    assert_eq!(mat[1], Complex::new(-1.0, 0.0));
    assert_eq!(mat[n * n - 1], Complex::new(1.0, 0.0));
    for col in 0..n - 1 {
        assert_eq!(mat[(n - 1) * n + col], Complex::new(0.0, 0.0));
    }
}

// ============================================================================
// Half-Space Tests
// ============================================================================

/// Test free-surface doubling in a homogeneous half-space.
///
/// Verifies the surface displacement is twice the incident amplitude.
#[test]
fn test_half_space_doubling() {
    let system = LayerSystem::new(&[0.0], &[500.0], &[2000.0], None, 0.0);
    let points = system.locate(&[0.0]);

    for f in [0.01, 0.1, 1.0, 10.0] {
        match system.solve_frequency(f, &points) {
            FrequencyResponse::Solved(u) => assert_relative_eq!(u[0].norm(), 2.0, epsilon = 1e-10),
            FrequencyResponse::Singular => panic!("half-space should never be singular"),
        }
    }
}

/// Test the standing wave below the free surface.
///
/// Verifies `|u(z)| = 2 |cos(ω z cos θ / v)|` at oblique incidence.
#[test]
fn test_half_space_standing_wave() {
    let v = 500.0;
    let theta: f64 = 25.0;
    let system = LayerSystem::new(&[0.0], &[v], &[2000.0], None, theta);

    let depths = [0.0, 10.0, 37.5, 80.0];
    let points = system.locate(&depths);
    let f = 2.0;

    let FrequencyResponse::Solved(u) = system.solve_frequency(f, &points) else {
        panic!("half-space should never be singular");
    };

    let ns = theta.to_radians().cos() / v;
    for (z, ui) in depths.iter().zip(&u) {
        let expected = 2.0 * (2.0 * PI * f * ns * z).cos().abs();
        assert_abs_diff_eq!(ui.norm(), expected, epsilon = 1e-9);
    }
}

// ============================================================================
// Layer over Half-Space Tests
// ============================================================================

/// Test the fundamental resonance of a layer over a half-space.
///
/// Verifies the surface amplitude at `f0 = v1 / 4h` equals twice the
/// squared impedance amplification of the contrast.
#[test]
fn test_resonance_matches_impedance_contrast() {
    let (h, vs, dn) = soft_layer();
    let system = LayerSystem::new(&h, &vs, &dn, None, 0.0);
    let points = system.locate(&[0.0]);

    let f0 = vs[0] / (4.0 * h[0]);
    let FrequencyResponse::Solved(u) = system.solve_frequency(f0, &points) else {
        panic!("layer system should be regular");
    };

    let amp = impedance_amplification(vs[0], dn[0], vs[1], dn[1], 0.0);
    assert_relative_eq!(u[0].norm(), 2.0 * amp * amp, max_relative = 1e-9);
}

/// Test the zero-frequency limit.
///
/// Verifies the whole column moves rigidly with twice the incident amplitude.
#[test]
fn test_low_frequency_limit() {
    let (h, vs, dn) = soft_layer();
    let system = LayerSystem::new(&h, &vs, &dn, None, 0.0);
    let points = system.locate(&[0.0, 10.0, 20.0, 50.0]);

    for f in [0.0, 1e-4] {
        let FrequencyResponse::Solved(u) = system.solve_frequency(f, &points) else {
            panic!("layer system should be regular");
        };
        for ui in &u {
            assert_relative_eq!(ui.norm(), 2.0, epsilon = 1e-4);
        }
    }
}

/// Test that attenuation reduces the resonance peak.
#[test]
fn test_attenuation_damps_resonance() {
    let (h, vs, dn) = soft_layer();
    let qs = [10.0, 100.0];
    let f0 = vs[0] / (4.0 * h[0]);

    let elastic = LayerSystem::new(&h, &vs, &dn, None, 0.0);
    let damped = LayerSystem::new(&h, &vs, &dn, Some(&qs), 0.0);

    let surface = |s: &LayerSystem<f64>| match s.solve_frequency(f0, &s.locate(&[0.0])) {
        FrequencyResponse::Solved(u) => u[0].norm(),
        FrequencyResponse::Singular => f64::NAN,
    };

    let a_elastic = surface(&elastic);
    let a_damped = surface(&damped);
    assert!(a_damped < a_elastic);
    assert!(a_damped > 1.0);
}

/// Test that a profile without contrast behaves like a half-space.
///
/// Verifies unit impedance amplification matches a surface ratio of one.
#[test]
fn test_no_contrast_matches_unit_amplification() {
    let h = [15.0, 30.0, 0.0];
    let vs = [400.0, 400.0, 400.0];
    let dn = [2000.0, 2000.0, 2000.0];

    let system = LayerSystem::new(&h, &vs, &dn, None, 0.0);
    let points = system.locate(&[0.0]);
    let responses = frequency_pass_sequential(&system, &[0.05, 1.0, 3.3, 8.0], &points);

    let amp = impedance_amplification(vs[0], dn[0], vs[2], dn[2], 0.0);
    assert_relative_eq!(amp, 1.0, epsilon = 1e-12);

    for r in responses {
        let FrequencyResponse::Solved(u) = r else {
            panic!("layer system should be regular");
        };
        assert_relative_eq!(u[0].norm() / 2.0, amp, epsilon = 1e-9);
    }
}

// ============================================================================
// Executor Tests
// ============================================================================

/// Pass that marks the second frequency as singular.
fn pass_with_singular(
    system: &LayerSystem<f64>,
    frequencies: &[f64],
    points: &[DepthPoint<f64>],
) -> Vec<FrequencyResponse<f64>> {
    let mut out = frequency_pass_sequential(system, frequencies, points);
    out[1] = FrequencyResponse::Singular;
    out
}

/// Test that a singular frequency only affects its own column.
///
/// Verifies NaN markers, status and the undefined count.
#[test]
fn test_singular_frequency_is_isolated() {
    let (h, vs, dn) = soft_layer();
    let model = TransferFunction::new()
        .frequencies(&[0.5, 1.0, 2.0])
        .depths(&[0.0, 10.0])
        .custom_frequency_pass(pass_with_singular)
        .parallel(true)
        .build()
        .unwrap();

    let result = model.compute_columns(&h, &vs, &dn, None).unwrap();

    assert_eq!(result.undefined_count(), 1);
    assert_eq!(result.status[1], FrequencyStatus::Singular);
    assert_eq!(result.singular_frequencies(), vec![1.0]);
    for d in 0..2 {
        assert!(result.get(d, 1).unwrap().re.is_nan());
        assert!(result.get(d, 0).unwrap().norm().is_finite());
        assert!(result.get(d, 2).unwrap().norm().is_finite());
    }
}

/// Test that the custom pass is ignored unless parallel is enabled.
#[test]
fn test_custom_pass_requires_parallel_flag() {
    let (h, vs, dn) = soft_layer();
    let model = TransferFunction::new()
        .frequencies(&[0.5, 1.0, 2.0])
        .custom_frequency_pass(pass_with_singular)
        .build()
        .unwrap();

    let result = model.compute_columns(&h, &vs, &dn, None).unwrap();
    assert!(result.is_complete());
}

/// Test evaluation at every interface.
///
/// Verifies the default depth selection is the interface list.
#[test]
fn test_interfaces_depth_selection() {
    let profile = SoilProfile::from_records(&[
        [5.0, 400.0, 200.0, 1800.0],
        [10.0, 600.0, 300.0, 1900.0],
        [0.0, 2000.0, 1000.0, 2400.0],
    ])
    .unwrap();

    let result = TransferFunction::new()
        .frequencies(&[1.0, 2.0])
        .build()
        .unwrap()
        .compute(&profile)
        .unwrap();

    assert_eq!(result.depths, vec![0.0, 5.0, 15.0]);
    assert_eq!(result.values.len(), 6);
    assert_eq!(result.row(2).map(<[_]>::len), Some(2));

    // A negative single depth selects the interfaces too
    let sentinel = TransferFunction::new()
        .frequencies(&[1.0, 2.0])
        .depth(-1.0)
        .build()
        .unwrap()
        .compute(&profile)
        .unwrap();
    assert_eq!(sentinel, result);
}

/// Test that attenuation can be switched off.
///
/// Verifies a damped profile reproduces the elastic result when disabled.
#[test]
fn test_attenuation_switch() {
    let (h, vs, dn) = soft_layer();
    let qs = [10.0, 100.0];
    let freqs = [1.0, 2.5, 4.0];

    let elastic = TransferFunction::new()
        .frequencies(&freqs)
        .build()
        .unwrap()
        .compute_columns(&h, &vs, &dn, None)
        .unwrap();

    let switched_off = TransferFunction::new()
        .frequencies(&freqs)
        .attenuation(false)
        .build()
        .unwrap()
        .compute_columns(&h, &vs, &dn, Some(&qs))
        .unwrap();

    assert_eq!(elastic, switched_off);
}
