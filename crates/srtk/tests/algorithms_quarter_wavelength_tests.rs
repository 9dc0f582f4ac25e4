#![cfg(feature = "dev")]
//! Tests for the quarter-wavelength solver.
//!
//! These tests verify the per-frequency bounded search:
//! - Self-consistency of the returned depth
//! - Closed-form results for a homogeneous half-space
//! - Per-frequency failure reporting
//!
//! ## Test Organization
//!
//! 1. **Model** - Bracket and misfit
//! 2. **Convergence** - Residual property on layered profiles
//! 3. **Failures** - Unbounded and non-converged frequencies

use approx::assert_relative_eq;

use srtk::internals::algorithms::quarter_wavelength::{
    QwlModel, SearchConfig, SearchStatus, default_tolerance, qwl_pass_sequential,
};
use srtk::internals::algorithms::velocity::traveltime_average_velocity;
use srtk::internals::math::search::SearchMethod;

fn reference_columns() -> ([f64; 5], [f64; 5], [f64; 5]) {
    (
        [5.0, 10.0, 10.0, 20.0, 0.0],
        [200.0, 300.0, 350.0, 650.0, 1200.0],
        [1800.0, 1900.0, 1900.0, 2100.0, 2400.0],
    )
}

// ============================================================================
// Model Tests
// ============================================================================

/// Test the search bracket.
///
/// Verifies the upper bound is the largest single-layer quarter wavelength.
#[test]
fn test_upper_bound() {
    let (h, vs, dn) = reference_columns();
    let model = QwlModel::new(&h, &vs, &dn);
    assert_relative_eq!(model.upper_bound(2.0), 1200.0 / 8.0, epsilon = 1e-12);
}

/// Test the sign of the misfit at the bracket ends.
///
/// Verifies a sign change exists on the bracket.
#[test]
fn test_misfit_brackets_root() {
    let (h, vs, dn) = reference_columns();
    let model = QwlModel::new(&h, &vs, &dn);

    for f in [0.5, 2.0, 10.0] {
        assert!(model.misfit(1e-6, f) < 0.0);
        assert!(model.misfit(model.upper_bound(f), f) >= 0.0);
    }
}

/// Test the default tolerance.
///
/// Verifies it is well below the residual required by callers.
#[test]
fn test_default_tolerance() {
    let tol: f64 = default_tolerance();
    assert!(tol > 0.0 && tol < 1e-6);
    assert_eq!(SearchConfig::<f64>::default().max_iterations, 200);
}

// ============================================================================
// Convergence Tests
// ============================================================================

/// Test the residual property on a layered profile.
///
/// Verifies `|z − v_avg(z) / 4f| < 1e-6` at every frequency.
#[test]
fn test_residual_property() {
    let (h, vs, dn) = reference_columns();
    let model = QwlModel::new(&h, &vs, &dn);
    let config = SearchConfig::default();

    let freqs = [0.2, 0.5, 1.0, 2.0, 5.0, 10.0, 20.0, 50.0];
    let points = qwl_pass_sequential(&model, &freqs, &config);
    for (p, f) in points.iter().zip(freqs) {
        assert_eq!(p.status, SearchStatus::Converged);
        let v_avg = traveltime_average_velocity(&h, &vs, p.depth);
        assert!((p.depth - v_avg / (4.0 * f)).abs() < 1e-6);
        assert_relative_eq!(p.velocity, v_avg, max_relative = 1e-12);
    }
}

/// Test that quarter-wavelength depth decreases with frequency.
#[test]
fn test_depth_decreases_with_frequency() {
    let (h, vs, dn) = reference_columns();
    let model = QwlModel::new(&h, &vs, &dn);
    let points = qwl_pass_sequential(&model, &[0.5, 1.0, 2.0, 5.0, 10.0], &SearchConfig::default());

    for w in points.windows(2) {
        assert!(w[1].depth < w[0].depth);
        assert!(w[1].velocity <= w[0].velocity);
    }
}

/// Test the residual floor of the working precision.
///
/// Verifies the floor scales with the bracket and the layer count.
#[test]
fn test_resolution_floor() {
    let (h, vs, dn) = reference_columns();
    let model = QwlModel::new(&h, &vs, &dn);

    let floor = model.resolution(100.0);
    assert_relative_eq!(floor, f64::EPSILON * 100.0 * 21.0, max_relative = 1e-12);
    assert!(model.resolution(1000.0) > floor);
    assert!(floor < default_tolerance::<f64>());
}

/// Test a single-precision sweep over four decades of frequency.
///
/// Verifies every frequency converges with a sub-meter residual on
/// several profiles.
#[test]
fn test_f32_frequency_sweep() {
    let profiles: [(Vec<f32>, Vec<f32>, Vec<f32>); 3] = [
        (
            vec![5.0, 10.0, 10.0, 20.0, 0.0],
            vec![200.0, 300.0, 350.0, 650.0, 1200.0],
            vec![1800.0, 1900.0, 1900.0, 2100.0, 2400.0],
        ),
        (
            vec![3.0, 12.0, 0.0],
            vec![120.0, 450.0, 2500.0],
            vec![1600.0, 1950.0, 2600.0],
        ),
        (
            vec![2.0, 4.0, 8.0, 16.0, 32.0, 64.0, 0.0],
            vec![150.0, 220.0, 310.0, 430.0, 600.0, 850.0, 1500.0],
            vec![1700.0, 1750.0, 1850.0, 1950.0, 2050.0, 2200.0, 2500.0],
        ),
    ];

    let n = 400;
    let freqs: Vec<f32> = (0..n)
        .map(|i| 0.01 * 10f32.powf(4.0 * i as f32 / (n - 1) as f32))
        .collect();
    let config = SearchConfig::<f32>::default();

    for (h, vs, dn) in &profiles {
        let model = QwlModel::new(h, vs, dn);
        let points = qwl_pass_sequential(&model, &freqs, &config);

        for (p, &f) in points.iter().zip(&freqs) {
            assert_eq!(p.status, SearchStatus::Converged, "f = {f}");
            assert!(p.residual <= config.tolerance.max(model.resolution(model.upper_bound(f))));
            assert!(p.residual < 0.5, "f = {f}, residual = {}", p.residual);
            assert!(p.depth > 0.0 && p.velocity > 0.0);
        }
    }
}

/// Test the closed form in a homogeneous half-space.
///
/// Verifies `z = v / 4f` for both search methods.
#[test]
fn test_half_space_closed_form() {
    let model = QwlModel::new(&[0.0], &[800.0], &[2200.0]);

    for method in [SearchMethod::Bisection, SearchMethod::GoldenSection] {
        let config = SearchConfig {
            method,
            ..SearchConfig::default()
        };
        for f in [1.0, 4.0, 25.0] {
            let p = model.solve(f, &config);
            assert_eq!(p.status, SearchStatus::Converged);
            assert_relative_eq!(p.depth, 800.0 / (4.0 * f), max_relative = 1e-8);
            assert_relative_eq!(p.velocity, 800.0, epsilon = 1e-9);
            assert_relative_eq!(p.density, 2200.0, epsilon = 1e-9);
        }
    }
}

// ============================================================================
// Failure Tests
// ============================================================================

/// Test that zero frequency has no bracket.
///
/// Verifies the entry is undefined and the neighbors are unaffected.
#[test]
fn test_zero_frequency_unbounded() {
    let (h, vs, dn) = reference_columns();
    let model = QwlModel::new(&h, &vs, &dn);
    let points = qwl_pass_sequential(&model, &[0.0, 1.0], &SearchConfig::default());

    assert_eq!(points[0].status, SearchStatus::Unbounded);
    assert!(points[0].depth.is_nan());
    assert!(points[0].velocity.is_nan());
    assert!(!points[0].is_defined());

    assert!(points[1].is_defined());
    assert!(points[1].depth > 0.0);
}

/// Test that an exhausted iteration budget is reported.
///
/// Verifies a too-small budget yields `NotConverged` with the residual kept.
#[test]
fn test_not_converged() {
    let (h, vs, dn) = reference_columns();
    let model = QwlModel::new(&h, &vs, &dn);
    let config = SearchConfig {
        max_iterations: 2,
        ..SearchConfig::default()
    };

    let p = model.solve(1.3, &config);
    assert_eq!(p.status, SearchStatus::NotConverged);
    assert!(p.depth.is_nan());
    assert!(p.residual > config.tolerance);
    assert!(p.residual.is_finite());
}
