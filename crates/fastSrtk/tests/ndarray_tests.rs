#![cfg(feature = "dev")]
use approx::assert_abs_diff_eq;
use fastSrtk::prelude::*;
use ndarray::{Array1, Array2, s};

/// Test ndarray columns as solver input.
///
/// Verifies that owned arrays and slices produce the same result.
#[test]
fn test_ndarray_columns() {
    let h = vec![10.0, 0.0];
    let vs = vec![200.0, 1000.0];
    let dn = vec![1800.0, 2400.0];
    let freqs = [1.0, 2.0, 5.0];

    let model = TransferFunction::new()
        .frequencies(&freqs)
        .build()
        .unwrap();

    let from_vec = model.compute_columns(&h, &vs, &dn, None).unwrap();
    let from_slice = model
        .compute_columns(h.as_slice(), vs.as_slice(), dn.as_slice(), None)
        .unwrap();
    let from_array = model
        .compute_columns(
            &Array1::from_vec(h.clone()),
            &Array1::from_vec(vs.clone()),
            &Array1::from_vec(dn.clone()),
            None,
        )
        .unwrap();

    assert_eq!(from_vec, from_slice);
    assert_eq!(from_vec, from_array);
}

/// Test that strided ndarray views are rejected.
#[test]
fn test_non_contiguous_input_rejected() {
    let data = Array1::from_vec(vec![10.0, 99.0, 0.0, 99.0]);
    let strided = data.slice(s![..;2]);
    assert!(strided.as_column("hl").is_err());

    let vs = Array1::from_vec(vec![200.0, 1000.0]);
    let model = QuarterWavelength::new().frequency(1.0).build().unwrap();
    let err = model
        .compute_columns(&strided, &vs.view(), &vs.view())
        .unwrap_err();
    assert!(matches!(err, SrtkError::InvalidInput(_)));
}

/// Test that the rejection names the offending column.
///
/// Only the strided column fails; the others are contiguous views.
#[test]
fn test_non_contiguous_column_named() {
    let h = Array1::from_vec(vec![10.0, 0.0]);
    let vs = Array1::from_vec(vec![200.0, 1000.0]);
    let wide = Array1::from_vec(vec![1800.0, 0.0, 2400.0, 0.0]);
    let dn = wide.slice(s![..;2]);

    let model = TransferFunction::new().frequency(1.0).build().unwrap();
    let err = model
        .compute_columns(&h.view(), &vs.view(), &dn, None)
        .unwrap_err();
    match err {
        SrtkError::InvalidInput(message) => {
            assert!(message.contains("'dn'"), "{message}");
            assert!(!message.contains("'hl'"), "{message}");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let qs = wide.slice(s![..;2]);
    let err = model
        .compute_columns(&h.view(), &vs.view(), &vs.view(), Some(&qs))
        .unwrap_err();
    assert!(matches!(err, SrtkError::InvalidInput(ref m) if m.contains("'qs'")));
}

/// Test fixed-size arrays as solver input.
#[test]
fn test_fixed_size_array_columns() {
    let model = QuarterWavelength::new()
        .frequencies(&[1.0, 4.0])
        .build()
        .unwrap();
    let from_arrays = model
        .compute_columns(&[10.0, 0.0], &[200.0, 1000.0], &[1800.0, 2400.0])
        .unwrap();
    let from_vecs = model
        .compute_columns(&vec![10.0, 0.0], &vec![200.0, 1000.0], &vec![1800.0, 2400.0])
        .unwrap();
    assert_eq!(from_arrays, from_vecs);
}

/// Test the array views of a transfer-function result.
///
/// Verifies the (depths, frequencies) shape and the element mapping.
#[test]
fn test_transfer_function_arrays() {
    let h = vec![10.0, 20.0, 0.0];
    let vs = vec![180.0, 400.0, 1500.0];
    let dn = vec![1700.0, 1900.0, 2500.0];
    let freqs: Vec<f64> = (1..=12).map(|i| 0.5 * i as f64).collect();

    let result = TransferFunction::new()
        .frequencies(&freqs)
        .interfaces()
        .build()
        .unwrap()
        .compute_columns(&h, &vs, &dn, None)
        .unwrap();

    let values = result.values_array().unwrap();
    let amplitude: Array2<f64> = result.amplitude_array().unwrap();
    assert_eq!(values.dim(), (3, 12));
    assert_eq!(amplitude.dim(), (3, 12));
    assert_eq!(result.frequency_array().len(), 12);

    for d in 0..3 {
        for f in 0..12 {
            assert_abs_diff_eq!(
                amplitude[[d, f]],
                result.amplitude(d, f).unwrap(),
                epsilon = 1e-15
            );
            assert_eq!(values[[d, f]], result.get(d, f).unwrap());
        }
    }
}

/// Test the array views of a quarter-wavelength result.
#[test]
fn test_quarter_wavelength_arrays() {
    let h = Array1::from_vec(vec![10.0, 20.0, 0.0]);
    let vs = Array1::from_vec(vec![180.0, 400.0, 1500.0]);
    let dn = Array1::from_vec(vec![1700.0, 1900.0, 2500.0]);

    let result = QuarterWavelength::new()
        .frequencies(&[1.0, 2.0, 4.0])
        .build()
        .unwrap()
        .compute_columns(&h, &vs, &dn)
        .unwrap();

    let depth = result.depth_array();
    let velocity = result.velocity_array();
    let density = result.density_array();
    assert_eq!(depth.len(), 3);

    for i in 0..3 {
        assert_abs_diff_eq!(depth[i], velocity[i] / (4.0 * result.frequencies[i]), epsilon = 1e-6);
        assert!(density[i] >= 1700.0 && density[i] <= 2500.0);
    }
    // Higher frequencies sample shallower
    assert!(depth[0] > depth[1] && depth[1] > depth[2]);
}
