//! Round-trip tests for frame export and file loading.

use glance::io::{load_image, save_frame};
use ndarray::Array3;

#[test]
fn test_exported_frame_reloads_with_same_pixels() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("frame.png");

    let frame = Array3::from_shape_fn((8, 6, 3), |(y, x, c)| {
        ((y * 6 + x) * 3 + c) as f32 / 255.0
    });
    save_frame(&frame.view(), &path).unwrap();

    let reloaded = load_image(&path).unwrap();
    assert_eq!(reloaded.dim(), (8, 6, 3));
    // 8-bit quantization is exact for values that are multiples of 1/255
    for (a, b) in frame.iter().zip(reloaded.iter()) {
        assert!((a - b).abs() < 1e-6, "pixel mismatch: {} vs {}", a, b);
    }
}

#[test]
fn test_out_of_range_values_are_clamped_on_export() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clamped.png");

    let mut frame = Array3::<f32>::zeros((2, 2, 3));
    frame[[0, 0, 0]] = 5.0;
    frame[[1, 1, 2]] = -5.0;
    save_frame(&frame.view(), &path).unwrap();

    let reloaded = load_image(&path).unwrap();
    assert_eq!(reloaded[[0, 0, 0]], 1.0);
    assert_eq!(reloaded[[1, 1, 2]], 0.0);
}

#[test]
fn test_unsupported_extension_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("frame.unknown");
    let frame = Array3::<f32>::zeros((2, 2, 3));
    assert!(save_frame(&frame.view(), &path).is_err());
}
