//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use glance::model::{AppModel, ViewerOptions};
use glance::store::ImageSet;
use glance::{Theme, ViewerConfig};
use ndarray::Array3;

/// An image filled with a single value
pub fn flat_image(height: usize, width: usize, channels: usize, value: f32) -> Array3<f32> {
    Array3::from_elem((height, width, channels), value)
}

/// A deterministic gradient image (value = y + x + c)
pub fn gradient_image(height: usize, width: usize, channels: usize) -> Array3<f32> {
    Array3::from_shape_fn((height, width, channels), |(y, x, c)| (y + x + c) as f32)
}

/// The heterogeneous trio used by the collage examples:
/// (10,10,3), (10,20,1), (20,10,3)
pub fn trio() -> Vec<Array3<f32>> {
    vec![
        flat_image(10, 10, 3, 1.0),
        flat_image(10, 20, 1, 2.0),
        flat_image(20, 10, 3, 3.0),
    ]
}

/// A viewer model over the trio with default options
pub fn test_model() -> AppModel {
    test_model_with(ViewerOptions::default())
}

pub fn test_model_with(options: ViewerOptions) -> AppModel {
    AppModel::new(
        ImageSet::from_images(trio()).unwrap(),
        options,
        ViewerConfig::default(),
        Theme::default(),
        (800, 600),
    )
    .unwrap()
}
