//! Tests for input normalization and crop-bounds computation.

mod common;

use common::flat_image;
use glance::error::PipelineError;
use glance::store::{CropBounds, ImageSet};
use ndarray::{Array2, Array3, Array4, ArrayD};

// ============================================================================
// Input normalization
// ============================================================================

#[test]
fn test_rank_2_input_gains_channel_axis() {
    let array = Array2::from_shape_fn((3, 4), |(y, x)| (y * 4 + x) as f32);
    let set = ImageSet::from_arrays(vec![array.into_dyn()]).unwrap();
    assert_eq!(set.len(), 1);
    assert_eq!(set.get(0).dim(), (3, 4, 1));
    assert_eq!(set.get(0)[[2, 3, 0]], 11.0);
}

#[test]
fn test_rank_3_input_passes_through() {
    let array = Array3::<f32>::zeros((3, 4, 3));
    let set = ImageSet::from_arrays(vec![array.into_dyn()]).unwrap();
    assert_eq!(set.get(0).dim(), (3, 4, 3));
}

#[test]
fn test_rank_4_input_is_a_channel_first_batch() {
    // [batch, channel, height, width] -> list of (H, W, C)
    let batch = Array4::from_shape_fn((2, 3, 4, 5), |(n, c, h, w)| {
        (n * 1000 + c * 100 + h * 10 + w) as f32
    });
    let set = ImageSet::from_arrays(vec![batch.clone().into_dyn()]).unwrap();
    assert_eq!(set.len(), 2);
    for n in 0..2 {
        assert_eq!(set.get(n).dim(), (4, 5, 3));
        for c in 0..3 {
            for h in 0..4 {
                for w in 0..5 {
                    assert_eq!(set.get(n)[[h, w, c]], batch[[n, c, h, w]]);
                }
            }
        }
    }
}

#[test]
fn test_rank_above_4_is_rejected() {
    let array = ArrayD::<f32>::zeros(vec![2, 2, 2, 2, 2]);
    assert_eq!(
        ImageSet::from_arrays(vec![array]).unwrap_err(),
        PipelineError::InvalidRank { rank: 5 }
    );
}

#[test]
fn test_rank_1_is_rejected() {
    let array = ArrayD::<f32>::zeros(vec![16]);
    assert_eq!(
        ImageSet::from_arrays(vec![array]).unwrap_err(),
        PipelineError::InvalidRank { rank: 1 }
    );
}

#[test]
fn test_mixed_rank_inputs_accumulate() {
    let set = ImageSet::from_arrays(vec![
        Array2::<f32>::zeros((2, 2)).into_dyn(),
        Array3::<f32>::zeros((2, 2, 3)).into_dyn(),
        Array4::<f32>::zeros((3, 1, 2, 2)).into_dyn(),
    ])
    .unwrap();
    assert_eq!(set.len(), 5);
}

#[test]
fn test_channel_last_stack_slices_last_axis() {
    let stack = Array4::from_shape_fn((2, 3, 1, 4), |(h, w, _, n)| (n * 100 + h * 10 + w) as f32);
    let set = ImageSet::from_channel_last_stack(stack).unwrap();
    assert_eq!(set.len(), 4);
    assert_eq!(set.get(2).dim(), (2, 3, 1));
    assert_eq!(set.get(2)[[1, 2, 0]], 212.0);
}

// ============================================================================
// Crop bounds
// ============================================================================

#[test]
fn test_crop_bounds_are_tight_and_half_open() {
    let mut image = Array3::<f32>::zeros((8, 10, 3));
    image[[2, 3, 1]] = 0.5;
    image[[5, 7, 0]] = 1.0;
    let set = ImageSet::from_images(vec![image]).unwrap();
    let bounds = set.crop_bounds(false);
    assert_eq!(
        bounds[0],
        CropBounds {
            x_min: 3,
            x_max: 8,
            y_min: 2,
            y_max: 6
        }
    );
    assert_eq!(bounds[0].width(), 5);
    assert_eq!(bounds[0].height(), 4);
}

#[test]
fn test_all_zero_image_defaults_to_full_extent() {
    let set = ImageSet::from_images(vec![flat_image(6, 9, 3, 0.0)]).unwrap();
    let bounds = set.crop_bounds(false);
    assert_eq!(bounds[0], CropBounds::full(6, 9));
}

#[test]
fn test_negative_channel_sums_do_not_count_as_content() {
    let set = ImageSet::from_images(vec![flat_image(4, 4, 1, -1.0)]).unwrap();
    let bounds = set.crop_bounds(false);
    assert_eq!(bounds[0], CropBounds::full(4, 4));
}

#[test]
fn test_global_bounds_are_identical_across_images() {
    let mut first = Array3::<f32>::zeros((8, 8, 1));
    first[[1, 2, 0]] = 1.0;
    let mut second = Array3::<f32>::zeros((8, 8, 1));
    second[[6, 5, 0]] = 1.0;
    let set = ImageSet::from_images(vec![first, second]).unwrap();

    let bounds = set.crop_bounds(true);
    assert_eq!(bounds[0], bounds[1]);
    assert_eq!(
        bounds[0],
        CropBounds {
            x_min: 2,
            x_max: 6,
            y_min: 1,
            y_max: 7
        }
    );

    // per-image bounds differ for the same set
    let local = set.crop_bounds(false);
    assert_ne!(local[0], local[1]);
}

#[test]
fn test_cropped_view_matches_bounds() {
    let mut image = Array3::<f32>::zeros((8, 10, 1));
    image[[3, 4, 0]] = 2.0;
    image[[4, 6, 0]] = 2.0;
    let set = ImageSet::from_images(vec![image]).unwrap();
    let bounds = set.crop_bounds(false);
    let view = set.cropped(0, &bounds[0]);
    assert_eq!(view.dim(), (2, 3, 1));
    assert_eq!(view[[0, 0, 0]], 2.0);
}
