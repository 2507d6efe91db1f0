//! Padding of images to a larger target extent and channel count.

use ndarray::{s, Array3, ArrayView3};

use crate::error::PipelineError;

/// Pad `image` with `fill` to `target_h` x `target_w` x `target_c`.
///
/// With `centered` the border is split between both edges; an odd amount puts
/// the smaller share on the leading edge. Without it all padding goes on the
/// trailing edges. Missing channels are appended filled with `fill`.
///
/// Fails with [`PipelineError::InvalidTargetSize`] when any target dimension
/// is smaller than the source.
pub fn pad(
    image: ArrayView3<'_, f32>,
    target_h: usize,
    target_w: usize,
    target_c: usize,
    fill: f32,
    centered: bool,
) -> Result<Array3<f32>, PipelineError> {
    let (source_h, source_w, source_c) = image.dim();
    if target_h < source_h || target_w < source_w || target_c < source_c {
        return Err(PipelineError::InvalidTargetSize {
            source_h,
            source_w,
            source_c,
            target_h,
            target_w,
            target_c,
        });
    }

    let top = if centered { (target_h - source_h) / 2 } else { 0 };
    let left = if centered { (target_w - source_w) / 2 } else { 0 };

    let mut padded = Array3::from_elem((target_h, target_w, target_c), fill);
    padded
        .slice_mut(s![top..top + source_h, left..left + source_w, ..source_c])
        .assign(&image);
    Ok(padded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array3;

    #[test]
    fn centered_padding_puts_smaller_share_first() {
        let image = Array3::<f32>::ones((2, 2, 1));
        // 3 extra rows: 1 above, 2 below
        let padded = pad(image.view(), 5, 2, 1, 0.0, true).unwrap();
        assert_eq!(padded[[0, 0, 0]], 0.0);
        assert_eq!(padded[[1, 0, 0]], 1.0);
        assert_eq!(padded[[2, 0, 0]], 1.0);
        assert_eq!(padded[[3, 0, 0]], 0.0);
    }

    #[test]
    fn appended_channels_use_fill_value() {
        let image = Array3::<f32>::ones((2, 2, 1));
        let padded = pad(image.view(), 2, 2, 3, 0.5, true).unwrap();
        assert_eq!(padded[[0, 0, 0]], 1.0);
        assert_eq!(padded[[0, 0, 1]], 0.5);
        assert_eq!(padded[[0, 0, 2]], 0.5);
    }

    #[test]
    fn undersized_target_fails() {
        let image = Array3::<f32>::zeros((4, 4, 3));
        assert!(matches!(
            pad(image.view(), 3, 4, 3, 0.0, true),
            Err(PipelineError::InvalidTargetSize { .. })
        ));
    }
}
