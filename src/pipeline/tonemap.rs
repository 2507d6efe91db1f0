//! Tone mapping: offset/scale/gamma conversion of raw samples into a
//! displayable [0, 1] RGB buffer, plus percentile-based auto-ranging.

use ndarray::{s, Array3, ArrayView3, Axis};

use crate::error::PipelineError;

/// Offset/scale pair produced by [`auto_range`] and consumed by [`tone_map`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleParams {
    pub offset: f32,
    pub scale: f32,
}

/// Map raw samples to a displayable RGB buffer.
///
/// Single-channel input is replicated to three channels, two-channel input
/// gets a zero third channel, any other non-RGB channel count fails with
/// [`PipelineError::UnsupportedChannelCount`]. Values go through
/// `((v - offset) * scale).clamp(0, 1).powf(1 / gamma)`.
pub fn tone_map(
    image: ArrayView3<'_, f32>,
    offset: f32,
    scale: f32,
    gamma: f32,
) -> Result<Array3<f32>, PipelineError> {
    if !gamma.is_finite() || gamma <= 0.0 {
        return Err(PipelineError::InvalidParameter {
            name: "gamma",
            value: gamma as f64,
        });
    }

    let mut rgb = promote_to_rgb(image)?;
    let inv_gamma = 1.0 / gamma;
    rgb.mapv_inplace(|v| ((v - offset) * scale).clamp(0.0, 1.0).powf(inv_gamma));
    Ok(rgb)
}

/// Expand 1- or 2-channel images to RGB; pass 3-channel through unchanged.
fn promote_to_rgb(image: ArrayView3<'_, f32>) -> Result<Array3<f32>, PipelineError> {
    let (height, width, channels) = image.dim();
    match channels {
        1 => {
            let mut rgb = Array3::zeros((height, width, 3));
            for mut channel in rgb.axis_iter_mut(Axis(2)) {
                channel.assign(&image.index_axis(Axis(2), 0));
            }
            Ok(rgb)
        }
        2 => {
            let mut rgb = Array3::zeros((height, width, 3));
            rgb.slice_mut(s![.., .., ..2]).assign(&image);
            Ok(rgb)
        }
        3 => Ok(image.to_owned()),
        channels => Err(PipelineError::UnsupportedChannelCount { channels }),
    }
}

/// Compute the offset/scale that maps the value range of `images` onto [0, 1].
///
/// Per image the range is either the (`percentile`, `100 - percentile`)
/// percentile pair or the exact min/max. The returned range is the envelope
/// over all images: min of the lower bounds, max of the upper bounds — not a
/// percentile over the pooled samples. Per-image autoscaling is the caller
/// passing only the selected image.
pub fn auto_range(
    images: &[ArrayView3<'_, f32>],
    use_percentiles: bool,
    percentile: f32,
) -> Result<ScaleParams, PipelineError> {
    if images.is_empty() {
        return Err(PipelineError::InvalidParameter {
            name: "image count",
            value: 0.0,
        });
    }
    if use_percentiles && !(0.0..=100.0).contains(&percentile) {
        return Err(PipelineError::InvalidParameter {
            name: "percentile",
            value: percentile as f64,
        });
    }

    let mut lower = f32::INFINITY;
    let mut upper = f32::NEG_INFINITY;
    for image in images {
        let (lo, hi) = if use_percentiles {
            percentile_pair(image, percentile)
        } else {
            min_max(image)
        };
        lower = lower.min(lo);
        upper = upper.max(hi);
    }

    if upper == lower {
        return Err(PipelineError::DegenerateRange { value: upper });
    }

    Ok(ScaleParams {
        offset: lower,
        scale: 1.0 / (upper - lower),
    })
}

fn min_max(image: &ArrayView3<'_, f32>) -> (f32, f32) {
    image.iter().fold(
        (f32::INFINITY, f32::NEG_INFINITY),
        |(lo, hi), &v| (lo.min(v), hi.max(v)),
    )
}

/// Values at the `p`-th and `(100 - p)`-th percentile of all samples,
/// linearly interpolated between order statistics.
fn percentile_pair(image: &ArrayView3<'_, f32>, p: f32) -> (f32, f32) {
    let mut values: Vec<f32> = image.iter().copied().collect();
    values.sort_unstable_by(f32::total_cmp);
    (
        interpolated(&values, p as f64),
        interpolated(&values, 100.0 - p as f64),
    )
}

fn interpolated(sorted: &[f32], percentile: f64) -> f32 {
    let rank = percentile.clamp(0.0, 100.0) / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = (rank - lo as f64) as f32;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array3;

    #[test]
    fn percentile_interpolates_between_order_statistics() {
        let image = Array3::from_shape_vec((1, 5, 1), vec![0.0, 1.0, 2.0, 3.0, 4.0]).unwrap();
        let (lo, hi) = percentile_pair(&image.view(), 25.0);
        assert_eq!(lo, 1.0);
        assert_eq!(hi, 3.0);
        let (lo, hi) = percentile_pair(&image.view(), 12.5);
        assert_eq!(lo, 0.5);
        assert_eq!(hi, 3.5);
    }

    #[test]
    fn auto_range_rejects_out_of_domain_percentile() {
        let image = Array3::<f32>::zeros((2, 2, 1));
        assert!(matches!(
            auto_range(&[image.view()], true, 120.0),
            Err(PipelineError::InvalidParameter { .. })
        ));
    }
}
