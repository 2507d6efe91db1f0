//! Image store: normalizes heterogeneous numeric input into a canonical
//! list of (H, W, C) pixel buffers and computes crop bounding boxes.
//!
//! Accepted input shapes:
//! - rank 2: a single grayscale image, a trailing channel axis is added
//! - rank 3: a single channel-last image
//! - rank 4 via [`ImageSet::from_arrays`]: a channel-first batch
//!   [N, C, H, W], expanded into N images
//! - rank 4 via [`ImageSet::from_channel_last_stack`]: a (H, W, C, N)
//!   stack, sliced along the last axis

use ndarray::{Array3, Array4, ArrayD, ArrayView3, Axis};

use crate::error::PipelineError;

/// A single image: (height, width, channels) float samples.
pub type Image = Array3<f32>;

/// Tight bounding box of the pixels worth showing, half-open on the max side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropBounds {
    pub x_min: usize,
    /// Exclusive.
    pub x_max: usize,
    pub y_min: usize,
    /// Exclusive.
    pub y_max: usize,
}

impl CropBounds {
    /// Bounds covering a full h x w image.
    pub fn full(height: usize, width: usize) -> Self {
        Self {
            x_min: 0,
            x_max: width,
            y_min: 0,
            y_max: height,
        }
    }

    pub fn width(&self) -> usize {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> usize {
        self.y_max - self.y_min
    }
}

/// An immutable list of canonical (H, W, C) images.
#[derive(Debug, Clone)]
pub struct ImageSet {
    images: Vec<Image>,
}

impl ImageSet {
    /// Build a set from already-canonical images.
    pub fn from_images(images: Vec<Image>) -> Result<Self, PipelineError> {
        for image in &images {
            let (h, w, _) = image.dim();
            if h == 0 || w == 0 {
                return Err(PipelineError::InvalidParameter {
                    name: "image extent",
                    value: 0.0,
                });
            }
        }
        Ok(Self { images })
    }

    /// Normalize a list of dynamic-rank arrays.
    ///
    /// Rank 2 gains a trailing singleton channel axis, rank 3 passes through,
    /// rank 4 is treated as a channel-first [N, C, H, W] batch and expanded.
    /// Anything else fails with [`PipelineError::InvalidRank`].
    pub fn from_arrays(arrays: Vec<ArrayD<f32>>) -> Result<Self, PipelineError> {
        let mut images = Vec::with_capacity(arrays.len());
        for array in arrays {
            match array.ndim() {
                2 => {
                    let (h, w) = (array.shape()[0], array.shape()[1]);
                    let image = array
                        .into_shape_with_order((h, w, 1))
                        .expect("reshape (h, w) -> (h, w, 1) cannot fail");
                    images.push(image);
                }
                3 => {
                    let image = array
                        .into_dimensionality::<ndarray::Ix3>()
                        .expect("rank checked above");
                    images.push(image);
                }
                4 => {
                    let batch = array
                        .into_dimensionality::<ndarray::Ix4>()
                        .expect("rank checked above");
                    images.extend(expand_channel_first_batch(&batch));
                }
                rank => return Err(PipelineError::InvalidRank { rank }),
            }
        }
        Self::from_images(images)
    }

    /// Slice a channel-last (H, W, C, N) stack into N images.
    pub fn from_channel_last_stack(stack: Array4<f32>) -> Result<Self, PipelineError> {
        let images = stack
            .axis_iter(Axis(3))
            .map(|slice| slice.to_owned())
            .collect();
        Self::from_images(images)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn get(&self, index: usize) -> &Image {
        &self.images[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Image> {
        self.images.iter()
    }

    /// The given image restricted to its crop bounds.
    pub fn cropped(&self, index: usize, bounds: &CropBounds) -> ArrayView3<'_, f32> {
        self.images[index].slice(ndarray::s![
            bounds.y_min..bounds.y_max,
            bounds.x_min..bounds.x_max,
            ..
        ])
    }

    /// Per-image bounding boxes of pixels whose channel sum is positive.
    ///
    /// An image without any positive pixel keeps its full extent. With
    /// `global` set, every box is replaced by the min/max envelope over the
    /// whole set, so cropped images stay spatially comparable.
    pub fn crop_bounds(&self, global: bool) -> Vec<CropBounds> {
        let mut bounds: Vec<CropBounds> = self.images.iter().map(content_bounds).collect();

        if global && !bounds.is_empty() {
            let envelope = CropBounds {
                x_min: bounds.iter().map(|b| b.x_min).min().unwrap(),
                x_max: bounds.iter().map(|b| b.x_max).max().unwrap(),
                y_min: bounds.iter().map(|b| b.y_min).min().unwrap(),
                y_max: bounds.iter().map(|b| b.y_max).max().unwrap(),
            };
            bounds.fill(envelope);
        }

        bounds
    }
}

/// Expand an [N, C, H, W] batch into channel-last images.
fn expand_channel_first_batch(batch: &Array4<f32>) -> Vec<Image> {
    batch
        .axis_iter(Axis(0))
        .map(|element| {
            // [C, H, W] -> (H, W, C)
            element.permuted_axes([1, 2, 0]).to_owned()
        })
        .collect()
}

/// Tight bounding box of rows/columns with a positive channel sum.
fn content_bounds(image: &Image) -> CropBounds {
    let (height, width, _) = image.dim();
    let mut x_min = width;
    let mut x_max = 0usize;
    let mut y_min = height;
    let mut y_max = 0usize;

    for y in 0..height {
        for x in 0..width {
            let sum: f32 = image.slice(ndarray::s![y, x, ..]).sum();
            if sum > 0.0 {
                x_min = x_min.min(x);
                x_max = x_max.max(x + 1);
                y_min = y_min.min(y);
                y_max = y_max.max(y + 1);
            }
        }
    }

    if x_max == 0 {
        // no positive pixel anywhere
        CropBounds::full(height, width)
    } else {
        CropBounds {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }
}
