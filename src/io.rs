//! Image file I/O: decoding input files into float arrays and encoding the
//! displayed frame for export or the clipboard.

use std::path::Path;

use anyhow::{Context, Result};
use ndarray::{Array3, ArrayView3};

use crate::store::Image;

/// Decode an image file into a (H, W, C) float array with values in [0, 1].
///
/// Grayscale files decode to C=1, everything else to C=3 (alpha is dropped —
/// the viewer treats transparency as background).
pub fn load_image(path: &Path) -> Result<Image> {
    let decoded = image::open(path)
        .with_context(|| format!("failed to decode {}", path.display()))?;

    let array = match decoded {
        image::DynamicImage::ImageLuma8(gray) => {
            let (width, height) = gray.dimensions();
            Array3::from_shape_fn((height as usize, width as usize, 1), |(y, x, _)| {
                gray.get_pixel(x as u32, y as u32)[0] as f32 / 255.0
            })
        }
        other => {
            let rgb = other.to_rgb8();
            let (width, height) = rgb.dimensions();
            Array3::from_shape_fn((height as usize, width as usize, 3), |(y, x, c)| {
                rgb.get_pixel(x as u32, y as u32)[c] as f32 / 255.0
            })
        }
    };

    tracing::info!(
        "Loaded {} ({}x{}x{})",
        path.display(),
        array.dim().1,
        array.dim().0,
        array.dim().2
    );
    Ok(array)
}

/// Quantize a [0, 1] RGB frame to packed 8-bit RGB bytes.
pub fn frame_to_rgb8(frame: &ArrayView3<'_, f32>) -> Vec<u8> {
    let (height, width, _) = frame.dim();
    let mut bytes = Vec::with_capacity(height * width * 3);
    for y in 0..height {
        for x in 0..width {
            for c in 0..3 {
                bytes.push((frame[[y, x, c]].clamp(0.0, 1.0) * 255.0).round() as u8);
            }
        }
    }
    bytes
}

/// Encode the displayed frame to `path`; the format follows the extension.
pub fn save_frame(frame: &ArrayView3<'_, f32>, path: &Path) -> Result<()> {
    let (height, width, channels) = frame.dim();
    anyhow::ensure!(channels == 3, "display frames are always RGB");

    let bytes = frame_to_rgb8(frame);
    let buffer: image::ImageBuffer<image::Rgb<u8>, Vec<u8>> =
        image::ImageBuffer::from_raw(width as u32, height as u32, bytes)
            .expect("byte length matches frame extent");
    buffer
        .save(path)
        .with_context(|| format!("failed to encode {}", path.display()))?;

    tracing::info!("Saved frame to {}", path.display());
    Ok(())
}

/// Copy the displayed frame to the system clipboard as an RGBA bitmap.
pub fn copy_frame_to_clipboard(frame: &ArrayView3<'_, f32>) -> Result<()> {
    let (height, width, _) = frame.dim();
    let rgb = frame_to_rgb8(frame);
    let mut rgba = Vec::with_capacity(height * width * 4);
    for pixel in rgb.chunks_exact(3) {
        rgba.extend_from_slice(pixel);
        rgba.push(255);
    }

    let mut clipboard = arboard::Clipboard::new().context("clipboard unavailable")?;
    clipboard
        .set_image(arboard::ImageData {
            width,
            height,
            bytes: rgba.into(),
        })
        .context("failed to place image on clipboard")?;

    tracing::info!("Copied {}x{} frame to clipboard", width, height);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array3;

    #[test]
    fn quantization_rounds_and_clamps() {
        let mut frame = Array3::<f32>::zeros((1, 2, 3));
        frame[[0, 0, 0]] = 0.5;
        frame[[0, 1, 1]] = 2.0; // out of range
        frame[[0, 1, 2]] = -1.0;
        let bytes = frame_to_rgb8(&frame.view());
        assert_eq!(bytes, vec![128, 0, 0, 0, 255, 0]);
    }
}
