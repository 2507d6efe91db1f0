//! Burning a text label into an image via a rasterized coverage mask.

use fontdue::Font;
use ndarray::Array3;

/// Candidate monospace fonts for annotation labels.
const FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
    "/usr/share/fonts/dejavu/DejaVuSansMono.ttf",
    "/System/Library/Fonts/Menlo.ttc",
    "C:\\Windows\\Fonts\\consola.ttf",
];

/// Load the first available label font, if any.
pub fn load_label_font() -> Option<Font> {
    for path in FONT_PATHS {
        if let Ok(bytes) = std::fs::read(path) {
            match Font::from_bytes(bytes, fontdue::FontSettings::default()) {
                Ok(font) => return Some(font),
                Err(e) => tracing::warn!("failed to parse font {}: {}", path, e),
            }
        }
    }
    None
}

/// Blend `label` into the top-left corner of `image`.
///
/// The label is rasterized into a [0, 1] coverage mask and each touched pixel
/// becomes `(1 - mask) * pixel + mask * color`, channel by channel.
pub fn annotate(image: &Array3<f32>, label: &str, font: &Font, px: f32, color: [f32; 3]) -> Array3<f32> {
    let (height, width, channels) = image.dim();
    let mut out = image.clone();

    let baseline = font
        .horizontal_line_metrics(px)
        .map(|m| m.ascent)
        .unwrap_or(px);
    let mut pen_x = 0.0f32;

    for ch in label.chars() {
        let (metrics, coverage) = font.rasterize(ch, px);
        let origin_x = pen_x + metrics.xmin as f32;
        let origin_y = baseline - metrics.ymin as f32 - metrics.height as f32;

        for gy in 0..metrics.height {
            for gx in 0..metrics.width {
                let mask = coverage[gy * metrics.width + gx] as f32 / 255.0;
                if mask == 0.0 {
                    continue;
                }
                let x = origin_x as i32 + gx as i32;
                let y = origin_y as i32 + gy as i32;
                if x < 0 || y < 0 || x as usize >= width || y as usize >= height {
                    continue;
                }
                for c in 0..channels {
                    let value = out[[y as usize, x as usize, c]];
                    let tint = color[c.min(2)];
                    out[[y as usize, x as usize, c]] = (1.0 - mask) * value + mask * tint;
                }
            }
        }
        pen_x += metrics.advance_width;
    }

    out
}
