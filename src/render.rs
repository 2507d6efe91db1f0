//! Frame rendering for the view layer
//!
//! Blits the displayed frame into the framebuffer with nearest-neighbor
//! sampling through the zoom window, checkerboard background outside the
//! frame extent.

use ndarray::ArrayView3;

use crate::model::ZoomWindow;
use crate::theme::Theme;

/// Render the displayed frame into a 0xAARRGGBB framebuffer.
///
/// The zoom window maps linearly onto the full buffer; buffer pixels whose
/// window position falls outside the frame show the checkerboard.
pub fn render_frame(
    buffer: &mut [u32],
    buf_width: usize,
    buf_height: usize,
    frame: &ArrayView3<'_, f32>,
    window: &ZoomWindow,
    theme: &Theme,
) {
    let cell = theme.checkerboard_cell_size.max(1) as usize;
    let light = theme.checkerboard_light.to_argb_u32();
    let dark = theme.checkerboard_dark.to_argb_u32();
    let background = theme.background.to_argb_u32();

    let (frame_h, frame_w, _) = frame.dim();
    if buf_width == 0 || buf_height == 0 {
        return;
    }
    if frame_w == 0 || frame_h == 0 || window.width() <= 0.0 || window.height() <= 0.0 {
        buffer[..buf_width * buf_height].fill(background);
        return;
    }

    let x_step = window.width() / buf_width as f64;
    let y_step = window.height() / buf_height as f64;

    for sy in 0..buf_height {
        let img_y = window.y0 + (sy as f64 + 0.5) * y_step;
        let row_start = sy * buf_width;

        for sx in 0..buf_width {
            let img_x = window.x0 + (sx as f64 + 0.5) * x_step;

            let pixel = if img_x >= 0.0
                && img_y >= 0.0
                && (img_x as usize) < frame_w
                && (img_y as usize) < frame_h
            {
                let x = img_x as usize;
                let y = img_y as usize;
                let r = (frame[[y, x, 0]] * 255.0) as u32;
                let g = (frame[[y, x, 1]] * 255.0) as u32;
                let b = (frame[[y, x, 2]] * 255.0) as u32;
                0xFF000000 | (r << 16) | (g << 8) | b
            } else {
                // Checkerboard outside the frame
                let checker_col = (sx / cell) & 1;
                let checker_row = (sy / cell) & 1;
                if (checker_col ^ checker_row) == 0 {
                    light
                } else {
                    dark
                }
            };

            buffer[row_start + sx] = pixel;
        }
    }
}
