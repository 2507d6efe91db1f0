//! Mutable per-session view parameters.
//!
//! All fields that carry invariants (image index, gamma, percentile, grid
//! shape) are private and go through setters; the update layer never touches
//! them directly.

use crate::pipeline::near_square_grid;
use crate::util::wrap_index;

/// Current axis limits of the visible window, in frame pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomWindow {
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
}

impl ZoomWindow {
    pub fn full(width: usize, height: usize) -> Self {
        Self {
            x0: 0.0,
            x1: width as f64,
            y0: 0.0,
            y1: height as f64,
        }
    }

    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }
}

/// Bookkeeping for an active left-button pan drag.
#[derive(Debug, Clone, Copy)]
pub struct PanState {
    pub start_window: ZoomWindow,
    pub start_x: f64,
    pub start_y: f64,
}

/// All user-adjustable display state.
#[derive(Debug, Clone)]
pub struct ViewState {
    image_count: usize,
    selected: usize,

    pub scale: f32,
    gamma: f32,
    pub offset: f32,

    pub autoscale_use_percentiles: bool,
    pub autoscale_on_change: bool,
    pub autoscale_per_image: bool,
    autoscale_percentile: f32,

    pub collage_active: bool,
    pub collage_transpose_grid: bool,
    pub collage_transpose_cells: bool,
    collage_rows: usize,
    collage_cols: usize,
    collage_border_width: usize,
    pub collage_border_value: f32,

    pub crop: bool,
    pub crop_global: bool,

    pub annotate: bool,
    font_size: f32,

    pub zoom_factor: f64,
    pub x_zoom: bool,
    pub y_zoom: bool,
    pub x_stop_at_orig: bool,
    pub y_stop_at_orig: bool,
    pub window: ZoomWindow,
}

impl ViewState {
    pub fn new(image_count: usize) -> Self {
        debug_assert!(image_count > 0);
        let (rows, cols) = near_square_grid(image_count);
        Self {
            image_count,
            selected: 0,
            scale: 1.0,
            gamma: 1.0,
            offset: 0.0,
            autoscale_use_percentiles: true,
            autoscale_on_change: false,
            autoscale_per_image: false,
            autoscale_percentile: 0.1,
            collage_active: false,
            collage_transpose_grid: false,
            collage_transpose_cells: false,
            collage_rows: rows,
            collage_cols: cols,
            collage_border_width: 0,
            collage_border_value: 0.0,
            crop: false,
            crop_global: true,
            annotate: false,
            font_size: 12.0,
            zoom_factor: 1.1,
            x_zoom: true,
            y_zoom: true,
            x_stop_at_orig: true,
            y_stop_at_orig: true,
            window: ZoomWindow::full(0, 0),
        }
    }

    pub fn image_count(&self) -> usize {
        self.image_count
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Select an image; out-of-range indices wrap modulo the image count.
    pub fn select_image(&mut self, index: usize) {
        self.selected = index % self.image_count;
    }

    /// Cycle the selected image by `step`, wrapping in both directions.
    pub fn step_image(&mut self, step: isize) {
        self.selected = wrap_index(self.selected, step, self.image_count);
    }

    pub fn gamma(&self) -> f32 {
        self.gamma
    }

    /// Set gamma; non-positive or non-finite values are rejected and the
    /// previous value is kept. Returns whether the value was accepted.
    pub fn set_gamma(&mut self, gamma: f32) -> bool {
        if gamma.is_finite() && gamma > 0.0 {
            self.gamma = gamma;
            true
        } else {
            false
        }
    }

    pub fn autoscale_percentile(&self) -> f32 {
        self.autoscale_percentile
    }

    /// Set the autoscale percentile, clamped into [0, 100].
    pub fn set_autoscale_percentile(&mut self, percentile: f32) -> bool {
        if percentile.is_finite() {
            self.autoscale_percentile = percentile.clamp(0.0, 100.0);
            true
        } else {
            false
        }
    }

    pub fn collage_rows(&self) -> usize {
        self.collage_rows
    }

    pub fn collage_cols(&self) -> usize {
        self.collage_cols
    }

    /// Grid shape as requested by the user; a too-small grid is corrected by
    /// the compositor and synced back via [`ViewState::sync_collage_grid`].
    pub fn set_collage_rows(&mut self, rows: usize) {
        self.collage_rows = rows.max(1);
    }

    pub fn set_collage_cols(&mut self, cols: usize) {
        self.collage_cols = cols.max(1);
    }

    /// Adopt the effective grid reported by the compositor.
    pub fn sync_collage_grid(&mut self, rows: usize, cols: usize) {
        self.collage_rows = rows;
        self.collage_cols = cols;
    }

    pub fn collage_border_width(&self) -> usize {
        self.collage_border_width
    }

    pub fn set_collage_border_width(&mut self, width: usize) {
        self.collage_border_width = width;
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn set_font_size(&mut self, size: f32) -> bool {
        if size.is_finite() && size >= 1.0 {
            self.font_size = size;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_selection_wraps() {
        let mut state = ViewState::new(3);
        state.step_image(-1);
        assert_eq!(state.selected(), 2);
        state.step_image(4);
        assert_eq!(state.selected(), 0);
        state.select_image(7);
        assert_eq!(state.selected(), 1);
    }

    #[test]
    fn gamma_guard_keeps_previous_value() {
        let mut state = ViewState::new(1);
        assert!(state.set_gamma(2.2));
        assert!(!state.set_gamma(0.0));
        assert!(!state.set_gamma(f32::NAN));
        assert_eq!(state.gamma(), 2.2);
    }

    #[test]
    fn percentile_is_clamped() {
        let mut state = ViewState::new(1);
        assert!(state.set_autoscale_percentile(250.0));
        assert_eq!(state.autoscale_percentile(), 100.0);
    }

    #[test]
    fn default_grid_is_near_square() {
        let state = ViewState::new(5);
        assert_eq!((state.collage_rows(), state.collage_cols()), (2, 3));
    }
}
