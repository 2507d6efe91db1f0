//! Application model - the complete state of the viewer
//!
//! Owns the image set, the view state, and the currently displayed frame.
//! The displayed frame is the only cached value in the system; every state
//! change that affects pixels rebuilds it in full.

pub mod view_state;

pub use view_state::{PanState, ViewState, ZoomWindow};

use ndarray::{Array3, ArrayView3};

use crate::config::ViewerConfig;
use crate::error::PipelineError;
use crate::pipeline::annotate::{annotate, load_label_font};
use crate::pipeline::{auto_range, build_collage, tone_map, CollageSpec};
use crate::store::{CropBounds, Image, ImageSet};
use crate::theme::Theme;

/// Construction options carried over from the CLI / embedding API.
#[derive(Debug, Clone, Default)]
pub struct ViewerOptions {
    pub crop: bool,
    /// Crop all images to the shared bounding-box envelope instead of
    /// per-image boxes.
    pub crop_global: bool,
    /// Start in collage mode.
    pub collage: bool,
}

/// The complete application model
pub struct AppModel {
    images: ImageSet,
    bounds: Vec<CropBounds>,
    pub view: ViewState,
    /// The currently displayed tone-mapped RGB frame, values in [0, 1].
    frame: Array3<f32>,
    pub window_size: (u32, u32),
    pub theme: Theme,
    pub config: ViewerConfig,
    pub pan: Option<PanState>,
    label_font: Option<fontdue::Font>,
}

impl AppModel {
    pub fn new(
        images: ImageSet,
        options: ViewerOptions,
        config: ViewerConfig,
        theme: Theme,
        window_size: (u32, u32),
    ) -> Result<Self, PipelineError> {
        if images.is_empty() {
            return Err(PipelineError::InvalidParameter {
                name: "image count",
                value: 0.0,
            });
        }

        let mut view = ViewState::new(images.len());
        view.crop = options.crop;
        view.crop_global = options.crop_global;
        view.collage_active = options.collage && images.len() > 1;
        view.zoom_factor = config.zoom_factor as f64;
        view.set_autoscale_percentile(config.autoscale_percentile);
        view.set_font_size(config.font_size);

        let bounds = images.crop_bounds(view.crop_global);
        let label_font = load_label_font();
        if label_font.is_none() {
            tracing::warn!("No label font found, annotation is disabled");
        }

        let mut model = Self {
            images,
            bounds,
            view,
            frame: Array3::zeros((0, 0, 3)),
            window_size,
            theme,
            config,
            pan: None,
            label_font,
        };
        model.rebuild_frame();
        if model.view.autoscale_on_change {
            model.run_autoscale();
        }
        Ok(model)
    }

    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    pub fn images(&self) -> &ImageSet {
        &self.images
    }

    /// The displayed frame (RGB, [0, 1]).
    pub fn frame(&self) -> ArrayView3<'_, f32> {
        self.frame.view()
    }

    pub fn frame_extent(&self) -> (usize, usize) {
        let (h, w, _) = self.frame.dim();
        (w, h)
    }

    /// Raw pixels of image `index`, restricted to its crop bounds when
    /// cropping is active. Autoscale statistics read from here.
    pub fn source_view(&self, index: usize) -> ArrayView3<'_, f32> {
        if self.view.crop {
            self.images.cropped(index, &self.bounds[index])
        } else {
            self.images.get(index).view()
        }
    }

    /// Image `index` as fed into the tone mapper / compositor: cropped, with
    /// the index label burned in when annotation is on.
    fn source_image(&self, index: usize) -> Image {
        let source = self.source_view(index);
        match (&self.label_font, self.view.annotate) {
            (Some(font), true) => annotate(
                &source.to_owned(),
                &index.to_string(),
                font,
                self.view.font_size(),
                self.theme.annotation_color.to_f32_rgb(),
            ),
            _ => source.to_owned(),
        }
    }

    /// Recompute crop bounds, after the global-crop flag changed.
    pub fn refresh_crop_bounds(&mut self) {
        self.bounds = self.images.crop_bounds(self.view.crop_global);
    }

    /// Rebuild the displayed frame from the current view state.
    ///
    /// Structural pipeline errors are logged and leave the previous frame in
    /// place; they never take the event loop down. When the frame extent
    /// changes the zoom window resets to the full extent.
    pub fn rebuild_frame(&mut self) {
        match self.compose_frame() {
            Ok(frame) => {
                let extent_changed = frame.dim() != self.frame.dim();
                self.frame = frame;
                if extent_changed {
                    self.reset_zoom();
                }
            }
            Err(e) => tracing::error!("cannot display frame: {}", e),
        }
    }

    fn compose_frame(&mut self) -> Result<Array3<f32>, PipelineError> {
        if self.view.collage_active {
            let images: Vec<Image> = (0..self.images.len())
                .map(|i| self.source_image(i))
                .collect();
            let spec = CollageSpec {
                rows: self.view.collage_rows(),
                cols: self.view.collage_cols(),
                border_width: self.view.collage_border_width(),
                border_value: self.view.collage_border_value,
                transpose_grid: self.view.collage_transpose_grid,
                transpose_cells: self.view.collage_transpose_cells,
            };
            let collage = build_collage(&images, &spec)?;
            self.view.sync_collage_grid(collage.rows, collage.cols);
            tone_map(
                collage.mosaic.view(),
                self.view.offset,
                self.view.scale,
                self.view.gamma(),
            )
        } else {
            let image = self.source_image(self.view.selected());
            tone_map(
                image.view(),
                self.view.offset,
                self.view.scale,
                self.view.gamma(),
            )
        }
    }

    /// Recompute offset/scale from the configured autoscale mode.
    ///
    /// A degenerate value range is reported and the previous mapping kept.
    pub fn run_autoscale(&mut self) {
        let views: Vec<ArrayView3<'_, f32>> = if self.view.autoscale_per_image {
            vec![self.source_view(self.view.selected())]
        } else {
            (0..self.images.len()).map(|i| self.source_view(i)).collect()
        };

        match auto_range(
            &views,
            self.view.autoscale_use_percentiles,
            self.view.autoscale_percentile(),
        ) {
            Ok(params) => {
                self.view.offset = params.offset;
                self.view.scale = params.scale;
                tracing::debug!(
                    "autoscale: offset={}, scale={}",
                    params.offset,
                    params.scale
                );
            }
            Err(e) => tracing::error!("autoscale failed: {}", e),
        }
    }

    /// Reset the zoom window to the full frame extent.
    pub fn reset_zoom(&mut self) {
        let (w, h) = self.frame_extent();
        self.view.window = ZoomWindow::full(w, h);
    }
}
