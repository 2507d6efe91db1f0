//! Tone-mapping, autoscale, collage, crop and annotation update handlers.
//!
//! Invalid interactive parameters are ignored and the previous value kept;
//! the handlers only rebuild the frame after an accepted change.

use crate::commands::Cmd;
use crate::messages::DisplayMsg;
use crate::model::AppModel;

pub fn update_display(model: &mut AppModel, msg: DisplayMsg) -> Option<Cmd> {
    match msg {
        DisplayMsg::SetScale(scale) => {
            if !scale.is_finite() {
                tracing::warn!("ignoring non-finite scale {}", scale);
                return None;
            }
            model.view.scale = scale;
            redraw(model)
        }

        DisplayMsg::SetGamma(gamma) => {
            if !model.view.set_gamma(gamma) {
                tracing::warn!("ignoring invalid gamma {}", gamma);
                return None;
            }
            redraw(model)
        }

        DisplayMsg::SetOffset(offset) => {
            if !offset.is_finite() {
                tracing::warn!("ignoring non-finite offset {}", offset);
                return None;
            }
            model.view.offset = offset;
            redraw(model)
        }

        DisplayMsg::ScaleBy(factor) => {
            model.view.scale *= factor;
            redraw(model)
        }

        DisplayMsg::GammaBy(factor) => {
            let gamma = model.view.gamma() * factor;
            if !model.view.set_gamma(gamma) {
                return None;
            }
            redraw(model)
        }

        DisplayMsg::ResetScale => {
            model.view.scale = 1.0;
            redraw(model)
        }

        DisplayMsg::ResetGamma => {
            model.view.set_gamma(1.0);
            redraw(model)
        }

        DisplayMsg::ResetOffset => {
            model.view.offset = 0.0;
            redraw(model)
        }

        DisplayMsg::Autoscale => {
            model.run_autoscale();
            redraw(model)
        }

        DisplayMsg::ToggleUsePercentiles => {
            model.view.autoscale_use_percentiles = !model.view.autoscale_use_percentiles;
            tracing::info!(
                "autoscale uses {}",
                if model.view.autoscale_use_percentiles {
                    "percentiles"
                } else {
                    "min/max"
                }
            );
            None
        }

        DisplayMsg::ToggleAutoscaleOnChange => {
            model.view.autoscale_on_change = !model.view.autoscale_on_change;
            tracing::info!(
                "on-change autoscaling is {}",
                if model.view.autoscale_on_change { "on" } else { "off" }
            );
            if model.view.autoscale_on_change {
                model.run_autoscale();
                return redraw(model);
            }
            None
        }

        DisplayMsg::TogglePerImage => {
            model.view.autoscale_per_image = !model.view.autoscale_per_image;
            tracing::info!(
                "per-image scaling is {}",
                if model.view.autoscale_per_image { "on" } else { "off" }
            );
            None
        }

        DisplayMsg::SetPercentile(percentile) => {
            if !model.view.set_autoscale_percentile(percentile) {
                tracing::warn!("ignoring invalid percentile {}", percentile);
                return None;
            }
            model.run_autoscale();
            redraw(model)
        }

        DisplayMsg::PercentileBy(factor) => {
            let percentile = model.view.autoscale_percentile() * factor;
            model.view.set_autoscale_percentile(percentile);
            model.view.autoscale_use_percentiles = true;
            tracing::info!(
                "auto percentiles: [{:.5}, {:.5}]",
                model.view.autoscale_percentile(),
                100.0 - model.view.autoscale_percentile()
            );
            model.run_autoscale();
            redraw(model)
        }

        DisplayMsg::ToggleCollage => {
            model.view.collage_active = !model.view.collage_active;
            redraw(model)
        }

        DisplayMsg::ToggleCollageTransposeGrid => {
            model.view.collage_transpose_grid = !model.view.collage_transpose_grid;
            redraw(model)
        }

        DisplayMsg::ToggleCollageTransposeCells => {
            model.view.collage_transpose_cells = !model.view.collage_transpose_cells;
            redraw(model)
        }

        DisplayMsg::SetCollageRows(rows) => {
            model.view.set_collage_rows(rows);
            redraw(model)
        }

        DisplayMsg::SetCollageCols(cols) => {
            model.view.set_collage_cols(cols);
            redraw(model)
        }

        DisplayMsg::SetCollageBorderWidth(width) => {
            model.view.set_collage_border_width(width);
            redraw(model)
        }

        DisplayMsg::SetCollageBorderValue(value) => {
            if !value.is_finite() {
                tracing::warn!("ignoring non-finite border value {}", value);
                return None;
            }
            model.view.collage_border_value = value;
            redraw(model)
        }

        DisplayMsg::ToggleCrop => {
            model.view.crop = !model.view.crop;
            redraw(model)
        }

        DisplayMsg::ToggleCropGlobal => {
            model.view.crop_global = !model.view.crop_global;
            model.refresh_crop_bounds();
            redraw(model)
        }

        DisplayMsg::ToggleAnnotate => {
            model.view.annotate = !model.view.annotate;
            redraw(model)
        }

        DisplayMsg::SetFontSize(size) => {
            if !model.view.set_font_size(size) {
                tracing::warn!("ignoring invalid font size {}", size);
                return None;
            }
            redraw(model)
        }
    }
}

fn redraw(model: &mut AppModel) -> Option<Cmd> {
    model.rebuild_frame();
    Some(Cmd::Redraw)
}
