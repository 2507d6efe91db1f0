//! Pan, zoom and image-cycling update handlers.

use crate::commands::Cmd;
use crate::messages::ViewMsg;
use crate::model::{AppModel, PanState};

pub fn update_view(model: &mut AppModel, msg: ViewMsg) -> Option<Cmd> {
    match msg {
        ViewMsg::StartPan { x, y } => {
            model.pan = Some(PanState {
                start_window: model.view.window,
                start_x: x,
                start_y: y,
            });
            None
        }

        ViewMsg::Pan { x, y } => {
            let pan = model.pan?;
            let (vw, vh) = model.window_size;
            if vw == 0 || vh == 0 {
                return None;
            }

            // screen-pixel delta scaled into image units of the drag-start window
            let dx = (x - pan.start_x) * pan.start_window.width() / vw as f64;
            let dy = (y - pan.start_y) * pan.start_window.height() / vh as f64;
            if dx == 0.0 && dy == 0.0 {
                return None;
            }

            let mut window = pan.start_window;
            window.x0 -= dx;
            window.x1 -= dx;
            window.y0 -= dy;
            window.y1 -= dy;
            model.view.window = window;
            Some(Cmd::Redraw)
        }

        ViewMsg::EndPan => {
            model.pan = None;
            None
        }

        ViewMsg::Zoom { steps, x, y } => {
            let (vw, vh) = model.window_size;
            if vw == 0 || vh == 0 {
                return None;
            }
            let window = model.view.window;
            let factor = model.view.zoom_factor.powf(-steps);

            // cursor position in image coordinates
            let ix = window.x0 + x / vw as f64 * window.width();
            let iy = window.y0 + y / vh as f64 * window.height();

            // interval lengths left, right, below and above the cursor
            let (mut x0, mut x1) = (window.x0, window.x1);
            let (mut y0, mut y1) = (window.y0, window.y1);
            if model.view.x_zoom {
                x0 = ix - factor * (ix - window.x0);
                x1 = ix + factor * (window.x1 - ix);
            }
            if model.view.y_zoom {
                y0 = iy - factor * (iy - window.y0);
                y1 = iy + factor * (window.y1 - iy);
            }

            // no zooming out beyond the original extent
            let (frame_w, frame_h) = model.frame_extent();
            if model.view.x_stop_at_orig {
                x0 = x0.max(0.0);
                x1 = x1.min(frame_w as f64);
            }
            if model.view.y_stop_at_orig {
                y0 = y0.max(0.0);
                y1 = y1.min(frame_h as f64);
            }

            if x0 == x1 || y0 == y1 {
                return None;
            }
            model.view.window.x0 = x0;
            model.view.window.x1 = x1;
            model.view.window.y0 = y0;
            model.view.window.y1 = y1;
            Some(Cmd::Redraw)
        }

        ViewMsg::ResetZoom => {
            model.reset_zoom();
            Some(Cmd::Redraw)
        }

        ViewMsg::StepImage(step) => {
            // cycling always returns to single-image display
            model.view.collage_active = false;
            model.view.step_image(step);
            tracing::info!(
                "image {} / {}",
                model.view.selected() + 1,
                model.image_count()
            );
            if model.view.autoscale_on_change {
                model.run_autoscale();
            }
            model.rebuild_frame();
            Some(Cmd::Redraw)
        }

        ViewMsg::SelectImage(index) => {
            model.view.collage_active = false;
            model.view.select_image(index);
            if model.view.autoscale_on_change {
                model.run_autoscale();
            }
            model.rebuild_frame();
            Some(Cmd::Redraw)
        }
    }
}
