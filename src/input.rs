use std::path::PathBuf;

use winit::keyboard::{Key, NamedKey};

use glance::commands::Cmd;
use glance::messages::{AppMsg, DisplayMsg, Msg, ViewMsg};
use glance::model::AppModel;
use glance::update::update;

/// Export target for Ctrl+S, written to the working directory.
const EXPORT_FILENAME: &str = "glance-export.png";

pub fn handle_key(
    model: &mut AppModel,
    key: Key,
    ctrl: bool,
    _shift: bool,
    _alt: bool,
) -> Option<Cmd> {
    match key {
        // Copy displayed frame (Ctrl+C)
        Key::Character(ref s) if s.eq_ignore_ascii_case("c") && ctrl => {
            update(model, Msg::App(AppMsg::CopyToClipboard))
        }

        // Export displayed frame (Ctrl+S)
        Key::Character(ref s) if s.eq_ignore_ascii_case("s") && ctrl => update(
            model,
            Msg::App(AppMsg::Save(PathBuf::from(EXPORT_FILENAME))),
        ),

        // Trigger autoscale
        Key::Character(ref s) if s == "a" => update(model, Msg::Display(DisplayMsg::Autoscale)),

        // Toggle percentile vs min/max autoscale, then autoscale
        Key::Character(ref s) if s == "A" => {
            let cmd = update(model, Msg::Display(DisplayMsg::ToggleUsePercentiles));
            update(model, Msg::Display(DisplayMsg::Autoscale)).or(cmd)
        }

        // Toggle autoscale-on-image-change
        Key::Character(ref s) if s == "c" => {
            update(model, Msg::Display(DisplayMsg::ToggleAutoscaleOnChange))
        }

        // Reset gamma to 1
        Key::Character(ref s) if s == "G" => update(model, Msg::Display(DisplayMsg::ResetGamma)),

        // Toggle collage; also flips per-image autoscale limits
        Key::Character(ref s) if s.eq_ignore_ascii_case("l") => {
            let cmd = update(model, Msg::Display(DisplayMsg::ToggleCollage));
            update(model, Msg::Display(DisplayMsg::TogglePerImage)).or(cmd)
        }

        // Reset offset to 0
        Key::Character(ref s) if s == "O" => update(model, Msg::Display(DisplayMsg::ResetOffset)),

        // Toggle per-image autoscale limits, then autoscale
        Key::Character(ref s) if s == "p" => {
            let cmd = update(model, Msg::Display(DisplayMsg::TogglePerImage));
            update(model, Msg::Display(DisplayMsg::Autoscale)).or(cmd)
        }

        // Reset scale to 1
        Key::Character(ref s) if s == "S" => update(model, Msg::Display(DisplayMsg::ResetScale)),

        // Reset zoom to 100%
        Key::Character(ref s) if s.eq_ignore_ascii_case("z") => {
            update(model, Msg::View(ViewMsg::ResetZoom))
        }

        // Toggle cropping to content bounds / the global envelope
        Key::Character(ref s) if s == "x" => update(model, Msg::Display(DisplayMsg::ToggleCrop)),
        Key::Character(ref s) if s == "X" => {
            update(model, Msg::Display(DisplayMsg::ToggleCropGlobal))
        }

        // Toggle collage grid / cell transposition
        Key::Character(ref s) if s == "t" => {
            update(model, Msg::Display(DisplayMsg::ToggleCollageTransposeGrid))
        }
        Key::Character(ref s) if s == "T" => {
            update(model, Msg::Display(DisplayMsg::ToggleCollageTransposeCells))
        }

        // Collage border width
        Key::Character(ref s) if s == "+" => {
            let width = model.view.collage_border_width() + 1;
            update(model, Msg::Display(DisplayMsg::SetCollageBorderWidth(width)))
        }
        Key::Character(ref s) if s == "-" => {
            let width = model.view.collage_border_width().saturating_sub(1);
            update(model, Msg::Display(DisplayMsg::SetCollageBorderWidth(width)))
        }

        // Toggle index annotation
        Key::Character(ref s) if s == "n" => {
            update(model, Msg::Display(DisplayMsg::ToggleAnnotate))
        }

        // Hotkey help
        Key::Character(ref s) if s == "?" => {
            print_usage();
            None
        }

        // Cycle images
        Key::Named(NamedKey::ArrowLeft) => update(model, Msg::View(ViewMsg::StepImage(-1))),
        Key::Named(NamedKey::ArrowRight) => update(model, Msg::View(ViewMsg::StepImage(1))),

        // Jump through images in ~10% steps
        Key::Named(NamedKey::PageUp) => {
            let step = (model.image_count() / 10).max(1) as isize;
            update(model, Msg::View(ViewMsg::StepImage(-step)))
        }
        Key::Named(NamedKey::PageDown) => {
            let step = (model.image_count() / 10).max(1) as isize;
            update(model, Msg::View(ViewMsg::StepImage(step)))
        }

        Key::Named(NamedKey::Escape) => update(model, Msg::App(AppMsg::Quit)),

        _ => None,
    }
}

fn print_usage() {
    println!();
    println!("hotkeys:");
    println!("a: trigger autoscale");
    println!("A: toggle autoscale between [min, max] and");
    println!("   [prctile_low, prctile_high] -> [0, 1],");
    println!("   prctiles can be changed via ctrl+shift+wheel");
    println!("c: toggle autoscale on image change");
    println!("G: reset gamma to 1");
    println!("L: arrange all images in a rectangular collage");
    println!("n: toggle index annotation");
    println!("O: reset offset to 0");
    println!("p: toggle per-image auto scale limit computations");
    println!("   (vs. globally over all images)");
    println!("S: reset scale to 1");
    println!("t / T: transpose the collage grid / each cell");
    println!("+ / -: grow / shrink the collage border");
    println!("x / X: toggle crop / global crop bounds");
    println!("Z: reset zoom to 100%");
    println!("ctrl+s: export the current frame");
    println!("ctrl+c: copy the current frame to the clipboard");
    println!("left / right:         switch to previous / next image");
    println!("page down / up:       go through images in ~10% steps");
    println!();
    println!("wheel:                zoom in / out (inside the image)");
    println!("wheel:                switch image (outside the image)");
    println!("ctrl + wheel:         scale up / down");
    println!("shift + wheel:        gamma up / down");
    println!("ctrl + shift + wheel: increase / decrease autoscale percentiles");
    println!("left mouse dragged:   pan image");
    println!("double click:         reset zoom");
    println!();
}
