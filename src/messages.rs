//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::path::PathBuf;

/// Pan/zoom and image-cycling messages
#[derive(Debug, Clone)]
pub enum ViewMsg {
    /// Begin a pan drag at a screen position
    StartPan { x: f64, y: f64 },
    /// Drag update at a screen position
    Pan { x: f64, y: f64 },
    /// End the pan drag
    EndPan,
    /// Zoom by `steps` wheel ticks around a screen position
    Zoom { steps: f64, x: f64, y: f64 },
    /// Reset the zoom window to the full frame extent (double-click / Z)
    ResetZoom,
    /// Cycle the selected image, wrapping modulo the image count
    StepImage(isize),
    /// Select an image by index (wraps modulo the image count)
    SelectImage(usize),
}

/// Tone-mapping, autoscale, collage, crop and annotation messages
#[derive(Debug, Clone)]
pub enum DisplayMsg {
    SetScale(f32),
    SetGamma(f32),
    SetOffset(f32),
    /// Multiply scale by a factor (Ctrl+wheel)
    ScaleBy(f32),
    /// Multiply gamma by a factor (Shift+wheel)
    GammaBy(f32),
    ResetScale,
    ResetGamma,
    ResetOffset,

    /// Recompute offset/scale from the configured autoscale mode
    Autoscale,
    /// Switch between percentile and min/max autoscale
    ToggleUsePercentiles,
    /// Autoscale automatically whenever the selected image changes
    ToggleAutoscaleOnChange,
    /// Compute autoscale limits per image instead of over the whole set
    TogglePerImage,
    SetPercentile(f32),
    /// Multiply the autoscale percentile by a factor (Ctrl+Shift+wheel);
    /// forces percentile mode and re-autoscales
    PercentileBy(f32),

    ToggleCollage,
    ToggleCollageTransposeGrid,
    ToggleCollageTransposeCells,
    SetCollageRows(usize),
    SetCollageCols(usize),
    SetCollageBorderWidth(usize),
    SetCollageBorderValue(f32),

    ToggleCrop,
    ToggleCropGlobal,

    ToggleAnnotate,
    SetFontSize(f32),
}

/// Application-level messages (window events, export)
#[derive(Debug, Clone)]
pub enum AppMsg {
    /// Window resized
    Resize(u32, u32),
    /// Export the displayed frame to a file
    Save(PathBuf),
    /// Copy the displayed frame to the system clipboard
    CopyToClipboard,
    /// Quit the application
    Quit,
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    /// Pan/zoom/image cycling
    View(ViewMsg),
    /// Tone mapping and layout
    Display(DisplayMsg),
    /// Window and export
    App(AppMsg),
}

// Convenience constructors for common messages
impl Msg {
    /// Create an image-cycling message
    pub fn step_image(step: isize) -> Self {
        Msg::View(ViewMsg::StepImage(step))
    }

    /// Create a resize message
    pub fn resize(width: u32, height: u32) -> Self {
        Msg::App(AppMsg::Resize(width, height))
    }
}
