//! Error types for the image display pipeline.

use thiserror::Error;

/// Errors produced by the image store, tone mapper and collage compositor.
///
/// Parameter errors coming from interactive controls are recovered locally
/// (the previous value is kept); structural errors are surfaced to the caller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PipelineError {
    /// Input array has an unsupported number of dimensions.
    #[error("input array has {rank} dimensions, expected 2 to 4")]
    InvalidRank { rank: usize },

    /// Channel count cannot be displayed as RGB.
    #[error("cannot display {channels} channels (spectral to RGB projection is not implemented)")]
    UnsupportedChannelCount { channels: usize },

    /// A numeric parameter is outside its domain.
    #[error("invalid value {value} for {name}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// Autoscale found an empty value range (lower == upper).
    #[error("autoscale range is degenerate at {value}")]
    DegenerateRange { value: f32 },

    /// Pad target is smaller than the source image.
    #[error("pad target {target_h}x{target_w}x{target_c} is smaller than source {source_h}x{source_w}x{source_c}")]
    InvalidTargetSize {
        source_h: usize,
        source_w: usize,
        source_c: usize,
        target_h: usize,
        target_w: usize,
        target_c: usize,
    },
}
