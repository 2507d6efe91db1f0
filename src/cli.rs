//! Command-line argument parsing for the viewer

use clap::Parser;
use std::path::PathBuf;

/// An interactive image viewer with tone mapping and collage support
#[derive(Parser, Debug)]
#[command(name = "glance", version, about)]
pub struct CliArgs {
    /// Image files to view
    #[arg(value_name = "PATHS", required = true)]
    pub paths: Vec<PathBuf>,

    /// Crop images to the bounding box of their positive pixels
    #[arg(long)]
    pub crop: bool,

    /// Use per-image crop boxes instead of the shared envelope
    #[arg(long)]
    pub crop_per_image: bool,

    /// Start in collage mode
    #[arg(long)]
    pub collage: bool,

    /// Initial window width in pixels
    #[arg(long, default_value_t = 1024)]
    pub width: u32,

    /// Initial window height in pixels
    #[arg(long, default_value_t = 768)]
    pub height: u32,
}
