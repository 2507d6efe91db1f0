//! glance - an interactive image viewer for float image stacks
//!
//! This crate provides the image display pipeline (tone mapping, collage
//! assembly, crop bounds, padding) and the Elm-style model/update layer
//! driving it. The binary wires the pipeline to a winit window.

pub mod commands;
pub mod config;
pub mod config_paths;
pub mod error;
pub mod io;
pub mod messages;
pub mod model;
pub mod pipeline;
pub mod render;
pub mod store;
pub mod theme;
pub mod tracing;
pub mod update;
pub mod util;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::ViewerConfig;
pub use error::PipelineError;
pub use messages::Msg;
pub use model::{AppModel, ViewerOptions};
pub use store::ImageSet;
pub use theme::Theme;
