//! The image display pipeline: tone mapping, collage assembly, padding and
//! annotation. Everything in here is a pure transform over (H, W, C) float
//! buffers; display state lives in the model layer.

pub mod annotate;
pub mod collage;
pub mod pad;
pub mod tonemap;

pub use collage::{build_collage, near_square_grid, Collage, CollageSpec};
pub use pad::pad;
pub use tonemap::{auto_range, tone_map, ScaleParams};
