//! Collage compositor: packs a list of variously-sized, variously-channeled
//! images into a single bordered grid mosaic.

use ndarray::{s, Array3};

use crate::error::PipelineError;
use crate::pipeline::pad::pad;
use crate::store::Image;

/// Requested collage layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollageSpec {
    pub rows: usize,
    pub cols: usize,
    pub border_width: usize,
    pub border_value: f32,
    /// Transpose the whole grid (placement becomes column-major).
    pub transpose_grid: bool,
    /// Swap each cell's own height/width axes.
    pub transpose_cells: bool,
}

/// A built mosaic together with the effective grid shape.
///
/// `rows`/`cols` echo the request unless it could not hold all images, in
/// which case they carry the corrected near-square grid. Callers should sync
/// their visible state from them.
#[derive(Debug, Clone)]
pub struct Collage {
    pub mosaic: Array3<f32>,
    pub rows: usize,
    pub cols: usize,
}

/// The smallest near-square grid holding `count` images.
pub fn near_square_grid(count: usize) -> (usize, usize) {
    let cols = (count as f64).sqrt().ceil() as usize;
    let rows = count.div_ceil(cols.max(1));
    (rows, cols)
}

/// Assemble `images` into a grid mosaic.
///
/// Every image is padded (centered, zero fill) to the common cell size — the
/// maximum height, width and channel count over the set — and cells missing
/// from a short set stay zero. A positive `border_width` adds a strip of
/// `border_value` on the trailing edges of every cell. Output shape is
/// `((tile_h + bw) * grid_rows, (tile_w + bw) * grid_cols, max_channels)`
/// where the tile and grid dimensions reflect the transpose flags.
pub fn build_collage(images: &[Image], spec: &CollageSpec) -> Result<Collage, PipelineError> {
    if images.is_empty() {
        return Err(PipelineError::InvalidParameter {
            name: "image count",
            value: 0.0,
        });
    }

    let count = images.len();
    let (rows, cols) = if spec.rows * spec.cols < count {
        near_square_grid(count)
    } else {
        (spec.rows, spec.cols)
    };

    let cell_h = images.iter().map(|im| im.dim().0).max().unwrap();
    let cell_w = images.iter().map(|im| im.dim().1).max().unwrap();
    let cell_c = images.iter().map(|im| im.dim().2).max().unwrap();

    let (tile_h, tile_w) = if spec.transpose_cells {
        (cell_w, cell_h)
    } else {
        (cell_h, cell_w)
    };
    let (grid_rows, grid_cols) = if spec.transpose_grid {
        (cols, rows)
    } else {
        (rows, cols)
    };

    let bw = spec.border_width;
    let background = if bw > 0 { spec.border_value } else { 0.0 };
    let mut mosaic = Array3::from_elem(
        ((tile_h + bw) * grid_rows, (tile_w + bw) * grid_cols, cell_c),
        background,
    );

    for index in 0..rows * cols {
        let (grid_r, grid_c) = if spec.transpose_grid {
            (index % cols, index / cols)
        } else {
            (index / cols, index % cols)
        };

        let y = grid_r * (tile_h + bw);
        let x = grid_c * (tile_w + bw);
        let mut tile = mosaic.slice_mut(s![y..y + tile_h, x..x + tile_w, ..]);

        match images.get(index) {
            Some(image) => {
                let cell = pad(image.view(), cell_h, cell_w, cell_c, 0.0, true)?;
                if spec.transpose_cells {
                    tile.assign(&cell.view().permuted_axes([1, 0, 2]));
                } else {
                    tile.assign(&cell);
                }
            }
            None => tile.fill(0.0),
        }
    }

    Ok(Collage {
        mosaic,
        rows,
        cols,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn near_square_grids() {
        assert_eq!(near_square_grid(1), (1, 1));
        assert_eq!(near_square_grid(3), (2, 2));
        assert_eq!(near_square_grid(5), (2, 3));
        assert_eq!(near_square_grid(9), (3, 3));
        assert_eq!(near_square_grid(10), (3, 4));
    }
}
