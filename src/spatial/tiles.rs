//! Tile splitting and grid reassembly
//!
//! Splitting cuts an image into equally sized, row-major tiles. Assembly is
//! the inverse direction: it pastes a row-major list of images onto a canvas
//! whose cells are as large as the largest image in the list.

use crate::io::error::{MosaicError, Result, invalid_parameter};
use crate::spatial::GridSize;
use image::{RgbImage, imageops};
use std::borrow::Borrow;

/// Split an image into `rows * cols` tiles in row-major order
///
/// Tile size is `(width / cols, height / rows)`; remainder pixels on the
/// right and bottom edges are not part of any tile. Each tile is an
/// independent copy of the source pixels.
pub fn split(image: &RgbImage, grid: GridSize) -> Vec<RgbImage> {
    let (tile_width, tile_height) = grid.tile_dimensions(image.width(), image.height());

    let mut tiles = Vec::with_capacity(grid.cell_count());
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let tile = imageops::crop_imm(
                image,
                col * tile_width,
                row * tile_height,
                tile_width,
                tile_height,
            );
            tiles.push(tile.to_image());
        }
    }
    tiles
}

/// Paste row-major images onto a single grid canvas
///
/// Every cell is `max_width x max_height` over the supplied images. Image `k`
/// is placed with its top-left corner at cell `(k / cols, k % cols)`;
/// smaller images are not scaled and leave the rest of their cell black.
///
/// # Errors
///
/// Returns an error if:
/// - The number of images differs from the grid's cell count
/// - The canvas dimensions overflow `u32`
pub fn assemble_grid<T: Borrow<RgbImage>>(images: &[T], grid: GridSize) -> Result<RgbImage> {
    if images.len() != grid.cell_count() {
        return Err(MosaicError::GridSizeMismatch {
            grid: (grid.rows(), grid.cols()),
            expected: grid.cell_count(),
            actual: images.len(),
        });
    }

    let cell_width = images
        .iter()
        .map(|image| image.borrow().width())
        .max()
        .unwrap_or(0);
    let cell_height = images
        .iter()
        .map(|image| image.borrow().height())
        .max()
        .unwrap_or(0);

    let canvas_width = grid.cols().checked_mul(cell_width);
    let canvas_height = grid.rows().checked_mul(cell_height);
    let (Some(canvas_width), Some(canvas_height)) = (canvas_width, canvas_height) else {
        return Err(invalid_parameter(
            "grid-size",
            &grid,
            &format!("a {cell_width}x{cell_height} cell grid does not fit in an image"),
        ));
    };

    let mut canvas = RgbImage::new(canvas_width, canvas_height);
    for (index, image) in images.iter().enumerate() {
        let (row, col) = grid.cell_position(index);
        imageops::replace(
            &mut canvas,
            image.borrow(),
            i64::from(col) * i64::from(cell_width),
            i64::from(row) * i64::from(cell_height),
        );
    }

    Ok(canvas)
}
