//! Grid decomposition shared by tile splitting and mosaic assembly

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{Result, invalid_parameter};
use std::fmt;

/// Number of rows and columns a target image is divided into
///
/// Both dimensions are positive, so `cell_count` is never zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridSize {
    rows: u32,
    cols: u32,
}

impl GridSize {
    /// Create a grid of `rows` x `cols` cells
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or exceeds
    /// [`MAX_GRID_DIMENSION`]
    pub fn new(rows: u32, cols: u32) -> Result<Self> {
        for dimension in [rows, cols] {
            if dimension == 0 {
                return Err(invalid_parameter(
                    "grid-size",
                    &format!("{rows}x{cols}"),
                    &"rows and columns must be positive",
                ));
            }
            if dimension > MAX_GRID_DIMENSION {
                return Err(invalid_parameter(
                    "grid-size",
                    &format!("{rows}x{cols}"),
                    &format!("rows and columns must not exceed {MAX_GRID_DIMENSION}"),
                ));
            }
        }
        Ok(Self { rows, cols })
    }

    /// Number of grid rows
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of grid columns
    pub const fn cols(&self) -> u32 {
        self.cols
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Tile (width, height) for an image of the given size
    ///
    /// Uses integer division; remainder pixels on the right and bottom edges
    /// belong to no tile.
    pub const fn tile_dimensions(&self, width: u32, height: u32) -> (u32, u32) {
        (width / self.cols, height / self.rows)
    }

    /// Grid (row, col) of the cell at a row-major index
    pub const fn cell_position(&self, index: usize) -> (u32, u32) {
        let cols = self.cols as usize;
        ((index / cols) as u32, (index % cols) as u32)
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}
