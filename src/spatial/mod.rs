//! Spatial layout of the mosaic
//!
//! This module contains spatial-related functionality including:
//! - Grid dimensions and cell addressing
//! - Splitting images into tiles and pasting tiles back into a grid
//! - Fitting candidate images to tile size

/// Grid dimensions and cell addressing
pub mod grid;
/// Candidate downscaling to tile size
pub mod thumbnail;
/// Tile splitting and grid assembly
pub mod tiles;

pub use grid::GridSize;
