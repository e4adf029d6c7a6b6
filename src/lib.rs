//! Photomosaic construction by average-colour tile matching
//!
//! A target image is split into a grid of tiles. Every tile is replaced by the
//! candidate image whose average colour is nearest to the tile's own, and the
//! chosen candidates are pasted back together into a single output image.

#![forbid(unsafe_code)]

/// Signature computation, matching, candidate pool and mosaic orchestration
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Grid layout, tile splitting and candidate resizing
pub mod spatial;

pub use io::error::{MosaicError, Result};
