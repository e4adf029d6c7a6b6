//! Photomosaic construction from a target image and a candidate pool
//!
//! The run is strictly sequential: candidates are shrunk to tile size, each
//! candidate is averaged once, then tiles are matched in row-major order.
//! With reuse disabled every match removes its candidate from the pool before
//! the next tile is considered.

use crate::algorithm::cache::{CacheStats, SignatureCache};
use crate::algorithm::matcher::best_match;
use crate::algorithm::pool::{CandidateId, CandidatePool};
use crate::algorithm::signature::{ColorAverage, average_color};
use crate::io::error::{ErrorContext, MosaicError, Result, WithContext, invalid_parameter};
use crate::spatial::GridSize;
use crate::spatial::thumbnail::resize_to_fit;
use crate::spatial::tiles::{assemble_grid, split};
use image::RgbImage;
use log::{debug, info};

/// Parameters controlling a mosaic run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MosaicConfig {
    /// Grid the target is split into and the output is assembled as
    pub grid: GridSize,
    /// Whether one candidate may fill more than one tile
    pub reuse_images: bool,
}

/// Assembled mosaic and the candidate chosen for each tile
#[derive(Debug, Clone)]
pub struct MosaicResult {
    /// Output image, `cols * cell_width` by `rows * cell_height`
    pub image: RgbImage,
    /// Load-order candidate index placed in each tile, row-major
    pub selections: Vec<usize>,
}

/// Orchestrates splitting, signature computation, matching and assembly
pub struct MosaicBuilder {
    config: MosaicConfig,
    cache: SignatureCache,
}

impl MosaicBuilder {
    /// Create a builder for the given configuration
    pub fn new(config: MosaicConfig) -> Self {
        Self {
            config,
            cache: SignatureCache::new(),
        }
    }

    /// Configuration this builder runs with
    pub const fn config(&self) -> &MosaicConfig {
        &self.config
    }

    /// Signature cache statistics of the most recent run
    pub const fn cache_stats(&self) -> &CacheStats {
        &self.cache.stats
    }

    /// Build a mosaic of `target` out of `candidates`
    ///
    /// `progress` is called once per matched tile with
    /// (`tiles_processed`, `total_tiles`).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The target is smaller than the grid, leaving zero-sized tiles
    /// - `candidates` is empty
    /// - Reuse is disabled and the pool runs out before the last tile
    pub fn build<F>(
        &mut self,
        target: &RgbImage,
        candidates: Vec<RgbImage>,
        mut progress: F,
    ) -> Result<MosaicResult>
    where
        F: FnMut(usize, usize),
    {
        let grid = self.config.grid;
        let (tile_width, tile_height) = grid.tile_dimensions(target.width(), target.height());
        if tile_width == 0 || tile_height == 0 {
            return Err(invalid_parameter(
                "grid-size",
                &grid,
                &format!(
                    "target image is only {}x{} pixels",
                    target.width(),
                    target.height()
                ),
            ));
        }

        info!("resizing candidates to fit {tile_width}x{tile_height}");
        let resized = candidates
            .into_iter()
            .map(|candidate| resize_to_fit(candidate, tile_width, tile_height))
            .collect();
        let mut pool = CandidatePool::new(resized);
        if pool.is_empty() {
            return Err(MosaicError::EmptyCandidateSet);
        }

        info!("splitting target image into {grid} tiles");
        let tiles = split(target, grid);

        self.cache = SignatureCache::new();
        self.compute_candidate_signatures(&pool)?;

        info!("finding image matches for {} tiles", tiles.len());
        let selections = self.select_matches(&tiles, &mut pool, &mut progress)?;

        info!("creating mosaic");
        let placed = selections
            .iter()
            .map(|&id| {
                pool.image(id)
                    .ok_or(MosaicError::CandidateUnavailable { index: id.index() })
            })
            .collect::<Result<Vec<_>>>()?;
        let image = assemble_grid(&placed, grid)?;

        Ok(MosaicResult {
            image,
            selections: selections.iter().map(|id| id.index()).collect(),
        })
    }

    fn compute_candidate_signatures(&mut self, pool: &CandidatePool) -> Result<()> {
        for id in pool.available_ids() {
            let image = pool
                .image(id)
                .ok_or(MosaicError::CandidateUnavailable { index: id.index() })?;
            let signature = self.cache.get_or_compute(id, || average_color(image))?;
            debug!("candidate {} averages {signature}", id.index());
        }
        Ok(())
    }

    fn select_matches<F>(
        &mut self,
        tiles: &[RgbImage],
        pool: &mut CandidatePool,
        progress: &mut F,
    ) -> Result<Vec<CandidateId>>
    where
        F: FnMut(usize, usize),
    {
        let total_tiles = tiles.len();
        let mut selections = Vec::with_capacity(total_tiles);

        for (tile_index, tile) in tiles.iter().enumerate() {
            let tile_signature = average_color(tile)?;

            let (ids, signatures): (Vec<CandidateId>, Vec<ColorAverage>) = pool
                .available_ids()
                .filter_map(|id| self.cache.get(id).map(|signature| (id, signature)))
                .unzip();

            let position = best_match(tile_signature, &signatures).with_context(ErrorContext {
                tile: Some((tile_index, total_tiles)),
                ..Default::default()
            })?;
            let id = ids
                .get(position)
                .copied()
                .ok_or(MosaicError::CandidateUnavailable { index: position })?;

            if !self.config.reuse_images {
                pool.take_and_remove(id)?;
                self.cache.evict(id);
            }

            selections.push(id);
            progress(tile_index + 1, total_tiles);
        }

        Ok(selections)
    }
}
