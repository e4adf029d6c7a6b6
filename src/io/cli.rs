//! Command-line interface for building a photomosaic from an image folder

use crate::algorithm::mosaic::{MosaicBuilder, MosaicConfig};
use crate::io::configuration::DEFAULT_OUTPUT_FILE;
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{export_png, load_target};
use crate::io::loader::load_candidates;
use crate::io::progress::ProgressManager;
use crate::spatial::GridSize;
use clap::Parser;
use log::info;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "photomosaic")]
#[command(
    author,
    version,
    about = "Rebuild a target image as a grid of best-matching candidate images"
)]
/// Command-line arguments for the mosaic tool
pub struct Cli {
    /// Image to reconstruct
    #[arg(long = "target-image", value_name = "PATH")]
    pub target_image: PathBuf,

    /// Directory of candidate images used as tiles
    #[arg(long = "input-folder", value_name = "DIR")]
    pub input_folder: PathBuf,

    /// Grid dimensions as rows then columns
    #[arg(
        long = "grid-size",
        num_args = 2,
        value_names = ["ROWS", "COLS"],
        required = true,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub grid_size: Vec<u32>,

    /// Where to write the PNG mosaic
    #[arg(long = "output-file", value_name = "PATH", default_value = DEFAULT_OUTPUT_FILE)]
    pub output_file: PathBuf,

    /// Use each candidate image for at most one tile
    #[arg(long)]
    pub no_reuse: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Grid requested with `--grid-size`
    ///
    /// # Errors
    ///
    /// Returns an error if the option was not given exactly two values or a
    /// dimension is out of range
    pub fn grid(&self) -> Result<GridSize> {
        match self.grid_size.as_slice() {
            &[rows, cols] => GridSize::new(rows, cols),
            values => Err(invalid_parameter(
                "grid-size",
                &format!("{values:?}"),
                &"expected exactly two values: ROWS COLS",
            )),
        }
    }

    /// Check if a candidate may fill several tiles
    pub const fn reuse_images(&self) -> bool {
        !self.no_reuse
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// How a run ended without error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Mosaic was written to disk
    Written {
        /// Output file path
        path: PathBuf,
        /// Number of tiles in the mosaic
        tiles: usize,
    },
    /// Input folder held no usable images, so nothing was produced
    NoCandidates,
}

/// Runs one mosaic job described by the command line
pub struct MosaicRunner {
    cli: Cli,
}

impl MosaicRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load inputs, build the mosaic and write it out
    ///
    /// An input folder without decodable images ends the run early with
    /// [`RunOutcome::NoCandidates`] rather than an error.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The grid size is invalid
    /// - The target image cannot be loaded
    /// - The input folder cannot be read
    /// - Mosaic construction fails
    /// - The output file cannot be written
    pub fn run(&self) -> Result<RunOutcome> {
        let start_time = Instant::now();
        let grid = self.cli.grid()?;

        info!("reading target image {}", self.cli.target_image.display());
        let target = load_target(&self.cli.target_image)?;

        info!("reading input images from {}", self.cli.input_folder.display());
        let loaded = load_candidates(&self.cli.input_folder)?;
        if loaded.is_empty() {
            info!(
                "no input images found in {}, exiting",
                self.cli.input_folder.display()
            );
            return Ok(RunOutcome::NoCandidates);
        }

        let progress_manager = self
            .cli
            .should_show_progress()
            .then(|| ProgressManager::new(grid.cell_count()));

        let mut builder = MosaicBuilder::new(MosaicConfig {
            grid,
            reuse_images: self.cli.reuse_images(),
        });
        let result = builder.build(&target, loaded.images, |processed, total| {
            if let Some(ref pm) = progress_manager {
                pm.tile_matched(processed, total);
            }
        });

        if let Some(ref pm) = progress_manager {
            pm.finish();
        }
        let mosaic = result?;

        export_png(&mosaic.image, &self.cli.output_file)?;
        info!(
            "saved output to {} in {:.2?}",
            self.cli.output_file.display(),
            start_time.elapsed()
        );

        Ok(RunOutcome::Written {
            path: self.cli.output_file.clone(),
            tiles: mosaic.selections.len(),
        })
    }
}
