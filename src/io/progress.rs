//! Tile matching progress display

use crate::io::configuration::{PROGRESS_LOG_STEPS, PROGRESS_TEMPLATE};
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(PROGRESS_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar over the tiles of one mosaic
///
/// Fed by the per-tile callback of the mosaic builder. Besides the bar, a
/// debug log line is written every `total / PROGRESS_LOG_STEPS` tiles.
pub struct ProgressManager {
    bar: ProgressBar,
    log_interval: usize,
}

impl ProgressManager {
    /// Create a progress bar for `total_tiles` tiles
    pub fn new(total_tiles: usize) -> Self {
        let bar = ProgressBar::new(total_tiles as u64);
        bar.set_style(PROGRESS_STYLE.clone());
        bar.set_message("Matching");

        Self {
            bar,
            log_interval: Self::log_interval_for(total_tiles),
        }
    }

    /// Tiles between two progress log lines, never zero
    pub const fn log_interval_for(total_tiles: usize) -> usize {
        let interval = total_tiles / PROGRESS_LOG_STEPS;
        if interval == 0 { 1 } else { interval }
    }

    /// Record that `processed` of `total` tiles have been matched
    pub fn tile_matched(&self, processed: usize, total: usize) {
        self.bar.set_length(total as u64);
        self.bar.set_position(processed as u64);

        if processed % self.log_interval == 0 && processed < total {
            debug!("processed {processed} of {total}...");
        }
    }

    /// Number of tiles reported so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Remove the progress bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
