//! Best-effort loading of candidate images from a directory

use crate::io::error::{MosaicError, Result};
use crate::io::image::decode_rgb;
use image::RgbImage;
use log::{debug, warn};
use std::path::{Path, PathBuf};

/// Candidates decoded from a directory, in path order
#[derive(Debug, Default)]
pub struct LoadedCandidates {
    /// Successfully decoded images
    pub images: Vec<RgbImage>,
    /// Source path of each entry in `images`
    pub paths: Vec<PathBuf>,
    /// Files that could not be decoded and were left out
    pub skipped: Vec<PathBuf>,
}

impl LoadedCandidates {
    /// Number of usable candidates
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Test if no file could be used
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

/// Decode every regular file in `dir` as a candidate image
///
/// Files are visited in sorted path order so candidate indices are
/// reproducible. Files that fail to decode are logged and skipped;
/// subdirectories are ignored.
///
/// # Errors
///
/// Returns an error if the directory itself cannot be read
pub fn load_candidates(dir: &Path) -> Result<LoadedCandidates> {
    let read_error = |source| MosaicError::FileSystem {
        path: dir.to_path_buf(),
        operation: "read directory",
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_error)? {
        let path = entry.map_err(read_error)?.path();
        if path.is_file() {
            files.push(path);
        } else {
            debug!("ignoring non-file entry {}", path.display());
        }
    }
    files.sort();

    let mut loaded = LoadedCandidates::default();
    for path in files {
        match decode_rgb(&path) {
            Ok(image) => {
                loaded.images.push(image);
                loaded.paths.push(path);
            }
            Err(error) => {
                warn!("Invalid image skipped: {error}");
                loaded.skipped.push(path);
            }
        }
    }

    debug!(
        "loaded {} candidates from {} ({} skipped)",
        loaded.len(),
        dir.display(),
        loaded.skipped.len()
    );
    Ok(loaded)
}
