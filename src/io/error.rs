//! Error types and context management for mosaic construction

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all mosaic operations
#[derive(Debug)]
pub enum MosaicError {
    /// Failed to decode an image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Image cannot be used for colour analysis
    InvalidImage {
        /// Description of what's wrong with the image
        reason: String,
    },

    /// No candidate signatures were available to match against
    EmptyCandidateSet,

    /// Number of images handed to grid assembly disagrees with the grid
    GridSizeMismatch {
        /// Grid dimensions (rows, cols)
        grid: (u32, u32),
        /// Number of cells in the grid
        expected: usize,
        /// Number of images supplied
        actual: usize,
    },

    /// Every candidate was used up before all tiles were matched
    ///
    /// Only reachable when candidate reuse is disabled.
    CandidatePoolExhausted {
        /// Row-major index of the tile that could not be matched
        tile_index: usize,
        /// Total number of tiles in the grid
        total_tiles: usize,
    },

    /// Candidate was already taken or never existed in the pool
    CandidateUnavailable {
        /// Load-order index of the candidate
        index: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save the mosaic to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::InvalidImage { reason } => {
                write!(f, "Invalid image: {reason}")
            }
            Self::EmptyCandidateSet => {
                write!(f, "No candidate images available to match against")
            }
            Self::GridSizeMismatch {
                grid,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Grid {}x{} needs {expected} images but {actual} were supplied",
                    grid.0, grid.1
                )
            }
            Self::CandidatePoolExhausted {
                tile_index,
                total_tiles,
            } => {
                write!(
                    f,
                    "Candidate pool exhausted at tile {tile_index} of {total_tiles} (reuse disabled)"
                )
            }
            Self::CandidateUnavailable { index } => {
                write!(f, "Candidate {index} is not available in the pool")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for MosaicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for mosaic results
pub type Result<T> = std::result::Result<T, MosaicError>;

/// Additional context to enrich error messages
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// File involved in the failed operation
    pub path: Option<PathBuf>,
    /// Tile being matched, as (`tile_index`, `total_tiles`)
    pub tile: Option<(usize, usize)>,
}

/// Enriches errors with the state they occurred in
pub trait WithContext<T> {
    /// Add error context to a Result
    ///
    /// # Errors
    ///
    /// Propagates the original error with additional context applied
    fn with_context(self, context: ErrorContext) -> Result<T>;

    /// Attach the path of the file being read or written
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path applied
    fn with_path(self, path: &Path) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<MosaicError>,
{
    fn with_context(self, context: ErrorContext) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            // An empty match set mid-run means the pool ran dry
            if let (MosaicError::EmptyCandidateSet, Some((tile_index, total_tiles))) =
                (&error, context.tile)
            {
                return MosaicError::CandidatePoolExhausted {
                    tile_index,
                    total_tiles,
                };
            }
            if let (
                MosaicError::ImageLoad { path, .. }
                | MosaicError::ImageExport { path, .. }
                | MosaicError::FileSystem { path, .. },
                Some(context_path),
            ) = (&mut error, context.path)
            {
                *path = context_path;
            }
            error
        })
    }

    fn with_path(self, path: &Path) -> Result<T> {
        self.with_context(ErrorContext {
            path: Some(path.to_path_buf()),
            ..Default::default()
        })
    }
}

impl From<image::ImageError> for MosaicError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for MosaicError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MosaicError {
    MosaicError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
