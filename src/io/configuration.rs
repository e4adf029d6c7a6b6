//! Runtime configuration defaults

// Output settings
/// Output path used when `--output-file` is not given
pub const DEFAULT_OUTPUT_FILE: &str = "mosaic.png";

// Safety limit to prevent excessive memory allocation
/// Maximum allowed number of rows or columns in the grid
pub const MAX_GRID_DIMENSION: u32 = 10_000;

// Logging settings
/// Log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";
/// Log filter used with `--quiet` when `RUST_LOG` is unset
pub const QUIET_LOG_FILTER: &str = "warn";

// Progress display settings
/// Number of progress log lines emitted over a full run
pub const PROGRESS_LOG_STEPS: usize = 10;
/// Template for the tile matching progress bar
pub const PROGRESS_TEMPLATE: &str =
    "[{elapsed_precise}] {msg} [{bar:40.cyan/blue}] {pos}/{len} tiles";
