//! Tests for configuration defaults

#[cfg(test)]
mod tests {
    use photomosaic::io::configuration::{
        DEFAULT_LOG_FILTER, DEFAULT_OUTPUT_FILE, MAX_GRID_DIMENSION, PROGRESS_LOG_STEPS,
        PROGRESS_TEMPLATE, QUIET_LOG_FILTER,
    };

    // Tests the default output is a PNG in the working directory
    // Verified by changing the default file name
    #[test]
    fn test_default_output_file() {
        assert_eq!(DEFAULT_OUTPUT_FILE, "mosaic.png");
    }

    // Tests limits and cadences are usable
    // Verified by setting constants to zero
    #[test]
    fn test_limits_positive() {
        assert!(MAX_GRID_DIMENSION > 0);
        assert!(PROGRESS_LOG_STEPS > 0);
    }

    // Tests quiet logging is stricter than the default
    // Verified by swapping the two filters
    #[test]
    fn test_log_filters() {
        assert_eq!(DEFAULT_LOG_FILTER, "info");
        assert_eq!(QUIET_LOG_FILTER, "warn");
    }

    // Tests the progress template shows position and length
    // Verified by removing the length placeholder
    #[test]
    fn test_progress_template() {
        assert!(PROGRESS_TEMPLATE.contains("{pos}"));
        assert!(PROGRESS_TEMPLATE.contains("{len}"));
    }
}
