//! Tests for log initialisation

#[cfg(test)]
mod tests {
    use photomosaic::io::configuration::{DEFAULT_LOG_FILTER, QUIET_LOG_FILTER};
    use photomosaic::io::logging::{default_filter, init};

    // Tests quiet mode selects the warn filter
    // Verified by ignoring the quiet flag
    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter(false), DEFAULT_LOG_FILTER);
        assert_eq!(default_filter(true), QUIET_LOG_FILTER);
    }

    // Tests a second initialisation is refused instead of panicking
    // Verified by calling the panicking init variant
    #[test]
    fn test_init_only_once() {
        let _first = init(true);
        assert!(!init(false));
    }
}
