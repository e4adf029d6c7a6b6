//! Tests for nearest-signature selection and its tie-breaking

#[cfg(test)]
mod tests {
    use photomosaic::MosaicError;
    use photomosaic::algorithm::matcher::best_match;
    use photomosaic::algorithm::signature::ColorAverage;

    // Tests the closest candidate is selected
    // Verified by selecting the maximum distance instead
    #[test]
    fn test_selects_closest() {
        let candidates = [
            ColorAverage::new(0, 0, 255),
            ColorAverage::new(250, 10, 0),
            ColorAverage::new(0, 255, 0),
        ];
        let index = best_match(ColorAverage::new(255, 0, 0), &candidates).unwrap();
        assert_eq!(index, 1);
    }

    // Tests exact matches at index 0 win over later duplicates
    // Verified by using less-or-equal in the comparison
    #[test]
    fn test_first_exact_match_wins() {
        let target = ColorAverage::new(40, 50, 60);
        let candidates = [target, ColorAverage::new(0, 0, 0), target, target];
        assert_eq!(best_match(target, &candidates).unwrap(), 0);
    }

    // Tests equally distant candidates resolve to the earliest one
    // Verified by scanning candidates in reverse
    #[test]
    fn test_tie_break_is_scan_order() {
        let target = ColorAverage::new(100, 100, 100);
        let candidates = [
            ColorAverage::new(0, 0, 0),
            ColorAverage::new(90, 100, 100),
            ColorAverage::new(110, 100, 100),
        ];
        assert_eq!(best_match(target, &candidates).unwrap(), 1);
    }

    // Tests a single candidate is always chosen
    // Verified by initialising the best index past the first candidate
    #[test]
    fn test_single_candidate() {
        let candidates = [ColorAverage::new(255, 255, 255)];
        assert_eq!(best_match(ColorAverage::new(0, 0, 0), &candidates).unwrap(), 0);
    }

    // Tests empty candidate sets are reported
    // Verified by defaulting to index 0 on empty input
    #[test]
    fn test_empty_candidates() {
        let result = best_match(ColorAverage::new(1, 2, 3), &[]);
        assert!(matches!(result, Err(MosaicError::EmptyCandidateSet)));
    }
}
