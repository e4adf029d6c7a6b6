//! Tests for the candidate arena and its take-and-remove operation

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage};
    use photomosaic::MosaicError;
    use photomosaic::algorithm::pool::CandidatePool;

    fn solid(value: u8) -> RgbImage {
        RgbImage::from_pixel(2, 2, Rgb([value, value, value]))
    }

    fn pool_of(count: u8) -> CandidatePool {
        CandidatePool::new((0..count).map(solid).collect())
    }

    // Verifies a new pool has every candidate available
    // Verified by initialising the availability set to zeros
    #[test]
    fn test_new_pool_all_available() {
        let pool = pool_of(4);
        assert_eq!(pool.len(), 4);
        assert_eq!(pool.capacity(), 4);
        assert!(!pool.is_empty());
        let indices: Vec<usize> = pool.available_ids().map(|id| id.index()).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    // Tests taking a candidate removes it from the available set only
    // Verified by skipping the availability update
    #[test]
    fn test_take_and_remove() {
        let mut pool = pool_of(3);
        let id = pool.id(1).unwrap();

        let taken = pool.take_and_remove(id).unwrap();
        assert_eq!(taken.get_pixel(0, 0), &Rgb([1, 1, 1]));

        assert!(!pool.is_available(id));
        assert_eq!(pool.len(), 2);
        assert_eq!(pool.capacity(), 3);
        let indices: Vec<usize> = pool.available_ids().map(|id| id.index()).collect();
        assert_eq!(indices, vec![0, 2]);

        // Taken images stay addressable for assembly
        assert!(pool.image(id).is_some());
    }

    // Tests a candidate cannot be taken twice
    // Verified by removing the availability check
    #[test]
    fn test_double_take_fails() {
        let mut pool = pool_of(2);
        let id = pool.id(0).unwrap();
        assert!(pool.take_and_remove(id).is_ok());

        let result = pool.take_and_remove(id);
        assert!(matches!(
            result,
            Err(MosaicError::CandidateUnavailable { index: 0 })
        ));
    }

    // Tests ids exist only for loaded candidates
    // Verified by returning ids for any index
    #[test]
    fn test_id_bounds() {
        let pool = pool_of(2);
        assert!(pool.id(1).is_some());
        assert!(pool.id(2).is_none());
    }

    // Tests the pool reports empty once everything is taken
    // Verified by counting capacity instead of availability
    #[test]
    fn test_exhaustion() {
        let mut pool = pool_of(2);
        for index in 0..2 {
            let id = pool.id(index).unwrap();
            assert!(pool.take_and_remove(id).is_ok());
        }
        assert!(pool.is_empty());
        assert_eq!(pool.len(), 0);
        assert_eq!(pool.available_ids().count(), 0);
        assert_eq!(pool.to_string(), "CandidatePool(0 of 2 available)");
    }

    // Tests an empty pool has nothing to offer
    // Verified by initialising availability with a single bit
    #[test]
    fn test_empty_pool() {
        let pool = CandidatePool::new(Vec::new());
        assert!(pool.is_empty());
        assert!(pool.id(0).is_none());
    }
}
