//! Tests for error types including source chaining, context and formatting

#[cfg(test)]
mod tests {
    use photomosaic::MosaicError;
    use photomosaic::io::error::{ErrorContext, WithContext, invalid_parameter};
    use std::error::Error;
    use std::path::{Path, PathBuf};

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = MosaicError::FileSystem {
            path: "/tmp/candidates".into(),
            operation: "read directory",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(MosaicError::EmptyCandidateSet.source().is_none());
    }

    // Tests exhaustion errors name the failing tile
    // Verified by omitting the tile index from the message
    #[test]
    fn test_pool_exhausted_message() {
        let error = MosaicError::CandidatePoolExhausted {
            tile_index: 7,
            total_tiles: 12,
        };

        let message = error.to_string();
        assert!(message.contains("tile 7"));
        assert!(message.contains("12"));
    }

    // Tests grid mismatch messages carry both counts
    // Verified by omitting the actual count
    #[test]
    fn test_grid_size_mismatch_message() {
        let error = MosaicError::GridSizeMismatch {
            grid: (2, 3),
            expected: 6,
            actual: 5,
        };

        let message = error.to_string();
        assert!(message.contains("2x3"));
        assert!(message.contains('6'));
        assert!(message.contains('5'));
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("grid-size", &"0x4", &"must be positive");

        let message = error.to_string();
        assert!(message.contains("grid-size"));
        assert!(message.contains("0x4"));
        assert!(message.contains("must be positive"));
    }

    // Tests ImageExport error with IO source
    // Verified by excluding source error from message
    #[test]
    fn test_image_export_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));

        let error = MosaicError::ImageExport {
            path: PathBuf::from("/restricted/mosaic.png"),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("/restricted/mosaic.png"));
        assert!(error.source().is_some());
        assert!(
            message.contains("access denied"),
            "Error message should include source error details: {message}"
        );
    }

    // Tests with_path replaces the unknown placeholder path
    // Verified by leaving the From conversion's placeholder in place
    #[test]
    fn test_with_path_fills_in_path() {
        let result: std::result::Result<(), image::ImageError> = Err(
            image::ImageError::IoError(std::io::Error::other("truncated")),
        );

        let err = result.with_path(Path::new("photos/cat.jpg")).unwrap_err();
        match err {
            MosaicError::ImageLoad { path, .. } => {
                assert_eq!(path, PathBuf::from("photos/cat.jpg"));
            }
            _ => unreachable!("Expected ImageLoad error type"),
        }
    }

    // Tests tile context leaves unrelated errors untouched
    // Verified by converting every error into pool exhaustion
    #[test]
    fn test_tile_context_ignores_other_errors() {
        let result: std::result::Result<(), MosaicError> =
            Err(MosaicError::InvalidImage {
                reason: "no pixels".to_string(),
            });

        let err = result
            .with_context(ErrorContext {
                tile: Some((1, 2)),
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(err, MosaicError::InvalidImage { .. }));
    }
}
