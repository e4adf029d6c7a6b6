//! Image decoding and PNG export

use crate::io::error::{MosaicError, Result, WithContext};
use image::{ImageError, ImageFormat, ImageReader, RgbImage};
use std::path::Path;

/// Decode an image file into 8-bit RGB
///
/// The format is sniffed from the file contents, so extensions do not need to
/// match. Alpha and greyscale inputs are flattened to RGB.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or is not a decodable image
pub fn decode_rgb(path: &Path) -> Result<RgbImage> {
    let reader = ImageReader::open(path)
        .and_then(ImageReader::with_guessed_format)
        .map_err(ImageError::IoError)
        .with_path(path)?;
    let image = reader.decode().with_path(path)?;
    Ok(image.into_rgb8())
}

/// Load the image a mosaic is built for
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened
/// - The file is not a valid image
/// - The image has no pixels
pub fn load_target(path: &Path) -> Result<RgbImage> {
    let image = decode_rgb(path)?;
    if image.width() == 0 || image.height() == 0 {
        return Err(MosaicError::InvalidImage {
            reason: format!("target image '{}' has no pixels", path.display()),
        });
    }
    Ok(image)
}

/// Save an image as PNG regardless of the path's extension
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the specified path
pub fn export_png(image: &RgbImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| MosaicError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    image
        .save_with_format(output_path, ImageFormat::Png)
        .map_err(|e| MosaicError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
