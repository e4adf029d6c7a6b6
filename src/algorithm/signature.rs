//! Average-colour signatures used as the matching key for tiles and candidates

use crate::io::error::{MosaicError, Result};
use image::RgbImage;
use std::collections::HashMap;
use std::fmt;

/// Mean (R, G, B) of every pixel in an image, truncated to integers
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ColorAverage {
    /// Red channel mean
    pub r: u8,
    /// Green channel mean
    pub g: u8,
    /// Blue channel mean
    pub b: u8,
}

impl ColorAverage {
    /// Create a signature from channel values
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Squared Euclidean distance over the three channels
    pub const fn squared_distance(&self, other: &Self) -> u32 {
        let dr = self.r.abs_diff(other.r) as u32;
        let dg = self.g.abs_diff(other.g) as u32;
        let db = self.b.abs_diff(other.b) as u32;
        dr * dr + dg * dg + db * db
    }
}

impl From<[u8; 3]> for ColorAverage {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for ColorAverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Compute the average colour of an image
///
/// Pixels are first grouped by exact colour so images with large flat areas
/// accumulate one `count * channel` product per distinct colour. Each channel
/// sum is divided by the pixel count and truncated.
///
/// # Errors
///
/// Returns an error if the image has no pixels
pub fn average_color(image: &RgbImage) -> Result<ColorAverage> {
    let pixel_count = u64::from(image.width()) * u64::from(image.height());
    if pixel_count == 0 {
        return Err(MosaicError::InvalidImage {
            reason: format!(
                "cannot average a {}x{} image with no pixels",
                image.width(),
                image.height()
            ),
        });
    }

    let mut color_counts: HashMap<[u8; 3], u64> = HashMap::new();
    for pixel in image.pixels() {
        *color_counts.entry(pixel.0).or_insert(0) += 1;
    }

    let mut sums = [0u64; 3];
    for ([r, g, b], count) in color_counts {
        for (sum, channel) in sums.iter_mut().zip([r, g, b]) {
            *sum += count * u64::from(channel);
        }
    }

    let [r, g, b] = sums.map(|sum| (sum / pixel_count) as u8);
    Ok(ColorAverage::new(r, g, b))
}
