//! Aspect-preserving downscaling of candidate images to tile size

use image::{RgbImage, imageops};

/// Dimensions of an image after shrinking it to fit a bounding box
///
/// Images that already fit are left alone; larger ones are scaled down so
/// the limiting side matches the box exactly and the other side keeps the
/// aspect ratio, rounded to the nearest pixel and never below 1.
pub const fn fit_within(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width <= max_width && height <= max_height {
        return (width, height);
    }

    let (w, h) = (width as u64, height as u64);
    let (max_w, max_h) = (max_width as u64, max_height as u64);

    // Compare w/h against max_w/max_h without leaving integer arithmetic
    let (new_w, new_h) = if w * max_h >= h * max_w {
        (max_w, (h * max_w + w / 2) / w)
    } else {
        ((w * max_h + h / 2) / h, max_h)
    };

    let new_w = if new_w == 0 { 1 } else { new_w };
    let new_h = if new_h == 0 { 1 } else { new_h };
    (new_w as u32, new_h as u32)
}

/// Shrink an image so it fits within `max_width x max_height`
///
/// Never upscales; returns the input unchanged when it already fits.
pub fn resize_to_fit(image: RgbImage, max_width: u32, max_height: u32) -> RgbImage {
    let (width, height) = fit_within(image.width(), image.height(), max_width, max_height);
    if (width, height) == image.dimensions() {
        image
    } else {
        imageops::thumbnail(&image, width, height)
    }
}
