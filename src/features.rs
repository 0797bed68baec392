//! Image feature extraction for example construction.
//!
//! Decodes an image file, resizes it to the requested dimensions, and
//! normalizes pixel values to the [0, 1] range, ready to pair with a target
//! in an `Example`.

use std::path::Path;

/// Decodes an image file, resizes to `width × height`, and flattens as
/// R, G, B, ... normalized to [0, 1].
///
/// Returns a flat `Vec<f64>` of length `width * height * 3`.
pub fn rgb_features<P: AsRef<Path>>(path: P, width: u32, height: u32) -> Result<Vec<f64>, String> {
    let img = image::open(path).map_err(|e| e.to_string())?;
    let resized = img.resize_exact(width, height, image::imageops::FilterType::Lanczos3);
    let rgb = resized.to_rgb8();
    Ok(rgb.pixels().flat_map(|p| p.0.iter().map(|&c| c as f64 / 255.0)).collect())
}

/// Decodes an image file, resizes to `width × height`, converts to
/// grayscale, and normalizes pixels to [0, 1].
///
/// Returns a flat `Vec<f64>` of length `width * height`.
pub fn grayscale_features<P: AsRef<Path>>(
    path: P,
    width: u32,
    height: u32,
) -> Result<Vec<f64>, String> {
    let img = image::open(path).map_err(|e| e.to_string())?;
    let resized = img.resize_exact(width, height, image::imageops::FilterType::Lanczos3);
    let gray = resized.to_luma8();
    Ok(gray.pixels().map(|p| p.0[0] as f64 / 255.0).collect())
}
