//! Aspect-preserving rescale to the canonical working width.

use image::RgbImage;
use image::imageops::{self, FilterType};
use tracing::debug;

use crate::measurement_pipeline::common::error::{MeasurementError, Result};

/// Width every photo is rescaled to before preprocessing.
pub const CANONICAL_WIDTH: u32 = 800;

/// Height that keeps `width:height` when the width becomes `target_width`.
///
/// Truncates like an integer pixel count would, but never drops below one row.
pub fn scaled_height(width: u32, height: u32, target_width: u32) -> u32 {
    let scaled = u64::from(height) * u64::from(target_width) / u64::from(width);
    scaled.clamp(1, u64::from(u32::MAX)) as u32
}

pub fn resize_to_width(image: &RgbImage, target_width: u32) -> Result<RgbImage> {
    let (width, height) = image.dimensions();

    if target_width == 0 {
        return Err(MeasurementError::InvalidDimensions(
            "target width must be positive".to_string(),
        ));
    }
    if width == 0 || height == 0 {
        return Err(MeasurementError::InvalidDimensions(format!(
            "cannot resize an empty {width}x{height} image"
        )));
    }

    let target_height = scaled_height(width, height, target_width);
    debug!("Resizing {}x{} -> {}x{}", width, height, target_width, target_height);

    Ok(imageops::resize(image, target_width, target_height, FilterType::Triangle))
}
