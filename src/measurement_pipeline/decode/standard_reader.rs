//! Photo reader implementation using the image library.
//!
//! Supports any encoded format the `image` crate was built with (PNG, JPEG, BMP,
//! TIFF, WebP). The format is guessed from the content, never from a file name,
//! since uploads arrive as anonymous byte buffers.

use std::io::Cursor;

use image::{ImageReader, RgbImage};
use tracing::debug;

use crate::measurement_pipeline::common::error::{MeasurementError, Result};
use crate::measurement_pipeline::decode::reader::PhotoReader;

/// Photo reader backed by the `image` crate.
///
/// Every decoded photo is converted to 8-bit RGB regardless of its stored color
/// type: alpha is dropped, grayscale is expanded and 16-bit samples are reduced.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardPhotoReader;

impl PhotoReader for StandardPhotoReader {
    /// Decodes an encoded photo into canonical RGB.
    ///
    /// # Returns
    ///
    /// * `Ok(RgbImage)` - Decoded pixels in R, G, B order
    /// * `Err(MeasurementError::DecodeError)` - Empty, truncated or unsupported data
    fn read_rgb(&self, data: &[u8]) -> Result<RgbImage> {
        debug!("Decoding photo, {} bytes", data.len());

        if data.is_empty() {
            return Err(MeasurementError::DecodeError("empty image buffer".to_string()));
        }

        let decoded = ImageReader::new(Cursor::new(data))
            .with_guessed_format()?
            .decode()
            .map_err(|e| MeasurementError::DecodeError(e.to_string()))?;

        debug!(
            "Decoded photo: {}x{} ({:?})",
            decoded.width(),
            decoded.height(),
            decoded.color()
        );

        Ok(decoded.to_rgb8())
    }
}
