use image::GrayImage;
use imageproc::contours::find_contours;
use imageproc::contrast::{ThresholdType, otsu_level, threshold};
use tracing::{debug, trace};

use crate::measurement_pipeline::common::error::{MeasurementError, Result};
use crate::measurement_pipeline::contours::types::Contour;
use crate::measurement_pipeline::preprocess::PreprocessedImage;

/// Which side of the Otsu level counts as the subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Foreground {
    /// Subject darker than the backdrop.
    #[default]
    Dark,
    /// Subject brighter than the backdrop.
    Light,
}

/// Finds the outermost outlines of foreground regions in a normalized image.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContourExtractor {
    pub foreground: Foreground,
}

impl ContourExtractor {
    pub fn new(foreground: Foreground) -> Self {
        Self { foreground }
    }

    /// Binary mask of the subject: 255 for foreground, 0 for backdrop.
    ///
    /// Returns `None` when the image has no contrast to split on.
    pub fn foreground_mask(&self, image: &GrayImage) -> Option<GrayImage> {
        if !has_contrast(image) {
            return None;
        }
        Some(self.split(image))
    }

    /// Traces the outer borders of an image, splitting foreground on its own levels.
    pub fn extract(&self, image: &GrayImage) -> Result<Vec<Contour>> {
        self.trace(image, image)
    }

    /// Traces a preprocessed photo.
    ///
    /// The normalized grid decides whether there is anything to trace; the
    /// foreground is split on the smoothed intensities, where the blur halo keeps
    /// its mid-gray levels.
    pub fn extract_preprocessed(&self, image: &PreprocessedImage) -> Result<Vec<Contour>> {
        self.trace(&image.normalized, &image.smoothed)
    }

    fn split(&self, intensities: &GrayImage) -> GrayImage {
        let level = otsu_level(intensities);
        trace!("Otsu level {}", level);

        let threshold_type = match self.foreground {
            Foreground::Dark => ThresholdType::BinaryInverted,
            Foreground::Light => ThresholdType::Binary,
        };
        threshold(intensities, level, threshold_type)
    }

    fn trace(&self, normalized: &GrayImage, intensities: &GrayImage) -> Result<Vec<Contour>> {
        let (width, height) = normalized.dimensions();
        if width == 0 || height == 0 {
            return Err(MeasurementError::InvalidInput(format!(
                "cannot trace contours in an empty {width}x{height} image"
            )));
        }
        if intensities.dimensions() != (width, height) {
            return Err(MeasurementError::InvalidInput(format!(
                "intensity grid {:?} does not match {width}x{height} image",
                intensities.dimensions()
            )));
        }

        if !has_contrast(normalized) || !has_contrast(intensities) {
            debug!("No contrast in {}x{} image, no contours", width, height);
            return Ok(Vec::new());
        }
        let mask = self.split(intensities);

        // Top-level borders are always outer borders; holes and anything nested
        // inside them carry a parent.
        let contours: Vec<Contour> = find_contours::<i32>(&mask)
            .into_iter()
            .filter(|c| c.parent.is_none())
            .map(|c| Contour::from_chain(c.points))
            .collect();

        debug!("Found {} external contour(s)", contours.len());
        Ok(contours)
    }
}

fn has_contrast(image: &GrayImage) -> bool {
    let (min, max) = image
        .pixels()
        .fold((u8::MAX, u8::MIN), |(lo, hi), p| (lo.min(p[0]), hi.max(p[0])));
    min < max
}
