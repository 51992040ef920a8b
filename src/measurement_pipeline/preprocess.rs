//! Single-channel normalization ahead of contour extraction.
//!
//! Grayscale, 5x5 Gaussian blur, histogram equalization, then min-max stretch to
//! the full 0-255 range. Every step is deterministic.

use image::{GrayImage, Luma, RgbImage};
use imageproc::contrast::equalize_histogram;
use imageproc::filter::separable_filter_equal;
use tracing::debug;

/// Sigma a 5x5 Gaussian kernel gets when its sigma is derived from the kernel size.
pub const DEFAULT_BLUR_SIGMA: f32 = 1.1;

/// Taps per axis of the blur kernel.
pub const BLUR_KERNEL_SIZE: usize = 5;

/// Normalized 1-D Gaussian weights, applied along both axes.
pub fn gaussian_kernel(sigma: f32) -> [f32; BLUR_KERNEL_SIZE] {
    let center = (BLUR_KERNEL_SIZE / 2) as f32;
    let mut kernel: [f32; BLUR_KERNEL_SIZE] = std::array::from_fn(|i| {
        let x = i as f32 - center;
        (-(x * x) / (2.0 * sigma * sigma)).exp()
    });
    let sum: f32 = kernel.iter().sum();
    for w in &mut kernel {
        *w /= sum;
    }
    kernel
}

/// Output of the preprocessor.
///
/// Equalization can map neighbouring gray levels onto the same value when a
/// level holds few pixels, which is typical of blur halos around a subject.
/// `smoothed` keeps those levels apart for foreground splitting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreprocessedImage {
    /// Blurred grayscale, before equalization.
    pub smoothed: GrayImage,
    /// Equalized and min-max normalized grid.
    pub normalized: GrayImage,
}

impl PreprocessedImage {
    pub fn dimensions(&self) -> (u32, u32) {
        self.normalized.dimensions()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Preprocessor {
    /// Values <= 0 skip the blur step.
    pub blur_sigma: f32,
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self {
            blur_sigma: DEFAULT_BLUR_SIGMA,
        }
    }
}

impl Preprocessor {
    pub fn new(blur_sigma: f32) -> Self {
        Self { blur_sigma }
    }

    pub fn process(&self, image: &RgbImage) -> PreprocessedImage {
        debug!("Preprocessing {}x{} photo", image.width(), image.height());

        let gray = image::imageops::grayscale(image);
        let smoothed = if self.blur_sigma > 0.0 {
            separable_filter_equal(&gray, &gaussian_kernel(self.blur_sigma))
        } else {
            gray
        };
        let equalized = equalize_histogram(&smoothed);
        let normalized = normalize_min_max(&equalized);

        PreprocessedImage {
            smoothed,
            normalized,
        }
    }
}

/// Linearly maps the darkest pixel to 0 and the brightest to 255.
///
/// An image without contrast maps to all zeros.
pub fn normalize_min_max(image: &GrayImage) -> GrayImage {
    let (min, max) = image
        .pixels()
        .fold((u8::MAX, u8::MIN), |(lo, hi), p| (lo.min(p[0]), hi.max(p[0])));

    if image.is_empty() || min >= max {
        return GrayImage::new(image.width(), image.height());
    }

    let scale = 255.0 / f32::from(max - min);
    let mut out = image.clone();
    for pixel in out.pixels_mut() {
        let stretched = (f32::from(pixel[0] - min) * scale).round();
        *pixel = Luma([stretched.clamp(0.0, 255.0) as u8]);
    }
    out
}
