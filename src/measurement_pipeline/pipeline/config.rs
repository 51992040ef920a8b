//! Measurement pipeline configuration types

use crate::measurement_pipeline::contours::Foreground;
use crate::measurement_pipeline::estimators::EmptyContourPolicy;
use crate::measurement_pipeline::preprocess::DEFAULT_BLUR_SIGMA;
use crate::measurement_pipeline::resize::CANONICAL_WIDTH;

/// Upper bound on an accepted height, in centimeters.
pub const MAX_HEIGHT_CM: f64 = 250.0;

/// Height reported when the caller does not supply one.
pub const DEFAULT_HEIGHT_CM: f64 = 175.0;

/// Configuration for a measurement run
#[derive(Debug, Clone)]
pub struct MeasurementConfig {
    /// Width both photos are rescaled to before preprocessing
    pub canonical_width: u32,
    /// Gaussian blur sigma used by the preprocessor (<= 0 disables the blur)
    pub blur_sigma: f32,
    /// Whether the subject is darker or lighter than the backdrop
    pub foreground: Foreground,
    /// Behaviour of estimators on photos without contours
    pub empty_contours: EmptyContourPolicy,
    /// Heights above this fail the request
    pub max_height_cm: f64,
    /// Height used when none is supplied
    pub default_height_cm: f64,
    /// Whether to check decoded photo dimensions before resizing
    pub validate_dimensions: bool,
    /// Largest accepted decoded width or height, in pixels
    pub max_dimension: Option<u32>,
}

impl Default for MeasurementConfig {
    fn default() -> Self {
        Self {
            canonical_width: CANONICAL_WIDTH,
            blur_sigma: DEFAULT_BLUR_SIGMA,
            foreground: Foreground::Dark,
            empty_contours: EmptyContourPolicy::Zero,
            max_height_cm: MAX_HEIGHT_CM,
            default_height_cm: DEFAULT_HEIGHT_CM,
            validate_dimensions: true,
            max_dimension: Some(20_000),
        }
    }
}

impl MeasurementConfig {
    pub fn builder() -> MeasurementConfigBuilder {
        MeasurementConfigBuilder::default()
    }
}

/// Builder for MeasurementConfig
#[derive(Default)]
pub struct MeasurementConfigBuilder {
    canonical_width: Option<u32>,
    blur_sigma: Option<f32>,
    foreground: Option<Foreground>,
    empty_contours: Option<EmptyContourPolicy>,
    max_height_cm: Option<f64>,
    default_height_cm: Option<f64>,
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<u32>>,
}

impl MeasurementConfigBuilder {
    pub fn canonical_width(mut self, width: u32) -> Self {
        self.canonical_width = Some(width);
        self
    }

    pub fn blur_sigma(mut self, sigma: f32) -> Self {
        self.blur_sigma = Some(sigma);
        self
    }

    pub fn foreground(mut self, foreground: Foreground) -> Self {
        self.foreground = Some(foreground);
        self
    }

    pub fn empty_contours(mut self, policy: EmptyContourPolicy) -> Self {
        self.empty_contours = Some(policy);
        self
    }

    pub fn max_height_cm(mut self, max: f64) -> Self {
        self.max_height_cm = Some(max);
        self
    }

    pub fn default_height_cm(mut self, height: f64) -> Self {
        self.default_height_cm = Some(height);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max: Option<u32>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn build(self) -> MeasurementConfig {
        let default = MeasurementConfig::default();
        MeasurementConfig {
            canonical_width: self.canonical_width.unwrap_or(default.canonical_width),
            blur_sigma: self.blur_sigma.unwrap_or(default.blur_sigma),
            foreground: self.foreground.unwrap_or(default.foreground),
            empty_contours: self.empty_contours.unwrap_or(default.empty_contours),
            max_height_cm: self.max_height_cm.unwrap_or(default.max_height_cm),
            default_height_cm: self.default_height_cm.unwrap_or(default.default_height_cm),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
        }
    }
}
