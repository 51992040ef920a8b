//! Body measurement pipeline module
//!
//! This module turns a front and a side photograph into a set of body measurements,
//! with separate modules for decoding, resizing, preprocessing, contour extraction,
//! the estimators and the orchestration tying them together.

pub mod common;
pub mod contours;
pub mod decode;
pub mod estimators;
pub mod pipeline;
pub mod preprocess;
pub mod resize;

#[cfg(test)]
mod test_utils;

pub use common::{MeasurementError, Result};

pub use decode::{PhotoReader, StandardPhotoReader};

pub use contours::{BoundingBox, Contour, ContourExtractor, Foreground};

pub use estimators::{EmptyContourPolicy, EstimatorKind, Measurement, View};

pub use pipeline::{
    MeasurementConfig, MeasurementConfigBuilder, MeasurementPipeline, MeasurementSet,
    PipelineStage, PipelineTimings, extract_measurements,
};

pub use preprocess::{PreprocessedImage, Preprocessor};
pub use resize::{CANONICAL_WIDTH, resize_to_width};
