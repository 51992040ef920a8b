use thiserror::Error;

use crate::measurement_pipeline::estimators::Measurement;

#[derive(Error, Debug)]
pub enum MeasurementError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to decode image: {0}")]
    DecodeError(String),

    #[error("Invalid image dimensions: {0}")]
    InvalidDimensions(String),

    #[error("Invalid contour input: {0}")]
    InvalidInput(String),

    #[error("No contours found for {0}")]
    NoContours(Measurement),

    #[error("{0}")]
    RangeError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MeasurementError>;
