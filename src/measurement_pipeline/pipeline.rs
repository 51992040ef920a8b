//! Measurement orchestration module
//!
//! Sequences decode, resize, preprocess and the estimators for a front/side photo
//! pair, then validates the height and assembles the rounded measurement set.

mod config;
mod orchestrator;
mod result;
mod stage;
mod timing;


pub use config::{DEFAULT_HEIGHT_CM, MAX_HEIGHT_CM, MeasurementConfig, MeasurementConfigBuilder};
pub use orchestrator::MeasurementPipeline;
pub use result::{MeasurementSet, round_tenth};
pub use stage::PipelineStage;
pub use timing::{PipelineTimings, StageTiming};

use crate::measurement_pipeline::common::error::Result;

/// Stateless request handler: two encoded photos and an optional height in,
/// measurements out, using the default configuration.
pub fn extract_measurements(
    front_image: &[u8],
    side_image: &[u8],
    user_height: Option<f64>,
) -> Result<MeasurementSet> {
    MeasurementPipeline::default().measure(front_image, side_image, user_height)
}
