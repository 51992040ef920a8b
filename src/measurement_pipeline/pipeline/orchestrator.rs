use std::io::Read;
use std::path::Path;

use image::RgbImage;
use tracing::{debug, info, instrument, warn};

use crate::measurement_pipeline::{
    common::error::{MeasurementError, Result},
    contours::{Contour, ContourExtractor},
    decode::{PhotoReader, StandardPhotoReader},
    estimators::{ESTIMATORS, Measurement, View, estimate},
    pipeline::{MeasurementConfig, MeasurementSet, PipelineStage, PipelineTimings},
    preprocess::{PreprocessedImage, Preprocessor},
    resize::resize_to_width,
};

/// Front and side photo to measurement set. Holds no per-request state, so one
/// instance can serve any number of requests.
pub struct MeasurementPipeline<R: PhotoReader> {
    reader: R,
    config: MeasurementConfig,
}

impl MeasurementPipeline<StandardPhotoReader> {
    pub fn new(config: MeasurementConfig) -> Self {
        Self {
            reader: StandardPhotoReader,
            config,
        }
    }
}

impl Default for MeasurementPipeline<StandardPhotoReader> {
    fn default() -> Self {
        Self::new(MeasurementConfig::default())
    }
}

impl<R: PhotoReader> MeasurementPipeline<R> {
    pub fn with_custom(reader: R, config: MeasurementConfig) -> Self {
        Self { reader, config }
    }

    fn validate_dimensions(&self, image: &RgbImage) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(MeasurementError::InvalidDimensions(format!(
                "decoded photo is {width}x{height}"
            )));
        }

        if let Some(max) = self.config.max_dimension {
            if width > max || height > max {
                warn!("Photo dimensions {}x{} exceed maximum {}", width, height, max);
                return Err(MeasurementError::InvalidDimensions(format!(
                    "{width}x{height} exceeds maximum {max}"
                )));
            }
        }

        Ok(())
    }

    /// Caller-supplied height, or the configured placeholder, checked against the
    /// accepted range.
    fn resolve_height(&self, user_height: Option<f64>) -> Result<f64> {
        let height = user_height.unwrap_or(self.config.default_height_cm);

        if !height.is_finite() || height < 0.0 {
            return Err(MeasurementError::RangeError(
                "Height must be a finite non-negative number".to_string(),
            ));
        }
        if height > self.config.max_height_cm {
            warn!(height, max = self.config.max_height_cm, "Height out of range");
            return Err(MeasurementError::RangeError(
                "Height exceeds maximum limit".to_string(),
            ));
        }

        Ok(height)
    }

    fn contours_of(&self, image: &PreprocessedImage) -> Result<Vec<Contour>> {
        ContourExtractor::new(self.config.foreground).extract_preprocessed(image)
    }

    fn run_decoded(
        &self,
        front: &RgbImage,
        side: &RgbImage,
        user_height: Option<f64>,
        timings: &mut PipelineTimings,
    ) -> Result<MeasurementSet> {
        let (front, side) = {
            let _span = tracing::info_span!(
                "resize",
                target_width = self.config.canonical_width
            )
            .entered();
            timings.record(PipelineStage::Resized, || -> Result<_> {
                Ok((
                    resize_to_width(front, self.config.canonical_width)?,
                    resize_to_width(side, self.config.canonical_width)?,
                ))
            })?
        };

        let (front, side) = {
            let _span = tracing::info_span!("preprocess").entered();
            let preprocessor = Preprocessor::new(self.config.blur_sigma);
            timings.record(PipelineStage::Preprocessed, || {
                (preprocessor.process(&front), preprocessor.process(&side))
            })
        };

        let mut measurements = {
            let _span = tracing::info_span!("estimate").entered();
            timings.record(PipelineStage::Estimated, || -> Result<_> {
                let front_contours = self.contours_of(&front)?;
                let side_contours = self.contours_of(&side)?;
                debug!(
                    front = front_contours.len(),
                    side = side_contours.len(),
                    "Contours extracted"
                );

                let mut measurements = MeasurementSet::default();
                for spec in &ESTIMATORS {
                    let contours = match spec.view {
                        View::Front => &front_contours,
                        View::Side => &side_contours,
                    };
                    let value = estimate(spec, contours, self.config.empty_contours)?;
                    measurements.set(spec.measurement, value);
                }
                Ok(measurements)
            })?
        };

        let height = {
            let _span = tracing::info_span!("validate").entered();
            timings.record(PipelineStage::Validated, || {
                self.resolve_height(user_height)
            })?
        };

        let measurements = timings.record(PipelineStage::Assembled, || {
            measurements.set(Measurement::Height, height);
            measurements.rounded()
        });

        info!(
            height = measurements.height,
            user_height = user_height.is_some(),
            "Measurement extraction complete"
        );
        Ok(measurements)
    }

    pub fn measure(
        &self,
        front_image: &[u8],
        side_image: &[u8],
        user_height: Option<f64>,
    ) -> Result<MeasurementSet> {
        self.measure_with_timings(front_image, side_image, user_height)
            .map(|(measurements, _)| measurements)
    }

    #[instrument(skip_all, fields(front_size = front_image.len(), side_size = side_image.len()))]
    pub fn measure_with_timings(
        &self,
        front_image: &[u8],
        side_image: &[u8],
        user_height: Option<f64>,
    ) -> Result<(MeasurementSet, PipelineTimings)> {
        received(front_image.len(), side_image.len(), user_height);
        let mut timings = PipelineTimings::new();

        let (front, side) = {
            let _span = tracing::info_span!("decode").entered();
            timings.record(PipelineStage::Decoded, || -> Result<_> {
                let front = self.reader.read_rgb(front_image)?;
                self.validate_dimensions(&front)?;
                let side = self.reader.read_rgb(side_image)?;
                self.validate_dimensions(&side)?;
                Ok((front, side))
            })?
        };

        let measurements = self.run_decoded(&front, &side, user_height, &mut timings)?;
        Ok((measurements, timings))
    }

    /// Same as [`MeasurementPipeline::measure`] for photos already in memory.
    pub fn measure_images(
        &self,
        front: &RgbImage,
        side: &RgbImage,
        user_height: Option<f64>,
    ) -> Result<MeasurementSet> {
        received(front.len(), side.len(), user_height);
        self.validate_dimensions(front)?;
        self.validate_dimensions(side)?;
        self.run_decoded(front, side, user_height, &mut PipelineTimings::new())
    }

    #[instrument(skip_all)]
    pub fn measure_streams(
        &self,
        front_image: &mut dyn Read,
        side_image: &mut dyn Read,
        user_height: Option<f64>,
    ) -> Result<MeasurementSet> {
        info!(stage = %PipelineStage::Received, user_height, "Starting measurement extraction");
        let mut timings = PipelineTimings::new();

        let (front, side) = {
            let _span = tracing::info_span!("decode").entered();
            timings.record(PipelineStage::Decoded, || -> Result<_> {
                let front = self.reader.read_rgb_stream(front_image)?;
                self.validate_dimensions(&front)?;
                let side = self.reader.read_rgb_stream(side_image)?;
                self.validate_dimensions(&side)?;
                Ok((front, side))
            })?
        };

        self.run_decoded(&front, &side, user_height, &mut timings)
    }

    #[instrument(skip(self, front_path, side_path))]
    pub fn measure_files<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        front_path: P,
        side_path: Q,
        user_height: Option<f64>,
    ) -> Result<(MeasurementSet, PipelineTimings)> {
        let front_path = front_path.as_ref();
        let side_path = side_path.as_ref();

        info!(
            front = %front_path.display(),
            side = %side_path.display(),
            "Measuring files"
        );

        let read = |path: &Path| {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(path).map_err(|e| {
                MeasurementError::InputReadError(format!("{}: {}", path.display(), e))
            })
        };
        let front_data = read(front_path)?;
        let side_data = read(side_path)?;

        self.measure_with_timings(&front_data, &side_data, user_height)
    }

    pub fn config(&self) -> &MeasurementConfig {
        &self.config
    }
}

fn received(front_len: usize, side_len: usize, user_height: Option<f64>) {
    info!(
        stage = %PipelineStage::Received,
        front_len,
        side_len,
        user_height,
        "Starting measurement extraction"
    );
}
