use std::f64::consts::PI;

use tracing::trace;

use crate::measurement_pipeline::common::error::{MeasurementError, Result};
use crate::measurement_pipeline::contours::Contour;
use crate::measurement_pipeline::estimators::kinds::{EstimatorKind, EstimatorSpec, Measurement};

/// What an estimator does when its photo yields no contours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyContourPolicy {
    /// Every estimator reports 0.
    #[default]
    Zero,
    /// Arm length fails with [`MeasurementError::NoContours`]; the rest report 0.
    Reference,
}

/// `sqrt(total_area / π) * 2π` over all contours; 0 for an empty set.
pub fn estimate_area_derived(contours: &[Contour]) -> f64 {
    let total_area: f64 = contours.iter().map(Contour::area).sum();
    (total_area / PI).sqrt() * 2.0 * PI
}

pub fn max_bounding_width(contours: &[Contour]) -> f64 {
    contours
        .iter()
        .map(|c| c.bounding_box().width)
        .max()
        .map_or(0.0, f64::from)
}

pub fn max_bounding_height(contours: &[Contour]) -> f64 {
    contours
        .iter()
        .map(|c| c.bounding_box().height)
        .max()
        .map_or(0.0, f64::from)
}

pub fn max_arc_length(contours: &[Contour]) -> f64 {
    contours.iter().map(Contour::arc_length).fold(0.0, f64::max)
}

/// Runs one dispatch-table entry against the contours of its view.
pub fn estimate(spec: &EstimatorSpec, contours: &[Contour], policy: EmptyContourPolicy) -> Result<f64> {
    if contours.is_empty()
        && policy == EmptyContourPolicy::Reference
        && spec.measurement == Measurement::ArmLength
    {
        return Err(MeasurementError::NoContours(spec.measurement));
    }

    let value = match spec.kind {
        EstimatorKind::AreaCircumference => estimate_area_derived(contours),
        EstimatorKind::MaxBoundingWidth => max_bounding_width(contours),
        EstimatorKind::MaxBoundingHeight => max_bounding_height(contours),
        EstimatorKind::MaxArcLength => max_arc_length(contours),
    };

    trace!(measurement = %spec.measurement, value, "estimated");
    Ok(value)
}
