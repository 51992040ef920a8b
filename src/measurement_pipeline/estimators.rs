//! Measurement estimators
//!
//! Crude geometric proxies over contour sets: circle-equivalent circumference of the
//! summed area, bounding-box extents and arc length. Values are in pixels; no
//! calibration to physical units is attempted.

mod formulas;
mod kinds;


pub use formulas::{
    EmptyContourPolicy, estimate, estimate_area_derived, max_arc_length, max_bounding_height,
    max_bounding_width,
};
pub use kinds::{ESTIMATORS, EstimatorKind, EstimatorSpec, Measurement, View};
