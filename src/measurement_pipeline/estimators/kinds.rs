//! Measurement names and the estimator dispatch table

use std::fmt;

use serde::Serialize;

/// The twelve reported body measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Measurement {
    Height,
    Chest,
    Waist,
    Hip,
    ShoulderWidth,
    ArmLength,
    LegLength,
    NeckCircumference,
    HeadCircumference,
    FootLength,
    WristCircumference,
    BicepCircumference,
}

impl Measurement {
    /// All measurements, in output order.
    pub const ALL: [Measurement; 12] = [
        Measurement::Height,
        Measurement::Chest,
        Measurement::Waist,
        Measurement::Hip,
        Measurement::ShoulderWidth,
        Measurement::ArmLength,
        Measurement::LegLength,
        Measurement::NeckCircumference,
        Measurement::HeadCircumference,
        Measurement::FootLength,
        Measurement::WristCircumference,
        Measurement::BicepCircumference,
    ];

    /// Key used in the serialized measurement set.
    pub fn key(self) -> &'static str {
        match self {
            Measurement::Height => "height",
            Measurement::Chest => "chest",
            Measurement::Waist => "waist",
            Measurement::Hip => "hip",
            Measurement::ShoulderWidth => "shoulder_width",
            Measurement::ArmLength => "arm_length",
            Measurement::LegLength => "leg_length",
            Measurement::NeckCircumference => "neck_circumference",
            Measurement::HeadCircumference => "head_circumference",
            Measurement::FootLength => "foot_length",
            Measurement::WristCircumference => "wrist_circumference",
            Measurement::BicepCircumference => "bicep_circumference",
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Which photo a measurement is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Front,
    Side,
}

/// Geometric proxy turning a contour set into one scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EstimatorKind {
    /// Circumference of the circle whose area equals the summed contour area.
    AreaCircumference,
    /// Widest axis-aligned bounding box.
    MaxBoundingWidth,
    /// Tallest axis-aligned bounding box.
    MaxBoundingHeight,
    /// Longest closed perimeter.
    MaxArcLength,
}

/// One row of the dispatch table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EstimatorSpec {
    pub measurement: Measurement,
    pub kind: EstimatorKind,
    pub view: View,
}

const fn spec(measurement: Measurement, kind: EstimatorKind, view: View) -> EstimatorSpec {
    EstimatorSpec {
        measurement,
        kind,
        view,
    }
}

/// Every image-derived measurement. Height is resolved separately and never read
/// from pixels.
pub static ESTIMATORS: [EstimatorSpec; 11] = [
    spec(Measurement::Chest, EstimatorKind::AreaCircumference, View::Front),
    spec(Measurement::Waist, EstimatorKind::AreaCircumference, View::Front),
    spec(Measurement::Hip, EstimatorKind::AreaCircumference, View::Side),
    spec(Measurement::ShoulderWidth, EstimatorKind::MaxBoundingWidth, View::Front),
    spec(Measurement::ArmLength, EstimatorKind::MaxArcLength, View::Front),
    spec(Measurement::LegLength, EstimatorKind::MaxArcLength, View::Side),
    spec(Measurement::NeckCircumference, EstimatorKind::AreaCircumference, View::Front),
    spec(Measurement::HeadCircumference, EstimatorKind::AreaCircumference, View::Front),
    spec(Measurement::FootLength, EstimatorKind::MaxBoundingHeight, View::Side),
    spec(Measurement::WristCircumference, EstimatorKind::AreaCircumference, View::Front),
    spec(Measurement::BicepCircumference, EstimatorKind::AreaCircumference, View::Front),
];
