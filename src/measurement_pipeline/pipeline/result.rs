use serde::Serialize;

use crate::measurement_pipeline::estimators::Measurement;

/// Rounds to one decimal place, ties to even (181.25 becomes 181.2).
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

/// The twelve measurements of one request.
///
/// Serializes to an object with exactly the twelve snake_case keys. Values are
/// nominally centimeters but come straight from pixel geometry.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct MeasurementSet {
    pub height: f64,
    pub chest: f64,
    pub waist: f64,
    pub hip: f64,
    pub shoulder_width: f64,
    pub arm_length: f64,
    pub leg_length: f64,
    pub neck_circumference: f64,
    pub head_circumference: f64,
    pub foot_length: f64,
    pub wrist_circumference: f64,
    pub bicep_circumference: f64,
}

impl MeasurementSet {
    fn slot(&mut self, measurement: Measurement) -> &mut f64 {
        match measurement {
            Measurement::Height => &mut self.height,
            Measurement::Chest => &mut self.chest,
            Measurement::Waist => &mut self.waist,
            Measurement::Hip => &mut self.hip,
            Measurement::ShoulderWidth => &mut self.shoulder_width,
            Measurement::ArmLength => &mut self.arm_length,
            Measurement::LegLength => &mut self.leg_length,
            Measurement::NeckCircumference => &mut self.neck_circumference,
            Measurement::HeadCircumference => &mut self.head_circumference,
            Measurement::FootLength => &mut self.foot_length,
            Measurement::WristCircumference => &mut self.wrist_circumference,
            Measurement::BicepCircumference => &mut self.bicep_circumference,
        }
    }

    pub fn get(&self, measurement: Measurement) -> f64 {
        match measurement {
            Measurement::Height => self.height,
            Measurement::Chest => self.chest,
            Measurement::Waist => self.waist,
            Measurement::Hip => self.hip,
            Measurement::ShoulderWidth => self.shoulder_width,
            Measurement::ArmLength => self.arm_length,
            Measurement::LegLength => self.leg_length,
            Measurement::NeckCircumference => self.neck_circumference,
            Measurement::HeadCircumference => self.head_circumference,
            Measurement::FootLength => self.foot_length,
            Measurement::WristCircumference => self.wrist_circumference,
            Measurement::BicepCircumference => self.bicep_circumference,
        }
    }

    pub fn set(&mut self, measurement: Measurement, value: f64) {
        *self.slot(measurement) = value;
    }

    /// `(measurement, value)` pairs in output order.
    pub fn entries(&self) -> impl Iterator<Item = (Measurement, f64)> + '_ {
        Measurement::ALL.into_iter().map(|m| (m, self.get(m)))
    }

    pub fn rounded(mut self) -> Self {
        for m in Measurement::ALL {
            let value = round_tenth(self.get(m));
            self.set(m, value);
        }
        self
    }
}
