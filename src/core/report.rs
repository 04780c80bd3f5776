use crate::core::kinematics;
use crate::core::linkage;
use crate::core::validation::{FormFields, MotorFormFields};

pub const INVALID_VALUES_MESSAGE: &str = "Error: all values must be positive, non-zero numbers";

/// What the result panel shows for one set of inputs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Outcome {
    BestRatio(f64),
    InvalidValues,
}

impl Outcome {
    pub fn message(&self) -> String {
        match self {
            Outcome::BestRatio(ratio) => format!("Best gear ratio: {ratio}"),
            Outcome::InvalidValues => INVALID_VALUES_MESSAGE.to_string(),
        }
    }
}

// The search runs even when the gate fails; its result is dropped.
pub fn static_outcome(fields: &FormFields) -> Outcome {
    let ratio = linkage::best_gear_ratio(fields.geometry());
    if fields.is_valid() {
        Outcome::BestRatio(ratio)
    } else {
        Outcome::InvalidValues
    }
}

pub fn timed_outcome(fields: &MotorFormFields) -> Outcome {
    let ratio = kinematics::best_gear_ratio(fields.geometry(), fields.motor());
    if fields.is_valid() {
        Outcome::BestRatio(ratio)
    } else {
        Outcome::InvalidValues
    }
}
