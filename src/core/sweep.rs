use crate::core::grid::ratio_grid;
use crate::core::kinematics::{self, BackdropTouch, MotorParameters};
use crate::core::linkage::{self, LinkageGeometry};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaticSample {
    pub ratio: f64,
    pub arm_height_in: f64,
    pub arm_length_in: f64,
    pub touching: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimedSample {
    pub ratio: f64,
    pub touch: Option<BackdropTouch>,
}

pub fn static_samples(geometry: LinkageGeometry) -> Vec<StaticSample> {
    ratio_grid()
        .map(|ratio| {
            let bar1_angle = linkage::bar1_angle_for_ratio(ratio);
            StaticSample {
                ratio,
                arm_height_in: linkage::arm_height(bar1_angle, geometry, ratio),
                arm_length_in: linkage::horizontal_distance(bar1_angle, geometry, ratio),
                touching: linkage::is_touching_backdrop(bar1_angle, geometry, ratio),
            }
        })
        .collect()
}

pub fn timed_samples(geometry: LinkageGeometry, motor: MotorParameters) -> Vec<TimedSample> {
    ratio_grid()
        .map(|ratio| TimedSample {
            ratio,
            touch: kinematics::first_touch(geometry, motor, ratio),
        })
        .collect()
}
