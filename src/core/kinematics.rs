use std::f64::consts::PI;

use tracing::debug;

use crate::core::grid::{ratio_grid, time_grid};
use crate::core::linkage::LinkageGeometry;

/// Converts `time * rpm * PI` into the bar 1 angle in radians (60 s * 14).
pub const RPM_ANGLE_DIVISOR: f64 = 840.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotorParameters {
    pub motor_rpm: f64,
}

/// Arm tip state at the first time step where it meets the backdrop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackdropTouch {
    pub time: f64,
    pub vertical_in: f64,
    pub horizontal_in: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimedSolution {
    pub ratio: f64,
    pub touch: Option<BackdropTouch>,
}

pub fn bar1_angle_at(time: f64, motor: MotorParameters) -> f64 {
    time * motor.motor_rpm * PI / RPM_ANGLE_DIVISOR
}

/// Returns `(horizontal, vertical)` of the bar 2 tip, with bar 2 turning
/// `ratio` times as far as bar 1.
pub fn tip_position(geometry: LinkageGeometry, ratio: f64, theta: f64) -> (f64, f64) {
    let vertical =
        geometry.bar2_length_in * (ratio * theta).sin() + geometry.bar1_length_in * theta.sin();
    let horizontal = geometry.bar2_length_in * (ratio * theta).cos()
        + geometry.bar1_length_in * theta.cos()
        + geometry.arm_distance_in;
    (horizontal, vertical)
}

/// Slope of the backdrop plane. Unlike the static model, this one converts
/// the backdrop angle from degrees.
pub fn backdrop_slope(geometry: LinkageGeometry) -> f64 {
    (geometry.backdrop_angle_deg * PI / 180.0).tan()
}

pub fn is_touching_backdrop(horizontal: f64, vertical: f64, slope: f64) -> bool {
    -horizontal >= vertical * slope
}

/// Scans the time grid for one ratio and stops at the first touching step.
pub fn first_touch(
    geometry: LinkageGeometry,
    motor: MotorParameters,
    ratio: f64,
) -> Option<BackdropTouch> {
    let slope = backdrop_slope(geometry);
    time_grid().find_map(|time| {
        let (horizontal, vertical) = tip_position(geometry, ratio, bar1_angle_at(time, motor));
        is_touching_backdrop(horizontal, vertical, slope).then_some(BackdropTouch {
            time,
            vertical_in: vertical,
            horizontal_in: horizontal,
        })
    })
}

/// Picks the ratio whose first touch lands highest on the backdrop.
///
/// Only strictly higher touches replace the current best, and the best
/// starts at height 0, so a ratio that first touches at or below the axis
/// never wins.
pub fn solve(geometry: LinkageGeometry, motor: MotorParameters) -> TimedSolution {
    let mut best = TimedSolution {
        ratio: 0.0,
        touch: None,
    };
    let mut best_vertical = 0.0;

    for ratio in ratio_grid() {
        let Some(touch) = first_touch(geometry, motor, ratio) else {
            continue;
        };
        if touch.vertical_in > best_vertical {
            best_vertical = touch.vertical_in;
            best = TimedSolution {
                ratio,
                touch: Some(touch),
            };
        }
    }

    debug!(
        ratio = best.ratio,
        touch_height = best_vertical,
        "timed gear ratio search finished"
    );
    best
}

pub fn best_gear_ratio(geometry: LinkageGeometry, motor: MotorParameters) -> f64 {
    solve(geometry, motor).ratio
}
