use tracing::debug;

use crate::core::grid::ratio_grid;

/// Dimensions of the two-bar arm and where the backdrop sits relative to its
/// rotation axis. Lengths are in inches, the angle in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinkageGeometry {
    pub bar1_length_in: f64,
    pub bar2_length_in: f64,
    pub arm_distance_in: f64,
    pub backdrop_angle_deg: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaticSolution {
    pub ratio: f64,
    pub arm_height_in: f64,
    pub arm_length_in: f64,
}

// NOTE: every angle in this model is a degree value handed straight to
// sin/cos, which take radians. Results depend on that, so no conversion is
// applied here. The timed model in `kinematics` does convert the backdrop angle.

/// Bar 2 angle for a bar 1 angle (0 = straight up, 90 = flat).
pub fn bar2_angle(bar1_angle: f64, ratio: f64) -> f64 {
    90.0 + (ratio * (90.0 - bar1_angle))
}

pub fn bar1_angle_for_ratio(ratio: f64) -> f64 {
    90.0 - (ratio * 90.0)
}

/// Height of the bar 2 tip above the rotation axis.
pub fn arm_height(bar1_angle: f64, geometry: LinkageGeometry, ratio: f64) -> f64 {
    let bar2 = bar2_angle(bar1_angle, ratio);
    bar1_angle.sin() * geometry.bar1_length_in + bar2.sin() * geometry.bar2_length_in
}

/// Horizontal reach of the bar 2 tip from the rotation axis.
pub fn horizontal_distance(bar1_angle: f64, geometry: LinkageGeometry, ratio: f64) -> f64 {
    let bar2 = bar2_angle(bar1_angle, ratio);
    bar1_angle.cos() * geometry.bar1_length_in + bar2.cos() * geometry.bar2_length_in
}

pub fn backdrop_height(geometry: LinkageGeometry) -> f64 {
    geometry.backdrop_angle_deg.sin() * geometry.arm_distance_in
}

pub fn backdrop_length(geometry: LinkageGeometry) -> f64 {
    geometry.backdrop_angle_deg.cos() * geometry.arm_distance_in
}

pub fn is_touching_backdrop(bar1_angle: f64, geometry: LinkageGeometry, ratio: f64) -> bool {
    arm_height(bar1_angle, geometry, ratio) >= backdrop_height(geometry)
        && horizontal_distance(bar1_angle, geometry, ratio) >= backdrop_length(geometry)
}

/// Sweeps the ratio grid and keeps the touching configuration that beats the
/// current best on both height and reach.
///
/// A candidate that improves only one axis, or ties on either, is skipped.
/// When no candidate beats the all-zero start the result is all zeros.
pub fn solve(geometry: LinkageGeometry) -> StaticSolution {
    let mut best = StaticSolution {
        ratio: 0.0,
        arm_height_in: 0.0,
        arm_length_in: 0.0,
    };
    let target_height = backdrop_height(geometry);
    let target_length = backdrop_length(geometry);

    for ratio in ratio_grid() {
        let bar1_angle = bar1_angle_for_ratio(ratio);
        let height = arm_height(bar1_angle, geometry, ratio);
        let length = horizontal_distance(bar1_angle, geometry, ratio);
        if height >= target_height
            && length >= target_length
            && height > best.arm_height_in
            && length > best.arm_length_in
        {
            best = StaticSolution {
                ratio,
                arm_height_in: height,
                arm_length_in: length,
            };
        }
    }

    debug!(
        ratio = best.ratio,
        height = best.arm_height_in,
        length = best.arm_length_in,
        "static gear ratio search finished"
    );
    best
}

pub fn best_gear_ratio(geometry: LinkageGeometry) -> f64 {
    solve(geometry).ratio
}
