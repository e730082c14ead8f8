//! Closed-form circle geometry used by the arc search
//!
//! All angles use the degrees-scaled convention described on
//! [`DEGREE_SCALE`]. None of these functions log or keep state.

use crate::constants::DEGREE_SCALE;

/// Angle at the circle origin that subtends `arc` on a circle of `radius`
///
/// Division by zero when `radius` is zero; callers guard the radius.
pub fn theta_from_arc(arc: f64, radius: f64) -> f64 {
    arc / (radius * DEGREE_SCALE)
}

/// Length of the arc described by `radius` over `theta`
pub fn arc_from_theta(theta: f64, radius: f64) -> f64 {
    theta * radius * DEGREE_SCALE
}

/// Distance between the midpoint of the sector's chord and the arc
pub fn sagitta_from_theta(theta: f64, radius: f64) -> f64 {
    radius * (1.0 - (theta / 2.0).cos())
}

/// Half the length of the sector's chord
pub fn half_chord_from_theta(theta: f64, radius: f64) -> f64 {
    radius * (theta / 2.0).sin()
}
