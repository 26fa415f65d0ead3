use nalgebra::Vector3;

use crate::components::{AeroConstants, AeroForces};
use crate::utils::DIRECTION_EPSILON;

/// Lift and drag on the plane for one tick.
///
/// `forward` and `right` are the body axes in the world frame, taken from the
/// same snapshot as `body_velocity`. Zero relative airspeed produces zero
/// force, as does a lift direction that cannot be normalized.
pub fn compute_forces(
    body_velocity: &Vector3<f64>,
    wind_velocity: &Vector3<f64>,
    forward: &Vector3<f64>,
    right: &Vector3<f64>,
    constants: &AeroConstants,
) -> AeroForces {
    let relative_velocity = body_velocity - wind_velocity;
    let speed = relative_velocity.norm();

    if speed == 0.0 {
        return AeroForces::zero();
    }

    // Angle between the nose and the relative wind, in [0, π]
    let angle_of_attack = forward.angle(&relative_velocity);

    let q_s = constants.dynamic_pressure(speed) * constants.wing_area;
    let lift_magnitude = q_s * constants.lift_coefficient * angle_of_attack.cos();
    let drag_magnitude = q_s * constants.drag_coefficient;

    let lift_direction = relative_velocity
        .cross(right)
        .try_normalize(DIRECTION_EPSILON)
        .unwrap_or_else(Vector3::zeros);
    let drag_direction = -relative_velocity / speed;

    AeroForces {
        lift: lift_direction * lift_magnitude,
        drag: drag_direction * drag_magnitude,
    }
}
