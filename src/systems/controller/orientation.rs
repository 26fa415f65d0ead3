use nalgebra::{UnitQuaternion, Vector3};

use crate::resources::OrientationConfig;
use crate::utils::{
    deg_to_rad, forward_axis, from_yaw_pitch_bank, project, up_axis, world_up, yaw_pitch_bank,
    DIRECTION_EPSILON,
};

/// Attitude for the next tick: turn the nose into the velocity, bank with
/// lateral drift, rate-limit the change, then clamp the bank.
///
/// The bank clamp is applied after smoothing so the next slerp cannot carry
/// the attitude past the limit. Below `velocity_threshold` the current
/// attitude is returned unchanged.
pub fn next_orientation(
    current: &UnitQuaternion<f64>,
    body_velocity: &Vector3<f64>,
    right: &Vector3<f64>,
    dt: f64,
    config: &OrientationConfig,
) -> UnitQuaternion<f64> {
    let speed = body_velocity.norm();
    if speed < config.velocity_threshold || speed == 0.0 {
        return *current;
    }

    let max_bank = deg_to_rad(config.max_bank_angle);
    let desired = match desired_orientation(current, body_velocity, right, config.bank_factor) {
        Some(desired) => desired,
        None => return clamp_bank(current, max_bank),
    };

    let t = (config.rotation_speed * dt).clamp(0.0, 1.0);
    let smoothed = current
        .try_slerp(&desired, t, DIRECTION_EPSILON)
        .unwrap_or_else(|| current.nlerp(&desired, t));

    clamp_bank(&smoothed, max_bank)
}

/// Velocity-aligned attitude with the up vector tilted against lateral drift.
///
/// Returns `None` when no up vector can be found that is independent of the
/// flight direction.
fn desired_orientation(
    current: &UnitQuaternion<f64>,
    body_velocity: &Vector3<f64>,
    right: &Vector3<f64>,
    bank_factor: f64,
) -> Option<UnitQuaternion<f64>> {
    let desired_forward = body_velocity.try_normalize(DIRECTION_EPSILON)?;

    let lateral_velocity = project(body_velocity, right);
    let desired_up = (world_up() - lateral_velocity * bank_factor)
        .try_normalize(DIRECTION_EPSILON)
        .unwrap_or_else(world_up);

    // Straight up or down flight leaves the tilted world up collinear with
    // the nose; fall back to the body's own axes.
    let up = [desired_up, up_axis(current), forward_axis(current)]
        .into_iter()
        .find(|up| desired_forward.cross(up).norm() > 1e-6)?;

    Some(UnitQuaternion::face_towards(&desired_forward, &up))
}

/// Rebuild `attitude` with its bank limited to ±`max_bank` radians, keeping
/// yaw and pitch.
pub fn clamp_bank(attitude: &UnitQuaternion<f64>, max_bank: f64) -> UnitQuaternion<f64> {
    let (yaw, pitch, bank) = yaw_pitch_bank(attitude);
    let clamped = bank.clamp(-max_bank, max_bank);
    if clamped == bank {
        return *attitude;
    }
    from_yaw_pitch_bank(yaw, pitch, clamped)
}
