use nalgebra::{UnitQuaternion, Vector3};
use std::f64::consts::{FRAC_PI_2, PI};

use crate::utils::constants::DIRECTION_EPSILON;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// World up axis (+Y).
#[inline]
pub fn world_up() -> Vector3<f64> {
    Vector3::y()
}

/// Body forward axis (+Z) expressed in the world frame.
#[inline]
pub fn forward_axis(attitude: &UnitQuaternion<f64>) -> Vector3<f64> {
    attitude * Vector3::z()
}

/// Body right axis (+X) expressed in the world frame.
#[inline]
pub fn right_axis(attitude: &UnitQuaternion<f64>) -> Vector3<f64> {
    attitude * Vector3::x()
}

/// Body up axis (+Y) expressed in the world frame.
#[inline]
pub fn up_axis(attitude: &UnitQuaternion<f64>) -> Vector3<f64> {
    attitude * Vector3::y()
}

/// Vector projection of `v` onto `onto`. A zero-length `onto` projects to zero.
pub fn project(v: &Vector3<f64>, onto: &Vector3<f64>) -> Vector3<f64> {
    let denom = onto.norm_squared();
    if denom < DIRECTION_EPSILON {
        return Vector3::zeros();
    }
    onto * (v.dot(onto) / denom)
}

/// Pure pitch rotation about the world right axis (+X).
pub fn pitch_rotation(angle_rad: f64) -> UnitQuaternion<f64> {
    UnitQuaternion::from_axis_angle(&Vector3::x_axis(), angle_rad)
}

/// Decompose an attitude into (yaw, pitch, bank) with `q = Ry(yaw) * Rx(pitch) * Rz(bank)`.
///
/// Pitch lies in [-π/2, π/2]; yaw and bank in (-π, π]. At gimbal lock the
/// bank is folded into yaw and reported as zero.
pub fn yaw_pitch_bank(attitude: &UnitQuaternion<f64>) -> (f64, f64, f64) {
    let m = attitude.to_rotation_matrix();
    let m = m.matrix();

    let sin_pitch = (-m[(1, 2)]).clamp(-1.0, 1.0);
    if sin_pitch.abs() > 1.0 - 1e-9 {
        let pitch = FRAC_PI_2.copysign(sin_pitch);
        let yaw = (-m[(2, 0)]).atan2(m[(0, 0)]);
        return (yaw, pitch, 0.0);
    }

    let pitch = sin_pitch.asin();
    let yaw = m[(0, 2)].atan2(m[(2, 2)]);
    let bank = m[(1, 0)].atan2(m[(1, 1)]);
    (yaw, pitch, bank)
}

/// Inverse of [`yaw_pitch_bank`].
pub fn from_yaw_pitch_bank(yaw: f64, pitch: f64, bank: f64) -> UnitQuaternion<f64> {
    UnitQuaternion::from_axis_angle(&Vector3::y_axis(), yaw)
        * UnitQuaternion::from_axis_angle(&Vector3::x_axis(), pitch)
        * UnitQuaternion::from_axis_angle(&Vector3::z_axis(), bank)
}
