use nalgebra::Vector3;

use crate::components::{SpatialComponent, WingFlex, RESTING_SAG};
use crate::resources::WingFlexConfig;
use crate::utils::{deg_to_rad, pitch_rotation};

/// Speed above which the cloth receives turbulence (m/s).
const TURBULENCE_SPEED: f64 = 3.0;
/// Local sink rate beyond which the cloth is pushed by the descent (m/s).
const SINK_THRESHOLD: f64 = -0.5;

/// Cloth response of the wing to the body's motion at simulation time `time`.
///
/// `gravity_y` is the signed vertical gravity component (negative for a
/// downward pull).
pub fn wing_flex(
    spatial: &SpatialComponent,
    time: f64,
    gravity_y: f64,
    config: &WingFlexConfig,
) -> WingFlex {
    let local = spatial.local_velocity();
    let speed = spatial.velocity.norm();

    let stiffness =
        (config.base_stiffness + speed * config.speed_stiffness_effect * 0.1).clamp(0.0, 1.0);
    let bending = (config.base_bending
        - local.y.abs() * config.vertical_velocity_bend_effect * 0.1)
        .clamp(0.0, 1.0);

    let sag = if local.y < SINK_THRESHOLD {
        -local.y * 0.5
    } else {
        RESTING_SAG
    };
    let mut external_acceleration = Vector3::new(0.0, sag, 0.0);
    if speed > TURBULENCE_SPEED {
        let gust = Vector3::new((time * 5.0).sin(), (time * 7.0).sin(), (time * 3.0).sin());
        external_acceleration += gust * config.turbulence_amount * 0.1;
    }

    let bend_angle = (-gravity_y * 0.05 - local.y * config.vertical_velocity_influence
        + local.z * 0.01)
        .clamp(-config.max_bend_angle, config.max_bend_angle);
    let bend = deg_to_rad(bend_angle);

    WingFlex {
        stiffness,
        bending,
        damping: config.base_damping,
        world_velocity_scale: config.world_velocity_influence,
        external_acceleration,
        bend_angle,
        left_tip: pitch_rotation(bend),
        right_tip: pitch_rotation(-bend),
    }
}
