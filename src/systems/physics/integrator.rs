use nalgebra::{UnitQuaternion, Vector3};

use crate::components::{PhysicsComponent, SpatialComponent};

/// Advance `spatial` by one semi-implicit Euler step.
///
/// Velocities are updated from the accumulated force and moment first, then
/// position and attitude are advanced with the new velocities. Gravity is
/// added only while the body has it enabled.
pub fn integrate_state(
    physics: &PhysicsComponent,
    spatial: &mut SpatialComponent,
    gravity: &Vector3<f64>,
    dt: f64,
) {
    let mut acceleration = physics.net_force / physics.mass;
    if physics.gravity_enabled {
        acceleration += gravity;
    }
    spatial.velocity += acceleration * dt;
    spatial.position += spatial.velocity * dt;

    let omega = spatial.angular_velocity;
    let gyro_term = omega.cross(&(physics.inertia * omega));
    let angular_acceleration = physics.inertia_inv * (physics.net_moment - gyro_term);
    spatial.angular_velocity += angular_acceleration * dt;

    if spatial.angular_velocity.norm() > 0.0 {
        let rotation = UnitQuaternion::from_scaled_axis(spatial.angular_velocity * dt);
        spatial.attitude =
            UnitQuaternion::new_normalize((rotation * spatial.attitude).into_inner());
    }
}

/// Scale linear and angular velocity back onto their magnitude limits.
pub fn apply_velocity_limits(
    spatial: &mut SpatialComponent,
    max_velocity: f64,
    max_angular_velocity: f64,
) {
    let velocity_norm = spatial.velocity.norm();
    if velocity_norm > max_velocity {
        spatial.velocity *= max_velocity / velocity_norm;
    }

    let angular_velocity_norm = spatial.angular_velocity.norm();
    if angular_velocity_norm > max_angular_velocity {
        spatial.angular_velocity *= max_angular_velocity / angular_velocity_norm;
    }
}
