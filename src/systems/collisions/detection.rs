use nalgebra::Vector3;

use crate::components::{CollisionComponent, SpatialComponent};

/// Keep the body above the ground plane and track contact.
///
/// While touching, the body is clamped to the floor, downward velocity is
/// removed, spin is stopped, and horizontal velocity decays by
/// `ground_friction` per second. Returns true only on the step contact
/// begins.
pub fn resolve_ground_contact(
    spatial: &mut SpatialComponent,
    collision: &mut CollisionComponent,
    ground_friction: f64,
    dt: f64,
) -> bool {
    let floor = collision.floor();
    let touching = spatial.position.y <= floor;

    if touching {
        spatial.position.y = floor;
        if spatial.velocity.y < 0.0 {
            spatial.velocity.y = 0.0;
        }
        let retained = (1.0 - ground_friction * dt).max(0.0);
        spatial.velocity.x *= retained;
        spatial.velocity.z *= retained;
        spatial.angular_velocity = Vector3::zeros();
    }

    collision.register_contact(touching)
}
