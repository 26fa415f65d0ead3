use bevy::prelude::*;

use crate::physics::PhysicsEngine;

/// Mirror the body pose onto the render transform.
pub fn sync_transforms<E: PhysicsEngine + Component>(mut query: Query<(&E, &mut Transform)>) {
    for (body, mut transform) in query.iter_mut() {
        let snapshot = body.snapshot();
        let position = snapshot.position;
        let attitude = snapshot.attitude;

        transform.translation = Vec3::new(position.x as f32, position.y as f32, position.z as f32);
        transform.rotation = Quat::from_xyzw(
            attitude.i as f32,
            attitude.j as f32,
            attitude.k as f32,
            attitude.w as f32,
        );
    }
}
