use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};

use super::traits::{PhysicsEngine, RigidBody, StepReport};
use crate::components::{CollisionComponent, PhysicsComponent, SpatialComponent};
use crate::resources::PhysicsConfig;
use crate::systems::{apply_velocity_limits, integrate_state, resolve_ground_contact};

/// In-crate rigid body over a flat ground plane.
///
/// Forces and torques accumulate until the next `step`, impulses change the
/// velocity immediately.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct ReferenceBody {
    spatial: SpatialComponent,
    physics: PhysicsComponent,
    collision: CollisionComponent,
    gravity: Vector3<f64>,
    ground_friction: f64,
    max_velocity: f64,
    max_angular_velocity: f64,
}

impl ReferenceBody {
    pub fn from_config(config: &PhysicsConfig) -> Self {
        Self {
            spatial: SpatialComponent::at_position(config.spawn_position),
            physics: PhysicsComponent::from_config(config),
            collision: CollisionComponent::new(config.ground_height, config.height_offset),
            gravity: config.gravity_vector(),
            ground_friction: config.ground_friction,
            max_velocity: config.max_velocity,
            max_angular_velocity: config.max_angular_velocity,
        }
    }

    pub fn spatial(&self) -> &SpatialComponent {
        &self.spatial
    }

    pub fn physics(&self) -> &PhysicsComponent {
        &self.physics
    }

    pub fn collision(&self) -> &CollisionComponent {
        &self.collision
    }

    pub fn gravity_enabled(&self) -> bool {
        self.physics.gravity_enabled
    }
}

impl RigidBody for ReferenceBody {
    fn snapshot(&self) -> SpatialComponent {
        self.spatial
    }

    fn apply_force(&mut self, force: Vector3<f64>) {
        self.physics.add_force(force);
    }

    fn apply_impulse(&mut self, impulse: Vector3<f64>) {
        self.spatial.velocity += impulse / self.physics.mass;
    }

    fn apply_torque(&mut self, torque: Vector3<f64>) {
        self.physics.add_moment(torque);
    }

    fn set_orientation(&mut self, orientation: UnitQuaternion<f64>) {
        self.spatial.attitude = orientation;
    }

    fn set_gravity_enabled(&mut self, enabled: bool) {
        self.physics.gravity_enabled = enabled;
    }

    fn reset_motion(&mut self, position: Vector3<f64>, orientation: UnitQuaternion<f64>) {
        self.spatial = SpatialComponent {
            position,
            attitude: orientation,
            ..Default::default()
        };
        self.physics.clear_forces();
        self.collision.reset();
    }
}

impl PhysicsEngine for ReferenceBody {
    fn step(&mut self, dt: f64) -> StepReport {
        integrate_state(&self.physics, &mut self.spatial, &self.gravity, dt);
        apply_velocity_limits(
            &mut self.spatial,
            self.max_velocity,
            self.max_angular_velocity,
        );
        let touchdown = resolve_ground_contact(
            &mut self.spatial,
            &mut self.collision,
            self.ground_friction,
            dt,
        );
        self.physics.clear_forces();

        StepReport { touchdown }
    }
}
