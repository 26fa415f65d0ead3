use nalgebra::{UnitQuaternion, Vector3};

use crate::components::SpatialComponent;

/// A single instruction for the rigid-body engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BodyCommand {
    /// Continuous force for the coming step (N, world frame).
    ApplyForce(Vector3<f64>),
    /// Instantaneous change of momentum (N·s, world frame).
    ApplyImpulse(Vector3<f64>),
    /// Continuous torque for the coming step (N·m, world frame).
    ApplyTorque(Vector3<f64>),
    /// Direct attitude override.
    SetOrientation(UnitQuaternion<f64>),
    SetGravity(bool),
    /// Teleport to a pose with zero linear and angular velocity.
    ResetMotion {
        position: Vector3<f64>,
        orientation: UnitQuaternion<f64>,
    },
}

/// The operations the flight core needs from a rigid-body engine.
pub trait RigidBody {
    fn snapshot(&self) -> SpatialComponent;
    fn apply_force(&mut self, force: Vector3<f64>);
    fn apply_impulse(&mut self, impulse: Vector3<f64>);
    fn apply_torque(&mut self, torque: Vector3<f64>);
    fn set_orientation(&mut self, orientation: UnitQuaternion<f64>);
    fn set_gravity_enabled(&mut self, enabled: bool);
    fn reset_motion(&mut self, position: Vector3<f64>, orientation: UnitQuaternion<f64>);

    fn apply(&mut self, command: &BodyCommand) {
        match *command {
            BodyCommand::ApplyForce(force) => self.apply_force(force),
            BodyCommand::ApplyImpulse(impulse) => self.apply_impulse(impulse),
            BodyCommand::ApplyTorque(torque) => self.apply_torque(torque),
            BodyCommand::SetOrientation(orientation) => self.set_orientation(orientation),
            BodyCommand::SetGravity(enabled) => self.set_gravity_enabled(enabled),
            BodyCommand::ResetMotion {
                position,
                orientation,
            } => self.reset_motion(position, orientation),
        }
    }

    fn apply_all(&mut self, commands: &[BodyCommand]) {
        for command in commands {
            self.apply(command);
        }
    }
}

/// Outcome of one engine step.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StepReport {
    /// True on the step the body first touches the ground.
    pub touchdown: bool,
}

/// A rigid body that can also integrate itself forward in time.
pub trait PhysicsEngine: RigidBody {
    fn step(&mut self, dt: f64) -> StepReport;
}
