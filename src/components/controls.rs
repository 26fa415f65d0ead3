use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::components::LaunchParameters;
use crate::resources::{LaunchConfig, PilotConfig, WindConfig};
use crate::utils::{deg_to_rad, pitch_rotation, MIN_WIND_DIRECTION_MAGNITUDE};

/// Launch force and angle as selected on the launch panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaunchControls {
    force: f64,
    angle_slider: f64,
    max_force: f64,
    max_angle: f64,
}

impl LaunchControls {
    pub fn new(config: &LaunchConfig) -> Self {
        let mut controls = Self {
            force: 0.0,
            angle_slider: 0.0,
            max_force: config.max_force,
            max_angle: config.max_angle,
        };
        controls.set_force(config.default_force);
        controls.set_angle(config.default_angle);
        controls
    }

    pub fn set_force(&mut self, force: f64) {
        self.force = force.clamp(0.0, self.max_force);
    }

    /// Slider value in degrees of nose-up pitch.
    pub fn set_angle(&mut self, angle: f64) {
        self.angle_slider = angle.clamp(0.0, self.max_angle);
    }

    pub fn force(&self) -> f64 {
        self.force
    }

    /// Signed pitch angle used for the launch. Raising the slider pitches
    /// the nose up, which is a negative pitch about the right axis.
    pub fn pitch_angle(&self) -> f64 {
        -self.angle_slider
    }

    pub fn launch_parameters(&self) -> LaunchParameters {
        LaunchParameters::new(self.force, self.pitch_angle())
    }

    /// Attitude held while waiting on the launch pad.
    pub fn preview_orientation(&self) -> UnitQuaternion<f64> {
        pitch_rotation(deg_to_rad(self.pitch_angle()))
    }
}

/// Wind speed control along a fixed direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindControl {
    direction: Vector3<f64>,
    velocity: Vector3<f64>,
    max_speed: f64,
}

impl WindControl {
    pub fn new(config: &WindConfig) -> Self {
        let direction = if config.velocity.norm() > MIN_WIND_DIRECTION_MAGNITUDE {
            config.velocity.normalize()
        } else {
            Vector3::x()
        };

        Self {
            direction,
            velocity: config.velocity,
            max_speed: config.max_speed,
        }
    }

    /// Signed wind speed along the initial direction.
    pub fn set_speed(&mut self, speed: f64) {
        let speed = speed.clamp(-self.max_speed, self.max_speed);
        self.velocity = self.direction * speed;
    }

    pub fn direction(&self) -> Vector3<f64> {
        self.direction
    }

    pub fn velocity(&self) -> Vector3<f64> {
        self.velocity
    }
}

/// Keyboard-style pilot input held for the current tick.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PilotInput {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl PilotInput {
    pub fn is_idle(&self) -> bool {
        !(self.forward || self.backward || self.left || self.right)
    }

    /// Net thrust along the body forward axis.
    pub fn thrust(&self, forward: &Vector3<f64>, config: &PilotConfig) -> Vector3<f64> {
        let mut thrust = Vector3::zeros();
        if self.forward {
            thrust += forward * config.forward_thrust;
        }
        if self.backward {
            thrust -= forward * config.backward_thrust * 0.1;
        }
        thrust
    }

    /// Net steering torque in the world frame: yaw plus a matching roll.
    pub fn torque(&self, config: &PilotConfig) -> Vector3<f64> {
        let mut torque = Vector3::zeros();
        if self.left {
            torque += Vector3::y() * -config.rotation_force;
            torque += Vector3::z() * config.rotation_force;
        }
        if self.right {
            torque += Vector3::y() * config.rotation_force;
            torque += Vector3::z() * -config.rotation_force;
        }
        torque
    }
}
