use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::resources::WingFlexConfig;

/// Downward cloth acceleration in calm flight.
pub const RESTING_SAG: f64 = -0.2;

/// Cloth parameters and wing-tip attitudes for the current flight condition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WingFlex {
    pub stiffness: f64,
    pub bending: f64,
    pub damping: f64,
    pub world_velocity_scale: f64,
    pub external_acceleration: Vector3<f64>,
    /// Bend angle applied to the tips (degrees)
    pub bend_angle: f64,
    pub left_tip: UnitQuaternion<f64>,
    pub right_tip: UnitQuaternion<f64>,
}

impl Default for WingFlex {
    fn default() -> Self {
        Self::at_rest(&WingFlexConfig::default())
    }
}

impl WingFlex {
    /// Response of a wing that is not moving.
    pub fn at_rest(config: &WingFlexConfig) -> Self {
        Self {
            stiffness: config.base_stiffness.clamp(0.0, 1.0),
            bending: config.base_bending.clamp(0.0, 1.0),
            damping: config.base_damping,
            world_velocity_scale: config.world_velocity_influence,
            external_acceleration: Vector3::new(0.0, RESTING_SAG, 0.0),
            bend_angle: 0.0,
            left_tip: UnitQuaternion::identity(),
            right_tip: UnitQuaternion::identity(),
        }
    }
}

/// Loads on the deformable wing for the current tick.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct WingLoad {
    /// Net acceleration from the pressure field
    pub pressure_acceleration: Vector3<f64>,
    pub flex: WingFlex,
}

impl WingLoad {
    /// Acceleration handed to the cloth solver.
    pub fn external_acceleration(&self) -> Vector3<f64> {
        self.pressure_acceleration + self.flex.external_acceleration
    }
}
