use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Tuning for the velocity-aligned orientation controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrientationConfig {
    /// Slerp rate towards the desired attitude (1/s)
    pub rotation_speed: f64,
    /// Below this speed the attitude is left alone (m/s)
    pub velocity_threshold: f64,
    /// Bank amplitude limit (degrees)
    pub max_bank_angle: f64,
    /// How strongly lateral velocity tilts the desired up vector
    pub bank_factor: f64,
}

impl Default for OrientationConfig {
    fn default() -> Self {
        Self {
            rotation_speed: 3.0,
            velocity_threshold: 0.5,
            max_bank_angle: 60.0,
            bank_factor: 0.1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PressureFieldConfig {
    /// Constant acceleration added to the averaged pressure force
    pub bias: Vector3<f64>,
}

impl Default for PressureFieldConfig {
    fn default() -> Self {
        Self {
            bias: Vector3::new(0.0, -1.0, 0.0),
        }
    }
}

/// Cloth and wing-tip response to the flight condition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WingFlexConfig {
    pub base_stiffness: f64,
    pub base_bending: f64,
    pub base_damping: f64,
    pub speed_stiffness_effect: f64,
    pub vertical_velocity_bend_effect: f64,
    pub turbulence_amount: f64,
    pub world_velocity_influence: f64,
    /// Wing-tip bend limit (degrees)
    pub max_bend_angle: f64,
    pub vertical_velocity_influence: f64,
}

impl Default for WingFlexConfig {
    fn default() -> Self {
        Self {
            base_stiffness: 0.8,
            base_bending: 0.7,
            base_damping: 0.85,
            speed_stiffness_effect: 0.2,
            vertical_velocity_bend_effect: 0.3,
            turbulence_amount: 0.5,
            world_velocity_influence: 0.5,
            max_bend_angle: 15.0,
            vertical_velocity_influence: 0.2,
        }
    }
}
