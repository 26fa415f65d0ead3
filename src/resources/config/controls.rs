use serde::{Deserialize, Serialize};

use crate::utils::{MAX_LAUNCH_ANGLE, MAX_LAUNCH_FORCE};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchConfig {
    pub default_force: f64,
    pub max_force: f64,
    /// Nose-up slider value (degrees)
    pub default_angle: f64,
    pub max_angle: f64,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            default_force: 15.0,
            max_force: MAX_LAUNCH_FORCE,
            default_angle: 0.0,
            max_angle: MAX_LAUNCH_ANGLE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PilotConfig {
    pub forward_thrust: f64,
    pub backward_thrust: f64,
    pub rotation_force: f64,
}

impl Default for PilotConfig {
    fn default() -> Self {
        Self {
            forward_thrust: 10.0,
            backward_thrust: 5.0,
            rotation_force: 0.5,
        }
    }
}
