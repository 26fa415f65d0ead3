use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::utils::MAX_WIND_SPEED;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindConfig {
    /// Initial wind velocity (m/s)
    pub velocity: Vector3<f64>,
    /// Limit for the wind speed control (m/s)
    pub max_speed: f64,
}

impl Default for WindConfig {
    fn default() -> Self {
        Self {
            velocity: Vector3::zeros(),
            max_speed: MAX_WIND_SPEED,
        }
    }
}
