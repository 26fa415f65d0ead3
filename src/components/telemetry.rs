use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::components::SpatialComponent;

/// Speed and position readout for display.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Telemetry {
    /// Speed (m/s).
    pub speed: f64,
    /// Position (m).
    pub position: Vector3<f64>,
}

impl Telemetry {
    pub fn from_spatial(spatial: &SpatialComponent) -> Self {
        Self {
            speed: spatial.velocity.norm(),
            position: spatial.position,
        }
    }

    pub fn velocity_text(&self) -> String {
        format!("Velocity: {:.1} m/s", self.speed)
    }

    pub fn displacement_text(&self) -> String {
        format!(
            "Displacement: ({:.1}, {:.1}, {:.1}) m",
            self.position.x, self.position.y, self.position.z
        )
    }
}

impl fmt::Display for Telemetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {}", self.velocity_text(), self.displacement_text())
    }
}
