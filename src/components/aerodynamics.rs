use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::utils::{GRAVITY, SEA_LEVEL_DENSITY, SEA_LEVEL_PRESSURE};

/// Ambient and aerodynamic constants read by the force model and the
/// pressure field. Read-only within a tick; may be replaced between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AeroConstants {
    /// Ambient (atmospheric) pressure (Pa).
    pub ambient_pressure: f64,
    /// Air density (kg/m³).
    pub air_density: f64,
    /// Gravitational acceleration used by the hydrostatic pressure term (m/s²).
    pub gravity: f64,
    /// Total wing area (m²).
    pub wing_area: f64,
    /// Lift coefficient.
    pub lift_coefficient: f64,
    /// Drag coefficient.
    pub drag_coefficient: f64,
}

impl Default for AeroConstants {
    fn default() -> Self {
        Self {
            ambient_pressure: SEA_LEVEL_PRESSURE,
            air_density: SEA_LEVEL_DENSITY,
            gravity: GRAVITY,
            wing_area: 0.1,
            lift_coefficient: 0.6,
            drag_coefficient: 0.06,
        }
    }
}

impl AeroConstants {
    /// Returns a copy with the geometry-dependent coefficients recomputed from `scale`.
    pub fn with_scale(self, scale: &PlaneScale) -> Self {
        Self {
            wing_area: scale.wing_area(),
            lift_coefficient: scale.lift_coefficient(),
            drag_coefficient: scale.drag_coefficient(),
            ..self
        }
    }

    /// Dynamic pressure 0.5·ρ·v² for the given airspeed.
    #[inline]
    pub fn dynamic_pressure(&self, airspeed: f64) -> f64 {
        0.5 * self.air_density * airspeed * airspeed
    }
}

/// Scale of the folded plane along its body axes. The wing area and the
/// lift/drag coefficients follow from it.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaneScale {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Default for PlaneScale {
    fn default() -> Self {
        Self {
            x: 1.0,
            y: 1.0,
            z: 1.0,
        }
    }
}

impl PlaneScale {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Wing area = x² / 10
    pub fn wing_area(&self) -> f64 {
        self.x * self.x / 10.0
    }

    /// Drag coefficient = (x² + y² + z²) / 10
    pub fn drag_coefficient(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z) / 10.0
    }

    /// Lift coefficient = (x² + y² + 4) / 10
    pub fn lift_coefficient(&self) -> f64 {
        (self.x * self.x + self.y * self.y + 4.0) / 10.0
    }
}

/// Lift and drag forces in the world frame for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AeroForces {
    pub lift: Vector3<f64>,
    pub drag: Vector3<f64>,
}

impl Default for AeroForces {
    fn default() -> Self {
        Self::zero()
    }
}

impl AeroForces {
    pub fn zero() -> Self {
        Self {
            lift: Vector3::zeros(),
            drag: Vector3::zeros(),
        }
    }

    pub fn total(&self) -> Vector3<f64> {
        self.lift + self.drag
    }

    pub fn is_zero(&self) -> bool {
        self.lift == Vector3::zeros() && self.drag == Vector3::zeros()
    }
}
