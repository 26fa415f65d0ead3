use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::utils::{DEFAULT_TIMESTEP, GRAVITY};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Fixed physics step (s)
    pub timestep: f64,
    /// Gravitational acceleration magnitude, acting along -Y (m/s²)
    pub gravity: f64,
    /// Body mass (kg)
    pub mass: f64,
    /// Principal moments of inertia (kg·m²)
    pub inertia: Vector3<f64>,
    /// Position the plane starts from and returns to on reset (m)
    pub spawn_position: Vector3<f64>,
    /// Height of the ground plane (m)
    pub ground_height: f64,
    /// Distance from the body origin to its lowest point (m)
    pub height_offset: f64,
    /// Fraction of horizontal velocity lost per second while on the ground
    pub ground_friction: f64,
    pub max_velocity: f64,
    pub max_angular_velocity: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            timestep: DEFAULT_TIMESTEP,
            gravity: GRAVITY,
            mass: 1.0,
            inertia: Vector3::new(0.05, 0.05, 0.05),
            spawn_position: Vector3::new(0.0, 1.0, 0.0),
            ground_height: 0.0,
            height_offset: 0.0,
            ground_friction: 2.0,
            max_velocity: 200.0,
            max_angular_velocity: 50.0,
        }
    }
}

impl PhysicsConfig {
    pub fn gravity_vector(&self) -> Vector3<f64> {
        Vector3::new(0.0, -self.gravity, 0.0)
    }
}
