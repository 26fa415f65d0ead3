use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::resources::PhysicsConfig;

/// Mass properties and per-tick force accumulators of a rigid body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicsComponent {
    pub mass: f64,
    pub inertia: Matrix3<f64>,
    pub inertia_inv: Matrix3<f64>,
    /// Accumulated world-frame force for the current step (N)
    pub net_force: Vector3<f64>,
    /// Accumulated world-frame moment for the current step (N·m)
    pub net_moment: Vector3<f64>,
    pub gravity_enabled: bool,
}

impl PhysicsComponent {
    pub fn new(mass: f64, inertia: Matrix3<f64>) -> Self {
        let inertia_inv = inertia.try_inverse().unwrap_or_else(Matrix3::zeros);
        Self {
            mass,
            inertia,
            inertia_inv,
            net_force: Vector3::zeros(),
            net_moment: Vector3::zeros(),
            gravity_enabled: false,
        }
    }

    pub fn from_config(config: &PhysicsConfig) -> Self {
        Self::new(config.mass, Matrix3::from_diagonal(&config.inertia))
    }

    pub fn add_force(&mut self, force: Vector3<f64>) {
        self.net_force += force;
    }

    pub fn add_moment(&mut self, moment: Vector3<f64>) {
        self.net_moment += moment;
    }

    pub fn clear_forces(&mut self) {
        self.net_force = Vector3::zeros();
        self.net_moment = Vector3::zeros();
    }
}
