use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Raised by the collision system when the plane touches the ground.
#[derive(Event, Debug, Clone, Copy)]
pub struct LandingEvent {
    /// Entity that collided
    pub entity: Entity,
    /// Point of impact in space
    pub impact_point: Vector3<f64>,
}

/// Ground contact tracking for a rigid body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollisionComponent {
    /// Height of the ground plane (m)
    pub ground_height: f64,
    /// Distance from the body origin to its lowest point (m)
    pub height_offset: f64,
    /// Whether the body is resting on the ground
    #[serde(skip)]
    pub in_contact: bool,
    /// Number of touchdowns since the last reset
    #[serde(skip)]
    pub collision_count: u32,
}

impl Default for CollisionComponent {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl CollisionComponent {
    pub fn new(ground_height: f64, height_offset: f64) -> Self {
        Self {
            ground_height,
            height_offset,
            in_contact: false,
            collision_count: 0,
        }
    }

    pub fn reset(&mut self) {
        self.in_contact = false;
        self.collision_count = 0;
    }

    /// Lowest allowed height of the body origin.
    pub fn floor(&self) -> f64 {
        self.ground_height + self.height_offset
    }

    /// Records contact state; true only on the tick contact begins.
    pub fn register_contact(&mut self, touching: bool) -> bool {
        let touchdown = touching && !self.in_contact;
        if touchdown {
            self.collision_count += 1;
        }
        self.in_contact = touching;
        touchdown
    }
}
