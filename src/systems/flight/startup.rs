use bevy::prelude::*;

use crate::components::WingGrid;
use crate::physics::PhysicsEngine;
use crate::simulation::FlightSimulation;

/// Exit with an error when a plane was spawned without its rigid body or
/// wing surface.
pub fn verify_collaborators<E: PhysicsEngine + Component>(
    planes: Query<(Entity, Has<E>, Has<WingGrid>), With<FlightSimulation>>,
    mut exit: EventWriter<AppExit>,
) {
    let mut missing = false;

    for (entity, has_body, has_grid) in planes.iter() {
        if !has_body {
            error!("Plane {:?} has no rigid body to drive", entity);
            missing = true;
        }
        if !has_grid {
            error!("Plane {:?} has no wing surface generator", entity);
            missing = true;
        }
    }

    if missing {
        exit.send(AppExit::error());
    }
}
