use bevy::prelude::*;

use super::flex::wing_flex;
use crate::components::{SurfaceGenerator, WingGrid, WingLoad};
use crate::physics::PhysicsEngine;
use crate::resources::SimulationClock;
use crate::simulation::FlightSimulation;

/// Evaluate the pressure field over the regenerated wing cells and the
/// cloth flex response for every plane.
pub fn wing_load_system<E: PhysicsEngine + Component>(
    clock: Res<SimulationClock>,
    mut planes: Query<(Entity, &FlightSimulation, &E, &WingGrid, &mut WingLoad)>,
) {
    for (entity, simulation, body, grid, mut load) in planes.iter_mut() {
        let cells = grid.cells();
        match simulation.wing_acceleration(&cells) {
            Ok(acceleration) => load.pressure_acceleration = acceleration,
            Err(e) => {
                warn!("Wing pressure skipped for {:?}: {}", entity, e);
                continue;
            }
        }

        let config = simulation.config();
        load.flex = wing_flex(
            &body.snapshot(),
            clock.elapsed_seconds(),
            config.physics.gravity_vector().y,
            &config.wing_flex,
        );
    }
}
