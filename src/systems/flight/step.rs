use bevy::prelude::*;

use crate::components::{FlightEvent, LandingEvent, PilotInput, Telemetry};
use crate::physics::PhysicsEngine;
use crate::resources::SimulationClock;
use crate::simulation::FlightSimulation;

/// Run the flight logic on this tick's body snapshot and queue its commands
/// on the body.
pub fn flight_tick_system<E: PhysicsEngine + Component>(
    clock: Res<SimulationClock>,
    mut planes: Query<(
        Entity,
        &mut FlightSimulation,
        &mut E,
        &mut Telemetry,
        Option<&PilotInput>,
    )>,
    mut flight_events: EventWriter<FlightEvent>,
) {
    let dt = clock.timestep();

    for (entity, mut simulation, mut body, mut telemetry, pilot) in planes.iter_mut() {
        if let Some(pilot) = pilot {
            simulation.set_pilot_input(*pilot);
        }

        let snapshot = body.snapshot();
        let output = simulation.tick(&snapshot, dt);
        body.apply_all(&output.commands);
        *telemetry = output.telemetry;

        for event in output.events {
            flight_events.send(event.with_entity(entity));
        }
    }
}

/// Integrate every body one step and report first ground contact.
pub fn integrate_bodies<E: PhysicsEngine + Component>(
    clock: Res<SimulationClock>,
    mut bodies: Query<(Entity, &mut E)>,
    mut landings: EventWriter<LandingEvent>,
) {
    let dt = clock.timestep();

    for (entity, mut body) in bodies.iter_mut() {
        if body.step(dt).touchdown {
            landings.send(LandingEvent {
                entity,
                impact_point: body.snapshot().position,
            });
        }
    }
}

pub fn advance_clock(mut clock: ResMut<SimulationClock>) {
    clock.advance();
}
