use bevy::prelude::*;

use crate::components::{FlightEvent, LandingEvent, LaunchRequest, PlaneScale, ResetRequest};
use crate::physics::PhysicsEngine;
use crate::simulation::FlightSimulation;

/// Launch every targeted plane that is waiting on the pad.
pub fn handle_launch_requests<E: PhysicsEngine + Component>(
    mut requests: EventReader<LaunchRequest>,
    mut planes: Query<(Entity, &mut FlightSimulation, &mut E)>,
    mut flight_events: EventWriter<FlightEvent>,
) {
    for request in requests.read() {
        for (entity, mut simulation, mut body) in planes.iter_mut() {
            if request.entity.is_some_and(|target| target != entity) {
                continue;
            }

            let result = match request.params {
                Some(params) => simulation.launch_with(params),
                None => simulation.launch(),
            };
            // Rejections are logged by the simulation
            if let Ok(transition) = result {
                body.apply_all(&transition.commands);
                flight_events.send(transition.event.with_entity(entity));
            }
        }
    }
}

pub fn handle_reset_requests<E: PhysicsEngine + Component>(
    mut requests: EventReader<ResetRequest>,
    mut planes: Query<(Entity, &mut FlightSimulation, &mut E)>,
    mut flight_events: EventWriter<FlightEvent>,
) {
    for request in requests.read() {
        for (entity, mut simulation, mut body) in planes.iter_mut() {
            if request.entity.is_some_and(|target| target != entity) {
                continue;
            }

            if let Ok(transition) = simulation.reset() {
                body.apply_all(&transition.commands);
                flight_events.send(transition.event.with_entity(entity));
            }
        }
    }
}

/// Turn ground contact into a landing transition.
pub fn handle_landings<E: PhysicsEngine + Component>(
    mut landings: EventReader<LandingEvent>,
    mut planes: Query<(&mut FlightSimulation, &mut E)>,
    mut flight_events: EventWriter<FlightEvent>,
) {
    for landing in landings.read() {
        let Ok((mut simulation, mut body)) = planes.get_mut(landing.entity) else {
            warn!("Landing reported for unknown plane {:?}", landing.entity);
            continue;
        };

        debug!("Ground contact at {:?}", landing.impact_point);
        if let Ok(transition) = simulation.notify_landing() {
            body.apply_all(&transition.commands);
            flight_events.send(transition.event.with_entity(landing.entity));
        }
    }
}

/// Recompute aerodynamic coefficients whenever a plane's scale changes.
pub fn apply_plane_scale(
    mut planes: Query<(&PlaneScale, &mut FlightSimulation), Changed<PlaneScale>>,
) {
    for (scale, mut simulation) in planes.iter_mut() {
        simulation.set_scale(scale);
    }
}
