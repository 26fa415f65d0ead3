use bevy::prelude::*;

use crate::components::{
    FlightEvent, LandingEvent, LaunchRequest, PilotInput, ResetRequest, Telemetry, WingLoad,
};
use crate::physics::ReferenceBody;
use crate::resources::{SimulationClock, SimulationConfig};
use crate::simulation::FlightSimulation;
use crate::systems::{
    advance_clock, apply_plane_scale, flight_tick_system, handle_landings,
    handle_launch_requests, handle_reset_requests, integrate_bodies, sync_transforms,
    verify_collaborators, wing_load_system,
};

/// Stages of one fixed flight step, in order.
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum PaperPlaneSet {
    /// Launch/reset requests and scale changes
    Input,
    /// Forces and orientation from the body snapshot
    Flight,
    Integration,
    /// Landing transitions
    Contact,
    /// Pressure field and cloth flex
    Wing,
    Sync,
}

/// Flies paper planes driven by the in-crate reference body.
pub struct PaperPlanePlugin {
    config: SimulationConfig,
    spawn_plane: bool,
}

impl Default for PaperPlanePlugin {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}

impl PaperPlanePlugin {
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            config,
            spawn_plane: true,
        }
    }

    /// Register the systems only; planes are spawned by the caller.
    pub fn without_plane(mut self) -> Self {
        self.spawn_plane = false;
        self
    }

    fn spawn_plane(mut commands: Commands, config: Res<SimulationConfig>) {
        let entity = commands
            .spawn((
                Name::new("paper_plane"),
                FlightSimulation::new(config.clone()),
                ReferenceBody::from_config(&config.physics),
                config.wing_grid.clone(),
                WingLoad::default(),
                Telemetry::default(),
                PilotInput::default(),
                Transform::default(),
            ))
            .id();
        info!(
            "Spawned paper plane {:?} at {:?}",
            entity, config.physics.spawn_position
        );
    }
}

impl Plugin for PaperPlanePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone())
            .insert_resource(SimulationClock::new(self.config.physics.timestep))
            .insert_resource(Time::<Fixed>::from_seconds(self.config.physics.timestep));

        app.add_event::<LaunchRequest>()
            .add_event::<ResetRequest>()
            .add_event::<LandingEvent>()
            .add_event::<FlightEvent>();

        if self.spawn_plane {
            app.add_systems(Startup, Self::spawn_plane);
        }
        app.add_systems(PostStartup, verify_collaborators::<ReferenceBody>);

        app.configure_sets(
            FixedUpdate,
            (
                PaperPlaneSet::Input,
                PaperPlaneSet::Flight,
                PaperPlaneSet::Integration,
                PaperPlaneSet::Contact,
                PaperPlaneSet::Wing,
                PaperPlaneSet::Sync,
            )
                .chain(),
        );

        app.add_systems(
            FixedUpdate,
            (
                (
                    handle_reset_requests::<ReferenceBody>,
                    handle_launch_requests::<ReferenceBody>,
                    apply_plane_scale,
                )
                    .chain()
                    .in_set(PaperPlaneSet::Input),
                flight_tick_system::<ReferenceBody>.in_set(PaperPlaneSet::Flight),
                integrate_bodies::<ReferenceBody>.in_set(PaperPlaneSet::Integration),
                handle_landings::<ReferenceBody>.in_set(PaperPlaneSet::Contact),
                wing_load_system::<ReferenceBody>.in_set(PaperPlaneSet::Wing),
                (sync_transforms::<ReferenceBody>, advance_clock)
                    .chain()
                    .in_set(PaperPlaneSet::Sync),
            ),
        );
    }
}
