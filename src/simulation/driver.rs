use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};

use crate::components::{
    AeroConstants, AeroForces, FlightEvent, FlightState, FlightStateMachine, GridCell,
    LaunchControls, LaunchParameters, PilotInput, PlaneScale, SpatialComponent, Telemetry,
    TimerUpdate, WindControl,
};
use crate::physics::BodyCommand;
use crate::resources::SimulationConfig;
use crate::systems::{compute_forces, net_acceleration, next_orientation};
use crate::utils::{FlightError, SimError};

/// Commands and notifications produced by a state transition.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub commands: Vec<BodyCommand>,
    pub event: FlightEvent,
}

/// Everything one tick produced. The commands are meant for the engine
/// before it integrates the step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickOutput {
    pub commands: Vec<BodyCommand>,
    pub forces: AeroForces,
    pub telemetry: Telemetry,
    pub events: Vec<FlightEvent>,
}

/// Flight logic for one paper plane, independent of any physics engine.
#[derive(Component, Debug, Clone)]
pub struct FlightSimulation {
    config: SimulationConfig,
    constants: AeroConstants,
    machine: FlightStateMachine,
    launch_controls: LaunchControls,
    wind: WindControl,
    pilot: PilotInput,
    telemetry: Telemetry,
}

impl FlightSimulation {
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            constants: config.aero,
            machine: FlightStateMachine::new(config.settle_duration),
            launch_controls: LaunchControls::new(&config.launch),
            wind: WindControl::new(&config.wind),
            pilot: PilotInput::default(),
            telemetry: Telemetry::default(),
            config,
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn constants(&self) -> &AeroConstants {
        &self.constants
    }

    pub fn state(&self) -> FlightState {
        self.machine.state()
    }

    pub fn machine(&self) -> &FlightStateMachine {
        &self.machine
    }

    pub fn launch_controls(&self) -> &LaunchControls {
        &self.launch_controls
    }

    pub fn launch_controls_mut(&mut self) -> &mut LaunchControls {
        &mut self.launch_controls
    }

    pub fn wind_velocity(&self) -> Vector3<f64> {
        self.wind.velocity()
    }

    pub fn telemetry(&self) -> &Telemetry {
        &self.telemetry
    }

    pub fn set_wind_speed(&mut self, speed: f64) {
        self.wind.set_speed(speed);
    }

    pub fn set_pilot_input(&mut self, input: PilotInput) {
        self.pilot = input;
    }

    /// Recompute the geometry-dependent coefficients. Takes effect on the
    /// next tick.
    pub fn set_scale(&mut self, scale: &PlaneScale) {
        self.constants = self.config.aero.with_scale(scale);
        debug!(
            "Plane scale {:?}: wing area {:.3}, C_L {:.3}, C_D {:.3}",
            scale,
            self.constants.wing_area,
            self.constants.lift_coefficient,
            self.constants.drag_coefficient
        );
    }

    /// Launch with the force and angle currently selected on the controls.
    pub fn launch(&mut self) -> Result<Transition, FlightError> {
        let params = self.launch_controls.launch_parameters();
        self.launch_with(params)
    }

    pub fn launch_with(&mut self, params: LaunchParameters) -> Result<Transition, FlightError> {
        let impulse = self.machine.launch(&params).inspect_err(|e| {
            warn!("Launch rejected: {}", e);
        })?;

        info!(
            "Launched with force {:.1} at {:.1}°, impulse {:?}",
            params.force, params.angle, impulse
        );

        Ok(Transition {
            commands: vec![
                BodyCommand::SetOrientation(params.orientation()),
                BodyCommand::SetGravity(true),
                BodyCommand::ApplyImpulse(impulse),
            ],
            event: FlightEvent::Launched {
                entity: None,
                params,
            },
        })
    }

    /// Collision notification from the engine.
    pub fn notify_landing(&mut self) -> Result<Transition, FlightError> {
        self.machine.land().inspect_err(|e| {
            warn!("Ignoring ground contact: {}", e);
        })?;

        let flight_time = self.machine.flight_time().unwrap_or_default();
        info!("Landed after {:.2} s ({})", flight_time, self.telemetry);

        Ok(Transition {
            commands: Vec::new(),
            event: FlightEvent::Landed {
                entity: None,
                flight_time,
            },
        })
    }

    /// Return to the spawn pose, waiting for the next launch.
    pub fn reset(&mut self) -> Result<Transition, FlightError> {
        self.machine.reset().inspect_err(|e| {
            warn!("Reset rejected: {}", e);
        })?;

        self.telemetry = Telemetry::default();
        self.pilot = PilotInput::default();
        info!("Plane reset to {:?}", self.config.physics.spawn_position);

        Ok(Transition {
            commands: vec![
                BodyCommand::ResetMotion {
                    position: self.config.physics.spawn_position,
                    orientation: UnitQuaternion::identity(),
                },
                BodyCommand::SetGravity(false),
            ],
            event: FlightEvent::Reset { entity: None },
        })
    }

    /// One fixed step of flight logic on a single body snapshot.
    ///
    /// Forces and the orientation correction both come from `snapshot`; the
    /// returned commands are not applied here.
    pub fn tick(&mut self, snapshot: &SpatialComponent, dt: f64) -> TickOutput {
        let mut output = TickOutput::default();

        if self.machine.advance(dt) == TimerUpdate::Expired {
            info!("Plane settled ({})", self.telemetry);
            output.events.push(FlightEvent::Settled { entity: None });
        }

        match self.machine.state() {
            FlightState::Idle => {
                output.commands.push(BodyCommand::SetOrientation(
                    self.launch_controls.preview_orientation(),
                ));
            }
            FlightState::Launched if self.machine.is_airborne() => {
                let forward = snapshot.forward();
                let right = snapshot.right();

                let forces = compute_forces(
                    &snapshot.velocity,
                    &self.wind.velocity(),
                    &forward,
                    &right,
                    &self.constants,
                );
                let attitude = next_orientation(
                    &snapshot.attitude,
                    &snapshot.velocity,
                    &right,
                    dt,
                    &self.config.orientation,
                );
                debug!("lift {:?} drag {:?}", forces.lift, forces.drag);

                output.commands.push(BodyCommand::ApplyForce(forces.lift));
                output.commands.push(BodyCommand::ApplyForce(forces.drag));
                output.commands.push(BodyCommand::SetOrientation(attitude));

                if !self.pilot.is_idle() {
                    let thrust = self.pilot.thrust(&forward, &self.config.pilot);
                    let torque = self.pilot.torque(&self.config.pilot);
                    output.commands.push(BodyCommand::ApplyForce(thrust));
                    output.commands.push(BodyCommand::ApplyTorque(torque));
                }

                output.forces = forces;
                self.telemetry = Telemetry::from_spatial(snapshot);
            }
            FlightState::Launched | FlightState::Landed => {}
        }

        output.telemetry = self.telemetry;
        output
    }

    /// Net external acceleration of the wing cloth for this tick's cells.
    pub fn wing_acceleration(&self, cells: &[GridCell]) -> Result<Vector3<f64>, SimError> {
        net_acceleration(
            cells,
            &self.wind.velocity(),
            &self.constants,
            &self.config.pressure_field.bias,
        )
    }
}
