use bevy::prelude::*;
use nalgebra::Vector3;

use super::driver::{FlightSimulation, Transition};
use crate::components::{AeroForces, FlightEvent, FlightState, SurfaceGenerator, Telemetry};
use crate::physics::PhysicsEngine;
use crate::resources::{SimulationClock, SimulationConfig};
use crate::utils::SimError;

/// Result of one fixed step of the headless loop.
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutcome {
    pub forces: AeroForces,
    pub telemetry: Telemetry,
    pub events: Vec<FlightEvent>,
    /// Net pressure-field acceleration of the wing cloth
    pub wing_acceleration: Vector3<f64>,
}

/// Drives a [`FlightSimulation`] against a physics engine and a wing surface
/// without an ECS.
pub struct HeadlessRunner<E, S> {
    simulation: FlightSimulation,
    engine: E,
    surface: S,
    clock: SimulationClock,
}

pub struct HeadlessRunnerBuilder<E, S> {
    config: SimulationConfig,
    engine: Option<E>,
    surface: Option<S>,
}

impl<E, S> Default for HeadlessRunnerBuilder<E, S> {
    fn default() -> Self {
        Self {
            config: SimulationConfig::default(),
            engine: None,
            surface: None,
        }
    }
}

impl<E: PhysicsEngine, S: SurfaceGenerator> HeadlessRunnerBuilder<E, S> {
    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_engine(mut self, engine: E) -> Self {
        self.engine = Some(engine);
        self
    }

    pub fn with_surface(mut self, surface: S) -> Self {
        self.surface = Some(surface);
        self
    }

    pub fn build(self) -> Result<HeadlessRunner<E, S>, SimError> {
        self.config.validate()?;

        let engine = self.engine.ok_or_else(|| {
            SimError::MissingCollaborator("no physics engine was provided".to_string())
        })?;
        let surface = self.surface.ok_or_else(|| {
            SimError::MissingCollaborator("no wing surface generator was provided".to_string())
        })?;

        Ok(HeadlessRunner {
            clock: SimulationClock::new(self.config.physics.timestep),
            simulation: FlightSimulation::new(self.config),
            engine,
            surface,
        })
    }
}

impl<E: PhysicsEngine, S: SurfaceGenerator> HeadlessRunner<E, S> {
    pub fn builder() -> HeadlessRunnerBuilder<E, S> {
        HeadlessRunnerBuilder::default()
    }

    pub fn simulation(&self) -> &FlightSimulation {
        &self.simulation
    }

    pub fn simulation_mut(&mut self) -> &mut FlightSimulation {
        &mut self.simulation
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn launch(&mut self) -> Result<FlightEvent, SimError> {
        let transition = self.simulation.launch()?;
        Ok(self.apply(transition))
    }

    pub fn reset(&mut self) -> Result<FlightEvent, SimError> {
        let transition = self.simulation.reset()?;
        Ok(self.apply(transition))
    }

    fn apply(&mut self, transition: Transition) -> FlightEvent {
        self.engine.apply_all(&transition.commands);
        transition.event
    }

    /// Tick the flight logic, hand its commands to the engine, integrate,
    /// then evaluate the wing pressure field.
    pub fn step(&mut self) -> Result<StepOutcome, SimError> {
        let dt = self.clock.timestep();
        let snapshot = self.engine.snapshot();

        let output = self.simulation.tick(&snapshot, dt);
        self.engine.apply_all(&output.commands);

        let mut events = output.events;
        if self.engine.step(dt).touchdown {
            // Contact outside a flight is logged and dropped
            if let Ok(transition) = self.simulation.notify_landing() {
                events.push(self.apply(transition));
            }
        }

        let cells = self.surface.cells();
        let wing_acceleration = self.simulation.wing_acceleration(&cells)?;
        self.clock.advance();

        Ok(StepOutcome {
            forces: output.forces,
            telemetry: output.telemetry,
            events,
            wing_acceleration,
        })
    }

    /// Step until the flight settles or `max_steps` have run. Returns every
    /// event seen on the way.
    pub fn run_until_settled(&mut self, max_steps: u64) -> Result<Vec<FlightEvent>, SimError> {
        let mut events = Vec::new();
        for _ in 0..max_steps {
            let outcome = self.step()?;
            events.extend(outcome.events);
            if self.simulation.machine().is_settled() {
                break;
            }
        }

        if self.simulation.state() == FlightState::Launched {
            warn!(
                "Still airborne after {} steps ({})",
                self.clock.step_count(),
                self.simulation.telemetry()
            );
        }
        Ok(events)
    }
}
