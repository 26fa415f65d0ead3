use bevy::prelude::*;

/// Simulated time driven by fixed physics steps, independent of wall clock.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct SimulationClock {
    timestep: f64,
    elapsed: f64,
    step_count: u64,
}

impl SimulationClock {
    pub fn new(timestep: f64) -> Self {
        Self {
            timestep,
            elapsed: 0.0,
            step_count: 0,
        }
    }

    pub fn advance(&mut self) {
        self.elapsed += self.timestep;
        self.step_count += 1;
    }

    pub fn timestep(&self) -> f64 {
        self.timestep
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed
    }

    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.step_count = 0;
    }
}
