use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

use super::{
    LaunchConfig, OrientationConfig, PhysicsConfig, PilotConfig, PressureFieldConfig,
    WindConfig, WingFlexConfig,
};
use crate::components::{AeroConstants, WingGrid};
use crate::utils::{ConfigError, DEFAULT_SETTLE_DURATION};

/// Complete configuration of a paper plane flight.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub physics: PhysicsConfig,
    pub aero: AeroConstants,
    pub orientation: OrientationConfig,
    pub launch: LaunchConfig,
    pub wind: WindConfig,
    pub pilot: PilotConfig,
    pub pressure_field: PressureFieldConfig,
    pub wing_grid: WingGrid,
    pub wing_flex: WingFlexConfig,
    /// Grace period after touchdown before the flight counts as settled (s)
    pub settle_duration: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            physics: PhysicsConfig::default(),
            aero: AeroConstants::default(),
            orientation: OrientationConfig::default(),
            launch: LaunchConfig::default(),
            wind: WindConfig::default(),
            pilot: PilotConfig::default(),
            pressure_field: PressureFieldConfig::default(),
            wing_grid: WingGrid::default(),
            wing_flex: WingFlexConfig::default(),
            settle_duration: DEFAULT_SETTLE_DURATION,
        }
    }
}

impl SimulationConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        let config: Self = serde_yaml::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let file = File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| Err(ConfigError::ValidationError(msg.to_string()));

        if !(self.physics.timestep > 0.0) {
            return invalid("physics.timestep must be positive");
        }
        if !(self.physics.mass > 0.0) {
            return invalid("physics.mass must be positive");
        }
        if self.aero.air_density < 0.0 || self.aero.gravity < 0.0 {
            return invalid("aero.air_density and aero.gravity must not be negative");
        }
        if !(0.0..=180.0).contains(&self.orientation.max_bank_angle) {
            return invalid("orientation.max_bank_angle must lie within [0, 180] degrees");
        }
        if self.orientation.velocity_threshold < 0.0 || self.orientation.rotation_speed < 0.0 {
            return invalid("orientation speeds must not be negative");
        }
        if self.launch.max_force < 0.0 || self.launch.max_angle < 0.0 {
            return invalid("launch limits must not be negative");
        }
        if self.wing_grid.cell_count() == 0 {
            return invalid("wing_grid must contain at least one cell");
        }
        if !(self.wing_grid.cell_size > 0.0) {
            return invalid("wing_grid.cell_size must be positive");
        }
        if !(self.settle_duration >= 0.0) {
            return invalid("settle_duration must not be negative");
        }
        Ok(())
    }
}
