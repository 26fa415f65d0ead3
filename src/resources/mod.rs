pub mod config;
mod time;

pub use config::{
    LaunchConfig, OrientationConfig, PhysicsConfig, PilotConfig, PressureFieldConfig,
    SimulationConfig, WindConfig, WingFlexConfig,
};
pub use time::SimulationClock;
