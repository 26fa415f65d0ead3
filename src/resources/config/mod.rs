pub mod aerodynamics;
pub mod controls;
pub mod environment;
pub mod physics;
pub mod simulation;

pub use aerodynamics::{OrientationConfig, PressureFieldConfig, WingFlexConfig};
pub use controls::{LaunchConfig, PilotConfig};
pub use environment::WindConfig;
pub use physics::PhysicsConfig;
pub use simulation::SimulationConfig;
