pub mod components;
pub mod physics;
pub mod plugins;
pub mod resources;
pub mod simulation;
pub mod systems;
pub mod utils;

pub use components::{FlightEvent, FlightState, LaunchParameters, PlaneScale, WingGrid};
pub use physics::{BodyCommand, PhysicsEngine, ReferenceBody, RigidBody};
pub use plugins::PaperPlanePlugin;
pub use resources::SimulationConfig;
pub use simulation::{FlightSimulation, HeadlessRunner};
pub use utils::{ConfigError, FlightError, SimError};
