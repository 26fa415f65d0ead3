pub mod aerodynamics;
pub mod collision;
pub mod controls;
pub mod flight;
pub mod grid;
pub mod physics;
pub mod spatial;
pub mod telemetry;
pub mod wing;

pub use aerodynamics::{AeroConstants, AeroForces, PlaneScale};
pub use collision::{CollisionComponent, LandingEvent};
pub use controls::{LaunchControls, PilotInput, WindControl};
pub use flight::{
    FlightEvent, FlightState, FlightStateMachine, LaunchParameters, LaunchRequest, ResetRequest,
    TimerUpdate,
};
pub use grid::{GridCell, SurfaceGenerator, WingGrid};
pub use physics::PhysicsComponent;
pub use spatial::SpatialComponent;
pub use telemetry::Telemetry;
pub use wing::{WingFlex, WingLoad, RESTING_SAG};
