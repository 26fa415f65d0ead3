pub mod aerodynamics;
mod collisions;
mod controller;
pub mod flight;
mod physics;
mod wing;

pub use aerodynamics::{compute_forces, net_acceleration, pressure};
pub use collisions::resolve_ground_contact;
pub use controller::{clamp_bank, next_orientation};
pub use flight::{
    advance_clock, apply_plane_scale, flight_tick_system, handle_landings,
    handle_launch_requests, handle_reset_requests, integrate_bodies, sync_transforms,
    verify_collaborators,
};
pub use physics::{apply_velocity_limits, integrate_state};
pub use wing::{wing_flex, wing_load_system};
