mod requests;
mod startup;
mod step;
mod sync;

pub use requests::{
    apply_plane_scale, handle_landings, handle_launch_requests, handle_reset_requests,
};
pub use startup::verify_collaborators;
pub use step::{advance_clock, flight_tick_system, integrate_bodies};
pub use sync::sync_transforms;
