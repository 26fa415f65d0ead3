mod integrator;

pub use integrator::{apply_velocity_limits, integrate_state};
