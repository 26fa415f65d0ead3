mod force_calculator;
mod pressure;
mod pressure_field;

pub use force_calculator::compute_forces;
pub use pressure::pressure;
pub use pressure_field::net_acceleration;
