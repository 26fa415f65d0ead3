pub const GRAVITY: f64 = 9.81; // m/s^2
pub const SEA_LEVEL_PRESSURE: f64 = 101325.0; // Pa
pub const SEA_LEVEL_DENSITY: f64 = 1.225; // kg/m^3

pub const DEFAULT_TIMESTEP: f64 = 0.02; // 50 Hz fixed update
pub const DEFAULT_SETTLE_DURATION: f64 = 0.2; // s

// Below this magnitude a wind vector has no usable direction.
pub const MIN_WIND_DIRECTION_MAGNITUDE: f64 = 0.001;

// Tolerance used before normalizing derived directions.
pub const DIRECTION_EPSILON: f64 = 1e-9;

// Launch slider limits
pub const MAX_LAUNCH_FORCE: f64 = 50.0; // N·s
pub const MAX_LAUNCH_ANGLE: f64 = 45.0; // degrees
pub const MAX_WIND_SPEED: f64 = 30.0; // m/s
