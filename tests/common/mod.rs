mod assertions;
mod test_app;

pub use assertions::{assert_attitude_eq, assert_position_eq, assert_spatial_valid};
pub use fixtures::*;
pub use test_app::{TestApp, TestAppBuilder};
