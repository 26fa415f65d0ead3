use nalgebra::Vector3;

use crate::components::AeroConstants;

/// Static plus dynamic pressure: `P_atm + 0.5·ρ·|v|² + ρ·g·h`.
///
/// Shared by the lift/drag model and the wing pressure field.
pub fn pressure(velocity: &Vector3<f64>, height: f64, constants: &AeroConstants) -> f64 {
    constants.ambient_pressure
        + constants.dynamic_pressure(velocity.norm())
        + constants.air_density * constants.gravity * height
}
