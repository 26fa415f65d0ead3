use nalgebra::Vector3;

use super::pressure::pressure;
use crate::components::{AeroConstants, GridCell};
use crate::utils::SimError;

/// Net external acceleration for the deformable wing surface.
///
/// Each cell contributes `normal · pressure(wind, cell height)`; the
/// contributions are averaged and `bias` is added once. An empty grid has no
/// average and is rejected.
pub fn net_acceleration(
    cells: &[GridCell],
    wind_velocity: &Vector3<f64>,
    constants: &AeroConstants,
    bias: &Vector3<f64>,
) -> Result<Vector3<f64>, SimError> {
    if cells.is_empty() {
        return Err(SimError::EmptyGrid);
    }

    let total: Vector3<f64> = cells
        .iter()
        .map(|cell| cell.normal * pressure(wind_velocity, cell.height(), constants))
        .sum();

    Ok(total / cells.len() as f64 + bias)
}
