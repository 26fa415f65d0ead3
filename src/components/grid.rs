use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// One cell of the deformable wing surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridCell {
    pub center: Vector3<f64>,
    /// Outward unit normal.
    pub normal: Vector3<f64>,
}

impl GridCell {
    pub fn new(center: Vector3<f64>, normal: Vector3<f64>) -> Self {
        Self { center, normal }
    }

    /// Height used by the hydrostatic pressure term.
    pub fn height(&self) -> f64 {
        self.center.y
    }
}

/// Source of the wing surface cells, regenerated every tick.
pub trait SurfaceGenerator {
    fn cells(&self) -> Vec<GridCell>;
}

/// Regular procedural grid standing in for the deformable wing mesh.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WingGrid {
    /// Cells along x.
    pub width: u32,
    /// Cells along y.
    pub height: u32,
    /// Edge length of one cell (m).
    pub cell_size: f64,
}

impl Default for WingGrid {
    fn default() -> Self {
        Self {
            width: 20,
            height: 30,
            cell_size: 1.0,
        }
    }
}

impl WingGrid {
    pub fn new(width: u32, height: u32, cell_size: f64) -> Self {
        Self {
            width,
            height,
            cell_size,
        }
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Offset that centers the grid in x/y and pushes it back along z.
    pub fn offset(&self) -> Vector3<f64> {
        let depth = (self.cell_count() / 25) as f64;
        Vector3::new(
            self.width as f64 * -0.5,
            self.height as f64 * -0.5,
            depth,
        )
    }

    /// Corner vertices of cell (x, y) in mesh order.
    fn cell_vertices(&self, x: u32, y: u32) -> [Vector3<f64>; 4] {
        let half = self.cell_size * 0.5;
        let center = self.cell_center(x, y);
        [
            center + Vector3::new(-half, -half, 0.0),
            center + Vector3::new(-half, half, 0.0),
            center + Vector3::new(half, -half, 0.0),
            center + Vector3::new(half, half, 0.0),
        ]
    }

    fn cell_center(&self, x: u32, y: u32) -> Vector3<f64> {
        Vector3::new(
            x as f64 * self.cell_size,
            y as f64 * self.cell_size,
            0.0,
        ) + self.offset()
    }

    /// Normal of the first triangle (v0, v1, v2) of a cell. Degenerate cells
    /// report a zero normal.
    fn cell_normal(&self, x: u32, y: u32) -> Vector3<f64> {
        let [v0, v1, v2, _] = self.cell_vertices(x, y);
        (v1 - v0)
            .cross(&(v2 - v0))
            .try_normalize(f64::EPSILON)
            .unwrap_or_else(Vector3::zeros)
    }
}

impl SurfaceGenerator for WingGrid {
    /// Cells in column-major order (x outer, y inner).
    fn cells(&self) -> Vec<GridCell> {
        let mut cells = Vec::with_capacity(self.cell_count());
        for x in 0..self.width {
            for y in 0..self.height {
                cells.push(GridCell::new(
                    self.cell_center(x, y),
                    self.cell_normal(x, y),
                ));
            }
        }
        cells
    }
}
