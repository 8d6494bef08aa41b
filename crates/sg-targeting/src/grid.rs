//! Grid units and the preview grid.
//!
//! Distances on the grid are measured in cells; one cell is `grid_size` feet
//! across.

use serde::{Deserialize, Serialize};

/// Feet per grid cell unless configured otherwise.
pub const DEFAULT_GRID_SIZE: f64 = 5.0;

/// Cells along each side of the preview grid.
pub const DEFAULT_GRID_CELLS: u32 = 21;

/// Where the caster stands on the preview grid: its centre cell.
pub const CASTER_ORIGIN: GridPoint = GridPoint { x: 10.0, y: 10.0 };

/// A position in grid units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GridPoint {
    /// Column.
    pub x: f64,
    /// Row.
    pub y: f64,
}

impl GridPoint {
    /// Create a point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`, in grid units.
    pub fn distance_to(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Bearing from `self` to `other` in radians.
    pub(crate) fn bearing_to(self, other: Self) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }
}

impl std::fmt::Display for GridPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Convert feet to grid units.
pub fn feet_to_grid(feet: f64, grid_size: f64) -> f64 {
    feet / grid_size
}

/// Distance between two grid points, in feet.
pub fn grid_distance(a: GridPoint, b: GridPoint, grid_size: f64) -> f64 {
    a.distance_to(b) * grid_size
}

/// Configuration of the square preview grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridConfig {
    /// Feet per cell.
    pub grid_size: f64,
    /// Cells along each side.
    pub cells: u32,
    /// Caster position, in grid units.
    pub origin: GridPoint,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            cells: DEFAULT_GRID_CELLS,
            origin: CASTER_ORIGIN,
        }
    }
}

impl GridConfig {
    /// Set feet per cell.
    pub fn with_grid_size(mut self, grid_size: f64) -> Self {
        self.grid_size = grid_size;
        self
    }

    /// Set the side length in cells.
    pub fn with_cells(mut self, cells: u32) -> Self {
        self.cells = cells;
        self
    }

    /// Set the caster position.
    pub fn with_origin(mut self, origin: GridPoint) -> Self {
        self.origin = origin;
        self
    }

    /// Every cell of the grid, row by row.
    pub fn points(&self) -> impl Iterator<Item = GridPoint> + '_ {
        (0..self.cells).flat_map(move |y| {
            (0..self.cells).map(move |x| GridPoint::new(f64::from(x), f64::from(y)))
        })
    }

    /// Returns true if `point` lies on the grid.
    pub fn contains(&self, point: GridPoint) -> bool {
        let side = f64::from(self.cells);
        (0.0..side).contains(&point.x) && (0.0..side).contains(&point.y)
    }
}
