//! Affected cells on the preview grid.

use serde::Serialize;

use crate::dimensions::{AoeParams, Dimensions};
use crate::grid::{GridConfig, GridPoint};
use crate::shape::ShapeKind;

/// Grid cells covered by `shape_id` anchored at `anchor`, row by row.
///
/// Cells are tested at their integer coordinates using the grid's own cell
/// size and caster origin. Unknown shapes and volumes cover no cells.
pub fn affected_grid_cells(
    shape_id: &str,
    anchor: GridPoint,
    params: &AoeParams,
    grid: &GridConfig,
) -> Vec<GridPoint> {
    let Some(kind) = ShapeKind::parse(shape_id) else {
        tracing::debug!(shape_id, "unknown shape, empty overlay");
        return Vec::new();
    };
    let dims = Dimensions::resolve(kind, params);
    grid.points()
        .filter(|&p| dims.contains(p, anchor, grid.origin, grid.grid_size))
        .collect()
}

/// A shape drawn onto the preview grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overlay {
    /// The grid drawn on.
    pub grid: GridConfig,
    /// Where the shape is placed.
    pub anchor: GridPoint,
    /// Cells the shape covers.
    pub cells: Vec<GridPoint>,
}

impl Overlay {
    /// Place `shape_id` at `anchor` on `grid`.
    pub fn new(shape_id: &str, anchor: GridPoint, params: &AoeParams, grid: GridConfig) -> Self {
        Self {
            cells: affected_grid_cells(shape_id, anchor, params, &grid),
            grid,
            anchor,
        }
    }

    /// Glyph for one cell: `@` caster, `*` anchor, `#` covered, `.` empty.
    pub fn glyph(&self, point: GridPoint) -> char {
        if point == self.grid.origin {
            '@'
        } else if point == self.anchor {
            '*'
        } else if self.cells.contains(&point) {
            '#'
        } else {
            '.'
        }
    }
}

impl std::fmt::Display for Overlay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in 0..self.grid.cells {
            if y > 0 {
                writeln!(f)?;
            }
            let row: Vec<String> = (0..self.grid.cells)
                .map(|x| {
                    self.glyph(GridPoint::new(f64::from(x), f64::from(y)))
                        .to_string()
                })
                .collect();
            write!(f, "{}", row.join(" "))?;
        }
        Ok(())
    }
}
