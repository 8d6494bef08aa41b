//! Area, volume and grid-cell coverage of shapes.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::dimensions::{AoeParams, Dimensions};
use crate::shape::ShapeKind;

/// How much ground a shape covers.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coverage {
    /// Area in square feet, or volume in cubic feet for 3D shapes.
    pub area: f64,
    /// Approximate number of grid cells touched.
    pub affected_cells: u64,
    /// The dimensions used, absent for unknown shapes.
    pub dimensions: Option<Dimensions>,
}

impl Dimensions {
    /// Area (2D shapes) or volume (3D shapes).
    pub fn area(&self) -> f64 {
        match *self {
            Self::Circle { radius } => PI * radius * radius,
            Self::Square { size } => size * size,
            Self::Cone { range, angle } => angle / 360.0 * PI * range * range,
            Self::Line { length, width } => length * width,
            Self::Cube { size } => size * size * size,
            Self::Sphere { radius } => 4.0 / 3.0 * PI * radius.powi(3),
            Self::Cylinder { radius, height } => PI * radius * radius * height,
            Self::Wall {
                length,
                height,
                width,
            } => length * height * width,
        }
    }

    /// Approximate grid cells covered on a grid of `grid_size`-foot cells.
    ///
    /// Volumes count stacked cells. A grid size that is not a positive finite
    /// number covers nothing.
    pub fn affected_cells(&self, grid_size: f64) -> u64 {
        if !(grid_size.is_finite() && grid_size > 0.0) {
            return 0;
        }
        let cell_area = grid_size * grid_size;
        let cells = match *self {
            Self::Circle { .. } | Self::Square { .. } | Self::Cone { .. } | Self::Line { .. } => {
                (self.area() / cell_area).ceil()
            }
            Self::Cube { size } => (size * size / cell_area).ceil() * (size / grid_size).ceil(),
            Self::Sphere { radius } => (4.0 / 3.0 * PI * (radius / grid_size).powi(3)).ceil(),
            Self::Cylinder { radius, height } => {
                (PI * (radius / grid_size).powi(2) * (height / grid_size).ceil()).ceil()
            }
            Self::Wall {
                length,
                height,
                width,
            } => (length * height / cell_area).ceil() * (width / grid_size).ceil(),
        };
        cells as u64
    }

    /// Coverage of these dimensions.
    pub fn coverage(&self, grid_size: f64) -> Coverage {
        Coverage {
            area: self.area(),
            affected_cells: self.affected_cells(grid_size),
            dimensions: Some(*self),
        }
    }
}

/// Area and cell coverage of the shape `shape_id` with `params`.
///
/// Unknown ids cover nothing.
pub fn calculate_coverage(shape_id: &str, params: &AoeParams) -> Coverage {
    let Some(kind) = ShapeKind::parse(shape_id) else {
        tracing::debug!(shape_id, "unknown shape, no coverage");
        return Coverage::default();
    };
    let coverage = Dimensions::resolve(kind, params).coverage(params.grid_size_or_default());
    tracing::trace!(
        shape = %kind,
        area = coverage.area,
        cells = coverage.affected_cells,
        "coverage"
    );
    coverage
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn default_circle() {
        let c = calculate_coverage("circle", &AoeParams::default());
        assert!(close(c.area, 1256.637_061));
        assert_eq!(c.affected_cells, 51);
        assert_eq!(c.dimensions, Some(Dimensions::Circle { radius: 20.0 }));
    }

    #[test]
    fn flat_shapes() {
        let c = calculate_coverage("square", &AoeParams::default());
        assert_eq!((c.area, c.affected_cells), (225.0, 9));

        let c = calculate_coverage("cone", &AoeParams::default());
        assert!(close(c.area, 0.25 * PI * 225.0));
        assert_eq!(c.affected_cells, 8);

        let c = calculate_coverage("line", &AoeParams::default());
        assert_eq!((c.area, c.affected_cells), (150.0, 6));
    }

    #[test]
    fn volumes() {
        let c = calculate_coverage("cube", &AoeParams::default());
        assert_eq!((c.area, c.affected_cells), (3375.0, 27));

        let c = calculate_coverage("sphere", &AoeParams::default());
        assert!(close(c.area, 4.0 / 3.0 * PI * 8000.0));
        // (4/3)π·4³ ≈ 268.08
        assert_eq!(c.affected_cells, 269);

        let c = calculate_coverage("cylinder", &AoeParams::default());
        assert!(close(c.area, PI * 100.0 * 20.0));
        // π·2²·4 ≈ 50.27
        assert_eq!(c.affected_cells, 51);

        let c = calculate_coverage("wall", &AoeParams::default());
        assert_eq!((c.area, c.affected_cells), (1500.0, 12));
    }

    #[test]
    fn custom_grid_size() {
        let params = AoeParams::default().with_size(20.0).with_grid_size(10.0);
        let c = calculate_coverage("square", &params);
        assert_eq!((c.area, c.affected_cells), (400.0, 4));
    }

    #[test]
    fn unknown_shape_covers_nothing() {
        let c = calculate_coverage("hexagon", &AoeParams::default());
        assert_eq!(c, Coverage::default());
        assert_eq!(c.area, 0.0);
        assert_eq!(c.affected_cells, 0);
    }

    #[test]
    fn degenerate_inputs() {
        let c = calculate_coverage("circle", &AoeParams::default().with_radius(0.0));
        assert_eq!((c.area, c.affected_cells), (0.0, 0));

        let c = calculate_coverage("wall", &AoeParams::default().with_width(-5.0));
        assert_eq!((c.area, c.affected_cells), (0.0, 0));

        for grid in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let c = calculate_coverage("circle", &AoeParams::default().with_grid_size(grid));
            assert_eq!(c.affected_cells, 0, "grid size {grid}");
            assert!(close(c.area, 1256.637_061));
        }
    }
}
