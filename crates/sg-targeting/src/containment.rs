//! Point-in-shape tests on the grid.
//!
//! Circles and squares are centred on the anchor. Cones and lines start at the
//! caster's origin and point at the anchor. Volumes have no footprint test.

use std::f64::consts::{PI, TAU};

use crate::dimensions::{AoeParams, Dimensions};
use crate::grid::{CASTER_ORIGIN, GridPoint, feet_to_grid};
use crate::shape::ShapeKind;

impl Dimensions {
    /// Whether `point` falls inside the shape placed at `anchor`.
    ///
    /// `origin` is where the caster stands; cones and lines are aimed from it
    /// toward `anchor`. All points are in grid units, dimensions in feet.
    pub fn contains(
        &self,
        point: GridPoint,
        anchor: GridPoint,
        origin: GridPoint,
        grid_size: f64,
    ) -> bool {
        let cells = |feet| feet_to_grid(feet, grid_size);

        match *self {
            Self::Circle { radius } => point.distance_to(anchor) <= cells(radius),
            Self::Square { size } => {
                let half = cells(size) / 2.0;
                (point.x - anchor.x).abs() <= half && (point.y - anchor.y).abs() <= half
            }
            Self::Cone { range, angle } => {
                let half_angle = (angle / 2.0).to_radians();
                let mut diff = (origin.bearing_to(point) - origin.bearing_to(anchor)).abs();
                if diff > PI {
                    diff = TAU - diff;
                }
                diff <= half_angle && origin.distance_to(point) <= cells(range)
            }
            Self::Line { length, width } => {
                let (sin, cos) = origin.bearing_to(anchor).sin_cos();
                let (dx, dy) = (point.x - origin.x, point.y - origin.y);
                let along = dx * cos + dy * sin;
                let across = dy * cos - dx * sin;
                (0.0..=cells(length)).contains(&along) && across.abs() <= cells(width) / 2.0
            }
            Self::Cube { .. } | Self::Sphere { .. } | Self::Cylinder { .. } | Self::Wall { .. } => {
                false
            }
        }
    }
}

/// Whether `point` is inside the shape `shape_id` anchored at `anchor`.
///
/// Cones and lines are aimed from the preview grid's caster origin `(10, 10)`.
/// Volumes and unknown ids contain nothing.
pub fn is_point_in_shape(
    point: GridPoint,
    anchor: GridPoint,
    shape_id: &str,
    params: &AoeParams,
    grid_size: f64,
) -> bool {
    ShapeKind::parse(shape_id).is_some_and(|kind| {
        Dimensions::resolve(kind, params).contains(point, anchor, CASTER_ORIGIN, grid_size)
    })
}
