//! Shape parameters as supplied by callers, and their resolved form.

use serde::{Deserialize, Serialize};

use crate::grid::DEFAULT_GRID_SIZE;
use crate::shape::ShapeKind;

/// Optional shape parameters, as a form would submit them.
///
/// Lengths are in feet and angles in degrees. Missing fields fall back to the
/// shape's catalog defaults; zero counts fall back to their defaults too.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AoeParams {
    /// Radius of circles, spheres and cylinders.
    pub radius: Option<f64>,
    /// Side length of squares and cubes.
    pub size: Option<f64>,
    /// Reach of a cone.
    pub range: Option<f64>,
    /// Opening angle of a cone.
    pub angle: Option<f64>,
    /// Length of lines and walls.
    pub length: Option<f64>,
    /// Width of lines and walls.
    pub width: Option<f64>,
    /// Height of cylinders and walls.
    pub height: Option<f64>,
    /// Feet per grid cell.
    pub grid_size: Option<f64>,
    /// Expected creatures per affected cell.
    pub creature_density: Option<f64>,
    /// Target cap for multi and smart targeting.
    pub max_targets: Option<u32>,
    /// Number of jumps for chain targeting.
    pub chain_count: Option<u32>,
}

impl AoeParams {
    /// Set the radius.
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    /// Set the side length.
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    /// Set the cone range.
    pub fn with_range(mut self, range: f64) -> Self {
        self.range = Some(range);
        self
    }

    /// Set the cone angle.
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = Some(angle);
        self
    }

    /// Set the length.
    pub fn with_length(mut self, length: f64) -> Self {
        self.length = Some(length);
        self
    }

    /// Set the width.
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the height.
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    /// Set feet per grid cell.
    pub fn with_grid_size(mut self, grid_size: f64) -> Self {
        self.grid_size = Some(grid_size);
        self
    }

    /// Set the creature density.
    pub fn with_creature_density(mut self, density: f64) -> Self {
        self.creature_density = Some(density);
        self
    }

    /// Set the target cap.
    pub fn with_max_targets(mut self, max_targets: u32) -> Self {
        self.max_targets = Some(max_targets);
        self
    }

    /// Set the chain count.
    pub fn with_chain_count(mut self, chain_count: u32) -> Self {
        self.chain_count = Some(chain_count);
        self
    }

    /// Feet per grid cell, defaulting to 5.
    pub fn grid_size_or_default(&self) -> f64 {
        self.grid_size.unwrap_or(DEFAULT_GRID_SIZE)
    }
}

/// Dimensions of one shape with every field filled in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum Dimensions {
    /// A circle.
    Circle {
        /// Radius in feet.
        radius: f64,
    },
    /// A square.
    Square {
        /// Side length in feet.
        size: f64,
    },
    /// A cone.
    Cone {
        /// Reach in feet.
        range: f64,
        /// Opening angle in degrees.
        angle: f64,
    },
    /// A line.
    Line {
        /// Length in feet.
        length: f64,
        /// Width in feet.
        width: f64,
    },
    /// A cube.
    Cube {
        /// Side length in feet.
        size: f64,
    },
    /// A sphere.
    Sphere {
        /// Radius in feet.
        radius: f64,
    },
    /// A cylinder.
    Cylinder {
        /// Radius in feet.
        radius: f64,
        /// Height in feet.
        height: f64,
    },
    /// A wall.
    Wall {
        /// Length in feet.
        length: f64,
        /// Height in feet.
        height: f64,
        /// Thickness in feet.
        width: f64,
    },
}

impl Dimensions {
    /// Fill in `params` for `kind` from the catalog defaults.
    ///
    /// Only the fields the shape's parameter type names are read. Negative or
    /// NaN values resolve to zero.
    pub fn resolve(kind: ShapeKind, params: &AoeParams) -> Self {
        let pick = |given: Option<f64>, default: f64| given.map_or(default, |v| v.max(0.0));

        match kind.definition().defaults {
            Self::Circle { radius } => Self::Circle {
                radius: pick(params.radius, radius),
            },
            Self::Square { size } => Self::Square {
                size: pick(params.size, size),
            },
            Self::Cone { range, angle } => Self::Cone {
                range: pick(params.range, range),
                angle: pick(params.angle, angle),
            },
            Self::Line { length, width } => Self::Line {
                length: pick(params.length, length),
                width: pick(params.width, width),
            },
            Self::Cube { size } => Self::Cube {
                size: pick(params.size, size),
            },
            Self::Sphere { radius } => Self::Sphere {
                radius: pick(params.radius, radius),
            },
            Self::Cylinder { radius, height } => Self::Cylinder {
                radius: pick(params.radius, radius),
                height: pick(params.height, height),
            },
            Self::Wall {
                length,
                height,
                width,
            } => Self::Wall {
                length: pick(params.length, length),
                height: pick(params.height, height),
                width: pick(params.width, width),
            },
        }
    }

    /// The shape these dimensions describe.
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Circle { .. } => ShapeKind::Circle,
            Self::Square { .. } => ShapeKind::Square,
            Self::Cone { .. } => ShapeKind::Cone,
            Self::Line { .. } => ShapeKind::Line,
            Self::Cube { .. } => ShapeKind::Cube,
            Self::Sphere { .. } => ShapeKind::Sphere,
            Self::Cylinder { .. } => ShapeKind::Cylinder,
            Self::Wall { .. } => ShapeKind::Wall,
        }
    }

    /// Multiply every length by `factor`, leaving angles alone.
    pub fn scaled(self, factor: f64) -> Self {
        match self {
            Self::Circle { radius } => Self::Circle {
                radius: radius * factor,
            },
            Self::Square { size } => Self::Square {
                size: size * factor,
            },
            Self::Cone { range, angle } => Self::Cone {
                range: range * factor,
                angle,
            },
            Self::Line { length, width } => Self::Line {
                length: length * factor,
                width: width * factor,
            },
            Self::Cube { size } => Self::Cube {
                size: size * factor,
            },
            Self::Sphere { radius } => Self::Sphere {
                radius: radius * factor,
            },
            Self::Cylinder { radius, height } => Self::Cylinder {
                radius: radius * factor,
                height: height * factor,
            },
            Self::Wall {
                length,
                height,
                width,
            } => Self::Wall {
                length: length * factor,
                height: height * factor,
                width: width * factor,
            },
        }
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Circle { radius } | Self::Sphere { radius } => write!(f, "radius {radius} ft"),
            Self::Square { size } | Self::Cube { size } => write!(f, "size {size} ft"),
            Self::Cone { range, angle } => write!(f, "range {range} ft, angle {angle}°"),
            Self::Line { length, width } => write!(f, "{length} × {width} ft"),
            Self::Cylinder { radius, height } => {
                write!(f, "radius {radius} ft, height {height} ft")
            }
            Self::Wall {
                length,
                height,
                width,
            } => write!(f, "{length} × {height} × {width} ft"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_fields() {
        let dims = Dimensions::resolve(ShapeKind::Cone, &AoeParams::default().with_range(30.0));
        assert_eq!(
            dims,
            Dimensions::Cone {
                range: 30.0,
                angle: 90.0
            }
        );
    }

    #[test]
    fn unrelated_fields_are_ignored() {
        let params = AoeParams::default().with_size(100.0).with_height(1.0);
        assert_eq!(
            Dimensions::resolve(ShapeKind::Circle, &params),
            Dimensions::Circle { radius: 20.0 }
        );
    }

    #[test]
    fn explicit_zero_and_negative_values_stay_degenerate() {
        let params = AoeParams::default().with_radius(0.0);
        assert_eq!(
            Dimensions::resolve(ShapeKind::Sphere, &params),
            Dimensions::Sphere { radius: 0.0 }
        );
        let params = AoeParams::default().with_length(-10.0);
        assert_eq!(
            Dimensions::resolve(ShapeKind::Line, &params),
            Dimensions::Line {
                length: 0.0,
                width: 5.0
            }
        );
    }

    #[test]
    fn scaling_keeps_angles() {
        let dims = Dimensions::Cone {
            range: 15.0,
            angle: 60.0,
        };
        assert_eq!(
            dims.scaled(2.0),
            Dimensions::Cone {
                range: 30.0,
                angle: 60.0
            }
        );
    }

    #[test]
    fn params_from_form_json() {
        let params: AoeParams =
            serde_json::from_str(r#"{"radius": 30, "gridSize": 10, "maxTargets": 4}"#).unwrap();
        assert_eq!(params.radius, Some(30.0));
        assert_eq!(params.grid_size_or_default(), 10.0);
        assert_eq!(params.max_targets, Some(4));
        assert_eq!(params.width, None);
    }

    #[test]
    fn dimensions_serialize_tagged() {
        let json = serde_json::to_value(Dimensions::Cylinder {
            radius: 10.0,
            height: 20.0,
        })
        .unwrap();
        assert_eq!(json["shape"], "cylinder");
        assert_eq!(json["height"], 20.0);
    }
}
