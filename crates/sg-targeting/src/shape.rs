//! Area-of-effect shape catalog.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dimensions::Dimensions;
use crate::error::{TargetingError, TargetingResult};

/// An area-of-effect shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Flat disc around the anchor.
    Circle,
    /// Flat axis-aligned square centred on the anchor.
    Square,
    /// Sector spreading from the caster.
    Cone,
    /// Strip running from the caster through the anchor.
    Line,
    /// Cube centred on the anchor.
    Cube,
    /// Ball around the anchor.
    Sphere,
    /// Vertical column around the anchor.
    Cylinder,
    /// Thin upright barrier.
    Wall,
}

/// Which dimensions a shape is described by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParameterType {
    /// `radius`.
    Radius,
    /// `size`.
    SideLength,
    /// `range` and `angle`.
    RangeAngle,
    /// `length` and `width`.
    LengthWidth,
    /// `radius` and `height`.
    RadiusHeight,
    /// `length`, `height` and `width`.
    LengthHeightWidth,
}

impl ParameterType {
    /// Names of the parameters this type reads.
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            Self::Radius => &["radius"],
            Self::SideLength => &["size"],
            Self::RangeAngle => &["range", "angle"],
            Self::LengthWidth => &["length", "width"],
            Self::RadiusHeight => &["radius", "height"],
            Self::LengthHeightWidth => &["length", "height", "width"],
        }
    }
}

/// A catalog entry describing one shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShapeDefinition {
    /// The shape.
    pub kind: ShapeKind,
    /// Display name.
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Hover text for pickers.
    pub tooltip: &'static str,
    /// Which dimensions apply.
    pub parameter_type: ParameterType,
    /// Dimensions used when none are given, in feet and degrees.
    pub defaults: Dimensions,
}

impl ShapeDefinition {
    /// Catalog id.
    pub fn id(&self) -> &'static str {
        self.kind.id()
    }

    /// Whether the shape is measured as a volume rather than an area.
    pub fn is_volume(&self) -> bool {
        self.kind.is_volume()
    }
}

static SHAPES: [ShapeDefinition; 8] = [
    ShapeDefinition {
        kind: ShapeKind::Circle,
        name: "Circle",
        description: "Affects all targets within a circular area",
        tooltip: "Creates a perfectly circular area of magical effect",
        parameter_type: ParameterType::Radius,
        defaults: Dimensions::Circle { radius: 20.0 },
    },
    ShapeDefinition {
        kind: ShapeKind::Square,
        name: "Square",
        description: "Affects all targets within a square area",
        tooltip: "Forms a square-shaped area of effect with equal sides",
        parameter_type: ParameterType::SideLength,
        defaults: Dimensions::Square { size: 15.0 },
    },
    ShapeDefinition {
        kind: ShapeKind::Cone,
        name: "Cone",
        description: "Affects targets in a cone-shaped area extending from the caster",
        tooltip: "Projects a cone of magical energy that widens as it extends",
        parameter_type: ParameterType::RangeAngle,
        defaults: Dimensions::Cone {
            range: 15.0,
            angle: 90.0,
        },
    },
    ShapeDefinition {
        kind: ShapeKind::Line,
        name: "Line",
        description: "Affects targets in a straight line from the caster",
        tooltip: "Creates a straight line of magical effect extending from you",
        parameter_type: ParameterType::LengthWidth,
        defaults: Dimensions::Line {
            length: 30.0,
            width: 5.0,
        },
    },
    ShapeDefinition {
        kind: ShapeKind::Cube,
        name: "Cube",
        description: "Affects all targets within a three-dimensional cube",
        tooltip: "Forms a magical cube that affects everything inside it",
        parameter_type: ParameterType::SideLength,
        defaults: Dimensions::Cube { size: 15.0 },
    },
    ShapeDefinition {
        kind: ShapeKind::Sphere,
        name: "Sphere",
        description: "Affects all targets within a three-dimensional sphere",
        tooltip: "Creates a perfect sphere of magical energy",
        parameter_type: ParameterType::Radius,
        defaults: Dimensions::Sphere { radius: 20.0 },
    },
    ShapeDefinition {
        kind: ShapeKind::Cylinder,
        name: "Cylinder",
        description: "Affects all targets within a cylinder",
        tooltip: "Forms a cylindrical column of magical effect",
        parameter_type: ParameterType::RadiusHeight,
        defaults: Dimensions::Cylinder {
            radius: 10.0,
            height: 20.0,
        },
    },
    ShapeDefinition {
        kind: ShapeKind::Wall,
        name: "Wall",
        description: "Creates a wall-shaped effect",
        tooltip: "Conjures a magical barrier or wall of energy",
        parameter_type: ParameterType::LengthHeightWidth,
        defaults: Dimensions::Wall {
            length: 30.0,
            height: 10.0,
            width: 5.0,
        },
    },
];

impl ShapeKind {
    /// All shapes in catalog order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Circle,
            Self::Square,
            Self::Cone,
            Self::Line,
            Self::Cube,
            Self::Sphere,
            Self::Cylinder,
            Self::Wall,
        ]
    }

    /// Parse a catalog id. Ids are lowercase and matched exactly.
    pub fn parse(id: &str) -> Option<Self> {
        match id {
            "circle" => Some(Self::Circle),
            "square" => Some(Self::Square),
            "cone" => Some(Self::Cone),
            "line" => Some(Self::Line),
            "cube" => Some(Self::Cube),
            "sphere" => Some(Self::Sphere),
            "cylinder" => Some(Self::Cylinder),
            "wall" => Some(Self::Wall),
            _ => None,
        }
    }

    /// Catalog id.
    pub fn id(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Square => "square",
            Self::Cone => "cone",
            Self::Line => "line",
            Self::Cube => "cube",
            Self::Sphere => "sphere",
            Self::Cylinder => "cylinder",
            Self::Wall => "wall",
        }
    }

    /// The catalog entry for this shape.
    pub fn definition(self) -> &'static ShapeDefinition {
        &SHAPES[self.index()]
    }

    /// Whether the shape is three-dimensional.
    pub fn is_volume(self) -> bool {
        matches!(self, Self::Cube | Self::Sphere | Self::Cylinder | Self::Wall)
    }

    fn index(self) -> usize {
        match self {
            Self::Circle => 0,
            Self::Square => 1,
            Self::Cone => 2,
            Self::Line => 3,
            Self::Cube => 4,
            Self::Sphere => 5,
            Self::Cylinder => 6,
            Self::Wall => 7,
        }
    }
}

impl FromStr for ShapeKind {
    type Err = TargetingError;

    fn from_str(s: &str) -> TargetingResult<Self> {
        Self::parse(s).ok_or_else(|| TargetingError::UnknownShape(s.to_string()))
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Look up a shape by catalog id.
pub fn get_shape_by_id(id: &str) -> Option<&'static ShapeDefinition> {
    ShapeKind::parse(id).map(ShapeKind::definition)
}
