//! Targeting geometry for Spellgrid.
//!
//! Holds the fixed catalogs of area-of-effect [shapes](ShapeKind) and
//! [targeting types](TargetingKind), and answers geometric questions about
//! them: how much area or volume a shape covers, roughly how many grid cells
//! it touches, whether a grid point falls inside it, and how many creatures a
//! spell can expect to reach.
//!
//! Lengths are in feet; positions are in grid units of `grid_size` feet
//! (5 by default).
//!
//! ```
//! use sg_targeting::{AoeParams, TargetEstimate, calculate_coverage, estimate_max_targets};
//!
//! let coverage = calculate_coverage("circle", &AoeParams::default());
//! assert_eq!(coverage.affected_cells, 51);
//!
//! let targets = estimate_max_targets("area", Some("circle"), &AoeParams::default());
//! assert_eq!(targets, TargetEstimate::Exact(11));
//! ```

pub mod containment;
pub mod coverage;
pub mod dimensions;
pub mod error;
pub mod estimate;
pub mod grid;
pub mod overlay;
pub mod shape;
pub mod targeting;

pub use containment::is_point_in_shape;
pub use coverage::{Coverage, calculate_coverage};
pub use dimensions::{AoeParams, Dimensions};
pub use error::{TargetingError, TargetingResult};
pub use estimate::{TargetEstimate, estimate_max_targets};
pub use grid::{CASTER_ORIGIN, GridConfig, GridPoint, feet_to_grid, grid_distance};
pub use overlay::{Overlay, affected_grid_cells};
pub use shape::{ParameterType, ShapeDefinition, ShapeKind, get_shape_by_id};
pub use targeting::{
    TargetingKind, TargetingTypeDefinition, action_point_modifier, get_targeting_type_by_id,
    is_multi_target,
};
