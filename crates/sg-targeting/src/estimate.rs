//! Target count estimates.

use serde::{Deserialize, Serialize};

use crate::coverage::calculate_coverage;
use crate::dimensions::AoeParams;
use crate::targeting::TargetingKind;

/// Default target cap for multi and chain targeting.
pub const DEFAULT_TARGET_COUNT: u32 = 3;

/// Creatures per cell assumed for area targeting.
pub const AREA_DENSITY: f64 = 0.2;

/// Creatures per cell assumed for cones and lines.
pub const LINEAR_DENSITY: f64 = 0.33;

/// How many creatures a spell can be expected to affect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetEstimate {
    /// A known count.
    Exact(u32),
    /// Depends on the situation at cast time.
    Variable,
}

impl TargetEstimate {
    /// The count, if known.
    pub fn count(self) -> Option<u32> {
        match self {
            Self::Exact(n) => Some(n),
            Self::Variable => None,
        }
    }
}

impl std::fmt::Display for TargetEstimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "{n}"),
            Self::Variable => write!(f, "variable"),
        }
    }
}

/// Estimate how many targets `targeting_id` reaches.
///
/// Area targeting needs `shape_id`; without one the count is
/// [`TargetEstimate::Variable`]. Cone and line targeting always measure their
/// own shape. Unknown targeting ids reach no one.
pub fn estimate_max_targets(
    targeting_id: &str,
    shape_id: Option<&str>,
    params: &AoeParams,
) -> TargetEstimate {
    let Some(kind) = TargetingKind::parse(targeting_id) else {
        tracing::debug!(targeting_id, "unknown targeting type, no targets");
        return TargetEstimate::Exact(0);
    };
    let or_default = |n: Option<u32>| n.filter(|&n| n > 0);

    match kind {
        TargetingKind::Single | TargetingKind::SelfOnly => TargetEstimate::Exact(1),
        TargetingKind::Multi => {
            TargetEstimate::Exact(or_default(params.max_targets).unwrap_or(DEFAULT_TARGET_COUNT))
        }
        TargetingKind::Chain => {
            TargetEstimate::Exact(or_default(params.chain_count).unwrap_or(DEFAULT_TARGET_COUNT))
        }
        TargetingKind::Area => match shape_id {
            Some(shape) => density_estimate(shape, params, AREA_DENSITY),
            None => TargetEstimate::Variable,
        },
        TargetingKind::Cone | TargetingKind::Line => {
            density_estimate(kind.id(), params, LINEAR_DENSITY)
        }
        TargetingKind::Smart => or_default(params.max_targets)
            .map_or(TargetEstimate::Variable, TargetEstimate::Exact),
    }
}

fn density_estimate(shape_id: &str, params: &AoeParams, default_density: f64) -> TargetEstimate {
    let density = params
        .creature_density
        .filter(|d| d.is_finite() && *d > 0.0)
        .unwrap_or(default_density);
    let cells = calculate_coverage(shape_id, params).affected_cells;
    let targets = (cells as f64 * density).ceil().max(1.0);
    TargetEstimate::Exact(targets as u32)
}
