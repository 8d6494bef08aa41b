//! Targeting type catalog.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{TargetingError, TargetingResult};
use crate::shape::ShapeKind;

/// How a spell picks what it affects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetingKind {
    /// One chosen target.
    Single,
    /// Several individually chosen targets.
    Multi,
    /// Everything inside a placed shape.
    Area,
    /// A primary target, then nearby ones in turn.
    Chain,
    /// Everything in a cone from the caster.
    Cone,
    /// Everything on a line from the caster.
    Line,
    /// The caster only.
    #[serde(rename = "self")]
    SelfOnly,
    /// Targets picked automatically.
    Smart,
}

/// A catalog entry describing one targeting type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetingTypeDefinition {
    /// The targeting type.
    pub kind: TargetingKind,
    /// Display name.
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Hover text for pickers.
    pub tooltip: &'static str,
    /// Action point cost adjustment, between -2 and 2.
    pub action_point_modifier: i8,
    /// How to place this targeting type on the preview grid.
    pub visualization_tip: &'static str,
    /// Example spells using this targeting type.
    pub examples: &'static [&'static str],
}

impl TargetingTypeDefinition {
    /// Catalog id.
    pub fn id(&self) -> &'static str {
        self.kind.id()
    }
}

static TARGETING_TYPES: [TargetingTypeDefinition; 8] = [
    TargetingTypeDefinition {
        kind: TargetingKind::Single,
        name: "Single Target",
        description: "Affects one specific target",
        tooltip: "Focus your spell's energy on a single target for maximum effect",
        action_point_modifier: 0,
        visualization_tip: "Click anywhere within range to select your single target.",
        examples: &[
            "Fireball: A concentrated ball of fire shot at a specific target",
            "Frostbolt: A chilling bolt of ice that slows and damages one foe",
            "Healing Touch: A direct healing spell focusing on a single ally",
        ],
    },
    TargetingTypeDefinition {
        kind: TargetingKind::Multi,
        name: "Multiple Targets",
        description: "Affects several individually selected targets",
        tooltip: "Split your spell's energy between multiple targets you choose",
        action_point_modifier: 1,
        visualization_tip: "Select each target individually within range.",
        examples: &[
            "Magic Missile: Multiple arcane bolts that can target different foes",
            "Healing Word: Quick healing magic that can be directed at up to 3 allies",
            "Hunter's Mark: Mark multiple targets for increased damage",
        ],
    },
    TargetingTypeDefinition {
        kind: TargetingKind::Area,
        name: "Area of Effect",
        description: "Affects all targets within a defined area",
        tooltip: "Create a magical effect that impacts everything in a specific area",
        action_point_modifier: 1,
        visualization_tip: "Place the area of effect anywhere within range. \
                            All targets inside the area will be affected.",
        examples: &[
            "Flamestrike: A column of fire that damages all in the target area",
            "Healing Rain: Healing energy rains down on all allies in an area",
            "Blizzard: Frozen shards fall in an area, damaging and slowing enemies",
        ],
    },
    TargetingTypeDefinition {
        kind: TargetingKind::Chain,
        name: "Chain Effect",
        description: "Effect jumps from one target to nearby targets",
        tooltip: "Your spell chains from one target to others within proximity",
        action_point_modifier: 2,
        visualization_tip: "Select the primary target. The spell chains to nearby \
                            secondary targets automatically.",
        examples: &[
            "Chain Lightning: Electricity jumps from one target to nearby ones",
            "Chain Heal: Healing energy that bounces between injured allies",
            "Corruption Spread: Dark magic that spreads between proximate foes",
        ],
    },
    TargetingTypeDefinition {
        kind: TargetingKind::Cone,
        name: "Cone",
        description: "Affects targets in a cone-shaped area",
        tooltip: "Project your spell in a widening cone from your position",
        action_point_modifier: 1,
        visualization_tip: "The cone extends from your position in the direction you \
                            cast it, affecting all in its arc.",
        examples: &[
            "Dragon's Breath: A cone of flame that damages all in its path",
            "Frost Nova: A cone of freezing energy that immobilizes enemies",
            "Cleansing Wave: Healing energy projected in a widening cone",
        ],
    },
    TargetingTypeDefinition {
        kind: TargetingKind::Line,
        name: "Line",
        description: "Affects targets in a line",
        tooltip: "Your spell strikes in a straight line, affecting all in its path",
        action_point_modifier: 1,
        visualization_tip: "The line extends from your position through your target \
                            point, affecting all in its path.",
        examples: &[
            "Lightning Bolt: A straight line of electricity damaging all in its path",
            "Piercing Shot: An arrow that can hit multiple targets in a line",
            "Wall of Frost: Create a line of ice that slows enemies crossing it",
        ],
    },
    TargetingTypeDefinition {
        kind: TargetingKind::SelfOnly,
        name: "Self",
        description: "Only affects the caster",
        tooltip: "Channel the spell's energy into yourself",
        action_point_modifier: -1,
        visualization_tip: "This spell only affects you at your current position.",
        examples: &[
            "Arcane Intellect: Enhance your magical abilities",
            "Shield of Faith: Surround yourself with protective energy",
            "Blink: Teleport yourself a short distance",
        ],
    },
    TargetingTypeDefinition {
        kind: TargetingKind::Smart,
        name: "Smart Targeting",
        description: "Automatically selects targets based on parameters",
        tooltip: "Your spell intelligently chooses optimal targets based on the situation",
        action_point_modifier: 2,
        visualization_tip: "This spell selects targets based on the parameters you set.",
        examples: &[
            "Circle of Healing: Automatically heals the most injured allies",
            "Chain Lightning (Smart): Seeks optimal targets for maximum chain effect",
            "Magic Missiles (Homing): Missiles automatically find vulnerable targets",
        ],
    },
];

impl TargetingKind {
    /// All targeting types in catalog order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Single,
            Self::Multi,
            Self::Area,
            Self::Chain,
            Self::Cone,
            Self::Line,
            Self::SelfOnly,
            Self::Smart,
        ]
    }

    /// Parse a catalog id. Ids are lowercase and matched exactly.
    pub fn parse(id: &str) -> Option<Self> {
        match id {
            "single" => Some(Self::Single),
            "multi" => Some(Self::Multi),
            "area" => Some(Self::Area),
            "chain" => Some(Self::Chain),
            "cone" => Some(Self::Cone),
            "line" => Some(Self::Line),
            "self" => Some(Self::SelfOnly),
            "smart" => Some(Self::Smart),
            _ => None,
        }
    }

    /// Catalog id.
    pub fn id(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Multi => "multi",
            Self::Area => "area",
            Self::Chain => "chain",
            Self::Cone => "cone",
            Self::Line => "line",
            Self::SelfOnly => "self",
            Self::Smart => "smart",
        }
    }

    /// The catalog entry for this targeting type.
    pub fn definition(self) -> &'static TargetingTypeDefinition {
        &TARGETING_TYPES[self.index()]
    }

    /// Whether the type can affect more than one creature.
    pub fn is_multi_target(self) -> bool {
        matches!(
            self,
            Self::Multi | Self::Area | Self::Chain | Self::Cone | Self::Line
        )
    }

    /// The shape implied by the targeting type itself, if any.
    pub fn implied_shape(self) -> Option<ShapeKind> {
        match self {
            Self::Cone => Some(ShapeKind::Cone),
            Self::Line => Some(ShapeKind::Line),
            _ => None,
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Single => 0,
            Self::Multi => 1,
            Self::Area => 2,
            Self::Chain => 3,
            Self::Cone => 4,
            Self::Line => 5,
            Self::SelfOnly => 6,
            Self::Smart => 7,
        }
    }
}

impl FromStr for TargetingKind {
    type Err = TargetingError;

    fn from_str(s: &str) -> TargetingResult<Self> {
        Self::parse(s).ok_or_else(|| TargetingError::UnknownTargetingType(s.to_string()))
    }
}

impl std::fmt::Display for TargetingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Look up a targeting type by catalog id.
pub fn get_targeting_type_by_id(id: &str) -> Option<&'static TargetingTypeDefinition> {
    TargetingKind::parse(id).map(TargetingKind::definition)
}

/// Action point adjustment for a targeting type; unknown ids cost nothing extra.
pub fn action_point_modifier(id: &str) -> i8 {
    get_targeting_type_by_id(id).map_or(0, |def| def.action_point_modifier)
}

/// Whether the targeting type `id` can affect more than one creature.
pub fn is_multi_target(id: &str) -> bool {
    TargetingKind::parse(id).is_some_and(TargetingKind::is_multi_target)
}
