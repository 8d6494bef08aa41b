//! Polyhedral die types.
//!
//! The seven standard dice (d4 through d100) are named; any other face count
//! of two or more is a custom die. Faces below two never form a die.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Largest face count accepted for a single die.
pub const MAX_FACES: u32 = 1_000_000;

/// Face counts of the standard polyhedral set.
pub const STANDARD_FACES: [u32; 7] = [4, 6, 8, 10, 12, 20, 100];

/// A polyhedral die type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Die {
    /// Four-sided die.
    D4,
    /// Six-sided die.
    D6,
    /// Eight-sided die.
    D8,
    /// Ten-sided die.
    D10,
    /// Twelve-sided die.
    D12,
    /// Twenty-sided die.
    D20,
    /// Percentile die (1-100).
    D100,
    /// A die with a non-standard number of sides.
    Custom(u32),
}

impl Die {
    /// Build a die from its face count.
    ///
    /// Returns `None` for fewer than two faces or more than [`MAX_FACES`].
    pub fn from_sides(sides: u32) -> Option<Self> {
        match sides {
            4 => Some(Self::D4),
            6 => Some(Self::D6),
            8 => Some(Self::D8),
            10 => Some(Self::D10),
            12 => Some(Self::D12),
            20 => Some(Self::D20),
            100 => Some(Self::D100),
            n if (2..=MAX_FACES).contains(&n) => Some(Self::Custom(n)),
            _ => None,
        }
    }

    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D20 => 20,
            Self::D100 => 100,
            Self::Custom(n) => n,
        }
    }

    /// Returns true for the named polyhedral dice.
    pub fn is_standard(self) -> bool {
        STANDARD_FACES.contains(&self.sides())
    }

    /// Twice the mean face value, `sides + 1`.
    ///
    /// Kept doubled so a d6 mean of 3.5 stays an exact integer.
    pub fn mean_halves(self) -> i64 {
        i64::from(self.sides()) + 1
    }

    /// Draw one face uniformly from `1..=sides`.
    pub fn roll<R: Rng>(self, rng: &mut R) -> u32 {
        rng.random_range(1..=self.sides().max(1))
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides())
    }
}
