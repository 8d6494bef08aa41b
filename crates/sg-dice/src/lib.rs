//! Dice notation for Spellgrid.
//!
//! Parses formulas such as `3d6+2` or `2d6+1d4-1` into a [`DiceExpression`],
//! computes exact minimum, maximum and average totals, and samples rolls from
//! a caller-supplied random source. On top of the plain roll sit advantage,
//! disadvantage, exploding and critical [roll modes](RollMode), critical
//! damage previews, exact [distributions](Distribution), and helpers to
//! [`compare`] expressions or [`suggest`] one for a target average. Spell
//! effects get [chain falloff](chained_damage) and
//! [damage or healing over time](dot_damage) schedules.
//!
//! ```
//! use sg_dice::DiceExpression;
//!
//! let expr: DiceExpression = "2d6+1".parse().unwrap();
//! assert_eq!(expr.min(), 3);
//! assert_eq!(expr.max(), 13);
//! assert_eq!(expr.average(), 8.0);
//! ```

pub mod analysis;
pub mod chain;
pub mod critical;
pub mod die;
pub mod distribution;
pub mod error;
mod lexer;
pub mod mode;
pub mod notation;
pub mod over_time;
pub mod roll;

pub use analysis::{Comparison, SuggestOptions, Suggestion, Variance, compare, suggest};
pub use chain::{ChainLink, ChainOptions, ChainedDamage, Falloff, chained_damage};
pub use critical::{CriticalDamage, CriticalOptions, critical_damage};
pub use die::Die;
pub use distribution::Distribution;
pub use error::{DiceResult, NotationError};
pub use mode::{Multiplier, RollMode, RollOptions, RollOutcome};
pub use notation::{DiceExpression, DiceTerm, Sign, Term};
pub use over_time::{OverTimeEffect, OverTimeKind, OverTimeOptions, Tick, TickScaling, dot_damage};
pub use roll::{DieResult, RollResult};

use rand::Rng;

/// Returns true if `notation` is well-formed dice notation.
pub fn is_valid_notation(notation: &str) -> bool {
    DiceExpression::parse(notation).is_ok()
}

/// Lowest possible total of `notation`.
///
/// Invalid notation is a caller bug: debug builds panic, release builds
/// return `NaN`. Use [`DiceExpression::parse`] to handle errors.
pub fn min_roll(notation: &str) -> f64 {
    statistic(notation, |e| e.min() as f64)
}

/// Highest possible total of `notation`. See [`min_roll`] for invalid input.
pub fn max_roll(notation: &str) -> f64 {
    statistic(notation, |e| e.max() as f64)
}

/// Exact average total of `notation`. See [`min_roll`] for invalid input.
pub fn average_roll(notation: &str) -> f64 {
    statistic(notation, DiceExpression::average)
}

/// Roll `notation` once. See [`min_roll`] for invalid input.
pub fn roll_notation<R: Rng>(notation: &str, rng: &mut R) -> f64 {
    statistic(notation, |e| e.roll(rng).total() as f64)
}

fn statistic(notation: &str, f: impl FnOnce(&DiceExpression) -> f64) -> f64 {
    match DiceExpression::parse(notation) {
        Ok(expr) => f(&expr),
        Err(err) => {
            if cfg!(debug_assertions) {
                panic!("invalid dice notation {notation:?}: {err}");
            }
            tracing::warn!(notation, %err, "invalid dice notation");
            f64::NAN
        }
    }
}
