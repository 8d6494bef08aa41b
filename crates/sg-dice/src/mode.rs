//! Roll modes layered on top of plain sampling.
//!
//! - **Advantage / disadvantage**: roll the whole expression twice and keep
//!   the higher / lower total
//! - **Exploding**: a die on its highest face adds another die of its type
//! - **Critical**: any die at or above the critical threshold scales the
//!   total by the critical multiplier

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::notation::{DiceExpression, Sign};
use crate::roll::RollResult;

/// Default cap on extra dice per exploding die.
pub const DEFAULT_EXPLODE_LIMIT: u32 = 1000;

/// How an expression is sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RollMode {
    /// A single plain roll.
    #[default]
    Normal,
    /// Two rolls, keep the higher total.
    Advantage,
    /// Two rolls, keep the lower total.
    Disadvantage,
    /// Maximum faces add further dice.
    Exploding,
    /// Threshold faces multiply the total.
    Critical,
}

impl RollMode {
    /// Parse a roll mode from user input.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "normal" | "plain" => Some(Self::Normal),
            "advantage" | "adv" => Some(Self::Advantage),
            "disadvantage" | "dis" => Some(Self::Disadvantage),
            "exploding" | "explode" => Some(Self::Exploding),
            "critical" | "crit" => Some(Self::Critical),
            _ => None,
        }
    }
}

impl fmt::Display for RollMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Advantage => write!(f, "advantage"),
            Self::Disadvantage => write!(f, "disadvantage"),
            Self::Exploding => write!(f, "exploding"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

/// An integer or half-integer scaling factor such as ×2 or ×1.5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Multiplier {
    halves: u32,
}

impl Multiplier {
    /// The standard critical multiplier, ×2.
    pub const DOUBLE: Self = Self { halves: 4 };

    /// A whole-number multiplier.
    pub fn whole(n: u32) -> Self {
        Self {
            halves: n.saturating_mul(2),
        }
    }

    /// A multiplier expressed in halves: `from_halves(3)` is ×1.5.
    pub fn from_halves(halves: u32) -> Self {
        Self { halves }
    }

    /// Parse `"2"`, `"1.5"`, `"x2"` or `"×2.5"`.
    ///
    /// Only whole and half values are accepted.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s
            .trim()
            .trim_start_matches(['x', 'X', '×'])
            .trim();
        let (whole, frac) = match s.split_once('.') {
            Some((w, f)) => (w, f.trim_end_matches('0')),
            None => (s, ""),
        };
        let whole: u32 = whole.parse().ok()?;
        let half = match frac {
            "" => 0,
            "5" => 1,
            _ => return None,
        };
        Some(Self {
            halves: whole.checked_mul(2)?.checked_add(half)?,
        })
    }

    /// The multiplier as a float.
    pub fn value(self) -> f64 {
        f64::from(self.halves) / 2.0
    }

    /// Scale an integer total. Half-integer multipliers may yield `.5`.
    pub fn apply(self, total: i64) -> f64 {
        (i128::from(total) * i128::from(self.halves)) as f64 / 2.0
    }
}

impl Default for Multiplier {
    fn default() -> Self {
        Self::DOUBLE
    }
}

impl FromStr for Multiplier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid multiplier '{s}' (use whole or .5 values)"))
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.halves % 2 == 0 {
            write!(f, "×{}", self.halves / 2)
        } else {
            write!(f, "×{}.5", self.halves / 2)
        }
    }
}

/// Options for [`DiceExpression::roll_with`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOptions {
    /// The roll mode.
    pub mode: RollMode,
    /// Cap on extra dice per exploding die.
    pub explode_limit: u32,
    /// Face at or above which a die counts as critical (default: its highest face).
    pub critical_threshold: Option<u32>,
    /// Scaling applied to a critical total.
    pub critical_multiplier: Multiplier,
}

impl Default for RollOptions {
    fn default() -> Self {
        Self {
            mode: RollMode::Normal,
            explode_limit: DEFAULT_EXPLODE_LIMIT,
            critical_threshold: None,
            critical_multiplier: Multiplier::DOUBLE,
        }
    }
}

impl RollOptions {
    /// Set the roll mode.
    pub fn with_mode(mut self, mode: RollMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the explosion cap.
    pub fn with_explode_limit(mut self, limit: u32) -> Self {
        self.explode_limit = limit;
        self
    }

    /// Set a fixed critical threshold.
    pub fn with_critical_threshold(mut self, threshold: u32) -> Self {
        self.critical_threshold = Some(threshold);
        self
    }

    /// Set the critical multiplier.
    pub fn with_critical_multiplier(mut self, multiplier: Multiplier) -> Self {
        self.critical_multiplier = multiplier;
        self
    }
}

/// The outcome of a moded roll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollOutcome {
    /// The mode the roll was made with.
    pub mode: RollMode,
    /// Every roll made: two for advantage/disadvantage, otherwise one.
    pub rolls: Vec<RollResult>,
    /// Index into `rolls` of the roll that counts.
    pub selected: usize,
    /// Whether the critical multiplier was applied.
    pub critical: bool,
    /// The final total, after any multiplier.
    pub total: f64,
}

impl RollOutcome {
    fn single(mode: RollMode, roll: RollResult) -> Self {
        let total = roll.total() as f64;
        Self {
            mode,
            rolls: vec![roll],
            selected: 0,
            critical: false,
            total,
        }
    }

    fn pick(mode: RollMode, first: RollResult, second: RollResult, keep_higher: bool) -> Self {
        let take_first = if keep_higher {
            first.total() >= second.total()
        } else {
            first.total() <= second.total()
        };
        let selected = if take_first { 0 } else { 1 };
        let rolls = vec![first, second];
        let total = rolls[selected].total() as f64;
        Self {
            mode,
            rolls,
            selected,
            critical: false,
            total,
        }
    }

    /// The roll that counts.
    pub fn kept(&self) -> &RollResult {
        &self.rolls[self.selected]
    }
}

impl DiceExpression {
    /// Roll according to `options`.
    pub fn roll_with<R: Rng>(&self, options: &RollOptions, rng: &mut R) -> RollOutcome {
        let mode = options.mode;
        match mode {
            RollMode::Normal => RollOutcome::single(mode, self.roll(rng)),
            RollMode::Advantage => {
                let first = self.roll(rng);
                let second = self.roll(rng);
                RollOutcome::pick(mode, first, second, true)
            }
            RollMode::Disadvantage => {
                let first = self.roll(rng);
                let second = self.roll(rng);
                RollOutcome::pick(mode, first, second, false)
            }
            RollMode::Exploding => {
                RollOutcome::single(mode, self.roll_exploding(options.explode_limit, rng))
            }
            RollMode::Critical => {
                let roll = self.roll(rng);
                let critical = roll.dice.iter().any(|d| {
                    d.sign == Sign::Plus
                        && d.value >= options.critical_threshold.unwrap_or(d.die.sides())
                });
                let mut outcome = RollOutcome::single(mode, roll);
                if critical {
                    outcome.critical = true;
                    outcome.total = options.critical_multiplier.apply(outcome.kept().total());
                    tracing::debug!(
                        notation = %self,
                        multiplier = %options.critical_multiplier,
                        total = outcome.total,
                        "critical roll"
                    );
                }
                outcome
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn expr(s: &str) -> DiceExpression {
        DiceExpression::parse(s).unwrap()
    }

    #[test]
    fn mode_parse() {
        assert_eq!(RollMode::parse("ADV"), Some(RollMode::Advantage));
        assert_eq!(RollMode::parse("explode"), Some(RollMode::Exploding));
        assert_eq!(RollMode::parse("crit"), Some(RollMode::Critical));
        assert_eq!(RollMode::parse("sideways"), None);
    }

    #[test]
    fn multiplier_parse_and_display() {
        assert_eq!(Multiplier::parse("2"), Some(Multiplier::DOUBLE));
        assert_eq!(Multiplier::parse("x1.5"), Some(Multiplier::from_halves(3)));
        assert_eq!(Multiplier::parse("2.50"), Some(Multiplier::from_halves(5)));
        assert_eq!(Multiplier::parse("1.25"), None);
        assert_eq!(Multiplier::parse("two"), None);
        assert_eq!(Multiplier::whole(3).to_string(), "×3");
        assert_eq!(Multiplier::from_halves(3).to_string(), "×1.5");
    }

    #[test]
    fn multiplier_apply_keeps_halves() {
        assert!((Multiplier::from_halves(3).apply(7) - 10.5).abs() < f64::EPSILON);
        assert!((Multiplier::DOUBLE.apply(-4) + 8.0).abs() < f64::EPSILON);
    }

    #[test]
    fn options_builder_chain() {
        let opts = RollOptions::default()
            .with_mode(RollMode::Critical)
            .with_critical_threshold(19)
            .with_critical_multiplier(Multiplier::whole(3))
            .with_explode_limit(10);
        assert_eq!(opts.mode, RollMode::Critical);
        assert_eq!(opts.critical_threshold, Some(19));
        assert_eq!(opts.critical_multiplier, Multiplier::whole(3));
        assert_eq!(opts.explode_limit, 10);
    }

    #[test]
    fn advantage_keeps_higher() {
        let mut rng = StdRng::seed_from_u64(3);
        let options = RollOptions::default().with_mode(RollMode::Advantage);
        for _ in 0..200 {
            let outcome = expr("1d20").roll_with(&options, &mut rng);
            assert_eq!(outcome.rolls.len(), 2);
            let best = outcome.rolls.iter().map(RollResult::total).max().unwrap();
            assert!((outcome.total - best as f64).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn disadvantage_keeps_lower() {
        let mut rng = StdRng::seed_from_u64(4);
        let options = RollOptions::default().with_mode(RollMode::Disadvantage);
        for _ in 0..200 {
            let outcome = expr("1d20+2").roll_with(&options, &mut rng);
            let worst = outcome.rolls.iter().map(RollResult::total).min().unwrap();
            assert_eq!(outcome.kept().total(), worst);
        }
    }

    #[test]
    fn critical_threshold_one_always_crits() {
        let mut rng = StdRng::seed_from_u64(8);
        let options = RollOptions::default()
            .with_mode(RollMode::Critical)
            .with_critical_threshold(1)
            .with_critical_multiplier(Multiplier::from_halves(3));
        let outcome = expr("2d6+1").roll_with(&options, &mut rng);
        assert!(outcome.critical);
        let expected = outcome.kept().total() as f64 * 1.5;
        assert!((outcome.total - expected).abs() < f64::EPSILON);
    }

    #[test]
    fn critical_never_fires_above_the_die() {
        let mut rng = StdRng::seed_from_u64(9);
        let options = RollOptions::default()
            .with_mode(RollMode::Critical)
            .with_critical_threshold(7);
        for _ in 0..100 {
            let outcome = expr("3d6").roll_with(&options, &mut rng);
            assert!(!outcome.critical);
            assert!((outcome.total - outcome.kept().total() as f64).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn exploding_mode_respects_limit() {
        let mut rng = StdRng::seed_from_u64(10);
        let options = RollOptions::default()
            .with_mode(RollMode::Exploding)
            .with_explode_limit(2);
        for _ in 0..100 {
            let outcome = expr("1d2").roll_with(&options, &mut rng);
            assert!(outcome.kept().count() <= 3);
        }
    }

    #[test]
    fn huge_critical_multiplier_does_not_wrap() {
        let mut rng = StdRng::seed_from_u64(4);
        let options = RollOptions::default()
            .with_mode(RollMode::Critical)
            .with_critical_threshold(1)
            .with_critical_multiplier(Multiplier::parse("2000000000").unwrap());
        let outcome = expr("10000d1000000").roll_with(&options, &mut rng);
        assert!(outcome.critical);
        let kept = outcome.kept().total() as f64;
        assert!(outcome.total > i64::MAX as f64);
        assert!((outcome.total / kept - 2e9).abs() < 1e-3);
    }

    #[test]
    fn multiplier_apply_at_the_extremes() {
        let top = Multiplier::from_halves(u32::MAX);
        assert!(top.apply(i64::MAX).is_finite());
        assert!(top.apply(i64::MIN) < 0.0);
    }
}
