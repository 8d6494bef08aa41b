//! Damage falloff along a chain of targets.
//!
//! A chain effect hits its first target with the full expression and each
//! following target with a reduced one. The reduction is applied term by term,
//! so `4d6+4` with 25% falloff becomes `3d6+3`, then `3d6+2`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::notation::{DiceExpression, DiceTerm, Term};

/// Largest number of targets a chain is evaluated for.
pub const MAX_CHAIN_TARGETS: u32 = 1000;

/// How damage shrinks from one target to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "rate", rename_all = "lowercase")]
pub enum Falloff {
    /// Remove this percentage of each dice count (rounded down) and of each
    /// flat modifier. Rates above 100 count as 100.
    Percentage(u32),
    /// Remove this many dice from each dice term.
    Fixed(u32),
    /// Remove one die from each dice term.
    Dice,
}

impl Default for Falloff {
    fn default() -> Self {
        Self::Percentage(25)
    }
}

impl Falloff {
    /// Build a falloff from its name and rate. The rate is ignored for `dice`.
    pub fn from_parts(kind: &str, rate: u32) -> Option<Self> {
        match kind.to_ascii_lowercase().as_str() {
            "percentage" | "percent" | "%" => Some(Self::Percentage(rate)),
            "fixed" => Some(Self::Fixed(rate)),
            "dice" => Some(Self::Dice),
            _ => None,
        }
    }

    fn reduce_count(self, count: u32) -> u32 {
        let removed = match self {
            Self::Percentage(rate) => {
                let rate = u64::from(rate.min(100));
                // At most `count`, so it fits back into u32.
                (u64::from(count) * rate / 100) as u32
            }
            Self::Fixed(n) => n,
            Self::Dice => 1,
        };
        count.saturating_sub(removed).max(1)
    }

    fn reduce_flat(self, value: i64) -> i64 {
        match self {
            Self::Percentage(rate) => {
                let kept = 100 - i64::from(rate.min(100));
                (value * kept).div_euclid(100)
            }
            Self::Fixed(_) | Self::Dice => value,
        }
    }

    /// Reduce every term of `expr` once.
    pub fn apply(self, expr: &DiceExpression) -> DiceExpression {
        let terms = expr
            .terms()
            .iter()
            .map(|term| match term {
                Term::Dice(d) => {
                    let count = self.reduce_count(d.count());
                    Term::Dice(DiceTerm::new(d.sign(), count, d.die()).unwrap_or(*d))
                }
                Term::Flat(v) => Term::Flat(self.reduce_flat(*v)),
            })
            .filter(|term| !matches!(term, Term::Flat(0)))
            .collect();
        DiceExpression::from_terms(terms).unwrap_or_else(|_| expr.clone())
    }
}

impl fmt::Display for Falloff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Percentage(rate) => write!(f, "-{rate}% per target"),
            Self::Fixed(n) => write!(f, "-{n} dice per target"),
            Self::Dice => f.write_str("-1 die per target"),
        }
    }
}

/// Options for [`chained_damage`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChainOptions {
    /// Number of targets hit, the first one included.
    pub targets: u32,
    /// Reduction between consecutive targets.
    pub falloff: Falloff,
    /// Stop reducing once the next target's average would drop below this.
    pub minimum_damage: Option<f64>,
}

impl Default for ChainOptions {
    fn default() -> Self {
        Self {
            targets: 3,
            falloff: Falloff::default(),
            minimum_damage: None,
        }
    }
}

impl ChainOptions {
    /// Set the number of targets (capped at [`MAX_CHAIN_TARGETS`]).
    pub fn with_targets(mut self, targets: u32) -> Self {
        self.targets = targets;
        self
    }

    /// Set the falloff rule.
    pub fn with_falloff(mut self, falloff: Falloff) -> Self {
        self.falloff = falloff;
        self
    }

    /// Keep every target's average at or above `minimum`.
    pub fn with_minimum_damage(mut self, minimum: f64) -> Self {
        self.minimum_damage = Some(minimum);
        self
    }
}

/// The expression that hits one target in the chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainLink {
    /// Position in the chain, starting at 1.
    pub target: u32,
    /// Damage dealt to this target.
    pub expression: DiceExpression,
    /// Smallest possible damage.
    pub min: i64,
    /// Largest possible damage.
    pub max: i64,
    /// Expected damage.
    pub average: f64,
}

/// Per-target damage of a chain effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainedDamage {
    /// One entry per target, in hit order.
    pub links: Vec<ChainLink>,
}

impl ChainedDamage {
    /// Expected damage summed over every target.
    pub fn total_average(&self) -> f64 {
        self.links.iter().map(|l| l.average).sum()
    }
}

/// Work out the damage each target of a chain takes.
///
/// A chain of zero targets is empty. Dice terms never drop below one die, so a
/// long chain settles on its smallest expression.
pub fn chained_damage(base: &DiceExpression, options: &ChainOptions) -> ChainedDamage {
    let targets = options.targets.min(MAX_CHAIN_TARGETS);
    let mut links = Vec::with_capacity(targets as usize);
    let mut current = base.clone();

    for target in 1..=targets {
        links.push(ChainLink {
            target,
            min: current.min(),
            max: current.max(),
            average: current.average(),
            expression: current.clone(),
        });

        let next = options.falloff.apply(&current);
        let below_minimum = options
            .minimum_damage
            .is_some_and(|minimum| next.average() < minimum);
        if below_minimum {
            tracing::trace!(target, notation = %current, "chain damage held at minimum");
        } else {
            current = next;
        }
    }

    tracing::debug!(
        notation = %base,
        targets,
        falloff = %options.falloff,
        "chained damage"
    );
    ChainedDamage { links }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expr(s: &str) -> DiceExpression {
        DiceExpression::parse(s).unwrap()
    }

    fn notations(chain: &ChainedDamage) -> Vec<String> {
        chain
            .links
            .iter()
            .map(|l| l.expression.to_string())
            .collect()
    }

    #[test]
    fn percentage_falloff_reduces_dice_and_modifier() {
        let chain = chained_damage(&expr("8d6+4"), &ChainOptions::default());
        assert_eq!(notations(&chain), ["8d6+4", "6d6+3", "5d6+2"]);
        assert_eq!(chain.links[1].min, 9);
        assert_eq!(chain.links[1].max, 39);
        assert!((chain.total_average() - (32.0 + 24.0 + 19.5)).abs() < 1e-9);
    }

    #[test]
    fn small_counts_keep_one_die() {
        let options = ChainOptions::default()
            .with_targets(4)
            .with_falloff(Falloff::Percentage(75));
        let chain = chained_damage(&expr("2d8"), &options);
        assert_eq!(notations(&chain), ["2d8", "1d8", "1d8", "1d8"]);
    }

    #[test]
    fn fixed_and_dice_falloff_leave_modifiers() {
        let options = ChainOptions::default().with_falloff(Falloff::Fixed(2));
        let chain = chained_damage(&expr("5d10+3"), &options);
        assert_eq!(notations(&chain), ["5d10+3", "3d10+3", "1d10+3"]);

        let options = ChainOptions::default().with_falloff(Falloff::Dice);
        let chain = chained_damage(&expr("3d6-1"), &options);
        assert_eq!(notations(&chain), ["3d6-1", "2d6-1", "1d6-1"]);
    }

    #[test]
    fn negative_modifiers_round_down() {
        assert_eq!(Falloff::Percentage(25).reduce_flat(-5), -4);
        assert_eq!(Falloff::Percentage(25).reduce_flat(5), 3);
        assert_eq!(Falloff::Percentage(250).reduce_flat(7), 0);
    }

    #[test]
    fn every_term_of_a_mixed_expression_falls_off() {
        let options = ChainOptions::default().with_targets(2).with_falloff(Falloff::Dice);
        let chain = chained_damage(&expr("4d6+2d8-1d4"), &options);
        assert_eq!(chain.links[1].expression.to_string(), "3d6+1d8-1d4");
    }

    #[test]
    fn minimum_damage_holds_the_chain() {
        let options = ChainOptions::default()
            .with_targets(4)
            .with_falloff(Falloff::Dice)
            .with_minimum_damage(10.0);
        let chain = chained_damage(&expr("4d6"), &options);
        assert_eq!(notations(&chain), ["4d6", "3d6", "3d6", "3d6"]);
    }

    #[test]
    fn empty_and_capped_chains() {
        let options = ChainOptions::default().with_targets(0);
        assert!(chained_damage(&expr("1d6"), &options).links.is_empty());

        let options = ChainOptions::default().with_targets(u32::MAX);
        let chain = chained_damage(&expr("1d6"), &options);
        assert_eq!(chain.links.len(), MAX_CHAIN_TARGETS as usize);
    }

    #[test]
    fn falloff_from_parts() {
        assert_eq!(Falloff::from_parts("Percentage", 10), Some(Falloff::Percentage(10)));
        assert_eq!(Falloff::from_parts("fixed", 2), Some(Falloff::Fixed(2)));
        assert_eq!(Falloff::from_parts("dice", 99), Some(Falloff::Dice));
        assert_eq!(Falloff::from_parts("halving", 50), None);
    }
}
