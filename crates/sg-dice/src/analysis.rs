//! Comparing expressions and suggesting notation for a target average.

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::die::{Die, MAX_FACES};
use crate::notation::{DiceExpression, DiceTerm, MAX_DICE_PER_TERM, Sign, Term};

/// Largest target magnitude [`suggest`] searches for: the top of a single
/// full-size dice term.
pub const MAX_SUGGEST_TARGET: f64 = MAX_DICE_PER_TERM as f64 * MAX_FACES as f64;

/// Statistical differences between two expressions, `other - base`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// Difference of averages.
    pub average_difference: f64,
    /// Ratio of averages, if the base average is nonzero.
    pub average_ratio: Option<f64>,
    /// Difference of minimum totals.
    pub min_difference: i64,
    /// Difference of maximum totals.
    pub max_difference: i64,
    /// Difference of `max - min` spreads.
    pub range_difference: i64,
    /// `other` is at least as good at the bottom and better on average and at the top.
    pub strictly_better: bool,
    /// `other` is at most as good at the bottom and worse on average and at the top.
    pub strictly_worse: bool,
}

/// Compare `other` against `base`.
pub fn compare(base: &DiceExpression, other: &DiceExpression) -> Comparison {
    let (avg_a, avg_b) = (base.average_halves(), other.average_halves());
    let (min_a, min_b) = (base.min(), other.min());
    let (max_a, max_b) = (base.max(), other.max());

    Comparison {
        average_difference: (avg_b - avg_a) as f64 / 2.0,
        average_ratio: (avg_a != 0).then(|| avg_b as f64 / avg_a as f64),
        min_difference: min_b - min_a,
        max_difference: max_b - max_a,
        range_difference: (max_b - min_b) - (max_a - min_a),
        strictly_better: min_b >= min_a && avg_b > avg_a && max_b > max_a,
        strictly_worse: min_b <= min_a && avg_b < avg_a && max_b < max_a,
    }
}

/// How swingy a suggested expression should be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variance {
    /// Many small dice.
    Low,
    /// A few mid-sized dice.
    #[default]
    Medium,
    /// One to three large dice.
    High,
}

impl Variance {
    /// Parse `low`, `medium` or `high` (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" | "med" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    /// Dice considered for this variance.
    pub fn dice(self) -> [Die; 3] {
        match self {
            Self::Low => [Die::D4, Die::D6, Die::D8],
            Self::Medium => [Die::D6, Die::D8, Die::D10],
            Self::High => [Die::D10, Die::D12, Die::D20],
        }
    }

    /// Dice counts considered for this variance.
    pub fn counts(self) -> RangeInclusive<u32> {
        match self {
            Self::Low => 3..=6,
            Self::Medium => 2..=4,
            Self::High => 1..=3,
        }
    }
}

impl fmt::Display for Variance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        })
    }
}

/// Options for [`suggest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestOptions {
    /// Preferred spread.
    pub variance: Variance,
    /// Upper bound on the number of dice.
    pub max_dice: u32,
    /// Whether a flat modifier may be added.
    pub allow_modifier: bool,
}

impl Default for SuggestOptions {
    fn default() -> Self {
        Self {
            variance: Variance::Medium,
            max_dice: 10,
            allow_modifier: true,
        }
    }
}

impl SuggestOptions {
    /// Set the variance preference.
    pub fn with_variance(mut self, variance: Variance) -> Self {
        self.variance = variance;
        self
    }

    /// Set the maximum number of dice.
    pub fn with_max_dice(mut self, max_dice: u32) -> Self {
        self.max_dice = max_dice;
        self
    }

    /// Forbid flat modifiers.
    pub fn without_modifier(mut self) -> Self {
        self.allow_modifier = false;
        self
    }
}

/// A suggested expression and its exact average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The suggested expression.
    pub expression: DiceExpression,
    /// Its average.
    pub average: f64,
}

/// Find the `NdM±K` closest to `target` on average.
///
/// Ties go to the candidate with the smaller modifier, then to the earlier
/// candidate (smaller die, then fewer dice). Returns `None` for a non-finite
/// target, one beyond [`MAX_SUGGEST_TARGET`] in either direction, or when no
/// candidate fits within `max_dice`.
pub fn suggest(target: f64, options: &SuggestOptions) -> Option<Suggestion> {
    if !target.is_finite() || target.abs() > MAX_SUGGEST_TARGET {
        tracing::debug!(target, "no suggestion for out-of-range target");
        return None;
    }

    let mut best: Option<(f64, i64, DiceExpression)> = None;
    for die in options.variance.dice() {
        let upper = (*options.variance.counts().end()).min(options.max_dice);
        for count in *options.variance.counts().start()..=upper {
            let Some(term) = DiceTerm::new(Sign::Plus, count, die) else {
                continue;
            };
            let base = f64::from(count) * die.mean_halves() as f64 / 2.0;
            let modifier = if options.allow_modifier {
                (target - base).round() as i64
            } else {
                0
            };
            let distance = (target - (base + modifier as f64)).abs();

            let better = match &best {
                None => true,
                Some((d, m, _)) => {
                    distance < *d || (distance == *d && modifier.unsigned_abs() < m.unsigned_abs())
                }
            };
            if better {
                let mut terms = vec![Term::Dice(term)];
                if modifier != 0 {
                    terms.push(Term::Flat(modifier));
                }
                if let Ok(expression) = DiceExpression::from_terms(terms) {
                    best = Some((distance, modifier, expression));
                }
            }
        }
    }

    best.map(|(_, _, expression)| {
        tracing::debug!(target, notation = %expression, "suggested notation");
        Suggestion {
            average: expression.average(),
            expression,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expr(s: &str) -> DiceExpression {
        DiceExpression::parse(s).unwrap()
    }

    #[test]
    fn compare_strictly_better() {
        let c = compare(&expr("1d6"), &expr("1d8+1"));
        assert!((c.average_difference - 2.0).abs() < f64::EPSILON);
        assert_eq!(c.min_difference, 1);
        assert_eq!(c.max_difference, 3);
        assert_eq!(c.range_difference, 2);
        assert!(c.strictly_better);
        assert!(!c.strictly_worse);
    }

    #[test]
    fn compare_mixed_tradeoff() {
        // Same average, wider spread.
        let c = compare(&expr("2d6"), &expr("1d13"));
        assert_eq!(c.average_difference, 0.0);
        assert_eq!(c.average_ratio, Some(1.0));
        assert!(!c.strictly_better);
        assert!(!c.strictly_worse);
    }

    #[test]
    fn compare_zero_base_average_has_no_ratio() {
        let c = compare(&expr("1d5-3"), &expr("1d6"));
        assert_eq!(c.average_ratio, None);
    }

    #[test]
    fn compare_is_antisymmetric() {
        let (a, b) = (expr("2d8+2"), expr("3d6"));
        let ab = compare(&a, &b);
        let ba = compare(&b, &a);
        assert_eq!(ab.average_difference, -ba.average_difference);
        assert_eq!(ab.min_difference, -ba.min_difference);
        assert_eq!(ab.strictly_better, ba.strictly_worse);
    }

    #[test]
    fn variance_parse() {
        assert_eq!(Variance::parse("LOW"), Some(Variance::Low));
        assert_eq!(Variance::parse("medium"), Some(Variance::Medium));
        assert_eq!(Variance::parse("high"), Some(Variance::High));
        assert_eq!(Variance::parse("extreme"), None);
    }

    #[test]
    fn suggest_exact_without_modifier() {
        let s = suggest(7.0, &SuggestOptions::default()).unwrap();
        assert_eq!(s.expression.to_string(), "2d6");
        assert_eq!(s.average, 7.0);
    }

    #[test]
    fn suggest_uses_modifier_when_needed() {
        let s = suggest(20.0, &SuggestOptions::default()).unwrap();
        assert!((s.average - 20.0).abs() <= 0.5);
        assert!(s.expression.dice_count() >= 2 && s.expression.dice_count() <= 4);
    }

    #[test]
    fn suggest_respects_variance_dice() {
        let s = suggest(10.5, &SuggestOptions::default().with_variance(Variance::High)).unwrap();
        assert_eq!(s.expression.to_string(), "1d20");

        let s = suggest(10.0, &SuggestOptions::default().with_variance(Variance::Low)).unwrap();
        let die = s.expression.dice_terms().next().unwrap().die();
        assert!([Die::D4, Die::D6, Die::D8].contains(&die));
    }

    #[test]
    fn suggest_without_modifier_is_pure_dice() {
        let options = SuggestOptions::default().without_modifier();
        let s = suggest(12.0, &options).unwrap();
        assert_eq!(s.expression.modifier(), 0);
    }

    #[test]
    fn suggest_rejects_nonsense() {
        assert!(suggest(f64::NAN, &SuggestOptions::default()).is_none());
        assert!(suggest(f64::INFINITY, &SuggestOptions::default()).is_none());
        let options = SuggestOptions::default().with_max_dice(1);
        assert!(suggest(7.0, &options).is_none());
    }

    #[test]
    fn suggest_rejects_huge_targets() {
        let options = SuggestOptions::default();
        assert!(suggest(1e19, &options).is_none());
        assert!(suggest(-1e300, &options).is_none());
        assert!(suggest(MAX_SUGGEST_TARGET * 2.0, &options).is_none());
    }

    #[test]
    fn suggest_at_the_bound_uses_a_large_modifier() {
        let s = suggest(-MAX_SUGGEST_TARGET, &SuggestOptions::default()).unwrap();
        assert!((s.average + MAX_SUGGEST_TARGET).abs() <= 0.5);
        assert!(s.expression.modifier() < 0);
    }
}
