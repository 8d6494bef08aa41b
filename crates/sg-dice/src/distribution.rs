//! Exact probability distributions of dice expressions.
//!
//! Built by convolving one uniform die at a time, so the result is exact up to
//! floating-point rounding. Expressions whose totals span more than
//! [`MAX_OUTCOMES`] values are refused.

use crate::notation::{DiceExpression, Sign};

/// Largest number of distinct totals a distribution will hold.
pub const MAX_OUTCOMES: usize = 4096;

/// Probability of each possible total of an expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution {
    lowest: i64,
    probabilities: Vec<f64>,
}

impl Distribution {
    /// Compute the distribution of `expr`, or `None` if it has too many outcomes.
    pub fn of(expr: &DiceExpression) -> Option<Self> {
        let span = usize::try_from(expr.max() - expr.min()).ok()? + 1;
        if span > MAX_OUTCOMES {
            tracing::debug!(notation = %expr, span, "distribution too wide");
            return None;
        }

        let mut probabilities = vec![1.0_f64];
        let mut lowest = expr.modifier();

        for term in expr.dice_terms() {
            let faces = term.die().sides() as usize;
            let p = 1.0 / faces as f64;
            for _ in 0..term.count() {
                let mut next = vec![0.0; probabilities.len() + faces - 1];
                for (i, q) in probabilities.iter().enumerate() {
                    for slot in &mut next[i..i + faces] {
                        *slot += q * p;
                    }
                }
                probabilities = next;
                lowest += match term.sign() {
                    Sign::Plus => 1,
                    Sign::Minus => -i64::from(term.die().sides()),
                };
            }
        }

        Some(Self {
            lowest,
            probabilities,
        })
    }

    /// Smallest total with nonzero probability.
    pub fn min(&self) -> i64 {
        self.lowest
    }

    /// Largest total with nonzero probability.
    pub fn max(&self) -> i64 {
        self.lowest + self.probabilities.len() as i64 - 1
    }

    /// Expected total.
    pub fn mean(&self) -> f64 {
        self.iter().map(|(total, p)| total as f64 * p).sum()
    }

    /// Probability of exactly `total`.
    pub fn probability(&self, total: i64) -> f64 {
        usize::try_from(total - self.lowest)
            .ok()
            .and_then(|i| self.probabilities.get(i))
            .copied()
            .unwrap_or(0.0)
    }

    /// Probability of a total at or above `target`.
    pub fn probability_at_least(&self, target: i64) -> f64 {
        self.iter()
            .filter(|(total, _)| *total >= target)
            .map(|(_, p)| p)
            .sum()
    }

    /// `(total, probability)` pairs in ascending order of total.
    pub fn iter(&self) -> impl Iterator<Item = (i64, f64)> + '_ {
        self.probabilities
            .iter()
            .enumerate()
            .map(|(i, p)| (self.lowest + i as i64, *p))
    }

    /// Number of distinct totals.
    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    /// Always false: every expression has at least one outcome.
    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }
}
