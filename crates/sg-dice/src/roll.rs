//! Dice roll results and plain sampling.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::die::Die;
use crate::notation::{DiceExpression, Sign};

/// The result of rolling a single die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DieResult {
    /// The type of die that was rolled.
    pub die: Die,
    /// Whether the die counts toward or against the total.
    pub sign: Sign,
    /// The face rolled (1 to die.sides()).
    pub value: u32,
    /// True when this die was added by an explosion.
    pub exploded: bool,
}

impl DieResult {
    /// The die's signed contribution to the total.
    pub fn signed_value(&self) -> i64 {
        self.sign.apply(i64::from(self.value))
    }

    /// Returns true if the die shows its highest face.
    pub fn is_max(&self) -> bool {
        self.value == self.die.sides()
    }
}

/// The result of rolling a whole expression once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollResult {
    /// Individual die results, in roll order.
    pub dice: Vec<DieResult>,
    /// Sum of the expression's flat modifiers.
    pub modifier: i64,
}

impl RollResult {
    /// Signed sum of all dice, without the modifier.
    pub fn dice_total(&self) -> i64 {
        self.dice.iter().map(DieResult::signed_value).sum()
    }

    /// Signed sum of all dice plus the modifier.
    pub fn total(&self) -> i64 {
        self.dice_total() + self.modifier
    }

    /// Number of dice rolled, explosions included.
    pub fn count(&self) -> usize {
        self.dice.len()
    }

    /// Number of dice added by explosions.
    pub fn explosions(&self) -> usize {
        self.dice.iter().filter(|d| d.exploded).count()
    }
}

impl std::fmt::Display for RollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self
            .dice
            .iter()
            .map(|d| match (d.sign, d.exploded) {
                (Sign::Minus, _) => format!("-{}", d.value),
                (Sign::Plus, true) => format!("{}!", d.value),
                (Sign::Plus, false) => d.value.to_string(),
            })
            .collect();
        write!(f, "[{}]", values.join(", "))?;
        match self.modifier {
            0 => {}
            m if m > 0 => write!(f, " + {m}")?,
            m => write!(f, " - {}", m.unsigned_abs())?,
        }
        write!(f, " = {}", self.total())
    }
}

impl DiceExpression {
    /// Roll every dice term once using the given RNG.
    pub fn roll<R: Rng>(&self, rng: &mut R) -> RollResult {
        let dice = self
            .dice_terms()
            .flat_map(|term| (0..term.count()).map(move |_| *term))
            .map(|term| DieResult {
                die: term.die(),
                sign: term.sign(),
                value: term.die().roll(rng),
                exploded: false,
            })
            .collect();
        let result = RollResult {
            dice,
            modifier: self.modifier(),
        };
        tracing::trace!(notation = %self, total = result.total(), "rolled");
        result
    }

    /// Roll with exploding dice.
    ///
    /// Each die that shows its highest face is followed by another die of the
    /// same type, repeating until a lower face appears or `limit` extra dice
    /// have been added for that die.
    pub fn roll_exploding<R: Rng>(&self, limit: u32, rng: &mut R) -> RollResult {
        let mut dice = Vec::new();
        for term in self.dice_terms() {
            for _ in 0..term.count() {
                let mut current = DieResult {
                    die: term.die(),
                    sign: term.sign(),
                    value: term.die().roll(rng),
                    exploded: false,
                };
                dice.push(current);

                let mut extra = 0;
                while current.is_max() && extra < limit {
                    current = DieResult {
                        value: term.die().roll(rng),
                        exploded: true,
                        ..current
                    };
                    dice.push(current);
                    extra += 1;
                }
                if extra == limit && current.is_max() {
                    tracing::debug!(die = %term.die(), limit, "explosion limit reached");
                }
            }
        }
        RollResult {
            dice,
            modifier: self.modifier(),
        }
    }
}
