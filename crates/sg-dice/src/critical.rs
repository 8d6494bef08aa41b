//! Critical hit damage previews.

use serde::{Deserialize, Serialize};

use crate::notation::{DiceExpression, DiceTerm, MAX_DICE_PER_TERM, Term};
use crate::mode::Multiplier;

/// Default cap on a scaled dice term in dice-only mode.
pub const DEFAULT_CRITICAL_MAX_DICE: u32 = 20;

/// How a critical hit changes a damage expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriticalOptions {
    /// Scaling applied on a critical hit.
    pub multiplier: Multiplier,
    /// Scale only the number of dice, leaving flat modifiers untouched.
    pub dice_only: bool,
    /// Extra dice added on a critical hit.
    pub extra_dice: Option<DiceExpression>,
    /// Most dice a scaled term may hold in dice-only mode.
    pub max_dice: u32,
}

impl Default for CriticalOptions {
    fn default() -> Self {
        Self {
            multiplier: Multiplier::default(),
            dice_only: false,
            extra_dice: None,
            max_dice: DEFAULT_CRITICAL_MAX_DICE,
        }
    }
}

impl CriticalOptions {
    /// Set the multiplier.
    pub fn with_multiplier(mut self, multiplier: Multiplier) -> Self {
        self.multiplier = multiplier;
        self
    }

    /// Scale dice counts instead of the whole total.
    pub fn dice_only(mut self) -> Self {
        self.dice_only = true;
        self
    }

    /// Cap scaled dice terms at `max_dice` (at least one die).
    pub fn with_max_dice(mut self, max_dice: u32) -> Self {
        self.max_dice = max_dice;
        self
    }

    /// Add dice on a critical hit.
    pub fn with_extra_dice(mut self, extra: DiceExpression) -> Self {
        self.extra_dice = Some(extra);
        self
    }
}

/// Normal versus critical expected damage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriticalDamage {
    /// Human-readable critical formula.
    pub notation: String,
    /// Expected damage of a normal hit.
    pub normal_average: f64,
    /// Expected damage of a critical hit.
    pub critical_average: f64,
}

impl CriticalDamage {
    /// Extra expected damage from the critical.
    pub fn increase(&self) -> f64 {
        self.critical_average - self.normal_average
    }

    /// Increase as a percentage of normal damage, if normal damage is nonzero.
    pub fn percentage_increase(&self) -> Option<f64> {
        (self.normal_average != 0.0)
            .then(|| (self.critical_average / self.normal_average - 1.0) * 100.0)
    }
}

/// Preview the damage of a critical hit.
///
/// With `dice_only`, each dice term's count is scaled (rounded down, at least
/// one die, at most `max_dice`) and the result is rendered as ordinary
/// notation. Otherwise the whole expression is multiplied.
pub fn critical_damage(base: &DiceExpression, options: &CriticalOptions) -> CriticalDamage {
    let normal_average = base.average();
    let (mut notation, mut critical_average) = if options.dice_only {
        let scaled = scale_dice(base, options.multiplier, options.max_dice);
        (scaled.to_string(), scaled.average())
    } else {
        (
            format!("({base}){}", options.multiplier),
            options.multiplier.value() * normal_average,
        )
    };

    if let Some(extra) = &options.extra_dice {
        notation = format!("{notation}+{extra}");
        critical_average += extra.average();
    }

    CriticalDamage {
        notation,
        normal_average,
        critical_average,
    }
}

fn scale_dice(base: &DiceExpression, multiplier: Multiplier, max_dice: u32) -> DiceExpression {
    let cap = max_dice.clamp(1, MAX_DICE_PER_TERM);
    let terms = base
        .terms()
        .iter()
        .map(|term| match term {
            Term::Dice(d) => {
                let scaled = (f64::from(d.count()) * multiplier.value()).floor() as u32;
                let count = scaled.clamp(1, cap);
                Term::Dice(DiceTerm::new(d.sign(), count, d.die()).unwrap_or(*d))
            }
            Term::Flat(v) => Term::Flat(*v),
        })
        .collect();
    DiceExpression::from_terms(terms).unwrap_or_else(|_| base.clone())
}
