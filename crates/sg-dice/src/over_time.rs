//! Damage and healing spread over several ticks.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::notation::DiceExpression;

/// Largest number of ticks an effect is evaluated for.
pub const MAX_TICKS: u32 = 1000;

/// Whether an over-time effect hurts or heals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverTimeKind {
    /// Damage over time.
    #[default]
    Damage,
    /// Healing over time.
    Healing,
}

impl fmt::Display for OverTimeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Damage => "damage",
            Self::Healing => "healing",
        })
    }
}

/// How the per-tick multiplier changes over the effect's duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TickScaling {
    /// Every tick uses the tick multiplier.
    #[default]
    Flat,
    /// Each tick adds half the tick multiplier.
    Increasing,
    /// Each tick removes a fifth of the tick multiplier.
    Decreasing,
    /// Interpolates from the initial to the final multiplier; meant for a
    /// strong opening tick.
    Frontloaded,
    /// Interpolates from the initial to the final multiplier; meant for a
    /// strong closing tick.
    Backloaded,
}

impl TickScaling {
    /// Parse a scaling name, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "flat" => Some(Self::Flat),
            "increasing" | "inc" => Some(Self::Increasing),
            "decreasing" | "dec" => Some(Self::Decreasing),
            "frontloaded" | "front" => Some(Self::Frontloaded),
            "backloaded" | "back" => Some(Self::Backloaded),
            _ => None,
        }
    }

    /// All scalings in display order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Flat,
            Self::Increasing,
            Self::Decreasing,
            Self::Frontloaded,
            Self::Backloaded,
        ]
    }
}

impl fmt::Display for TickScaling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Flat => "flat",
            Self::Increasing => "increasing",
            Self::Decreasing => "decreasing",
            Self::Frontloaded => "frontloaded",
            Self::Backloaded => "backloaded",
        })
    }
}

/// Options for [`dot_damage`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverTimeOptions {
    /// Number of ticks.
    pub duration: u32,
    /// Base multiplier applied to every tick.
    pub tick_multiplier: f64,
    /// How the multiplier evolves.
    pub scaling: TickScaling,
    /// First-tick multiplier for front- and backloaded effects.
    pub initial_multiplier: f64,
    /// Last-tick multiplier for front- and backloaded effects.
    pub final_multiplier: f64,
    /// Damage or healing.
    pub kind: OverTimeKind,
}

impl Default for OverTimeOptions {
    fn default() -> Self {
        Self {
            duration: 3,
            tick_multiplier: 1.0,
            scaling: TickScaling::Flat,
            initial_multiplier: 1.0,
            final_multiplier: 1.0,
            kind: OverTimeKind::Damage,
        }
    }
}

impl OverTimeOptions {
    /// Set the number of ticks (capped at [`MAX_TICKS`]).
    pub fn with_duration(mut self, duration: u32) -> Self {
        self.duration = duration;
        self
    }

    /// Set the base tick multiplier.
    pub fn with_tick_multiplier(mut self, multiplier: f64) -> Self {
        self.tick_multiplier = multiplier;
        self
    }

    /// Set the scaling rule.
    pub fn with_scaling(mut self, scaling: TickScaling) -> Self {
        self.scaling = scaling;
        self
    }

    /// Set the first and last tick multipliers.
    pub fn with_endpoints(mut self, initial: f64, last: f64) -> Self {
        self.initial_multiplier = initial;
        self.final_multiplier = last;
        self
    }

    /// Mark the effect as healing.
    pub fn healing(mut self) -> Self {
        self.kind = OverTimeKind::Healing;
        self
    }

    fn multiplier_at(&self, tick: u32) -> f64 {
        let i = f64::from(tick);
        let m = match self.scaling {
            TickScaling::Flat => self.tick_multiplier,
            TickScaling::Increasing => self.tick_multiplier * (1.0 + i * 0.5),
            TickScaling::Decreasing => self.tick_multiplier * (1.0 - i * 0.2),
            TickScaling::Frontloaded | TickScaling::Backloaded => {
                let t = if self.duration > 1 {
                    i / f64::from(self.duration - 1)
                } else {
                    0.0
                };
                self.initial_multiplier + (self.final_multiplier - self.initial_multiplier) * t
            }
        };
        // NaN maps to 0 as well.
        m.max(0.0)
    }
}

/// One tick of an over-time effect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    /// Tick number, starting at 1.
    pub tick: u32,
    /// Multiplier applied to the base expression.
    pub multiplier: f64,
    /// Expected amount dealt or healed.
    pub average: f64,
}

/// Per-tick schedule of a damage or healing over time effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverTimeEffect {
    /// Damage or healing.
    pub kind: OverTimeKind,
    /// Scaling rule used.
    pub scaling: TickScaling,
    /// One entry per tick.
    pub ticks: Vec<Tick>,
}

impl OverTimeEffect {
    /// Expected amount summed over every tick.
    pub fn total_average(&self) -> f64 {
        self.ticks.iter().map(|t| t.average).sum()
    }

    /// Mean expected amount per tick, if there are any ticks.
    pub fn average_per_tick(&self) -> Option<f64> {
        (!self.ticks.is_empty()).then(|| self.total_average() / self.ticks.len() as f64)
    }
}

/// Build the tick schedule of an over-time effect rolling `base` each tick.
///
/// Multipliers never go below zero. A single-tick front- or backloaded effect
/// uses its initial multiplier.
pub fn dot_damage(base: &DiceExpression, options: &OverTimeOptions) -> OverTimeEffect {
    let base_average = base.average();
    let duration = options.duration.min(MAX_TICKS);
    let ticks = (0..duration)
        .map(|i| {
            let multiplier = options.multiplier_at(i);
            Tick {
                tick: i + 1,
                multiplier,
                average: base_average * multiplier,
            }
        })
        .collect();

    tracing::debug!(
        notation = %base,
        duration,
        scaling = %options.scaling,
        kind = %options.kind,
        "over-time schedule"
    );
    OverTimeEffect {
        kind: options.kind,
        scaling: options.scaling,
        ticks,
    }
}
