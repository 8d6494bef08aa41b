pub mod chain;
pub mod compare;
pub mod coverage;
pub mod crit;
pub mod dot;
pub mod overlay;
pub mod roll;
pub mod shapes;
pub mod stats;
pub mod suggest;
pub mod targeting;
pub mod targets;

use clap::Args;
use sg_dice::{DiceExpression, Multiplier};
use sg_targeting::AoeParams;

/// Shape dimension flags shared by the geometry commands.
#[derive(Args, Debug, Default)]
pub struct DimensionArgs {
    /// Radius in feet (circle, sphere, cylinder)
    #[arg(long)]
    pub radius: Option<f64>,

    /// Side length in feet (square, cube)
    #[arg(long)]
    pub size: Option<f64>,

    /// Reach in feet (cone)
    #[arg(long)]
    pub range: Option<f64>,

    /// Opening angle in degrees (cone)
    #[arg(long)]
    pub angle: Option<f64>,

    /// Length in feet (line, wall)
    #[arg(long)]
    pub length: Option<f64>,

    /// Width in feet (line, wall)
    #[arg(long)]
    pub width: Option<f64>,

    /// Height in feet (cylinder, wall)
    #[arg(long)]
    pub height: Option<f64>,

    /// Feet per grid cell
    #[arg(long)]
    pub grid_size: Option<f64>,
}

impl DimensionArgs {
    pub fn to_params(&self) -> AoeParams {
        AoeParams {
            radius: self.radius,
            size: self.size,
            range: self.range,
            angle: self.angle,
            length: self.length,
            width: self.width,
            height: self.height,
            grid_size: self.grid_size,
            ..AoeParams::default()
        }
    }
}

/// Parse notation, rendering a pointed diagnostic on failure.
fn parse_notation(input: &str) -> Result<DiceExpression, String> {
    DiceExpression::parse(input).map_err(|err| {
        let report = miette::Report::new(err).with_source_code(input.to_string());
        format!("invalid dice notation\n{report:?}")
    })
}

fn parse_multiplier(input: &str) -> Result<Multiplier, String> {
    Multiplier::parse(input)
        .ok_or_else(|| format!("invalid multiplier '{input}' (expected e.g. 2, 1.5, x3)"))
}

/// Format a float without a trailing `.0`, up to two decimals.
fn num(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded}")
    }
}
