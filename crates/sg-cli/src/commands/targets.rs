use colored::Colorize;

use sg_targeting::{AoeParams, ShapeKind, TargetEstimate, TargetingKind};

pub fn run(targeting: &str, shape: Option<&str>, params: &AoeParams) -> Result<(), String> {
    let kind = targeting.parse::<TargetingKind>().map_err(|e| e.to_string())?;
    if let Some(shape) = shape {
        shape.parse::<ShapeKind>().map_err(|e| e.to_string())?;
    }

    let estimate = sg_targeting::estimate_max_targets(kind.id(), shape, params);
    let shown = match estimate {
        TargetEstimate::Exact(n) => n.to_string().green().bold(),
        TargetEstimate::Variable => "variable".yellow().bold(),
    };

    let shape_note = kind
        .implied_shape()
        .map(ShapeKind::id)
        .or(shape)
        .map(|s| format!(" over a {s}"))
        .unwrap_or_default();
    println!(
        "  {}{}: {} {}",
        kind.definition().name.bold(),
        shape_note,
        shown,
        format!("({:+} AP)", kind.definition().action_point_modifier).dimmed()
    );

    Ok(())
}
