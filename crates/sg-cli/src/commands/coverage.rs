use colored::Colorize;

use sg_targeting::{Dimensions, ShapeKind};

use super::{DimensionArgs, num};

pub fn run(shape: &str, dims: &DimensionArgs) -> Result<(), String> {
    let kind = shape.parse::<ShapeKind>().map_err(|e| e.to_string())?;
    let params = dims.to_params();
    let coverage = sg_targeting::calculate_coverage(kind.id(), &params);
    let resolved = coverage
        .dimensions
        .unwrap_or_else(|| Dimensions::resolve(kind, &params));

    let unit = if kind.is_volume() { "cu ft" } else { "sq ft" };
    let measure = if kind.is_volume() { "Volume" } else { "Area" };

    println!(
        "  {} {}",
        kind.definition().name.bold(),
        format!("({resolved})").dimmed()
    );
    println!("  {measure}: {} {unit}", num(coverage.area).green());
    println!(
        "  Cells:  {} {}",
        coverage.affected_cells.to_string().green(),
        format!("({} ft grid)", num(params.grid_size_or_default())).dimmed()
    );

    Ok(())
}
