use colored::Colorize;

use sg_targeting::{GridConfig, GridPoint, Overlay, ShapeKind};

use super::DimensionArgs;

pub fn run(shape: &str, x: f64, y: f64, cells: u32, dims: &DimensionArgs) -> Result<(), String> {
    let kind = shape.parse::<ShapeKind>().map_err(|e| e.to_string())?;
    let params = dims.to_params();

    let centre = f64::from(cells / 2);
    let grid = GridConfig::default()
        .with_cells(cells)
        .with_grid_size(params.grid_size_or_default())
        .with_origin(GridPoint::new(centre, centre));
    let anchor = GridPoint::new(x, y);
    if !grid.contains(anchor) {
        return Err(format!("anchor {anchor} is off the {cells}×{cells} grid"));
    }

    let overlay = Overlay::new(kind.id(), anchor, &params, grid);
    println!(
        "  {} {}",
        kind.definition().name.bold(),
        format!("at {anchor}, caster at {}", grid.origin).dimmed()
    );
    println!();
    for line in overlay.to_string().lines() {
        println!("  {line}");
    }
    println!();
    println!("  {} cells affected", overlay.cells.len());
    if kind.is_volume() {
        println!("  {}", "volumes have no footprint on the preview grid".dimmed());
    }

    Ok(())
}
