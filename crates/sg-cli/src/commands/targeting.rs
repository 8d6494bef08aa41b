use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use sg_targeting::{TargetingKind, TargetingTypeDefinition};

pub fn run(id: Option<&str>) -> Result<(), String> {
    match id {
        Some(id) => {
            let kind = id.parse::<TargetingKind>().map_err(|e| e.to_string())?;
            show(kind.definition());
        }
        None => list(),
    }
    Ok(())
}

fn list() {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Name", "AP", "Multi", "Description"]);

    for kind in TargetingKind::all() {
        let def = kind.definition();
        table.add_row(vec![
            def.id().to_string(),
            def.name.to_string(),
            format!("{:+}", def.action_point_modifier),
            if kind.is_multi_target() { "yes" } else { "" }.to_string(),
            def.description.to_string(),
        ]);
    }

    println!("{table}");
}

fn show(def: &TargetingTypeDefinition) {
    println!(
        "  {} {}",
        def.name.bold(),
        format!("({}, {:+} AP)", def.id(), def.action_point_modifier).dimmed()
    );
    println!("  {}", def.description);
    println!();
    println!("  {}", def.tooltip.italic());
    println!("  {} {}", "Tip:".yellow(), def.visualization_tip);
    println!();
    println!("  {}", "Examples".bold().underline());
    for example in def.examples {
        println!("    • {example}");
    }
}
