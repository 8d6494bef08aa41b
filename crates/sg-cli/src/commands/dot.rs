use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use sg_dice::{OverTimeKind, OverTimeOptions, TickScaling};

use super::{num, parse_notation};

pub fn run(
    notation: &str,
    scaling: &str,
    options: OverTimeOptions,
    healing: bool,
) -> Result<(), String> {
    let expr = parse_notation(notation)?;
    let scaling = TickScaling::parse(scaling).ok_or_else(|| {
        format!(
            "unknown scaling '{scaling}' (flat, increasing, decreasing, frontloaded, backloaded)"
        )
    })?;

    let mut options = options.with_scaling(scaling);
    if healing {
        options = options.healing();
    }

    let effect = sg_dice::dot_damage(&expr, &options);
    let label = match effect.kind {
        OverTimeKind::Damage => "Damage over time".red().bold(),
        OverTimeKind::Healing => "Healing over time".green().bold(),
    };

    println!(
        "  {} {} {}",
        label,
        expr.to_string().cyan(),
        format!("({scaling}, {} ticks)", effect.ticks.len()).dimmed()
    );
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Tick", "Multiplier", "Average"]);
    for tick in &effect.ticks {
        table.add_row(vec![
            tick.tick.to_string(),
            format!("×{}", num(tick.multiplier)),
            num(tick.average),
        ]);
    }
    println!("{table}");
    println!();
    println!(
        "  Total {}: {}",
        effect.kind,
        num(effect.total_average()).green().bold()
    );
    if let Some(per_tick) = effect.average_per_tick() {
        println!("  {}", format!("{} per tick", num(per_tick)).dimmed());
    }

    Ok(())
}
