use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use sg_dice::Distribution;

use super::{num, parse_notation};

/// Widest bar in the distribution chart.
const BAR_WIDTH: f64 = 40.0;

pub fn run(notation: &str, distribution: bool, at_least: Option<i64>) -> Result<(), String> {
    let expr = parse_notation(notation)?;

    println!("  {} {}", "Statistics".bold(), expr.to_string().cyan());
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Min", "Max", "Average", "Dice"]);
    table.add_row(vec![
        expr.min().to_string(),
        expr.max().to_string(),
        num(expr.average()),
        expr.dice_count().to_string(),
    ]);
    println!("{table}");

    if !distribution && at_least.is_none() {
        return Ok(());
    }

    let dist = Distribution::of(&expr).ok_or_else(|| {
        format!(
            "{expr} has too many possible totals for an exact distribution (limit {})",
            sg_dice::distribution::MAX_OUTCOMES
        )
    })?;

    if let Some(target) = at_least {
        println!();
        println!(
            "  P(total ≥ {target}) = {}",
            format!("{:.2}%", dist.probability_at_least(target) * 100.0).green()
        );
    }

    if distribution {
        let peak = dist.iter().map(|(_, p)| p).fold(0.0, f64::max);
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Total", "Chance", ""]);
        for (total, p) in dist.iter() {
            let bar = if peak > 0.0 {
                "█".repeat((p / peak * BAR_WIDTH).round() as usize)
            } else {
                String::new()
            };
            table.add_row(vec![total.to_string(), format!("{:.2}%", p * 100.0), bar]);
        }
        println!();
        println!("{table}");
    }

    Ok(())
}
