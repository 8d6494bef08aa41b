use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use sg_dice::{ChainOptions, Falloff};

use super::{num, parse_notation};

pub fn run(
    notation: &str,
    targets: u32,
    falloff: &str,
    rate: u32,
    minimum: Option<f64>,
) -> Result<(), String> {
    let expr = parse_notation(notation)?;
    let falloff = Falloff::from_parts(falloff, rate)
        .ok_or_else(|| format!("unknown falloff '{falloff}' (percentage, fixed, dice)"))?;

    let mut options = ChainOptions::default()
        .with_targets(targets)
        .with_falloff(falloff);
    if let Some(minimum) = minimum {
        options = options.with_minimum_damage(minimum);
    }

    let chain = sg_dice::chained_damage(&expr, &options);

    println!(
        "  {} {} {}",
        "Chain".bold(),
        expr.to_string().cyan(),
        format!("({falloff})").dimmed()
    );
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Target", "Damage", "Min", "Max", "Average"]);
    for link in &chain.links {
        table.add_row(vec![
            link.target.to_string(),
            link.expression.to_string(),
            link.min.to_string(),
            link.max.to_string(),
            num(link.average),
        ]);
    }
    println!("{table}");
    println!();
    println!(
        "  Total average: {}",
        num(chain.total_average()).green().bold()
    );

    Ok(())
}
