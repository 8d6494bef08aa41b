use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use sg_dice::CriticalOptions;

use super::{num, parse_multiplier, parse_notation};

pub fn run(
    notation: &str,
    multiplier: &str,
    dice_only: bool,
    extra: Option<&str>,
    max_dice: u32,
) -> Result<(), String> {
    let expr = parse_notation(notation)?;

    let mut options = CriticalOptions::default()
        .with_multiplier(parse_multiplier(multiplier)?)
        .with_max_dice(max_dice);
    if dice_only {
        options = options.dice_only();
    }
    if let Some(extra) = extra {
        options = options.with_extra_dice(parse_notation(extra)?);
    }

    let crit = sg_dice::critical_damage(&expr, &options);

    println!(
        "  {} {} → {}",
        "Critical".bold(),
        expr.to_string().cyan(),
        crit.notation.red().bold()
    );
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Normal", "Critical", "Increase"]);
    let increase = match crit.percentage_increase() {
        Some(pct) => format!("+{} ({}%)", num(crit.increase()), num(pct)),
        None => format!("+{}", num(crit.increase())),
    };
    table.add_row(vec![
        num(crit.normal_average),
        num(crit.critical_average),
        increase,
    ]);
    println!("{table}");

    Ok(())
}
