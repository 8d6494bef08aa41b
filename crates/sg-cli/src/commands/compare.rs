use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use super::{num, parse_notation};

pub fn run(base: &str, other: &str) -> Result<(), String> {
    let a = parse_notation(base)?;
    let b = parse_notation(other)?;
    let cmp = sg_dice::compare(&a, &b);

    let signed = |v: f64| {
        if v > 0.0 {
            format!("+{}", num(v))
        } else {
            num(v)
        }
    };

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![String::new(), a.to_string(), b.to_string(), "Δ".into()]);
    table.add_row(vec![
        "Average".into(),
        num(a.average()),
        num(b.average()),
        signed(cmp.average_difference),
    ]);
    table.add_row(vec![
        "Min".into(),
        a.min().to_string(),
        b.min().to_string(),
        signed(cmp.min_difference as f64),
    ]);
    table.add_row(vec![
        "Max".into(),
        a.max().to_string(),
        b.max().to_string(),
        signed(cmp.max_difference as f64),
    ]);
    table.add_row(vec![
        "Range".into(),
        (a.max() - a.min()).to_string(),
        (b.max() - b.min()).to_string(),
        signed(cmp.range_difference as f64),
    ]);
    println!("{table}");
    println!();

    if let Some(ratio) = cmp.average_ratio {
        println!("  {b} averages {}× {a}", num(ratio));
    }
    if cmp.strictly_better {
        println!("  {}", format!("{b} is strictly better than {a}").green());
    } else if cmp.strictly_worse {
        println!("  {}", format!("{b} is strictly worse than {a}").red());
    } else {
        println!("  {}", "neither is strictly better".dimmed());
    }

    Ok(())
}
