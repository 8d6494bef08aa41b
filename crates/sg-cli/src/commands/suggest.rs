use colored::Colorize;

use sg_dice::{SuggestOptions, Variance};

use super::num;

pub fn run(average: f64, variance: &str, no_modifier: bool, max_dice: u32) -> Result<(), String> {
    let variance = Variance::parse(variance)
        .ok_or_else(|| format!("unknown variance '{variance}' (low, medium, high)"))?;

    let mut options = SuggestOptions::default()
        .with_variance(variance)
        .with_max_dice(max_dice);
    if no_modifier {
        options = options.without_modifier();
    }

    let suggestion = sg_dice::suggest(average, &options)
        .ok_or_else(|| format!("no {variance}-variance notation fits an average of {average}"))?;

    println!(
        "  {} {}",
        suggestion.expression.to_string().cyan().bold(),
        format!(
            "(average {}, range {}–{})",
            num(suggestion.average),
            suggestion.expression.min(),
            suggestion.expression.max()
        )
        .dimmed()
    );

    Ok(())
}
