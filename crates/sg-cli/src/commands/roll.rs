use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;

use sg_dice::{RollMode, RollOptions, RollOutcome};

use super::{num, parse_multiplier, parse_notation};

pub fn run(
    notation: &str,
    seed: Option<u64>,
    times: u32,
    mode: &str,
    explode_limit: u32,
    crit_threshold: Option<u32>,
    crit_multiplier: &str,
) -> Result<(), String> {
    let expr = parse_notation(notation)?;
    let mode = RollMode::parse(mode).ok_or_else(|| {
        format!("unknown roll mode '{mode}' (normal, advantage, disadvantage, exploding, critical)")
    })?;

    let mut options = RollOptions::default()
        .with_mode(mode)
        .with_explode_limit(explode_limit)
        .with_critical_multiplier(parse_multiplier(crit_multiplier)?);
    if let Some(threshold) = crit_threshold {
        options = options.with_critical_threshold(threshold);
    }

    let seed = seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);

    println!(
        "  {} {} {}",
        "Rolling".bold(),
        expr.to_string().cyan(),
        format!("({mode}, seed={seed})").dimmed()
    );

    let mut sum = 0.0;
    for _ in 0..times {
        let outcome = expr.roll_with(&options, &mut rng);
        println!("  {}", describe(&outcome));
        sum += outcome.total;
    }

    if times > 1 {
        println!();
        println!(
            "  {} rolls, sum {}, mean {} {}",
            times,
            num(sum),
            num(sum / f64::from(times)),
            format!("(expected {})", num(expr.average())).dimmed()
        );
    }

    Ok(())
}

fn describe(outcome: &RollOutcome) -> String {
    let rolls: Vec<String> = outcome
        .rolls
        .iter()
        .enumerate()
        .map(|(i, roll)| {
            let text = roll.to_string();
            if outcome.rolls.len() > 1 && i != outcome.selected {
                text.dimmed().strikethrough().to_string()
            } else {
                text
            }
        })
        .collect();

    let total = num(outcome.total).green().bold();
    if outcome.critical {
        format!("{}  {} → {}", rolls.join("  "), "CRITICAL".red().bold(), total)
    } else {
        format!("{}  → {}", rolls.join("  "), total)
    }
}
