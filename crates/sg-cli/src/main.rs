//! CLI frontend for the Spellgrid dice and targeting engines.

mod commands;

use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use commands::DimensionArgs;

#[derive(Parser)]
#[command(
    name = "sg",
    about = "Spellgrid: dice notation and spell targeting previews",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log engine decisions to stderr (same as SG_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll dice notation
    Roll {
        /// Dice notation, e.g. 2d6+3
        notation: String,

        /// RNG seed for reproducible rolls (random if omitted)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Number of times to roll
        #[arg(short, long, default_value = "1")]
        times: u32,

        /// Roll mode: normal, advantage, disadvantage, exploding, critical
        #[arg(short, long, default_value = "normal")]
        mode: String,

        /// Maximum extra dice per exploding die
        #[arg(long, default_value_t = sg_dice::mode::DEFAULT_EXPLODE_LIMIT)]
        explode_limit: u32,

        /// Lowest face that counts as a critical (default: the die's maximum)
        #[arg(long)]
        crit_threshold: Option<u32>,

        /// Critical multiplier, e.g. 2 or 1.5
        #[arg(long, default_value = "2")]
        crit_multiplier: String,
    },

    /// Show minimum, maximum and average of a notation
    Stats {
        /// Dice notation
        notation: String,

        /// Also print the exact probability of every total
        #[arg(short, long)]
        distribution: bool,

        /// Print the chance of rolling at least this total
        #[arg(long)]
        at_least: Option<i64>,
    },

    /// Compare two notations
    Compare {
        /// Baseline notation
        base: String,

        /// Notation to compare against the baseline
        other: String,
    },

    /// Suggest a notation for a target average
    Suggest {
        /// Desired average total
        average: f64,

        /// Spread: low, medium, high
        #[arg(long, default_value = "medium")]
        variance: String,

        /// Only suggest pure dice, without a flat modifier
        #[arg(long)]
        no_modifier: bool,

        /// Maximum number of dice
        #[arg(long, default_value = "10")]
        max_dice: u32,
    },

    /// Preview critical hit damage
    Crit {
        /// Damage notation
        notation: String,

        /// Critical multiplier, e.g. 2 or 1.5
        #[arg(short, long, default_value = "2")]
        multiplier: String,

        /// Multiply dice counts instead of the whole total
        #[arg(long)]
        dice_only: bool,

        /// Extra dice added on a critical, e.g. 1d6
        #[arg(long)]
        extra: Option<String>,

        /// Most dice a scaled term may hold with --dice-only
        #[arg(long, default_value_t = sg_dice::critical::DEFAULT_CRITICAL_MAX_DICE)]
        max_dice: u32,
    },

    /// Show damage falloff along a chain of targets
    Chain {
        /// Damage notation for the first target
        notation: String,

        /// Number of targets, the first one included
        #[arg(short, long, default_value = "3")]
        targets: u32,

        /// Falloff rule: percentage, fixed, dice
        #[arg(short, long, default_value = "percentage")]
        falloff: String,

        /// Percentage or number of dice removed per target
        #[arg(short, long, default_value = "25")]
        rate: u32,

        /// Never drop a target's average below this
        #[arg(long)]
        minimum: Option<f64>,
    },

    /// Show a damage or healing over time schedule
    Dot {
        /// Notation rolled each tick
        notation: String,

        /// Number of ticks
        #[arg(short, long, default_value = "3")]
        ticks: u32,

        /// Scaling: flat, increasing, decreasing, frontloaded, backloaded
        #[arg(short, long, default_value = "flat")]
        scaling: String,

        /// Base multiplier for every tick
        #[arg(long, default_value = "1")]
        tick_multiplier: f64,

        /// First-tick multiplier (frontloaded, backloaded)
        #[arg(long, default_value = "1")]
        initial: f64,

        /// Last-tick multiplier (frontloaded, backloaded)
        #[arg(long = "final", default_value = "1")]
        last: f64,

        /// Treat the effect as healing
        #[arg(long)]
        healing: bool,
    },

    /// List area-of-effect shapes
    Shapes,

    /// List targeting types, or show one in detail
    Targeting {
        /// Targeting type id (e.g. chain)
        id: Option<String>,
    },

    /// Compute area and grid coverage of a shape
    Coverage {
        /// Shape id (e.g. circle, cone, wall)
        shape: String,

        #[command(flatten)]
        dims: DimensionArgs,
    },

    /// Estimate how many creatures a spell reaches
    Targets {
        /// Targeting type id (e.g. area, chain)
        targeting: String,

        /// Shape for area targeting
        #[arg(long)]
        shape: Option<String>,

        #[command(flatten)]
        dims: DimensionArgs,

        /// Creatures per grid cell
        #[arg(long)]
        density: Option<f64>,

        /// Target cap for multi and smart targeting
        #[arg(long)]
        max_targets: Option<u32>,

        /// Number of jumps for chain targeting
        #[arg(long)]
        chain_count: Option<u32>,
    },

    /// Draw a shape on the preview grid
    Overlay {
        /// Shape id (e.g. circle, line)
        shape: String,

        /// Anchor column
        #[arg(short, long, default_value = "10")]
        x: f64,

        /// Anchor row
        #[arg(short, long, default_value = "10")]
        y: f64,

        /// Cells along each side of the grid
        #[arg(long, default_value_t = sg_targeting::grid::DEFAULT_GRID_CELLS)]
        cells: u32,

        #[command(flatten)]
        dims: DimensionArgs,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("SG_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Roll {
            notation,
            seed,
            times,
            mode,
            explode_limit,
            crit_threshold,
            crit_multiplier,
        } => commands::roll::run(
            &notation,
            seed,
            times,
            &mode,
            explode_limit,
            crit_threshold,
            &crit_multiplier,
        ),
        Commands::Stats {
            notation,
            distribution,
            at_least,
        } => commands::stats::run(&notation, distribution, at_least),
        Commands::Compare { base, other } => commands::compare::run(&base, &other),
        Commands::Suggest {
            average,
            variance,
            no_modifier,
            max_dice,
        } => commands::suggest::run(average, &variance, no_modifier, max_dice),
        Commands::Crit {
            notation,
            multiplier,
            dice_only,
            extra,
            max_dice,
        } => commands::crit::run(&notation, &multiplier, dice_only, extra.as_deref(), max_dice),
        Commands::Chain {
            notation,
            targets,
            falloff,
            rate,
            minimum,
        } => commands::chain::run(&notation, targets, &falloff, rate, minimum),
        Commands::Dot {
            notation,
            ticks,
            scaling,
            tick_multiplier,
            initial,
            last,
            healing,
        } => {
            let options = sg_dice::OverTimeOptions::default()
                .with_duration(ticks)
                .with_tick_multiplier(tick_multiplier)
                .with_endpoints(initial, last);
            commands::dot::run(&notation, &scaling, options, healing)
        }
        Commands::Shapes => commands::shapes::run(),
        Commands::Targeting { id } => commands::targeting::run(id.as_deref()),
        Commands::Coverage { shape, dims } => commands::coverage::run(&shape, &dims),
        Commands::Targets {
            targeting,
            shape,
            dims,
            density,
            max_targets,
            chain_count,
        } => {
            let mut params = dims.to_params();
            params.creature_density = density;
            params.max_targets = max_targets;
            params.chain_count = chain_count;
            commands::targets::run(&targeting, shape.as_deref(), &params)
        }
        Commands::Overlay {
            shape,
            x,
            y,
            cells,
            dims,
        } => commands::overlay::run(&shape, x, y, cells, &dims),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
