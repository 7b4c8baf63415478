use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use losgen::{
    find_best_layout, InitStrategy, NullVisualizer, RandomType, SearchConfigBuilder,
    TextVisualizer, Visualizer,
};

const DEFAULT_NUM_POINTS: usize = 4;
const DEFAULT_LOW_SEPARATION: f64 = 200.0;
const DEFAULT_HIGH_SEPARATION: f64 = 600.0;

#[derive(Parser, Debug)]
#[command(name = "losgen")]
#[command(about = "Search stacked viewer layouts in which every viewer sees the boundary line")]
struct Cli {
    /// Number of viewers
    num_points: Option<usize>,

    /// Smallest allowed spacing between neighbouring stacks
    low_separation: Option<f64>,

    /// Largest allowed spacing between neighbouring stacks
    high_separation: Option<f64>,

    /// Number of independent trials
    #[arg(long, default_value_t = 200)]
    trials: usize,

    /// Each trial draws at most steps^2 candidate layouts
    #[arg(long, default_value_t = 6000)]
    steps: u64,

    /// Seed for reproducible runs; drawn from the OS when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// How candidate stacks are generated
    #[arg(long, value_enum, default_value_t = InitStrategy::Angled)]
    init: InitStrategy,

    /// Also keep foci right of the leftmost first-row viewer
    #[arg(long)]
    enforce_lower_bound: bool,

    /// Do not print layouts, only progress
    #[arg(long)]
    no_display: bool,

    /// More output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    /// The three positionals only take effect together.
    fn positionals(&self) -> (usize, f64, f64) {
        match (self.num_points, self.low_separation, self.high_separation) {
            (Some(n), Some(low), Some(high)) => (n, low, high),
            (None, None, None) => (DEFAULT_NUM_POINTS, DEFAULT_LOW_SEPARATION, DEFAULT_HIGH_SEPARATION),
            _ => {
                tracing::warn!("expected all three of NUM_POINTS LOW_SEPARATION HIGH_SEPARATION; using defaults");
                (DEFAULT_NUM_POINTS, DEFAULT_LOW_SEPARATION, DEFAULT_HIGH_SEPARATION)
            }
        }
    }

    fn log_level(&self) -> &'static str {
        match (self.quiet, self.verbose) {
            (true, _) => "warn",
            (false, 0) => "info",
            (false, 1) => "debug",
            _ => "trace",
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    let (num_points, low_separation, high_separation) = cli.positionals();
    let config = SearchConfigBuilder::default()
        .num_points(num_points)
        .low_separation(low_separation)
        .high_separation(high_separation)
        .num_trials(cli.trials)
        .num_steps(cli.steps)
        .init_strategy(cli.init)
        .enforce_lower_bound(cli.enforce_lower_bound)
        .build()?;
    tracing::info!(?config, seed = ?cli.seed, "starting search");

    let random_type = match cli.seed {
        Some(seed) => RandomType::seeded(seed),
        None => RandomType::from_entropy(),
    };
    let mut visualizer: Box<dyn Visualizer> = if cli.no_display {
        Box::new(NullVisualizer)
    } else {
        Box::new(TextVisualizer)
    };

    let (best, best_trial, best_power) = find_best_layout(&config, random_type, visualizer.as_mut(), |trial, power| {
        tracing::info!(trial, best_power = power, "Trial#: {}", trial);
    })?;

    println!("best power: {:.4} (trial {})", best_power, best_trial);
    println!(
        "avg distance: {:.4}, qdistance: {:.4}, density: {:.4}",
        best.avg_distance, best.qdistance, best.density
    );
    Ok(())
}
