use clap::Parser;
use command_queue::{DemoConfig, run_demo};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Queue random reversible commands, execute them and roll them back
#[derive(Debug, Parser)]
#[command(name = "command_queue", version)]
struct Cli {
    /// RON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of demo steps (overrides the configuration)
    #[arg(short, long)]
    iterations: Option<u32>,

    /// Seed for the random source (overrides the configuration)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Keep applied commands instead of rolling everything back at the end
    #[arg(long)]
    no_rollback: bool,

    /// Print the final report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => match DemoConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                error!(path = %path.display(), "Failed to load configuration: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => DemoConfig::default(),
    };

    if let Some(iterations) = cli.iterations {
        config.iterations = iterations;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if cli.no_rollback {
        config.rollback_all = false;
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let report = match run_demo(&config, &mut rng) {
        Ok(report) => report,
        Err(e) => {
            error!("Demo failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("Failed to serialize report: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        info!(
            "Executed {}, rolled back {}, pruned {}; value {} (peak {}), queue {}/{}",
            report.executed,
            report.rolled_back,
            report.pruned,
            report.final_value,
            report.peak_value,
            report.command_index,
            report.queue_size
        );
    }

    ExitCode::SUCCESS
}
