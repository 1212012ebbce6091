//! Raceday Simulator CLI
//!
//! Runs generated race programs headlessly and prints results, standings and
//! run metrics.

use anyhow::Context;
use clap::{Parser, Subcommand};
use raceday_simulator::{run_head_to_head, SimulationRun, Simulator, SimulatorConfig};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "raceday-sim")]
#[command(about = "Deterministic race program simulator")]
#[command(version)]
struct Cli {
    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a program from a seed and run every round
    Run {
        /// Program seed (pool and schedule)
        #[arg(short, long)]
        seed: Option<i64>,

        /// TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Seed for live race randomness (omit for OS entropy)
        #[arg(long)]
        live_seed: Option<u64>,

        /// Simulated milliseconds per frame
        #[arg(long)]
        frame_ms: Option<f64>,

        /// Print the whole run as JSON
        #[arg(long)]
        json: bool,
    },

    /// Race a high-condition competitor against a low-condition one
    Trials {
        /// Number of races
        #[arg(short, long, default_value = "500")]
        trials: usize,

        /// Base seed; trial i uses seed + i
        #[arg(short, long, default_value = "1")]
        seed: u64,

        /// Condition of the stronger competitor
        #[arg(long, default_value = "95")]
        high: u8,

        /// Condition of the weaker competitor
        #[arg(long, default_value = "20")]
        low: u8,

        /// Race distance in metres
        #[arg(long, default_value = "1000")]
        distance: f64,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(log_level: &str) {
    // Logs go to stderr so stdout stays clean for --json.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn print_run(run: &SimulationRun) {
    for result in &run.results {
        println!(
            "{}  {:.0}m  ({:.2}s)",
            result.round_id,
            result.distance,
            result.finished_at_ms / 1000.0
        );
        for placement in &result.placements {
            println!(
                "  {:>2}. {:<12} {:<8} {:>8.2}s  best {:.2} m/s",
                placement.position,
                placement.name,
                placement.lane,
                placement.finish_time_ms / 1000.0,
                placement.best_speed
            );
        }
    }

    println!();
    println!("Leaderboard");
    println!(
        "  {:<4} {:<12} {:>6} {:>5} {:>7} {:>6} {:>9}",
        "#", "Name", "Rounds", "Wins", "Podiums", "Points", "Avg"
    );
    for (rank, row) in run.leaderboard.iter().enumerate() {
        println!(
            "  {:<4} {:<12} {:>6} {:>5} {:>7} {:>6} {:>8.2}s",
            rank + 1,
            row.name,
            row.rounds,
            row.wins,
            row.podiums,
            row.points,
            row.average_time_ms / 1000.0
        );
    }

    println!();
    println!("{}", run.report);
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match cli.command {
        Commands::Run {
            seed,
            config,
            live_seed,
            frame_ms,
            json,
        } => {
            let mut sim_config = match config {
                Some(path) => SimulatorConfig::from_toml_file(&path)
                    .with_context(|| format!("loading {}", path.display()))?,
                None => SimulatorConfig::default(),
            };
            if let Some(seed) = seed {
                sim_config = sim_config.with_seed(seed);
            }
            if let Some(live_seed) = live_seed {
                sim_config = sim_config.with_live_seed(live_seed);
            }
            if let Some(frame_ms) = frame_ms {
                sim_config = sim_config.with_frame_ms(frame_ms);
            }

            let run = Simulator::new(sim_config)
                .run()
                .context("simulation failed")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&run)?);
            } else {
                print_run(&run);
            }
        }

        Commands::Trials {
            trials,
            seed,
            high,
            low,
            distance,
            json,
        } => {
            let sim_config = SimulatorConfig::default();
            let mut trial_config = sim_config.trials.clone();
            trial_config.trials = trials;
            trial_config.high_condition = high;
            trial_config.low_condition = low;
            trial_config.distance = distance;

            info!(trials, high, low, "Running head-to-head trials");
            let summary = run_head_to_head(&trial_config, &sim_config.model, seed)
                .context("trials failed")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!(
                    "Condition {} beat condition {} in {}/{} races ({:.1}%)",
                    summary.high_condition,
                    summary.low_condition,
                    summary.high_wins,
                    summary.trials,
                    summary.win_rate() * 100.0
                );
            }
        }
    }

    Ok(())
}
