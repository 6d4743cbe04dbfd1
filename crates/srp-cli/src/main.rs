//! SRP CLI - strategic release planning from the command line
//!
//! Loads a dataset of requirement descriptions and plan capacities,
//! scores each requirement's sentiment, trains the Q-table and prints
//! the extracted release plans.

// Clippy pedantic allows - these are intentional design choices
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod dataset;
mod report;
mod sentiment;

use config::Settings;
use dataset::Dataset;
use sentiment::SentimentAnalyzer;
use srp_rl::{allocate, Trainer};

#[derive(Parser)]
#[command(name = "srp")]
#[command(version, about = "srp - sentiment-balanced strategic release planning", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Train on a dataset and print the release plans
    Plan(PlanArgs),

    /// Print the sentiment score of every requirement in a dataset
    Score {
        /// Path to the JSON dataset file
        dataset: PathBuf,
    },
}

#[derive(clap::Args)]
struct PlanArgs {
    /// Path to the JSON dataset file
    dataset: PathBuf,

    /// Learning rate override
    #[arg(long)]
    alpha: Option<f64>,

    /// Discount factor override
    #[arg(long)]
    gamma: Option<f64>,

    /// Exploration rate override
    #[arg(long)]
    epsilon: Option<f64>,

    /// Episode count override
    #[arg(long)]
    episodes: Option<usize>,

    /// RNG seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_level = if cli.verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("srp={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Plan(args) => run_plan(&args),
        Commands::Score { dataset } => run_score(&dataset),
    }
}

fn run_plan(args: &PlanArgs) -> Result<()> {
    let dataset = Dataset::load(&args.dataset)
        .with_context(|| format!("failed to load dataset {}", args.dataset.display()))?;
    let descriptions = dataset.deduplicated_requirements();

    let analyzer = SentimentAnalyzer::new();
    let requirements = analyzer.score_all(&descriptions);

    let mut settings = Settings::load()?;
    if let Some(alpha) = args.alpha {
        settings.training.alpha = alpha;
    }
    if let Some(gamma) = args.gamma {
        settings.training.gamma = gamma;
    }
    if let Some(epsilon) = args.epsilon {
        settings.training.epsilon = epsilon;
    }
    if let Some(episodes) = args.episodes {
        settings.training.episodes = episodes;
    }
    if args.seed.is_some() {
        settings.seed = args.seed;
    }

    let trainer = Trainer::new(settings.training);
    let outcome = match settings.seed {
        Some(seed) => trainer.train(
            &dataset.capacities,
            &requirements,
            &mut StdRng::seed_from_u64(seed),
        )?,
        None => trainer.train(&dataset.capacities, &requirements, &mut rand::thread_rng())?,
    };

    let assignments = allocate(&outcome.q_table, &dataset.capacities, &requirements)?;
    report::print_assignments(&assignments);

    Ok(())
}

fn run_score(path: &Path) -> Result<()> {
    let dataset = Dataset::load(path)
        .with_context(|| format!("failed to load dataset {}", path.display()))?;
    let descriptions = dataset.deduplicated_requirements();

    let analyzer = SentimentAnalyzer::new();
    let requirements = analyzer.score_all(&descriptions);
    report::print_scores(&requirements);

    Ok(())
}
