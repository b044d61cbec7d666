//! # u-tsp CLI
//!
//! Solves a travelling salesman instance with the genetic or hill-climbing
//! search and prints the random-restart baseline next to the result.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{error, info};
use serde::Deserialize;

use u_tsp::data;
use u_tsp::display::report;
use u_tsp::distance::DistanceMatrix;
use u_tsp::ga::{GaConfig, GaRunner};
use u_tsp::hill_climb::{HillClimbConfig, HillClimbRunner};
use u_tsp::models::Coordinate;
use u_tsp::random::create_rng;
use u_tsp::search::random_restart_search;

/// Search algorithm to run after the random-restart baseline.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Algorithm {
    Genetic,
    HillClimb,
}

/// Command-line interface for u-tsp
#[derive(Parser)]
#[command(name = "u-tsp")]
#[command(about = "Travelling salesman search: genetic algorithm and hill climbing")]
#[command(version)]
struct Cli {
    /// Search algorithm
    #[arg(short, long, value_enum, default_value_t = Algorithm::Genetic)]
    algorithm: Algorithm,

    /// JSON file with an array of [x, y] city coordinates (default: Djibouti, 38 cities)
    #[arg(long)]
    cities: Option<PathBuf>,

    /// Zero-based index of the home city
    #[arg(long, default_value_t = 0)]
    home: usize,

    /// Random tours drawn for the baseline
    #[arg(long, default_value_t = 100)]
    samples: usize,

    /// JSON file with `ga` and `hill_climb` parameter sections
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed (overrides any seed in the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Parameter file layout.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    ga: GaConfig,
    hill_climb: HillClimbConfig,
}

fn main() {
    let cli = Cli::parse();

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.target(env_logger::Target::Stderr).init();

    if let Err(e) = run(&cli) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let cities = match &cli.cities {
        Some(path) => load_cities(path)?,
        None => data::djibouti(),
    };
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => FileConfig::default(),
    };

    let distances = DistanceMatrix::from_coordinates_rounded(&cities);
    let city_indexes: Vec<usize> = (0..cities.len()).collect();
    info!("loaded {} cities, home {}", cities.len(), cli.home + 1);

    let seed = cli.seed.or(match cli.algorithm {
        Algorithm::Genetic => config.ga.seed,
        Algorithm::HillClimb => config.hill_climb.seed,
    });
    let mut rng = create_rng(seed);

    let baseline = random_restart_search(&distances, cli.home, &city_indexes, cli.samples, &mut rng)
        .context("random-restart search failed")?;

    println!("Travelling Salesman Problem\n");
    println!("{}", report("Initial state solution", &baseline, cli.home));

    let (title, best) = match cli.algorithm {
        Algorithm::Genetic => {
            let result =
                GaRunner::run_with_rng(&distances, cli.home, &city_indexes, &config.ga, &mut rng)
                    .context("genetic search failed")?;
            ("Genetic algorithm solution", result.best)
        }
        Algorithm::HillClimb => {
            let result = HillClimbRunner::run_with_rng(
                &distances,
                cli.home,
                baseline,
                &config.hill_climb,
                &mut rng,
            )
            .context("hill climbing failed")?;
            ("Hill climbing solution", result.best)
        }
    };

    println!("{}", report(title, &best, cli.home));
    Ok(())
}

fn load_cities(path: &Path) -> Result<Vec<Coordinate>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read cities from {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("failed to parse cities in {}", path.display()))
}

fn load_config(path: &Path) -> Result<FileConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config from {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("failed to parse config in {}", path.display()))
}
