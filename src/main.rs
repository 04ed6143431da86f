use anyhow::Context;
use clap::Parser;
use grid_search::{run, Algorithm, ObstacleDensity, Outcome, SearchConfig};
use itertools::Itertools;
use log::info;
use rand::{rngs::StdRng, SeedableRng};

/// Runs one search on a randomly obstructed square grid and prints what it found.
#[derive(Parser, Debug)]
#[command(name = "grid_search", version, about)]
struct Cli {
    /// Side length of the square grid
    #[arg(short, long, default_value_t = grid_search::config::DEFAULT_GRID_SIZE)]
    size: usize,
    /// Obstacles as a cell count ("25") or a fraction of the area ("0.25"); a quarter by default
    #[arg(short, long)]
    density: Option<ObstacleDensity>,
    #[arg(short, long, value_enum, default_value_t = Algorithm::AStar)]
    algorithm: Algorithm,
    /// Iteration bound for hill climbing; defaults to the grid area (size * size), not the
    /// obstacle count
    #[arg(short, long)]
    max_iterations: Option<usize>,
    /// Seed for obstacle and endpoint sampling
    #[arg(long)]
    seed: Option<u64>,
}

impl From<Cli> for SearchConfig {
    fn from(cli: Cli) -> SearchConfig {
        SearchConfig {
            grid_size: cli.size,
            obstacle_density: cli.density.unwrap_or_default(),
            algorithm: cli.algorithm,
            max_iterations: cli.max_iterations,
            seed: cli.seed,
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SearchConfig::from(Cli::parse());
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!(
        "Running {} on a {}x{} grid with {} obstacles",
        config.algorithm,
        config.grid_size,
        config.grid_size,
        config.obstacle_count()
    );
    let run = run(&config, &mut rng).context("Failed to set up the search")?;

    print!("{}", run.grid);
    println!("Start: {}  Goal: {}", run.start, run.goal);
    match &run.result.outcome {
        Outcome::Found(path) => {
            println!("Path found ({} steps):", path.len() - 1);
            println!("{}", path.iter().join(" -> "));
        }
        Outcome::NoPath => println!("No valid path found."),
        Outcome::Stuck { partial, reason } => {
            println!("Stuck ({:?}) after walking:", reason);
            println!("{}", partial.iter().join(" -> "));
        }
    }
    println!("Visited ({} cells):", run.result.visited.len());
    println!("{}", run.result.visited.iter().join(" "));
    Ok(())
}
