use core::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use log::info;
use rand::Rng;

use crate::{
    cell::Cell,
    error::{GridError, Result},
    generator::{pick_start_goal, place_obstacles},
    pathing_grid::PathingGrid,
    solver::{
        astar::AstarSolver, dfs::DfsSolver, hill_climbing::HillClimbingSolver, GridSolver,
        SearchResult,
    },
};

pub const DEFAULT_GRID_SIZE: usize = 10;

/// The search algorithms a run can use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    #[default]
    #[value(name = "astar")]
    AStar,
    Dfs,
    HillClimbing,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Algorithm::AStar => "astar",
            Algorithm::Dfs => "dfs",
            Algorithm::HillClimbing => "hill-climbing",
        };
        write!(f, "{}", name)
    }
}

/// How many cells to block: an absolute count, or a fraction of the grid area rounded down.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ObstacleDensity {
    Count(usize),
    Fraction(f64),
}

impl Default for ObstacleDensity {
    fn default() -> ObstacleDensity {
        ObstacleDensity::Fraction(0.25)
    }
}

impl ObstacleDensity {
    pub fn obstacle_count(&self, rows: usize, cols: usize) -> usize {
        match *self {
            ObstacleDensity::Count(count) => count,
            ObstacleDensity::Fraction(fraction) => {
                ((rows * cols) as f64 * fraction).floor() as usize
            }
        }
    }
}

/// Parses `"25"` as a count and `"0.25"` as a fraction in `[0, 1]`.
impl FromStr for ObstacleDensity {
    type Err = GridError;

    fn from_str(s: &str) -> Result<ObstacleDensity> {
        let s = s.trim();
        if let Ok(count) = s.parse::<usize>() {
            return Ok(ObstacleDensity::Count(count));
        }
        match s.parse::<f64>() {
            Ok(fraction) if (0.0..=1.0).contains(&fraction) => {
                Ok(ObstacleDensity::Fraction(fraction))
            }
            Ok(fraction) => Err(GridError::InvalidDensity(format!(
                "fraction {} is outside [0, 1]",
                fraction
            ))),
            Err(_) => Err(GridError::InvalidDensity(format!(
                "'{}' is neither a cell count nor a fraction",
                s
            ))),
        }
    }
}

impl fmt::Display for ObstacleDensity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ObstacleDensity::Count(count) => write!(f, "{}", count),
            ObstacleDensity::Fraction(fraction) => write!(f, "{}", fraction),
        }
    }
}

/// Parameters of a single run on a square grid.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchConfig {
    pub grid_size: usize,
    pub obstacle_density: ObstacleDensity,
    pub algorithm: Algorithm,
    /// Iteration bound for hill climbing; the grid area when unset, independent of how many
    /// obstacles are placed.
    pub max_iterations: Option<usize>,
    /// Seed for the random source; drawn from entropy when unset.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> SearchConfig {
        SearchConfig {
            grid_size: DEFAULT_GRID_SIZE,
            obstacle_density: ObstacleDensity::default(),
            algorithm: Algorithm::default(),
            max_iterations: None,
            seed: None,
        }
    }
}

impl SearchConfig {
    pub fn obstacle_count(&self) -> usize {
        self.obstacle_density
            .obstacle_count(self.grid_size, self.grid_size)
    }
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
            .unwrap_or(self.grid_size * self.grid_size)
    }
    /// The solver for the configured algorithm.
    pub fn solver(&self) -> Box<dyn GridSolver> {
        match self.algorithm {
            Algorithm::AStar => Box::new(AstarSolver::new()),
            Algorithm::Dfs => Box::new(DfsSolver::new()),
            Algorithm::HillClimbing => Box::new(HillClimbingSolver::new(self.max_iterations())),
        }
    }
}

/// Everything a run produced, ready to be printed or drawn.
#[derive(Clone, Debug)]
pub struct Run {
    pub grid: PathingGrid,
    pub start: Cell,
    pub goal: Cell,
    pub result: SearchResult,
}

/// Builds a grid for `config`, blocks cells, picks the endpoints and searches between them.
/// Fails before any search when fewer than two free cells remain.
pub fn run<R: Rng + ?Sized>(config: &SearchConfig, rng: &mut R) -> Result<Run> {
    if config.grid_size == 0 {
        return Err(GridError::EmptyGrid { rows: 0, cols: 0 });
    }
    let mut grid = PathingGrid::new(config.grid_size, config.grid_size);
    place_obstacles(&mut grid, config.obstacle_count(), rng);
    let (start, goal) = pick_start_goal(&grid, rng)?;
    let solver = config.solver();
    info!("Searching from {} to {} with {}", start, goal, solver.name());
    let result = solver.search(&grid, start, goal);
    Ok(Run {
        grid,
        start,
        goal,
        result,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::is_valid_path;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.obstacle_count(), 25);
        assert_eq!(config.max_iterations(), 100);
        assert_eq!(config.algorithm, Algorithm::AStar);
        assert_eq!(config.solver().name(), "A*");
    }

    #[test]
    fn hill_climbing_bound_ignores_obstacle_count() {
        let config = SearchConfig {
            grid_size: 6,
            obstacle_density: ObstacleDensity::Count(9),
            algorithm: Algorithm::HillClimbing,
            ..SearchConfig::default()
        };
        assert_eq!(config.max_iterations(), 36);
        let bounded = SearchConfig {
            max_iterations: Some(4),
            ..config
        };
        assert_eq!(bounded.max_iterations(), 4);
    }

    #[test]
    fn parses_density() {
        assert_eq!("12".parse::<ObstacleDensity>(), Ok(ObstacleDensity::Count(12)));
        assert_eq!(" 0.5 ".parse::<ObstacleDensity>(), Ok(ObstacleDensity::Fraction(0.5)));
        assert!("1.5".parse::<ObstacleDensity>().is_err());
        assert!("-0.1".parse::<ObstacleDensity>().is_err());
        assert!("lots".parse::<ObstacleDensity>().is_err());
        assert_eq!(ObstacleDensity::Fraction(0.3).obstacle_count(7, 7), 14);
        assert_eq!(ObstacleDensity::Fraction(0.25).obstacle_count(3, 5), 3);
    }

    #[test]
    fn runs_each_algorithm() {
        for algorithm in [Algorithm::AStar, Algorithm::Dfs, Algorithm::HillClimbing] {
            let config = SearchConfig {
                algorithm,
                seed: Some(5),
                ..SearchConfig::default()
            };
            let mut rng = StdRng::seed_from_u64(5);
            let produced = run(&config, &mut rng).unwrap();
            assert_eq!(produced.grid.blocked_count(), 25);
            assert_ne!(produced.start, produced.goal);
            if let Some(path) = produced.result.path() {
                assert!(is_valid_path(&produced.grid, path));
                assert_eq!(path.first(), Some(&produced.start));
                assert_eq!(path.last(), Some(&produced.goal));
            }
        }
    }

    #[test]
    fn full_grid_aborts_before_search() {
        let config = SearchConfig {
            grid_size: 3,
            obstacle_density: ObstacleDensity::Count(8),
            ..SearchConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            run(&config, &mut rng).unwrap_err(),
            GridError::InsufficientFreeCells { free: 1 }
        );
        let empty = SearchConfig {
            grid_size: 0,
            ..SearchConfig::default()
        };
        assert!(matches!(
            run(&empty, &mut rng),
            Err(GridError::EmptyGrid { .. })
        ));
    }
}
