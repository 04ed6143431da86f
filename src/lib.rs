//! # grid_search
//!
//! Small demonstrations of pathfinding on a 4-connected grid of free and blocked cells:
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) with the Manhattan distance as
//! heuristic, [depth-first search](https://en.wikipedia.org/wiki/Depth-first_search) and
//! greedy [hill climbing](https://en.wikipedia.org/wiki/Hill_climbing). Every move has unit cost.
//! Each search reports the path it found together with the order in which it expanded cells, so
//! a caller can show how the search progressed.
//!
//! Obstacles and endpoints are drawn from an injected random source:
//!
//! ```
//! use grid_search::{astar, pick_start_goal, place_obstacles, PathingGrid};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(0);
//! let mut grid = PathingGrid::new(10, 10);
//! place_obstacles(&mut grid, 25, &mut rng);
//! let (start, goal) = pick_start_goal(&grid, &mut rng).unwrap();
//! let result = astar(&grid, start, goal);
//! assert_eq!(result.path().is_some(), grid.reachable(&start, &goal));
//! ```
mod astar_search;
pub mod cell;
pub mod config;
pub mod error;
pub mod generator;
pub mod path;
pub mod pathing_grid;
pub mod solver;

pub use cell::Cell;
pub use config::{run, Algorithm, ObstacleDensity, Run, SearchConfig};
pub use error::GridError;
pub use generator::{pick_start_goal, place_obstacles};
pub use path::{is_valid_path, reconstruct_path};
pub use pathing_grid::{create_grid, PathingGrid};
pub use solver::{
    astar::{astar, AstarSolver},
    dfs::{dfs, DfsSolver},
    hill_climbing::{hill_climbing, HillClimbingSolver},
    GridSolver, Outcome, SearchResult, StuckReason,
};
