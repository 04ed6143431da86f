use log::{debug, warn};

use crate::{
    astar_search::astar_search,
    cell::Cell,
    pathing_grid::PathingGrid,
    solver::{GridSolver, SearchResult},
};

/// A* with the Manhattan distance as heuristic. With a `heuristic_factor` of 1.0 the heuristic is
/// admissible and consistent on a 4-connected unit-cost grid, so returned paths are shortest.
#[derive(Clone, Debug)]
pub struct AstarSolver {
    pub heuristic_factor: f32,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
        }
    }
}

impl Default for AstarSolver {
    fn default() -> AstarSolver {
        AstarSolver::new()
    }
}

impl GridSolver for AstarSolver {
    fn name(&self) -> &'static str {
        "A*"
    }

    /// The Manhattan distance times a heuristic factor. Factors above 1.0 give Weighted A*,
    /// which usually expands fewer cells but may return longer paths.
    fn heuristic(&self, p1: &Cell, p2: &Cell) -> i32 {
        (p1.manhattan_distance(p2) as f32 * self.heuristic_factor) as i32
    }

    fn search(&self, grid: &PathingGrid, start: Cell, goal: Cell) -> SearchResult {
        let outcome = astar_search(
            &start,
            |node| grid.neighbours(node).map(|n| (n, 1)).collect::<Vec<(Cell, i32)>>(),
            |cell| self.heuristic(cell, &goal),
            |cell| *cell == goal,
        );
        match &outcome.path {
            Some((_, cost)) => debug!(
                "A* found a path of cost {} from {} to {} after expanding {} cells",
                cost,
                start,
                goal,
                outcome.expanded.len()
            ),
            None => warn!(
                "A* exhausted the open set after expanding {} cells, {} is not reachable from {}",
                outcome.expanded.len(),
                goal,
                start
            ),
        }
        SearchResult::from_path(outcome.path.map(|(path, _)| path), outcome.expanded)
    }
}

/// Runs [AstarSolver] with the plain Manhattan heuristic.
pub fn astar(grid: &PathingGrid, start: Cell, goal: Cell) -> SearchResult {
    AstarSolver::new().search(grid, start, goal)
}
