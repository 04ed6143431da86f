use fxhash::FxHashSet;
use log::{debug, warn};

use crate::{
    cell::Cell,
    pathing_grid::PathingGrid,
    solver::{GridSolver, Outcome, SearchResult, StuckReason},
};

/// Greedy walk that always steps onto the unvisited neighbour closest to the goal. It never
/// backtracks, so it can get stuck even when a path exists; the walk is also cut off after
/// `max_iterations` steps.
#[derive(Clone, Debug)]
pub struct HillClimbingSolver {
    pub max_iterations: usize,
}

impl HillClimbingSolver {
    pub fn new(max_iterations: usize) -> HillClimbingSolver {
        HillClimbingSolver { max_iterations }
    }
}

impl GridSolver for HillClimbingSolver {
    fn name(&self) -> &'static str {
        "hill climbing"
    }

    /// Each iteration records the current cell and moves on. Candidates are sorted with a stable
    /// sort by their distance to the goal, so ties keep [Cell::neumann_neighborhood] order.
    fn search(&self, grid: &PathingGrid, start: Cell, goal: Cell) -> SearchResult {
        let mut current = start;
        let mut visited: FxHashSet<Cell> = FxHashSet::default();
        let mut visited_order = Vec::new();
        let mut walk = Vec::new();
        let mut iterations = 0;

        while current != goal && iterations < self.max_iterations {
            visited.insert(current);
            visited_order.push(current);
            walk.push(current);
            iterations += 1;

            let mut candidates = current.neumann_neighborhood();
            candidates.sort_by_key(|c| self.heuristic(c, &goal));
            match candidates
                .into_iter()
                .find(|c| grid.is_valid(c) && !visited.contains(c))
            {
                Some(next) => current = next,
                None => {
                    // Nothing about the walk can change from here on.
                    warn!(
                        "Hill climbing is stuck at {} after {} iterations, {} not reached",
                        current, iterations, goal
                    );
                    return SearchResult {
                        outcome: Outcome::Stuck {
                            partial: walk,
                            reason: StuckReason::DeadEnd,
                        },
                        visited: visited_order,
                    };
                }
            }
        }

        if current == goal {
            walk.push(goal);
            debug!(
                "Hill climbing reached {} from {} in {} iterations",
                goal, start, iterations
            );
            SearchResult {
                outcome: Outcome::Found(walk),
                visited: visited_order,
            }
        } else {
            warn!(
                "Hill climbing got stuck after {} iterations at {}, {} not reached",
                self.max_iterations, current, goal
            );
            SearchResult {
                outcome: Outcome::Stuck {
                    partial: walk,
                    reason: StuckReason::IterationLimit,
                },
                visited: visited_order,
            }
        }
    }
}

/// Runs [HillClimbingSolver] with the given iteration bound.
pub fn hill_climbing(
    grid: &PathingGrid,
    start: Cell,
    goal: Cell,
    max_iterations: usize,
) -> SearchResult {
    HillClimbingSolver::new(max_iterations).search(grid, start, goal)
}
