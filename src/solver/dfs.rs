use fxhash::{FxHashMap, FxHashSet};
use log::{debug, warn};

use crate::{
    cell::Cell,
    path::reconstruct_path,
    pathing_grid::PathingGrid,
    solver::{GridSolver, SearchResult},
};

/// Depth-first search with an explicit stack. Finds some path if one exists, not necessarily a
/// shortest one.
///
/// A cell's predecessor is taken from the stack entry that first pops it. Cells are never pushed
/// once visited, so that entry is also the cell's most recent push and the path follows the
/// depth-first tree.
#[derive(Clone, Debug, Default)]
pub struct DfsSolver;

impl DfsSolver {
    pub fn new() -> DfsSolver {
        DfsSolver
    }
}

impl GridSolver for DfsSolver {
    fn name(&self) -> &'static str {
        "DFS"
    }

    fn search(&self, grid: &PathingGrid, start: Cell, goal: Cell) -> SearchResult {
        let mut stack: Vec<(Cell, Option<Cell>)> = vec![(start, None)];
        let mut visited: FxHashSet<Cell> = FxHashSet::default();
        let mut visited_order = Vec::new();
        let mut predecessors: FxHashMap<Cell, Cell> = FxHashMap::default();

        while let Some((current, parent)) = stack.pop() {
            if current != goal && !visited.insert(current) {
                continue;
            }
            if let Some(parent) = parent {
                predecessors.insert(current, parent);
            }
            if current == goal {
                break;
            }
            visited_order.push(current);
            for n in grid.neighbours(&current) {
                if !visited.contains(&n) {
                    stack.push((n, Some(current)));
                }
            }
        }

        // The goal only has a predecessor if it was popped, so an exhausted stack shows up here
        // as a broken chain.
        let path = reconstruct_path(&start, &goal, predecessors.len() + 1, |c| {
            predecessors.get(c).copied()
        });
        match &path {
            Some(path) => debug!(
                "DFS found a path of {} cells from {} to {} after visiting {} cells",
                path.len(),
                start,
                goal,
                visited_order.len()
            ),
            None => warn!(
                "DFS exhausted the stack after visiting {} cells, {} is not reachable from {}",
                visited_order.len(),
                goal,
                start
            ),
        }
        SearchResult::from_path(path, visited_order)
    }
}

/// Runs [DfsSolver] from `start` to `goal`.
pub fn dfs(grid: &PathingGrid, start: Cell, goal: Cell) -> SearchResult {
    DfsSolver::new().search(grid, start, goal)
}
