//! Path reconstruction and checks shared by the solvers.
use crate::cell::Cell;
use crate::pathing_grid::PathingGrid;
use log::trace;

/// Walks predecessors from `goal` back to `start` and returns the path in start→goal order.
///
/// `predecessor` looks up the cell a node was reached from. A node without a predecessor before
/// `start` is reached, or a chain longer than `limit` nodes (which can only happen on a cycle),
/// means there is no path and yields [None].
pub fn reconstruct_path<N, F>(
    start: &N,
    goal: &N,
    limit: usize,
    mut predecessor: F,
) -> Option<Vec<N>>
where
    N: PartialEq + Clone,
    F: FnMut(&N) -> Option<N>,
{
    let mut path = vec![goal.clone()];
    let mut current = goal.clone();
    while current != *start {
        if path.len() > limit {
            trace!("Predecessor chain exceeds {} nodes, treating as cyclic", limit);
            return None;
        }
        current = predecessor(&current)?;
        path.push(current.clone());
    }
    path.reverse();
    Some(path)
}

/// Checks that `path` is a walk of unit axis-aligned steps over free, in-bounds cells.
pub fn is_valid_path(grid: &PathingGrid, path: &[Cell]) -> bool {
    path.iter().all(|c| grid.is_valid(c)) && path.windows(2).all(|w| w[0].is_adjacent(&w[1]))
}

/// Number of unit moves along `path`.
pub fn path_cost(path: &[Cell]) -> usize {
    path.len().saturating_sub(1)
}
