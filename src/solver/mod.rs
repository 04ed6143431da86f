use crate::{cell::Cell, path::path_cost, pathing_grid::PathingGrid};

pub mod astar;
pub mod dfs;
pub mod hill_climbing;

/// Why a hill-climbing walk ended without reaching the goal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StuckReason {
    /// Every neighbour of the current cell is blocked, outside the grid or already visited.
    DeadEnd,
    /// The iteration bound ran out first.
    IterationLimit,
}

/// How a search ended. [Outcome::NoPath] and [Outcome::Stuck] are ordinary results, not errors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A start→goal path of unit steps.
    Found(Vec<Cell>),
    /// The search space was exhausted without reaching the goal.
    NoPath,
    /// Hill climbing gave up; `partial` holds the cells walked so far.
    Stuck {
        partial: Vec<Cell>,
        reason: StuckReason,
    },
}

/// The outcome of a search together with the cells it expanded, first-expanded first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub outcome: Outcome,
    pub visited: Vec<Cell>,
}

impl SearchResult {
    pub(crate) fn from_path(path: Option<Vec<Cell>>, visited: Vec<Cell>) -> SearchResult {
        SearchResult {
            outcome: path.map_or(Outcome::NoPath, Outcome::Found),
            visited,
        }
    }
    /// The complete start→goal path, if one was found.
    pub fn path(&self) -> Option<&[Cell]> {
        match &self.outcome {
            Outcome::Found(path) => Some(path.as_slice()),
            _ => None,
        }
    }
    pub fn into_path(self) -> Option<Vec<Cell>> {
        match self.outcome {
            Outcome::Found(path) => Some(path),
            _ => None,
        }
    }
    /// The cells actually stepped along: the full path, a stuck walk, or nothing.
    pub fn walked(&self) -> &[Cell] {
        match &self.outcome {
            Outcome::Found(path) => path.as_slice(),
            Outcome::Stuck { partial, .. } => partial.as_slice(),
            Outcome::NoPath => &[],
        }
    }
    pub fn is_found(&self) -> bool {
        matches!(self.outcome, Outcome::Found(_))
    }
    pub fn is_stuck(&self) -> bool {
        matches!(self.outcome, Outcome::Stuck { .. })
    }
}

/// A search algorithm over a [PathingGrid]. Every implementation expands cells into their four
/// axis-aligned neighbours and admits a neighbour only if [PathingGrid::is_valid] holds.
pub trait GridSolver {
    fn name(&self) -> &'static str;

    /// Estimated number of moves from `p1` to `p2`; the Manhattan distance unless overridden.
    fn heuristic(&self, p1: &Cell, p2: &Cell) -> i32 {
        p1.manhattan_distance(p2)
    }

    /// Runs the search from `start` to `goal`. The grid is only read.
    fn search(&self, grid: &PathingGrid, start: Cell, goal: Cell) -> SearchResult;

    fn get_path_single_goal(
        &self,
        grid: &PathingGrid,
        start: Cell,
        goal: Cell,
    ) -> Option<Vec<Cell>> {
        self.search(grid, start, goal).into_path()
    }

    /// Every move has unit cost, so this is the number of steps.
    fn get_path_cost(&self, path: &[Cell]) -> usize {
        path_cost(path)
    }
}
