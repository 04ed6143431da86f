use crate::cell::Cell;
use core::fmt;
use log::{info, warn};
use petgraph::unionfind::UnionFind;

/// [PathingGrid] is a `rows × cols` occupancy matrix where a cell is either blocked ([true]) or
/// free ([false]). In addition to the raw values it maintains information about
/// 4-connected components of free cells using a [UnionFind] structure, which serves as a cheap
/// reachability oracle next to the searches themselves.
#[derive(Clone, Debug)]
pub struct PathingGrid {
    rows: usize,
    cols: usize,
    blocked: Vec<bool>,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Default for PathingGrid {
    fn default() -> PathingGrid {
        PathingGrid::new(0, 0)
    }
}

impl PathingGrid {
    /// Creates a grid on which every cell is free.
    pub fn new(rows: usize, cols: usize) -> PathingGrid {
        let mut grid = PathingGrid {
            rows,
            cols,
            blocked: vec![false; rows * cols],
            components: UnionFind::new(rows * cols),
            components_dirty: false,
        };
        grid.generate_components();
        grid
    }
    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }
    pub fn area(&self) -> usize {
        self.rows * self.cols
    }
    pub fn in_bounds(&self, cell: &Cell) -> bool {
        cell.row >= 0
            && cell.col >= 0
            && (cell.row as usize) < self.rows
            && (cell.col as usize) < self.cols
    }
    fn get_ix(&self, cell: &Cell) -> usize {
        cell.row as usize * self.cols + cell.col as usize
    }
    /// Out-of-bounds cells count as blocked.
    pub fn is_blocked(&self, cell: &Cell) -> bool {
        !self.in_bounds(cell) || self.blocked[self.get_ix(cell)]
    }
    /// True iff `cell` lies inside the grid and is free. This is the only test the solvers use to
    /// admit a neighbour, so nothing outside `[0, rows) × [0, cols)` is ever enqueued.
    pub fn is_valid(&self, cell: &Cell) -> bool {
        self.in_bounds(cell) && !self.blocked[self.get_ix(cell)]
    }
    /// The valid axis-aligned neighbours of `cell`, in [Cell::neumann_neighborhood] order.
    pub fn neighbours(&self, cell: &Cell) -> impl Iterator<Item = Cell> + '_ {
        cell.neumann_neighborhood()
            .into_iter()
            .filter(move |n| self.is_valid(n))
    }
    /// All free cells in row-major order.
    pub fn free_cells(&self) -> Vec<Cell> {
        (0..self.rows as i32)
            .flat_map(|row| (0..self.cols as i32).map(move |col| Cell::new(row, col)))
            .filter(|cell| self.is_valid(cell))
            .collect()
    }
    pub fn blocked_count(&self) -> usize {
        self.blocked.iter().filter(|b| **b).count()
    }
    pub fn free_count(&self) -> usize {
        self.area() - self.blocked_count()
    }

    /// Updates a cell and returns whether its value changed. Joins newly connected components and
    /// flags the components as dirty if components are (potentially) broken apart into multiple.
    /// Out-of-bounds cells are ignored.
    pub fn set(&mut self, cell: Cell, blocked: bool) -> bool {
        if !self.in_bounds(&cell) {
            return false;
        }
        let ix = self.get_ix(&cell);
        if self.blocked[ix] == blocked {
            return false;
        }
        self.blocked[ix] = blocked;
        if blocked {
            self.components_dirty = true;
        } else {
            let neighbours = self
                .neighbours(&cell)
                .map(|n| self.get_ix(&n))
                .collect::<Vec<usize>>();
            for n_ix in neighbours {
                self.components.union(ix, n_ix);
            }
        }
        true
    }

    /// Retrieves the component id a given [Cell] belongs to.
    pub fn get_component(&self, cell: &Cell) -> usize {
        self.components.find(self.get_ix(cell))
    }

    /// Checks if start and goal are free and on the same component.
    pub fn reachable(&self, start: &Cell, goal: &Cell) -> bool {
        if self.components_dirty {
            warn!("Components are dirty, call update() before querying reachability");
        }
        self.is_valid(start)
            && self.is_valid(goal)
            && self
                .components
                .equiv(self.get_ix(start), self.get_ix(goal))
    }

    /// Checks if start and goal are not on the same component.
    pub fn unreachable(&self, start: &Cell, goal: &Cell) -> bool {
        !self.reachable(start, goal)
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up free grid neighbours to the same
    /// components. Only the right and lower neighbour need to be linked per cell.
    pub fn generate_components(&mut self) {
        self.components = UnionFind::new(self.area());
        self.components_dirty = false;
        for row in 0..self.rows as i32 {
            for col in 0..self.cols as i32 {
                let cell = Cell::new(row, col);
                if !self.is_valid(&cell) {
                    continue;
                }
                let parent_ix = self.get_ix(&cell);
                for n in [Cell::new(row + 1, col), Cell::new(row, col + 1)] {
                    if self.is_valid(&n) {
                        let n_ix = self.get_ix(&n);
                        self.components.union(parent_ix, n_ix);
                    }
                }
            }
        }
    }
}

/// Shorthand for [PathingGrid::new].
pub fn create_grid(rows: usize, cols: usize) -> PathingGrid {
    PathingGrid::new(rows, cols)
}

impl fmt::Display for PathingGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.rows as i32 {
            let line = (0..self.cols as i32)
                .map(|col| {
                    if self.is_blocked(&Cell::new(row, col)) {
                        '#'
                    } else {
                        '.'
                    }
                })
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
