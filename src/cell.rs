use core::fmt;

/// A `(row, col)` coordinate on a [PathingGrid](crate::pathing_grid::PathingGrid).
///
/// Coordinates are signed so that neighbours of border cells can be formed and then rejected by
/// [PathingGrid::is_valid](crate::pathing_grid::PathingGrid::is_valid).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub const fn new(row: i32, col: i32) -> Cell {
        Cell { row, col }
    }

    /// The [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) `|Δrow| + |Δcol|`.
    pub fn manhattan_distance(&self, other: &Cell) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }

    /// The four axis-aligned neighbours in the fixed order `(r+1,c), (r-1,c), (r,c+1), (r,c-1)`.
    /// Every solver expands cells in this order, so it decides ties between equally good moves.
    pub fn neumann_neighborhood(&self) -> [Cell; 4] {
        [
            Cell::new(self.row + 1, self.col),
            Cell::new(self.row - 1, self.col),
            Cell::new(self.row, self.col + 1),
            Cell::new(self.row, self.col - 1),
        ]
    }

    /// Whether `other` is exactly one unit step away along a single axis.
    pub fn is_adjacent(&self, other: &Cell) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Cell {
        Cell::new(row, col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
