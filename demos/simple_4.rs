use grid_search::{astar, Cell, PathingGrid};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Cells have a 4-neighborhood and A* finds one of the two 4-step paths.

fn main() {
    let mut pathing_grid = PathingGrid::new(3, 3);
    pathing_grid.set(Cell::new(1, 1), true);
    println!("{}", pathing_grid);
    let start = Cell::new(0, 0);
    let end = Cell::new(2, 2);
    let result = astar(&pathing_grid, start, end);
    println!("Path:");
    for p in result.path().unwrap_or_default() {
        println!("{}", p);
    }
    println!("Expanded: {:?}", result.visited);
}
