use grid_search::{astar, hill_climbing, Cell, Outcome, PathingGrid};

// Hill climbing never backtracks. On this grid the greedy walk heads straight into the pocket
// above the goal and gets stuck, while A* goes around the wall.
//  _____
// |  S  |
// | # # |
// | # # |
// | ### |
// |  G  |
//  _____

fn main() {
    let mut pathing_grid = PathingGrid::new(5, 5);
    for cell in [(1, 1), (2, 1), (3, 1), (1, 3), (2, 3), (3, 3), (3, 2)] {
        pathing_grid.set(Cell::from(cell), true);
    }
    println!("{}", pathing_grid);
    let start = Cell::new(0, 2);
    let goal = Cell::new(4, 2);
    for max_iterations in [2, 20] {
        let result = hill_climbing(&pathing_grid, start, goal, max_iterations);
        match &result.outcome {
            Outcome::Found(path) => {
                println!("{max_iterations} iterations: reached goal via {path:?}")
            }
            Outcome::Stuck { partial, reason } => {
                println!("{max_iterations} iterations: stuck ({reason:?}) after {partial:?}")
            }
            Outcome::NoPath => unreachable!("hill climbing reports being stuck instead"),
        }
    }
    if let Some(path) = astar(&pathing_grid, start, goal).path() {
        println!("A* goes around in {} steps: {:?}", path.len() - 1, path);
    }
}
