use grid_search::{
    astar, create_grid, dfs, hill_climbing, is_valid_path, pick_start_goal, Cell, GridError,
    Outcome, PathingGrid, StuckReason,
};
use rand::{rngs::StdRng, SeedableRng};

fn grid_with(rows: usize, cols: usize, blocked: &[(i32, i32)]) -> PathingGrid {
    let mut grid = create_grid(rows, cols);
    for &cell in blocked {
        grid.set(Cell::from(cell), true);
    }
    grid.update();
    grid
}

// |S  |
// | # |
// |  G|
#[test]
fn blocked_centre_scenario() {
    let grid = grid_with(3, 3, &[(1, 1)]);
    let start = Cell::new(0, 0);
    let goal = Cell::new(2, 2);

    let path = astar(&grid, start, goal).into_path().unwrap();
    assert_eq!(path.len(), 5);
    assert!(is_valid_path(&grid, &path));

    let path = dfs(&grid, start, goal).into_path().unwrap();
    assert!(path.len() >= 5);
    assert!(is_valid_path(&grid, &path));
    assert!(!path.contains(&Cell::new(1, 1)));

    let result = hill_climbing(&grid, start, goal, 5);
    assert!(result.is_found());
    assert_eq!(result.walked().last(), Some(&goal));
    assert!(is_valid_path(&grid, result.walked()));
}

/// Two walls force the path three times across the grid, so the shortest path is much longer
/// than the Manhattan distance of 4:
// |S....|
// |.###.|
// |.....|
// |####.|
// |G....|
#[test]
fn walls_force_a_detour() {
    let grid = grid_with(
        5,
        5,
        &[(1, 1), (1, 2), (1, 3), (3, 0), (3, 1), (3, 2), (3, 3)],
    );
    let start = Cell::new(0, 0);
    let goal = Cell::new(4, 0);
    let result = astar(&grid, start, goal);
    let path = result.path().unwrap();
    assert!(is_valid_path(&grid, path));
    assert_eq!(path.len() - 1, 12);
    assert!(path.contains(&Cell::new(3, 4)));
    assert!(path.len() - 1 > start.manhattan_distance(&goal) as usize);

    // Repeated runs give the same search.
    for _ in 0..10 {
        assert_eq!(astar(&grid, start, goal), result);
    }
}

/// A single corridor leaves exactly one simple path, which DFS has to find.
// |S#...|
// |.#.#.|
// |.#.#.|
// |.#.#.|
// |...#G|
#[test]
fn dfs_finds_the_only_path() {
    let grid = grid_with(
        5,
        5,
        &[(0, 1), (1, 1), (2, 1), (3, 1), (1, 3), (2, 3), (3, 3), (4, 3)],
    );
    let start = Cell::new(0, 0);
    let goal = Cell::new(4, 4);
    let expected = astar(&grid, start, goal).into_path().unwrap();
    let path = dfs(&grid, start, goal).into_path().unwrap();
    assert_eq!(path, expected);
    assert_eq!(path.len(), 17);
}

#[test]
fn enclosed_start_has_no_path() {
    let grid = grid_with(5, 5, &[(1, 2), (3, 2), (2, 1), (2, 3)]);
    let start = Cell::new(2, 2);
    let goal = Cell::new(0, 0);

    let result = astar(&grid, start, goal);
    assert_eq!(result.outcome, Outcome::NoPath);
    assert_eq!(result.visited, vec![start]);

    let result = dfs(&grid, start, goal);
    assert_eq!(result.outcome, Outcome::NoPath);
    assert_eq!(result.visited, vec![start]);

    let result = hill_climbing(&grid, start, goal, 50);
    assert_eq!(
        result.outcome,
        Outcome::Stuck {
            partial: vec![start],
            reason: StuckReason::DeadEnd
        }
    );
    assert_eq!(result.visited.len(), 1);
}

#[test]
fn endpoint_sampling_needs_two_free_cells() {
    let mut rng = StdRng::seed_from_u64(0);
    let one_free = grid_with(1, 2, &[(0, 0)]);
    assert_eq!(
        pick_start_goal(&one_free, &mut rng),
        Err(GridError::InsufficientFreeCells { free: 1 })
    );
    let none_free = grid_with(1, 1, &[(0, 0)]);
    assert!(pick_start_goal(&none_free, &mut rng).is_err());
    let empty = create_grid(0, 0);
    assert!(pick_start_goal(&empty, &mut rng).is_err());
}

/// Cells on the border never produce neighbours outside the grid.
#[test]
fn searches_stay_in_bounds() {
    let grid = create_grid(4, 7);
    let start = Cell::new(0, 6);
    let goal = Cell::new(3, 0);
    for result in [
        astar(&grid, start, goal),
        dfs(&grid, start, goal),
        hill_climbing(&grid, start, goal, 28),
    ] {
        assert!(result.is_found());
        assert!(result.visited.iter().all(|c| grid.in_bounds(c)));
        assert!(result.walked().iter().all(|c| grid.in_bounds(c)));
    }
}
