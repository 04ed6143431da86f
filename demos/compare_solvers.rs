use grid_search::{
    pick_start_goal, place_obstacles, AstarSolver, DfsSolver, GridSolver, HillClimbingSolver,
    PathingGrid,
};
use rand::{rngs::StdRng, SeedableRng};

// Runs all three solvers on the same seeded 10x10 grid with 25 obstacles and compares how long
// their paths are and how many cells each of them expanded.

fn main() {
    const N: usize = 10;
    let mut rng = StdRng::seed_from_u64(2024);
    let mut pathing_grid = PathingGrid::new(N, N);
    place_obstacles(&mut pathing_grid, N * N / 4, &mut rng);
    let (start, goal) = match pick_start_goal(&pathing_grid, &mut rng) {
        Ok(endpoints) => endpoints,
        Err(e) => {
            eprintln!("{}", e);
            return;
        }
    };
    println!("{}", pathing_grid);
    println!("Start: {start}, goal: {goal}, reachable: {}", pathing_grid.reachable(&start, &goal));

    let solvers: Vec<Box<dyn GridSolver>> = vec![
        Box::new(AstarSolver::new()),
        Box::new(DfsSolver::new()),
        Box::new(HillClimbingSolver::new(N * N)),
    ];
    for solver in solvers {
        let result = solver.search(&pathing_grid, start, goal);
        let steps = result
            .path()
            .map(|p| solver.get_path_cost(p).to_string())
            .unwrap_or_else(|| "-".to_owned());
        println!(
            "{:>14}: path steps {:>3}, expanded {:>3}, outcome {:?}",
            solver.name(),
            steps,
            result.visited.len(),
            result.outcome
        );
    }
}
