use criterion::{criterion_group, criterion_main, Criterion};
use grid_search::{
    pick_start_goal, place_obstacles, AstarSolver, Cell, DfsSolver, GridSolver,
    HillClimbingSolver, PathingGrid,
};
use rand::{rngs::StdRng, SeedableRng};
use std::hint::black_box;

const N_SCENARIOS: usize = 100;

/// Seeded random grids with a quarter of the cells blocked, each with a start and a goal.
fn scenarios(n: usize) -> Vec<(PathingGrid, Cell, Cell)> {
    let mut rng = StdRng::seed_from_u64(0);
    (0..N_SCENARIOS)
        .map(|_| {
            let mut grid = PathingGrid::new(n, n);
            place_obstacles(&mut grid, n * n / 4, &mut rng);
            let (start, goal) = pick_start_goal(&grid, &mut rng).unwrap();
            (grid, start, goal)
        })
        .collect()
}

fn bench_solver<S: GridSolver>(c: &mut Criterion, solver: S, n: usize) {
    let scenarios = scenarios(n);
    c.bench_function(format!("{}, {n}x{n}", solver.name()).as_str(), |b| {
        b.iter(|| {
            for (grid, start, goal) in &scenarios {
                black_box(solver.search(grid, *start, *goal));
            }
        })
    });
}

fn comparison_bench(c: &mut Criterion) {
    for n in [10, 64] {
        bench_solver(c, AstarSolver::new(), n);
        bench_solver(c, DfsSolver::new(), n);
        bench_solver(c, HillClimbingSolver::new(n * n), n);
    }
}

criterion_group!(benches, comparison_bench);
criterion_main!(benches);
