//! Random obstacle placement and endpoint selection. The random source is always passed in, so a
//! seeded [StdRng](rand::rngs::StdRng) reproduces a grid exactly.
use log::{debug, info, warn};
use rand::seq::index::sample;
use rand::Rng;

use crate::{
    cell::Cell,
    error::{GridError, Result},
    pathing_grid::PathingGrid,
};

/// Blocks `count` additional cells chosen uniformly at random. A sample that hits an already
/// blocked cell is redrawn. A count larger than the number of free cells would never finish, so
/// it is capped and the grid ends up fully blocked.
pub fn place_obstacles<R: Rng + ?Sized>(grid: &mut PathingGrid, count: usize, rng: &mut R) {
    let free = grid.free_count();
    let count = if count > free {
        warn!(
            "Requested {} obstacles but only {} cells are free, blocking all of them",
            count, free
        );
        free
    } else {
        count
    };
    let mut placed = 0;
    while placed < count {
        let cell = Cell::new(
            rng.gen_range(0..grid.rows()) as i32,
            rng.gen_range(0..grid.cols()) as i32,
        );
        if grid.set(cell, true) {
            placed += 1;
        }
    }
    grid.update();
    info!(
        "Placed {} obstacles on a {}x{} grid",
        count,
        grid.rows(),
        grid.cols()
    );
}

/// Draws two distinct free cells uniformly without replacement as `(start, goal)`.
pub fn pick_start_goal<R: Rng + ?Sized>(grid: &PathingGrid, rng: &mut R) -> Result<(Cell, Cell)> {
    let free = grid.free_cells();
    if free.len() < 2 {
        return Err(GridError::InsufficientFreeCells { free: free.len() });
    }
    let picked = sample(rng, free.len(), 2);
    let (start, goal) = (free[picked.index(0)], free[picked.index(1)]);
    debug!("Picked start {} and goal {}", start, goal);
    Ok((start, goal))
}
