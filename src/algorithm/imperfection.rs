//! Best-effort wall removal that turns a perfect maze into a braided one

use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::io::configuration::IMPERFECTION_DIVISOR;
use crate::spatial::grid::MazeGrid;
use crate::spatial::pattern::ObstructionSet;
use crate::spatial::position::Position;

/// Number of removal attempts made on a grid of the given size
pub const fn attempt_budget(width: usize, height: usize) -> usize {
    width * height / IMPERFECTION_DIVISOR
}

/// Knock down random interior walls to introduce loops
///
/// Makes [`attempt_budget`] attempts. Each picks a random cell and a random
/// in-bounds side; an existing wall there is removed on both sides. Attempts
/// that land on an open side, or touch an obstructed cell, are spent without
/// a retry, so the number of removed walls is at most the budget. Skipping
/// obstructed cells is deliberate: the glyph stays sealed even in braided
/// mazes, where a plain random knock-down could open it. The outer
/// boundary is never opened because only sides with an in-bounds neighbor
/// are candidates.
///
/// Returns the number of walls actually removed.
pub fn degrade<R: Rng + ?Sized>(
    grid: &mut MazeGrid,
    obstructions: &ObstructionSet,
    rng: &mut R,
) -> usize {
    let (width, height) = (grid.width(), grid.height());
    let attempts = attempt_budget(width, height);
    let mut removed = 0;

    for _ in 0..attempts {
        let cell = Position::new(rng.random_range(0..width), rng.random_range(0..height));
        let Some(&neighbor) = grid.neighbors(cell).choose(rng) else {
            continue;
        };
        if obstructions.contains(cell) || obstructions.contains(neighbor.position) {
            continue;
        }
        if grid.remove_wall(cell, neighbor.direction) {
            removed += 1;
        }
    }

    debug!("Removed {removed} walls in {attempts} attempts");
    removed
}
