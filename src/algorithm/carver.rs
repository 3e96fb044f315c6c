//! Randomized iterative depth-first carving ("recursive backtracker")
//!
//! Produces a perfect maze: the passages between non-obstructed cells form a
//! spanning tree, so exactly one simple path joins any two of them.

use bitvec::prelude::*;
use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::spatial::grid::{MazeGrid, Neighbor};
use crate::spatial::pattern::ObstructionSet;
use crate::spatial::position::Position;

/// Carve passages through `grid` starting from `start`
///
/// Obstructed cells are pre-marked visited and never entered, so their wall
/// state is left untouched. When `start` is outside the grid or obstructed,
/// carving begins at the first non-obstructed cell in row-major order. A
/// fully obstructed grid is left as is.
///
/// With the same seeded `rng`, dimensions and obstructions the carved grid
/// is identical from run to run.
pub fn carve<R: Rng + ?Sized>(
    grid: &mut MazeGrid,
    start: Position,
    obstructions: &ObstructionSet,
    rng: &mut R,
) {
    let width = grid.width();
    let mut visited = bitvec![0; grid.cell_count()];
    for cell in obstructions.iter() {
        if let Some(index) = grid.index_of(cell) {
            visited.set(index, true);
        }
    }

    let origin = if grid.contains(start) && !obstructions.contains(start) {
        Some(start)
    } else {
        visited.first_zero().map(|index| Position::new(index % width, index / width))
    };
    let Some(origin) = origin else {
        debug!("No carvable cell in {}x{} grid", width, grid.height());
        return;
    };

    visited.set(origin.index(width), true);
    let mut current = origin;
    let mut stack = vec![origin];
    let mut carved = 0_usize;

    while !stack.is_empty() {
        let candidates: Vec<Neighbor> = grid
            .neighbors(current)
            .into_iter()
            .filter(|neighbor| {
                visited.get(neighbor.position.index(width)).as_deref() == Some(&false)
            })
            .collect();

        if let Some(&next) = candidates.choose(rng) {
            grid.remove_wall(current, next.direction);
            carved += 1;
            stack.push(current);
            visited.set(next.position.index(width), true);
            current = next.position;
        } else if let Some(previous) = stack.pop() {
            current = previous;
        }
    }

    debug!("Carved {carved} passages from {origin}");
}
