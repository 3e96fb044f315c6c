//! Breadth-first shortest path search over open passages

use bitvec::prelude::*;
use log::debug;
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use crate::spatial::grid::{Direction, MazeGrid};
use crate::spatial::position::Position;

/// Ordered walk through a maze as direction steps
///
/// An empty path means either that entry and exit coincide or that no walk
/// exists; callers that care must compare the endpoints themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MazePath {
    steps: Vec<Direction>,
}

impl MazePath {
    /// Wrap a sequence of steps
    pub const fn new(steps: Vec<Direction>) -> Self {
        Self { steps }
    }

    /// Steps in walking order
    pub fn steps(&self) -> &[Direction] {
        &self.steps
    }

    /// Number of steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check whether the path has no steps
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Cells visited when walking the path from `start`, including `start`
    ///
    /// Stops early if a step would leave the non-negative quadrant.
    pub fn positions(&self, start: Position) -> Vec<Position> {
        let mut cells = Vec::with_capacity(self.steps.len() + 1);
        cells.push(start);
        let mut current = start;
        for direction in &self.steps {
            let Some(next) = direction.step(current) else {
                break;
            };
            cells.push(next);
            current = next;
        }
        cells
    }

    /// Check that every step crosses an open passage of `grid`
    pub fn is_walkable(&self, grid: &MazeGrid, start: Position) -> bool {
        let mut current = start;
        for &direction in &self.steps {
            if !grid.is_passage(current, direction) {
                return false;
            }
            match direction.step(current) {
                Some(next) => current = next,
                None => return false,
            }
        }
        true
    }
}

impl fmt::Display for MazePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for direction in &self.steps {
            write!(f, "{direction}")?;
        }
        Ok(())
    }
}

/// Character that is not a direction token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePathError {
    /// The rejected character
    pub token: char,
    /// Zero-based offset of the character
    pub offset: usize,
}

impl fmt::Display for ParsePathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid direction '{}' at offset {}",
            self.token, self.offset
        )
    }
}

impl std::error::Error for ParsePathError {}

impl FromStr for MazePath {
    type Err = ParsePathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(offset, token)| {
                Direction::from_token(token).ok_or(ParsePathError { token, offset })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }
}

/// Find the shortest walk from `start` to `end`
///
/// Explores cells in non-decreasing distance order, expanding neighbors in
/// N, E, S, W order, and stops at the first arrival at `end`. Each cell
/// remembers the step that discovered it, so the walk is rebuilt backwards
/// from `end` once found.
///
/// Returns an empty path when `start == end`, when `end` is unreachable, or
/// when `start` lies outside the grid.
pub fn solve(grid: &MazeGrid, start: Position, end: Position) -> MazePath {
    let Some(start_index) = grid.index_of(start) else {
        debug!("Solver start {start} outside grid");
        return MazePath::default();
    };

    let width = grid.width();
    let mut visited = bitvec![0; grid.cell_count()];
    let mut arrived_by: Vec<Option<Direction>> = vec![None; grid.cell_count()];
    let mut frontier = VecDeque::from([start]);
    visited.set(start_index, true);

    while let Some(current) = frontier.pop_front() {
        if current == end {
            let path = trace_back(&arrived_by, width, start, end);
            debug!("Solved {start} -> {end} in {} steps", path.len());
            return path;
        }

        for neighbor in grid.neighbors(current) {
            if !grid.is_passage(current, neighbor.direction) {
                continue;
            }
            let index = neighbor.position.index(width);
            if visited.get(index).as_deref() == Some(&false) {
                visited.set(index, true);
                if let Some(slot) = arrived_by.get_mut(index) {
                    *slot = Some(neighbor.direction);
                }
                frontier.push_back(neighbor.position);
            }
        }
    }

    debug!("No path from {start} to {end}");
    MazePath::default()
}

fn trace_back(
    arrived_by: &[Option<Direction>],
    width: usize,
    start: Position,
    end: Position,
) -> MazePath {
    let mut steps = Vec::new();
    let mut current = end;

    while current != start {
        let Some(direction) = arrived_by.get(current.index(width)).copied().flatten() else {
            break;
        };
        let Some(previous) = direction.opposite().step(current) else {
            break;
        };
        steps.push(direction);
        current = previous;
    }

    steps.reverse();
    MazePath::new(steps)
}
