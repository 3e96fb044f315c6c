//! Decorative "42" glyph stamped into the grid before carving
//!
//! Stamped cells stay fully walled and are excluded from carving, so the glyph
//! shows up as a solid block in the finished maze.

use log::debug;
use std::collections::BTreeSet;

use crate::spatial::grid::MazeGrid;
use crate::spatial::position::Position;

/// Glyph width in cells
pub const PATTERN_WIDTH: usize = 7;
/// Glyph height in cells
pub const PATTERN_HEIGHT: usize = 5;
/// Smallest width and height that receive the glyph
pub const MIN_PATTERN_DIMENSION: usize = 10;

// '#' marks a stamped cell
const GLYPH: [&str; PATTERN_HEIGHT] = [
    "#.#.###",
    "#.#...#",
    "###.###",
    "..#.#..",
    "..#.###",
];

/// Cells forced closed and kept out of carving
///
/// Always present on a maze; empty when no glyph was stamped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObstructionSet {
    cells: BTreeSet<Position>,
}

impl ObstructionSet {
    /// Create an empty set
    pub const fn new() -> Self {
        Self {
            cells: BTreeSet::new(),
        }
    }

    /// Check whether a cell is obstructed
    pub fn contains(&self, position: Position) -> bool {
        self.cells.contains(&position)
    }

    /// Number of obstructed cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check whether no cell is obstructed
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate obstructed cells ordered by column, then row
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.iter().copied()
    }
}

impl FromIterator<Position> for ObstructionSet {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

/// Relative offsets of the glyph's stamped cells
pub fn glyph_offsets() -> impl Iterator<Item = Position> {
    GLYPH.iter().enumerate().flat_map(|(y, row)| {
        row.bytes()
            .enumerate()
            .filter(|&(_, cell)| cell == b'#')
            .map(move |(x, _)| Position::new(x, y))
    })
}

/// Stamp the glyph centered on the grid
///
/// Every stamped cell is forced to the fully enclosed state and recorded in
/// the returned set. Grids narrower or shorter than
/// [`MIN_PATTERN_DIMENSION`] are left untouched and yield an empty set.
pub fn stamp(grid: &mut MazeGrid) -> ObstructionSet {
    if grid.width() < MIN_PATTERN_DIMENSION || grid.height() < MIN_PATTERN_DIMENSION {
        debug!(
            "Grid {}x{} too small for the decorative pattern, skipping",
            grid.width(),
            grid.height()
        );
        return ObstructionSet::new();
    }

    let offset_x = (grid.width() - PATTERN_WIDTH) / 2;
    let offset_y = (grid.height() - PATTERN_HEIGHT) / 2;

    let obstructions: ObstructionSet = glyph_offsets()
        .map(|cell| Position::new(offset_x + cell.x, offset_y + cell.y))
        .filter(|&cell| grid.contains(cell))
        .collect();

    for cell in obstructions.iter() {
        grid.enclose(cell);
    }

    debug!(
        "Stamped {} pattern cells at offset {offset_x},{offset_y}",
        obstructions.len()
    );
    obstructions
}
