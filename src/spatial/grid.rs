//! Wall-bitmask grid shared by every maze stage
//!
//! Each cell stores a 4-bit wall state, one bit per cardinal direction. A set
//! bit means the wall on that side is present. Walls between two in-bounds
//! cells are only ever removed in matching pairs, so the grid always agrees
//! with itself about which passages exist.

use ndarray::Array2;
use std::fmt;

use crate::spatial::position::Position;

/// Wall bit for the north side of a cell
pub const NORTH: u8 = 1;
/// Wall bit for the east side of a cell
pub const EAST: u8 = 2;
/// Wall bit for the south side of a cell
pub const SOUTH: u8 = 4;
/// Wall bit for the west side of a cell
pub const WEST: u8 = 8;
/// Wall state of a fully enclosed cell
pub const ALL_WALLS: u8 = NORTH | EAST | SOUTH | WEST;

/// Cardinal direction between two adjacent cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward decreasing `y`
    North,
    /// Toward increasing `x`
    East,
    /// Toward increasing `y`
    South,
    /// Toward decreasing `x`
    West,
}

impl Direction {
    /// All directions in neighbor enumeration order
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Wall bit guarding this side of a cell
    pub const fn bit(self) -> u8 {
        match self {
            Self::North => NORTH,
            Self::East => EAST,
            Self::South => SOUTH,
            Self::West => WEST,
        }
    }

    /// Direction pointing back from the neighbor
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// Coordinate delta `(dx, dy)` of one step in this direction
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::North => (0, -1),
            Self::East => (1, 0),
            Self::South => (0, 1),
            Self::West => (-1, 0),
        }
    }

    /// Single-character token used in solved paths
    pub const fn token(self) -> char {
        match self {
            Self::North => 'N',
            Self::East => 'E',
            Self::South => 'S',
            Self::West => 'W',
        }
    }

    /// Parse a path token
    pub const fn from_token(token: char) -> Option<Self> {
        match token {
            'N' => Some(Self::North),
            'E' => Some(Self::East),
            'S' => Some(Self::South),
            'W' => Some(Self::West),
            _ => None,
        }
    }

    /// Position one step away, or `None` when the step leaves the
    /// non-negative quadrant
    pub const fn step(self, from: Position) -> Option<Position> {
        let (dx, dy) = self.offset();
        match (from.x.checked_add_signed(dx), from.y.checked_add_signed(dy)) {
            (Some(x), Some(y)) => Some(Position::new(x, y)),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// In-bounds cell adjacent to another, tagged with the direction leading to it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor {
    /// Coordinates of the adjacent cell
    pub position: Position,
    /// Direction from the origin cell toward `position`
    pub direction: Direction,
}

/// Width x height matrix of per-cell wall states
///
/// Stored as a single row-major `Array2` indexed `[y, x]`. All cells start
/// fully enclosed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeGrid {
    walls: Array2<u8>,
}

impl MazeGrid {
    /// Create a grid with every cell enclosed
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            walls: Array2::from_elem((height, width), ALL_WALLS),
        }
    }

    /// Build a grid from raw wall states indexed `[y, x]`
    ///
    /// Returns `None` if any state uses bits above the four wall bits.
    pub fn from_walls(walls: Array2<u8>) -> Option<Self> {
        walls
            .iter()
            .all(|&state| state <= ALL_WALLS)
            .then_some(Self { walls })
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.walls.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.walls.nrows()
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.walls.len()
    }

    /// Check whether a position lies inside the grid
    pub fn contains(&self, position: Position) -> bool {
        position.x < self.width() && position.y < self.height()
    }

    /// Row-major index of an in-bounds position
    pub fn index_of(&self, position: Position) -> Option<usize> {
        self.contains(position).then(|| position.index(self.width()))
    }

    /// Wall state of a cell, `None` when out of bounds
    pub fn walls(&self, position: Position) -> Option<u8> {
        self.walls.get([position.y, position.x]).copied()
    }

    /// Raw wall states indexed `[y, x]`
    pub const fn wall_states(&self) -> &Array2<u8> {
        &self.walls
    }

    /// Check whether the wall on one side of a cell is present
    ///
    /// Out-of-bounds cells report every wall as present.
    pub fn has_wall(&self, position: Position, direction: Direction) -> bool {
        self.walls(position).is_none_or(|state| state & direction.bit() != 0)
    }

    /// Force a cell to be fully enclosed
    ///
    /// Only the cell's own bits are touched; callers stamping a block of
    /// cells on a fresh grid keep the pairing invariant because every
    /// neighbor starts enclosed as well.
    pub fn enclose(&mut self, position: Position) {
        if let Some(state) = self.walls.get_mut([position.y, position.x]) {
            *state = ALL_WALLS;
        }
    }

    /// Enumerate in-bounds cells adjacent to `position`, in N, E, S, W order
    pub fn neighbors(&self, position: Position) -> Vec<Neighbor> {
        Direction::ALL
            .into_iter()
            .filter_map(|direction| {
                direction
                    .step(position)
                    .filter(|&next| self.contains(next))
                    .map(|next| Neighbor {
                        position: next,
                        direction,
                    })
            })
            .collect()
    }

    /// Remove the wall between `position` and its neighbor in `direction`
    ///
    /// Both the cell's bit and the mirrored bit on the neighbor are cleared.
    /// Returns `true` if a wall was removed, `false` if the side was already
    /// open or has no in-bounds neighbor.
    pub fn remove_wall(&mut self, position: Position, direction: Direction) -> bool {
        if !self.contains(position) || !self.has_wall(position, direction) {
            return false;
        }
        let Some(next) = direction.step(position).filter(|&n| self.contains(n)) else {
            return false;
        };

        if let Some(state) = self.walls.get_mut([position.y, position.x]) {
            *state &= !direction.bit();
        }
        if let Some(state) = self.walls.get_mut([next.y, next.x]) {
            *state &= !direction.opposite().bit();
        }
        true
    }

    /// Check whether a passage joins `position` to its neighbor in `direction`
    pub fn is_passage(&self, position: Position, direction: Direction) -> bool {
        direction
            .step(position)
            .filter(|&next| self.contains(next))
            .is_some_and(|next| {
                !self.has_wall(position, direction) && !self.has_wall(next, direction.opposite())
            })
    }

    /// Count passages between in-bounds cells
    ///
    /// Each shared edge is counted once, from its west or north cell.
    pub fn open_edge_count(&self) -> usize {
        self.positions()
            .map(|position| {
                [Direction::East, Direction::South]
                    .into_iter()
                    .filter(|&direction| self.is_passage(position, direction))
                    .count()
            })
            .sum()
    }

    /// Check that every shared edge is open on both sides or on neither
    pub fn is_consistent(&self) -> bool {
        self.positions().all(|position| {
            [Direction::East, Direction::South]
                .into_iter()
                .all(|direction| {
                    direction
                        .step(position)
                        .filter(|&next| self.contains(next))
                        .is_none_or(|next| {
                            self.has_wall(position, direction)
                                == self.has_wall(next, direction.opposite())
                        })
                })
        })
    }

    /// Iterate all positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let width = self.width();
        let height = self.height();
        (0..height).flat_map(move |y| (0..width).map(move |x| Position::new(x, y)))
    }
}
