//! Cell coordinates and their `x,y` text form

use std::fmt;
use std::str::FromStr;

/// Cell coordinate in a maze grid
///
/// `x` grows eastward and `y` grows southward, so `(0, 0)` is the
/// north-west corner. Positions are not tied to a particular grid and may lie
/// outside of one; bounds are checked by the grid itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    /// Column index
    pub x: usize,
    /// Row index
    pub y: usize,
}

impl Position {
    /// Create a position from column and row
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Row-major index of this position in a grid of the given width
    pub const fn index(self, width: usize) -> usize {
        self.y * width + self.x
    }
}

impl From<(usize, usize)> for Position {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Failure to read a position from its `x,y` form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePositionError {
    input: String,
}

impl fmt::Display for ParsePositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expected two non-negative integers as \"x,y\", found \"{}\"",
            self.input
        )
    }
}

impl std::error::Error for ParsePositionError {}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let error = || ParsePositionError {
            input: s.to_string(),
        };

        let (x, y) = s.split_once(',').ok_or_else(error)?;
        let x = x.trim().parse().map_err(|_parse_error| error())?;
        let y = y.trim().parse().map_err(|_parse_error| error())?;

        Ok(Self { x, y })
    }
}
