//! Maze generation and solving on a wall-bitmask grid
//!
//! Mazes are carved with a randomized depth-first backtracker, optionally
//! braided by knocking down extra walls, and solved with a breadth-first
//! search. A seed fully determines the result.

#![forbid(unsafe_code)]

/// Carving, braiding, solving and the maze session
pub mod algorithm;
/// Configuration, persistence, rendering and the command line
pub mod io;
/// Grid model, coordinates and the decorative pattern
pub mod spatial;

pub use algorithm::generator::{GenerationOptions, Maze};
pub use io::error::{MazeError, Result};
