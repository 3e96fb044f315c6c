//! Spatial data structures for maze grids
//!
//! This module contains spatial-related functionality including:
//! - Cell coordinates
//! - The wall-bitmask grid
//! - The decorative obstruction pattern

/// Wall-bitmask grid and cardinal directions
pub mod grid;
/// Decorative obstruction pattern stamped before carving
pub mod pattern;
/// Cell coordinates
pub mod position;

pub use grid::{Direction, MazeGrid};
pub use pattern::ObstructionSet;
pub use position::Position;
