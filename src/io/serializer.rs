//! Hexadecimal grid encoding and the persisted maze file
//!
//! File layout:
//!
//! ```text
//! <height lines of width hex digits>
//!
//! <entry_x>,<entry_y>
//! <exit_x>,<exit_y>
//! <path tokens>
//! ```

use log::info;
use ndarray::Array2;
use std::fmt;
use std::path::Path;

use crate::algorithm::generator::Maze;
use crate::algorithm::solver::MazePath;
use crate::io::error::{MazeError, Result, file_system};
use crate::spatial::grid::MazeGrid;
use crate::spatial::position::Position;

/// Encode every cell's wall state as one uppercase hex digit, rows joined by
/// newlines
pub fn to_hex(grid: &MazeGrid) -> String {
    let mut encoded = String::with_capacity(grid.cell_count() + grid.height());
    for (y, row) in grid.wall_states().rows().into_iter().enumerate() {
        if y > 0 {
            encoded.push('\n');
        }
        encoded.extend(
            row.iter()
                .filter_map(|&state| char::from_digit(u32::from(state), 16))
                .map(|digit| digit.to_ascii_uppercase()),
        );
    }
    encoded
}

/// Contents of a persisted maze file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeFile {
    /// Wall grid
    pub grid: MazeGrid,
    /// Entry cell
    pub entry: Position,
    /// Exit cell
    pub exit: Position,
    /// Solved path from entry to exit
    pub path: MazePath,
}

impl From<&Maze> for MazeFile {
    fn from(maze: &Maze) -> Self {
        Self {
            grid: maze.grid().clone(),
            entry: maze.entry(),
            exit: maze.exit(),
            path: maze.path().clone(),
        }
    }
}

impl fmt::Display for MazeFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", to_hex(&self.grid))?;
        writeln!(f)?;
        writeln!(f, "{}", self.entry)?;
        writeln!(f, "{}", self.exit)?;
        writeln!(f, "{}", self.path)
    }
}

impl MazeFile {
    /// Read a maze file back
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::MalformedMazeFile`] if the grid is missing or
    /// ragged, contains non-hex digits, or the entry, exit or path lines are
    /// missing or unreadable
    pub fn parse(contents: &str) -> Result<Self> {
        let malformed = |line: usize, reason: String| MazeError::MalformedMazeFile { line, reason };
        let mut lines = contents.lines().enumerate().map(|(i, line)| (i + 1, line));

        let mut rows: Vec<Vec<u8>> = Vec::new();
        let mut separator_line = 0;
        for (number, line) in lines.by_ref() {
            if line.is_empty() {
                separator_line = number;
                break;
            }
            let row = line
                .chars()
                .map(|digit| digit.to_digit(16).map(|value| value as u8))
                .collect::<Option<Vec<u8>>>()
                .ok_or_else(|| malformed(number, format!("'{line}' is not a hex row")))?;
            if rows.first().is_some_and(|first| first.len() != row.len()) {
                return Err(malformed(number, "rows have different widths".to_string()));
            }
            rows.push(row);
        }

        if rows.is_empty() || separator_line == 0 {
            return Err(malformed(
                separator_line.max(1),
                "expected grid rows followed by a blank line".to_string(),
            ));
        }

        let width = rows.first().map_or(0, Vec::len);
        let height = rows.len();
        let walls = Array2::from_shape_vec((height, width), rows.concat())
            .map_err(|error| malformed(1, error.to_string()))?;
        // Single hex digits never exceed the four wall bits
        let grid = MazeGrid::from_walls(walls)
            .ok_or_else(|| malformed(1, "wall state out of range".to_string()))?;

        let mut next_line = |what: &str| {
            lines
                .next()
                .ok_or_else(|| malformed(separator_line, format!("missing {what} line")))
        };

        let (entry_line, entry) = next_line("entry")?;
        let entry = entry
            .trim()
            .parse::<Position>()
            .map_err(|error| malformed(entry_line, error.to_string()))?;

        let (exit_line, exit) = next_line("exit")?;
        let exit = exit
            .trim()
            .parse::<Position>()
            .map_err(|error| malformed(exit_line, error.to_string()))?;

        let (path_line, path) = next_line("path")?;
        let path = path
            .trim()
            .parse::<MazePath>()
            .map_err(|error| malformed(path_line, error.to_string()))?;

        Ok(Self {
            grid,
            entry,
            exit,
            path,
        })
    }
}

/// Persist a maze in the maze file format
///
/// # Errors
///
/// Returns [`MazeError::FileSystem`] if the parent directory cannot be
/// created or the file cannot be written
pub fn write_maze_file(path: &Path, maze: &Maze) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(file_system(parent, "create directory"))?;
    }

    std::fs::write(path, MazeFile::from(maze).to_string())
        .map_err(file_system(path, "write maze file"))?;

    info!("Maze saved to {}", path.display());
    Ok(())
}
