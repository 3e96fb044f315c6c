//! ASCII rendering with optional ANSI colors and solution overlay

use std::collections::HashSet;
use std::fmt;

use crate::algorithm::generator::Maze;
use crate::spatial::grid::Direction;
use crate::spatial::position::Position;

const RESET: &str = "\x1b[0m";

/// Terminal color used for walls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallColor {
    /// ANSI bright red
    Red,
    /// ANSI bright green
    Green,
    /// ANSI bright yellow
    Yellow,
    /// ANSI bright blue
    Blue,
    /// ANSI bright magenta
    Magenta,
    /// ANSI bright cyan
    Cyan,
    /// ANSI bright white
    White,
}

impl WallColor {
    /// Colors in cycling order
    pub const ALL: [Self; 7] = [
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
    ];

    /// ANSI escape sequence selecting this color
    pub const fn ansi(self) -> &'static str {
        match self {
            Self::Red => "\x1b[91m",
            Self::Green => "\x1b[92m",
            Self::Yellow => "\x1b[93m",
            Self::Blue => "\x1b[94m",
            Self::Magenta => "\x1b[95m",
            Self::Cyan => "\x1b[96m",
            Self::White => "\x1b[97m",
        }
    }

    /// Following color in the cycle, wrapping from white back to red
    pub const fn next(self) -> Self {
        match self {
            Self::Red => Self::Green,
            Self::Green => Self::Yellow,
            Self::Yellow => Self::Blue,
            Self::Blue => Self::Magenta,
            Self::Magenta => Self::Cyan,
            Self::Cyan => Self::White,
            Self::White => Self::Red,
        }
    }
}

impl fmt::Display for WallColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
        };
        f.write_str(name)
    }
}

/// How to draw a maze
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Wall color, plain ASCII when `None`
    pub color: Option<WallColor>,
    /// Overlay the solved path
    pub show_path: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            color: Some(WallColor::White),
            show_path: false,
        }
    }
}

impl RenderOptions {
    /// Uncolored rendering, suitable for files and tests
    pub const fn plain() -> Self {
        Self {
            color: None,
            show_path: false,
        }
    }
}

// Wraps text in a color code when coloring is enabled
struct Painter {
    enabled: bool,
}

impl Painter {
    fn paint(&self, out: &mut String, color: WallColor, text: &str) {
        if self.enabled {
            out.push_str(color.ansi());
            out.push_str(text);
            out.push_str(RESET);
        } else {
            out.push_str(text);
        }
    }
}

/// Draw a maze as `+---+` ASCII art
///
/// Each cell is three characters wide with its east wall to the right and its
/// south wall below. Pattern cells are filled solid, the entry shows `S`, the
/// exit `E`, and path cells `.` when the overlay is enabled.
pub fn render(maze: &Maze, options: &RenderOptions) -> String {
    let grid = maze.grid();
    let wall_color = options.color.unwrap_or(WallColor::White);
    let painter = Painter {
        enabled: options.color.is_some(),
    };

    let path_cells: HashSet<Position> = if options.show_path {
        maze.path().positions(maze.entry()).into_iter().collect()
    } else {
        HashSet::new()
    };

    let mut out = String::new();
    painter.paint(&mut out, wall_color, &format!("+{}", "---+".repeat(grid.width())));
    out.push('\n');

    for y in 0..grid.height() {
        painter.paint(&mut out, wall_color, "|");
        for x in 0..grid.width() {
            let cell = Position::new(x, y);
            let obstructed = maze.obstructions().contains(cell);
            let cell_color = if obstructed { WallColor::Cyan } else { wall_color };

            if obstructed {
                painter.paint(&mut out, cell_color, "███");
            } else if cell == maze.entry() {
                painter.paint(&mut out, WallColor::Green, " S ");
            } else if cell == maze.exit() {
                painter.paint(&mut out, WallColor::Red, " E ");
            } else if path_cells.contains(&cell) {
                painter.paint(&mut out, WallColor::Yellow, " . ");
            } else {
                out.push_str("   ");
            }

            let east = if grid.has_wall(cell, Direction::East) { "|" } else { " " };
            painter.paint(&mut out, cell_color, east);
        }
        out.push('\n');

        painter.paint(&mut out, wall_color, "+");
        for x in 0..grid.width() {
            let cell = Position::new(x, y);
            let cell_color = if maze.obstructions().contains(cell) {
                WallColor::Cyan
            } else {
                wall_color
            };
            let south = if grid.has_wall(cell, Direction::South) { "---" } else { "   " };
            painter.paint(&mut out, cell_color, south);
            painter.paint(&mut out, wall_color, "+");
        }
        out.push('\n');
    }

    out
}
