//! Maze defaults and the `KEY=VALUE` configuration file

use log::debug;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::algorithm::generator::GenerationOptions;
use crate::io::error::{MazeError, Result, file_system, invalid_parameter};
use crate::spatial::position::Position;

/// Default grid width in cells
pub const DEFAULT_WIDTH: usize = 20;
/// Default grid height in cells
pub const DEFAULT_HEIGHT: usize = 15;
/// Default entry cell
pub const DEFAULT_ENTRY: Position = Position::new(0, 0);
/// Default exit cell
pub const DEFAULT_EXIT: Position = Position::new(0, 0);
/// Default maze file written after generation
pub const DEFAULT_OUTPUT_FILE: &str = "maze.txt";
/// Perfect mazes unless configured otherwise
pub const DEFAULT_PERFECT: bool = true;
/// Decorative pattern stamped unless configured otherwise
pub const DEFAULT_PATTERN: bool = true;

/// Cells per wall-removal attempt when braiding
pub const IMPERFECTION_DIVISOR: usize = 20;

/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 1000;

/// Side length of one cell in exported PNG images, in pixels
pub const PNG_CELL_SIZE: u32 = 16;

/// Settings read from a maze configuration file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeConfig {
    /// Grid width in cells (`WIDTH`)
    pub width: usize,
    /// Grid height in cells (`HEIGHT`)
    pub height: usize,
    /// Entry cell (`ENTRY`, as `x,y`)
    pub entry: Position,
    /// Exit cell (`EXIT`, as `x,y`)
    pub exit: Position,
    /// Random seed (`SEED`), unseeded when absent
    ///
    /// Negative values are stored as their two's complement bits.
    pub seed: Option<u64>,
    /// Whether to keep the maze perfect (`PERFECT`)
    pub perfect: bool,
    /// Whether to stamp the decorative pattern (`PATTERN`)
    pub pattern: bool,
    /// Where to write the maze file (`OUTPUT_FILE`)
    pub output_file: PathBuf,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            entry: DEFAULT_ENTRY,
            exit: DEFAULT_EXIT,
            seed: None,
            perfect: DEFAULT_PERFECT,
            pattern: DEFAULT_PATTERN,
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

impl MazeConfig {
    /// Load a configuration file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or any recognized key has
    /// a malformed value
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(file_system(path, "read configuration"))?;
        debug!("Loaded configuration from {}", path.display());
        Self::parse(&contents)
    }

    /// Parse configuration text
    ///
    /// One `KEY=VALUE` pair per line, split on the first `=`. Blank lines,
    /// lines starting with `#` and lines without `=` are skipped; unknown
    /// keys are ignored. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::Config`] naming the first line whose value cannot
    /// be parsed
    pub fn parse(contents: &str) -> Result<Self> {
        let mut config = Self::default();

        for (number, raw) in contents.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let (key, value) = (key.trim(), value.trim());
            let line = number + 1;

            match key {
                "WIDTH" => config.width = parse_value(line, key, value)?,
                "HEIGHT" => config.height = parse_value(line, key, value)?,
                "ENTRY" => config.entry = parse_value(line, key, value)?,
                "EXIT" => config.exit = parse_value(line, key, value)?,
                "SEED" => {
                    config.seed = if value.is_empty() {
                        None
                    } else {
                        Some(parse_seed(line, key, value)?)
                    };
                }
                "PERFECT" => config.perfect = parse_flag(line, key, value)?,
                "PATTERN" => config.pattern = parse_flag(line, key, value)?,
                "OUTPUT_FILE" => config.output_file = PathBuf::from(value),
                _ => debug!("Ignoring unknown configuration key {key} at line {line}"),
            }
        }

        Ok(config)
    }

    /// Check the settings against each other before generating
    ///
    /// # Errors
    ///
    /// Returns an error if a dimension is zero or above
    /// [`MAX_GRID_DIMENSION`], or if the entry or exit lies outside the grid
    pub fn validate(&self) -> Result<()> {
        validate_dimension("WIDTH", self.width)?;
        validate_dimension("HEIGHT", self.height)?;

        for (name, position) in [("entry", self.entry), ("exit", self.exit)] {
            if position.x >= self.width || position.y >= self.height {
                return Err(MazeError::OutOfBounds {
                    name,
                    position,
                    dimensions: (self.width, self.height),
                });
            }
        }
        Ok(())
    }

    /// Generation options described by this configuration
    pub const fn generation_options(&self) -> GenerationOptions {
        GenerationOptions {
            width: self.width,
            height: self.height,
            entry: self.entry,
            exit: self.exit,
            seed: self.seed,
            perfect: self.perfect,
            pattern: self.pattern,
        }
    }
}

/// Reject dimensions the generator cannot handle
///
/// # Errors
///
/// Returns [`MazeError::InvalidParameter`] for zero or oversized dimensions
pub fn validate_dimension(parameter: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(invalid_parameter(parameter, &value, &"must be at least 1"));
    }
    if value > MAX_GRID_DIMENSION {
        return Err(invalid_parameter(
            parameter,
            &value,
            &format!("must not exceed {MAX_GRID_DIMENSION}"),
        ));
    }
    Ok(())
}

fn parse_value<T>(line: usize, key: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|error: T::Err| MazeError::Config {
        line,
        key: key.to_string(),
        reason: format!("'{value}': {error}"),
    })
}

// Negative seeds are accepted and reinterpreted bit for bit
fn parse_seed(line: usize, key: &str, value: &str) -> Result<u64> {
    value
        .parse::<u64>()
        .or_else(|_unsigned_error| value.parse::<i64>().map(i64::cast_unsigned))
        .map_err(|error| MazeError::Config {
            line,
            key: key.to_string(),
            reason: format!("'{value}': {error}"),
        })
}

fn parse_flag(line: usize, key: &str, value: &str) -> Result<bool> {
    if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(MazeError::Config {
            line,
            key: key.to_string(),
            reason: format!("'{value}' is not true or false"),
        })
    }
}
