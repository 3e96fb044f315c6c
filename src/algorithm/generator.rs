//! Maze session: one grid, one random source, one solved path
//!
//! A [`Maze`] is built from scratch for every generation request. Its random
//! generator is seeded once at construction and threaded explicitly through
//! carving and braiding, so a seed fully determines the result.

use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};

use crate::algorithm::carver::carve;
use crate::algorithm::imperfection::degrade;
use crate::algorithm::solver::{MazePath, solve};
use crate::io::configuration::validate_dimension;
use crate::io::error::Result;
use crate::io::serializer::to_hex;
use crate::spatial::grid::MazeGrid;
use crate::spatial::pattern::{ObstructionSet, stamp};
use crate::spatial::position::Position;

/// Parameters of a single generation run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationOptions {
    /// Grid width in cells
    pub width: usize,
    /// Grid height in cells
    pub height: usize,
    /// Cell where carving starts and solving begins
    pub entry: Position,
    /// Cell the solver walks to
    pub exit: Position,
    /// Seed for reproducible output, OS entropy when `None`
    pub seed: Option<u64>,
    /// Keep the maze perfect; braid it when `false`
    pub perfect: bool,
    /// Stamp the decorative pattern when the grid is large enough
    pub pattern: bool,
}

/// Generated maze with its obstructions and shortest entry-to-exit path
#[derive(Debug, Clone)]
pub struct Maze {
    options: GenerationOptions,
    grid: MazeGrid,
    obstructions: ObstructionSet,
    path: MazePath,
    rng: StdRng,
}

impl Maze {
    /// Generate a fresh maze
    ///
    /// Stamps the pattern, carves from the entry, braids the maze if it is
    /// not meant to be perfect, then solves entry to exit. Entry and exit are
    /// not checked against the grid; see
    /// [`MazeConfig::validate`](crate::io::configuration::MazeConfig::validate).
    ///
    /// # Errors
    ///
    /// Returns an error if a dimension is zero or exceeds the maximum grid
    /// dimension
    pub fn generate(options: &GenerationOptions) -> Result<Self> {
        validate_dimension("width", options.width)?;
        validate_dimension("height", options.height)?;

        info!(
            "Generating {}x{} maze (seed {})",
            options.width,
            options.height,
            options
                .seed
                .map_or_else(|| "random".to_string(), |seed| seed.to_string())
        );

        let mut rng = options
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

        let mut grid = MazeGrid::new(options.width, options.height);
        let obstructions = if options.pattern {
            stamp(&mut grid)
        } else {
            ObstructionSet::new()
        };

        carve(&mut grid, options.entry, &obstructions, &mut rng);
        if !options.perfect {
            degrade(&mut grid, &obstructions, &mut rng);
        }

        let path = solve(&grid, options.entry, options.exit);
        debug!("Solution has {} steps", path.len());

        Ok(Self {
            options: *options,
            grid,
            obstructions,
            path,
            rng,
        })
    }

    /// Build a brand-new maze from the same options with the next seed
    ///
    /// Seeded mazes advance their seed by one; unseeded mazes draw fresh
    /// entropy.
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`Maze::generate`]
    pub fn regenerate(&self) -> Result<Self> {
        let options = GenerationOptions {
            seed: self.options.seed.map(|seed| seed.wrapping_add(1)),
            ..self.options
        };
        Self::generate(&options)
    }

    /// Braid the maze further and recompute the path
    ///
    /// Returns the number of walls removed.
    pub fn degrade(&mut self) -> usize {
        let removed = degrade(&mut self.grid, &self.obstructions, &mut self.rng);
        self.solve();
        removed
    }

    /// Recompute the shortest entry-to-exit path
    pub fn solve(&mut self) -> &MazePath {
        self.path = solve(&self.grid, self.options.entry, self.options.exit);
        &self.path
    }

    /// Options this maze was generated with
    pub const fn options(&self) -> &GenerationOptions {
        &self.options
    }

    /// Wall grid
    pub const fn grid(&self) -> &MazeGrid {
        &self.grid
    }

    /// Cells kept closed by the decorative pattern
    pub const fn obstructions(&self) -> &ObstructionSet {
        &self.obstructions
    }

    /// Entry cell
    pub const fn entry(&self) -> Position {
        self.options.entry
    }

    /// Exit cell
    pub const fn exit(&self) -> Position {
        self.options.exit
    }

    /// Most recently computed shortest path
    pub const fn path(&self) -> &MazePath {
        &self.path
    }

    /// Hexadecimal wall states, one line per row
    pub fn to_hex(&self) -> String {
        to_hex(&self.grid)
    }
}
