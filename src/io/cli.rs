//! Command-line interface: generate, persist, and optionally explore a maze

use clap::Parser;
use log::{info, warn};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::algorithm::generator::Maze;
use crate::io::configuration::{MazeConfig, PNG_CELL_SIZE};
use crate::io::error::{Result, file_system};
use crate::io::image::export_maze_png;
use crate::io::render::{RenderOptions, WallColor, render};
use crate::io::serializer::write_maze_file;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
const CONTROLS: &str = "Controls: [r]egen, [p]ath toggle, [c]olor, [q]uit";
const TERMINAL: &str = "<terminal>";

#[derive(Parser, Debug)]
#[command(name = "mazegen")]
#[command(
    author,
    version,
    about = "Generate, solve and draw mazes from a KEY=VALUE configuration file"
)]
/// Command-line arguments for the maze generator
pub struct Cli {
    /// Configuration file (WIDTH, HEIGHT, ENTRY, EXIT, SEED, PERFECT, ...)
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Maze file to write, overriding OUTPUT_FILE
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Random seed, overriding SEED
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Also export the maze as a PNG image
    #[arg(long, value_name = "FILE")]
    pub png: Option<PathBuf>,

    /// Explore the maze interactively after generating it
    #[arg(short, long)]
    pub interactive: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Default log filter for this invocation
    pub const fn log_level(&self) -> &'static str {
        if self.quiet { "warn" } else { "info" }
    }
}

/// One interactive command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Build a new maze with the next seed
    Regenerate,
    /// Show or hide the solved path
    TogglePath,
    /// Switch to the next wall color
    CycleColor,
    /// Leave the session
    Quit,
    /// Anything else; the maze is simply redrawn
    Unknown,
}

impl Command {
    /// Interpret one line of user input
    pub fn parse(input: &str) -> Self {
        match input.trim().to_ascii_lowercase().as_str() {
            "r" => Self::Regenerate,
            "p" => Self::TogglePath,
            "c" => Self::CycleColor,
            "q" => Self::Quit,
            _ => Self::Unknown,
        }
    }
}

/// Drives generation, persistence and the interactive session
pub struct MazeApp {
    config: MazeConfig,
    png: Option<PathBuf>,
    maze: Maze,
    render_options: RenderOptions,
}

impl MazeApp {
    /// Load and validate the configuration, then generate the first maze
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be read or is invalid
    pub fn new(cli: &Cli) -> Result<Self> {
        let mut config = MazeConfig::from_file(&cli.config)?;
        if let Some(output) = &cli.output {
            config.output_file.clone_from(output);
        }
        if cli.seed.is_some() {
            config.seed = cli.seed;
        }
        Self::from_config(config, cli.png.clone())
    }

    /// Build the app from an already loaded configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    pub fn from_config(config: MazeConfig, png: Option<PathBuf>) -> Result<Self> {
        config.validate()?;
        if config.entry == config.exit {
            warn!("Entry and exit are both {}, the path will be empty", config.entry);
        }
        let maze = Maze::generate(&config.generation_options())?;

        Ok(Self {
            config,
            png,
            maze,
            render_options: RenderOptions::default(),
        })
    }

    /// Current maze
    pub const fn maze(&self) -> &Maze {
        &self.maze
    }

    /// Current rendering settings
    pub const fn render_options(&self) -> &RenderOptions {
        &self.render_options
    }

    /// Write the maze file and, if requested, the PNG image
    ///
    /// # Errors
    ///
    /// Returns an error if either file cannot be written
    pub fn save(&self) -> Result<()> {
        write_maze_file(&self.config.output_file, &self.maze)?;
        if let Some(png) = &self.png {
            export_maze_png(&self.maze, PNG_CELL_SIZE, png)?;
        }
        Ok(())
    }

    /// Replace the maze with a freshly generated one and save it
    ///
    /// # Errors
    ///
    /// Returns an error if generation or saving fails
    pub fn regenerate(&mut self) -> Result<()> {
        self.maze = self.maze.regenerate()?;
        self.config.seed = self.maze.options().seed;
        info!("Regenerated maze");
        self.save()
    }

    /// Apply one command; returns `false` once the session should end
    ///
    /// # Errors
    ///
    /// Returns an error if regenerating fails
    pub fn apply(&mut self, command: Command) -> Result<bool> {
        match command {
            Command::Regenerate => self.regenerate()?,
            Command::TogglePath => {
                self.render_options.show_path = !self.render_options.show_path;
            }
            Command::CycleColor => {
                let current = self.render_options.color.unwrap_or(WallColor::White);
                self.render_options.color = Some(current.next());
            }
            Command::Quit => return Ok(false),
            Command::Unknown => {}
        }
        Ok(true)
    }

    /// Draw the maze and the control hint
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `output` fails
    pub fn draw<W: Write>(&self, output: &mut W) -> Result<()> {
        let frame = format!(
            "{CLEAR_SCREEN}{}\n{CONTROLS}\n> ",
            render(&self.maze, &self.render_options)
        );
        output
            .write_all(frame.as_bytes())
            .and_then(|()| output.flush())
            .map_err(file_system(TERMINAL, "draw maze"))
    }

    /// Run the interactive loop until `q` or end of input
    ///
    /// # Errors
    ///
    /// Returns an error if reading input, drawing, or regenerating fails
    pub fn interact<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> Result<()> {
        self.draw(output)?;
        for line in input.lines() {
            let line = line.map_err(file_system(TERMINAL, "read command"))?;
            if !self.apply(Command::parse(&line))? {
                break;
            }
            self.draw(output)?;
        }
        writeln!(output).map_err(file_system(TERMINAL, "draw maze"))
    }

    /// Save the maze, then enter the interactive session if requested
    ///
    /// # Errors
    ///
    /// Returns an error if saving or the interactive session fails
    pub fn run(&mut self, interactive: bool) -> Result<()> {
        self.save()?;
        if interactive {
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            self.interact(stdin.lock(), &mut stdout)?;
        } else {
            info!(
                "Solution: {} steps from {} to {}",
                self.maze.path().len(),
                self.maze.entry(),
                self.maze.exit()
            );
        }
        Ok(())
    }
}
