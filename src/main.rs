//! CLI entry point for the maze generator

use clap::Parser;
use env_logger::Env;
use mazegen::io::cli::{Cli, MazeApp};

fn main() -> mazegen::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(cli.log_level())).init();

    let mut app = MazeApp::new(&cli)?;
    app.run(cli.interactive)
}
