/// Command-line interface and interactive session
pub mod cli;
/// Defaults and the configuration file loader
pub mod configuration;
/// Error types
pub mod error;
/// PNG export
pub mod image;
/// ASCII rendering
pub mod render;
/// Hex encoding and the maze file format
pub mod serializer;
