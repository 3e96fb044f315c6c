//! Error types for configuration, persistence and export
//!
//! The maze algorithms themselves never fail; every variant here comes from
//! the collaborators around them.

use std::fmt;
use std::path::PathBuf;

use crate::spatial::position::Position;

/// Main error type for all maze operations
#[derive(Debug)]
pub enum MazeError {
    /// A configuration line could not be interpreted
    Config {
        /// One-based line number in the configuration source
        line: usize,
        /// Key whose value was rejected
        key: String,
        /// Explanation of what is wrong with the value
        reason: String,
    },

    /// Generation parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A coordinate lies outside the grid it refers to
    OutOfBounds {
        /// Which coordinate was rejected (entry, exit, ...)
        name: &'static str,
        /// The rejected coordinate
        position: Position,
        /// Grid dimensions (width, height)
        dimensions: (usize, usize),
    },

    /// A persisted maze file does not follow the expected layout
    MalformedMazeFile {
        /// One-based line number where parsing failed
        line: usize,
        /// Description of the problem
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to save a rendered maze image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config { line, key, reason } => {
                write!(f, "Invalid configuration at line {line} ({key}): {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::OutOfBounds {
                name,
                position,
                dimensions,
            } => {
                write!(
                    f,
                    "{name} {position} is outside the {}x{} grid",
                    dimensions.0, dimensions.1
                )
            }
            Self::MalformedMazeFile { line, reason } => {
                write!(f, "Malformed maze file at line {line}: {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for maze results
pub type Result<T> = std::result::Result<T, MazeError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MazeError {
    MazeError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Attach a path and operation name to an I/O failure
pub fn file_system(
    path: impl Into<PathBuf>,
    operation: &'static str,
) -> impl FnOnce(std::io::Error) -> MazeError {
    let path = path.into();
    move |source| MazeError::FileSystem {
        path,
        operation,
        source,
    }
}
