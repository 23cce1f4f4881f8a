//! Error types for grid construction, linking and solving

use std::fmt;
use std::path::PathBuf;

use crate::spatial::Position;

/// Main error type for all puzzle operations
#[derive(Debug)]
pub enum PuzzleError {
    /// Type list length does not match the interior size
    InvalidInput {
        /// Number of interior cells (`play_width * play_height`)
        expected: usize,
        /// Number of tags supplied
        actual: usize,
    },

    /// Interior cells were already populated by an earlier `init`
    AlreadyInitialized,

    /// Elimination attempted between cells with differing tags
    ///
    /// Also raised when exactly one of the two cells is empty.
    TypeMismatch {
        /// First cell of the attempted link
        first: Position,
        /// Second cell of the attempted link
        second: Position,
    },

    /// Elimination or reachability query on a cell that holds no tile
    EmptyCellOperation {
        /// The empty cell
        position: Position,
    },

    /// A cell was asked to link with itself
    SelfLink {
        /// The repeated cell
        position: Position,
    },

    /// A full solver pass over every active group eliminated nothing
    ///
    /// This is an expected outcome of the greedy strategy, not a crash.
    Unsolvable {
        /// Pass index (1-based) that made no progress
        pass: usize,
        /// Moves committed before the stall
        moves_made: usize,
        /// Tiles still on the board
        remaining_tiles: usize,
        /// Tags left with an odd number of tiles, which can never clear
        unpaired_tags: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
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

    /// Failed to encode or save the replay animation
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// The global logger could not be installed
    Logging {
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { expected, actual } => {
                write!(
                    f,
                    "Invalid input: expected {expected} tags for the play area, got {actual}"
                )
            }
            Self::AlreadyInitialized => {
                write!(f, "Grid interior has already been initialized")
            }
            Self::TypeMismatch { first, second } => {
                write!(f, "Cannot link {first} and {second}: tile types differ")
            }
            Self::EmptyCellOperation { position } => {
                write!(f, "Cell {position} is empty")
            }
            Self::SelfLink { position } => {
                write!(f, "Cell {position} cannot be linked with itself")
            }
            Self::Unsolvable {
                pass,
                moves_made,
                remaining_tiles,
                unpaired_tags,
            } => {
                write!(
                    f,
                    "Board unsolvable by greedy strategy: pass {pass} made no progress \
                     after {moves_made} moves ({remaining_tiles} tiles remain, \
                     {unpaired_tags} unpaired tags)"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
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
                    "Failed to export replay to '{}': {source}",
                    path.display()
                )
            }
            Self::Logging { reason } => {
                write!(f, "Failed to initialize logging: {reason}")
            }
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for puzzle results
pub type Result<T> = std::result::Result<T, PuzzleError>;

impl From<std::io::Error> for PuzzleError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<log::SetLoggerError> for PuzzleError {
    fn from(err: log::SetLoggerError) -> Self {
        Self::Logging {
            reason: err.to_string(),
        }
    }
}

impl PuzzleError {
    /// Check whether this error is the greedy solver's stall outcome
    pub const fn is_unsolvable(&self) -> bool {
        matches!(self, Self::Unsolvable { .. })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PuzzleError {
    PuzzleError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error bound to a concrete path
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> PuzzleError {
    PuzzleError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
