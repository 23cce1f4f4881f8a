//! Connectivity engine and greedy solver for connect-and-eliminate tile puzzles
//!
//! Two tiles with the same tag can be eliminated when a path of empty cells
//! with at most two right-angle turns joins them. The board carries an empty
//! border ring so paths may run around its outside. The solver repeatedly
//! removes linkable pairs in a fixed order and reports `Unsolvable` instead
//! of looping when it runs out of moves.

#![forbid(unsafe_code)]

/// Link reachability, tag grouping and the greedy solver
pub mod algorithm;
/// Errors, configuration, logging and the command-line front end
pub mod io;
/// Grid, cells and board generation
pub mod spatial;

pub use algorithm::solver::{GreedySolver, Move, Solution, solve};
pub use io::error::{PuzzleError, Result};
pub use spatial::{Cell, Grid, Position};
