//! Board representation
//!
//! This module contains the spatial side of the puzzle:
//! - Cell state and coordinates
//! - The padded grid and its mutation rules
//! - Seeded random board generation

/// Cell contents and coordinates
pub mod cell;
/// Seeded random board generation
pub mod generator;
/// Padded tile grid
pub mod grid;

pub use cell::{Cell, Position};
pub use grid::Grid;
