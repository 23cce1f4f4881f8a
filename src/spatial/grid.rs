//! Padded tile grid with an always-empty border ring
//!
//! The play area is surrounded by a one-cell border so that link paths can
//! turn along the outside of the board. Interior cells are populated exactly
//! once and afterwards only ever transition from occupied to empty.

use std::fmt;

use ndarray::Array2;

use crate::algorithm::connectivity;
use crate::io::error::{PuzzleError, Result};
use crate::spatial::cell::{Cell, Position};

/// Tile grid holding the play area plus its empty border
#[derive(Debug, Clone)]
pub struct Grid<T> {
    /// Cells indexed `[x, y]`, sized `(play_width + 2, play_height + 2)`
    cells: Array2<Cell<T>>,
    play_width: usize,
    play_height: usize,
    initialized: bool,
}

impl<T> Grid<T> {
    /// Create an all-empty grid for a `play_width` by `play_height` play area
    pub fn new(play_width: usize, play_height: usize) -> Self {
        Self {
            cells: Array2::default((play_width + 2, play_height + 2)),
            play_width,
            play_height,
            initialized: false,
        }
    }

    /// Create a grid and populate every interior cell with a tag
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the number of tags differs from
    /// `play_width * play_height`
    pub fn with_tags<I>(play_width: usize, play_height: usize, tags: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut grid = Self::new(play_width, play_height);
        grid.init(tags.into_iter().map(Some))?;
        Ok(grid)
    }

    /// Populate the interior from a flat tag list
    ///
    /// Tags are consumed with `x` in the outer loop and `y` in the inner loop.
    /// `None` marks a cell that starts empty.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyInitialized` on a second call, and `InvalidInput` if the
    /// number of tags differs from `play_width * play_height`. The grid is left
    /// untouched on error.
    pub fn init<I>(&mut self, tags: I) -> Result<()>
    where
        I: IntoIterator<Item = Option<T>>,
    {
        if self.initialized {
            return Err(PuzzleError::AlreadyInitialized);
        }

        let tags: Vec<Option<T>> = tags.into_iter().collect();
        let expected = self.interior_len();
        if tags.len() != expected {
            return Err(PuzzleError::InvalidInput {
                expected,
                actual: tags.len(),
            });
        }

        let positions: Vec<Position> = self.interior_positions().collect();
        for (position, tag) in positions.into_iter().zip(tags) {
            if let Some(cell) = self.cells.get_mut(position.index()) {
                *cell = Cell::from(tag);
            }
        }
        self.initialized = true;

        log::debug!(
            "initialized {}x{} play area with {} tiles",
            self.play_width,
            self.play_height,
            self.occupied_count()
        );
        Ok(())
    }

    /// Width of the play area, excluding the border
    pub const fn play_width(&self) -> usize {
        self.play_width
    }

    /// Height of the play area, excluding the border
    pub const fn play_height(&self) -> usize {
        self.play_height
    }

    /// Padded extent along `x`
    pub const fn width(&self) -> usize {
        self.play_width + 2
    }

    /// Padded extent along `y`
    pub const fn height(&self) -> usize {
        self.play_height + 2
    }

    /// Number of interior cells
    pub const fn interior_len(&self) -> usize {
        self.play_width * self.play_height
    }

    /// Check whether a position lies inside the padded grid
    pub const fn contains(&self, position: Position) -> bool {
        position.x < self.width() && position.y < self.height()
    }

    /// Check whether a position lies inside the play area
    pub const fn is_interior(&self, position: Position) -> bool {
        position.x >= 1
            && position.x <= self.play_width
            && position.y >= 1
            && position.y <= self.play_height
    }

    /// Borrow the cell at a position, `None` outside the padded grid
    pub fn cell(&self, position: Position) -> Option<&Cell<T>> {
        self.cells.get(position.index())
    }

    /// Tag at a position; empty cells and positions off the grid read as `None`
    pub fn type_at(&self, position: Position) -> Option<&T> {
        self.cell(position).and_then(Cell::tag)
    }

    /// Check whether a position holds no tile
    pub fn is_empty_at(&self, position: Position) -> bool {
        self.type_at(position).is_none()
    }

    /// Remove the tile at a position, returning its tag
    ///
    /// Clearing an already empty cell is a no-op.
    pub fn clear(&mut self, position: Position) -> Option<T> {
        self.cells.get_mut(position.index()).and_then(Cell::take)
    }

    /// Interior positions, `x` outer and `y` inner
    pub fn interior_positions(&self) -> impl Iterator<Item = Position> + use<T> {
        let play_height = self.play_height;
        (1..=self.play_width)
            .flat_map(move |x| (1..=play_height).map(move |y| Position::new(x, y)))
    }

    /// Number of cells still holding a tile
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Check whether every tile has been eliminated
    pub fn is_cleared(&self) -> bool {
        self.cells.iter().all(Cell::is_empty)
    }
}

impl<T: PartialEq> Grid<T> {
    /// Attempt to link two tiles and eliminate them
    ///
    /// Returns `Ok(true)` and clears both cells when the tiles share a tag and
    /// a path of at most two turns joins them. Returns `Ok(false)` and leaves
    /// the grid untouched when no such path exists.
    ///
    /// # Errors
    ///
    /// - `SelfLink` if `a` and `b` are the same cell
    /// - `TypeMismatch` if the tags differ or exactly one cell is empty
    /// - `EmptyCellOperation` if both cells are empty
    pub fn link(&mut self, a: Position, b: Position) -> Result<bool> {
        if a == b {
            return Err(PuzzleError::SelfLink { position: a });
        }

        match (self.type_at(a), self.type_at(b)) {
            (None, None) => return Err(PuzzleError::EmptyCellOperation { position: a }),
            (Some(first), Some(second)) if first == second => {}
            _ => return Err(PuzzleError::TypeMismatch { first: a, second: b }),
        }

        if !connectivity::linkable(self, a, b) {
            return Ok(false);
        }

        self.clear(a);
        self.clear(b);
        Ok(true)
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.cells.rows() {
            let rendered: Vec<String> = line
                .iter()
                .map(|cell| cell.tag().map_or_else(|| ".".to_string(), ToString::to_string))
                .collect();
            writeln!(f, "{}", rendered.join(" "))?;
        }
        Ok(())
    }
}
