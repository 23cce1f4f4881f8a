//! Cell state and board coordinates

use std::fmt;

/// Coordinates of a cell in the padded grid
///
/// `x` indexes the major axis (one printed line per `x`), `y` the minor axis.
/// The interior spans `1..=play_width` by `1..=play_height`; index `0` and the
/// last index on each axis belong to the empty border ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Major axis coordinate
    pub x: usize,
    /// Minor axis coordinate
    pub y: usize,
}

impl Position {
    /// Create a position from its coordinates
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Index form used for `ndarray` lookups
    pub const fn index(self) -> [usize; 2] {
        [self.x, self.y]
    }
}

impl From<(usize, usize)> for Position {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Contents of a single grid cell
///
/// A cleared cell becomes `Empty` and stays that way for the lifetime of the grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Cell<T> {
    /// No tile; link paths may pass through
    #[default]
    Empty,
    /// A tile bearing a type tag
    Occupied(T),
}

impl<T> Cell<T> {
    /// Check whether the cell holds no tile
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Borrow the tag, if any
    pub const fn tag(&self) -> Option<&T> {
        match self {
            Self::Empty => None,
            Self::Occupied(tag) => Some(tag),
        }
    }

    /// Take the tag out, leaving the cell empty
    pub fn take(&mut self) -> Option<T> {
        match std::mem::take(self) {
            Self::Empty => None,
            Self::Occupied(tag) => Some(tag),
        }
    }
}

impl<T> From<Option<T>> for Cell<T> {
    fn from(tag: Option<T>) -> Self {
        tag.map_or(Self::Empty, Self::Occupied)
    }
}
