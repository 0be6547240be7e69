//! Fixed-size per-cell storage.

use std::ops::{Index, IndexMut};

use crate::position::{CELL_COUNT, Position};

/// A 25-element array indexed by [`Position`].
///
/// # Examples
///
/// ```
/// use miniword_core::{Position, containers::Array25};
///
/// let mut grid = Array25::from_fn(|pos| pos.row() + pos.col());
/// assert_eq!(grid[Position::new(2, 3)], 5);
///
/// grid[Position::new(0, 0)] = 9;
/// assert_eq!(grid.iter().next(), Some((Position::new(0, 0), &9)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Array25<T> {
    array: [T; CELL_COUNT],
}

impl<T> Array25<T> {
    /// Builds an array by calling `f` for every position in row-major order.
    #[must_use]
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(Position) -> T,
    {
        Self {
            array: std::array::from_fn(|i| f(Position::ALL[i])),
        }
    }

    /// Returns an iterator over `(position, value)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &T)> {
        Position::ALL.into_iter().zip(&self.array)
    }
}

impl<T: Default> Default for Array25<T> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T> Index<Position> for Array25<T> {
    type Output = T;

    #[inline]
    fn index(&self, pos: Position) -> &Self::Output {
        &self.array[pos.index()]
    }
}

impl<T> IndexMut<Position> for Array25<T> {
    #[inline]
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        &mut self.array[pos.index()]
    }
}
