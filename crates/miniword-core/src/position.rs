//! Grid coordinates.

use std::fmt::{self, Display};

use crate::Direction;

/// Number of rows and columns in a mini puzzle grid.
pub const GRID_SIZE: u8 = 5;

/// Number of cells in a mini puzzle grid.
pub const CELL_COUNT: usize = (GRID_SIZE as usize) * (GRID_SIZE as usize);

/// A cell coordinate on the 5×5 grid.
///
/// Rows grow downwards and columns grow to the right, both starting at 0.
///
/// # Examples
///
/// ```
/// use miniword_core::{Direction, Position};
///
/// let pos = Position::new(2, 0);
/// assert_eq!(pos.forward(Direction::Across), Some(Position::new(2, 1)));
/// assert_eq!(pos.backward(Direction::Across), None);
/// assert_eq!(pos.forward(Direction::Down), Some(Position::new(3, 0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// All positions in row-major order.
    pub const ALL: [Self; CELL_COUNT] = {
        let mut all = [Self { row: 0, col: 0 }; CELL_COUNT];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < CELL_COUNT {
            all[i] = Self {
                row: (i / GRID_SIZE as usize) as u8,
                col: (i % GRID_SIZE as usize) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a new position.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-4.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < GRID_SIZE && col < GRID_SIZE);
        Self { row, col }
    }

    /// Creates a position from unchecked coordinates, returning `None` if off-grid.
    #[must_use]
    pub fn try_new(row: usize, col: usize) -> Option<Self> {
        let row = u8::try_from(row).ok().filter(|&r| r < GRID_SIZE)?;
        let col = u8::try_from(col).ok().filter(|&c| c < GRID_SIZE)?;
        Some(Self { row, col })
    }

    /// Returns the row (0-4).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column (0-4).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the row-major index of this position (0-24).
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * GRID_SIZE as usize + self.col as usize
    }

    /// Returns the neighbouring position one step ahead along `direction`.
    ///
    /// Returns `None` at the grid edge.
    #[must_use]
    pub fn forward(self, direction: Direction) -> Option<Self> {
        match direction {
            Direction::Across => self.right(),
            Direction::Down => self.down(),
        }
    }

    /// Returns the neighbouring position one step behind along `direction`.
    ///
    /// Returns `None` at the grid edge.
    #[must_use]
    pub fn backward(self, direction: Direction) -> Option<Self> {
        match direction {
            Direction::Across => self.left(),
            Direction::Down => self.up(),
        }
    }

    /// Returns the position above, if any.
    #[must_use]
    pub fn up(self) -> Option<Self> {
        (self.row > 0).then(|| Self::new(self.row - 1, self.col))
    }

    /// Returns the position below, if any.
    #[must_use]
    pub fn down(self) -> Option<Self> {
        (self.row + 1 < GRID_SIZE).then(|| Self::new(self.row + 1, self.col))
    }

    /// Returns the position to the left, if any.
    #[must_use]
    pub fn left(self) -> Option<Self> {
        (self.col > 0).then(|| Self::new(self.row, self.col - 1))
    }

    /// Returns the position to the right, if any.
    #[must_use]
    pub fn right(self) -> Option<Self> {
        (self.col + 1 < GRID_SIZE).then(|| Self::new(self.row, self.col + 1))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_row_major() {
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.index(), i);
        }
        assert_eq!(Position::ALL[7], Position::new(1, 2));
    }

    #[test]
    fn test_try_new_rejects_off_grid() {
        assert_eq!(Position::try_new(4, 4), Some(Position::new(4, 4)));
        assert_eq!(Position::try_new(5, 0), None);
        assert_eq!(Position::try_new(0, 300), None);
    }

    #[test]
    fn test_neighbours_stop_at_edges() {
        let corner = Position::new(0, 4);
        assert_eq!(corner.up(), None);
        assert_eq!(corner.right(), None);
        assert_eq!(corner.left(), Some(Position::new(0, 3)));
        assert_eq!(corner.down(), Some(Position::new(1, 4)));
        assert_eq!(Position::new(4, 0).backward(Direction::Across), None);
        assert_eq!(Position::new(4, 0).forward(Direction::Down), None);
    }
}
