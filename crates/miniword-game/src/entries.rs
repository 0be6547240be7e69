//! The player's letters.

use miniword_core::{Position, containers::Array25};

/// Letters entered by the player, one optional letter per cell.
///
/// Only open cells ever hold a letter; the session rejects edits to blocked
/// cells before they reach this grid.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Entries {
    cells: Array25<Option<char>>,
}

impl Entries {
    /// Creates an empty grid.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the letter in a cell.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<char> {
        self.cells[pos]
    }

    /// Stores a letter, returning the previous one.
    pub(crate) fn set(&mut self, pos: Position, letter: Option<char>) -> Option<char> {
        std::mem::replace(&mut self.cells[pos], letter)
    }

    /// Returns `(position, letter)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Option<char>)> + '_ {
        self.cells.iter().map(|(pos, letter)| (pos, *letter))
    }

    /// Returns the number of cells holding a letter.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|(_, letter)| letter.is_some()).count()
    }
}

/// Turns raw input text into the letter stored for a cell.
///
/// The first non-whitespace character is uppercased; empty or blank input
/// clears the cell.
///
/// ```
/// use miniword_game::normalize_input;
///
/// assert_eq!(normalize_input("m"), Some('M'));
/// assert_eq!(normalize_input(" ñ"), Some('Ñ'));
/// assert_eq!(normalize_input(""), None);
/// ```
#[must_use]
pub fn normalize_input(text: &str) -> Option<char> {
    text.chars()
        .find(|c| !c.is_whitespace())
        .and_then(|c| c.to_uppercase().next())
}
