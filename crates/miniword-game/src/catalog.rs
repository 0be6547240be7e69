use miniword_core::{Puzzle, PuzzleData, catalog};

use crate::GameError;

/// An ordered, non-empty list of validated puzzles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    puzzles: Vec<Puzzle>,
}

impl Catalog {
    /// Creates a catalog from already validated puzzles.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::EmptyCatalog`] if `puzzles` is empty.
    pub fn new(puzzles: Vec<Puzzle>) -> Result<Self, GameError> {
        if puzzles.is_empty() {
            return Err(GameError::EmptyCatalog);
        }
        Ok(Self { puzzles })
    }

    /// Validates raw definitions and collects them into a catalog.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidPuzzle`] for the first definition that
    /// fails validation, or [`GameError::EmptyCatalog`] if `data` is empty.
    pub fn from_data<I>(data: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = PuzzleData>,
    {
        let puzzles = data
            .into_iter()
            .enumerate()
            .map(|(index, data)| {
                Puzzle::new(data).map_err(|source| GameError::InvalidPuzzle { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(puzzles)
    }

    /// Loads the puzzles shipped with the game.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidPuzzle`] if a built-in definition is
    /// malformed.
    pub fn builtin() -> Result<Self, GameError> {
        Self::from_data(catalog::builtin())
    }

    /// Returns the number of puzzles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    /// Returns whether there are no puzzles; never true for a constructed catalog.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }

    /// Returns the puzzle at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Puzzle> {
        self.puzzles.get(index)
    }

    /// Iterates over the puzzles in play order.
    pub fn iter(&self) -> impl Iterator<Item = &Puzzle> {
        self.puzzles.iter()
    }
}

#[cfg(test)]
mod tests {
    use miniword_core::PuzzleError;

    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), catalog::builtin().len());
        assert!(!catalog.is_empty());
        assert_eq!(catalog.get(0).map(Puzzle::title), Some("Mini 1: Mares"));
        assert!(catalog.get(catalog.len()).is_none());
    }

    #[test]
    fn test_empty_catalog_is_rejected() {
        assert_eq!(Catalog::new(Vec::new()), Err(GameError::EmptyCatalog));
        assert_eq!(Catalog::from_data(Vec::new()), Err(GameError::EmptyCatalog));
    }

    #[test]
    fn test_invalid_entry_reports_its_index() {
        let mut data = catalog::builtin();
        data[1].grid.pop();
        assert_eq!(
            Catalog::from_data(data),
            Err(GameError::InvalidPuzzle {
                index: 1,
                source: PuzzleError::GridShape { field: "grid" },
            })
        );
    }
}
