use miniword_core::{Position, Puzzle};

use crate::{
    Catalog, ClickOutcome, EditOutcome, Entries, GameError, Hint, KeyOutcome, NavigationKey,
    Session, Verification,
};

/// The game as seen by a renderer: a catalog, the active puzzle index, and
/// the session for that puzzle.
///
/// Switching puzzles discards the previous session entirely.
///
/// # Examples
///
/// ```
/// use miniword_core::Position;
/// use miniword_game::{Crossword, NavigationKey};
///
/// let mut game = Crossword::builtin()?;
/// game.on_cell_clicked(Position::new(1, 1));
/// let outcome = game.on_directional_key(Position::new(1, 1), NavigationKey::Left);
/// assert_eq!(outcome.next_focus, None);
///
/// game.next_puzzle()?;
/// assert_eq!(game.active_index(), 1);
/// assert!(game.session().selection().is_unselected());
/// # Ok::<(), miniword_game::GameError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Crossword {
    catalog: Catalog,
    active: usize,
    session: Session,
}

impl Crossword {
    /// Starts playing puzzle `index` of `catalog`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::PuzzleIndexOutOfRange`] if `index` is past the end
    /// of the catalog.
    pub fn new(catalog: Catalog, index: usize) -> Result<Self, GameError> {
        let session = Session::new(Self::puzzle_at(&catalog, index)?.clone());
        log::info!("loaded puzzle {index}: {}", session.puzzle().title());
        Ok(Self {
            catalog,
            active: index,
            session,
        })
    }

    /// Starts playing the first built-in puzzle.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidPuzzle`] if a built-in definition is
    /// malformed.
    pub fn builtin() -> Result<Self, GameError> {
        Self::new(Catalog::builtin()?, 0)
    }

    fn puzzle_at(catalog: &Catalog, index: usize) -> Result<&Puzzle, GameError> {
        catalog.get(index).ok_or(GameError::PuzzleIndexOutOfRange {
            index,
            len: catalog.len(),
        })
    }

    /// Returns the catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns the index of the puzzle being played.
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Returns the session of the puzzle being played.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Replaces the session with a fresh one for puzzle `index` and returns
    /// its empty grid.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::PuzzleIndexOutOfRange`] if `index` is past the end
    /// of the catalog; the current session is kept.
    pub fn load_puzzle(&mut self, index: usize) -> Result<&Entries, GameError> {
        let puzzle = Self::puzzle_at(&self.catalog, index)?.clone();
        self.session = Session::new(puzzle);
        self.active = index;
        log::info!("loaded puzzle {index}: {}", self.session.puzzle().title());
        Ok(self.session.entries())
    }

    /// Loads the puzzle after the active one, wrapping to the first.
    ///
    /// # Errors
    ///
    /// Never fails for a catalog built through [`Catalog`]'s constructors.
    pub fn next_puzzle(&mut self) -> Result<&Entries, GameError> {
        let next = (self.active + 1) % self.catalog.len();
        self.load_puzzle(next)
    }

    /// See [`Session::on_cell_edited`].
    ///
    /// # Errors
    ///
    /// Returns [`GameError::BlockedCell`] if `pos` is blocked.
    pub fn on_cell_edited(&mut self, pos: Position, text: &str) -> Result<EditOutcome, GameError> {
        self.session.on_cell_edited(pos, text)
    }

    /// See [`Session::on_cell_clicked`].
    pub fn on_cell_clicked(&mut self, pos: Position) -> ClickOutcome {
        self.session.on_cell_clicked(pos)
    }

    /// See [`Session::on_directional_key`].
    pub fn on_directional_key(&mut self, pos: Position, key: NavigationKey) -> KeyOutcome {
        self.session.on_directional_key(pos, key)
    }

    /// See [`Session::request_hint`].
    pub fn request_hint(&mut self) -> Option<Hint> {
        self.session.request_hint()
    }

    /// See [`Session::verify_now`].
    #[must_use]
    pub fn verify_now(&self) -> Verification {
        self.session.verify_now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_index() {
        let catalog = Catalog::builtin().unwrap();
        let len = catalog.len();
        assert!(matches!(
            Crossword::new(catalog, len),
            Err(GameError::PuzzleIndexOutOfRange { index, len: l }) if index == len && l == len
        ));

        let mut game = Crossword::builtin().unwrap();
        game.on_cell_edited(Position::new(2, 0), "M").unwrap();
        assert_eq!(
            game.load_puzzle(99).err(),
            Some(GameError::PuzzleIndexOutOfRange { index: 99, len })
        );
        assert_eq!(game.active_index(), 0);
        assert_eq!(game.session().entries().filled_count(), 1);
    }

    #[test]
    fn test_next_puzzle_wraps() {
        let mut game = Crossword::builtin().unwrap();
        let len = game.catalog().len();
        for expected in (1..len).chain([0]) {
            game.next_puzzle().unwrap();
            assert_eq!(game.active_index(), expected);
        }
    }
}
