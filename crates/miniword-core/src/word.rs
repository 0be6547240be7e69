//! Word locator: which words a cell belongs to, and where they begin and end.

use crate::{ClueNumber, Direction, Position, Puzzle};

/// The across and down words a cell belongs to.
///
/// A cell may belong to none, one, or both. Cells in both are cross cells.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WordMembership {
    /// Number of the across word containing the cell.
    pub across: Option<ClueNumber>,
    /// Number of the down word containing the cell.
    pub down: Option<ClueNumber>,
}

impl WordMembership {
    /// Returns the word number for one direction.
    #[must_use]
    pub const fn get(self, direction: Direction) -> Option<ClueNumber> {
        match direction {
            Direction::Across => self.across,
            Direction::Down => self.down,
        }
    }

    /// Returns whether the cell belongs to both an across and a down word.
    #[must_use]
    pub const fn is_cross(self) -> bool {
        self.across.is_some() && self.down.is_some()
    }

    /// Returns whether the cell belongs to no word at all.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.across.is_none() && self.down.is_none()
    }
}

impl Puzzle {
    /// Returns whether `pos` is the first cell of a word in `direction`.
    ///
    /// The cell must be open, the cell behind it must be blocked or off-grid,
    /// and the cell ahead of it must be open.
    #[must_use]
    pub fn is_word_start(&self, pos: Position, direction: Direction) -> bool {
        self.is_open(pos)
            && !pos
                .backward(direction)
                .is_some_and(|prev| self.is_open(prev))
            && pos
                .forward(direction)
                .is_some_and(|next| self.is_open(next))
    }

    /// Walks backwards from `pos` over open cells and returns the first cell
    /// of the run.
    fn run_start(&self, pos: Position, direction: Direction) -> Position {
        let mut start = pos;
        while let Some(prev) = start.backward(direction)
            && self.is_open(prev)
        {
            start = prev;
        }
        start
    }

    /// Finds the number of the word containing `pos` in `direction`.
    ///
    /// Returns `None` for blocked cells, for runs whose first cell carries no
    /// number, and for isolated single cells.
    ///
    /// # Examples
    ///
    /// ```
    /// use miniword_core::{Direction, Position, Puzzle, catalog};
    ///
    /// let puzzle = Puzzle::new(catalog::builtin().remove(0))?;
    /// let number = puzzle.find_word_start(Position::new(2, 3), Direction::Across);
    /// assert_eq!(number.map(|n| n.get()), Some(4));
    /// assert_eq!(puzzle.find_word_start(Position::new(2, 4), Direction::Down), None);
    /// assert_eq!(puzzle.find_word_start(Position::new(0, 0), Direction::Across), None);
    /// # Ok::<(), miniword_core::PuzzleError>(())
    /// ```
    #[must_use]
    pub fn find_word_start(&self, pos: Position, direction: Direction) -> Option<ClueNumber> {
        if !self.is_open(pos) {
            return None;
        }
        let start = self.run_start(pos, direction);
        let number = self.number(start)?;
        let has_next = start
            .forward(direction)
            .is_some_and(|next| self.is_open(next));
        has_next.then_some(number)
    }

    /// Resolves the across and down words containing `pos`.
    #[must_use]
    pub fn words_at(&self, pos: Position) -> WordMembership {
        WordMembership {
            across: self.find_word_start(pos, Direction::Across),
            down: self.find_word_start(pos, Direction::Down),
        }
    }

    /// Returns the first cell of the word numbered `number` in `direction`.
    #[must_use]
    pub fn word_start_position(&self, number: ClueNumber, direction: Direction) -> Option<Position> {
        Position::ALL
            .into_iter()
            .find(|&pos| self.number(pos) == Some(number) && self.is_word_start(pos, direction))
    }

    /// Walks forward from `start` over open cells and returns the last cell
    /// of the run.
    #[must_use]
    pub fn word_end(&self, start: Position, direction: Direction) -> Position {
        let mut end = start;
        while let Some(next) = end.forward(direction)
            && self.is_open(next)
        {
            end = next;
        }
        end
    }

    /// Returns every cell of the run containing `pos` in `direction`, from
    /// first to last.
    ///
    /// Returns an empty list for blocked cells.
    #[must_use]
    pub fn word_cells(&self, pos: Position, direction: Direction) -> Vec<Position> {
        if !self.is_open(pos) {
            return Vec::new();
        }
        let mut last = self.run_start(pos, direction);
        let mut cells = vec![last];
        while let Some(next) = last.forward(direction)
            && self.is_open(next)
        {
            cells.push(next);
            last = next;
        }
        cells
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::catalog;

    fn puzzles() -> Vec<Puzzle> {
        catalog::builtin()
            .into_iter()
            .map(|data| Puzzle::new(data).unwrap())
            .collect()
    }

    #[test]
    fn test_blocked_cells_belong_to_no_word() {
        for puzzle in puzzles() {
            for pos in Position::ALL.into_iter().filter(|&p| !puzzle.is_open(p)) {
                assert!(puzzle.words_at(pos).is_empty(), "{pos}");
            }
        }
    }

    #[test]
    fn test_cross_cell_membership() {
        let puzzles = puzzles();
        let puzzle = &puzzles[0];
        let words = puzzle.words_at(Position::new(2, 2));
        assert!(words.is_cross());
        assert_eq!(words.across, ClueNumber::new(4));
        assert_eq!(words.down, ClueNumber::new(2));

        let words = puzzle.words_at(Position::new(2, 4));
        assert_eq!(words.across, ClueNumber::new(4));
        assert_eq!(words.down, None);
    }

    #[test]
    fn test_word_cells_and_end() {
        let puzzles = puzzles();
        let puzzle = &puzzles[0];
        assert_eq!(
            puzzle.word_cells(Position::new(3, 3), Direction::Across),
            [Position::new(3, 1), Position::new(3, 2), Position::new(3, 3)]
        );
        assert_eq!(
            puzzle.word_end(Position::new(1, 2), Direction::Down),
            Position::new(3, 2)
        );
        assert!(puzzle.word_cells(Position::new(0, 0), Direction::Down).is_empty());
    }

    #[test]
    fn test_numbers_match_word_starts() {
        for puzzle in puzzles() {
            for pos in Position::ALL {
                let starts = Direction::ALL
                    .into_iter()
                    .filter(|&d| puzzle.is_word_start(pos, d))
                    .count();
                assert_eq!(puzzle.number(pos).is_some(), starts > 0, "{pos}");
            }
        }
    }

    proptest! {
        #[test]
        fn prop_word_start_resolves_to_indexed_start(
            puzzle_index in 0..catalog::builtin().len(),
            cell in 0..crate::position::CELL_COUNT,
            direction in prop::sample::select(Direction::ALL.to_vec()),
        ) {
            let puzzles = puzzles();
            let puzzle = &puzzles[puzzle_index];
            let pos = Position::ALL[cell];
            if let Some(number) = puzzle.find_word_start(pos, direction) {
                let start = puzzle.word_start_position(number, direction);
                prop_assert!(start.is_some());
                let start = start.unwrap();
                prop_assert!(puzzle.word_cells(pos, direction).contains(&pos));
                prop_assert_eq!(puzzle.word_cells(pos, direction)[0], start);
                prop_assert_eq!(puzzle.find_word_start(start, direction), Some(number));
            }
        }
    }
}
