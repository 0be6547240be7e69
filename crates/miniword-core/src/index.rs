//! Per-puzzle clue index.
//!
//! The index is built once per puzzle load and answers two questions for the
//! navigation engine: "where does clue N start in direction D?" and "which
//! clue comes before or after clue N in direction D?". Clue order is the
//! ascending numeric order of each direction's clue list.

use std::collections::BTreeMap;

use crate::{ClueNumber, Direction, Position, Puzzle};

/// Start cells recorded for a single clue number.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WordStarts {
    /// Start of the across word, if the number starts one.
    pub across: Option<Position>,
    /// Start of the down word, if the number starts one.
    pub down: Option<Position>,
}

impl WordStarts {
    /// Returns the start for one direction.
    #[must_use]
    pub const fn get(self, direction: Direction) -> Option<Position> {
        match direction {
            Direction::Across => self.across,
            Direction::Down => self.down,
        }
    }

    fn slot_mut(&mut self, direction: Direction) -> &mut Option<Position> {
        match direction {
            Direction::Across => &mut self.across,
            Direction::Down => &mut self.down,
        }
    }
}

/// Derived lookup tables for a [`Puzzle`].
///
/// # Examples
///
/// ```
/// use miniword_core::{ClueIndex, ClueNumber, Direction, Position, Puzzle, catalog};
///
/// let puzzle = Puzzle::new(catalog::builtin().remove(0))?;
/// let index = ClueIndex::build(&puzzle);
///
/// let four = ClueNumber::new(4).unwrap();
/// assert_eq!(index.start(four, Direction::Across), Some(Position::new(2, 0)));
/// assert_eq!(index.start(four, Direction::Down), None);
/// assert_eq!(index.next(four, Direction::Across), ClueNumber::new(6));
/// # Ok::<(), miniword_core::PuzzleError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClueIndex {
    starts: BTreeMap<ClueNumber, WordStarts>,
    across: Vec<ClueNumber>,
    down: Vec<ClueNumber>,
}

impl ClueIndex {
    /// Scans the grid for word starts and sorts each direction's clue numbers.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if a numbered cell starts no word. [`Puzzle::new`]
    /// already rejects such data.
    #[must_use]
    pub fn build(puzzle: &Puzzle) -> Self {
        let mut starts: BTreeMap<ClueNumber, WordStarts> = BTreeMap::new();
        for pos in Position::ALL {
            let Some(number) = puzzle.number(pos) else {
                continue;
            };
            let entry = starts.entry(number).or_default();
            for direction in Direction::ALL {
                if puzzle.is_word_start(pos, direction) {
                    *entry.slot_mut(direction) = Some(pos);
                }
            }
            debug_assert!(
                *entry != WordStarts::default(),
                "number {number} at {pos} starts no word"
            );
        }

        let sorted = |direction: Direction| {
            let mut numbers: Vec<_> = puzzle
                .clues(direction)
                .iter()
                .map(|clue| clue.number)
                .collect();
            numbers.sort_unstable();
            numbers
        };

        let index = Self {
            starts,
            across: sorted(Direction::Across),
            down: sorted(Direction::Down),
        };
        log::debug!(
            "built clue index: across={:?} down={:?}",
            index.across,
            index.down
        );
        index
    }

    /// Returns the start cells recorded for a number.
    #[must_use]
    pub fn starts(&self, number: ClueNumber) -> WordStarts {
        self.starts.get(&number).copied().unwrap_or_default()
    }

    /// Returns the first cell of the word `number` in `direction`.
    #[must_use]
    pub fn start(&self, number: ClueNumber, direction: Direction) -> Option<Position> {
        self.starts(number).get(direction)
    }

    /// Returns the ascending clue numbers of one direction.
    #[must_use]
    pub fn sequence(&self, direction: Direction) -> &[ClueNumber] {
        match direction {
            Direction::Across => &self.across,
            Direction::Down => &self.down,
        }
    }

    /// Returns the clue after `number` in `direction`'s sequence.
    ///
    /// Returns `None` if `number` is the last clue or not in the sequence.
    #[must_use]
    pub fn next(&self, number: ClueNumber, direction: Direction) -> Option<ClueNumber> {
        let sequence = self.sequence(direction);
        let at = sequence.iter().position(|&n| n == number)?;
        sequence.get(at + 1).copied()
    }

    /// Returns the clue before `number` in `direction`'s sequence.
    ///
    /// Returns `None` if `number` is the first clue or not in the sequence.
    #[must_use]
    pub fn previous(&self, number: ClueNumber, direction: Direction) -> Option<ClueNumber> {
        let sequence = self.sequence(direction);
        let at = sequence.iter().position(|&n| n == number)?;
        at.checked_sub(1).map(|i| sequence[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn number(n: u8) -> ClueNumber {
        ClueNumber::new(n).unwrap()
    }

    fn mini_index() -> (Puzzle, ClueIndex) {
        let puzzle = Puzzle::new(catalog::builtin().remove(0)).unwrap();
        let index = ClueIndex::build(&puzzle);
        (puzzle, index)
    }

    #[test]
    fn test_sequences_are_ascending() {
        let (_, index) = mini_index();
        assert_eq!(
            index.sequence(Direction::Across),
            [number(1), number(4), number(6)]
        );
        assert_eq!(
            index.sequence(Direction::Down),
            [number(1), number(2), number(3)]
        );
    }

    #[test]
    fn test_shared_number_records_both_starts() {
        let (_, index) = mini_index();
        assert_eq!(
            index.starts(number(1)),
            WordStarts {
                across: Some(Position::new(1, 1)),
                down: Some(Position::new(1, 1)),
            }
        );
        assert_eq!(index.start(number(6), Direction::Down), None);
        assert_eq!(index.starts(number(9)), WordStarts::default());
    }

    #[test]
    fn test_neighbours_at_sequence_edges() {
        let (_, index) = mini_index();
        assert_eq!(index.previous(number(1), Direction::Across), None);
        assert_eq!(index.next(number(6), Direction::Across), None);
        assert_eq!(index.next(number(1), Direction::Down), Some(number(2)));
        assert_eq!(index.previous(number(3), Direction::Down), Some(number(2)));
        // Number 6 has no down clue.
        assert_eq!(index.next(number(6), Direction::Down), None);
    }

    #[test]
    fn test_every_indexed_start_is_located_by_the_word_locator() {
        for data in catalog::builtin() {
            let puzzle = Puzzle::new(data).unwrap();
            let index = ClueIndex::build(&puzzle);
            for direction in Direction::ALL {
                for &number in index.sequence(direction) {
                    let start = index.start(number, direction).unwrap();
                    assert_eq!(puzzle.find_word_start(start, direction), Some(number));
                    assert_eq!(puzzle.word_start_position(number, direction), Some(start));
                }
            }
        }
    }
}
