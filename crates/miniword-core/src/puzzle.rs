//! Puzzle definitions and their validated form.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{
    CellKind, Clue, ClueId, ClueNumber, Direction, Position, PuzzleError, containers::Array25,
    position::GRID_SIZE,
};

/// Character marking a blocked cell in [`PuzzleData::answers`] rows.
pub const BLOCKED_ANSWER: char = '.';

/// A raw puzzle definition, as authored.
///
/// This is the serializable form; it is checked and converted into a
/// [`Puzzle`] by [`Puzzle::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleData {
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// Occupancy rows: `0` for blocked, `1` for open.
    pub grid: Vec<Vec<u8>>,
    /// Printed numbers: `0` for none.
    pub numbers: Vec<Vec<u8>>,
    /// Answer rows, one uppercase letter per open cell and [`BLOCKED_ANSWER`]
    /// for blocked cells.
    pub answers: Vec<String>,
    /// Across clues in any order.
    pub across: Vec<ClueData>,
    /// Down clues in any order.
    pub down: Vec<ClueData>,
}

/// A raw clue entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueData {
    /// Clue number.
    pub number: u8,
    /// Clue text.
    pub clue: String,
    /// Hint text.
    pub hint: String,
}

/// A validated, immutable 5×5 crossword.
///
/// Construction guarantees that a cell carries a number exactly when it
/// starts an across or down word, that every word has a clue and every clue
/// a word, and that every open cell has an uppercase answer letter.
///
/// # Examples
///
/// ```
/// use miniword_core::{Direction, Position, Puzzle, catalog};
///
/// let puzzle = Puzzle::new(catalog::builtin().remove(0))?;
/// let cross = puzzle.words_at(Position::new(1, 1));
/// assert_eq!(cross.across.map(|n| n.get()), Some(1));
/// assert_eq!(cross.down.map(|n| n.get()), Some(1));
/// assert_eq!(puzzle.answer(Position::new(2, 0)), Some('M'));
/// assert_eq!(puzzle.clues(Direction::Across).len(), 3);
/// # Ok::<(), miniword_core::PuzzleError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    title: String,
    cells: Array25<CellKind>,
    numbers: Array25<Option<ClueNumber>>,
    answers: Array25<Option<char>>,
    across: Vec<Clue>,
    down: Vec<Clue>,
}

fn read_matrix<T: Copy>(field: &'static str, rows: &[Vec<T>]) -> Result<Array25<T>, PuzzleError> {
    let size = usize::from(GRID_SIZE);
    if rows.len() != size || rows.iter().any(|row| row.len() != size) {
        return Err(PuzzleError::GridShape { field });
    }
    Ok(Array25::from_fn(|pos| {
        rows[usize::from(pos.row())][usize::from(pos.col())]
    }))
}

impl Puzzle {
    /// Validates a raw definition.
    ///
    /// # Errors
    ///
    /// Returns the first [`PuzzleError`] found: malformed matrices first, then
    /// answers, numbering, and finally the clue lists.
    pub fn new(data: PuzzleData) -> Result<Self, PuzzleError> {
        let PuzzleData {
            title,
            grid,
            numbers,
            answers,
            across,
            down,
        } = data;

        let grid = read_matrix("grid", &grid)?;
        let raw_numbers = read_matrix("numbers", &numbers)?;
        let answer_rows: Vec<Vec<char>> = answers.iter().map(|row| row.chars().collect()).collect();
        let raw_answers = read_matrix("answers", &answer_rows)?;

        let mut cells = Array25::default();
        let mut answers = Array25::default();
        let mut numbers = Array25::default();
        let mut seen = BTreeSet::new();
        for pos in Position::ALL {
            let value = grid[pos];
            let kind =
                CellKind::from_raw(value).ok_or(PuzzleError::InvalidCellValue { pos, value })?;
            cells[pos] = kind;

            answers[pos] = match (kind, raw_answers[pos]) {
                (CellKind::Open, letter) if letter.is_alphabetic() && letter.is_uppercase() => {
                    Some(letter)
                }
                (CellKind::Blocked, BLOCKED_ANSWER) => None,
                _ => return Err(PuzzleError::AnswerMismatch { pos }),
            };

            if let Some(number) = ClueNumber::new(raw_numbers[pos]) {
                if kind.is_blocked() {
                    return Err(PuzzleError::NumberOnBlockedCell { pos, number });
                }
                if !seen.insert(number) {
                    return Err(PuzzleError::DuplicateNumber { number });
                }
                numbers[pos] = Some(number);
            }
        }

        let mut puzzle = Self {
            title,
            cells,
            numbers,
            answers,
            across: Vec::new(),
            down: Vec::new(),
        };
        puzzle.check_numbering()?;
        puzzle.across = puzzle.read_clues(Direction::Across, across)?;
        puzzle.down = puzzle.read_clues(Direction::Down, down)?;
        Ok(puzzle)
    }

    fn check_numbering(&self) -> Result<(), PuzzleError> {
        for pos in Position::ALL {
            let starts_word = Direction::ALL
                .into_iter()
                .any(|direction| self.is_word_start(pos, direction));
            match (self.numbers[pos], starts_word) {
                (None, true) => return Err(PuzzleError::MissingNumber { pos }),
                (Some(number), false) => {
                    return Err(PuzzleError::NumberWithoutWord { pos, number });
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn read_clues(
        &self,
        direction: Direction,
        entries: Vec<ClueData>,
    ) -> Result<Vec<Clue>, PuzzleError> {
        let mut clues: Vec<Clue> = Vec::with_capacity(entries.len());
        for ClueData { number, clue, hint } in entries {
            let number =
                ClueNumber::new(number).ok_or(PuzzleError::InvalidClueNumber { direction })?;
            if clues.iter().any(|c| c.number == number) {
                return Err(PuzzleError::DuplicateClue { number, direction });
            }
            if self.word_start_position(number, direction).is_none() {
                return Err(PuzzleError::ClueWithoutWord { number, direction });
            }
            clues.push(Clue {
                number,
                text: clue,
                hint,
            });
        }

        for pos in Position::ALL {
            if let Some(number) = self.numbers[pos]
                && self.is_word_start(pos, direction)
                && !clues.iter().any(|c| c.number == number)
            {
                return Err(PuzzleError::WordWithoutClue { number, direction });
            }
        }

        clues.sort_by_key(|c| c.number);
        Ok(clues)
    }

    /// Returns the display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns whether a cell takes a letter.
    #[must_use]
    pub fn is_open(&self, pos: Position) -> bool {
        self.cells[pos].is_open()
    }

    /// Returns the number printed in a cell, if any.
    #[must_use]
    pub fn number(&self, pos: Position) -> Option<ClueNumber> {
        self.numbers[pos]
    }

    /// Returns the canonical letter of an open cell.
    #[must_use]
    pub fn answer(&self, pos: Position) -> Option<char> {
        self.answers[pos]
    }

    /// Returns the clues of one direction, sorted by ascending number.
    #[must_use]
    pub fn clues(&self, direction: Direction) -> &[Clue] {
        match direction {
            Direction::Across => &self.across,
            Direction::Down => &self.down,
        }
    }

    /// Looks up a single clue.
    #[must_use]
    pub fn clue(&self, id: ClueId) -> Option<&Clue> {
        self.clues(id.direction)
            .iter()
            .find(|clue| clue.number == id.number)
    }

    /// Returns all open positions in row-major order.
    pub fn open_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL.into_iter().filter(|&pos| self.is_open(pos))
    }
}
