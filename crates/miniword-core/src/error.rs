use crate::{ClueNumber, Direction, Position};

/// Reasons a puzzle definition is rejected at load time.
///
/// Every variant names the first defect found; a rejected puzzle is never
/// partially loaded.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PuzzleError {
    /// A matrix does not have exactly five rows of five entries.
    #[display("{field} must be a 5x5 matrix")]
    GridShape {
        /// Name of the offending matrix.
        field: &'static str,
    },
    /// A grid entry is neither `0` (blocked) nor `1` (open).
    #[display("invalid grid value {value} at {pos}")]
    InvalidCellValue {
        /// Offending cell.
        pos: Position,
        /// Raw value found.
        value: u8,
    },
    /// An open cell lacks a single uppercase letter, or a blocked cell has one.
    #[display("answer at {pos} does not match the cell")]
    AnswerMismatch {
        /// Offending cell.
        pos: Position,
    },
    /// A clue number is printed on a blocked cell.
    #[display("number {number} is placed on blocked cell {pos}")]
    NumberOnBlockedCell {
        /// Offending cell.
        pos: Position,
        /// The misplaced number.
        number: ClueNumber,
    },
    /// The same number is printed on more than one cell.
    #[display("number {number} appears more than once")]
    DuplicateNumber {
        /// The repeated number.
        number: ClueNumber,
    },
    /// A cell starts a word but carries no number.
    #[display("word start at {pos} has no number")]
    MissingNumber {
        /// Offending cell.
        pos: Position,
    },
    /// A numbered cell starts no word in either direction.
    #[display("number {number} at {pos} does not start a word")]
    NumberWithoutWord {
        /// Offending cell.
        pos: Position,
        /// The stray number.
        number: ClueNumber,
    },
    /// A clue list contains the number `0`.
    #[display("{direction} clue list contains number 0")]
    InvalidClueNumber {
        /// The clue list's direction.
        direction: Direction,
    },
    /// A clue list mentions the same number twice.
    #[display("{direction} clue {number} is listed more than once")]
    DuplicateClue {
        /// The repeated number.
        number: ClueNumber,
        /// The clue list's direction.
        direction: Direction,
    },
    /// A clue refers to a number that starts no word in its direction.
    #[display("{direction} clue {number} has no word in the grid")]
    ClueWithoutWord {
        /// The clue number.
        number: ClueNumber,
        /// The clue list's direction.
        direction: Direction,
    },
    /// A word in the grid has no clue in its direction's list.
    #[display("{direction} word {number} has no clue")]
    WordWithoutClue {
        /// The word's number.
        number: ClueNumber,
        /// The word's direction.
        direction: Direction,
    },
}
