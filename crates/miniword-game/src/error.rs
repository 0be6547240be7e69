use miniword_core::{Position, PuzzleError};

/// Errors returned by game operations.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// A catalog entry failed validation.
    #[display("puzzle {index} is invalid: {source}")]
    InvalidPuzzle {
        /// Position of the entry in the catalog.
        index: usize,
        /// The validation failure.
        source: PuzzleError,
    },
    /// A puzzle index past the end of the catalog was requested.
    #[display("puzzle index {index} is out of range (catalog has {len} puzzles)")]
    PuzzleIndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of puzzles in the catalog.
        len: usize,
    },
    /// A catalog was created without puzzles.
    #[display("catalog has no puzzles")]
    EmptyCatalog,
    /// An edit was addressed to a blocked cell.
    #[display("cell {pos} is blocked")]
    BlockedCell {
        /// Offending cell.
        pos: Position,
    },
}
